pub mod corpus;
pub mod driver;
pub mod errors;
pub mod report;
pub mod runner;
pub mod types;
