use crate::types::{Corpus, Variant};

/// Production benchmark table, run in order.
///
/// Each corpus lives in a working directory named after it, fetched and laid
/// out by that directory's `prep` script. The corpus carries the primary
/// language of its targets because the engine requires the language up front;
/// this limits the table to repos that are predominantly one language.
pub static CORPORA: &[Corpus] = &[
    // Corpus { name: "njs", rule_dir: "input/njsscan/njsscan/rules/semantic_grep",
    //          target_dir: "input/juice-shop", language: "js" },
    // Disabled: takes 4+ hours. Re-enable with a reduced target set.
    Corpus {
        name: "big-js",
        rule_dir: "input/rules.yml",
        target_dir: "input/big-js",
        language: "js",
    },
    // Corpus { name: "njsbox", rule_dir: "input/njsscan/njsscan/rules/semantic_grep",
    //          target_dir: "input/dropbox-sdk-js", language: "js" },
    // Disabled: the engine can't run this corpus.
    Corpus {
        name: "zulip",
        rule_dir: "input/rules.yml",
        target_dir: "input/zulip",
        language: "python",
    },
    // The corpora below run curated rulepacks on public repos. For
    // Corpus { name: "$X", .., target_dir: "input/$Y" }, the repo is
    // github.com/$X/$Y.
    Corpus {
        name: "apache",
        rule_dir: "input/django.yml",
        target_dir: "input/libcloud",
        language: "python",
    },
    Corpus {
        name: "dropbox",
        rule_dir: "input/flask.yml",
        target_dir: "input/pytest-flakefinder",
        language: "python",
    },
    Corpus {
        name: "0c34",
        rule_dir: "input/golang.yml",
        target_dir: "input/govwa",
        language: "go",
    },
    Corpus {
        name: "rails",
        rule_dir: "input/ruby.yml",
        target_dir: "input/rails",
        language: "ruby",
    },
    // Corpus { name: "lodash", rule_dir: "input/rules",
    //          target_dir: "input/lodash", language: "js" },
    // Disabled: the engine can't run this corpus.
];

/// Single tiny corpus for smoke-testing the driver (`--dummy`).
pub static DUMMY_CORPORA: &[Corpus] = &[Corpus {
    name: "dummy",
    rule_dir: "input/dummy/rules",
    target_dir: "input/dummy/targets",
    language: "js",
}];

/// Engine configurations to benchmark, run in order for every corpus.
pub static VARIANTS: &[Variant] = &[
    Variant {
        name: "std",
        extra: "",
    },
    Variant {
        name: "no-bloom",
        extra: "-no_bloom_filter",
    },
    Variant {
        name: "filter-irrelevant-rules",
        extra: "-filter_irrelevant_rules",
    },
    Variant {
        name: "filter-rules_no-bloom",
        extra: "-filter_irrelevant_rules -no_bloom_filter",
    },
];
