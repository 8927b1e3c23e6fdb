use libconf::{Config, Setting};

/// The flat configuration with one setting of each scalar kind.
pub const FLAT_CONFIG: &str = "aint: 1;\nastring: \"test\";\nafloat: 1.0;\nabool: true;\n";

/// A single group holding one setting of each scalar kind.
pub const STRUCT_CONFIG: &str =
    "struct: { aint=1; astring=\"test\"; afloat=13.37; abool=true; }";

/// Parses `text` into a new configuration, panicking on malformed input.
pub fn parse_config(text: &str) -> Config {
    text.parse()
        .unwrap_or_else(|err| panic!("failed to parse test configuration: {err}"))
}

pub fn struct_config() -> Config {
    parse_config(STRUCT_CONFIG)
}

/// Looks up a setting that the test expects to exist.
pub fn must_lookup(config: &Config, path: &str) -> Setting {
    config
        .lookup(path)
        .unwrap_or_else(|| panic!("expected setting at '{path}'"))
}

/// Collects the member names of a group in order.
pub fn member_names(group: &Setting) -> Vec<String> {
    group
        .children()
        .iter()
        .filter_map(|child| child.name())
        .collect()
}
