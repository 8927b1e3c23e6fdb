//! Config integration tests
//!
//! End-to-end behaviour of parsing text and operating on the resulting tree
//! through root-relative paths.

use std::io::Write;

use libconf::{Config, Kind, ScalarKind};

use crate::helpers::*;

// ===== PARSE AND TYPED LOOKUP =====

#[test]
fn test_flat_scalars() {
    let config = parse_config(FLAT_CONFIG);

    assert_eq!(config.lookup_int("aint").unwrap(), 1);
    assert_eq!(config.lookup_string("astring").unwrap(), "test");
    assert_eq!(config.lookup_float("afloat").unwrap(), 1.0);
    assert!(config.lookup_bool("abool").unwrap());
}

#[test]
fn test_group_members() {
    let config = struct_config();

    let aint = must_lookup(&config, "struct.aint");
    assert_eq!(aint.kind(), Kind::Int);
    assert_eq!(aint.get_int().unwrap(), 1);

    let astring = must_lookup(&config, "struct")
        .lookup_child("astring")
        .expect("astring is a member of struct");
    assert_eq!(astring.kind(), Kind::String);
    assert_eq!(astring.get_string().unwrap(), "test");

    assert_eq!(config.lookup_float("struct.afloat").unwrap(), 13.37);
    assert_eq!(
        member_names(&must_lookup(&config, "struct")),
        ["aint", "astring", "afloat", "abool"]
    );
}

#[test]
fn test_set_through_lookup_handle() {
    let config = struct_config();

    must_lookup(&config, "struct.aint").set_int(10).unwrap();

    let group = must_lookup(&config, "struct");
    assert_eq!(group.lookup_int("aint").unwrap(), 10);
}

#[test]
fn test_add_then_set() {
    let config = struct_config();

    let added = config
        .add_scalar_setting_to_parent("struct", "anotherint", ScalarKind::Int)
        .unwrap();
    added.set_int(22).unwrap();

    let group = must_lookup(&config, "struct");
    assert_eq!(group.lookup_int("anotherint").unwrap(), 22);
    assert_eq!(group.lookup_int("aint").unwrap(), 1);
    assert_eq!(added.path().unwrap().as_str(), "struct.anotherint");
}

// ===== ABSENCE AND ERRORS =====

#[test]
fn test_absence_is_not_an_error_for_lookup() {
    let config = struct_config();

    assert!(config.lookup("missing.path").is_none());
    assert!(config.lookup("struct.missing").is_none());
    // Resolving through a scalar is also absence
    assert!(config.lookup("struct.aint.deeper").is_none());
}

#[test]
fn test_typed_lookup_distinguishes_missing_from_mismatch() {
    let config = struct_config();

    let err = config.lookup_int("missing.path").unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_type_mismatch());
    assert_eq!(err.module(), "setting");

    let err = config.lookup_int("struct.astring").unwrap_err();
    assert!(err.is_type_mismatch());
    assert!(!err.is_not_found());
}

#[test]
fn test_no_numeric_coercion() {
    let config = parse_config("i = 1; f = 1.0;");
    assert!(config.lookup_float("i").unwrap_err().is_type_mismatch());
    assert!(config.lookup_int("f").unwrap_err().is_type_mismatch());
}

#[test]
fn test_duplicate_add_leaves_original() {
    let config = struct_config();

    let err = config
        .add_scalar_setting_to_parent("struct", "aint", ScalarKind::Int)
        .unwrap_err();
    assert!(err.is_duplicate_name());

    assert_eq!(config.lookup_int("struct.aint").unwrap(), 1);
    assert_eq!(must_lookup(&config, "struct").len(), 4);
}

#[test]
fn test_add_to_missing_or_scalar_parent() {
    let config = struct_config();

    let err = config
        .add_scalar_setting_to_parent("nosuch", "x", ScalarKind::Bool)
        .unwrap_err();
    assert!(err.is_not_found());

    let err = config
        .add_scalar_setting_to_parent("struct.aint", "x", ScalarKind::Bool)
        .unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_add_defaults_to_zero_values() {
    let config = Config::new();
    for (name, kind) in [
        ("i", ScalarKind::Int),
        ("f", ScalarKind::Float),
        ("b", ScalarKind::Bool),
        ("s", ScalarKind::String),
    ] {
        config.add_scalar_setting_to_parent("", name, kind).unwrap();
    }

    assert_eq!(config.lookup_int("i").unwrap(), 0);
    assert_eq!(config.lookup_float("f").unwrap(), 0.0);
    assert!(!config.lookup_bool("b").unwrap());
    assert_eq!(config.lookup_string("s").unwrap(), "");
}

// ===== TREE REPLACEMENT =====

#[test]
fn test_failed_parse_leaves_tree_untouched() {
    let mut config = struct_config();
    must_lookup(&config, "struct.aint").set_int(5).unwrap();

    let err = config.parse("struct: { aint = 2; aint = 3; }").unwrap_err();
    assert_eq!(err.line(), 1);

    assert_eq!(config.lookup_int("struct.aint").unwrap(), 5);
    assert_eq!(must_lookup(&config, "struct").len(), 4);
}

#[test]
fn test_read_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# service settings").unwrap();
    writeln!(file, "server = {{ host = \"localhost\"; port = 8080; }};").unwrap();

    let mut config = Config::new();
    config.read_file(file.path()).unwrap();

    assert_eq!(config.lookup_string("server.host").unwrap(), "localhost");
    assert_eq!(config.lookup_int("server.port").unwrap(), 8080);
    assert_eq!(must_lookup(&config, "server.port").source_line(), Some(2));
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = struct_config();

    let err = config.read_file(dir.path().join("absent.cfg")).unwrap_err();
    assert!(err.is_io_error());
    assert_eq!(err.module(), "io");
    assert_eq!(config.lookup_int("struct.aint").unwrap(), 1);
}

#[test]
fn test_read_malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "a = 1;\nb = [1, \"two\"];\n").unwrap();

    let mut config = parse_config("keep = true;");
    let err = config.read_file(file.path()).unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.to_string().starts_with("2:"));
    assert!(config.lookup_bool("keep").unwrap());
}

#[test]
fn test_to_json() {
    let config = parse_config("name = \"svc\"; ports = [80, 443]; opts = { debug = false; };");
    let json: serde_json::Value = serde_json::from_str(&config.root().to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "svc",
            "ports": [80, 443],
            "opts": { "debug": false }
        })
    );
}

#[test]
fn test_to_json_rejects_overflowing_float() {
    let config = parse_config("limits = { max = 1e400; min = 0.0; };");
    assert_eq!(config.lookup_float("limits.max").unwrap(), f64::INFINITY);

    let err = config.root().to_json().unwrap_err();
    assert_eq!(err.module(), "serialize");
    assert!(err.to_string().contains("limits.max"));
}
