//! Setting handle integration tests
//!
//! Typed get/set round trips, aliasing between handles, and growth of groups,
//! lists and arrays.

use libconf::{Kind, Setting, Value, setting::SettingError};

use crate::helpers::*;

// ===== ROUND TRIPS =====

#[test]
fn test_int_round_trip() {
    let config = struct_config();
    let aint = must_lookup(&config, "struct.aint");

    for v in [0, -1, 42, i64::MIN, i64::MAX] {
        aint.set_int(v).unwrap();
        assert_eq!(aint.get_int().unwrap(), v);
    }
}

#[test]
fn test_float_round_trip_is_exact() {
    let config = struct_config();
    let afloat = must_lookup(&config, "struct.afloat");

    for v in [0.1 + 0.2, -0.0, f64::MIN_POSITIVE, f64::MAX, 1e-300, 13.37] {
        afloat.set_float(v).unwrap();
        assert_eq!(afloat.get_float().unwrap().to_bits(), v.to_bits());
    }

    afloat.set_float(f64::NAN).unwrap();
    assert!(afloat.get_float().unwrap().is_nan());
}

#[test]
fn test_bool_and_string_round_trip() {
    let config = struct_config();

    let abool = must_lookup(&config, "struct.abool");
    abool.set_bool(false).unwrap();
    assert!(!abool.get_bool().unwrap());

    let astring = must_lookup(&config, "struct.astring");
    for v in ["", "with \"quotes\"", "ünïcödé ✓", "line\nbreak"] {
        astring.set_string(v).unwrap();
        assert_eq!(astring.get_string().unwrap(), v);
    }
}

// ===== ALIASING =====

#[test]
fn test_aliasing_visibility() {
    let config = struct_config();
    let first = must_lookup(&config, "struct.astring");
    let second = must_lookup(&config, "struct").lookup_child("astring").unwrap();

    assert!(first.ptr_eq(&second));
    first.set_string("changed").unwrap();
    assert_eq!(second.get_string().unwrap(), "changed");
    assert_eq!(config.lookup_string("struct.astring").unwrap(), "changed");
}

#[test]
fn test_cloned_handle_aliases() {
    let config = struct_config();
    let aint = must_lookup(&config, "struct.aint");
    let copy = aint.clone();

    copy.set_int(99).unwrap();
    assert_eq!(aint.get_int().unwrap(), 99);
}

// ===== TYPE MISMATCH =====

#[test]
fn test_mismatch_leaves_string_unchanged() {
    let config = struct_config();
    let astring = must_lookup(&config, "struct.astring");

    let err = astring.get_int().unwrap_err();
    assert!(matches!(
        err,
        SettingError::TypeMismatch {
            expected: Kind::Int,
            actual: Kind::String,
            ..
        }
    ));

    let err = astring.set_int(5).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(astring.get_string().unwrap(), "test");
    assert_eq!(astring.kind(), Kind::String);
}

#[test]
fn test_container_has_no_scalar_value() {
    let config = struct_config();
    let group = must_lookup(&config, "struct");

    assert_eq!(group.value(), None);
    assert!(group.get_bool().unwrap_err().is_type_mismatch());
    assert!(group.set_string("x").unwrap_err().is_type_mismatch());
}

#[test]
fn test_set_value_dispatches_on_kind() {
    let config = struct_config();
    let afloat = must_lookup(&config, "struct.afloat");

    afloat.set_value(2.5).unwrap();
    assert_eq!(afloat.value(), Some(Value::Float(2.5)));
    assert!(afloat.set_value(3).unwrap_err().is_type_mismatch());
    assert_eq!(afloat.value(), Some(Value::Float(2.5)));
}

// ===== NAVIGATION =====

#[test]
fn test_relative_lookup_and_parents() {
    let config = parse_config("a = { b = { c = 7; }; };");
    let b = must_lookup(&config, "a.b");

    assert_eq!(b.lookup_int("c").unwrap(), 7);
    assert!(b.lookup("").unwrap().ptr_eq(&b));

    let err = b.lookup_int("d").unwrap_err();
    assert_eq!(err.path(), Some("a.b.d"));

    let root = b.parent().and_then(|a| a.parent()).unwrap();
    assert!(root.is_root());
    assert!(root.ptr_eq(&config.root()));
}

#[test]
fn test_paths_accept_redundant_dots() {
    let config = struct_config();
    let direct = must_lookup(&config, "struct.aint");
    let dotted = must_lookup(&config, ".struct..aint.");
    assert!(direct.ptr_eq(&dotted));
}

// ===== GROWTH =====

#[test]
fn test_build_tree_programmatically() {
    let config = parse_config("");
    let root = config.root();

    let server = root.add_child("server", Kind::Group).unwrap();
    server.add_child("port", Kind::Int).unwrap().set_int(443).unwrap();
    let hosts = server.add_child("hosts", Kind::Array).unwrap();
    for host in ["a.example", "b.example"] {
        hosts.add_element(Kind::String).unwrap().set_string(host).unwrap();
    }

    assert_eq!(config.lookup_int("server.port").unwrap(), 443);
    let hosts = must_lookup(&config, "server.hosts");
    assert_eq!(hosts.len(), 2);
    let names: Vec<String> = hosts
        .children()
        .iter()
        .map(|host| host.get_string().unwrap())
        .collect();
    assert_eq!(names, ["a.example", "b.example"]);
}

#[test]
fn test_array_rejects_mixed_kinds() {
    let config = parse_config("ports = [80];");
    let ports = must_lookup(&config, "ports");

    let err = ports.add_element(Kind::Float).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(err.to_string(), "Array ports cannot hold a float element");
    assert_eq!(ports.len(), 1);
}

#[test]
fn test_list_elements_have_no_path() {
    let config = parse_config("items = ( { name = \"x\"; } );");
    let item: Setting = must_lookup(&config, "items").element(0).unwrap();

    assert_eq!(item.path(), None);
    assert_eq!(item.name(), None);
    assert_eq!(item.lookup_string("name").unwrap(), "x");

    let err = item.lookup_int("name").unwrap_err();
    assert_eq!(err.path(), Some("items[0].name"));
}

#[test]
fn test_duplicate_child_is_rejected() {
    let config = struct_config();
    let group = must_lookup(&config, "struct");

    let err = group.add_child("abool", Kind::String).unwrap_err();
    assert_eq!(
        err,
        SettingError::DuplicateName {
            parent: "struct".to_string(),
            name: "abool".to_string(),
        }
    );
    assert!(group.lookup_bool("abool").unwrap());
}
