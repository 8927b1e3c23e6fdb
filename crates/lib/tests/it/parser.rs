//! Parser integration tests
//!
//! Exercises the text format as a whole: realistic documents, literal
//! forms, and error reporting.

use libconf::{Kind, parser};

use crate::helpers::*;

const SERVICE_CONFIG: &str = r#"
# Example service configuration
version = "1.0";

application:
{
  window:
  {
    title = "My Application";
    size = { w = 640; h = 480; };
    pos = { x = 350; y = 250; };
  };

  list = ( ( "abc", 123, true ), 1.234, ( /* an empty list */ ) );

  books = ( { title  = "Treasure Island";
              author = "Robert Louis Stevenson";
              price  = 29.95;
              qty    = 5; },
            { title  = "Snow Crash";
              author = "Neal Stephenson";
              price  = 9.99;
              qty    = 8; } );

  misc:
  {
    pi = 3.141592654;
    bigint = 9223372036854775807L;
    columns = [ "Last Name", "First Name", "MI" ];
    bitmask = 0x1FC3;  // hex
    umask = 0027;
  };
};
"#;

#[test]
fn test_service_document() {
    let config = parse_config(SERVICE_CONFIG);

    assert_eq!(config.lookup_string("version").unwrap(), "1.0");
    assert_eq!(
        config.lookup_string("application.window.title").unwrap(),
        "My Application"
    );
    assert_eq!(config.lookup_int("application.window.size.w").unwrap(), 640);
    assert_eq!(config.lookup_int("application.misc.bigint").unwrap(), i64::MAX);
    assert_eq!(config.lookup_int("application.misc.bitmask").unwrap(), 0x1FC3);
    assert_eq!(config.lookup_int("application.misc.umask").unwrap(), 27);
    assert_eq!(
        config.lookup_float("application.misc.pi").unwrap(),
        3.141592654
    );

    let columns = must_lookup(&config, "application.misc.columns");
    assert!(columns.is_array());
    assert_eq!(columns.len(), 3);
    assert_eq!(columns.element(2).unwrap().get_string().unwrap(), "MI");

    let list = must_lookup(&config, "application.list");
    assert_eq!(list.len(), 3);
    let inner = list.element(0).unwrap();
    assert!(inner.is_list());
    assert!(inner.element(2).unwrap().get_bool().unwrap());
    assert!(list.element(2).unwrap().is_empty());

    let books = must_lookup(&config, "application.books");
    let snow_crash = books.element(1).unwrap();
    assert_eq!(snow_crash.kind(), Kind::Group);
    assert_eq!(snow_crash.lookup_int("qty").unwrap(), 8);
    assert_eq!(
        member_names(&snow_crash),
        ["title", "author", "price", "qty"]
    );
}

#[test]
fn test_source_lines_follow_document() {
    let config = parse_config(SERVICE_CONFIG);
    assert_eq!(must_lookup(&config, "version").source_line(), Some(3));
    assert_eq!(must_lookup(&config, "application").source_line(), Some(5));
    assert_eq!(
        must_lookup(&config, "application.misc.bitmask").source_line(),
        Some(30)
    );
}

#[test]
fn test_integer_literals() {
    let config = parse_config("a = -42; b = +7; c = 0xff; d = 10LL; e = -0x10; f = 0xFFFFFFFFFFFFFFFF;");
    assert_eq!(config.lookup_int("a").unwrap(), -42);
    assert_eq!(config.lookup_int("b").unwrap(), 7);
    assert_eq!(config.lookup_int("c").unwrap(), 255);
    assert_eq!(config.lookup_int("d").unwrap(), 10);
    assert_eq!(config.lookup_int("e").unwrap(), -16);
    assert_eq!(config.lookup_int("f").unwrap(), -1);
}

#[test]
fn test_float_literals() {
    let config = parse_config("a = 1.5e3; b = .5; c = -2.; d = 1E-2;");
    assert_eq!(config.lookup_float("a").unwrap(), 1500.0);
    assert_eq!(config.lookup_float("b").unwrap(), 0.5);
    assert_eq!(config.lookup_float("c").unwrap(), -2.0);
    assert_eq!(config.lookup_float("d").unwrap(), 0.01);
}

#[test]
fn test_string_literals() {
    let config = parse_config(
        r#"a = "tab\tnewline\nquote\"slash\\"; b = "hex\x41"; c = "con" /* gap */ "cat";"#,
    );
    assert_eq!(
        config.lookup_string("a").unwrap(),
        "tab\tnewline\nquote\"slash\\"
    );
    assert_eq!(config.lookup_string("b").unwrap(), "hexA");
    assert_eq!(config.lookup_string("c").unwrap(), "concat");
}

#[test]
fn test_hex_escapes_spell_utf8() {
    let config = parse_config(r#"s = "caf\xC3\xA9"; t = "\xE2\x9C\x93 done";"#);
    assert_eq!(config.lookup_string("s").unwrap(), "café");
    assert_eq!(config.lookup_string("t").unwrap(), "✓ done");

    let err = parser::parse("ok = 1;\nbad = \"\\xFF\";").unwrap_err();
    assert_eq!((err.line(), err.column()), (2, 7));
    assert!(err.message.contains("invalid UTF-8"));
}

#[test]
fn test_booleans_and_names() {
    let config = parse_config("on = TRUE; off = False; with-dash_and*star = 1;");
    assert!(config.lookup_bool("on").unwrap());
    assert!(!config.lookup_bool("off").unwrap());
    assert_eq!(config.lookup_int("with-dash_and*star").unwrap(), 1);
}

#[test]
fn test_error_locations() {
    let err = parser::parse("a = 1;\nb = {\n  c = ;\n};").unwrap_err();
    assert_eq!((err.line(), err.column()), (3, 7));
    assert_eq!(err.to_string(), "3:7: expected a value, found ';'");
}

#[test]
fn test_unsupported_include() {
    let err = "@include \"more.cfg\"".parse::<libconf::Config>().unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(err.module(), "parser");
}

#[test]
fn test_parse_is_all_or_nothing() {
    // The first settings are valid, the last one is not
    let mut config = parse_config("original = 1;");
    assert!(config.parse("x = 1; y = 2; z = [1, true];").is_err());

    assert!(config.lookup("x").is_none());
    assert_eq!(config.lookup_int("original").unwrap(), 1);
}
