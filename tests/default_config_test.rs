use pms::config::directive::{parse_document, Directive, SetToken};
use pms::config::keys::parse_chord;
use pms::config::options::{normalize_key, OptionValue};
use pms::config::{Config, DEFAULTS};
use std::collections::HashSet;

/// Option key named by a `set` token, with the `no` prefix removed for booleans
fn set_key(config: &Config, token: &SetToken) -> String {
    match token {
        SetToken::Assign { key, .. } => normalize_key(key),
        SetToken::Bare(name) if config.options.contains(name) => normalize_key(name),
        SetToken::Bare(name) => normalize_key(name.trim_start_matches("no")),
    }
}

#[test]
fn test_every_default_line_parses() {
    for parsed in parse_document(DEFAULTS) {
        assert!(parsed.result.is_ok(), "line {}: {:?}", parsed.line, parsed.result);
    }
}

#[test]
fn test_defaults_set_each_registered_key_at_most_once() {
    let config = Config::new().unwrap();
    let mut seen = HashSet::new();

    for parsed in parse_document(DEFAULTS) {
        if let Ok(Directive::Set(tokens)) = parsed.result {
            for token in &tokens {
                let key = set_key(&config, token);
                assert!(config.options.contains(&key), "line {}: '{}' is not registered", parsed.line, key);
                assert!(seen.insert(key.clone()), "line {}: '{}' set twice", parsed.line, key);
            }
        }
    }

    for key in ["center", "columns", "limit", "logfile", "logoverwrite", "sort", "topbar"] {
        assert!(seen.contains(key), "{} has no default", key);
    }
}

#[test]
fn test_every_default_chord_lexes() {
    for parsed in parse_document(DEFAULTS) {
        if let Ok(Directive::Bind { chord, .. }) = parsed.result {
            assert!(parse_chord(&chord).is_ok(), "line {}: {}", parsed.line, chord);
        }
    }
}

#[test]
fn test_default_values() {
    let config = Config::with_defaults().unwrap();
    let options = &config.options;

    assert_eq!(options.get("center").unwrap(), OptionValue::Bool(false));
    assert_eq!(options.get("limit").unwrap(), OptionValue::Int(50));
    assert_eq!(
        options.get("columns").unwrap(),
        OptionValue::String("artist,track,title,album,year,time,popularity".to_string())
    );
    assert_eq!(
        options.get("sort").unwrap(),
        OptionValue::String("track,disc,album,year,artist".to_string())
    );
    assert_eq!(options.get("logfile").unwrap(), OptionValue::String(String::new()));
    assert_eq!(options.get("logoverwrite").unwrap(), OptionValue::Bool(false));
    assert_eq!(options.get("spotifyclientid").unwrap(), OptionValue::String(String::new()));

    let topbar = options.get("topbar").unwrap().as_string().unwrap();
    assert!(topbar.starts_with("|$shortname $version||;"));
    assert!(topbar.ends_with("${list|title}||;;"));
}

#[test]
fn test_default_styles_and_bindings() {
    let config = Config::with_defaults().unwrap();

    assert_eq!(config.styles.get("errorText"), Some(&["white".to_string(), "red".to_string(), "bold".to_string()][..]));
    assert_eq!(config.styles.get("state"), Some(&["default".to_string()][..]));

    let action = |chord: &str| config.bindings.get(chord).map(|a| a.join(" "));
    assert_eq!(action("gg").as_deref(), Some("cursor home"));
    assert_eq!(action("<C-b>").as_deref(), Some("viewport pgup"));
    assert_eq!(action("z<Enter>").as_deref(), Some("viewport low"));
    assert_eq!(action("<C-w>d").as_deref(), Some("list duplicate"));
    assert_eq!(action("<Alt-M>").as_deref(), Some("volume mute"));
    assert_eq!(action("+").as_deref(), Some("volume +2"));
    assert_eq!(action("<C-t>").as_deref(), Some("isolate albumartist album"));
}

#[test]
fn test_dump_reloads_into_equal_configuration() {
    let original = Config::with_defaults().unwrap();
    original.set("limit=-3").unwrap();
    original.set("center").unwrap();
    original.set(r#"topbar="say \"hi\" \\o/""#).unwrap();

    let mut reloaded = Config::new().unwrap();
    let report = reloaded.load(&original.dump());

    assert!(report.is_ok(), "{:?}", report.errors);
    assert_eq!(reloaded.options.list(), original.options.list());
    assert_eq!(reloaded.styles, original.styles);
    assert_eq!(reloaded.bindings, original.bindings);
}
