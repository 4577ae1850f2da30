use pretty_assertions::assert_eq;
use tintflex_core::{
    load_config_from_json, ClassKey, ClassMap, ConfigError, Declaration, GeneratorConfig,
    GradientRole,
};

#[test]
fn test_config_from_json_round_trip_to_builder() {
    let json = r#"{
        "prefix": { "cssVariable": "p-" },
        "themes": {
            "default": { "colors": { "blue": {}, "green": {} } },
            "dark": { "colors": { "blue": {} } }
        },
        "breakpoints": { "md": "768px" },
        "states": ["hover"]
    }"#;

    let loaded = load_config_from_json(json).expect("Failed to load config");
    let built = GeneratorConfig::new("p-")
        .with_theme("default", ["blue", "green"])
        .with_theme("dark", ["blue"])
        .with_breakpoints([("md", "768px")])
        .with_states(["hover"]);

    assert_eq!(loaded, built);
}

#[test]
fn test_config_errors_are_descriptive() {
    let err = load_config_from_json("not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid configuration"));

    let err = load_config_from_json(r#"{ "prefix": { "cssVariable": "a b" }, "themes": {} }"#)
        .unwrap_err();
    assert!(err.to_string().contains("a b"));
}

#[test]
fn test_class_map_keys_injective() {
    let mut map = ClassMap::new();
    for role in GradientRole::ALL {
        for step in [0u8, 10, 100] {
            map.insert_one(
                ClassKey::percentage(role, step),
                Declaration::new(role.percentage_property(), format!("{}%", step)),
            );
        }
    }
    map.insert_one(ClassKey::alpha("from-blue", 10), Declaration::new("--gradient-from", "x"));

    assert_eq!(map.len(), 10);

    let mut names: Vec<String> = map.keys().map(|k| k.class_name()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 10);
}
