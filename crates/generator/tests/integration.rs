use pretty_assertions::assert_eq;
use tintflex_core::scales::{COLOR_SHADES, OPACITY_SCALE, SURFACE_SHADES};
use tintflex_core::{load_config_from_json, ClassKey, ConfigError, Declaration, GeneratorConfig};
use tintflex_css::{create_class_rule, emit_css, rule_class_name, StyleTree};
use tintflex_generator::{
    build, generate_colored_classes, generate_css, generate_directional_gradients,
    generate_percentage_utilities, generate_stylesheet, generate_white_black_opacity_classes,
    ClassTables,
};

const CONFIG: &str = r#"{
    "prefix": { "cssVariable": "p-" },
    "themes": {
        "default": { "colors": { "blue": {} } }
    }
}"#;

#[test]
fn test_end_to_end_blue_background() {
    let config = load_config_from_json(CONFIG).expect("Failed to load config");
    let tables = ClassTables::generate(&config).unwrap();

    assert_eq!(
        tables.colored.background.get_by_name("bg-blue-500").unwrap(),
        &[Declaration::new("background-color", "var(--p-blue-500)")]
    );

    let alpha = tables
        .colored
        .background
        .get(&ClassKey::alpha("bg-blue-500", 50))
        .unwrap();
    assert!(alpha[0].value.starts_with("color-mix("));
    assert!(alpha[0].value.contains("var(--p-blue-500)"));
    assert!(alpha[0].value.contains("50%"));
}

#[test]
fn test_collision_across_themes_last_write_wins() {
    let light = GeneratorConfig::new("light-").with_theme("light", ["blue"]);
    let dark = GeneratorConfig::new("dark-").with_theme("dark", ["blue"]);

    let first = generate_colored_classes(&light.themes, &COLOR_SHADES, &OPACITY_SCALE, light.prefix());
    let second = generate_colored_classes(&dark.themes, &COLOR_SHADES, &OPACITY_SCALE, dark.prefix());

    let merged = first.background.union(second.background);

    let matching = merged
        .keys()
        .filter(|k| k.class_name() == "bg-blue-500")
        .count();
    assert_eq!(matching, 1);
    assert_eq!(
        merged.get_by_name("bg-blue-500").unwrap()[0].value,
        "var(--dark-blue-500)"
    );
}

#[test]
fn test_two_themes_one_entry() {
    let json = r#"{
        "prefix": { "cssVariable": "p-" },
        "themes": {
            "light": { "colors": { "blue": {}, "red": {} } },
            "dark": { "colors": { "blue": {} } }
        }
    }"#;
    let config = load_config_from_json(json).unwrap();
    let tables = ClassTables::generate(&config).unwrap();

    let matching = tables
        .colored
        .background
        .keys()
        .filter(|k| k.class_name() == "bg-blue-500")
        .count();
    assert_eq!(matching, 1);
    // blue 与 red 各 10 个色阶 × (1 + 9 个透明度)
    assert_eq!(
        tables.colored.background.len(),
        2 * COLOR_SHADES.len() * (1 + OPACITY_SCALE.len())
    );
}

#[test]
fn test_surface_classes_for_every_prefix() {
    for prefix in ["", "p-", "my_"] {
        let config = GeneratorConfig::new(prefix);
        let tables = ClassTables::generate(&config).unwrap();

        for shade in SURFACE_SHADES {
            let decls = tables
                .surfaces
                .get(&ClassKey::plain(format!("surface-{}", shade)))
                .unwrap();
            assert_eq!(
                decls[0].value,
                format!("var(--{}surface-{})", prefix, shade)
            );
        }
    }
}

#[test]
fn test_white_black_spellings_identical() {
    let classes = generate_white_black_opacity_classes(&OPACITY_SCALE);

    for opacity in OPACITY_SCALE {
        for (slash, alpha) in [
            (format!("text-white/{}", opacity), format!("text-white-alpha-{}", opacity)),
            (format!("bg-black/{}", opacity), format!("bg-black-alpha-{}", opacity)),
        ] {
            let tone = if slash.contains("white") {
                &classes.white
            } else {
                &classes.black
            };
            let map = if slash.starts_with("text") {
                &tone.text
            } else {
                &tone.background
            };
            assert_eq!(map.get_by_name(&slash), map.get_by_name(&alpha));
            assert!(map.get_by_name(&slash).is_some());
        }
    }
}

#[test]
fn test_fixed_direction_and_percentage_counts() {
    let small = ClassTables::generate(&GeneratorConfig::new("p-")).unwrap();
    let large = ClassTables::generate(
        &GeneratorConfig::new("p-")
            .with_theme("a", ["blue", "green", "red"])
            .with_theme("b", ["teal", "pink"]),
    )
    .unwrap();

    assert_eq!(small.directions.len(), 16);
    assert_eq!(large.directions, generate_directional_gradients());
    assert_eq!(large.percentages, generate_percentage_utilities());
    assert_eq!(large.percentages.len(), 33);
}

#[test]
fn test_idempotent_css_output() {
    let first = generate_css(CONFIG).unwrap();
    let second = generate_css(CONFIG).unwrap();

    assert_eq!(first, second);
    assert!(first.contains("var(--p-blue-500)"));
    assert!(first.contains("background-image"));
}

#[test]
fn test_generated_rules_precede_hand_authored() {
    let config = load_config_from_json(CONFIG).unwrap();

    let mut tree = StyleTree::new();
    tree.append(create_class_rule(
        "custom-card",
        &[Declaration::new("background-color", "red")],
    ));

    let count = build(&config, &mut tree).unwrap();

    assert_eq!(tree.generated_len(), count);
    assert_eq!(tree.rules().len(), count + 1);
    assert_eq!(
        rule_class_name(tree.rules().last().unwrap()).as_deref(),
        Some("custom-card")
    );
}

#[test]
fn test_stylesheet_emits() {
    let config = GeneratorConfig::new("p-")
        .with_theme("default", ["blue"])
        .with_breakpoints([("md", "768px")])
        .with_states(["hover"]);

    let stylesheet = generate_stylesheet(&config).unwrap();
    let css = emit_css(&stylesheet).expect("Failed to emit CSS");

    assert!(css.contains("--gradient-from"));
    assert!(css.contains("--gradient-via-percentage"));
    assert!(css.contains("linear-gradient(to top right"));
    assert!(css.contains("@media"));
    assert!(css.contains("hover"));
}

#[test]
fn test_builder_config_validated_before_generation() {
    let config = GeneratorConfig::new("a b;")
        .with_theme("default", ["blue"])
        .with_breakpoints([("md", "wide")]);

    let mut tree = StyleTree::new();
    tree.append(create_class_rule(
        "custom-card",
        &[Declaration::new("background-color", "red")],
    ));

    assert!(matches!(
        build(&config, &mut tree),
        Err(ConfigError::InvalidPrefix(_))
    ));
    assert_eq!(tree.rules().len(), 1);
    assert_eq!(tree.generated_len(), 0);

    let bad_breakpoint = GeneratorConfig::new("p-").with_breakpoints([("md", "wide")]);
    assert!(matches!(
        generate_stylesheet(&bad_breakpoint),
        Err(ConfigError::InvalidBreakpoint { .. })
    ));
}
