use crate::colored::ColoredClasses;
use tintflex_core::{ClassKey, ClassMap, ColorProperty, Declaration, PrefixConfig};

/// 主题语义色类（primary、surface-card 等）
///
/// `bg-primary` 与 `bg-primary-reverse` 同时出现在 text 与 background 表中：
/// 背景色与前景色成对设置。
pub fn generate_misc_classes(prefix: &PrefixConfig) -> ColoredClasses {
    let var = |name: &str| prefix.var(name);

    let text = [
        ("text-primary", var("primary-color")),
        ("text-white", "#ffffff".to_string()),
        ("text-color", var("text-color")),
        ("text-color-secondary", var("text-color-secondary")),
        ("bg-primary", var("primary-color-text")),
        ("bg-primary-reverse", var("primary-color")),
    ];

    let background = [
        ("bg-white", "#ffffff".to_string()),
        ("bg-primary", var("primary-color")),
        ("bg-primary-reverse", var("primary-color-text")),
        ("surface-ground", var("surface-ground")),
        ("surface-section", var("surface-section")),
        ("surface-card", var("surface-card")),
        ("surface-overlay", var("surface-overlay")),
        ("surface-hover", var("surface-hover")),
    ];

    let border = [
        ("border-primary", var("primary-color")),
        ("border-white", "#ffffff".to_string()),
        ("surface-border", var("surface-border")),
    ];

    let mut misc = ColoredClasses::new();
    fill(misc.get_mut(ColorProperty::Text), ColorProperty::Text, text);
    fill(misc.get_mut(ColorProperty::Background), ColorProperty::Background, background);
    fill(misc.get_mut(ColorProperty::Border), ColorProperty::Border, border);
    misc
}

fn fill<const N: usize>(map: &mut ClassMap, property: ColorProperty, entries: [(&str, String); N]) {
    for (name, value) in entries {
        map.insert_one(ClassKey::plain(name), property.declaration(value));
    }
}

/// `bg-none`：清除背景图
pub fn generate_background_image_reset() -> ClassMap {
    let mut map = ClassMap::new();
    map.insert_one(
        ClassKey::plain("bg-none"),
        Declaration::new("background-image", "none"),
    );
    map
}

/// `bg-transparent` 与 `border-transparent`
pub fn generate_transparent_classes() -> ColoredClasses {
    let mut classes = ColoredClasses::new();
    for property in [ColorProperty::Background, ColorProperty::Border] {
        classes.get_mut(property).insert_one(
            ClassKey::plain(format!("{}-transparent", property.stem())),
            property.declaration("transparent"),
        );
    }
    classes
}
