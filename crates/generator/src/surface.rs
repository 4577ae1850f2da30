use crate::value::surface_mix;
use log::debug;
use tintflex_core::{ClassKey, ClassMap, ColorProperty, PrefixConfig};

/// 按色阶生成引用 surface 变量的类
///
/// - `{stem}-{s}` → `var(--{prefix}surface-{s})`
/// - `{stem}-{s}/{o}` → `color-mix(in srgb, var(--{prefix}surface-{s}), {o/100}%, transparent)`
fn shade_classes(
    stem: &str,
    property: ColorProperty,
    shades: &[u16],
    opacities: &[u8],
    prefix: &PrefixConfig,
) -> ClassMap {
    let mut map = ClassMap::new();

    for shade in shades {
        let base = format!("{}-{}", stem, shade);
        let surface = prefix.var(&format!("surface-{}", shade));

        map.insert_one(ClassKey::plain(base.clone()), property.declaration(surface.clone()));

        for &opacity in opacities {
            map.insert_one(
                ClassKey::alpha(base.clone(), opacity),
                property.declaration(surface_mix(&surface, opacity)),
            );
        }
    }

    debug!("{} shade classes: {}", stem, map.len());
    map
}

/// `surface-{s}` 背景色类
pub fn generate_surface_classes(shades: &[u16], opacities: &[u8], prefix: &PrefixConfig) -> ClassMap {
    shade_classes("surface", ColorProperty::Background, shades, opacities, prefix)
}

/// `text-{s}` 文字颜色类，引用同一组 surface 变量
pub fn generate_text_classes(shades: &[u16], opacities: &[u8], prefix: &PrefixConfig) -> ClassMap {
    shade_classes("text", ColorProperty::Text, shades, opacities, prefix)
}

/// `border-{s}` 边框颜色类，引用同一组 surface 变量
pub fn generate_border_classes(shades: &[u16], opacities: &[u8], prefix: &PrefixConfig) -> ClassMap {
    shade_classes("border", ColorProperty::Border, shades, opacities, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tintflex_core::scales::{OPACITY_SCALE, SURFACE_SHADES};
    use tintflex_core::Declaration;

    #[test]
    fn test_surface_references_every_shade() {
        for css_variable in ["", "p-", "ui_"] {
            let prefix = PrefixConfig::new(css_variable);
            let map = generate_surface_classes(&SURFACE_SHADES, &OPACITY_SCALE, &prefix);

            for shade in SURFACE_SHADES {
                let decls = map.get(&ClassKey::plain(format!("surface-{}", shade))).unwrap();
                assert!(decls[0]
                    .value
                    .contains(&format!("--{}surface-{}", css_variable, shade)));
            }
        }
    }

    #[test]
    fn test_surface_entry_count() {
        let prefix = PrefixConfig::new("p-");
        let map = generate_surface_classes(&SURFACE_SHADES, &OPACITY_SCALE, &prefix);
        assert_eq!(map.len(), SURFACE_SHADES.len() * (1 + OPACITY_SCALE.len()));
    }

    #[test]
    fn test_surface_opacity_variant() {
        let prefix = PrefixConfig::new("p-");
        let map = generate_surface_classes(&[500], &[50], &prefix);

        assert_eq!(
            map.get(&ClassKey::alpha("surface-500", 50)).unwrap(),
            &[Declaration::new(
                "background-color",
                "color-mix(in srgb, var(--p-surface-500), 0.5%, transparent)"
            )]
        );
    }

    #[test]
    fn test_text_and_border_opacity_variants() {
        let prefix = PrefixConfig::new("ui_");
        let texts = generate_text_classes(&[950], &[20, 100], &prefix);
        let borders = generate_border_classes(&[0], &[90], &prefix);

        assert_eq!(
            texts.get_by_name("text-950/20").unwrap(),
            &[Declaration::new(
                "color",
                "color-mix(in srgb, var(--ui_surface-950), 0.2%, transparent)"
            )]
        );
        assert_eq!(
            texts.get_by_name("text-950/100").unwrap(),
            &[Declaration::new(
                "color",
                "color-mix(in srgb, var(--ui_surface-950), 1%, transparent)"
            )]
        );
        assert_eq!(
            borders.get_by_name("border-0/90").unwrap(),
            &[Declaration::new(
                "border-color",
                "color-mix(in srgb, var(--ui_surface-0), 0.9%, transparent)"
            )]
        );
    }

    #[test]
    fn test_text_and_border_share_surface_variable() {
        let prefix = PrefixConfig::new("p-");
        let texts = generate_text_classes(&[100], &[], &prefix);
        let borders = generate_border_classes(&[100], &[], &prefix);

        assert_eq!(
            texts.get_by_name("text-100").unwrap(),
            &[Declaration::new("color", "var(--p-surface-100)")]
        );
        assert_eq!(
            borders.get_by_name("border-100").unwrap(),
            &[Declaration::new("border-color", "var(--p-surface-100)")]
        );
    }
}
