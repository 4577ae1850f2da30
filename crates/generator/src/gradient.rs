use crate::alpha::Tone;
use crate::value::color_mix;
use log::debug;
use tintflex_core::scales::percentage_steps;
use tintflex_core::{ClassKey, ClassMap, Declaration, GradientRole, PrefixConfig, ThemeRegistry};

/// 生成某个渐变色标角色的颜色类
///
/// 输出顺序：
/// 1. 黑白透明度色标（`{role}-white/{o}`、`{role}-white-alpha-{o}`，黑色同理）
/// 2. 主题颜色色标 `{role}-{color}-{shade}` 及其透明度变体
/// 3. 唯一的收尾类 `{role}-from-to`，必须最后输出以保证层叠回退顺序
pub fn generate_gradient_classes(
    role: GradientRole,
    color_shades: &[u16],
    opacities: &[u8],
    themes: &ThemeRegistry,
    prefix: &PrefixConfig,
) -> ClassMap {
    let property = role.color_property();
    let mut map = ClassMap::new();

    for &opacity in opacities {
        for tone in Tone::ALL {
            let value = tone.rgba(opacity);
            for key in tone.class_keys(role.name(), opacity) {
                map.insert_one(key, Declaration::new(property.clone(), value.clone()));
            }
        }
    }

    for theme in themes.values() {
        for color in theme.color_names() {
            for shade in color_shades {
                let variable = prefix.var(&format!("{}-{}", color, shade));
                let base = format!("{}-{}-{}", role, color, shade);

                map.insert_one(
                    ClassKey::plain(base.clone()),
                    Declaration::new(property.clone(), variable.clone()),
                );

                for &opacity in opacities {
                    map.insert_one(
                        ClassKey::alpha(base.clone(), opacity),
                        Declaration::new(property.clone(), color_mix(&variable, opacity)),
                    );
                }
            }
        }
    }

    let terminal = ClassKey::plain(format!("{}-from-to", role));
    map.insert(
        terminal,
        vec![
            Declaration::new("--gradient-from", format!("var(--{}-from-color)", role)),
            Declaration::new(
                "--gradient-to",
                format!("var(--{role}-to-color, var(--{role}-from-color)00)"),
            ),
        ],
    );

    debug!("gradient {} classes: {}", role, map.len());
    map
}

/// 渐变位置工具类：`from-{i}%`、`via-{i}%`、`to-{i}%`，i = 0, 10, ..., 100
pub fn generate_percentage_utilities() -> ClassMap {
    let mut map = ClassMap::new();

    for step in percentage_steps() {
        for role in GradientRole::ALL {
            map.insert_one(
                ClassKey::percentage(role, step),
                Declaration::new(role.percentage_property(), format!("{}%", step)),
            );
        }
    }

    map
}
