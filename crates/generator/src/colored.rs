use crate::value::color_mix;
use log::debug;
use tintflex_core::{ClassKey, ClassMap, ColorProperty, PrefixConfig, ThemeRegistry};

/// 按颜色属性分组的三张类表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColoredClasses {
    pub text: ClassMap,
    pub background: ClassMap,
    pub border: ClassMap,
}

impl ColoredClasses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: ColorProperty) -> &ClassMap {
        match property {
            ColorProperty::Text => &self.text,
            ColorProperty::Background => &self.background,
            ColorProperty::Border => &self.border,
        }
    }

    pub fn get_mut(&mut self, property: ColorProperty) -> &mut ClassMap {
        match property {
            ColorProperty::Text => &mut self.text,
            ColorProperty::Background => &mut self.background,
            ColorProperty::Border => &mut self.border,
        }
    }

    /// 按 text、background、border 顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (ColorProperty, &ClassMap)> {
        ColorProperty::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    pub fn len(&self) -> usize {
        self.text.len() + self.background.len() + self.border.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 为主题中的每个颜色生成 text / bg / border 类
///
/// 遍历顺序：主题按注册顺序，颜色按声明顺序，色阶与透明度升序。
/// 不同主题中的同名颜色不去重，后写入的覆盖先写入的。
pub fn generate_colored_classes(
    themes: &ThemeRegistry,
    color_shades: &[u16],
    opacities: &[u8],
    prefix: &PrefixConfig,
) -> ColoredClasses {
    let mut colored = ColoredClasses::new();

    for theme in themes.values() {
        for color in theme.color_names() {
            for shade in color_shades {
                let variable = prefix.var(&format!("{}-{}", color, shade));

                for property in ColorProperty::ALL {
                    let base = format!("{}-{}-{}", property.stem(), color, shade);
                    let map = colored.get_mut(property);

                    map.insert_one(ClassKey::plain(base.clone()), property.declaration(variable.clone()));

                    for &opacity in opacities {
                        map.insert_one(
                            ClassKey::alpha(base.clone(), opacity),
                            property.declaration(color_mix(&variable, opacity)),
                        );
                    }
                }
            }
        }
    }

    debug!(
        "colored classes: {} across {} themes",
        colored.len(),
        themes.len()
    );
    colored
}
