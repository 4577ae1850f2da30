use crate::alpha::{generate_white_black_opacity_classes, Tone, WhiteBlackClasses};
use crate::colored::{generate_colored_classes, ColoredClasses};
use crate::direction::generate_directional_gradients;
use crate::gradient::{generate_gradient_classes, generate_percentage_utilities};
use crate::misc::{
    generate_background_image_reset, generate_misc_classes, generate_transparent_classes,
};
use crate::surface::{generate_border_classes, generate_surface_classes, generate_text_classes};
use log::debug;
use thiserror::Error;
use tintflex_core::scales::{COLOR_SHADES, OPACITY_SCALE, SURFACE_SHADES};
use tintflex_core::{load_config_from_json, ClassMap, ConfigError, GeneratorConfig, GradientRole};
use tintflex_css::{emit_class_map, emit_css, insert_rules, EmitFlags, StyleTree, Stylesheet};

/// 从 JSON 配置到 CSS 文本的错误
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to print stylesheet")]
    Codegen(#[from] std::fmt::Error),
}

/// 一次生成过程产生的全部类表
///
/// 每次调用 [`ClassTables::generate`] 都重新构建，不跨调用缓存。
/// 配置在生成前校验，不合法的配置不会产生任何类。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTables {
    pub gradient_from: ClassMap,
    pub gradient_via: ClassMap,
    pub gradient_to: ClassMap,
    pub percentages: ClassMap,
    pub directions: ClassMap,
    pub background_image: ClassMap,
    pub texts: ClassMap,
    pub surfaces: ClassMap,
    pub borders: ClassMap,
    pub transparent: ColoredClasses,
    pub colored: ColoredClasses,
    pub white_black: WhiteBlackClasses,
    pub misc: ColoredClasses,
}

impl ClassTables {
    pub fn generate(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let prefix = config.prefix();
        let gradient = |role| {
            generate_gradient_classes(role, &COLOR_SHADES, &OPACITY_SCALE, &config.themes, prefix)
        };

        Ok(Self {
            gradient_from: gradient(GradientRole::From),
            gradient_via: gradient(GradientRole::Via),
            gradient_to: gradient(GradientRole::To),
            percentages: generate_percentage_utilities(),
            directions: generate_directional_gradients(),
            background_image: generate_background_image_reset(),
            texts: generate_text_classes(&SURFACE_SHADES, &OPACITY_SCALE, prefix),
            surfaces: generate_surface_classes(&SURFACE_SHADES, &OPACITY_SCALE, prefix),
            borders: generate_border_classes(&SURFACE_SHADES, &OPACITY_SCALE, prefix),
            transparent: generate_transparent_classes(),
            colored: generate_colored_classes(&config.themes, &COLOR_SHADES, &OPACITY_SCALE, prefix),
            white_black: generate_white_black_opacity_classes(&OPACITY_SCALE),
            misc: generate_misc_classes(prefix),
        })
    }

    /// 所有表中的类数量
    pub fn len(&self) -> usize {
        self.direct_tables().iter().map(|m| m.len()).sum::<usize>()
            + self.emitted_tables().iter().map(|m| m.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 直接插入的规则（渐变色标与位置），不生成变体
    fn direct_tables(&self) -> [&ClassMap; 4] {
        [
            &self.gradient_from,
            &self.gradient_to,
            &self.gradient_via,
            &self.percentages,
        ]
    }

    /// 通过 [`emit_class_map`] 输出的表，按输出顺序排列
    fn emitted_tables(&self) -> Vec<&ClassMap> {
        let mut tables = vec![
            &self.directions,
            &self.background_image,
            &self.texts,
            &self.surfaces,
            &self.borders,
            &self.transparent.background,
            &self.transparent.border,
        ];
        tables.extend(self.colored.iter().map(|(_, map)| map));
        for tone in Tone::ALL {
            tables.extend(self.white_black.get(tone).iter().map(|(_, map)| map));
        }
        tables.extend(self.misc.iter().map(|(_, map)| map));
        tables
    }

    /// 将全部类表写入样式表，返回插入的顶层规则数量
    ///
    /// `config` 提供断点与状态，校验失败时 `tree` 保持不变。
    pub fn apply(&self, tree: &mut StyleTree, config: &GeneratorConfig) -> Result<usize, ConfigError> {
        config.validate()?;

        let mut count = 0;

        for map in self.direct_tables() {
            count += insert_rules(map, tree);
        }

        for map in self.emitted_tables() {
            count += emit_class_map(map, tree, config, EmitFlags::all());
        }

        Ok(count)
    }
}

/// 生成全部工具类并插入到 `tree` 已有规则之前
///
/// 返回插入的顶层规则数量；配置不合法时返回错误且不修改 `tree`
pub fn build(config: &GeneratorConfig, tree: &mut StyleTree) -> Result<usize, ConfigError> {
    let tables = ClassTables::generate(config)?;
    let count = tables.apply(tree, config)?;
    debug!(
        "generated {} classes, {} top-level rules",
        tables.len(),
        count
    );
    Ok(count)
}

/// 生成只包含工具类的样式表
pub fn generate_stylesheet(config: &GeneratorConfig) -> Result<Stylesheet, ConfigError> {
    let mut tree = StyleTree::new();
    build(config, &mut tree)?;
    Ok(tree.into_stylesheet())
}

/// 从 JSON 配置直接生成 CSS 文本
pub fn generate_css(config_json: &str) -> Result<String, GenerateError> {
    let config = load_config_from_json(config_json)?;
    let stylesheet = generate_stylesheet(&config)?;
    Ok(emit_css(&stylesheet)?)
}
