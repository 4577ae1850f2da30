use crate::ir::{create_class_rule, create_class_selector, create_media_rule, create_qualified_rule};
use crate::tree::StyleTree;
use log::{debug, trace, warn};
use swc_css_ast::Rule;
use tintflex_core::{ClassMap, GeneratorConfig};

/// 规则输出选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitFlags {
    /// 为每个断点生成 `{bp}:{class}` 变体
    pub responsive: bool,
    /// 为每个状态伪类生成 `{state}:{class}` 变体
    pub states: bool,
}

impl EmitFlags {
    pub fn all() -> Self {
        Self {
            responsive: true,
            states: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

/// 直接插入类规则，不生成任何变体
///
/// 返回插入的规则数量
pub fn insert_rules(map: &ClassMap, tree: &mut StyleTree) -> usize {
    for (key, declarations) in map {
        let class_name = key.class_name();
        trace!("insert .{}", class_name);
        tree.insert_before_existing(create_class_rule(&class_name, declarations));
    }
    map.len()
}

/// 将类表写入样式表
///
/// 输出顺序：
/// 1. 基础规则 `.{class}`
/// 2. 状态变体 `.{state}\:{class}:{state}`（按配置中的状态顺序）
/// 3. 每个断点一个 `@media screen and (min-width: ...)` 块，包含 `.{bp}\:{class}`
///
/// 所有规则都插入在样式表已有规则之前。返回插入的顶层规则数量。
pub fn emit_class_map(
    map: &ClassMap,
    tree: &mut StyleTree,
    config: &GeneratorConfig,
    flags: EmitFlags,
) -> usize {
    if map.is_empty() {
        return 0;
    }

    let mut count = insert_rules(map, tree);

    if flags.states {
        for state in &config.states {
            for (key, declarations) in map {
                let variant = format!("{}:{}", state, key.class_name());
                let selector = create_class_selector(&variant, Some(state.as_str()));
                let rule = create_qualified_rule(selector, declarations);
                tree.insert_before_existing(Rule::QualifiedRule(Box::new(rule)));
                count += 1;
            }
        }
    }

    if flags.responsive {
        for (breakpoint, min_width) in &config.breakpoints {
            let rules = map
                .iter()
                .map(|(key, declarations)| {
                    let variant = format!("{}:{}", breakpoint, key.class_name());
                    create_qualified_rule(create_class_selector(&variant, None), declarations)
                })
                .collect();

            match create_media_rule(min_width, rules) {
                Some(media) => {
                    tree.insert_before_existing(media);
                    count += 1;
                }
                None => warn!("skipping breakpoint {}: invalid width {}", breakpoint, min_width),
            }
        }
    }

    debug!("emitted {} rules for {} classes", count, map.len());
    count
}
