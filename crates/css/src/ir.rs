use crate::escape::escape_class_name;
use swc_common::DUMMY_SP;
use swc_css_ast::{
    AtRule, AtRuleName, AtRulePrelude, ClassSelector, ComplexSelector, ComplexSelectorChildren,
    ComponentValue, CompoundSelector, Declaration as SwcDeclaration, DeclarationName, Dimension,
    Ident, Length, MediaCondition, MediaConditionAllType, MediaConditionType, MediaFeature,
    MediaFeatureName, MediaFeaturePlain, MediaFeatureValue, MediaInParens, MediaQuery,
    MediaQueryList, MediaType, Number, PseudoClassSelector, QualifiedRule, QualifiedRulePrelude,
    Rule, SelectorList, SimpleBlock, SubclassSelector, Token, TokenAndSpan,
};
use tintflex_core::Declaration;

fn ident(value: &str) -> Ident {
    Ident {
        span: DUMMY_SP,
        value: value.into(),
        raw: None,
    }
}

/// 将 CSS 值包装为原样保留的 token
///
/// 生成的值都是完整的 CSS 片段（var()、color-mix()、linear-gradient() 等），
/// 不做二次解析。
fn preserved_value(value_str: &str) -> ComponentValue {
    let trimmed = value_str.trim();

    ComponentValue::PreservedToken(Box::new(TokenAndSpan {
        span: DUMMY_SP,
        token: Token::Ident {
            value: trimmed.into(),
            raw: trimmed.into(),
        },
    }))
}

/// 从 tintflex Declaration 创建 SWC CSS Declaration
pub fn create_swc_declaration(decl: &Declaration) -> SwcDeclaration {
    SwcDeclaration {
        span: DUMMY_SP,
        name: DeclarationName::Ident(ident(&decl.property)),
        value: vec![preserved_value(&decl.value)],
        important: None,
    }
}

fn class_subclass_selector(class_name: &str) -> SubclassSelector {
    SubclassSelector::Class(ClassSelector {
        span: DUMMY_SP,
        text: Ident {
            span: DUMMY_SP,
            value: class_name.into(),
            raw: Some(escape_class_name(class_name).into()),
        },
    })
}

/// 创建类选择器
///
/// `pseudo_class` 为 `Some("hover")` 时生成 `.{class}:hover`
pub fn create_class_selector(class_name: &str, pseudo_class: Option<&str>) -> ComplexSelector {
    let mut subclass_selectors = vec![class_subclass_selector(class_name)];

    if let Some(pseudo) = pseudo_class {
        subclass_selectors.push(SubclassSelector::PseudoClass(PseudoClassSelector {
            span: DUMMY_SP,
            name: ident(pseudo),
            children: None,
        }));
    }

    let compound_selector = CompoundSelector {
        span: DUMMY_SP,
        nesting_selector: None,
        type_selector: None,
        subclass_selectors,
    };

    ComplexSelector {
        span: DUMMY_SP,
        children: vec![ComplexSelectorChildren::CompoundSelector(compound_selector)],
    }
}

/// 从选择器和声明列表创建 CSS 规则
pub fn create_qualified_rule(selector: ComplexSelector, declarations: &[Declaration]) -> QualifiedRule {
    let selector_list = SelectorList {
        span: DUMMY_SP,
        children: vec![selector],
    };

    let block_children = declarations
        .iter()
        .map(|decl| ComponentValue::Declaration(Box::new(create_swc_declaration(decl))))
        .collect();

    let block = SimpleBlock {
        span: DUMMY_SP,
        name: TokenAndSpan {
            span: DUMMY_SP,
            token: Token::LBrace,
        },
        value: block_children,
    };

    QualifiedRule {
        span: DUMMY_SP,
        prelude: QualifiedRulePrelude::SelectorList(selector_list),
        block,
    }
}

/// 创建单个类的规则：`.{class} { ... }`
pub fn create_class_rule(class_name: &str, declarations: &[Declaration]) -> Rule {
    let selector = create_class_selector(class_name, None);
    Rule::QualifiedRule(Box::new(create_qualified_rule(selector, declarations)))
}

/// 尝试解析长度值，返回 (数字部分, 单位部分)
fn parse_length(s: &str) -> Option<(f64, &str)> {
    const UNITS: &[&str] = &["px", "rem", "em"];

    for unit in UNITS {
        if let Some(num_part) = s.strip_suffix(unit) {
            if let Ok(value) = num_part.parse::<f64>() {
                return Some((value, unit));
            }
        }
    }

    None
}

fn min_width_query(min_width: &str) -> Option<MediaQueryList> {
    let (value, unit) = parse_length(min_width.trim())?;

    let feature = MediaFeature::Plain(MediaFeaturePlain {
        span: DUMMY_SP,
        name: MediaFeatureName::Ident(ident("min-width")),
        value: Box::new(MediaFeatureValue::Dimension(Dimension::Length(Length {
            span: DUMMY_SP,
            value: Number {
                span: DUMMY_SP,
                value,
                raw: None,
            },
            unit: ident(unit),
        }))),
    });

    let query = MediaQuery {
        span: DUMMY_SP,
        modifier: None,
        media_type: Some(MediaType::Ident(ident("screen"))),
        keyword: Some(ident("and")),
        condition: Some(Box::new(MediaConditionType::All(MediaCondition {
            span: DUMMY_SP,
            conditions: vec![MediaConditionAllType::MediaInParens(MediaInParens::Feature(
                Box::new(feature),
            ))],
        }))),
    };

    Some(MediaQueryList {
        span: DUMMY_SP,
        queries: vec![query],
    })
}

/// 创建 `@media screen and (min-width: ...)` 规则，包裹给定的类规则
///
/// 宽度无法解析时返回 None（配置校验阶段已拒绝这种输入）。
pub fn create_media_rule(min_width: &str, rules: Vec<QualifiedRule>) -> Option<Rule> {
    let query_list = min_width_query(min_width)?;

    let block = SimpleBlock {
        span: DUMMY_SP,
        name: TokenAndSpan {
            span: DUMMY_SP,
            token: Token::LBrace,
        },
        value: rules
            .into_iter()
            .map(|rule| ComponentValue::QualifiedRule(Box::new(rule)))
            .collect(),
    };

    Some(Rule::AtRule(Box::new(AtRule {
        span: DUMMY_SP,
        name: AtRuleName::Ident(ident("media")),
        prelude: Some(Box::new(AtRulePrelude::MediaPrelude(query_list))),
        block: Some(block),
    })))
}

/// 读取规则的类名（未转义），非普通类规则返回 None
pub fn rule_class_name(rule: &Rule) -> Option<String> {
    let Rule::QualifiedRule(rule) = rule else {
        return None;
    };
    let QualifiedRulePrelude::SelectorList(list) = &rule.prelude else {
        return None;
    };
    let ComplexSelectorChildren::CompoundSelector(compound) = list.children.first()?.children.first()?
    else {
        return None;
    };
    match compound.subclass_selectors.first()? {
        SubclassSelector::Class(class) => Some(class.text.value.to_string()),
        _ => None,
    }
}

/// 读取规则中的声明，按 (属性, 值) 返回
pub fn rule_declarations(rule: &Rule) -> Vec<(String, String)> {
    let Rule::QualifiedRule(rule) = rule else {
        return Vec::new();
    };

    rule.block
        .value
        .iter()
        .filter_map(|value| match value {
            ComponentValue::Declaration(decl) => {
                let property = match &decl.name {
                    DeclarationName::Ident(ident) => ident.value.to_string(),
                    DeclarationName::DashedIdent(ident) => ident.value.to_string(),
                };
                let value = decl
                    .value
                    .iter()
                    .filter_map(|v| match v {
                        ComponentValue::PreservedToken(token) => match &token.token {
                            Token::Ident { raw, .. } => Some(raw.to_string()),
                            _ => None,
                        },
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                Some((property, value))
            }
            _ => None,
        })
        .collect()
}
