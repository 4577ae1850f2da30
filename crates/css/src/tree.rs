use swc_common::DUMMY_SP;
use swc_css_ast::{Rule, Stylesheet};

/// 生成规则的目标样式表
///
/// 生成的工具类插入在已有规则之前，且按插入顺序排列：
/// 手写规则始终位于所有工具类之后，在层叠中优先级更高。
#[derive(Debug, Clone)]
pub struct StyleTree {
    stylesheet: Stylesheet,
    /// 下一条生成规则的插入位置
    cursor: usize,
}

impl StyleTree {
    pub fn new() -> Self {
        Self::from_stylesheet(Stylesheet {
            span: DUMMY_SP,
            rules: Vec::new(),
        })
    }

    /// 包装已有样式表，其中的规则视为手写规则
    pub fn from_stylesheet(stylesheet: Stylesheet) -> Self {
        Self {
            stylesheet,
            cursor: 0,
        }
    }

    /// 在已有规则之前、已生成规则之后插入一条规则
    pub fn insert_before_existing(&mut self, rule: Rule) {
        self.stylesheet.rules.insert(self.cursor, rule);
        self.cursor += 1;
    }

    /// 追加一条手写规则
    pub fn append(&mut self, rule: Rule) {
        self.stylesheet.rules.push(rule);
    }

    /// 已插入的生成规则数量
    pub fn generated_len(&self) -> usize {
        self.cursor
    }

    pub fn rules(&self) -> &[Rule] {
        &self.stylesheet.rules
    }

    /// 生成的规则
    pub fn generated_rules(&self) -> &[Rule] {
        &self.stylesheet.rules[..self.cursor]
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    pub fn into_stylesheet(self) -> Stylesheet {
        self.stylesheet
    }
}

impl Default for StyleTree {
    fn default() -> Self {
        Self::new()
    }
}
