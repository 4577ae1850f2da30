use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "background-color"）
    pub property: String,
    /// CSS 属性值（如 "var(--p-blue-500)"）
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// 颜色类对应的 CSS 属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorProperty {
    /// `text-*` → color
    Text,
    /// `bg-*` → background-color
    Background,
    /// `border-*` → border-color
    Border,
}

impl ColorProperty {
    pub const ALL: [ColorProperty; 3] = [
        ColorProperty::Text,
        ColorProperty::Background,
        ColorProperty::Border,
    ];

    /// 类名前缀（如 "bg"）
    pub fn stem(self) -> &'static str {
        match self {
            ColorProperty::Text => "text",
            ColorProperty::Background => "bg",
            ColorProperty::Border => "border",
        }
    }

    /// CSS 属性名
    pub fn property(self) -> &'static str {
        match self {
            ColorProperty::Text => "color",
            ColorProperty::Background => "background-color",
            ColorProperty::Border => "border-color",
        }
    }

    pub fn declaration(self, value: impl Into<String>) -> Declaration {
        Declaration::new(self.property(), value)
    }
}

/// 渐变色标角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GradientRole {
    From,
    Via,
    To,
}

impl GradientRole {
    pub const ALL: [GradientRole; 3] = [GradientRole::From, GradientRole::Via, GradientRole::To];

    pub fn name(self) -> &'static str {
        match self {
            GradientRole::From => "from",
            GradientRole::Via => "via",
            GradientRole::To => "to",
        }
    }

    /// 色标自定义属性（如 "--gradient-from"）
    pub fn color_property(self) -> String {
        format!("--gradient-{}", self.name())
    }

    /// 位置自定义属性（如 "--gradient-from-percentage"）
    pub fn percentage_property(self) -> String {
        format!("--gradient-{}-percentage", self.name())
    }
}

impl fmt::Display for GradientRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 工具类的结构化键
///
/// 类名中的 `/` 和 `%` 只在输出到样式表时才转义，
/// 生成阶段始终使用结构化形式，保证不同输入不会产生相同的键。
///
/// 相等、哈希与排序都按原始类名比较：`Plain("x/50")` 与 `Alpha { base: "x", opacity: 50 }`
/// 是同一个类，在 [`ClassMap`](crate::ClassMap) 中只占一个条目。
#[derive(Debug, Clone)]
pub enum ClassKey {
    /// 普通类名（如 "surface-500"、"bg-blue-500"）
    Plain(String),
    /// 透明度变体：`{base}/{opacity}`
    Alpha { base: String, opacity: u8 },
    /// 渐变位置：`{role}-{step}%`
    Percentage { role: GradientRole, step: u8 },
}

impl ClassKey {
    pub fn plain(name: impl Into<String>) -> Self {
        ClassKey::Plain(name.into())
    }

    pub fn alpha(base: impl Into<String>, opacity: u8) -> Self {
        ClassKey::Alpha {
            base: base.into(),
            opacity,
        }
    }

    pub fn percentage(role: GradientRole, step: u8) -> Self {
        ClassKey::Percentage { role, step }
    }

    /// 原始类名（未转义），即 HTML class 属性中书写的形式
    pub fn class_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassKey::Plain(name) => f.write_str(name),
            ClassKey::Alpha { base, opacity } => write!(f, "{}/{}", base, opacity),
            ClassKey::Percentage { role, step } => write!(f, "{}-{}%", role, step),
        }
    }
}

impl PartialEq for ClassKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ClassKey::Plain(a), ClassKey::Plain(b)) => a == b,
            _ => self.class_name() == other.class_name(),
        }
    }
}

impl Eq for ClassKey {}

impl Hash for ClassKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class_name().hash(state);
    }
}

impl PartialOrd for ClassKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClassKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class_name().cmp(&other.class_name())
    }
}

impl From<&str> for ClassKey {
    fn from(name: &str) -> Self {
        ClassKey::Plain(name.to_string())
    }
}
