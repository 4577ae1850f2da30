use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// 配置加载错误
///
/// 所有错误都在生成开始前返回，生成过程本身不会失败。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid css variable prefix {0:?}: only [A-Za-z0-9_-] is allowed")]
    InvalidPrefix(String),
    #[error("invalid breakpoint {name:?}: {width:?}")]
    InvalidBreakpoint { name: String, width: String },
}

/// CSS 变量前缀配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefixConfig {
    /// 拼接在所有自定义属性名前（如 "p-" → `--p-blue-500`）
    pub css_variable: String,
}

impl PrefixConfig {
    pub fn new(css_variable: impl Into<String>) -> Self {
        Self {
            css_variable: css_variable.into(),
        }
    }

    /// 生成自定义属性引用：`var(--{prefix}{name})`
    pub fn var(&self, name: &str) -> String {
        format!("var(--{}{})", self.css_variable, name)
    }
}

/// 单个主题，只使用颜色名，颜色值本身被忽略
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub colors: IndexMap<String, serde_json::Value>,
}

impl Theme {
    /// 按声明顺序返回颜色名
    pub fn color_names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(|s| s.as_str())
    }
}

/// 主题注册表：主题名 → 主题，保持注册顺序
pub type ThemeRegistry = IndexMap<String, Theme>;

/// 生成器配置
///
/// JSON 格式示例：
/// ```json
/// {
///   "prefix": { "cssVariable": "p-" },
///   "themes": {
///     "default": { "colors": { "blue": {}, "green": {} } }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub prefix: PrefixConfig,
    /// 主题名 → 主题，按注册顺序遍历
    pub themes: ThemeRegistry,
    /// 响应式断点名 → 最小宽度
    #[serde(default = "default_breakpoints")]
    pub breakpoints: IndexMap<String, String>,
    /// 生成状态变体的伪类
    #[serde(default = "default_states")]
    pub states: Vec<String>,
}

fn default_breakpoints() -> IndexMap<String, String> {
    [("sm", "576px"), ("md", "768px"), ("lg", "992px"), ("xl", "1200px")]
        .into_iter()
        .map(|(name, width)| (name.to_string(), width.to_string()))
        .collect()
}

fn default_states() -> Vec<String> {
    vec!["hover".to_string(), "focus".to_string(), "active".to_string()]
}

impl GeneratorConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: PrefixConfig::new(prefix),
            themes: ThemeRegistry::new(),
            breakpoints: default_breakpoints(),
            states: default_states(),
        }
    }

    /// 添加主题（builder 模式），同名主题被替换
    pub fn with_theme<I, S>(mut self, name: impl Into<String>, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors = colors
            .into_iter()
            .map(|c| (c.into(), serde_json::Value::Object(Default::default())))
            .collect();
        self.themes.insert(name.into(), Theme { colors });
        self
    }

    /// 设置断点（builder 模式）
    pub fn with_breakpoints<I, K, V>(mut self, breakpoints: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.breakpoints = breakpoints
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// 设置状态伪类（builder 模式）
    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn prefix(&self) -> &PrefixConfig {
        &self.prefix
    }

    /// 校验前置条件
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.prefix.css_variable;
        if !prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::InvalidPrefix(prefix.clone()));
        }

        for (name, width) in &self.breakpoints {
            if !is_valid_identifier(name) || !is_length(width) {
                return Err(ConfigError::InvalidBreakpoint {
                    name: name.clone(),
                    width: width.clone(),
                });
            }
        }

        Ok(())
    }
}

fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// 断点宽度必须是 `<number><unit>` 形式（如 "768px"、"48em"）
fn is_length(width: &str) -> bool {
    let digits_end = width
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(width.len());
    let (number, unit) = width.split_at(digits_end);
    !number.is_empty()
        && number.parse::<f64>().is_ok()
        && matches!(unit, "px" | "em" | "rem")
}

/// 从 JSON 字符串加载并校验生成器配置
pub fn load_config_from_json(json_str: &str) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig = serde_json::from_str(json_str)?;
    config.validate()?;
    Ok(config)
}
