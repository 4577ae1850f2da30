pub mod class_map;
pub mod config;
pub mod scales;
pub mod types;

// Re-export commonly used types
pub use class_map::ClassMap;
pub use config::{
    load_config_from_json, ConfigError, GeneratorConfig, PrefixConfig, Theme,
    ThemeRegistry,
};
pub use types::{ClassKey, ColorProperty, Declaration, GradientRole};
