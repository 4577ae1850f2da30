pub mod emit;
pub mod escape;
pub mod ir;
pub mod style_class;
pub mod tree;

// Re-export main functions
pub use emit::{emit_css, emit_css_minified};
pub use escape::escape_class_name;
pub use ir::{
    create_class_rule, create_media_rule, create_qualified_rule, create_swc_declaration,
    rule_class_name, rule_declarations,
};
pub use style_class::{emit_class_map, insert_rules, EmitFlags};
pub use tree::StyleTree;

// Re-export SWC CSS types
pub use swc_css_ast::{Rule, Stylesheet};
