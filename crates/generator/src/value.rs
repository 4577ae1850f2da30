//! 生成器共用的 CSS 值模板

use tintflex_core::scales::alpha_fraction;

/// `color-mix(in srgb, {color} {opacity}%, transparent)`
pub(crate) fn color_mix(color: &str, opacity: u8) -> String {
    format!("color-mix(in srgb, {} {}%, transparent)", color, opacity)
}

/// surface 系列的透明度模板：`color-mix(in srgb, {color}, {opacity/100}%, transparent)`
///
/// 与主题颜色的模板不同，透明度以小数写入，且颜色后带逗号。
pub(crate) fn surface_mix(color: &str, opacity: u8) -> String {
    format!(
        "color-mix(in srgb, {}, {}%, transparent)",
        color,
        alpha_fraction(opacity)
    )
}
