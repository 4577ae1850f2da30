//! 固定的色阶、透明度与渐变位置表
//!
//! 这些表不可在运行时扩展，所有生成函数都以它们为输入。

/// surface / text / border 使用的明暗色阶
pub const SURFACE_SHADES: [u16; 11] = [0, 50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// 主题颜色使用的色阶
pub const COLOR_SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// 透明度变体（百分比）
pub const OPACITY_SCALE: [u8; 9] = [10, 20, 30, 40, 50, 60, 70, 80, 90];

/// 渐变位置工具类的步长
pub const PERCENTAGE_STEP: u8 = 10;

/// 0%..=100% 的渐变位置
pub fn percentage_steps() -> impl Iterator<Item = u8> {
    (0..=100u8).step_by(PERCENTAGE_STEP as usize)
}

/// 将百分比写成 0..1 的小数，不经过浮点
///
/// 例如：50 → "0.5"，5 → "0.05"，100 → "1"
pub fn alpha_fraction(percent: u8) -> String {
    if percent >= 100 {
        return "1".to_string();
    }
    if percent == 0 {
        return "0".to_string();
    }
    let digits = format!("{:02}", percent);
    format!("0.{}", digits.trim_end_matches('0'))
}
