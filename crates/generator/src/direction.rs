//! 方向渐变：8 个线性 + 8 个径向，方向集合固定，与主题颜色无关

use log::debug;
use phf::phf_ordered_map;
use tintflex_core::{ClassKey, ClassMap, Declaration};

/// 线性渐变类 → 方向关键字（从上方开始顺时针）
pub static LINEAR_DIRECTIONS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "bg-gradient-to-t" => "to top",
    "bg-gradient-to-tr" => "to top right",
    "bg-gradient-to-r" => "to right",
    "bg-gradient-to-br" => "to bottom right",
    "bg-gradient-to-b" => "to bottom",
    "bg-gradient-to-bl" => "to bottom left",
    "bg-gradient-to-l" => "to left",
    "bg-gradient-to-tl" => "to top left",
};

/// 径向渐变类 → 圆心位置
pub static RADIAL_DIRECTIONS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "bg-radial-gradient-to-t" => "at top",
    "bg-radial-gradient-to-tr" => "at top right",
    "bg-radial-gradient-to-r" => "at right",
    "bg-radial-gradient-to-br" => "at bottom right",
    "bg-radial-gradient-to-b" => "at bottom",
    "bg-radial-gradient-to-bl" => "at bottom left",
    "bg-radial-gradient-to-l" => "at left",
    "bg-radial-gradient-to-tl" => "at top left",
};

/// from → via → to 三个色标，位置默认 0% / 50% / 100%
///
/// via 未设置时回退到 from；to 未设置时回退到 from 与 transparent。
const GRADIENT_STOPS: &str = "var(--gradient-from) var(--gradient-from-percentage, 0%), \
var(--gradient-via, var(--gradient-from)) var(--gradient-via-percentage, 50%), \
var(--gradient-to, var(--gradient-from),transparent) var(--gradient-to-percentage, 100%)";

fn gradient_image(function: &str, direction: &str) -> String {
    format!("{}({}, {})", function, direction, GRADIENT_STOPS)
}

/// 生成 16 个方向渐变类（`background-image`）
///
/// 径向渐变与线性渐变共用同一组色标回退链。
pub fn generate_directional_gradients() -> ClassMap {
    let mut map = ClassMap::new();

    let tables = [
        ("linear-gradient", &LINEAR_DIRECTIONS),
        ("radial-gradient", &RADIAL_DIRECTIONS),
    ];

    for (function, directions) in tables {
        for (class_name, direction) in directions.entries() {
            map.insert_one(
                ClassKey::plain(*class_name),
                Declaration::new("background-image", gradient_image(function, direction)),
            );
        }
    }

    debug!("directional gradients: {}", map.len());
    map
}
