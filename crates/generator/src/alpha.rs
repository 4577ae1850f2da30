use crate::colored::ColoredClasses;
use log::debug;
use tintflex_core::scales::alpha_fraction;
use tintflex_core::{ClassKey, ColorProperty};

/// 固定的黑白色调
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    White,
    Black,
}

impl Tone {
    pub const ALL: [Tone; 2] = [Tone::White, Tone::Black];

    pub fn name(self) -> &'static str {
        match self {
            Tone::White => "white",
            Tone::Black => "black",
        }
    }

    /// `rgba(255,255,255,0.5)` / `rgba(0,0,0,0.5)`
    pub fn rgba(self, opacity: u8) -> String {
        let channel = match self {
            Tone::White => "255,255,255",
            Tone::Black => "0,0,0",
        };
        format!("rgba({},{})", channel, alpha_fraction(opacity))
    }

    /// 同一透明度的两种类名写法：`{base}/{o}` 与 `{base}-alpha-{o}`
    pub fn class_keys(self, stem: &str, opacity: u8) -> [ClassKey; 2] {
        let base = format!("{}-{}", stem, self.name());
        let alpha = ClassKey::plain(format!("{}-alpha-{}", base, opacity));
        [ClassKey::alpha(base, opacity), alpha]
    }
}

/// 黑白透明度类
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhiteBlackClasses {
    pub white: ColoredClasses,
    pub black: ColoredClasses,
}

impl WhiteBlackClasses {
    pub fn get(&self, tone: Tone) -> &ColoredClasses {
        match tone {
            Tone::White => &self.white,
            Tone::Black => &self.black,
        }
    }

    fn get_mut(&mut self, tone: Tone) -> &mut ColoredClasses {
        match tone {
            Tone::White => &mut self.white,
            Tone::Black => &mut self.black,
        }
    }

    pub fn len(&self) -> usize {
        self.white.len() + self.black.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 生成 `text-white/{o}`、`text-white-alpha-{o}` 等黑白透明度类
///
/// 两种写法解析为完全相同的 rgba 值，可以互换使用。
pub fn generate_white_black_opacity_classes(opacities: &[u8]) -> WhiteBlackClasses {
    let mut classes = WhiteBlackClasses::default();

    for &opacity in opacities {
        for tone in Tone::ALL {
            let value = tone.rgba(opacity);

            for property in ColorProperty::ALL {
                let map = classes.get_mut(tone).get_mut(property);
                for key in tone.class_keys(property.stem(), opacity) {
                    map.insert_one(key, property.declaration(value.clone()));
                }
            }
        }
    }

    debug!("white/black opacity classes: {}", classes.len());
    classes
}
