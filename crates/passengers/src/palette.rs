//! Named color palettes shared by every passenger.

use bevy::prelude::*;

/// Convert a packed `0xRRGGBB` value into an sRGB color.
pub fn hex(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SkinTone {
    #[default]
    Fair,
    Tan,
    Warm,
    Deep,
}

impl SkinTone {
    pub fn rgb(self) -> u32 {
        match self {
            SkinTone::Fair => 0xf4c29a,
            SkinTone::Tan => 0xd9a372,
            SkinTone::Warm => 0xc68642,
            SkinTone::Deep => 0x8d5524,
        }
    }

    pub fn color(self) -> Color {
        hex(self.rgb())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HairColor {
    #[default]
    Black,
    Brown,
    Blonde,
    Auburn,
    Grey,
    Red,
}

impl HairColor {
    pub fn rgb(self) -> u32 {
        match self {
            HairColor::Black => 0x1b1f27,
            HairColor::Brown => 0x3d2d1a,
            HairColor::Blonde => 0xc79f48,
            HairColor::Auburn => 0x8b3b2a,
            HairColor::Grey => 0xb5bcc9,
            HairColor::Red => 0xb43f3c,
        }
    }

    pub fn color(self) -> Color {
        hex(self.rgb())
    }
}
