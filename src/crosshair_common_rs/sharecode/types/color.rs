/// クロスヘアの色
/// `#RRGGBB` 形式との相互変換と CSS の rgba 表記

use super::crosshair_config::Alpha;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// 色文字列の解析エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("色コードの桁数が不正です: '{0}' (#RGB または #RRGGBB)")]
    InvalidLength(String),
    #[error("色コードに16進数以外の文字があります: '{0}'")]
    InvalidDigit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// `#RRGGBB` / `RRGGBB` / `#RGB` を解析する（大文字小文字は区別しない）
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let expanded = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(ColorParseError::InvalidLength(input.to_string())),
        };

        let mut rgb = [0u8; 3];
        hex::decode_to_slice(&expanded, &mut rgb)
            .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))?;
        Ok(Self::new(rgb[0], rgb[1], rgb[2]))
    }

    /// `#RRGGBB`（大文字）
    pub fn to_hex(&self) -> String {
        format!("#{}", hex::encode_upper([self.red, self.green, self.blue]))
    }

    /// CSS の `rgba(r, g, b, a)` 表記（a は alpha/255 を小数3桁まで）
    pub fn to_rgba_css(&self, alpha: Alpha) -> String {
        let fraction = format!("{:.3}", alpha.0 / 255.0);
        let fraction = fraction.trim_end_matches('0').trim_end_matches('.');
        format!("rgba({}, {}, {}, {})", self.red, self.green, self.blue, fraction)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}
