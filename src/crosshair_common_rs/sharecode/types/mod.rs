//! 設定レコードの型定義

pub mod color;
pub mod crosshair_config;

pub use color::{Color, ColorParseError};
pub use crosshair_config::{Alpha, CrosshairConfig, Gap, Size, Style, Thickness};
