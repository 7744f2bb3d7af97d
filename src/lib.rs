/// Crosshair Sharecode Rust Implementation
/// クロスヘア設定と共有コードの相互変換ライブラリ

pub mod crosshair_common_rs;

// 便利な再エクスポート
pub mod prelude {
    pub use crate::crosshair_common_rs::sharecode::codec::{decode, encode};
    pub use crate::crosshair_common_rs::sharecode::core::exceptions::{FieldId, SharecodeError};
    pub use crate::crosshair_common_rs::sharecode::types::{
        Alpha, Color, CrosshairConfig, Gap, Size, Style, Thickness,
    };
}

pub use crosshair_common_rs::sharecode::codec::{decode, encode};
