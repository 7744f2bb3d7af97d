//! クロスヘア共有コード
//! 設定レコード ⇄ `AAAA-AAAA-AAAA` 形式トークンの相互変換

pub mod codec;
pub mod core;
pub mod schema;
pub mod types;

pub use codec::{decode, encode};
pub use self::core::exceptions::{FieldId, SharecodeError, SharecodeResult};
pub use types::{Alpha, Color, CrosshairConfig, Gap, Size, Style, Thickness};
