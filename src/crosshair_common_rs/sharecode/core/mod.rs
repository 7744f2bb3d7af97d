//! 共有コードのコア機能
//! ビット詰め、チェックサム、アルファベット変換、エラー型

pub mod alphabet;
pub mod bit_utils;
pub mod checksum;
pub mod exceptions;

// 便利な再エクスポート
pub use alphabet::{decode_token, encode_bits, encode_frame, group_token, ALPHABET, TOKEN_SYMBOLS};
pub use bit_utils::{pack_fields, unpack_fields, BitPackError};
pub use checksum::{append_checksum, calc_checksum8, verify_checksum8, CHECKSUM_SEED};
pub use exceptions::{FieldId, SharecodeError, SharecodeResult};

/// ペイロードのビット数（全フィールド幅の合計）
pub const PAYLOAD_BITS: usize = 48;
/// ペイロードのバイト数
pub const PAYLOAD_BYTES: usize = PAYLOAD_BITS / 8;
/// ペイロード + チェックサム1バイト
pub const FRAME_BYTES: usize = PAYLOAD_BYTES + 1;
