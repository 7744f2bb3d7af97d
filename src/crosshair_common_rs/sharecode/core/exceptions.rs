/// 共有コード処理用エラー型定義
/// エンコード・デコードの失敗理由をすべて列挙する

use std::fmt;
use thiserror::Error;

/// 設定レコードのフィールド識別子（スキーマ順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Style,
    Size,
    Gap,
    Thickness,
    OutlineEnabled,
    DotEnabled,
    Red,
    Green,
    Blue,
    Alpha,
}

impl FieldId {
    /// スキーマ上の並び順
    pub const ALL: [FieldId; 10] = [
        FieldId::Style,
        FieldId::Size,
        FieldId::Gap,
        FieldId::Thickness,
        FieldId::OutlineEnabled,
        FieldId::DotEnabled,
        FieldId::Red,
        FieldId::Green,
        FieldId::Blue,
        FieldId::Alpha,
    ];

    /// UI側で使われるフィールド名
    pub fn name(&self) -> &'static str {
        match self {
            FieldId::Style => "style",
            FieldId::Size => "size",
            FieldId::Gap => "gap",
            FieldId::Thickness => "thickness",
            FieldId::OutlineEnabled => "outlineEnabled",
            FieldId::DotEnabled => "dotEnabled",
            FieldId::Red => "color.red",
            FieldId::Green => "color.green",
            FieldId::Blue => "color.blue",
            FieldId::Alpha => "alpha",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 共有コードのエンコード・デコードエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharecodeError {
    /// フィールド値が定義域外（エンコード時）、または復元できないコードポイント（デコード時）
    #[error("フィールド '{field}' の値が定義域外です")]
    OutOfDomain { field: FieldId },
    /// コードポイントがビット幅に収まらない（スキーマと量子化の不整合）
    #[error("フィールド '{field}' のコードポイントがビット幅を超えています")]
    FieldOverflow { field: FieldId },
    /// トークンの有効文字数が不正
    #[error("トークン長が不正です: 期待 {expected}文字, 実際 {actual}文字")]
    InvalidLength { expected: usize, actual: usize },
    /// アルファベット外の文字
    #[error("不正な文字 '{character}' (位置 {position})")]
    InvalidCharacter { character: char, position: usize },
    /// 先頭のパディングビットが0でない
    #[error("パディングビットが0ではありません")]
    InvalidPadding,
    /// チェックサム不一致
    #[error("チェックサム検証に失敗しました。期待値: 0x{expected:02X}, 実際: 0x{actual:02X}")]
    ChecksumMismatch { expected: u8, actual: u8 },
}

/// Result型のエイリアス
pub type SharecodeResult<T> = Result<T, SharecodeError>;

impl SharecodeError {
    /// 定義域外エラーを作成
    pub fn out_of_domain(field: FieldId) -> Self {
        SharecodeError::OutOfDomain { field }
    }

    /// チェックサム不一致エラーを作成
    pub fn mismatch(expected: u8, actual: u8) -> Self {
        SharecodeError::ChecksumMismatch { expected, actual }
    }

    /// トークンの破損・入力ミスによるエラーか
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            SharecodeError::InvalidLength { .. }
                | SharecodeError::InvalidCharacter { .. }
                | SharecodeError::InvalidPadding
                | SharecodeError::ChecksumMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharecode_error_display() {
        let err = SharecodeError::out_of_domain(FieldId::Size);
        assert_eq!(format!("{}", err), "フィールド 'size' の値が定義域外です");

        let err = SharecodeError::InvalidLength { expected: 12, actual: 11 };
        assert_eq!(format!("{}", err), "トークン長が不正です: 期待 12文字, 実際 11文字");
    }

    #[test]
    fn test_checksum_error_display() {
        let err = SharecodeError::mismatch(0x0A, 0xEF);
        assert_eq!(
            format!("{}", err),
            "チェックサム検証に失敗しました。期待値: 0x0A, 実際: 0xEF"
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(FieldId::OutlineEnabled.to_string(), "outlineEnabled");
        assert_eq!(FieldId::Blue.to_string(), "color.blue");
        assert_eq!(FieldId::ALL.len(), 10);
    }

    #[test]
    fn test_decode_error_classification() {
        assert!(SharecodeError::InvalidPadding.is_decode_error());
        assert!(!SharecodeError::out_of_domain(FieldId::Gap).is_decode_error());
        assert!(!SharecodeError::FieldOverflow { field: FieldId::Style }.is_decode_error());
    }
}
