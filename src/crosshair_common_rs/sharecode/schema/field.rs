/// フィールド記述子
/// 名前・ビット幅・オフセット・量子化ルールをひとまとめにする

use super::quantizer::{FieldValue, Quantization};
use crate::crosshair_common_rs::sharecode::core::exceptions::{FieldId, SharecodeError, SharecodeResult};

/// 1フィールド分の定義
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub bit_width: usize,
    pub offset: usize,
    pub quantization: Quantization,
}

impl FieldDescriptor {
    /// オフセット未確定の記述子を作成（オフセットはスキーマ構築時に決まる）
    pub fn new(id: FieldId, bit_width: usize, quantization: Quantization) -> Self {
        Self {
            id,
            bit_width,
            offset: 0,
            quantization,
        }
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// このフィールドの終了位置
    pub fn end(&self) -> usize {
        self.offset + self.bit_width
    }

    /// 値をコードポイントに変換
    pub fn quantize(&self, value: FieldValue) -> SharecodeResult<u32> {
        self.quantization
            .quantize(value)
            .ok_or(SharecodeError::OutOfDomain { field: self.id })
    }

    /// コードポイントを値に戻す
    pub fn dequantize(&self, code_point: u32) -> SharecodeResult<FieldValue> {
        self.quantization
            .dequantize(code_point)
            .ok_or(SharecodeError::OutOfDomain { field: self.id })
    }

    /// 全コードポイントがビット幅に収まるか
    pub fn fits_width(&self) -> bool {
        self.bit_width < 64 && self.quantization.cardinality() <= 1u64 << self.bit_width
    }
}
