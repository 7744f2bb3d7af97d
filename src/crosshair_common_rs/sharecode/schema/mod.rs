//! フィールドスキーマ
//! 設定レコードの各フィールドの並び順・ビット幅・量子化ルール

pub mod field;
pub mod quantizer;

pub use field::FieldDescriptor;
pub use quantizer::{FieldValue, Quantization};

use crate::crosshair_common_rs::sharecode::core::exceptions::FieldId;
use crate::crosshair_common_rs::sharecode::core::PAYLOAD_BITS;
use once_cell::sync::Lazy;
use thiserror::Error;

/// スキーマ構築時の不整合
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// 量子化後の値がビット幅に収まらない
    #[error("フィールド '{field}' は {bit_width}ビットに収まりません")]
    WidthTooSmall { field: FieldId, bit_width: usize },
    /// ビット幅の合計がペイロード幅と一致しない
    #[error("ビット幅の合計が不正です: 期待 {expected}, 実際 {actual}")]
    TotalMismatch { expected: usize, actual: usize },
}

/// 順序付きのフィールド定義一式
#[derive(Debug, Clone)]
pub struct FieldSchema {
    fields: Vec<FieldDescriptor>,
    total_bits: usize,
}

impl FieldSchema {
    /// 記述子の並びからスキーマを構築し、オフセットを確定する
    pub fn new(descriptors: Vec<FieldDescriptor>, expected_bits: usize) -> Result<Self, SchemaError> {
        let mut fields = Vec::with_capacity(descriptors.len());
        let mut total_bits = 0;
        for mut descriptor in descriptors {
            if !descriptor.fits_width() {
                return Err(SchemaError::WidthTooSmall {
                    field: descriptor.id,
                    bit_width: descriptor.bit_width,
                });
            }
            descriptor.offset = total_bits;
            total_bits = descriptor.end();
            fields.push(descriptor);
        }

        if total_bits != expected_bits {
            return Err(SchemaError::TotalMismatch {
                expected: expected_bits,
                actual: total_bits,
            });
        }

        Ok(Self { fields, total_bits })
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// フィールドを識別子で検索
    pub fn get_field(&self, id: FieldId) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// 並び順どおりのビット幅
    pub fn widths(&self) -> Vec<usize> {
        self.fields.iter().map(|f| f.bit_width).collect()
    }

    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    pub fn total_bytes(&self) -> usize {
        (self.total_bits + 7) / 8
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// クロスヘア設定のフィールド定義（上位ビットから順）
pub fn crosshair_descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new(FieldId::Style, 3, Quantization::Integer { min: 0, max: 5 }),
        FieldDescriptor::new(FieldId::Size, 4, Quantization::Stepped { min: 1.0, step: 0.5, steps: 9 }),
        FieldDescriptor::new(FieldId::Gap, 4, Quantization::Integer { min: -5, max: 5 }),
        FieldDescriptor::new(FieldId::Thickness, 3, Quantization::Stepped { min: 0.0, step: 0.5, steps: 7 }),
        FieldDescriptor::new(FieldId::OutlineEnabled, 1, Quantization::Flag),
        FieldDescriptor::new(FieldId::DotEnabled, 1, Quantization::Flag),
        FieldDescriptor::new(FieldId::Red, 8, Quantization::Integer { min: 0, max: 255 }),
        FieldDescriptor::new(FieldId::Green, 8, Quantization::Integer { min: 0, max: 255 }),
        FieldDescriptor::new(FieldId::Blue, 8, Quantization::Integer { min: 0, max: 255 }),
        FieldDescriptor::new(FieldId::Alpha, 8, Quantization::Rounded { min: 0, max: 255 }),
    ]
}

// 初回アクセス時に一度だけ検証する
static CROSSHAIR_SCHEMA: Lazy<FieldSchema> = Lazy::new(|| {
    FieldSchema::new(crosshair_descriptors(), PAYLOAD_BITS).expect("crosshair schema layout")
});

/// クロスヘア設定のスキーマ
pub fn schema() -> &'static FieldSchema {
    &CROSSHAIR_SCHEMA
}
