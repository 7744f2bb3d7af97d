/// クロスヘア設定レコード
/// エディタとコーデックの間でやり取りされる、型付きの設定値

use super::color::Color;
use crate::crosshair_common_rs::sharecode::core::exceptions::{FieldId, SharecodeError, SharecodeResult};
use crate::crosshair_common_rs::sharecode::schema::{schema, FieldValue};
use serde::{Deserialize, Serialize};

/// 値がスキーマ上の定義域にあるか検証する
fn check_domain(field: FieldId, value: FieldValue) -> SharecodeResult<()> {
    schema()
        .get_field(field)
        .ok_or(SharecodeError::OutOfDomain { field })?
        .quantize(value)
        .map(|_| ())
}

/// クロスヘアのスタイル (0..=5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(pub u8);

impl Style {
    pub fn new(value: u8) -> SharecodeResult<Self> {
        check_domain(FieldId::Style, FieldValue::Integer(i64::from(value)))?;
        Ok(Self(value))
    }
}

/// サイズ (1.0..=5.0, 0.5刻み)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size(pub f64);

impl Size {
    pub fn new(value: f64) -> SharecodeResult<Self> {
        check_domain(FieldId::Size, FieldValue::Decimal(value))?;
        Ok(Self(value))
    }
}

/// 中心からの隙間 (-5..=5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gap(pub i8);

impl Gap {
    pub fn new(value: i8) -> SharecodeResult<Self> {
        check_domain(FieldId::Gap, FieldValue::Integer(i64::from(value)))?;
        Ok(Self(value))
    }
}

/// 線の太さ (0.0..=3.0, 0.5刻み)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thickness(pub f64);

impl Thickness {
    pub fn new(value: f64) -> SharecodeResult<Self> {
        check_domain(FieldId::Thickness, FieldValue::Decimal(value))?;
        Ok(Self(value))
    }
}

/// 不透明度 (0..=255)
///
/// エンコード時は最近接整数に丸める（0.5 は0から遠い方へ）。
/// デコード結果は常に整数値になる。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alpha(pub f64);

impl Alpha {
    pub fn new(value: f64) -> SharecodeResult<Self> {
        check_domain(FieldId::Alpha, FieldValue::Decimal(value))?;
        Ok(Self(value))
    }
}

impl From<u8> for Alpha {
    fn from(value: u8) -> Self {
        Alpha(f64::from(value))
    }
}

/// クロスヘア設定
///
/// 省略されたフィールドはエディタの初期値で補う。
/// `color` は TOML のテーブルになるため最後に置く。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrosshairConfig {
    pub style: Style,
    pub size: Size,
    pub gap: Gap,
    pub thickness: Thickness,
    pub outline_enabled: bool,
    pub dot_enabled: bool,
    pub alpha: Alpha,
    pub color: Color,
}

impl Default for CrosshairConfig {
    /// エディタの初期値
    fn default() -> Self {
        Self {
            style: Style(4),
            size: Size(2.5),
            gap: Gap(0),
            thickness: Thickness(1.0),
            outline_enabled: false,
            dot_enabled: false,
            alpha: Alpha(255.0),
            color: Color::WHITE,
        }
    }
}

impl CrosshairConfig {
    /// フィールドの値を量子化用の形で取り出す
    pub fn value_of(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::Style => FieldValue::Integer(i64::from(self.style.0)),
            FieldId::Size => FieldValue::Decimal(self.size.0),
            FieldId::Gap => FieldValue::Integer(i64::from(self.gap.0)),
            FieldId::Thickness => FieldValue::Decimal(self.thickness.0),
            FieldId::OutlineEnabled => FieldValue::Flag(self.outline_enabled),
            FieldId::DotEnabled => FieldValue::Flag(self.dot_enabled),
            FieldId::Red => FieldValue::Integer(i64::from(self.color.red)),
            FieldId::Green => FieldValue::Integer(i64::from(self.color.green)),
            FieldId::Blue => FieldValue::Integer(i64::from(self.color.blue)),
            FieldId::Alpha => FieldValue::Decimal(self.alpha.0),
        }
    }

    /// フィールドに値を設定する。型が合わない値は定義域外として扱う
    pub fn set_field(&mut self, field: FieldId, value: FieldValue) -> SharecodeResult<()> {
        let out_of_domain = SharecodeError::OutOfDomain { field };
        let as_u8 = |v: FieldValue| v.as_i64().and_then(|i| u8::try_from(i).ok());

        match field {
            FieldId::Style => self.style = Style(as_u8(value).ok_or(out_of_domain)?),
            FieldId::Size => self.size = Size(value.as_f64().ok_or(out_of_domain)?),
            FieldId::Gap => {
                let gap = value.as_i64().and_then(|i| i8::try_from(i).ok());
                self.gap = Gap(gap.ok_or(out_of_domain)?);
            }
            FieldId::Thickness => self.thickness = Thickness(value.as_f64().ok_or(out_of_domain)?),
            FieldId::OutlineEnabled => self.outline_enabled = value.as_bool().ok_or(out_of_domain)?,
            FieldId::DotEnabled => self.dot_enabled = value.as_bool().ok_or(out_of_domain)?,
            FieldId::Red => self.color.red = as_u8(value).ok_or(out_of_domain)?,
            FieldId::Green => self.color.green = as_u8(value).ok_or(out_of_domain)?,
            FieldId::Blue => self.color.blue = as_u8(value).ok_or(out_of_domain)?,
            FieldId::Alpha => self.alpha = Alpha(value.as_f64().ok_or(out_of_domain)?),
        }
        Ok(())
    }

    /// (フィールド, 値) の並びからレコードを組み立てる
    pub fn from_field_values(values: &[(FieldId, FieldValue)]) -> SharecodeResult<Self> {
        let mut config = Self::default();
        for &(field, value) in values {
            config.set_field(field, value)?;
        }
        Ok(config)
    }

    /// 全フィールドが定義域内か検証する
    pub fn validate(&self) -> SharecodeResult<()> {
        for field in FieldId::ALL {
            check_domain(field, self.value_of(field))?;
        }
        Ok(())
    }
}
