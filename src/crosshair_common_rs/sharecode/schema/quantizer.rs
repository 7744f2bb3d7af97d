/// 量子化ルール
/// UI上の値とビット幅に収まる非負整数（コードポイント）の相互変換

/// 量子化の入出力となるフィールド値
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Decimal(f64),
    Flag(bool),
}

impl FieldValue {
    /// 数値として取り出す（フラグは None）
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            FieldValue::Integer(v) => Some(v as f64),
            FieldValue::Decimal(v) => Some(v),
            FieldValue::Flag(_) => None,
        }
    }

    /// 整数として取り出す（小数部のない Decimal も許可）
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            FieldValue::Integer(v) => Some(v),
            FieldValue::Decimal(v) if v.is_finite() && v.fract() == 0.0 => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            FieldValue::Flag(v) => Some(v),
            _ => None,
        }
    }
}

/// フィールドごとの量子化ルール
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantization {
    /// 整数範囲 min..=max（index = value - min）
    Integer { min: i64, max: i64 },
    /// 等間隔ステップ（index = (value - min) / step, 0..steps）
    Stepped { min: f64, step: f64, steps: u32 },
    /// 最近接整数に丸めてから min..=max（0.5 は0から遠い方へ）
    Rounded { min: i64, max: i64 },
    /// 真偽値（false/true = 0/1）
    Flag,
}

impl Quantization {
    /// 取りうるコードポイントの数
    pub fn cardinality(&self) -> u64 {
        match *self {
            Quantization::Integer { min, max } | Quantization::Rounded { min, max } => {
                (max - min + 1) as u64
            }
            Quantization::Stepped { steps, .. } => u64::from(steps),
            Quantization::Flag => 2,
        }
    }

    /// 値をコードポイントに変換する。定義域外なら None
    pub fn quantize(&self, value: FieldValue) -> Option<u32> {
        match *self {
            Quantization::Integer { min, max } => {
                let v = value.as_i64()?;
                (min..=max).contains(&v).then(|| (v - min) as u32)
            }
            Quantization::Stepped { min, step, steps } => {
                let v = value.as_f64()?;
                if !v.is_finite() {
                    return None;
                }
                // ステップ上にない値は誤差の大小によらず定義域外
                let index = (v - min) / step;
                if index.fract() != 0.0 {
                    return None;
                }
                (index >= 0.0 && index < f64::from(steps)).then(|| index as u32)
            }
            Quantization::Rounded { min, max } => {
                let v = value.as_f64()?;
                if !v.is_finite() {
                    return None;
                }
                let rounded = v.round();
                (rounded >= min as f64 && rounded <= max as f64).then(|| (rounded as i64 - min) as u32)
            }
            Quantization::Flag => value.as_bool().map(u32::from),
        }
    }

    /// コードポイントを値に戻す。どの値にも対応しなければ None
    pub fn dequantize(&self, code_point: u32) -> Option<FieldValue> {
        if u64::from(code_point) >= self.cardinality() {
            return None;
        }
        let value = match *self {
            Quantization::Integer { min, .. } => FieldValue::Integer(min + i64::from(code_point)),
            Quantization::Stepped { min, step, .. } => {
                FieldValue::Decimal(min + f64::from(code_point) * step)
            }
            Quantization::Rounded { min, .. } => {
                FieldValue::Decimal((min + i64::from(code_point)) as f64)
            }
            Quantization::Flag => FieldValue::Flag(code_point == 1),
        };
        Some(value)
    }
}
