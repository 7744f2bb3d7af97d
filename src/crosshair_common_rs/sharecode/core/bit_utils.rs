/// ビット詰めユーティリティ
/// (ビット幅, 値) の並びを MSB 先頭の固定長バイト列に詰める・取り出す

use bitvec::prelude::*;
use thiserror::Error;

/// 1フィールドの最大ビット幅
pub const MAX_FIELD_BITS: usize = 32;

/// ビット詰め・取り出しのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitPackError {
    /// 値が宣言されたビット幅に収まらない
    #[error("エントリ {index} の値 {value} が {width}ビットに収まりません")]
    Overflow { index: usize, value: u32, width: usize },
    /// バッファのビット数が足りない
    #[error("エントリ {index} の読み出しに {required}ビット必要ですが {available}ビットしかありません")]
    Truncated { index: usize, required: usize, available: usize },
}

fn fits(value: u32, width: usize) -> bool {
    width >= MAX_FIELD_BITS || value >> width == 0
}

/// (ビット幅, 値) の並びをバイト列に詰める
///
/// 先頭のエントリがバッファの最上位ビットに来る。最終バイトの余りビットは0。
///
/// Args:
///     entries: (ビット幅, 値) の並び
///
/// Returns:
///     ceil(合計ビット数 / 8) バイトのバッファ
pub fn pack_fields(entries: &[(usize, u32)]) -> Result<Vec<u8>, BitPackError> {
    let total_bits: usize = entries.iter().map(|&(width, _)| width).sum();
    let mut buffer = vec![0u8; (total_bits + 7) / 8];
    let bits = BitSlice::<u8, Msb0>::from_slice_mut(&mut buffer);

    let mut offset = 0;
    for (index, &(width, value)) in entries.iter().enumerate() {
        if width > MAX_FIELD_BITS || !fits(value, width) {
            return Err(BitPackError::Overflow { index, value, width });
        }
        if width == 0 {
            continue;
        }
        bits[offset..offset + width].store_be::<u32>(value);
        offset += width;
    }

    Ok(buffer)
}

/// バイト列から各ビット幅ぶんの値を順に取り出す
///
/// 幅の合計を超える末尾ビットは読まない（検証もしない）。
pub fn unpack_fields(data: &[u8], widths: &[usize]) -> Result<Vec<u32>, BitPackError> {
    let bits = BitSlice::<u8, Msb0>::from_slice(data);
    let available = bits.len();

    let mut values = Vec::with_capacity(widths.len());
    let mut offset = 0;
    for (index, &width) in widths.iter().enumerate() {
        if width > MAX_FIELD_BITS || offset + width > available {
            return Err(BitPackError::Truncated {
                index,
                required: offset + width,
                available,
            });
        }
        let value = if width == 0 {
            0
        } else {
            bits[offset..offset + width].load_be::<u32>()
        };
        values.push(value);
        offset += width;
    }

    Ok(values)
}
