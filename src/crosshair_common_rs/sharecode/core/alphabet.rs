/// 共有コードのアルファベット変換
/// 7バイトのフレームを 5ビット/文字 で12文字のトークンにする
///
/// 56ビットのフレームの前に4ビットの0パディングを置き、60ビットを
/// 上位から5ビットずつ読む。0/O、1/I/l のような紛らわしい文字は使わない。

use super::exceptions::{SharecodeError, SharecodeResult};
use super::FRAME_BYTES;

/// 32文字のアルファベット（正規形は大文字）
pub const ALPHABET: &[u8; 32] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// トークンの有効文字数
pub const TOKEN_SYMBOLS: usize = 12;

/// 区切り文字と区切り単位
pub const GROUP_SEPARATOR: char = '-';
pub const GROUP_SIZE: usize = 4;

const BITS_PER_SYMBOL: usize = 5;
const SYMBOL_MASK: u64 = 0x1F;
const FRAME_BITS: usize = FRAME_BYTES * 8;

/// 1文字を5ビット値に変換（大文字小文字は区別しない）
fn symbol_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    let upper = c.to_ascii_uppercase() as u8;
    ALPHABET.iter().position(|&s| s == upper).map(|p| p as u8)
}

/// 60ビット値を12文字にする（上位4ビットのパディングもそのまま出力する）
pub fn encode_bits(bits: u64) -> String {
    (0..TOKEN_SYMBOLS)
        .map(|i| {
            let shift = BITS_PER_SYMBOL * (TOKEN_SYMBOLS - 1 - i);
            ALPHABET[((bits >> shift) & SYMBOL_MASK) as usize] as char
        })
        .collect()
}

/// フレームを区切りなしの12文字にする
pub fn encode_frame(frame: &[u8; FRAME_BYTES]) -> String {
    let bits = frame
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));
    encode_bits(bits)
}

/// 12文字を `AAAA-AAAA-AAAA` 形式に区切る
pub fn group_token(symbols: &str) -> String {
    let chars: Vec<char> = symbols.chars().collect();
    chars
        .chunks(GROUP_SIZE)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(&GROUP_SEPARATOR.to_string())
}

/// トークンをフレームに戻す
///
/// 前後の空白と `-` は無視する。長さ・文字・パディングの順に検証する。
pub fn decode_token(token: &str) -> SharecodeResult<[u8; FRAME_BYTES]> {
    let symbols: Vec<char> = token
        .trim()
        .chars()
        .filter(|&c| c != GROUP_SEPARATOR)
        .collect();

    if symbols.len() != TOKEN_SYMBOLS {
        return Err(SharecodeError::InvalidLength {
            expected: TOKEN_SYMBOLS,
            actual: symbols.len(),
        });
    }

    let mut bits = 0u64;
    for (position, &character) in symbols.iter().enumerate() {
        let value = symbol_value(character)
            .ok_or(SharecodeError::InvalidCharacter { character, position })?;
        bits = (bits << BITS_PER_SYMBOL) | u64::from(value);
    }

    if bits >> FRAME_BITS != 0 {
        return Err(SharecodeError::InvalidPadding);
    }

    let mut frame = [0u8; FRAME_BYTES];
    for (i, byte) in frame.iter_mut().enumerate() {
        let shift = 8 * (FRAME_BYTES - 1 - i);
        *byte = ((bits >> shift) & 0xFF) as u8;
    }

    Ok(frame)
}
