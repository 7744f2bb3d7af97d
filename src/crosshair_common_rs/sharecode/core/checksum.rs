/// 共有コードのチェックサム計算・検証機能
/// 8ビット加算チェックサム（シード XOR）

use super::exceptions::{SharecodeError, SharecodeResult};
use super::{FRAME_BYTES, PAYLOAD_BYTES};

/// チェックサムに XOR する固定シード
pub const CHECKSUM_SEED: u8 = 0xA5;

/// 8ビットチェックサムを計算する
///
/// Args:
///     data: チェックサム計算対象のバイト列
///
/// Returns:
///     (全バイトの和 mod 256) XOR CHECKSUM_SEED
pub fn calc_checksum8(data: &[u8]) -> u8 {
    let total = data.iter().fold(0u8, |acc, &byte| acc.wrapping_add(byte));
    total ^ CHECKSUM_SEED
}

/// ペイロードの後ろにチェックサムを付けたフレームを作る
pub fn append_checksum(payload: &[u8; PAYLOAD_BYTES]) -> [u8; FRAME_BYTES] {
    let mut frame = [0u8; FRAME_BYTES];
    frame[..PAYLOAD_BYTES].copy_from_slice(payload);
    frame[PAYLOAD_BYTES] = calc_checksum8(payload);
    frame
}

/// フレームのチェックサムを検証し、ペイロード部分を返す
pub fn verify_checksum8(frame: &[u8; FRAME_BYTES]) -> SharecodeResult<[u8; PAYLOAD_BYTES]> {
    let mut payload = [0u8; PAYLOAD_BYTES];
    payload.copy_from_slice(&frame[..PAYLOAD_BYTES]);

    let expected = calc_checksum8(&payload);
    let actual = frame[PAYLOAD_BYTES];
    if expected != actual {
        return Err(SharecodeError::mismatch(expected, actual));
    }

    Ok(payload)
}
