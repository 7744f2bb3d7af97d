/// 共有コードのエンコード・デコード
/// 量子化 → ビット詰め → チェックサム → アルファベット変換、およびその逆

use super::core::alphabet::{decode_token, encode_frame, group_token};
use super::core::bit_utils::{pack_fields, unpack_fields, BitPackError};
use super::core::checksum::{append_checksum, verify_checksum8};
use super::core::exceptions::{SharecodeError, SharecodeResult};
use super::core::PAYLOAD_BYTES;
use super::schema::{schema, FieldSchema};
use super::types::CrosshairConfig;
use log::trace;

/// ビット詰めのエラーを該当フィールドのオーバーフローとして扱う
fn overflow_error(schema: &FieldSchema, err: BitPackError) -> SharecodeError {
    let index = match err {
        BitPackError::Overflow { index, .. } | BitPackError::Truncated { index, .. } => index,
    };
    let field = schema.fields()[index.min(schema.len() - 1)].id;
    SharecodeError::FieldOverflow { field }
}

/// 設定レコードを `AAAA-AAAA-AAAA` 形式の共有コードにする
pub fn encode(config: &CrosshairConfig) -> SharecodeResult<String> {
    let schema = schema();

    let mut entries = Vec::with_capacity(schema.len());
    for descriptor in schema.fields() {
        let code_point = descriptor.quantize(config.value_of(descriptor.id))?;
        entries.push((descriptor.bit_width, code_point));
    }

    let packed = pack_fields(&entries).map_err(|e| overflow_error(schema, e))?;
    let payload: [u8; PAYLOAD_BYTES] = packed.as_slice().try_into().map_err(|_| {
        overflow_error(
            schema,
            BitPackError::Truncated {
                index: schema.len() - 1,
                required: PAYLOAD_BYTES * 8,
                available: packed.len() * 8,
            },
        )
    })?;

    let frame = append_checksum(&payload);
    let token = group_token(&encode_frame(&frame));
    trace!("encoded crosshair payload {} into {}", hex::encode(payload), token);
    Ok(token)
}

/// 共有コードを設定レコードに戻す
///
/// 区切りの有無と大文字小文字は問わない。
pub fn decode(code: &str) -> SharecodeResult<CrosshairConfig> {
    let schema = schema();

    let frame = decode_token(code)?;
    let payload = verify_checksum8(&frame)?;
    let code_points =
        unpack_fields(&payload, &schema.widths()).map_err(|e| overflow_error(schema, e))?;

    let mut values = Vec::with_capacity(schema.len());
    for (descriptor, &code_point) in schema.fields().iter().zip(code_points.iter()) {
        values.push((descriptor.id, descriptor.dequantize(code_point)?));
    }

    let config = CrosshairConfig::from_field_values(&values)?;
    trace!("decoded {} into payload {}", code.trim(), hex::encode(payload));
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crosshair_common_rs::sharecode::core::exceptions::FieldId;
    use crate::crosshair_common_rs::sharecode::types::{Alpha, Color, Gap, Size, Style, Thickness};

    fn scenario() -> CrosshairConfig {
        CrosshairConfig {
            style: Style(4),
            size: Size(2.5),
            gap: Gap(1),
            thickness: Thickness(1.0),
            outline_enabled: false,
            dot_enabled: false,
            color: Color::WHITE,
            alpha: Alpha(255.0),
        }
    }

    #[test]
    fn test_encode_scenario() {
        assert_eq!(encode(&scenario()).unwrap(), "33QA-ZZZZ-ZZZH");
    }

    #[test]
    fn test_decode_scenario() {
        assert_eq!(decode("33QA-ZZZZ-ZZZH").unwrap(), scenario());
        assert_eq!(decode("33qazzzzzzzh").unwrap(), scenario());
    }

    #[test]
    fn test_encode_default() {
        assert_eq!(encode(&CrosshairConfig::default()).unwrap(), "33PA-ZZZZ-ZZWH");
    }

    #[test]
    fn test_encode_out_of_domain() {
        let mut config = scenario();
        config.size = Size(1.25);
        assert_eq!(encode(&config), Err(SharecodeError::OutOfDomain { field: FieldId::Size }));

        let mut config = scenario();
        config.style = Style(6);
        assert_eq!(encode(&config), Err(SharecodeError::OutOfDomain { field: FieldId::Style }));
    }

    #[test]
    fn test_decode_checksum_mismatch() {
        // 5文字目を Z -> Y
        assert!(matches!(
            decode("33QA-YZZZ-ZZZH"),
            Err(SharecodeError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_code_point() {
        // style = 7 (111) のペイロードに正しいチェックサムを付ける
        let payload = [0xE0, 0x00, 0x00, 0x00, 0x00, 0x00];
        let frame = append_checksum(&payload);
        let token = encode_frame(&frame);
        assert_eq!(decode(&token), Err(SharecodeError::OutOfDomain { field: FieldId::Style }));
    }
}
