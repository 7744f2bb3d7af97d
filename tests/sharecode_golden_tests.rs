/*!
 * 共有コードのゴールデンテスト
 * 既知の設定とコードの対応が変わらないことを保証する固定ベクトルテスト
 */

use crosshair_sharecode::crosshair_common_rs::sharecode::core::alphabet::decode_token;
use crosshair_sharecode::prelude::*;

fn record(style: u8, size: f64, gap: i8, thickness: f64, outline: bool, dot: bool, color: Color, alpha: f64) -> CrosshairConfig {
    CrosshairConfig {
        style: Style(style),
        size: Size(size),
        gap: Gap(gap),
        thickness: Thickness(thickness),
        outline_enabled: outline,
        dot_enabled: dot,
        color,
        alpha: Alpha(alpha),
    }
}

#[cfg(test)]
mod golden_sharecode_tests {
    use super::*;

    /// (設定, コード, フレーム) の組
    fn vectors() -> Vec<(CrosshairConfig, &'static str, [u8; 7])> {
        vec![
            // エディタ初期値
            (
                CrosshairConfig::default(),
                "33PA-ZZZZ-ZZWH",
                [0x86, 0xA8, 0xFF, 0xFF, 0xFF, 0xFF, 0x8F],
            ),
            // 初期値から gap だけ +1
            (
                record(4, 2.5, 1, 1.0, false, false, Color::WHITE, 255.0),
                "33QA-ZZZZ-ZZZH",
                [0x86, 0xC8, 0xFF, 0xFF, 0xFF, 0xFF, 0xEF],
            ),
            // 全フィールド最小
            (
                record(0, 1.0, -5, 0.0, false, false, Color::BLACK, 0.0),
                "2222-2222-2277",
                [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xA5],
            ),
            // 全フィールド最大
            (
                record(5, 5.0, 5, 3.0, true, true, Color::WHITE, 255.0),
                "3ECV-ZZZZ-ZZXF",
                [0xB1, 0x5B, 0xFF, 0xFF, 0xFF, 0xFF, 0xAD],
            ),
            (
                record(1, 3.0, -2, 0.5, true, false, Color::new(255, 0, 0), 128.0),
                "2C58-ZW22-327A",
                [0x28, 0x66, 0xFF, 0x00, 0x00, 0x80, 0xA8],
            ),
            (
                record(2, 1.5, 3, 2.0, false, true, Color::new(0x00, 0xFF, 0x3F), 200.0),
                "2JSK-25ZM-ZL9Z",
                [0x43, 0x11, 0x00, 0xFF, 0x3F, 0xC8, 0xFF],
            ),
        ]
    }

    #[test]
    fn test_encode_golden_vectors() {
        for (config, code, _) in vectors() {
            assert_eq!(encode(&config).unwrap(), code, "encode mismatch for {:?}", config);
        }
    }

    #[test]
    fn test_decode_golden_vectors() {
        for (config, code, _) in vectors() {
            assert_eq!(decode(code).unwrap(), config, "decode mismatch for {}", code);
        }
    }

    #[test]
    fn test_golden_frames() {
        for (_, code, frame) in vectors() {
            assert_eq!(decode_token(code).unwrap(), frame, "frame mismatch for {}", code);
        }
    }

    #[test]
    fn test_alpha_rounding_golden() {
        // 127.5 は 128 に丸められ、赤の不透明度128のベクトルと同じコードになる
        let config = record(1, 3.0, -2, 0.5, true, false, Color::new(255, 0, 0), 127.5);
        assert_eq!(encode(&config).unwrap(), "2C58-ZW22-327A");
    }

    #[test]
    fn test_lenient_input_forms() {
        let expected = CrosshairConfig::default();
        for input in ["33PA-ZZZZ-ZZWH", "33PAZZZZZZWH", "33pa-zzzz-zzwh", "  33PA-ZZZZ-ZZWH\n"] {
            assert_eq!(decode(input).unwrap(), expected, "failed for {:?}", input);
        }
    }
}
