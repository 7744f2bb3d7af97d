use crosshair_sharecode::crosshair_common_rs::sharecode::core::bit_utils::{
    pack_fields, unpack_fields, BitPackError,
};

#[test]
fn test_pack_single_byte_fields() {
    let packed = pack_fields(&[(8, 0x12), (8, 0x34), (8, 0x56)]).unwrap();
    assert_eq!(packed, vec![0x12, 0x34, 0x56]);
}

#[test]
fn test_pack_first_field_is_most_significant() {
    // 先頭フィールドは先頭バイトの最上位ビットに入る
    let packed = pack_fields(&[(1, 1), (7, 0)]).unwrap();
    assert_eq!(packed, vec![0x80]);

    // 末尾フィールドは最終バイトの最下位ビット
    let packed = pack_fields(&[(15, 0), (1, 1)]).unwrap();
    assert_eq!(packed, vec![0x00, 0x01]);
}

#[test]
fn test_pack_crosshair_layout() {
    // style=4, size idx 3, gap idx 6, thickness idx 2, flags off, white, alpha 255
    let entries = [
        (3, 4), (4, 3), (4, 6), (3, 2), (1, 0), (1, 0),
        (8, 255), (8, 255), (8, 255), (8, 255),
    ];
    let packed = pack_fields(&entries).unwrap();
    assert_eq!(packed, vec![0x86, 0xC8, 0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn test_pack_field_overflow() {
    let result = pack_fields(&[(4, 15), (4, 16)]);
    assert_eq!(result, Err(BitPackError::Overflow { index: 1, value: 16, width: 4 }));
}

#[test]
fn test_pack_full_width_values() {
    let packed = pack_fields(&[(32, u32::MAX)]).unwrap();
    assert_eq!(packed, vec![0xFF; 4]);
}

#[test]
fn test_unpack_crosshair_layout() {
    let widths = [3, 4, 4, 3, 1, 1, 8, 8, 8, 8];
    let values = unpack_fields(&[0x86, 0xA8, 0x10, 0x20, 0x30, 0x40], &widths).unwrap();
    assert_eq!(values, vec![4, 3, 5, 2, 0, 0, 0x10, 0x20, 0x30, 0x40]);
}

#[test]
fn test_unpack_flags() {
    // 0000 0000 0000 00 | 1 | 1
    let values = unpack_fields(&[0x00, 0x03], &[3, 4, 4, 3, 1, 1]).unwrap();
    assert_eq!(values, vec![0, 0, 0, 0, 1, 1]);
}

#[test]
fn test_unpack_truncated_buffer() {
    let result = unpack_fields(&[0xAA, 0xBB], &[8, 8, 1]);
    assert_eq!(
        result,
        Err(BitPackError::Truncated { index: 2, required: 17, available: 16 })
    );
}

#[test]
fn test_pack_unpack_mixed_widths() {
    let widths = [5, 11, 2, 13, 1];
    let values = [17u32, 1500, 2, 8000, 1];
    let entries: Vec<(usize, u32)> = widths.iter().copied().zip(values.iter().copied()).collect();

    let packed = pack_fields(&entries).unwrap();
    assert_eq!(packed.len(), 4); // 32 bits
    assert_eq!(unpack_fields(&packed, &widths).unwrap(), values.to_vec());
}
