//! UTF-8 and UTF-16 scorers.

use core::ops::RangeInclusive;

/// Lead byte of a 2-byte sequence, `110xxxxx`.
const LEAD_2: RangeInclusive<u8> = 0xC0..=0xDF;
/// Lead byte of a 3-byte sequence, `1110xxxx`.
const LEAD_3: RangeInclusive<u8> = 0xE0..=0xEF;

/// Below this many well-formed multibyte bytes, a merely-good ratio is not trusted - a
/// handful of coincidentally valid sequences in non-UTF-8 data clears 95% too easily.
const MIN_GOOD_BYTES: u32 = 30;

fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Score UTF-8 by the fraction of non-ASCII bytes that belong to well-formed multibyte
/// sequences. Pure ASCII scores zero here so the ASCII scorer wins that case outright.
pub(crate) fn utf8(buf: &[u8]) -> i32 {
    let mut ascii = 0u32;
    let mut good = 0u32;

    let mut i = 0;
    while i < buf.len() {
        let b = buf[i];
        if b < 0x80 {
            ascii += 1;
            i += 1;
        } else if LEAD_2.contains(&b) && i + 1 < buf.len() && is_continuation(buf[i + 1]) {
            good += 2;
            i += 2;
        } else if LEAD_3.contains(&b)
            && i + 2 < buf.len()
            && is_continuation(buf[i + 1])
            && is_continuation(buf[i + 2])
        {
            good += 3;
            i += 3;
        } else {
            // Malformed lead or orphaned continuation; simply not good.
            i += 1;
        }
    }

    if ascii as usize == buf.len() {
        return 0;
    }
    let ratio = 100.0 * f64::from(good) / (buf.len() - ascii as usize) as f64;
    if ratio > 98.0 || (ratio > 95.0 && good >= MIN_GOOD_BYTES) {
        ratio as i32
    } else {
        0
    }
}

/// Score UTF-16 purely by signature: a leading BOM of either endianness is conclusive,
/// anything else scores nothing.
pub(crate) fn utf16_bom(buf: &[u8]) -> i32 {
    match buf {
        [0xFE, 0xFF, ..] | [0xFF, 0xFE, ..] => 100,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "这是一段混合 Latin と中文の UTF-8 文本です。" in UTF-8.
    const UTF8_SAMPLE: &[u8] = &[
        0xE8, 0xBF, 0x99, 0xE6, 0x98, 0xAF, 0xE4, 0xB8, 0x80, 0xE6, 0xAE, 0xB5, 0xE6, 0xB7, 0xB7,
        0xE5, 0x90, 0x88, 0x20, 0x4C, 0x61, 0x74, 0x69, 0x6E, 0x20, 0xE3, 0x81, 0xA8, 0xE4, 0xB8,
        0xAD, 0xE6, 0x96, 0x87, 0xE3, 0x81, 0xAE, 0x20, 0x55, 0x54, 0x46, 0x2D, 0x38, 0x20, 0xE6,
        0x96, 0x87, 0xE6, 0x9C, 0xAC, 0xE3, 0x81, 0xA7, 0xE3, 0x81, 0x99, 0xE3, 0x80, 0x82,
    ];

    #[test]
    fn test_well_formed_utf8() {
        assert_eq!(utf8(UTF8_SAMPLE), 100);
    }

    #[test]
    fn test_pure_ascii_scores_zero() {
        assert_eq!(utf8(b"no multibyte content at all"), 0);
        assert_eq!(utf8(&[]), 0);
    }

    #[test]
    fn test_high_band_needs_no_volume() {
        // A single valid 2-byte sequence: ratio 100, and the >98 band does not require
        // volume.
        assert_eq!(utf8(&[0xC3, 0xA9, b'!']), 100);
        // A lone malformed lead drops the ratio to zero.
        assert_eq!(utf8(&[0xC3, b'!', b'!']), 0);
    }

    #[test]
    fn test_mid_band_requires_volume() {
        // Sixteen good 3-byte sequences plus two junk bytes: ratio 48/50 = 96, kept because
        // 48 good bytes clear the volume bar.
        let mut big = [0xE4, 0xB8, 0xAD].repeat(16);
        big.extend([0xFF, 0xFF]);
        assert_eq!(utf8(&big), 96);
        // Same ratio at 24/25, but too few good bytes to trust.
        let mut small = [0xE4, 0xB8, 0xAD].repeat(8);
        small.push(0xFF);
        assert_eq!(utf8(&small), 0);
    }

    #[test]
    fn test_mixed_validity_below_threshold() {
        // Two good 3-byte sequences plus two junk bytes: ratio 6/8 = 75, forced to zero.
        let buf = &[0xE4, 0xB8, 0xAD, 0xFF, 0xFF, 0xE6, 0x96, 0x87];
        assert_eq!(utf8(buf), 0);
    }

    #[test]
    fn test_bom_either_endianness() {
        assert_eq!(utf16_bom(&[0xFE, 0xFF]), 100);
        assert_eq!(utf16_bom(&[0xFF, 0xFE]), 100);
        assert_eq!(utf16_bom(&[0xFE, 0xFF, 0x00, 0x41]), 100);
        assert_eq!(utf16_bom(&[0xFF]), 0);
        assert_eq!(utf16_bom(b"plain"), 0);
        assert_eq!(utf16_bom(&[]), 0);
    }
}
