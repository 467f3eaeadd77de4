//! Scorers for the Simplified Chinese family: GB2312, GBK, GB18030, the 7-bit HZ escape form,
//! and ISO-2022-CN.

use super::dbcs::{Scheme, Unit, Weigh};
use crate::freq;
use core::ops::RangeInclusive;

const GB_LEAD: RangeInclusive<u8> = 0xA1..=0xF7;
const GB_TRAIL: RangeInclusive<u8> = 0xA1..=0xFE;

const EXT_LEAD: RangeInclusive<u8> = 0x81..=0xFE;
const EXT_TRAIL_LOW: RangeInclusive<u8> = 0x40..=0x7E;
const EXT_TRAIL_HIGH: RangeInclusive<u8> = 0x80..=0xFE;

/// Second and fourth byte of a GB18030 supplementary sequence.
const SUPPL_DIGIT: RangeInclusive<u8> = 0x30..=0x39;

/// The 7-bit HZ double-byte band, the GB ranges with the high bit stripped (and the rarely
/// used rows past 0x77 dropped, as HZ text never reaches them).
const HZ_BAND: RangeInclusive<u8> = 0x21..=0x77;
/// Trail band for ISO-2022-CN pairs, the full GB trail range with the high bit stripped.
const SO_TRAIL: RangeInclusive<u8> = 0x21..=0x7E;

const ESC: u8 = 0x1B;

/// The classic GB2312-80 range rules.
pub(crate) struct Gb2312;

impl Scheme for Gb2312 {
    fn classify(lead: u8, tail: &[u8]) -> Unit {
        match tail.first() {
            Some(&trail) if GB_LEAD.contains(&lead) && GB_TRAIL.contains(&trail) => Unit::Valid {
                len: 2,
                weigh: Weigh::Ranked(&freq::GB, lead - 0xA1, trail - 0xA1),
            },
            _ => Unit::Invalid,
        }
    }
}

/// GBK: the GB2312 rules plus the extension area with its wider lead and trail bands.
pub(crate) struct Gbk;

impl Gbk {
    /// Classify a pair against the extension area only.
    fn extended(lead: u8, trail: u8) -> Unit {
        if EXT_LEAD.contains(&lead)
            && (EXT_TRAIL_LOW.contains(&trail) || EXT_TRAIL_HIGH.contains(&trail))
        {
            // Fold the two trail bands into a gapless column axis (0x7F is skipped).
            let col = if trail <= 0x7E { trail - 0x40 } else { trail - 0x41 };
            Unit::Valid {
                len: 2,
                weigh: Weigh::Ranked(&freq::GBK, lead - 0x81, col),
            }
        } else {
            Unit::Invalid
        }
    }
}

impl Scheme for Gbk {
    const HANDICAP: i32 = -1;

    fn classify(lead: u8, tail: &[u8]) -> Unit {
        match Gb2312::classify(lead, tail) {
            Unit::Invalid => match tail.first() {
                Some(&trail) => Self::extended(lead, trail),
                None => Unit::Invalid,
            },
            unit => unit,
        }
    }
}

/// GB18030: the GBK rules plus 4-byte supplementary-plane sequences, which count
/// structurally but carry no frequency data.
pub(crate) struct Gb18030;

impl Scheme for Gb18030 {
    const HANDICAP: i32 = -1;

    fn classify(lead: u8, tail: &[u8]) -> Unit {
        match Gbk::classify(lead, tail) {
            Unit::Invalid => match tail {
                [d1, l2, d2, ..]
                    if EXT_LEAD.contains(&lead)
                        && SUPPL_DIGIT.contains(d1)
                        && EXT_LEAD.contains(l2)
                        && SUPPL_DIGIT.contains(d2) =>
                {
                    Unit::Valid {
                        len: 4,
                        weigh: Weigh::Skip,
                    }
                }
                _ => Unit::Invalid,
            },
            unit => unit,
        }
    }
}

/// Score the HZ 7-bit escape form of GB2312.
///
/// The structural half is a step function of how many `~{` shift-in markers appear - even a
/// single well-formed escape is strong evidence, and more than a handful is as good as it
/// gets - combined with the usual frequency term over the pairs inside shifted regions.
pub(crate) fn hz(buf: &[u8]) -> i32 {
    let mut starts = 0u32;
    let mut mass = 1u64;
    let mut hits = 0u64;

    let mut i = 0;
    while i < buf.len() {
        if buf[i] != b'~' || i + 1 >= buf.len() {
            i += 1;
            continue;
        }
        match buf[i + 1] {
            b'{' => {
                starts += 1;
                i += 2;
                // A shifted region runs to `~}` or a line break.
                while i + 1 < buf.len() {
                    let (a, b) = (buf[i], buf[i + 1]);
                    if a == b'\n' || a == b'\r' {
                        break;
                    }
                    if a == b'~' && b == b'}' {
                        i += 2;
                        break;
                    }
                    if HZ_BAND.contains(&a) && HZ_BAND.contains(&b) {
                        mass += 500;
                        hits += u64::from(freq::GB.weight(a - 0x21, b - 0x21));
                    } else if GB_LEAD.contains(&a) && GB_TRAIL.contains(&b) {
                        // Region left in 8-bit form; score it as raw GB.
                        mass += 500;
                        hits += u64::from(freq::GB.weight(a - 0xA1, b - 0xA1));
                    }
                    i += 2;
                }
            }
            // `~~` is a literal tilde, `~}` here is a stray shift-out.
            b'~' | b'}' => i += 2,
            _ => i += 1,
        }
    }

    let structural = match starts {
        0 => 0.0,
        1 => 39.0,
        2..=4 => 41.0,
        _ => 50.0,
    };
    (structural + 50.0 * hits as f64 / mass as f64) as i32
}

/// Score ISO-2022-CN by finding its designator sequences and weighing the shifted double-byte
/// stream after each one against the designated set's table, GB for `ESC $ ) A` and CNS for
/// `ESC $ ) G`. `ESC ( B` returns to ASCII.
pub(crate) fn iso_2022_cn(buf: &[u8]) -> i32 {
    let mut double = 1u32;
    let mut valid = 1u32;
    let mut mass = 1u64;
    let mut hits = 0u64;

    let mut i = 0;
    while i < buf.len() {
        if buf[i] != ESC {
            i += 1;
            continue;
        }
        let table = match buf.get(i + 1..i + 4) {
            Some([b'$', b')', b'A']) => &freq::GB,
            Some([b'$', b')', b'G']) => &freq::EUC_TW,
            _ => {
                if let Some([b'(', b'B']) = buf.get(i + 1..i + 3) {
                    i += 3;
                } else {
                    i += 1;
                }
                continue;
            }
        };
        i += 4;
        while i + 1 < buf.len() && buf[i] != ESC {
            let (a, b) = (buf[i], buf[i + 1]);
            double += 1;
            if HZ_BAND.contains(&a) && SO_TRAIL.contains(&b) {
                valid += 1;
                mass += 500;
                hits += u64::from(table.weight(a - 0x21, b - 0x21));
            }
            i += 2;
        }
    }

    (50.0 * f64::from(valid) / f64::from(double) + 50.0 * hits as f64 / mass as f64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::dbcs;

    // "这是一个用简体中文写的测试文本。" in GB2312.
    const GB_SAMPLE: &[u8] = &[
        0xD5, 0xE2, 0xCA, 0xC7, 0xD2, 0xBB, 0xB8, 0xF6, 0xD3, 0xC3, 0xBC, 0xF2, 0xCC, 0xE5, 0xD6,
        0xD0, 0xCE, 0xC4, 0xD0, 0xB4, 0xB5, 0xC4, 0xB2, 0xE2, 0xCA, 0xD4, 0xCE, 0xC4, 0xB1, 0xBE,
        0xA1, 0xA3,
    ];

    // Two `~{...~}` regions holding common hanzi in the 7-bit band.
    const HZ_SAMPLE: &[u8] = &[
        0x7E, 0x7B, 0x35, 0x44, 0x52, 0x3B, 0x4A, 0x47, 0x32, 0x3B, 0x41, 0x4B, 0x48, 0x4B, 0x4E,
        0x52, 0x54, 0x5A, 0x53, 0x50, 0x55, 0x62, 0x7E, 0x7D, 0x6F, 0x6B, 0x7E, 0x7B, 0x4E, 0x2A,
        0x56, 0x2E, 0x34, 0x73, 0x40, 0x34, 0x52, 0x54, 0x38, 0x76, 0x56, 0x50, 0x49, 0x4F, 0x43,
        0x47, 0x35, 0x3D, 0x7E, 0x7D,
    ];

    // `ESC $ ) A`, ten GB pairs shifted to 7-bit, `ESC ( B`, ASCII tail.
    const ISO_CN_SAMPLE: &[u8] = &[
        0x1B, 0x24, 0x29, 0x41, 0x55, 0x62, 0x4A, 0x47, 0x52, 0x3B, 0x38, 0x76, 0x53, 0x43, 0x3C,
        0x72, 0x4C, 0x65, 0x56, 0x50, 0x4E, 0x44, 0x50, 0x34, 0x1B, 0x28, 0x42, 0x20, 0x64, 0x6F,
        0x6E, 0x65,
    ];

    #[test]
    fn test_gb2312_scores_gb_text() {
        assert_eq!(dbcs::score::<Gb2312>(GB_SAMPLE), 90);
    }

    #[test]
    fn test_siblings_trail_by_handicap() {
        // Text drawn purely from the GB2312 band looks identical to GBK and GB18030 except
        // for their -1 handicaps.
        assert_eq!(dbcs::score::<Gbk>(GB_SAMPLE), 89);
        assert_eq!(dbcs::score::<Gb18030>(GB_SAMPLE), 89);
    }

    #[test]
    fn test_gbk_accepts_extension_pairs() {
        // 這為說 in GBK use extension-area bytes that GB2312 rejects outright.
        let ext = &[0xDF, 0x40, 0x9E, 0xE9, 0xD5, 0x66];
        assert!(dbcs::score::<Gbk>(ext) > dbcs::score::<Gb2312>(ext));
    }

    #[test]
    fn test_gb18030_supplementary_sequence() {
        // A lone 4-byte sequence is structurally valid for GB18030 only.
        let suppl = &[0x81, 0x30, 0x81, 0x30, b'x', b'y'];
        assert_eq!(dbcs::score::<Gb18030>(suppl), 49);
        assert!(dbcs::score::<Gbk>(suppl) < 49);
    }

    #[test]
    fn test_empty_buffer_is_seeded() {
        assert_eq!(dbcs::score::<Gb2312>(&[]), 50);
        assert_eq!(dbcs::score::<Gbk>(&[]), 49);
    }

    #[test]
    fn test_hz_regions() {
        assert_eq!(hz(HZ_SAMPLE), 99);
        // No shift-in marker, no score.
        assert_eq!(hz(b"plain ~~ text"), 0);
        // A single marker is worth the one-sighting step alone.
        assert_eq!(hz(b"~{"), 39);
    }

    #[test]
    fn test_hz_region_ends_at_line_break() {
        // The region is cut before the pairs, leaving only the structural step.
        let buf = b"~{\n\x35\x44\x52\x3B";
        assert_eq!(hz(buf), 39);
    }

    #[test]
    fn test_iso_2022_cn_designated_region() {
        assert_eq!(iso_2022_cn(ISO_CN_SAMPLE), 95);
        // Designator alone stays at the seeded baseline.
        assert_eq!(iso_2022_cn(b"\x1B$)A"), 50);
        assert_eq!(iso_2022_cn(b"no escapes here"), 50);
    }
}
