//! Scorers for Japanese: EUC-JP, Shift-JIS, and ISO-2022-JP. Both statistical scorers share
//! the JIS X 0208 frequency table; Shift-JIS remaps its byte pairs into JIS row/column
//! coordinates before the lookup.

use super::dbcs::{Scheme, Unit, Weigh};
use crate::freq;
use core::ops::RangeInclusive;

const EUC_LEAD: RangeInclusive<u8> = 0xA1..=0xFE;
const EUC_TRAIL: RangeInclusive<u8> = 0xA1..=0xFE;

/// Single-shift for halfwidth katakana in EUC-JP.
const SS2: u8 = 0x8E;
/// Single-shift for JIS X 0212 in EUC-JP.
const SS3: u8 = 0x8F;
const HALFWIDTH: RangeInclusive<u8> = 0xA1..=0xDF;

const SJIS_LEAD_LOW: RangeInclusive<u8> = 0x81..=0x9F;
const SJIS_LEAD_HIGH: RangeInclusive<u8> = 0xE0..=0xEF;
const SJIS_TRAIL_LOW: RangeInclusive<u8> = 0x40..=0x7E;
const SJIS_TRAIL_HIGH: RangeInclusive<u8> = 0x80..=0xFC;

/// `ESC $ B`, the JIS X 0208 designator. One sighting is conclusive.
const DESIGNATOR: [u8; 3] = [0x1B, b'$', b'B'];

/// EUC-JP range rules: JIS X 0208 as plain EUC pairs, halfwidth katakana behind SS2, and
/// JIS X 0212 behind SS3 (structural only, no table coverage).
pub(crate) struct EucJp;

impl Scheme for EucJp {
    fn classify(lead: u8, tail: &[u8]) -> Unit {
        if lead == SS2 {
            return match tail.first() {
                Some(trail) if HALFWIDTH.contains(trail) => Unit::Valid {
                    len: 2,
                    weigh: Weigh::Unranked,
                },
                _ => Unit::Invalid,
            };
        }
        if lead == SS3 {
            return match tail {
                [a, b, ..] if EUC_TRAIL.contains(a) && EUC_TRAIL.contains(b) => Unit::Valid {
                    len: 3,
                    weigh: Weigh::Skip,
                },
                _ => Unit::Invalid,
            };
        }
        match tail.first() {
            Some(&trail) if EUC_LEAD.contains(&lead) && EUC_TRAIL.contains(&trail) => Unit::Valid {
                len: 2,
                weigh: Weigh::Ranked(&freq::JP, lead - 0xA1, trail - 0xA1),
            },
            _ => Unit::Invalid,
        }
    }
}

/// Shift-JIS range rules. Every valid pair is unpacked into its JIS X 0208 row and column so
/// the shared JP table applies; single-byte halfwidth katakana count as valid unranked units.
pub(crate) struct ShiftJis;

impl Scheme for ShiftJis {
    const HANDICAP: i32 = -1;

    fn classify(lead: u8, tail: &[u8]) -> Unit {
        if HALFWIDTH.contains(&lead) {
            return Unit::Valid {
                len: 1,
                weigh: Weigh::Unranked,
            };
        }
        let Some(&trail) = tail.first() else {
            return Unit::Invalid;
        };
        if (SJIS_LEAD_LOW.contains(&lead) || SJIS_LEAD_HIGH.contains(&lead))
            && (SJIS_TRAIL_LOW.contains(&trail) || SJIS_TRAIL_HIGH.contains(&trail))
        {
            // Each Shift-JIS lead packs two JIS rows; the trail selects the half and the
            // column, with the 0x7F gap folded out.
            let mut row = if lead <= 0x9F {
                (lead - 0x81) * 2
            } else {
                (lead - 0xE0) * 2 + 62
            };
            let col = if SJIS_TRAIL_LOW.contains(&trail) {
                trail - 0x40
            } else if trail <= 0x9E {
                trail - 0x41
            } else {
                row += 1;
                trail - 0x9F
            };
            Unit::Valid {
                len: 2,
                weigh: Weigh::Ranked(&freq::JP, row, col),
            }
        } else {
            Unit::Invalid
        }
    }
}

/// ISO-2022-JP is a binary detector: the designator decides, content never does.
pub(crate) fn iso_2022_jp(buf: &[u8]) -> i32 {
    if buf.windows(DESIGNATOR.len()).any(|w| w == DESIGNATOR) {
        100
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::dbcs;

    // "これは日本語のテスト文です" in EUC-JP.
    const JP_EUC_SAMPLE: &[u8] = &[
        0xA4, 0xB3, 0xA4, 0xEC, 0xA4, 0xCF, 0xC6, 0xFC, 0xCB, 0xDC, 0xB8, 0xEC, 0xA4, 0xCE, 0xA5,
        0xC6, 0xA5, 0xB9, 0xA5, 0xC8, 0xCA, 0xB8, 0xA4, 0xC7, 0xA4, 0xB9,
    ];

    // The same sentence in Shift-JIS.
    const JP_SJIS_SAMPLE: &[u8] = &[
        0x82, 0xB1, 0x82, 0xEA, 0x82, 0xCD, 0x93, 0xFA, 0x96, 0x7B, 0x8C, 0xEA, 0x82, 0xCC, 0x83,
        0x65, 0x83, 0x58, 0x83, 0x67, 0x95, 0xB6, 0x82, 0xC5, 0x82, 0xB7,
    ];

    #[test]
    fn test_euc_jp_scores_kana_text() {
        assert_eq!(dbcs::score::<EucJp>(JP_EUC_SAMPLE), 95);
    }

    #[test]
    fn test_sjis_scores_remapped_text() {
        assert_eq!(dbcs::score::<ShiftJis>(JP_SJIS_SAMPLE), 94);
    }

    #[test]
    fn test_remap_agrees_across_forms() {
        // The two byte forms of one sentence must land on the same table entries, so their
        // scores differ by exactly the Shift-JIS handicap.
        assert_eq!(
            dbcs::score::<EucJp>(JP_EUC_SAMPLE) - 1,
            dbcs::score::<ShiftJis>(JP_SJIS_SAMPLE),
        );
    }

    #[test]
    fn test_euc_jp_halfwidth_katakana() {
        let halfwidth = &[0x8E, 0xB1, 0x8E, 0xB2, b' ', b' '];
        assert_eq!(dbcs::score::<EucJp>(halfwidth), 50);
    }

    #[test]
    fn test_iso_2022_jp_designator() {
        assert_eq!(iso_2022_jp(b"\x1B$B@\x21"), 100);
        assert_eq!(iso_2022_jp(b"\x1B$)C"), 0);
        assert_eq!(iso_2022_jp(&[]), 0);
    }
}
