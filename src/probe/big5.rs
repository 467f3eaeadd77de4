//! Scorers for Traditional Chinese: Big5 and CNS 11643 in its EUC-TW byte form.

use super::dbcs::{Scheme, Unit, Weigh};
use crate::freq;
use core::ops::RangeInclusive;

const BIG5_LEAD: RangeInclusive<u8> = 0xA1..=0xF9;
const BIG5_TRAIL_LOW: RangeInclusive<u8> = 0x40..=0x7E;
const BIG5_TRAIL_HIGH: RangeInclusive<u8> = 0xA1..=0xFE;

const EUC_LEAD: RangeInclusive<u8> = 0xA1..=0xFE;
const EUC_TRAIL: RangeInclusive<u8> = 0xA1..=0xFE;

/// Single-shift introducing an EUC-TW plane 2 character.
const SS2: u8 = 0x8E;
/// Plane byte following SS2.
const PLANE: RangeInclusive<u8> = 0xA1..=0xB0;

/// Big5 range rules, both trail bands.
pub(crate) struct Big5;

impl Scheme for Big5 {
    fn classify(lead: u8, tail: &[u8]) -> Unit {
        let Some(&trail) = tail.first() else {
            return Unit::Invalid;
        };
        if BIG5_LEAD.contains(&lead)
            && (BIG5_TRAIL_LOW.contains(&trail) || BIG5_TRAIL_HIGH.contains(&trail))
        {
            // Fold the low and high trail bands into one gapless column axis.
            let col = if trail <= 0x7E {
                trail - 0x40
            } else {
                63 + (trail - 0xA1)
            };
            Unit::Valid {
                len: 2,
                weigh: Weigh::Ranked(&freq::BIG5, lead - 0xA1, col),
            }
        } else {
            Unit::Invalid
        }
    }
}

/// EUC-TW range rules: plane 1 as plain EUC pairs, plane 2 behind an SS2 4-byte sequence
/// that counts structurally but has no table coverage.
pub(crate) struct EucTw;

impl Scheme for EucTw {
    fn classify(lead: u8, tail: &[u8]) -> Unit {
        if lead == SS2 {
            return match tail {
                [plane, a, b, ..]
                    if PLANE.contains(plane) && EUC_TRAIL.contains(a) && EUC_TRAIL.contains(b) =>
                {
                    Unit::Valid {
                        len: 4,
                        weigh: Weigh::Skip,
                    }
                }
                _ => Unit::Invalid,
            };
        }
        match tail.first() {
            Some(&trail) if EUC_LEAD.contains(&lead) && EUC_TRAIL.contains(&trail) => Unit::Valid {
                len: 2,
                weigh: Weigh::Ranked(&freq::EUC_TW, lead - 0xA1, trail - 0xA1),
            },
            _ => Unit::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::dbcs;

    // "這是一段用繁體中文寫的測試文字。" in Big5.
    const BIG5_SAMPLE: &[u8] = &[
        0xB3, 0x6F, 0xAC, 0x4F, 0xA4, 0x40, 0xAC, 0x71, 0xA5, 0xCE, 0xC1, 0x63, 0xC5, 0xE9, 0xA4,
        0xA4, 0xA4, 0xE5, 0xBC, 0x67, 0xAA, 0xBA, 0xB4, 0xFA, 0xB8, 0xD5, 0xA4, 0xE5, 0xA6, 0x72,
        0xA1, 0x43,
    ];

    #[test]
    fn test_big5_scores_big5_text() {
        assert_eq!(dbcs::score::<Big5>(BIG5_SAMPLE), 86);
    }

    #[test]
    fn test_low_band_trails_break_euc() {
        // Half the sample's trail bytes sit in 0x40..=0x7E, which no EUC form allows, so the
        // EUC-TW structural ratio collapses.
        assert!(dbcs::score::<EucTw>(BIG5_SAMPLE) < 50);
    }

    #[test]
    fn test_euc_tw_plane2_sequence() {
        let suppl = &[0x8E, 0xA2, 0xA1, 0xA1, b'x', b'y'];
        assert_eq!(dbcs::score::<EucTw>(suppl), 50);
        // Big5 cannot open a pair at 0x8E.
        assert!(dbcs::score::<Big5>(suppl) < 50);
    }

    #[test]
    fn test_truncated_pair_at_end() {
        // A lone trailing lead byte is never counted as a pair.
        assert_eq!(dbcs::score::<Big5>(&[0xB3]), 50);
    }
}
