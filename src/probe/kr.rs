//! Scorers for Korean: EUC-KR, the CP949 superset, and ISO-2022-KR.

use super::dbcs::{Scheme, Unit, Weigh};
use crate::freq;
use core::ops::RangeInclusive;

const EUC_LEAD: RangeInclusive<u8> = 0xA1..=0xFE;
const EUC_TRAIL: RangeInclusive<u8> = 0xA1..=0xFE;

const EXT_LEAD: RangeInclusive<u8> = 0x81..=0xFE;
const EXT_TRAIL_UPPER: RangeInclusive<u8> = 0x41..=0x5A;
const EXT_TRAIL_LOWER: RangeInclusive<u8> = 0x61..=0x7A;
const EXT_TRAIL_HIGH: RangeInclusive<u8> = 0x81..=0xFE;

/// `ESC $ ) C`, the KS X 1001 designator. One sighting is conclusive.
const DESIGNATOR: [u8; 4] = [0x1B, b'$', b')', b'C'];

/// EUC-KR (KS X 1001) range rules.
pub(crate) struct EucKr;

impl Scheme for EucKr {
    fn classify(lead: u8, tail: &[u8]) -> Unit {
        match tail.first() {
            Some(&trail) if EUC_LEAD.contains(&lead) && EUC_TRAIL.contains(&trail) => Unit::Valid {
                len: 2,
                weigh: Weigh::Ranked(&freq::KR, lead - 0xA1, trail - 0xA1),
            },
            _ => Unit::Invalid,
        }
    }
}

/// CP949: EUC-KR plus the extended hangul area. Extended pairs are structurally sound and
/// weighed, but have no coordinate in the KS X 1001 table.
pub(crate) struct Cp949;

impl Scheme for Cp949 {
    fn classify(lead: u8, tail: &[u8]) -> Unit {
        match EucKr::classify(lead, tail) {
            Unit::Invalid => match tail.first() {
                Some(&trail)
                    if EXT_LEAD.contains(&lead)
                        && (EXT_TRAIL_UPPER.contains(&trail)
                            || EXT_TRAIL_LOWER.contains(&trail)
                            || EXT_TRAIL_HIGH.contains(&trail)) =>
                {
                    Unit::Valid {
                        len: 2,
                        weigh: Weigh::Unranked,
                    }
                }
                _ => Unit::Invalid,
            },
            unit => unit,
        }
    }
}

/// ISO-2022-KR is a binary detector: the designator decides, content never does.
pub(crate) fn iso_2022_kr(buf: &[u8]) -> i32 {
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

    // "이것은한국어로작성된테스트문장입니다" in EUC-KR.
    const KR_SAMPLE: &[u8] = &[
        0xC0, 0xCC, 0xB0, 0xCD, 0xC0, 0xBA, 0xC7, 0xD1, 0xB1, 0xB9, 0xBE, 0xEE, 0xB7, 0xCE, 0xC0,
        0xDB, 0xBC, 0xBA, 0xB5, 0xC8, 0xC5, 0xD7, 0xBD, 0xBA, 0xC6, 0xAE, 0xB9, 0xAE, 0xC0, 0xE5,
        0xC0, 0xD4, 0xB4, 0xCF, 0xB4, 0xD9,
    ];

    #[test]
    fn test_euc_kr_scores_hangul() {
        assert_eq!(dbcs::score::<EucKr>(KR_SAMPLE), 95);
    }

    #[test]
    fn test_cp949_matches_on_plain_euc() {
        // Pure KS X 1001 text scores identically under the superset; the catalog order is
        // what resolves the tie in EUC-KR's favor.
        assert_eq!(dbcs::score::<Cp949>(KR_SAMPLE), 95);
    }

    #[test]
    fn test_cp949_extended_pairs() {
        // 0x81 0x41 is extended-area CP949 but invalid EUC-KR.
        let ext = &[0x81, 0x41, 0x84, 0x63, b' ', b' '];
        assert!(dbcs::score::<Cp949>(ext) > dbcs::score::<EucKr>(ext));
    }

    #[test]
    fn test_iso_2022_kr_designator() {
        assert_eq!(iso_2022_kr(b"plain \x1B$)C text"), 100);
        assert_eq!(iso_2022_kr(b"\x1B$)C"), 100);
        assert_eq!(iso_2022_kr(b"\x1B$)"), 0);
        assert_eq!(iso_2022_kr(b"no designator"), 0);
        assert_eq!(iso_2022_kr(&[]), 0);
    }
}
