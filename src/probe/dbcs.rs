//! The structural scan shared by every double-byte scorer.
//!
//! All the DBCS scorers walk the buffer the same way: a byte with the high bit set opens a
//! candidate lead/trail unit, the unit is checked against the encoding's legal byte ranges,
//! and structurally valid units are weighed against the script's frequency table. Encodings
//! differ only in their range rules, unit lengths, and coordinate remapping, which a
//! [`Scheme`] captures.

use crate::freq::FreqTable;

/// Fixed frequency mass contributed by each weighed unit; table weights are relative to it.
const UNIT_MASS: u64 = 500;

/// How a structurally valid unit participates in the frequency term.
pub(crate) enum Weigh {
    /// Count the unit structurally but leave the frequency mass untouched. Used for
    /// supplementary-plane sequences no table covers.
    Skip,
    /// Add the unit to the mass with no table coordinate.
    Unranked,
    /// Weigh the unit against a frequency table at `(row, column)`.
    Ranked(&'static FreqTable, u8, u8),
}

/// The outcome of classifying a candidate lead byte.
pub(crate) enum Unit {
    /// The lead does not open a legal unit for this scheme.
    Invalid,
    /// A legal unit spanning `len` bytes starting at the lead.
    Valid {
        /// Total unit length, lead included.
        len: usize,
        /// Frequency treatment for the unit.
        weigh: Weigh,
    },
}

/// Byte-range rules and coordinate remapping for one double-byte encoding.
pub(crate) trait Scheme {
    /// Flat score adjustment. Broader sibling encodings carry -1 so that text legal in a
    /// narrower sibling resolves to the narrower one.
    const HANDICAP: i32 = 0;

    /// Classify the unit opened by `lead`. `tail` holds the bytes after the lead and is never
    /// empty; schemes probing more than one byte ahead must check its length themselves.
    fn classify(lead: u8, tail: &[u8]) -> Unit;
}

/// Scan `buf` and score it under scheme `S`.
///
/// The score is `50 * valid/double + 50 * freq/mass`, truncated, plus the scheme handicap:
/// half structural (what fraction of high-bit lead bytes opened legal units) and half
/// statistical (how much corpus frequency those units carried). Counters are seeded at one so
/// short input divides cleanly; an empty buffer scores exactly 50 before the handicap.
pub(crate) fn score<S: Scheme>(buf: &[u8]) -> i32 {
    let mut double = 1u32;
    let mut valid = 1u32;
    let mut mass = 1u64;
    let mut freq = 0u64;

    let mut i = 0;
    // The final byte can never open a unit, so the scan stops one short of the end.
    while i + 1 < buf.len() {
        let lead = buf[i];
        if lead < 0x80 {
            i += 1;
            continue;
        }
        double += 1;
        match S::classify(lead, &buf[i + 1..]) {
            Unit::Invalid => i += 1,
            Unit::Valid { len, weigh } => {
                valid += 1;
                match weigh {
                    Weigh::Skip => {}
                    Weigh::Unranked => mass += UNIT_MASS,
                    Weigh::Ranked(table, row, col) => {
                        mass += UNIT_MASS;
                        freq += u64::from(table.weight(row, col));
                    }
                }
                i += len;
            }
        }
    }

    let structural = 50.0 * f64::from(valid) / f64::from(double);
    let statistical = 50.0 * freq as f64 / mass as f64;
    (structural + statistical) as i32 + S::HANDICAP
}
