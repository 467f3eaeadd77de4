//! Corpus frequency tables for the double-byte scripts, one per script family. The tables are
//! compiled-in constants; nothing here is mutable or loaded at runtime, so concurrent readers
//! need no synchronization.
//!
//! Each table holds the highest-ranked characters of its script at their coded `(row, column)`
//! position, weight 600 downward by corpus rank. The unlisted tail is not worthless: a
//! coordinate with no entry that still falls inside the table's common row band takes a flat
//! bonus instead, standing in for "ordinary but unranked" text.

use core::ops::Range;
use phf::Map;

mod big5;
mod euc_tw;
mod gb;
mod gbk;
mod jp;
mod kr;

/// A sparse frequency-weight table for one double-byte script.
///
/// Keys pack a coordinate as `(row << 8) | column`, where row and column are the normalized
/// zero-based indices produced by the owning scheme's byte remapping.
pub(crate) struct FreqTable {
    map: &'static Map<u16, u16>,
    common_rows: Range<u8>,
    common_bonus: u16,
}

impl FreqTable {
    /// The weight of the character at `(row, col)`: its corpus rank weight if listed, the
    /// common-band bonus if it sits in an unlisted slot of the common rows, zero otherwise.
    pub(crate) fn weight(&self, row: u8, col: u8) -> u32 {
        let key = u16::from(row) << 8 | u16::from(col);
        match self.map.get(&key) {
            Some(&w) => u32::from(w),
            None if self.common_rows.contains(&row) => u32::from(self.common_bonus),
            None => 0,
        }
    }
}

/// GB2312, rows `lead - 0xA1`, columns `trail - 0xA1`. Rows 15..55 hold the level-1 hanzi.
pub(crate) static GB: FreqTable = FreqTable {
    map: &gb::GB,
    common_rows: 15..55,
    common_bonus: 200,
};

/// The GBK extension area, rows `lead - 0x81`, gapless columns over both trail bands. No
/// common band: extension characters absent from the table really are rare.
pub(crate) static GBK: FreqTable = FreqTable {
    map: &gbk::GBK,
    common_rows: 0..0,
    common_bonus: 0,
};

/// Big5, rows `lead - 0xA1`, the two trail bands folded into one gapless column axis.
pub(crate) static BIG5: FreqTable = FreqTable {
    map: &big5::BIG5,
    common_rows: 3..38,
    common_bonus: 200,
};

/// CNS 11643 plane 1 in EUC-TW form. The hanzi area starts around row 35; the band bonus is
/// kept lower than the other scripts to offset Big5 text that also validates as EUC-TW.
pub(crate) static EUC_TW: FreqTable = FreqTable {
    map: &euc_tw::EUC_TW,
    common_rows: 35..85,
    common_bonus: 150,
};

/// EUC-KR (KS X 1001), rows `lead - 0xA1`. Rows 15..40 are the hangul syllable area.
pub(crate) static KR: FreqTable = FreqTable {
    map: &kr::KR,
    common_rows: 15..40,
    common_bonus: 200,
};

/// JIS X 0208 in EUC-JP row/column form, shared by the EUC-JP and Shift-JIS scorers (the
/// latter remaps its byte pairs into these coordinates first). Rows 3..47 span the kana rows
/// and the level-1 kanji.
pub(crate) static JP: FreqTable = FreqTable {
    map: &jp::JP,
    common_rows: 3..47,
    common_bonus: 200,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_ranked_weights() {
        // 的 is GB2312 0xB5C4 -> (20, 35), rank 1.
        assert_eq!(GB.weight(20, 35), 600);
        // 이 is EUC-KR 0xC0CC -> (31, 43), rank 1.
        assert_eq!(KR.weight(31, 43), 600);
        // の is EUC-JP 0xA4CE -> (3, 45), rank 1.
        assert_eq!(JP.weight(3, 45), 600);
    }

    #[test]
    fn test_common_band_fallback() {
        // Row 54 is inside the GB hanzi band; column 93 is valid but unranked.
        assert_eq!(GB.weight(54, 93), 200);
        // Row 0 is symbols, outside the band.
        assert_eq!(GB.weight(0, 93), 0);
        assert_eq!(EUC_TW.weight(40, 93), 150);
        // The GBK extension table has no band at all.
        assert_eq!(GBK.weight(100, 100), 0);
    }
}
