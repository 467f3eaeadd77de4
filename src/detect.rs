//! Winner-take-all aggregation over the scorer catalog.
//!
//! One detection call runs every scorer once over the same buffer, collects the score vector,
//! and picks the best-scoring candidate. A winner must clear [`THRESHOLD`] strictly;
//! otherwise the result is `None` and the caller should fall back to its own default.

use crate::charset::{Charset, CATALOG_LEN};
use crate::probe;
use arrayvec::ArrayVec;

/// The acceptance threshold. The winning score must exceed this strictly; a maximum of
/// exactly 50 still reports no confident match.
pub const THRESHOLD: i32 = 50;

/// The score vector from one detection pass: one entry per catalog member, in catalog order.
///
/// Ephemeral and cheap - built on the stack per call, no allocation.
#[derive(Clone, Debug)]
pub struct Scores {
    inner: ArrayVec<(Charset, i32), CATALOG_LEN>,
}

impl Scores {
    /// The score of one catalog member.
    pub fn get(&self, charset: Charset) -> i32 {
        self.inner
            .iter()
            .find(|&&(c, _)| c == charset)
            .map_or(0, |&(_, s)| s)
    }

    /// Iterate `(charset, score)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Charset, i32)> + '_ {
        self.inner.iter().copied()
    }

    /// The winning member and its score. Ties break toward the earlier catalog entry, so the
    /// declaration order of [`Charset::CATALOG`] is the priority between equal scorers.
    pub fn best(&self) -> (Charset, i32) {
        let mut best = self.inner[0];
        for &(c, s) in &self.inner[1..] {
            if s > best.1 {
                best = (c, s);
            }
        }
        best
    }
}

/// Run every scorer over `buf` and collect the full score vector.
///
/// Scorers are pure functions of the buffer and the compiled-in frequency tables; no scorer
/// sees another's output, and scoring the same buffer twice yields identical vectors.
pub fn scores(buf: &[u8]) -> Scores {
    Scores {
        inner: Charset::CATALOG
            .iter()
            .map(|&c| (c, probe::score(c, buf)))
            .collect(),
    }
}

/// Detect the most probable catalog member for `buf`, or `None` when no candidate clears
/// [`THRESHOLD`].
pub fn detect_charset(buf: &[u8]) -> Option<Charset> {
    let (best, score) = scores(buf).best();
    (score > THRESHOLD).then_some(best)
}

/// Detect the charset of at most the first `limit` bytes of `buf`, reporting the canonical
/// runtime charset name.
///
/// An empty buffer resolves to `Some("ASCII")`: the seeded counters leave every double-byte
/// scorer at exactly the threshold while the ASCII scorer rests at its 75 base.
pub fn detect(buf: &[u8], limit: usize) -> Option<&'static str> {
    let len = buf.len().min(limit);
    detect_charset(&buf[..len]).map(Charset::canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    // "这是一个用简体中文写的测试文本。" in GB2312.
    const GB_SAMPLE: &[u8] = &[
        0xD5, 0xE2, 0xCA, 0xC7, 0xD2, 0xBB, 0xB8, 0xF6, 0xD3, 0xC3, 0xBC, 0xF2, 0xCC, 0xE5, 0xD6,
        0xD0, 0xCE, 0xC4, 0xD0, 0xB4, 0xB5, 0xC4, 0xB2, 0xE2, 0xCA, 0xD4, 0xCE, 0xC4, 0xB1, 0xBE,
        0xA1, 0xA3,
    ];

    // "這是一段用繁體中文寫的測試文字。" in Big5.
    const BIG5_SAMPLE: &[u8] = &[
        0xB3, 0x6F, 0xAC, 0x4F, 0xA4, 0x40, 0xAC, 0x71, 0xA5, 0xCE, 0xC1, 0x63, 0xC5, 0xE9, 0xA4,
        0xA4, 0xA4, 0xE5, 0xBC, 0x67, 0xAA, 0xBA, 0xB4, 0xFA, 0xB8, 0xD5, 0xA4, 0xE5, 0xA6, 0x72,
        0xA1, 0x43,
    ];

    // "이것은한국어로작성된테스트문장입니다" in EUC-KR.
    const KR_SAMPLE: &[u8] = &[
        0xC0, 0xCC, 0xB0, 0xCD, 0xC0, 0xBA, 0xC7, 0xD1, 0xB1, 0xB9, 0xBE, 0xEE, 0xB7, 0xCE, 0xC0,
        0xDB, 0xBC, 0xBA, 0xB5, 0xC8, 0xC5, 0xD7, 0xBD, 0xBA, 0xC6, 0xAE, 0xB9, 0xAE, 0xC0, 0xE5,
        0xC0, 0xD4, 0xB4, 0xCF, 0xB4, 0xD9,
    ];

    // "これは日本語のテスト文です" in EUC-JP and Shift-JIS.
    const JP_EUC_SAMPLE: &[u8] = &[
        0xA4, 0xB3, 0xA4, 0xEC, 0xA4, 0xCF, 0xC6, 0xFC, 0xCB, 0xDC, 0xB8, 0xEC, 0xA4, 0xCE, 0xA5,
        0xC6, 0xA5, 0xB9, 0xA5, 0xC8, 0xCA, 0xB8, 0xA4, 0xC7, 0xA4, 0xB9,
    ];
    const JP_SJIS_SAMPLE: &[u8] = &[
        0x82, 0xB1, 0x82, 0xEA, 0x82, 0xCD, 0x93, 0xFA, 0x96, 0x7B, 0x8C, 0xEA, 0x82, 0xCC, 0x83,
        0x65, 0x83, 0x58, 0x83, 0x67, 0x95, 0xB6, 0x82, 0xC5, 0x82, 0xB7,
    ];

    // "这是一段混合 Latin と中文の UTF-8 文本です。" in UTF-8.
    const UTF8_SAMPLE: &[u8] = &[
        0xE8, 0xBF, 0x99, 0xE6, 0x98, 0xAF, 0xE4, 0xB8, 0x80, 0xE6, 0xAE, 0xB5, 0xE6, 0xB7, 0xB7,
        0xE5, 0x90, 0x88, 0x20, 0x4C, 0x61, 0x74, 0x69, 0x6E, 0x20, 0xE3, 0x81, 0xA8, 0xE4, 0xB8,
        0xAD, 0xE6, 0x96, 0x87, 0xE3, 0x81, 0xAE, 0x20, 0x55, 0x54, 0x46, 0x2D, 0x38, 0x20, 0xE6,
        0x96, 0x87, 0xE6, 0x9C, 0xAC, 0xE3, 0x81, 0xA7, 0xE3, 0x81, 0x99, 0xE3, 0x80, 0x82,
    ];

    #[test]
    fn test_detect_gb2312() {
        assert_eq!(detect(GB_SAMPLE, usize::MAX), Some("GB2312"));
        // The sibling handicaps keep the narrower encoding on top.
        let v = scores(GB_SAMPLE);
        assert_eq!(v.get(Charset::Gb2312), 90);
        assert_eq!(v.get(Charset::Gbk), 89);
        assert_eq!(v.get(Charset::Gb18030), 89);
    }

    #[test]
    fn test_detect_big5() {
        assert_eq!(detect(BIG5_SAMPLE, usize::MAX), Some("Big5"));
    }

    #[test]
    fn test_detect_euc_kr_over_cp949() {
        // Pure KS X 1001 text ties EUC-KR with its CP949 superset; catalog order decides.
        let v = scores(KR_SAMPLE);
        assert_eq!(v.get(Charset::EucKr), v.get(Charset::Cp949));
        assert_eq!(detect_charset(KR_SAMPLE), Some(Charset::EucKr));
        assert_eq!(detect(KR_SAMPLE, usize::MAX), Some("EUC_KR"));
    }

    #[test]
    fn test_detect_japanese_forms() {
        assert_eq!(detect(JP_EUC_SAMPLE, usize::MAX), Some("EUC_JP"));
        assert_eq!(detect(JP_SJIS_SAMPLE, usize::MAX), Some("SJIS"));
    }

    #[test]
    fn test_detect_utf8() {
        assert_eq!(detect(UTF8_SAMPLE, usize::MAX), Some("UTF-8"));
    }

    #[test]
    fn test_detect_utf16_bom() {
        assert_eq!(detect(&[0xFE, 0xFF], usize::MAX), Some("Unicode"));
        assert_eq!(detect(&[0xFF, 0xFE], usize::MAX), Some("Unicode"));
        assert_eq!(detect(&[0xFE, 0xFF, 0x00, 0x41], usize::MAX), Some("Unicode"));
    }

    #[test]
    fn test_detect_ascii() {
        assert_eq!(
            detect(b"The quick brown fox jumps over the lazy dog.", usize::MAX),
            Some("ASCII"),
        );
    }

    #[test]
    fn test_detect_iso_2022_kr_designator() {
        assert_eq!(detect(b"plain \x1B$)C text", usize::MAX), Some("ISO2022KR"));
    }

    #[test]
    fn test_structural_junk_is_undetermined() {
        // High-bit bytes matching no encoding's ranges drag every scorer to the floor.
        assert_eq!(detect(&[0x80; 16], usize::MAX), None);
        assert_eq!(detect_charset(&[0x80; 16]), None);
    }

    #[test]
    fn test_empty_buffer_is_ascii() {
        // Documented outcome of the seeded counters: DBCS scorers sit exactly at the
        // threshold, ASCII at 75.
        assert_eq!(detect(&[], usize::MAX), Some("ASCII"));
        assert_eq!(scores(&[]).best(), (Charset::Ascii, 75));
    }

    #[test]
    fn test_limit_truncates_input() {
        // Only the BOM survives the cap; the rest of the buffer is never read.
        let buf = &[0xFE, 0xFF, 0x80, 0x80, 0x80, 0x80];
        assert_eq!(detect(buf, 2), Some("Unicode"));
        // Cap of zero means an empty view.
        assert_eq!(detect(GB_SAMPLE, 0), Some("ASCII"));
    }

    #[test]
    fn test_detection_is_idempotent() {
        let first = scores(GB_SAMPLE);
        let second = scores(GB_SAMPLE);
        assert!(first.iter().eq(second.iter()));
        assert_eq!(detect(GB_SAMPLE, usize::MAX), detect(GB_SAMPLE, usize::MAX));
    }

    #[test]
    fn test_score_vector_shape() {
        let v = scores(GB_SAMPLE);
        assert_eq!(v.iter().count(), Charset::CATALOG.len());
        // Placeholders never score.
        assert_eq!(v.get(Charset::Johab), 0);
        assert_eq!(v.get(Charset::Utf8Trad), 0);
        assert_eq!(v.get(Charset::Other), 0);
    }
}
