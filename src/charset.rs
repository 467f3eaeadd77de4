//! The encoding catalog and its metadata registry. [`Charset`] enumerates every candidate the
//! detector scores, and maps each one to its canonical runtime charset name and a
//! human-readable label.

use core::fmt;

/// Number of catalog members.
pub(crate) const CATALOG_LEN: usize = 24;

/// A candidate encoding in the detection catalog.
///
/// Declaration order is significant: [`Scores::best`](crate::Scores::best) breaks ties in
/// favor of the earlier member, so the order below encodes the priority between encodings
/// that produce identical scores (GBK over GB18030, EUC-KR over CP949, and so on).
///
/// Several members are permanently unscored placeholders carried for catalog compatibility -
/// the UTF-8/UTF-16 traditional/simplified sub-variants, the ISO-2022-CN sub-designators,
/// [`Johab`](Charset::Johab), and [`Other`](Charset::Other) always score zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Charset {
    /// Simplified Chinese, GB2312-80.
    Gb2312,
    /// Simplified Chinese, GBK (GB2312 with the extended lead band).
    Gbk,
    /// Simplified Chinese, GB18030 (GBK plus 4-byte supplementary sequences).
    Gb18030,
    /// HZ, the 7-bit escaped form of GB2312.
    Hz,
    /// Traditional Chinese, Big5.
    Big5,
    /// Traditional Chinese, CNS 11643 in its EUC-TW byte form.
    Cns11643,
    /// UTF-8.
    Utf8,
    /// UTF-8 carrying Traditional Chinese text. Unscored placeholder.
    Utf8Trad,
    /// UTF-8 carrying Simplified Chinese text. Unscored placeholder.
    Utf8Simp,
    /// UTF-16, either endianness, recognized by BOM only.
    Unicode,
    /// UTF-16 carrying Traditional Chinese text. Unscored placeholder.
    UnicodeTrad,
    /// UTF-16 carrying Simplified Chinese text. Unscored placeholder.
    UnicodeSimp,
    /// ISO-2022-CN, either designator.
    Iso2022Cn,
    /// ISO-2022-CN restricted to the CNS designator. Unscored placeholder.
    Iso2022CnCns,
    /// ISO-2022-CN restricted to the GB designator. Unscored placeholder.
    Iso2022CnGb,
    /// Korean, EUC-KR (KS X 1001).
    EucKr,
    /// Korean, Unified Hangul Code (CP949), a superset of EUC-KR.
    Cp949,
    /// ISO-2022-KR.
    Iso2022Kr,
    /// Korean, Johab. Unscored placeholder.
    Johab,
    /// Japanese, Shift-JIS.
    ShiftJis,
    /// Japanese, EUC-JP.
    EucJp,
    /// ISO-2022-JP.
    Iso2022Jp,
    /// Plain 7-bit ASCII.
    Ascii,
    /// None of the above. Unscored placeholder; maps to Latin-1.
    Other,
}

impl Charset {
    /// Every catalog member, in declaration (priority) order.
    pub const CATALOG: [Charset; CATALOG_LEN] = [
        Charset::Gb2312,
        Charset::Gbk,
        Charset::Gb18030,
        Charset::Hz,
        Charset::Big5,
        Charset::Cns11643,
        Charset::Utf8,
        Charset::Utf8Trad,
        Charset::Utf8Simp,
        Charset::Unicode,
        Charset::UnicodeTrad,
        Charset::UnicodeSimp,
        Charset::Iso2022Cn,
        Charset::Iso2022CnCns,
        Charset::Iso2022CnGb,
        Charset::EucKr,
        Charset::Cp949,
        Charset::Iso2022Kr,
        Charset::Johab,
        Charset::ShiftJis,
        Charset::EucJp,
        Charset::Iso2022Jp,
        Charset::Ascii,
        Charset::Other,
    ];

    /// The canonical runtime charset name, the identifier a decoder registry would accept.
    ///
    /// HZ resolves to `"ASCII"` - its byte stream is 7-bit and has no distinct runtime
    /// charset of its own.
    pub fn canonical(self) -> &'static str {
        match self {
            Charset::Gb2312 | Charset::Iso2022CnGb => "GB2312",
            Charset::Gbk => "GBK",
            Charset::Gb18030 => "GB18030",
            Charset::Hz | Charset::Ascii => "ASCII",
            Charset::Big5 => "Big5",
            Charset::Cns11643 | Charset::Iso2022CnCns => "EUC-TW",
            Charset::Utf8 | Charset::Utf8Trad | Charset::Utf8Simp => "UTF-8",
            Charset::Unicode | Charset::UnicodeTrad | Charset::UnicodeSimp => "Unicode",
            Charset::Iso2022Cn => "ISO2022CN",
            Charset::EucKr => "EUC_KR",
            Charset::Cp949 => "MS949",
            Charset::Iso2022Kr => "ISO2022KR",
            Charset::Johab => "Johab",
            Charset::ShiftJis => "SJIS",
            Charset::EucJp => "EUC_JP",
            Charset::Iso2022Jp => "ISO2022JP",
            Charset::Other => "ISO8859_1",
        }
    }

    /// A human-readable label for display purposes.
    pub fn display_name(self) -> &'static str {
        match self {
            Charset::Gb2312 => "Simplified Chinese GB-2312",
            Charset::Gbk => "Simplified Chinese GBK",
            Charset::Gb18030 => "Simplified Chinese GB-18030",
            Charset::Hz => "Simplified Chinese HZ",
            Charset::Big5 => "Traditional Chinese Big-5",
            Charset::Cns11643 => "Traditional Chinese CNS-11643 (EUC-TW)",
            Charset::Utf8 => "UTF-8",
            Charset::Utf8Trad => "UTF-8 (Traditional Chinese)",
            Charset::Utf8Simp => "UTF-8 (Simplified Chinese)",
            Charset::Unicode => "Unicode (UTF-16)",
            Charset::UnicodeTrad => "Unicode (Traditional Chinese)",
            Charset::UnicodeSimp => "Unicode (Simplified Chinese)",
            Charset::Iso2022Cn => "Chinese ISO-2022-CN",
            Charset::Iso2022CnCns => "ISO-2022-CN (CNS-11643)",
            Charset::Iso2022CnGb => "ISO-2022-CN (GB-2312)",
            Charset::EucKr => "Korean EUC-KR",
            Charset::Cp949 => "Korean Unified Hangul (CP949)",
            Charset::Iso2022Kr => "Korean ISO-2022-KR",
            Charset::Johab => "Korean Johab",
            Charset::ShiftJis => "Japanese Shift-JIS",
            Charset::EucJp => "Japanese EUC-JP",
            Charset::Iso2022Jp => "Japanese ISO-2022-JP",
            Charset::Ascii => "ASCII",
            Charset::Other => "Other (Latin-1)",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        assert_eq!(Charset::CATALOG.len(), CATALOG_LEN);
        assert_eq!(Charset::CATALOG[0], Charset::Gb2312);
        // GBK must precede GB18030 and EUC-KR must precede CP949, or the tie-break
        // between each pair inverts.
        let pos = |c| Charset::CATALOG.iter().position(|&x| x == c).unwrap();
        assert!(pos(Charset::Gbk) < pos(Charset::Gb18030));
        assert!(pos(Charset::EucKr) < pos(Charset::Cp949));
        assert!(pos(Charset::ShiftJis) < pos(Charset::EucJp));
    }

    #[test]
    fn test_canonical_names() {
        assert_eq!(Charset::Gb2312.canonical(), "GB2312");
        assert_eq!(Charset::Hz.canonical(), "ASCII");
        assert_eq!(Charset::Cns11643.canonical(), "EUC-TW");
        assert_eq!(Charset::Cp949.canonical(), "MS949");
        assert_eq!(Charset::Unicode.canonical(), "Unicode");
        assert_eq!(Charset::Other.canonical(), "ISO8859_1");
    }
}
