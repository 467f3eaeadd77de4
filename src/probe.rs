//! Per-encoding confidence scorers. Every scorer is a pure function from the input buffer (and
//! the compiled-in frequency tables) to an integer confidence, nominally 0-100; additive
//! heuristics can push a score slightly past either end. Scorers never observe each other's
//! output, so they may run in any order, or in parallel.

use crate::charset::Charset;

pub(crate) mod dbcs;

mod ascii;
mod big5;
mod gb;
mod jp;
mod kr;
mod utf;

/// Score `buf` as a candidate for `charset`. Placeholder catalog members score zero.
pub(crate) fn score(charset: Charset, buf: &[u8]) -> i32 {
    match charset {
        Charset::Gb2312 => dbcs::score::<gb::Gb2312>(buf),
        Charset::Gbk => dbcs::score::<gb::Gbk>(buf),
        Charset::Gb18030 => dbcs::score::<gb::Gb18030>(buf),
        Charset::Hz => gb::hz(buf),
        Charset::Big5 => dbcs::score::<big5::Big5>(buf),
        Charset::Cns11643 => dbcs::score::<big5::EucTw>(buf),
        Charset::Utf8 => utf::utf8(buf),
        Charset::Unicode => utf::utf16_bom(buf),
        Charset::Iso2022Cn => gb::iso_2022_cn(buf),
        Charset::EucKr => dbcs::score::<kr::EucKr>(buf),
        Charset::Cp949 => dbcs::score::<kr::Cp949>(buf),
        Charset::Iso2022Kr => kr::iso_2022_kr(buf),
        Charset::ShiftJis => dbcs::score::<jp::ShiftJis>(buf),
        Charset::EucJp => dbcs::score::<jp::EucJp>(buf),
        Charset::Iso2022Jp => jp::iso_2022_jp(buf),
        Charset::Ascii => ascii::ascii(buf),
        _ => 0,
    }
}
