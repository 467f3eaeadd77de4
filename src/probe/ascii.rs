//! The ASCII scorer.

const ESC: u8 = 0x1B;

/// Score plain ASCII: a base of 75, minus 5 for every high-bit byte and every ESC. The ESC
/// penalty keeps ASCII from winning over ISO-2022 framed text, whose byte stream is otherwise
/// fully 7-bit. Once the running score hits zero the buffer is clearly not ASCII and the scan
/// stops early.
pub(crate) fn ascii(buf: &[u8]) -> i32 {
    let mut score = 75i32;
    for &b in buf {
        if b > 0x7F || b == ESC {
            score -= 5;
            if score <= 0 {
                return 0;
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_ascii() {
        assert_eq!(ascii(b"The quick brown fox jumps over the lazy dog."), 75);
        assert_eq!(ascii(&[]), 75);
        assert_eq!(ascii(b"control chars are fine \x00\x01\x7F"), 75);
    }

    #[test]
    fn test_penalties() {
        assert_eq!(ascii(b"almost\x80clean"), 70);
        assert_eq!(ascii(b"framed \x1B$)C text"), 70);
    }

    #[test]
    fn test_short_circuit() {
        assert_eq!(ascii(&[0x80; 15]), 0);
        assert_eq!(ascii(&[0x80; 1000]), 0);
    }
}
