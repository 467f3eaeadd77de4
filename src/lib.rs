//! A statistical charset detector for byte buffers with no declared encoding. Feed it raw
//! bytes and it scores them against a fixed catalog of legacy CJK encodings, UTF-8, UTF-16,
//! and plain ASCII, then reports the most probable match.
//!
//! The name, `descry`, is an old verb meaning 'to catch sight of something from afar' - which
//! is about all a detector can honestly claim to do with an unlabeled buffer.
//!
//! ```
//! use descry::detect;
//!
//! assert_eq!(detect(b"plain old text", usize::MAX), Some("ASCII"));
//! assert_eq!(detect(&[0xFE, 0xFF, 0x00, 0x41], usize::MAX), Some("Unicode"));
//! ```
//!
//! ## Limitations
//!
//! Detection is statistical, not authoritative. Short buffers, or buffers mixing encodings,
//! may leave no candidate above the confidence threshold; [`detect`] then returns `None` and
//! the caller should fall back to a default encoding of its choosing. Scripts outside the
//! catalog (Cyrillic, Arabic, Thai, ...) are not recognized beyond what ASCII covers.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    elided_lifetimes_in_paths,
    missing_docs,
    clippy::cargo,
)]

pub mod charset;
pub mod detect;
mod freq;
mod probe;

pub use charset::Charset;
pub use detect::{detect, detect_charset, scores, Scores, THRESHOLD};
