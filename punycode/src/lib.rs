//! Punycode: encode Unicode domain names in ASCII.
//!
//! An implementation of Bootstring with the Punycode parameters
//! ([RFC 3492](https://tools.ietf.org/html/rfc3492)), plus the IDNA label
//! handling ([RFC 3490](https://tools.ietf.org/html/rfc3490)) that turns
//! `mañana.com` into `xn--maana-pta.com` and back.
//!
//! The crate works at three levels:
//!
//! - [`bootstring_encode`] / [`bootstring_decode`] over codepoint slices, with
//!   [`to_codepoints`] / [`from_codepoints`] for UTF-16 input, and the
//!   `&str` wrappers [`encode_label`] / [`decode_label`]
//! - [`label_to_ascii`] / [`label_to_unicode`] for one label with the `xn--`
//!   prefix
//! - [`encode`] / [`decode`] for whole domain names and email addresses
//!
//! No normalization or label validation is done.
//!
//! # Examples
//!
//! ```
//! use punycode::{decode, decode_label, encode, encode_label};
//!
//! // Raw Bootstring
//! assert_eq!(encode_label("bücher").unwrap(), "bcher-kva");
//! assert_eq!(decode_label("bcher-kva").unwrap(), "bücher");
//!
//! // Domains only encode the labels that need it
//! assert_eq!(encode("bücher.example").unwrap(), "xn--bcher-kva.example");
//! assert_eq!(decode("xn--bcher-kva.example").unwrap(), "bücher.example");
//!
//! // Roundtrip property
//! let original = "☃-⌘.com";
//! assert_eq!(decode(&encode(original).unwrap()).unwrap(), original);
//! ```

mod bootstring;
mod decode;
mod domain;
mod encode;
mod label;
mod ucs2;

pub use decode::{bootstring_decode, decode_label, decode_label_utf16};
pub use domain::{decode, encode, SEPARATORS};
pub use encode::{bootstring_encode, encode_label, encode_label_utf16};
pub use label::{is_ace_label, label_to_ascii, label_to_unicode, ACE_PREFIX};
pub use ucs2::{from_codepoints, to_codepoints};

/// Errors that can occur during Punycode encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input is not valid for the requested conversion.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// An intermediate value exceeded the 32-bit range.
    #[error("overflow, needs wider integers")]
    Overflow,
}

/// The ways an input can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// A codepoint >= 0x80 appeared before the last delimiter.
    #[error("not a basic code point: U+{0:04X}")]
    NotBasic(u32),

    /// A character outside `a-z`, `A-Z`, `0-9` appeared in the encoded part.
    #[error("invalid digit in encoded portion: {0:?}")]
    InvalidDigit(char),

    /// Encoded data ended inside a variable-length integer.
    #[error("encoded data ended unexpectedly")]
    UnexpectedEnd,

    /// A value that is not a Unicode codepoint, or a surrogate where a
    /// `char` is required.
    #[error("invalid code point: {0:#X}")]
    InvalidCodepoint(u32),
}

/// Result type alias for Punycode operations.
pub type Result<T> = std::result::Result<T, Error>;


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip property: decode_label(encode_label(s)) == s
        #[test]
        fn prop_label_roundtrip(s in ".*") {
            let encoded = encode_label(&s).unwrap();
            prop_assert!(encoded.is_ascii(), "non-ASCII encoding for: {}", &s);
            let decoded = decode_label(&encoded).unwrap_or_else(|e| {
                panic!("decode failed for input '{}' with encoding '{}': {:?}", &s, &encoded, e)
            });
            prop_assert_eq!(&decoded, &s);
        }

        /// Identity: the encoder's output is canonical
        #[test]
        fn prop_label_identity(s in ".*") {
            let encoded = encode_label(&s).unwrap();
            let decoded = decode_label(&encoded).unwrap();
            prop_assert_eq!(encode_label(&decoded).unwrap(), encoded);
        }

        /// Any UTF-16, lone surrogates included, survives the trip
        #[test]
        fn prop_utf16_roundtrip(units in proptest::collection::vec(any::<u16>(), 0..40)) {
            prop_assert_eq!(from_codepoints(&to_codepoints(&units)).unwrap(), units.clone());

            let encoded = encode_label_utf16(&units).unwrap();
            prop_assert_eq!(decode_label_utf16(&encoded).unwrap(), units);
        }

        /// Domain roundtrip for lowercase labels that are not already ACE
        #[test]
        fn prop_domain_roundtrip(d in "[a-z0-9\u{e0}-\u{ff}\u{4e00}-\u{4e20}]{0,12}(\\.[a-z0-9\u{e0}-\u{ff}\u{4e00}-\u{4e20}]{0,12}){0,3}") {
            let encoded = encode(&d).unwrap();
            prop_assert!(encoded.is_ascii());
            prop_assert_eq!(decode(&encoded).unwrap(), d);
        }

        /// Idempotency: encode(encode(x)) == encode(x)
        #[test]
        fn prop_domain_idempotent(d in "\\PC{0,30}") {
            let once = encode(&d).unwrap();
            let twice = encode(&once).unwrap();
            prop_assert_eq!(&once, &twice, "idempotency failed for: {}", &d);
        }

        /// Names without an ACE label pass through decode
        #[test]
        fn prop_decode_passthrough(d in "[a-zA-Z0-9 \\-\\.,!#$%^&*()]{0,40}") {
            prop_assume!(!d.split(&SEPARATORS[..]).any(is_ace_label));
            prop_assert_eq!(decode(&d).unwrap(), d);
        }
    }
}
