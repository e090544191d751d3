//! Conversion between UTF-16 code units and codepoints.
//!
//! Unlike `char::decode_utf16`, unpaired surrogates are not errors here. They
//! pass through as their raw 16-bit value, so any `&[u16]` round-trips.

use crate::bootstring::MAX_CODEPOINT;
use crate::{Error, InvalidInput, Result};

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Decode UTF-16 code units into codepoints.
///
/// A high surrogate immediately followed by a low surrogate combines into one
/// supplementary codepoint. Every other unit, including lone surrogates, is
/// emitted as is.
///
/// # Examples
///
/// ```
/// assert_eq!(punycode::to_codepoints(&[0xD834, 0xDF06]), vec![0x1D306]);
/// assert_eq!(punycode::to_codepoints(&[0xD800, 0x61, 0x62]), vec![0xD800, 0x61, 0x62]);
/// ```
pub fn to_codepoints(units: &[u16]) -> Vec<u32> {
    let mut output = Vec::with_capacity(units.len());
    let mut iter = units.iter().copied().peekable();

    while let Some(unit) = iter.next() {
        if HIGH_SURROGATES.contains(&unit) {
            if let Some(low) = iter.next_if(|next| LOW_SURROGATES.contains(next)) {
                let high = u32::from(unit - 0xD800);
                let low = u32::from(low - 0xDC00);
                output.push(0x10000 + (high << 10) + low);
                continue;
            }
        }
        output.push(u32::from(unit));
    }

    output
}

/// Encode codepoints as UTF-16 code units.
///
/// Codepoints above U+FFFF become a surrogate pair. Values above U+10FFFF
/// are rejected.
pub fn from_codepoints(codepoints: &[u32]) -> Result<Vec<u16>> {
    let mut output = Vec::with_capacity(codepoints.len());

    for &cp in codepoints {
        if cp > MAX_CODEPOINT {
            return Err(Error::InvalidInput(InvalidInput::InvalidCodepoint(cp)));
        }
        match u16::try_from(cp) {
            Ok(unit) => output.push(unit),
            Err(_) => {
                let offset = cp - 0x10000;
                output.push(0xD800 + (offset >> 10) as u16);
                output.push(0xDC00 + (offset & 0x3FF) as u16);
            }
        }
    }

    Ok(output)
}
