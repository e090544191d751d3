//! Bootstring decoding.

use crate::bootstring::{
    adapt_bias, decode_digit, is_basic, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
    MAX_CODEPOINT,
};
use crate::{ucs2, Error, InvalidInput, Result};

/// Decode a Bootstring string back to codepoints.
///
/// Everything before the last delimiter is taken literally and must be
/// basic. Digits are case-insensitive. Decoded codepoints may be unpaired
/// surrogates; use [`decode_label`] to get a `String`.
///
/// # Examples
///
/// ```
/// use punycode::{bootstring_decode, Error, InvalidInput};
///
/// assert_eq!(bootstring_decode("tda").unwrap(), vec![0xFC]);
/// assert_eq!(bootstring_decode("Bach-").unwrap(), vec![0x42, 0x61, 0x63, 0x68]);
/// assert_eq!(
///     bootstring_decode("bcher-k!a"),
///     Err(Error::InvalidInput(InvalidInput::InvalidDigit('!')))
/// );
/// ```
pub fn bootstring_decode(input: &str) -> Result<Vec<u32>> {
    // With no basic prefix, a leading delimiter is read as a digit.
    let (basic, encoded) = match input.rfind(DELIMITER) {
        Some(pos) if pos > 0 => (&input[..pos], &input[pos + DELIMITER.len_utf8()..]),
        _ => ("", input),
    };

    let mut output: Vec<u32> = Vec::with_capacity(input.len());
    for c in basic.chars() {
        let cp = u32::from(c);
        if !is_basic(cp) {
            return Err(Error::InvalidInput(InvalidInput::NotBasic(cp)));
        }
        output.push(cp);
    }

    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut chars = encoded.chars().peekable();

    while chars.peek().is_some() {
        let old_i = i;
        i = decode_varint(&mut chars, i, bias)?;

        let len = u32::try_from(output.len())
            .ok()
            .and_then(|len| len.checked_add(1))
            .ok_or(Error::Overflow)?;
        bias = adapt_bias(i - old_i, len, old_i == 0);

        // i wraps around from len to 0, bumping n each time
        n = n.checked_add(i / len).ok_or(Error::Overflow)?;
        i %= len;

        if n > MAX_CODEPOINT {
            return Err(Error::InvalidInput(InvalidInput::InvalidCodepoint(n)));
        }

        output.insert(i as usize, n);
        i += 1;
    }

    Ok(output)
}

/// Decode a generalized variable-length integer and add it to `i`.
fn decode_varint(
    chars: &mut std::iter::Peekable<std::str::Chars>,
    mut i: u32,
    bias: u32,
) -> Result<u32> {
    let mut w: u32 = 1;
    let mut k = BASE;

    loop {
        let c = chars
            .next()
            .ok_or(Error::InvalidInput(InvalidInput::UnexpectedEnd))?;
        let digit = decode_digit(c).ok_or(Error::InvalidInput(InvalidInput::InvalidDigit(c)))?;

        // i += digit * w
        i = digit
            .checked_mul(w)
            .and_then(|d| i.checked_add(d))
            .ok_or(Error::Overflow)?;

        let t = threshold(k, bias);
        if digit < t {
            return Ok(i);
        }

        // w *= (BASE - t)
        w = w.checked_mul(BASE - t).ok_or(Error::Overflow)?;
        k = k.checked_add(BASE).ok_or(Error::Overflow)?;
    }
}

/// Decode a Bootstring string, without the ACE prefix, to a `String`.
///
/// Fails with [`InvalidInput::InvalidCodepoint`] if the decoded text holds
/// a surrogate, which a `String` cannot carry. [`decode_label_utf16`]
/// accepts those.
///
/// ```
/// assert_eq!(punycode::decode_label("Bach-").unwrap(), "Bach");
/// assert_eq!(punycode::decode_label("ZZZ").unwrap(), "\u{7BA5}");
/// ```
pub fn decode_label(input: &str) -> Result<String> {
    bootstring_decode(input)?
        .into_iter()
        .map(|cp| char::from_u32(cp).ok_or(Error::InvalidInput(InvalidInput::InvalidCodepoint(cp))))
        .collect()
}

/// Decode a Bootstring string to UTF-16 code units.
pub fn decode_label_utf16(input: &str) -> Result<Vec<u16>> {
    ucs2::from_codepoints(&bootstring_decode(input)?)
}
