//! Bootstring encoding.

use crate::bootstring::{
    adapt_bias, encode_digit, is_basic, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
    MAX_CODEPOINT,
};
use crate::{ucs2, Error, InvalidInput, Result};

/// Encode a codepoint sequence with Bootstring.
///
/// Basic codepoints are copied in order and followed by the delimiter when
/// there is at least one of them. The remaining codepoints are encoded as
/// deltas after it. No `xn--` prefix is added.
///
/// # Examples
///
/// ```
/// use punycode::bootstring_encode;
///
/// assert_eq!(bootstring_encode(&[0xFC]).unwrap(), "tda");
/// assert_eq!(bootstring_encode(&[0x62, 0xFC, 0x63, 0x68, 0x65, 0x72]).unwrap(), "bcher-kva");
/// assert_eq!(bootstring_encode(&[]).unwrap(), "");
/// ```
pub fn bootstring_encode(input: &[u32]) -> Result<String> {
    if let Some(&cp) = input.iter().find(|&&cp| cp > MAX_CODEPOINT) {
        return Err(Error::InvalidInput(InvalidInput::InvalidCodepoint(cp)));
    }

    let mut output: String = input
        .iter()
        .filter(|&&cp| is_basic(cp))
        .map(|&cp| cp as u8 as char)
        .collect();

    let input_len = u32::try_from(input.len()).map_err(|_| Error::Overflow)?;
    let basic_len = output.len() as u32;
    if basic_len > 0 {
        output.push(DELIMITER);
    }

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic_len;

    while handled < input_len {
        // All codepoints below n are handled; find the next one up.
        let m = input
            .iter()
            .copied()
            .filter(|&cp| cp >= n)
            .min()
            .ok_or(Error::Overflow)?;

        // Advance the decoder's <n, i> state to <m, 0>
        delta = (m - n)
            .checked_mul(handled + 1)
            .and_then(|d| d.checked_add(delta))
            .ok_or(Error::Overflow)?;
        n = m;

        for &cp in input {
            if cp < n {
                delta = delta.checked_add(1).ok_or(Error::Overflow)?;
            }
            if cp == n {
                encode_varint(&mut output, delta, bias);
                bias = adapt_bias(delta, handled + 1, handled == basic_len);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(Error::Overflow)?;
        n = n.checked_add(1).ok_or(Error::Overflow)?;
    }

    Ok(output)
}

/// Encode a value as a generalized variable-length integer.
fn encode_varint(output: &mut String, mut value: u32, bias: u32) {
    let mut k = BASE;

    loop {
        let t = threshold(k, bias);

        if value < t {
            output.push(encode_digit(value).expect("value should be < BASE"));
            break;
        }

        let digit = t + (value - t) % (BASE - t);
        output.push(encode_digit(digit).expect("digit should be < BASE"));

        value = (value - t) / (BASE - t);
        k += BASE;
    }
}

/// Encode a string with Bootstring, without the ACE prefix.
///
/// ```
/// assert_eq!(punycode::encode_label("Bach").unwrap(), "Bach-");
/// assert_eq!(punycode::encode_label("ü").unwrap(), "tda");
/// ```
pub fn encode_label(input: &str) -> Result<String> {
    let codepoints: Vec<u32> = input.chars().map(u32::from).collect();
    bootstring_encode(&codepoints)
}

/// Encode UTF-16 text with Bootstring.
///
/// Lone surrogates are encoded as their own codepoints, so this accepts text
/// that cannot be represented as a `str`.
pub fn encode_label_utf16(input: &[u16]) -> Result<String> {
    bootstring_encode(&ucs2::to_codepoints(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_varint_str(value: u32, bias: u32) -> String {
        let mut output = String::new();
        encode_varint(&mut output, value, bias);
        output
    }

    #[test]
    fn test_encode_varint() {
        assert_eq!(encode_varint_str(0, INITIAL_BIAS), "a");
        assert_eq!(encode_varint_str(124, INITIAL_BIAS), "tda");
        // Single digit once the threshold saturates
        assert_eq!(encode_varint_str(25, 0), "z");
    }

    #[test]
    fn test_encode_basic_only() {
        assert_eq!(encode_label("Bach").unwrap(), "Bach-");
        assert_eq!(encode_label("-> $1.00 <-").unwrap(), "-> $1.00 <--");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_label("").unwrap(), "");
    }

    #[test]
    fn test_encode_single_non_basic() {
        assert_eq!(encode_label("\u{FC}").unwrap(), "tda");
    }

    #[test]
    fn test_encode_mixed() {
        assert_eq!(encode_label("b\u{FC}cher").unwrap(), "bcher-kva");
        assert_eq!(encode_label("ma\u{F1}ana").unwrap(), "maana-pta");
    }

    #[test]
    fn test_encode_no_delimiter_in_suffix() {
        let encoded = encode_label("\u{FC}\u{EB}\u{E4}\u{F6}\u{2665}").unwrap();
        assert_eq!(encoded, "4can8av2009b");
        assert!(!encoded.contains(DELIMITER));
    }

    #[test]
    fn test_encode_keeps_case() {
        assert_eq!(
            encode_label("Porqu\u{E9}nopuedensimplementehablarenEspa\u{F1}ol").unwrap(),
            "PorqunopuedensimplementehablarenEspaol-fmd56a"
        );
    }

    #[test]
    fn test_encode_rejects_non_codepoint() {
        assert_eq!(
            bootstring_encode(&[0x61, 0x110000]),
            Err(Error::InvalidInput(InvalidInput::InvalidCodepoint(0x110000)))
        );
    }

    #[test]
    fn test_encode_utf16_lone_surrogate() {
        let encoded = encode_label_utf16(&[0xD800, 0x61]).unwrap();
        assert_eq!(encoded, "a-qc4g");
        assert_eq!(
            crate::decode::decode_label_utf16(&encoded).unwrap(),
            vec![0xD800, 0x61]
        );
    }

    #[test]
    fn test_encode_overflow() {
        // (0x10FFFF - 0x81) * 5001 does not fit in 32 bits
        let input = [vec![0x80; 5000], vec![0x10FFFF]].concat();
        assert_eq!(bootstring_encode(&input), Err(Error::Overflow));
    }
}
