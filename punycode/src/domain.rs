//! Whole domain names and email addresses.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::label::{label_to_ascii, label_to_unicode};
use crate::Result;

/// Characters that separate labels: U+002E FULL STOP, U+3002 IDEOGRAPHIC
/// FULL STOP, U+FF0E FULLWIDTH FULL STOP and U+FF61 HALFWIDTH IDEOGRAPHIC
/// FULL STOP. Output always uses U+002E.
pub const SEPARATORS: [char; 4] = ['\u{2E}', '\u{3002}', '\u{FF0E}', '\u{FF61}'];

/// Convert a domain name or email address to ASCII.
///
/// Only labels containing non-ASCII characters are encoded. In an email
/// address the local part, up to the first `@`, is left alone.
///
/// # Examples
///
/// ```
/// use punycode::encode;
///
/// assert_eq!(encode("mañana.com").unwrap(), "xn--maana-pta.com");
/// assert_eq!(encode("mañana\u{3002}com").unwrap(), "xn--maana-pta.com");
/// assert_eq!(encode("example.com.").unwrap(), "example.com.");
/// ```
pub fn encode(domain: &str) -> Result<String> {
    map_domain(domain, label_to_ascii)
}

/// Convert a domain name or email address to Unicode.
///
/// Labels starting with `xn--` (in any case) are decoded, everything else
/// passes through.
///
/// # Examples
///
/// ```
/// use punycode::decode;
///
/// assert_eq!(decode("xn--maana-pta.com").unwrap(), "mañana.com");
/// assert_eq!(decode("example.com").unwrap(), "example.com");
/// ```
pub fn decode(domain: &str) -> Result<String> {
    map_domain(domain, label_to_unicode)
}

fn map_domain<F>(input: &str, mut convert: F) -> Result<String>
where
    F: FnMut(&str) -> Result<Cow<'_, str>>,
{
    let mut output = String::with_capacity(input.len());

    let domain = match input.split_once('@') {
        Some((local, domain)) => {
            output.push_str(local);
            output.push('@');
            domain
        }
        None => input,
    };

    for (idx, label) in domain.split(&SEPARATORS[..]).enumerate() {
        if idx > 0 {
            output.push('.');
        }
        match convert(label) {
            Ok(converted) => {
                if matches!(converted, Cow::Owned(_)) {
                    trace!(label, converted = &*converted, "converted label");
                }
                output.push_str(&converted);
            }
            Err(e) => {
                debug!(label, error = %e, "failed to convert label");
                return Err(e);
            }
        }
    }

    Ok(output)
}
