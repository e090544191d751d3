//! Single domain labels and the `xn--` ACE prefix.

use std::borrow::Cow;

use crate::decode::decode_label;
use crate::encode::encode_label;
use crate::Result;

/// The prefix marking a Punycode-encoded label.
pub const ACE_PREFIX: &str = "xn--";

/// Check if a label carries the ACE prefix, ignoring ASCII case.
///
/// This doesn't validate that the rest of the label decodes.
pub fn is_ace_label(label: &str) -> bool {
    label
        .get(..ACE_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(ACE_PREFIX))
}

/// Convert one label to its ASCII form.
///
/// ASCII labels are returned unchanged, even if they already start with
/// `xn--`. Anything else is Bootstring-encoded behind the ACE prefix.
///
/// ```
/// use punycode::label_to_ascii;
///
/// assert_eq!(label_to_ascii("example").unwrap(), "example");
/// assert_eq!(label_to_ascii("mañana").unwrap(), "xn--maana-pta");
/// ```
pub fn label_to_ascii(label: &str) -> Result<Cow<'_, str>> {
    if label.is_ascii() {
        return Ok(Cow::Borrowed(label));
    }

    let encoded = encode_label(label)?;
    Ok(Cow::Owned(format!("{}{}", ACE_PREFIX, encoded)))
}

/// Convert one label to its Unicode form.
///
/// Labels without the ACE prefix are returned unchanged. The rest of an ACE
/// label is lowercased before decoding.
///
/// ```
/// use punycode::label_to_unicode;
///
/// assert_eq!(label_to_unicode("XN--maana-pta").unwrap(), "mañana");
/// assert_eq!(label_to_unicode("Bach-").unwrap(), "Bach-");
/// ```
pub fn label_to_unicode(label: &str) -> Result<Cow<'_, str>> {
    if !is_ace_label(label) {
        return Ok(Cow::Borrowed(label));
    }

    let encoded = label[ACE_PREFIX.len()..].to_ascii_lowercase();
    decode_label(&encoded).map(Cow::Owned)
}
