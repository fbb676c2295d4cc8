use crate::{write_bytes, DnsError};
use core::fmt::{Display, Formatter};
use fixed_buffer::FixedBuf;

/// Longest name in dotted form, without a trailing dot.
const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A lowercase hostname that is safe to put in an answer.
///
/// Name syntax: <https://datatracker.ietf.org/doc/html/rfc1035#section-2.3.1>
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DnsName(String);
impl DnsName {
    fn is_letter_digit(b: u8) -> bool {
        b.is_ascii_alphanumeric()
    }

    fn is_valid_label(label: &[u8]) -> bool {
        match (label.first(), label.last()) {
            (Some(first), Some(last)) => {
                label.len() <= MAX_LABEL_LEN
                    && first.is_ascii_alphabetic()
                    && Self::is_letter_digit(*last)
                    && label.iter().all(|b| Self::is_letter_digit(*b) || *b == b'-')
            }
            _ => false,
        }
    }

    /// Accepts a trailing dot and uppercase letters.
    ///
    /// # Errors
    /// Returns an error when `value` is not a valid hostname.
    pub fn new(value: impl AsRef<str>) -> Result<Self, String> {
        let value = value.as_ref();
        let trimmed = value.strip_suffix('.').unwrap_or(value);
        if trimmed.len() > MAX_NAME_LEN
            || !trimmed
                .split('.')
                .all(|label| Self::is_valid_label(label.as_bytes()))
        {
            return Err(format!("not a valid DNS name: {:?}", value));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn inner(&self) -> &str {
        &self.0
    }

    /// Encoded length: a length byte per label, the label bytes, and the terminator.
    #[must_use]
    pub fn wire_len(&self) -> usize {
        self.0.len() + 2
    }

    /// Writes the name as uncompressed labels.
    ///
    /// # Errors
    /// Returns `Err(DnsError::ResponseBufferFull)` when `out` fills up.
    pub fn write<const N: usize>(&self, out: &mut FixedBuf<N>) -> Result<(), DnsError> {
        for label in self.0.split('.') {
            let len = u8::try_from(label.len()).map_err(|_| DnsError::NameTooLong)?;
            write_bytes(out, &[len])?;
            write_bytes(out, label.as_bytes())?;
        }
        write_bytes(out, &[0])
    }
}
impl Display for DnsName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "{}", self.0)
    }
}
