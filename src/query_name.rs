use crate::{DnsError, NAME_CAPACITY};
use core::fmt::{Display, Formatter};

/// The dotted rendering of a QNAME, held in a fixed 64-byte array.
///
/// `len()` never exceeds 63, so the byte after the name is always free for the NUL
/// that [`terminate`](Self::terminate) writes.
/// Label bytes are copied as they are: no case folding, no escaping.
/// A NUL inside a label is copied too, and readers see the name only up to it.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct QueryName {
    bytes: [u8; NAME_CAPACITY],
    len: usize,
}
impl QueryName {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0_u8; NAME_CAPACITY],
            len: 0,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Number of bytes written, separators included, terminator excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `label`, preceded by a `.` when the name is not empty.
    ///
    /// # Errors
    /// Returns `Err(DnsError::NameTooLong)` and leaves the name unchanged
    /// when the separator, the label, and the terminator would not all fit.
    pub fn push_label(&mut self, label: &[u8]) -> Result<(), DnsError> {
        let separator = usize::from(!self.is_empty());
        if self.len + separator + label.len() + 1 > NAME_CAPACITY {
            return Err(DnsError::NameTooLong);
        }
        if separator == 1 {
            self.bytes[self.len] = b'.';
            self.len += 1;
        }
        self.bytes[self.len..self.len + label.len()].copy_from_slice(label);
        self.len += label.len();
        Ok(())
    }

    /// Writes the NUL after the last byte.
    pub fn terminate(&mut self) {
        self.bytes[self.len] = 0;
    }

    /// The name up to its first NUL.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        let written = &self.bytes[..self.len];
        match written.iter().position(|b| *b == 0) {
            Some(nul) => &written[..nul],
            None => written,
        }
    }

    /// Returns `None` when the name is not UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// The whole backing array, including the terminator and any unused tail.
    #[must_use]
    pub fn raw(&self) -> &[u8; NAME_CAPACITY] {
        &self.bytes
    }
}
impl Default for QueryName {
    fn default() -> Self {
        Self::new()
    }
}
impl Display for QueryName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "{}", self.as_bytes().escape_ascii())
    }
}
impl core::fmt::Debug for QueryName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "QueryName({})", self)
    }
}
