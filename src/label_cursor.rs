use crate::DnsError;

/// One step of a QNAME walk.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Label<'a> {
    /// The zero-length label that ends the name.
    Terminator,
    /// A non-empty label, always inside the payload.
    Text(&'a [u8]),
}

/// Walks the length-prefixed labels of an uncompressed QNAME.
///
/// The cursor does the bounds math only.
/// It never copies label bytes, so a caller can decide separately where they go.
///
/// ```text
/// L1 B1..B_L1 L2 B1..B_L2 ... 0
/// ```
#[derive(Clone, Debug)]
pub struct LabelCursor<'a> {
    payload: &'a [u8],
    offset: usize,
}
impl<'a> LabelCursor<'a> {
    /// Makes a cursor over `payload` positioned at its first length byte, `offset`.
    #[must_use]
    pub fn new(payload: &'a [u8], offset: usize) -> Self {
        Self { payload, offset }
    }

    /// Offset of the next length byte.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Reads the next label and moves past it.
    /// On error the cursor does not move.
    ///
    /// # Errors
    /// - `DnsError::LabelTruncated` when the length byte or the label bytes lie past the payload.
    ///   A name with no terminator ends up here.
    /// - `DnsError::CompressedName` when the length byte is a compression pointer.
    pub fn next_label(&mut self) -> Result<Label<'a>, DnsError> {
        let len = *self
            .payload
            .get(self.offset)
            .ok_or(DnsError::LabelTruncated)?;
        if len & 0xC0 == 0xC0 {
            return Err(DnsError::CompressedName);
        }
        let start = self.offset + 1;
        let end = start + usize::from(len);
        if end > self.payload.len() {
            return Err(DnsError::LabelTruncated);
        }
        self.offset = end;
        if len == 0 {
            Ok(Label::Terminator)
        } else {
            Ok(Label::Text(&self.payload[start..end]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let payload = [0xFF, 3, b'a', b'b', b'c', 1, b'd', 0, 0xEE];
        let mut cursor = LabelCursor::new(&payload, 1);
        assert_eq!(Ok(Label::Text(b"abc")), cursor.next_label());
        assert_eq!(5, cursor.offset());
        assert_eq!(Ok(Label::Text(b"d")), cursor.next_label());
        assert_eq!(Ok(Label::Terminator), cursor.next_label());
        assert_eq!(8, cursor.offset());
    }

    #[test]
    fn empty_name() {
        let mut cursor = LabelCursor::new(&[0], 0);
        assert_eq!(Ok(Label::Terminator), cursor.next_label());
        assert_eq!(1, cursor.offset());
        assert_eq!(Err(DnsError::LabelTruncated), cursor.next_label());
        assert_eq!(1, cursor.offset());
    }

    #[test]
    fn truncated() {
        // Label bytes missing.
        let mut cursor = LabelCursor::new(&[3, b'a', b'b'], 0);
        assert_eq!(Err(DnsError::LabelTruncated), cursor.next_label());
        assert_eq!(0, cursor.offset());
        // Exactly fits, then no terminator.
        let mut cursor = LabelCursor::new(&[2, b'a', b'b'], 0);
        assert_eq!(Ok(Label::Text(b"ab")), cursor.next_label());
        assert_eq!(Err(DnsError::LabelTruncated), cursor.next_label());
        assert_eq!(3, cursor.offset());
        // Offset already past the end.
        let mut cursor = LabelCursor::new(&[0], 5);
        assert_eq!(Err(DnsError::LabelTruncated), cursor.next_label());
    }

    #[test]
    fn compressed() {
        let mut cursor = LabelCursor::new(&[0xC0, 0x0C], 0);
        assert_eq!(Err(DnsError::CompressedName), cursor.next_label());
        assert_eq!(0, cursor.offset());
    }

    #[test]
    fn always_advances_or_fails() {
        for first in 0..=u8::MAX {
            let mut payload = [first; 70];
            payload[69] = 0;
            let mut cursor = LabelCursor::new(&payload, 0);
            let mut steps = 0;
            loop {
                let before = cursor.offset();
                match cursor.next_label() {
                    Ok(Label::Terminator) | Err(_) => break,
                    Ok(Label::Text(bytes)) => {
                        assert!(!bytes.is_empty());
                        assert!(cursor.offset() > before);
                        assert!(cursor.offset() <= payload.len());
                    }
                }
                steps += 1;
                assert!(steps <= payload.len());
            }
        }
    }
}
