use crate::dns_message_header::{ANSWER_COUNT_OFFSET, FLAGS_OFFSET, RESPONSE_FLAGS};
use crate::{
    DnsClass, DnsError, DnsType, Label, LabelCursor, QueryName, HEADER_LEN, QUESTION_TRAILER_LEN,
};

/// Records the first fault, tagged with the line that found it.
macro_rules! fail {
    ($msg:expr, $error:expr) => {
        $msg.fail($error, line!())
    };
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ParsePhase {
    #[default]
    Fresh,
    HeaderDone,
    NameDone,
    Complete,
    Faulted,
}

/// Why a [`Message`] stopped.
///
/// Match on [`error`](Self::error).
/// The line number is only for debugging and changes between releases.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Fault {
    error: DnsError,
    line: u32,
}
impl Fault {
    #[must_use]
    pub fn error(&self) -> DnsError {
        self.error
    }

    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }
}

/// Parse and compose state for one UDP datagram.
///
/// The message never holds the datagram.
/// Each call borrows the caller's buffer for as long as it runs,
/// and the buffer's length is its capacity.
/// Use one message per datagram: [`new`](Self::new) or [`reset`](Self::reset),
/// then [`parse_query`](Self::parse_query),
/// then, if that succeeded, [`add_answer`](Self::add_answer).
///
/// The first problem found is kept in [`fault`](Self::fault) until `reset`.
/// After a fault the other fields mean nothing.
#[derive(Clone, Debug, Default)]
pub struct Message {
    length: usize,
    offset: usize,
    name: QueryName,
    query_type: u16,
    query_class: u16,
    phase: ParsePhase,
    fault: Option<Fault>,
}
impl Message {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears everything, ready for the next datagram.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn fail(&mut self, error: DnsError, line: u32) -> DnsError {
        self.phase = ParsePhase::Faulted;
        self.fault.get_or_insert(Fault { error, line }).error
    }

    /// Parses the question of the query in `buffer[..length]`.
    ///
    /// Only the first `length` bytes are read.
    /// The header is not inspected.
    ///
    /// # Errors
    /// Returns the first fault.  The same fault is kept in [`fault`](Self::fault).
    pub fn parse_query(&mut self, buffer: &[u8], length: usize) -> Result<(), DnsError> {
        if length > buffer.len() {
            return Err(fail!(self, DnsError::LengthExceedsBuffer));
        }
        self.check_header(length)?;
        let payload = &buffer[..self.length];
        self.decode_name(payload)?;
        self.decode_trailer(payload)
    }

    fn check_header(&mut self, length: usize) -> Result<(), DnsError> {
        if self.phase != ParsePhase::Fresh {
            return Err(fail!(self, DnsError::AlreadyParsed));
        }
        self.length = length;
        if self.length < HEADER_LEN {
            return Err(fail!(self, DnsError::HeaderTruncated));
        }
        self.offset = HEADER_LEN;
        self.phase = ParsePhase::HeaderDone;
        Ok(())
    }

    fn decode_name(&mut self, payload: &[u8]) -> Result<(), DnsError> {
        if self.phase != ParsePhase::HeaderDone {
            return Err(fail!(self, DnsError::NotParsed));
        }
        let mut cursor = LabelCursor::new(payload, self.offset);
        loop {
            match cursor.next_label() {
                Ok(Label::Terminator) => {
                    self.name.terminate();
                    self.offset = cursor.offset();
                    self.phase = ParsePhase::NameDone;
                    return Ok(());
                }
                Ok(Label::Text(bytes)) => {
                    if let Err(e) = self.name.push_label(bytes) {
                        return Err(fail!(self, e));
                    }
                    self.offset = cursor.offset();
                }
                Err(e) => return Err(fail!(self, e)),
            }
        }
    }

    fn decode_trailer(&mut self, payload: &[u8]) -> Result<(), DnsError> {
        if self.phase != ParsePhase::NameDone {
            return Err(fail!(self, DnsError::NotParsed));
        }
        let trailer = match payload.get(self.offset..self.offset + QUESTION_TRAILER_LEN) {
            Some(trailer) => trailer,
            None => return Err(fail!(self, DnsError::TrailerTruncated)),
        };
        self.query_type = u16::from_be_bytes([trailer[0], trailer[1]]);
        self.query_class = u16::from_be_bytes([trailer[2], trailer[3]]);
        self.offset += QUESTION_TRAILER_LEN;
        self.phase = ParsePhase::Complete;
        Ok(())
    }

    /// Turns the parsed query in `buffer` into a response carrying `answer`.
    ///
    /// `answer` must be a complete resource record: NAME, TYPE, CLASS, TTL, RDLENGTH, RDATA.
    /// It is copied right after the question.
    /// The flags become a standard response with recursion available and ANCOUNT becomes 1.
    /// ID, QDCOUNT, NSCOUNT, and ARCOUNT are left alone.
    ///
    /// Returns the length of the response.
    /// Calling this again overwrites the same answer.
    ///
    /// # Errors
    /// - `DnsError::NotParsed` before a successful [`parse_query`](Self::parse_query).
    ///   After a fault, returns that fault instead.
    /// - `DnsError::BufferUnbound` when `buffer` is shorter than the parsed query,
    ///   so it cannot be the buffer that was parsed.
    /// - `DnsError::ResponseBufferFull` when the answer does not fit in `buffer`.
    pub fn add_answer(&mut self, buffer: &mut [u8], answer: &[u8]) -> Result<usize, DnsError> {
        if self.phase != ParsePhase::Complete {
            return Err(fail!(self, DnsError::NotParsed));
        }
        if buffer.len() < self.length {
            return Err(fail!(self, DnsError::BufferUnbound));
        }
        let end = self.offset + answer.len();
        if end > buffer.len() {
            return Err(fail!(self, DnsError::ResponseBufferFull));
        }
        buffer[FLAGS_OFFSET..FLAGS_OFFSET + 2].copy_from_slice(&RESPONSE_FLAGS);
        buffer[ANSWER_COUNT_OFFSET..ANSWER_COUNT_OFFSET + 2].copy_from_slice(&1_u16.to_be_bytes());
        buffer[self.offset..end].copy_from_slice(answer);
        Ok(end)
    }

    /// The query name up to its first NUL, without a trailing dot.
    #[must_use]
    pub fn name(&self) -> &[u8] {
        self.name.as_bytes()
    }

    #[must_use]
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_str()
    }

    #[must_use]
    pub fn query_name(&self) -> &QueryName {
        &self.name
    }

    #[must_use]
    pub fn query_type(&self) -> u16 {
        self.query_type
    }

    #[must_use]
    pub fn query_class(&self) -> u16 {
        self.query_class
    }

    #[must_use]
    pub fn typ(&self) -> DnsType {
        DnsType::new(self.query_type)
    }

    #[must_use]
    pub fn class(&self) -> DnsClass {
        DnsClass::new(self.query_class)
    }

    /// `"A (IPv4)"`, `"AAAA (IPv6)"`, or `"OTHER"`.
    #[must_use]
    pub fn type_string(&self) -> &'static str {
        self.typ().describe()
    }

    #[must_use]
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.fault.is_none()
    }

    #[must_use]
    pub fn phase(&self) -> ParsePhase {
        self.phase
    }

    /// Bytes of the datagram consumed so far.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The payload length given to [`parse_query`](Self::parse_query).
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}
