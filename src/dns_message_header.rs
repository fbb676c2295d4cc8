use crate::{DnsError, DnsOpCode, DnsResponseCode, HEADER_LEN};

/// Byte offset of the flags word.
pub(crate) const FLAGS_OFFSET: usize = 2;
/// Byte offset of ANCOUNT.
pub(crate) const ANSWER_COUNT_OFFSET: usize = 6;
/// Byte offset of ARCOUNT.
pub(crate) const ADDITIONAL_COUNT_OFFSET: usize = 10;
/// QR=1, OPCODE=QUERY, AA=0, TC=0, RD=1, RA=1, Z=0, RCODE=NOERROR.
pub(crate) const RESPONSE_FLAGS: [u8; 2] = [0x81, 0x80];

/// A decoded copy of the 12-byte header.
///
/// [`Message`](crate::Message) treats the header as opaque.
/// This type lets the serving code screen out datagrams that are not plain queries
/// before spending time on the question.
///
/// ```text
///   0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
/// |                      ID                       |
/// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
/// |                    QDCOUNT                    |
/// |                    ANCOUNT                    |
/// |                    NSCOUNT                    |
/// |                    ARCOUNT                    |
/// ```
///
/// <https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1>
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DnsMessageHeader {
    pub id: u16,
    pub is_response: bool,
    pub op_code: DnsOpCode,
    pub authoritative_answer: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub response_code: DnsResponseCode,
    pub question_count: u16,
    pub answer_count: u16,
    pub name_server_count: u16,
    pub additional_count: u16,
}
impl DnsMessageHeader {
    /// # Errors
    /// Returns `Err(DnsError::HeaderTruncated)` when `bytes` is shorter than the header.
    pub fn parse(bytes: &[u8]) -> Result<Self, DnsError> {
        let b: &[u8; HEADER_LEN] = bytes
            .get(..HEADER_LEN)
            .and_then(|b| b.try_into().ok())
            .ok_or(DnsError::HeaderTruncated)?;
        let flag = |byte: u8, bit: u8| (byte >> bit) & 1 == 1;
        Ok(Self {
            id: u16::from_be_bytes([b[0], b[1]]),
            is_response: flag(b[2], 7),
            op_code: DnsOpCode::new((b[2] >> 3) & 0xF),
            authoritative_answer: flag(b[2], 2),
            truncated: flag(b[2], 1),
            recursion_desired: flag(b[2], 0),
            recursion_available: flag(b[3], 7),
            response_code: DnsResponseCode::new(b[3] & 0xF),
            question_count: u16::from_be_bytes([b[4], b[5]]),
            answer_count: u16::from_be_bytes([b[6], b[7]]),
            name_server_count: u16::from_be_bytes([b[8], b[9]]),
            additional_count: u16::from_be_bytes([b[10], b[11]]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_query_header() {
        let header = DnsMessageHeader::parse(&[
            0xAB, 0xCD, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF,
        ])
        .unwrap();
        assert_eq!(
            DnsMessageHeader {
                id: 0xABCD,
                is_response: false,
                op_code: DnsOpCode::Query,
                authoritative_answer: false,
                truncated: false,
                recursion_desired: true,
                recursion_available: false,
                response_code: DnsResponseCode::NoError,
                question_count: 1,
                answer_count: 0,
                name_server_count: 0,
                additional_count: 0,
            },
            header
        );
    }

    #[test]
    fn parse_response_flags() {
        let mut bytes = [0_u8; HEADER_LEN];
        bytes[FLAGS_OFFSET..FLAGS_OFFSET + 2].copy_from_slice(&RESPONSE_FLAGS);
        bytes[ANSWER_COUNT_OFFSET + 1] = 1;
        let header = DnsMessageHeader::parse(&bytes).unwrap();
        assert!(header.is_response);
        assert_eq!(DnsOpCode::Query, header.op_code);
        assert!(!header.authoritative_answer);
        assert!(!header.truncated);
        assert!(header.recursion_desired);
        assert!(header.recursion_available);
        assert_eq!(DnsResponseCode::NoError, header.response_code);
        assert_eq!(1, header.answer_count);
    }

    #[test]
    fn parse_op_code_and_rcode() {
        // OPCODE=STATUS, TC=1, RCODE=REFUSED
        let bytes = [0, 0, 0x12, 0x05, 0, 0, 0, 0, 0, 0, 0, 0];
        let header = DnsMessageHeader::parse(&bytes).unwrap();
        assert_eq!(DnsOpCode::Status, header.op_code);
        assert!(header.truncated);
        assert_eq!(DnsResponseCode::Refused, header.response_code);
    }

    #[test]
    fn parse_truncated() {
        assert_eq!(
            Err(DnsError::HeaderTruncated),
            DnsMessageHeader::parse(&[0_u8; HEADER_LEN - 1])
        );
        assert_eq!(Err(DnsError::HeaderTruncated), DnsMessageHeader::parse(&[]));
    }
}
