//! dns-responder
//! =============
//! [![license: Apache 2.0](https://gitlab.com/leonhard-llc/ops/-/raw/main/license-apache-2.0.svg)](https://gitlab.com/leonhard-llc/ops/-/raw/main/dns-responder/LICENSE)
//! [![unsafe forbidden](https://gitlab.com/leonhard-llc/ops/-/raw/main/unsafe-forbidden.svg)](https://github.com/rust-secure-code/safety-dance/)
//! [![pipeline status](https://gitlab.com/leonhard-llc/ops/badges/main/pipeline.svg)](https://gitlab.com/leonhard-llc/ops/-/pipelines)
//!
//! A tiny DNS responder for small devices.
//! It parses the question of a query in the datagram buffer
//! and turns the same buffer into a single-answer response.
//!
//! # Use Cases
//! - Captive portals: answer every lookup with the device's own address.
//! - Local helpers that answer a handful of fixed names.
//!
//! # Features
//! - `forbid(unsafe_code)`
//! - [`Message`] never allocates.
//!   It works on the caller's buffer and a fixed 64-byte name.
//! - Rejects overlong labels, unterminated names, and truncated questions.
//!
//! # Limitations
//! - One question, one answer.
//! - No name compression when reading.
//! - No EDNS, DNSSEC, TCP, caching, or recursion.
//!
//! # Example
//! ```
//! use dns_responder::Message;
//!
//! let mut buf = [0_u8; 512];
//! let query = [
//!     0xAB, 0xCD, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
//!     0x03, b'w', b'w', b'w', 0x06, b'g', b'o', b'o', b'g', b'l', b'e', 0x03, b'c', b'o', b'm',
//!     0x00, 0x00, 0x01, 0x00, 0x01,
//! ];
//! buf[..query.len()].copy_from_slice(&query);
//! let mut msg = Message::new();
//! msg.parse_query(&buf, query.len()).unwrap();
//! assert_eq!(b"www.google.com", msg.name());
//! assert_eq!("A (IPv4)", msg.type_string());
//! let answer = [
//!     0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x04, 10, 0, 0, 1,
//! ];
//! assert_eq!(48, msg.add_answer(&mut buf, &answer).unwrap());
//! assert_eq!([0x81, 0x80], buf[2..4]);
//! ```
//!
//! # Changelog
//! - v0.1.0 - Initial version
#![forbid(unsafe_code)]

mod dns_class;
mod dns_message;
mod dns_message_header;
mod dns_name;
mod dns_op_code;
mod dns_record;
mod dns_response_code;
mod dns_type;
mod label_cursor;
mod query_name;
mod responder;
mod server;

pub use dns_class::DnsClass;
pub use dns_message::{Fault, Message, ParsePhase};
pub use dns_message_header::DnsMessageHeader;
pub use dns_name::DnsName;
pub use dns_op_code::DnsOpCode;
pub use dns_record::DnsRecord;
pub use dns_response_code::DnsResponseCode;
pub use dns_type::DnsType;
pub use label_cursor::{Label, LabelCursor};
pub use query_name::QueryName;
pub use responder::{CaptivePortal, RecordTable, Responder};
pub use server::{process_datagram, serve_udp, MAX_DATAGRAM_LEN};

use core::fmt::{Display, Formatter};
use fixed_buffer::FixedBuf;

/// Length of the fixed DNS message header.
pub const HEADER_LEN: usize = 12;
/// QTYPE and QCLASS, two bytes each.
pub const QUESTION_TRAILER_LEN: usize = 4;
/// Capacity of [`QueryName`], including the terminating NUL.
pub const NAME_CAPACITY: usize = 64;
/// TTL written into answers when a [`Responder`] does not pick its own.
pub const DEFAULT_TTL: u32 = 300;

fn write_bytes<const N: usize>(out: &mut FixedBuf<N>, bytes: &[u8]) -> Result<(), DnsError> {
    out.write_bytes(bytes)
        .map_err(|_| DnsError::ResponseBufferFull)?;
    Ok(())
}

fn write_u16_be<const N: usize>(out: &mut FixedBuf<N>, value: u16) -> Result<(), DnsError> {
    write_bytes(out, &value.to_be_bytes())
}

fn write_u32_be<const N: usize>(out: &mut FixedBuf<N>, value: u32) -> Result<(), DnsError> {
    write_bytes(out, &value.to_be_bytes())
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DnsError {
    /// `parse_query` was called on a message that is not fresh.
    AlreadyParsed,
    /// The buffer handed to `add_answer` cannot hold the parsed query.
    BufferUnbound,
    /// A label length byte has the `11` pointer prefix.
    CompressedName,
    HeaderTruncated,
    InvalidClass,
    InvalidOpCode,
    /// A label runs past the end of the payload, or the name has no terminator.
    LabelTruncated,
    LengthExceedsBuffer,
    NameTooLong,
    NoQuestion,
    NotARequest,
    NotFound,
    NotParsed,
    QueryHasAnswer,
    QueryHasNameServer,
    ResponseBufferFull,
    TooManyQuestions,
    TrailerTruncated,
}
impl Display for DnsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        let s = match self {
            DnsError::AlreadyParsed => "query already parsed",
            DnsError::BufferUnbound => "buffer is shorter than the parsed query",
            DnsError::CompressedName => "compressed names are not supported",
            DnsError::HeaderTruncated => "message is shorter than the header",
            DnsError::InvalidClass => "unsupported query class",
            DnsError::InvalidOpCode => "not a standard query",
            DnsError::LabelTruncated => "label runs past end of message",
            DnsError::LengthExceedsBuffer => "length exceeds buffer capacity",
            DnsError::NameTooLong => "name too long",
            DnsError::NoQuestion => "query has no question",
            DnsError::NotARequest => "message is a response",
            DnsError::NotFound => "no answer for query",
            DnsError::NotParsed => "query not parsed",
            DnsError::QueryHasAnswer => "query has answer records",
            DnsError::QueryHasNameServer => "query has name server records",
            DnsError::ResponseBufferFull => "response buffer full",
            DnsError::TooManyQuestions => "query has more than one question",
            DnsError::TrailerTruncated => "question is missing type or class",
        };
        write!(f, "{}", s)
    }
}
impl std::error::Error for DnsError {}

#[cfg(test)]
#[test]
fn test_write_helpers() {
    let mut out: FixedBuf<6> = FixedBuf::new();
    write_u16_be(&mut out, 0x0102).unwrap();
    write_u32_be(&mut out, 0x0304_0506).unwrap();
    assert_eq!([1, 2, 3, 4, 5, 6], out.readable());
    assert_eq!(Err(DnsError::ResponseBufferFull), write_bytes(&mut out, &[7]));
}
