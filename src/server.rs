use crate::dns_message_header::ADDITIONAL_COUNT_OFFSET;
use crate::{DnsClass, DnsError, DnsMessageHeader, DnsOpCode, Message, Responder};
use fixed_buffer::FixedBuf;
use log::{debug, info, warn};
use permit::Permit;
use prob_rate_limiter::ProbRateLimiter;
use std::io::ErrorKind;
use std::net::UdpSocket;
use std::time::{Duration, Instant};

/// > Messages carried by UDP are restricted to 512 bytes (not counting the IP
/// > or UDP headers).  Longer messages are truncated and the TC bit is set in
/// > the header.
///
/// <https://datatracker.ietf.org/doc/html/rfc1035#section-4.2.1>
pub const MAX_DATAGRAM_LEN: usize = 512;

fn check_header(bytes: &[u8]) -> Result<(), DnsError> {
    let header = DnsMessageHeader::parse(bytes)?;
    if header.is_response {
        return Err(DnsError::NotARequest);
    }
    if header.op_code != DnsOpCode::Query {
        return Err(DnsError::InvalidOpCode);
    }
    match header.question_count {
        0 => return Err(DnsError::NoQuestion),
        1 => {}
        _ => return Err(DnsError::TooManyQuestions),
    }
    if header.answer_count != 0 {
        return Err(DnsError::QueryHasAnswer);
    }
    if header.name_server_count != 0 {
        return Err(DnsError::QueryHasNameServer);
    }
    Ok(())
}

/// Answers the query in `buffer[..len]`, writing the response into `buffer`.
/// Returns the response length.
///
/// # Errors
/// Returns `Err` when the datagram is not a single-question query,
/// is malformed, or `responder` has no answer for it.
/// The caller should drop the datagram.
pub fn process_datagram<R: Responder + ?Sized>(
    responder: &R,
    buffer: &mut [u8],
    len: usize,
) -> Result<usize, DnsError> {
    check_header(buffer.get(..len).ok_or(DnsError::LengthExceedsBuffer)?)?;
    let mut query = Message::new();
    query.parse_query(buffer, len)?;
    if !matches!(query.class(), DnsClass::Internet | DnsClass::Any) {
        return Err(DnsError::InvalidClass);
    }
    let record = responder.answer(&query).ok_or(DnsError::NotFound)?;
    let mut answer: FixedBuf<MAX_DATAGRAM_LEN> = FixedBuf::new();
    record.write(&mut answer, responder.ttl())?;
    let response_len = query.add_answer(buffer, answer.readable())?;
    // The answer overwrites any additional records, such as an EDNS OPT record.
    buffer[ADDITIONAL_COUNT_OFFSET..ADDITIONAL_COUNT_OFFSET + 2].copy_from_slice(&[0, 0]);
    debug!(
        "answering {} {} with {:?}",
        query.type_string(),
        query.query_name(),
        record
    );
    Ok(response_len)
}

/// Answers queries on `sock` until `permit` is revoked.
///
/// Datagrams that are malformed or have no answer get no response.
/// When responses exceed the byte rate allowed by `response_bytes_rate_limiter`,
/// some are dropped.
///
/// # Errors
/// Returns `Err` when socket operations fail.
pub fn serve_udp<R: Responder + ?Sized>(
    permit: &Permit,
    sock: &UdpSocket,
    mut response_bytes_rate_limiter: ProbRateLimiter,
    responder: &R,
) -> Result<(), String> {
    sock.set_read_timeout(Some(Duration::from_millis(500)))
        .map_err(|e| format!("error setting socket read timeout: {}", e))?;
    let local_addr = sock
        .local_addr()
        .map_err(|e| format!("error getting socket local address: {}", e))?;
    info!("serving DNS on {}", local_addr);
    let mut buf = [0_u8; MAX_DATAGRAM_LEN];
    while !permit.is_revoked() {
        let (len, addr) = match sock.recv_from(&mut buf) {
            Ok(received) => received,
            Err(e) if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::TimedOut => {
                continue
            }
            Err(e) => return Err(format!("error reading socket {:?}: {}", local_addr, e)),
        };
        let response_len = match process_datagram(responder, &mut buf, len) {
            Ok(response_len) => response_len,
            Err(e) => {
                debug!("dropping {} byte datagram from {}: {}", len, addr, e);
                continue;
            }
        };
        let cost = u32::try_from(response_len).unwrap_or(u32::MAX);
        if !response_bytes_rate_limiter.check(cost, Instant::now()) {
            debug!("rate limited response to {}", addr);
            continue;
        }
        match sock.send_to(&buf[..response_len], addr) {
            Ok(sent_len) if sent_len == response_len => {}
            Ok(sent_len) => warn!(
                "sent only {} bytes of {} byte response to {}",
                sent_len, response_len, addr
            ),
            Err(e) => warn!("error sending response to {}: {}", addr, e),
        }
    }
    info!("stopped serving DNS on {}", local_addr);
    Ok(())
}
