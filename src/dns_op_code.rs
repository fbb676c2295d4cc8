/// > `OPCODE`  A four bit field that specifies kind of query in this message.
/// > - `0` a standard query (`QUERY`)
/// > - `1` an inverse query (`IQUERY`)
/// > - `2` a server status request (`STATUS`)
/// > - `3-15` reserved for future use
///
/// <https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1>
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DnsOpCode {
    Query,
    InverseQuery,
    Status,
    Reserved(u8),
}
impl DnsOpCode {
    #[must_use]
    pub fn new(value: u8) -> Self {
        match value {
            0 => DnsOpCode::Query,
            1 => DnsOpCode::InverseQuery,
            2 => DnsOpCode::Status,
            other => DnsOpCode::Reserved(other),
        }
    }
}

#[cfg(test)]
#[test]
fn test_new() {
    assert_eq!(DnsOpCode::Query, DnsOpCode::new(0));
    assert_eq!(DnsOpCode::InverseQuery, DnsOpCode::new(1));
    assert_eq!(DnsOpCode::Status, DnsOpCode::new(2));
    assert_eq!(DnsOpCode::Reserved(9), DnsOpCode::new(9));
}
