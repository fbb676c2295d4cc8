/// > `RCODE` Response code - this 4 bit field is set as part of responses.
/// > - `0` No error condition
/// > - `1` Format error
/// > - `2` Server failure
/// > - `3` Name Error
/// > - `4` Not Implemented
/// > - `5` Refused
/// > - `6-15` Reserved for future use.
///
/// <https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1>
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DnsResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Reserved(u8),
}
impl DnsResponseCode {
    #[must_use]
    pub fn new(value: u8) -> Self {
        match value {
            0 => DnsResponseCode::NoError,
            1 => DnsResponseCode::FormatError,
            2 => DnsResponseCode::ServerFailure,
            3 => DnsResponseCode::NameError,
            4 => DnsResponseCode::NotImplemented,
            5 => DnsResponseCode::Refused,
            other => DnsResponseCode::Reserved(other),
        }
    }
}

#[cfg(test)]
#[test]
fn test_new() {
    assert_eq!(DnsResponseCode::NoError, DnsResponseCode::new(0));
    assert_eq!(DnsResponseCode::NameError, DnsResponseCode::new(3));
    assert_eq!(DnsResponseCode::Refused, DnsResponseCode::new(5));
    assert_eq!(DnsResponseCode::Reserved(11), DnsResponseCode::new(11));
}
