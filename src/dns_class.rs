/// > CLASS fields appear in resource records.
/// > - `IN` 1 the Internet
///
/// > QCLASS fields appear in the question section of a query.
/// > - `*` 255 any class
///
/// <https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.4>
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DnsClass {
    Internet,
    Any,
    Unknown(u16),
}
impl DnsClass {
    #[must_use]
    pub fn new(value: u16) -> Self {
        match value {
            1 => DnsClass::Internet,
            255 => DnsClass::Any,
            other => DnsClass::Unknown(other),
        }
    }

    #[must_use]
    pub fn num(&self) -> u16 {
        match self {
            DnsClass::Internet => 1,
            DnsClass::Any => 255,
            DnsClass::Unknown(other) => *other,
        }
    }
}

#[cfg(test)]
#[test]
fn test_dns_class() {
    assert_eq!(DnsClass::Internet, DnsClass::new(1));
    assert_eq!(DnsClass::Any, DnsClass::new(255));
    assert_eq!(DnsClass::Unknown(3), DnsClass::new(3));
    assert_eq!(1, DnsClass::Internet.num());
    assert_eq!(3, DnsClass::Unknown(3).num());
}
