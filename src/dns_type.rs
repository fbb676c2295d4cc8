/// > QTYPE fields appear in the question part of a query.  QTYPES are a superset of TYPEs, hence
/// > all TYPEs are valid QTYPEs.
///
/// <https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.3>
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DnsType {
    /// IPv4 address
    A,
    /// IPv6 address, <https://datatracker.ietf.org/doc/html/rfc3596#section-2>
    AAAA,
    /// The canonical name for an alias
    CNAME,
    /// Mail exchange
    MX,
    /// Authoritative name server
    NS,
    /// Domain name pointer
    PTR,
    /// Marks the start of a zone of authority
    SOA,
    /// Text string
    TXT,
    /// `*`, a request for all records
    ANY,
    Unknown(u16),
}
impl DnsType {
    #[must_use]
    pub fn new(value: u16) -> Self {
        match value {
            1 => DnsType::A,
            2 => DnsType::NS,
            5 => DnsType::CNAME,
            6 => DnsType::SOA,
            12 => DnsType::PTR,
            15 => DnsType::MX,
            16 => DnsType::TXT,
            28 => DnsType::AAAA,
            255 => DnsType::ANY,
            other => DnsType::Unknown(other),
        }
    }

    #[must_use]
    pub fn num(&self) -> u16 {
        match self {
            DnsType::A => 1,
            DnsType::NS => 2,
            DnsType::CNAME => 5,
            DnsType::SOA => 6,
            DnsType::PTR => 12,
            DnsType::MX => 15,
            DnsType::TXT => 16,
            DnsType::AAAA => 28,
            DnsType::ANY => 255,
            DnsType::Unknown(other) => *other,
        }
    }

    /// Short tag for logs.  Only the address types get their own tag.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            DnsType::A => "A (IPv4)",
            DnsType::AAAA => "AAAA (IPv6)",
            _ => "OTHER",
        }
    }
}

#[cfg(test)]
#[test]
fn test_dns_type() {
    for n in 0..=u16::MAX {
        assert_eq!(n, DnsType::new(n).num());
    }
    assert_eq!(DnsType::AAAA, DnsType::new(28));
    assert_eq!(DnsType::Unknown(99), DnsType::new(99));
    assert_eq!("A (IPv4)", DnsType::new(1).describe());
    assert_eq!("AAAA (IPv6)", DnsType::new(28).describe());
    assert_eq!("OTHER", DnsType::CNAME.describe());
    assert_eq!("OTHER", DnsType::new(0).describe());
}
