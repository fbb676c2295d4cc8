use crate::{write_bytes, write_u16_be, write_u32_be, DnsClass, DnsError, DnsName, DnsType};
use core::fmt::{Debug, Formatter};
use fixed_buffer::FixedBuf;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DnsRecord {
    A(DnsName, Ipv4Addr),
    AAAA(DnsName, Ipv6Addr),
    CNAME(DnsName, DnsName),
}
impl DnsRecord {
    /// # Errors
    /// Returns an error when `name` is not a valid DNS name.
    pub fn new_a(name: &str, addr: impl Into<Ipv4Addr>) -> Result<Self, String> {
        Ok(Self::A(DnsName::new(name)?, addr.into()))
    }

    /// # Errors
    /// Returns an error when `name` is not a valid DNS name.
    pub fn new_aaaa(name: &str, addr: impl Into<Ipv6Addr>) -> Result<Self, String> {
        Ok(Self::AAAA(DnsName::new(name)?, addr.into()))
    }

    /// # Errors
    /// Returns an error when `name` or `target` are not both valid DNS names.
    pub fn new_cname(name: &str, target: &str) -> Result<Self, String> {
        Ok(Self::CNAME(DnsName::new(name)?, DnsName::new(target)?))
    }

    #[must_use]
    pub fn name(&self) -> &DnsName {
        match self {
            DnsRecord::A(dns_name, _)
            | DnsRecord::AAAA(dns_name, _)
            | DnsRecord::CNAME(dns_name, _) => dns_name,
        }
    }

    #[must_use]
    pub fn typ(&self) -> DnsType {
        match self {
            DnsRecord::A(_, _) => DnsType::A,
            DnsRecord::AAAA(_, _) => DnsType::AAAA,
            DnsRecord::CNAME(_, _) => DnsType::CNAME,
        }
    }

    /// Writes the whole resource record, ready for
    /// [`Message::add_answer`](crate::Message::add_answer).
    ///
    /// > ```text
    /// > NAME / TYPE / CLASS / TTL / RDLENGTH / RDATA
    /// > ```
    ///
    /// <https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.3>
    ///
    /// # Errors
    /// Returns `Err(DnsError::ResponseBufferFull)` when `out` fills up.
    pub fn write<const N: usize>(&self, out: &mut FixedBuf<N>, ttl: u32) -> Result<(), DnsError> {
        self.name().write(out)?;
        write_u16_be(out, self.typ().num())?;
        write_u16_be(out, DnsClass::Internet.num())?;
        write_u32_be(out, ttl)?;
        match self {
            DnsRecord::A(_, addr) => {
                write_u16_be(out, 4)?;
                write_bytes(out, &addr.octets())
            }
            DnsRecord::AAAA(_, addr) => {
                write_u16_be(out, 16)?;
                write_bytes(out, &addr.octets())
            }
            DnsRecord::CNAME(_, target) => {
                let rdlength = u16::try_from(target.wire_len()).map_err(|_| DnsError::NameTooLong)?;
                write_u16_be(out, rdlength)?;
                target.write(out)
            }
        }
    }
}
impl Debug for DnsRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        match self {
            DnsRecord::A(name, addr) => write!(f, "A({},{})", name, addr),
            DnsRecord::AAAA(name, addr) => write!(f, "AAAA({},{})", name, addr),
            DnsRecord::CNAME(name, target) => write!(f, "CNAME({},{})", name, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(record: &DnsRecord, ttl: u32) -> Vec<u8> {
        let mut out: FixedBuf<512> = FixedBuf::new();
        record.write(&mut out, ttl).unwrap();
        out.readable().to_vec()
    }

    #[test]
    fn constructors() {
        assert_eq!(
            DnsRecord::A(DnsName::new("a.b").unwrap(), Ipv4Addr::new(1, 2, 3, 4)),
            DnsRecord::new_a("A.b", [1, 2, 3, 4]).unwrap()
        );
        assert_eq!(
            DnsRecord::AAAA(
                DnsName::new("a.b").unwrap(),
                Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1)
            ),
            DnsRecord::new_aaaa("a.b", Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1)).unwrap()
        );
        assert_eq!(
            DnsRecord::CNAME(DnsName::new("a.b").unwrap(), DnsName::new("c.d").unwrap()),
            DnsRecord::new_cname("a.b", "c.d").unwrap()
        );
        assert!(DnsRecord::new_a("-a", [1, 2, 3, 4]).is_err());
        assert!(DnsRecord::new_cname("a.b", "c..d").is_err());
        assert_eq!(DnsType::AAAA, DnsRecord::new_aaaa("a", Ipv6Addr::LOCALHOST).unwrap().typ());
    }

    #[test]
    fn debug() {
        assert_eq!(
            "A(a.b,1.2.3.4)",
            format!("{:?}", DnsRecord::new_a("a.b", [1, 2, 3, 4]).unwrap())
        );
        assert_eq!(
            "AAAA(a.b,2001:db8::)",
            format!(
                "{:?}",
                DnsRecord::new_aaaa("a.b", Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0))
                    .unwrap()
            )
        );
        assert_eq!(
            "CNAME(a.b,c.d)",
            format!("{:?}", DnsRecord::new_cname("a.b", "c.d").unwrap())
        );
    }

    #[test]
    fn write_a() {
        let record = DnsRecord::new_a("aaa.example.com", [10, 0, 0, 1]).unwrap();
        assert_eq!(
            vec![
                0x03, 97, 97, 97, 0x07, 101, 120, 97, 109, 112, 108, 101, 0x03, 99, 111, 109, 0x00,
                0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0x2C, 0x00, 0x04, 10, 0, 0, 1,
            ],
            written(&record, 300)
        );
    }

    #[test]
    fn write_aaaa() {
        let record = DnsRecord::new_aaaa("a", Ipv6Addr::LOCALHOST).unwrap();
        let mut expected = vec![1, b'a', 0, 0, 28, 0, 1, 0, 0, 0, 60, 0, 16];
        expected.extend_from_slice(&Ipv6Addr::LOCALHOST.octets());
        assert_eq!(expected, written(&record, 60));
    }

    #[test]
    fn write_cname() {
        let record = DnsRecord::new_cname("a", "bc.d").unwrap();
        assert_eq!(
            vec![1, b'a', 0, 0, 5, 0, 1, 0, 0, 0, 1, 0, 6, 2, b'b', b'c', 1, b'd', 0],
            written(&record, 1)
        );
    }

    #[test]
    fn write_full() {
        let record = DnsRecord::new_a("aaa.example.com", [10, 0, 0, 1]).unwrap();
        let mut out: FixedBuf<30> = FixedBuf::new();
        assert_eq!(Err(DnsError::ResponseBufferFull), record.write(&mut out, 300));
    }
}
