use crate::{DnsName, DnsRecord, DnsType, Message, DEFAULT_TTL};
use log::debug;
use multimap::MultiMap;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Decides what to answer to a parsed query.
pub trait Responder {
    /// Returns `None` to drop the query without a response.
    fn answer(&self, query: &Message) -> Option<DnsRecord>;

    /// TTL for answers, in seconds.
    fn ttl(&self) -> u32 {
        DEFAULT_TTL
    }
}

fn query_dns_name(query: &Message) -> Option<DnsName> {
    match query.name_str().map(DnsName::new) {
        Some(Ok(name)) => Some(name),
        _ => {
            debug!("cannot answer for name {}", query.query_name());
            None
        }
    }
}

/// Answers from a fixed set of records.
/// A query gets an answer when a record has its name and type.
/// Names match without regard to case.
#[derive(Clone, Debug)]
pub struct RecordTable {
    records: MultiMap<DnsName, DnsRecord>,
    ttl: u32,
}
impl RecordTable {
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = DnsRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.name().clone(), record))
                .collect(),
            ttl: DEFAULT_TTL,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
impl Responder for RecordTable {
    fn answer(&self, query: &Message) -> Option<DnsRecord> {
        let name = query_dns_name(query)?;
        let typ = query.typ();
        self.records
            .get_vec(&name)?
            .iter()
            .find(|record| record.typ() == typ)
            .cloned()
    }

    fn ttl(&self) -> u32 {
        self.ttl
    }
}

/// Answers every address lookup with the device's own address,
/// so clients that probe for internet access land on the portal.
///
/// AAAA queries get an answer only when an IPv6 address is set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CaptivePortal {
    ipv4: Ipv4Addr,
    ipv6: Option<Ipv6Addr>,
    ttl: u32,
}
impl CaptivePortal {
    /// TTL for portal answers, in seconds.
    pub const DEFAULT_TTL: u32 = 60;

    #[must_use]
    pub fn new(ipv4: impl Into<Ipv4Addr>) -> Self {
        Self {
            ipv4: ipv4.into(),
            ipv6: None,
            ttl: Self::DEFAULT_TTL,
        }
    }

    #[must_use]
    pub fn with_ipv6(mut self, ipv6: impl Into<Ipv6Addr>) -> Self {
        self.ipv6 = Some(ipv6.into());
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }
}
impl Responder for CaptivePortal {
    fn answer(&self, query: &Message) -> Option<DnsRecord> {
        match query.typ() {
            DnsType::A => Some(DnsRecord::A(query_dns_name(query)?, self.ipv4)),
            DnsType::AAAA => Some(DnsRecord::AAAA(query_dns_name(query)?, self.ipv6?)),
            _ => None,
        }
    }

    fn ttl(&self) -> u32 {
        self.ttl
    }
}
