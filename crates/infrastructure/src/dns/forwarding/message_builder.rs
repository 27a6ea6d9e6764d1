//! DNS message construction
//!
//! Responses produced here always echo the request id, opcode, questions and
//! recursion-desired flag, and always advertise recursion as available.

use dns_test_server_domain::{DomainError, LocalRecord, RecordData};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, CNAME};
use hickory_proto::rr::{Name, RData, Record};
use std::net::IpAddr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Response header and question section for `request`, with an empty
    /// answer section.
    pub fn response_to(request: &Message, response_code: ResponseCode) -> Message {
        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true)
            .set_response_code(response_code);
        response.add_queries(request.queries().iter().cloned());
        response
    }

    pub fn to_record(record: &LocalRecord) -> Result<Record, DomainError> {
        let name = parse_name(&record.name)?;
        let rdata = match &record.data {
            RecordData::Address(IpAddr::V4(ip)) => RData::A(A(*ip)),
            RecordData::Address(IpAddr::V6(ip)) => RData::AAAA(AAAA(*ip)),
            RecordData::Alias(target) => RData::CNAME(CNAME(parse_name(target)?)),
        };
        Ok(Record::from_rdata(name, record.ttl, rdata))
    }

    pub fn to_records(records: &[LocalRecord]) -> Result<Vec<Record>, DomainError> {
        records.iter().map(Self::to_record).collect()
    }

    pub fn serialize(message: &Message) -> Result<Vec<u8>, DomainError> {
        message.to_vec().map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
        })
    }
}

pub(crate) fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_ascii(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e)))
}
