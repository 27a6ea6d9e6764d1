use super::AliasChain;
use crate::dns::forwarding::{MessageBuilder, RecordTypeMapper};
use dns_test_server_application::ports::RecordStore;
use dns_test_server_domain::fqdn;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};
use tracing::warn;

/// Answer `request` entirely from the store, or not at all.
///
/// Returns `None` as soon as one question has no stored records, leaving the
/// whole query to the forwarder.
pub fn try_answer(
    store: &dyn RecordStore,
    request: &Message,
    chain: &AliasChain,
) -> Option<Message> {
    let mut records = Vec::new();

    for question in request.queries() {
        if question.query_class() != DNSClass::IN {
            return None;
        }
        let record_type = RecordTypeMapper::from_hickory(question.query_type())?;

        let name = fqdn(&question.name().to_ascii());
        let lookup_name = if question.query_type() == HickoryRecordType::CNAME {
            name.as_str()
        } else {
            chain.target_for(&name).unwrap_or(name.as_str())
        };

        let found = store.find(lookup_name, record_type);
        if found.is_empty() {
            return None;
        }
        records.extend(found);
    }

    let answers = chain
        .answers()
        .and_then(|mut answers| {
            answers.extend(MessageBuilder::to_records(&records)?);
            Ok(answers)
        })
        .map_err(|e| warn!(error = %e, "Stored records could not be converted"))
        .ok()?;

    let mut response = MessageBuilder::response_to(request, ResponseCode::NoError);
    response.add_answers(answers);
    Some(response)
}
