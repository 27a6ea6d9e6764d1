use super::AliasChain;
use crate::dns::forwarding::message_builder::parse_name;
use hickory_proto::op::Message;
use hickory_proto::rr::RecordType as HickoryRecordType;
use tracing::warn;

/// Copy of `request` with every non-CNAME question renamed to its alias
/// target. Id, flags, EDNS and the additional section are kept as they are.
pub fn forwarded_query(request: &Message, chain: &AliasChain) -> Message {
    let mut forwarded = request.clone();
    let mut questions = forwarded.take_queries();

    for question in questions
        .iter_mut()
        .filter(|q| q.query_type() != HickoryRecordType::CNAME)
    {
        let Some(target) = chain.target_for(&question.name().to_ascii()) else {
            continue;
        };
        match parse_name(target) {
            Ok(name) => {
                question.set_name(name);
            }
            Err(e) => warn!(error = %e, target, "Keeping original question name"),
        }
    }

    forwarded.add_queries(questions);
    forwarded
}
