use crate::dns::forwarding::MessageBuilder;
use dns_test_server_application::ports::RecordStore;
use dns_test_server_domain::{fqdn, DomainError, LocalRecord, RecordType};
use hickory_proto::op::Query;
use hickory_proto::rr::{DNSClass, Record, RecordType as HickoryRecordType};
use std::collections::{HashMap, HashSet};

/// CNAME records discovered while resolving the questions of one query.
///
/// Rebuilt for every query and never stored. Records keep discovery order
/// across all questions and are not de-duplicated between questions.
#[derive(Debug, Default, Clone)]
pub struct AliasChain {
    records: Vec<LocalRecord>,
    targets: HashMap<String, String>,
}

impl AliasChain {
    pub fn resolve(store: &dyn RecordStore, questions: &[Query]) -> Self {
        let mut chain = Self::default();

        for question in questions {
            if question.query_class() != DNSClass::IN
                || question.query_type() == HickoryRecordType::CNAME
            {
                continue;
            }

            let name = fqdn(&question.name().to_ascii());
            let mut current = name.clone();
            let mut visited = HashSet::from([current.clone()]);

            loop {
                let Some(record) = store.find(&current, RecordType::CNAME).into_iter().next()
                else {
                    break;
                };
                let Some(target) = record.alias_target().map(str::to_string) else {
                    break;
                };

                chain.records.push(record);
                current = target;
                if !visited.insert(current.clone()) {
                    break;
                }
            }

            chain.targets.insert(name, current);
        }

        chain
    }

    pub fn records(&self) -> &[LocalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Final name reached from `name`, if `name` took part in the walk.
    pub fn target_for(&self, name: &str) -> Option<&str> {
        self.targets.get(&fqdn(name)).map(String::as_str)
    }

    pub fn answers(&self) -> Result<Vec<Record>, DomainError> {
        MessageBuilder::to_records(&self.records)
    }
}
