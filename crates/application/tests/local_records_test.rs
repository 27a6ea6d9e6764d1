mod helpers;

use dns_test_server_application::use_cases::{
    DeleteLocalRecordUseCase, GetLocalRecordsUseCase, PutLocalRecordUseCase, PutOutcome,
};
use dns_test_server_domain::{DomainError, RecordType};
use helpers::MockRecordStore;
use std::sync::Arc;

fn use_cases(
    store: Arc<MockRecordStore>,
) -> (
    PutLocalRecordUseCase,
    GetLocalRecordsUseCase,
    DeleteLocalRecordUseCase,
) {
    (
        PutLocalRecordUseCase::new(store.clone()),
        GetLocalRecordsUseCase::new(store.clone()),
        DeleteLocalRecordUseCase::new(store),
    )
}

// ── put ────────────────────────────────────────────────────────────────────

#[test]
fn test_put_new_key_reports_created() {
    let store = Arc::new(MockRecordStore::new());
    let (put, _, _) = use_cases(store);

    let (record, outcome) = put
        .execute("a", "www.example.com", Some("127.0.0.1"), None)
        .unwrap();

    assert_eq!(outcome, PutOutcome::Created);
    assert_eq!(&*record.name, "www.example.com.");
    assert_eq!(record.record_type(), RecordType::A);
}

#[test]
fn test_put_existing_key_reports_appended() {
    let store = Arc::new(MockRecordStore::new());
    let (put, get, _) = use_cases(store);

    put.execute("a", "www.example.com", Some("127.0.0.1"), None)
        .unwrap();
    let (_, outcome) = put
        .execute("A", "WWW.example.com.", Some("127.0.0.2"), None)
        .unwrap();

    assert_eq!(outcome, PutOutcome::Appended);
    let records = get.execute("a", "www.example.com").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].data.to_string(), "127.0.0.2");
}

#[test]
fn test_put_applies_ttl() {
    let store = Arc::new(MockRecordStore::new());
    let (put, _, _) = use_cases(store);

    let (record, _) = put
        .execute("cname", "a.example.com", Some("b.example.com"), Some(30))
        .unwrap();

    assert_eq!(record.ttl, 30);
    assert_eq!(record.alias_target(), Some("b.example.com."));
}

#[test]
fn test_put_missing_value_is_rejected_before_store() {
    let store = Arc::new(MockRecordStore::new());
    let (put, _, _) = use_cases(store.clone());

    for value in [None, Some(""), Some("   ")] {
        let err = put.execute("a", "www.example.com", value, None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRecordValue(_)));
        assert!(err.is_client_input());
    }
    assert!(store.calls().is_empty());
}

#[test]
fn test_put_invalid_address_is_client_error() {
    let store = Arc::new(MockRecordStore::new());
    let (put, _, _) = use_cases(store.clone());

    let err = put
        .execute("a", "www.example.com", Some("999.1.1.1"), None)
        .unwrap_err();

    assert!(matches!(err, DomainError::InvalidIpAddress(_)));
    assert!(store.calls().is_empty());
}

#[test]
fn test_put_unsupported_type_is_client_error() {
    let store = Arc::new(MockRecordStore::new());
    let (put, _, _) = use_cases(store);

    let err = put
        .execute("mx", "example.com", Some("mail.example.com"), None)
        .unwrap_err();

    assert!(matches!(err, DomainError::UnsupportedRecordType(_)));
}

// ── get ────────────────────────────────────────────────────────────────────

#[test]
fn test_get_missing_key_is_not_found() {
    let store = Arc::new(MockRecordStore::new());
    let (_, get, _) = use_cases(store);

    let err = get.execute("a", "nothing.example.com").unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
    assert!(!err.is_client_input());
}

#[test]
fn test_get_is_type_specific() {
    let store = Arc::new(MockRecordStore::new());
    let (put, get, _) = use_cases(store);

    put.execute("cname", "a.example.com", Some("b.example.com"), None)
        .unwrap();

    assert!(get.execute("cname", "a.example.com").is_ok());
    assert!(get.execute("a", "a.example.com").is_err());
}

// ── delete ─────────────────────────────────────────────────────────────────

#[test]
fn test_delete_reports_whether_anything_was_removed() {
    let store = Arc::new(MockRecordStore::new());
    let (put, get, delete) = use_cases(store);

    put.execute("a", "www.example.com", Some("127.0.0.1"), None)
        .unwrap();
    put.execute("a", "www.example.com", Some("127.0.0.2"), None)
        .unwrap();

    assert!(delete.execute("a", "www.example.com").unwrap());
    assert!(get.execute("a", "www.example.com").is_err());
    assert!(!delete.execute("a", "www.example.com").unwrap());
}

#[test]
fn test_delete_unknown_type_is_client_error() {
    let store = Arc::new(MockRecordStore::new());
    let (_, _, delete) = use_cases(store.clone());

    assert!(delete.execute("txt", "example.com").is_err());
    assert!(store.calls().is_empty());
}
