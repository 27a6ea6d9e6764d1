use dns_test_server_application::ports::RecordStore;
use dns_test_server_application::use_cases::{
    DeleteLocalRecordUseCase, GetLocalRecordsUseCase, PutLocalRecordUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub put_record: Arc<PutLocalRecordUseCase>,
    pub get_records: Arc<GetLocalRecordsUseCase>,
    pub delete_record: Arc<DeleteLocalRecordUseCase>,
}

impl UseCases {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            put_record: Arc::new(PutLocalRecordUseCase::new(store.clone())),
            get_records: Arc::new(GetLocalRecordsUseCase::new(store.clone())),
            delete_record: Arc::new(DeleteLocalRecordUseCase::new(store)),
        }
    }
}
