use dns_test_server_application::ports::RecordStore;
use dns_test_server_application::use_cases::{
    DeleteLocalRecordUseCase, GetLocalRecordsUseCase, PutLocalRecordUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub put_record: Arc<PutLocalRecordUseCase>,
    pub get_records: Arc<GetLocalRecordsUseCase>,
    pub delete_record: Arc<DeleteLocalRecordUseCase>,
}

impl AppState {
    /// State whose use cases all share `store`.
    pub fn for_store(store: Arc<dyn RecordStore>) -> Self {
        Self {
            put_record: Arc::new(PutLocalRecordUseCase::new(Arc::clone(&store))),
            get_records: Arc::new(GetLocalRecordsUseCase::new(Arc::clone(&store))),
            delete_record: Arc::new(DeleteLocalRecordUseCase::new(store)),
        }
    }
}
