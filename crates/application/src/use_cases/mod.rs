pub mod local_records;

pub use local_records::{
    DeleteLocalRecordUseCase, GetLocalRecordsUseCase, PutLocalRecordUseCase, PutOutcome,
};
