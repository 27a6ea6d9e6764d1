pub mod delete;
pub mod get;
pub mod put;

pub use delete::DeleteLocalRecordUseCase;
pub use get::GetLocalRecordsUseCase;
pub use put::{PutLocalRecordUseCase, PutOutcome};
