pub mod local_record;

pub use local_record::PutRecordParams;
