pub mod json_file;
pub mod summary;

pub use json_file::{ExpenseRecord, JsonFileStorage, StorageError};
pub use summary::Summary;
