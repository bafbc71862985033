//! Service layer for the expense collection.
//! - `storage`: the file-backed JSON array and the trait it sits behind.
//! - `expenses`: list/append/clear/replace on top of a store, serialized per process.

pub mod errors;
pub mod expenses;
pub mod storage;
