/// Uploaded logo persistence.
pub mod logo_store;
/// Match document persistence.
pub mod match_store;
/// Errors shared by the storage backends.
pub mod storage;
