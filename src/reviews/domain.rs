use async_trait::async_trait;
use crate::core::library::LibraryResult;

// ReviewService is the source of reader reviews for a book. It is consulted on every call,
// nothing is cached on the library side.
#[async_trait]
pub trait ReviewService: Sync + Send {
    // returns reviews in the order the source keeps them, or
    // LibraryError::ReviewServiceUnavailable when the source cannot be reached
    async fn get_reviews_for_book(&self, isbn: &str) -> LibraryResult<Vec<String>>;
}
