pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::users::dto::UserDto;

/// Facade over the catalog store, the review source and the users' notifiers.
///
/// Argument problems are reported as `LibraryError::Validation`, state conflicts with
/// dedicated domain variants, and collaborator failures are passed through unchanged.
#[async_trait]
pub trait LibraryService: Sync + Send {
    async fn add_book(&self, book: Option<&BookDto>) -> LibraryResult<()>;

    async fn register_user(&self, user: Option<&UserDto>) -> LibraryResult<()>;

    async fn borrow_book(&self, isbn: &str, user_id: &str) -> LibraryResult<BookDto>;

    async fn return_book(&self, isbn: &str) -> LibraryResult<BookDto>;

    /// Sends every review of the book to the user as one message, retrying failed deliveries.
    async fn notify_user_with_book_reviews(&self, isbn: &str, user_id: &str) -> LibraryResult<()>;

    /// Looks up an available book and notifies the user with its reviews on a best-effort basis.
    async fn get_book_by_isbn(&self, isbn: &str, user_id: &str) -> LibraryResult<BookDto>;
}
