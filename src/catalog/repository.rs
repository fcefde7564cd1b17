pub mod memory_catalog_repository;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::users::dto::UserDto;

// CatalogRepository is the single source of truth for books, users and loans. Lookups
// return None for unknown keys, errors are reserved for store failures.
#[async_trait]
pub trait CatalogRepository: Sync + Send {
    async fn get_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>>;

    async fn add_book(&self, isbn: &str, book: &BookDto) -> LibraryResult<()>;

    async fn get_user_by_id(&self, user_id: &str) -> LibraryResult<Option<UserDto>>;

    async fn register_user(&self, user_id: &str, user: &UserDto) -> LibraryResult<()>;

    // records that the book is lent to the user
    async fn borrow_book(&self, isbn: &str, user_id: &str) -> LibraryResult<()>;

    // records that the book is back on the shelf
    async fn return_book(&self, isbn: &str) -> LibraryResult<()>;
}
