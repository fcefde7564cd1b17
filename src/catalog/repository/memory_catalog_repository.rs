use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use crate::books::dto::BookDto;
use crate::catalog::repository::CatalogRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::users::dto::UserDto;

#[derive(Debug, Default)]
struct CatalogState {
    books: HashMap<String, BookDto>,
    users: HashMap<String, UserDto>,
    // isbn -> user_id of the current borrower
    loans: HashMap<String, String>,
}

// MemoryCatalogRepository keeps the catalog in process. Book, user and loan updates happen
// under one lock so a borrow or a return is applied as a whole.
#[derive(Debug, Default)]
pub struct MemoryCatalogRepository {
    state: RwLock<CatalogState>,
}

impl MemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn borrower_of(&self, isbn: &str) -> Option<String> {
        self.state.read().await.loans.get(isbn).cloned()
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogRepository {
    async fn get_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        Ok(self.state.read().await.books.get(isbn).cloned())
    }

    async fn add_book(&self, isbn: &str, book: &BookDto) -> LibraryResult<()> {
        let mut state = self.state.write().await;
        if state.books.contains_key(isbn) {
            return Err(LibraryError::duplicate_key(format!("book {} already exists", isbn).as_str()));
        }
        state.books.insert(isbn.to_string(), book.clone());
        debug!(isbn, "book stored");
        Ok(())
    }

    async fn get_user_by_id(&self, user_id: &str) -> LibraryResult<Option<UserDto>> {
        Ok(self.state.read().await.users.get(user_id).cloned())
    }

    async fn register_user(&self, user_id: &str, user: &UserDto) -> LibraryResult<()> {
        let mut state = self.state.write().await;
        if state.users.contains_key(user_id) {
            return Err(LibraryError::duplicate_key(format!("user {} already exists", user_id).as_str()));
        }
        state.users.insert(user_id.to_string(), user.clone());
        debug!(user_id, "user stored");
        Ok(())
    }

    async fn borrow_book(&self, isbn: &str, user_id: &str) -> LibraryResult<()> {
        let mut state = self.state.write().await;
        if !state.users.contains_key(user_id) {
            return Err(LibraryError::database(
                format!("user {} not found", user_id).as_str(), Some("404".to_string()), false));
        }
        let book = state.books.get_mut(isbn).ok_or_else(|| LibraryError::database(
            format!("book {} not found", isbn).as_str(), Some("404".to_string()), false))?;
        book.borrow();
        book.version += 1;
        state.loans.insert(isbn.to_string(), user_id.to_string());
        debug!(isbn, user_id, "loan stored");
        Ok(())
    }

    async fn return_book(&self, isbn: &str) -> LibraryResult<()> {
        let mut state = self.state.write().await;
        let book = state.books.get_mut(isbn).ok_or_else(|| LibraryError::database(
            format!("book {} not found", isbn).as_str(), Some("404".to_string()), false))?;
        book.return_book();
        book.version += 1;
        state.loans.remove(isbn);
        debug!(isbn, "loan closed");
        Ok(())
    }
}
