use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::repository::CatalogRepository;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::library::domain::LibraryService;
use crate::reviews::domain::ReviewService;
use crate::users::domain::User;
use crate::users::dto::UserDto;
use crate::utils::validation::{is_non_empty, is_valid_author_name, is_valid_isbn, is_valid_user_id};

pub struct LibraryServiceImpl {
    branch_id: String,
    max_notification_attempts: usize,
    catalog_repository: Box<dyn CatalogRepository>,
    review_service: Box<dyn ReviewService>,
}

impl LibraryServiceImpl {
    pub fn new(config: &Configuration, catalog_repository: Box<dyn CatalogRepository>,
               review_service: Box<dyn ReviewService>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            max_notification_attempts: config.max_notification_attempts.max(1),
            catalog_repository,
            review_service,
        }
    }

    fn check_isbn(isbn: &str) -> LibraryResult<()> {
        if is_valid_isbn(isbn) {
            Ok(())
        } else {
            Err(LibraryError::invalid_argument("Invalid ISBN."))
        }
    }

    fn check_user_id(user_id: &str) -> LibraryResult<()> {
        if is_valid_user_id(user_id) {
            Ok(())
        } else {
            Err(LibraryError::invalid_argument("Invalid user Id."))
        }
    }

    // Delivers the same message up to max_notification_attempts times. Only delivery
    // failures are retried, and the error of the last attempt goes back to the caller.
    async fn deliver(&self, user: &UserDto, message: &str) -> LibraryResult<()> {
        for attempt in 1..self.max_notification_attempts {
            match user.send_notification(message).await {
                Ok(()) => {
                    debug!(user_id = user.user_id.as_str(), attempt, "reviews delivered");
                    return Ok(());
                }
                Err(err @ LibraryError::NotificationFailed { .. }) => {
                    warn!(user_id = user.user_id.as_str(), attempt, error = %err, "notification failed, retrying");
                }
                Err(err) => return Err(err),
            }
        }
        let attempt = self.max_notification_attempts;
        match user.send_notification(message).await {
            Ok(()) => {
                debug!(user_id = user.user_id.as_str(), attempt, "reviews delivered");
                Ok(())
            }
            Err(err) => {
                warn!(user_id = user.user_id.as_str(), attempt, error = %err, "notification failed, giving up");
                Err(err)
            }
        }
    }
}

#[async_trait]
impl LibraryService for LibraryServiceImpl {
    async fn add_book(&self, book: Option<&BookDto>) -> LibraryResult<()> {
        let book = book.ok_or_else(|| LibraryError::invalid_argument("Invalid book."))?;
        Self::check_isbn(book.isbn.as_str())?;
        if !is_non_empty(book.title.as_str()) {
            return Err(LibraryError::invalid_argument("Invalid title."));
        }
        if !is_valid_author_name(book.author.as_str()) {
            return Err(LibraryError::invalid_argument("Invalid author."));
        }
        if book.is_borrowed() {
            return Err(LibraryError::invalid_argument("Book with invalid borrowed state."));
        }
        if self.catalog_repository.get_book_by_isbn(book.isbn.as_str()).await?.is_some() {
            return Err(LibraryError::invalid_argument("Book already exists."));
        }
        self.catalog_repository.add_book(book.isbn.as_str(), book).await?;
        info!(branch_id = self.branch_id.as_str(), isbn = book.isbn.as_str(), "book added");
        Ok(())
    }

    async fn register_user(&self, user: Option<&UserDto>) -> LibraryResult<()> {
        let user = user.ok_or_else(|| LibraryError::invalid_argument("Invalid user."))?;
        Self::check_user_id(user.user_id.as_str())?;
        if !is_non_empty(user.name.as_str()) {
            return Err(LibraryError::invalid_argument("Invalid user name."));
        }
        if !user.has_notification_service() {
            return Err(LibraryError::invalid_argument("Invalid notification service."));
        }
        if self.catalog_repository.get_user_by_id(user.user_id.as_str()).await?.is_some() {
            return Err(LibraryError::invalid_argument("User already exists."));
        }
        self.catalog_repository.register_user(user.user_id.as_str(), user).await?;
        info!(branch_id = self.branch_id.as_str(), user_id = user.user_id.as_str(), "user registered");
        Ok(())
    }

    async fn borrow_book(&self, isbn: &str, user_id: &str) -> LibraryResult<BookDto> {
        Self::check_isbn(isbn)?;
        Self::check_user_id(user_id)?;
        // unknown keys are reported like malformed ones here, unlike the lookup operations
        let mut book = self.catalog_repository.get_book_by_isbn(isbn).await?
            .ok_or_else(|| LibraryError::invalid_argument("Invalid ISBN."))?;
        self.catalog_repository.get_user_by_id(user_id).await?
            .ok_or_else(|| LibraryError::invalid_argument("Invalid user Id."))?;
        if book.is_borrowed() {
            return Err(LibraryError::book_already_borrowed("Book is already borrowed!"));
        }
        book.borrow();
        self.catalog_repository.borrow_book(isbn, user_id).await?;
        info!(branch_id = self.branch_id.as_str(), isbn, user_id, "book borrowed");
        Ok(book)
    }

    async fn return_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        Self::check_isbn(isbn)?;
        let mut book = self.catalog_repository.get_book_by_isbn(isbn).await?
            .ok_or_else(|| LibraryError::invalid_argument("Invalid ISBN."))?;
        if !book.is_borrowed() {
            return Err(LibraryError::book_not_borrowed("Book wasn't borrowed!"));
        }
        book.return_book();
        self.catalog_repository.return_book(isbn).await?;
        info!(branch_id = self.branch_id.as_str(), isbn, "book returned");
        Ok(book)
    }

    async fn notify_user_with_book_reviews(&self, isbn: &str, user_id: &str) -> LibraryResult<()> {
        Self::check_isbn(isbn)?;
        Self::check_user_id(user_id)?;
        let book = self.catalog_repository.get_book_by_isbn(isbn).await?
            .ok_or_else(|| LibraryError::book_not_found("Book not found!"))?;
        let user = self.catalog_repository.get_user_by_id(user_id).await?
            .ok_or_else(|| LibraryError::user_not_registered("User not found!"))?;
        let reviews = self.review_service.get_reviews_for_book(isbn).await?;
        if reviews.is_empty() {
            return Err(LibraryError::no_reviews_found("No reviews found!"));
        }
        let message = format!("Reviews for '{}':\n{}", book.title, reviews.join("\n"));
        self.deliver(&user, message.as_str()).await
    }

    async fn get_book_by_isbn(&self, isbn: &str, user_id: &str) -> LibraryResult<BookDto> {
        Self::check_isbn(isbn)?;
        Self::check_user_id(user_id)?;
        let book = self.catalog_repository.get_book_by_isbn(isbn).await?
            .ok_or_else(|| LibraryError::book_not_found("Book not found!"))?;
        if book.is_borrowed() {
            return Err(LibraryError::book_already_borrowed("Book was already borrowed!"));
        }
        if let Err(err) = self.notify_user_with_book_reviews(isbn, user_id).await {
            warn!(isbn, user_id, error = %err, "could not notify user with book reviews");
        }
        Ok(book)
    }
}
