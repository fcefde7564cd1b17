// Collaborator fakes shared by the service tests. Every fake is a cheap handle over shared
// state so a test can keep one copy and hand another to the service.
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::books::dto::BookDto;
use crate::catalog::repository::CatalogRepository;
use crate::catalog::repository::memory_catalog_repository::MemoryCatalogRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::NotificationService;
use crate::reviews::domain::ReviewService;
use crate::reviews::static_reviews::StaticReviewService;
use crate::users::dto::UserDto;

#[derive(Default)]
struct RecordingCatalogState {
    inner: MemoryCatalogRepository,
    calls: Mutex<Vec<String>>,
    fail_borrow: AtomicBool,
}

// RecordingCatalog records every call as "<operation>:<key>" before delegating to memory.
#[derive(Clone, Default)]
pub(crate) struct RecordingCatalog {
    state: Arc<RecordingCatalogState>,
}

impl RecordingCatalog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn inner(&self) -> &MemoryCatalogRepository {
        &self.state.inner
    }

    pub(crate) async fn calls(&self) -> Vec<String> {
        self.state.calls.lock().await.clone()
    }

    pub(crate) async fn count(&self, operation: &str) -> usize {
        let prefix = format!("{}:", operation);
        self.state.calls.lock().await.iter().filter(|c| c.starts_with(prefix.as_str())).count()
    }

    pub(crate) fn fail_borrow(&self) {
        self.state.fail_borrow.store(true, Ordering::SeqCst);
    }

    async fn record(&self, operation: &str, key: &str) {
        self.state.calls.lock().await.push(format!("{}:{}", operation, key));
    }
}

#[async_trait]
impl CatalogRepository for RecordingCatalog {
    async fn get_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        self.record("get_book_by_isbn", isbn).await;
        self.state.inner.get_book_by_isbn(isbn).await
    }

    async fn add_book(&self, isbn: &str, book: &BookDto) -> LibraryResult<()> {
        self.record("add_book", isbn).await;
        self.state.inner.add_book(isbn, book).await
    }

    async fn get_user_by_id(&self, user_id: &str) -> LibraryResult<Option<UserDto>> {
        self.record("get_user_by_id", user_id).await;
        self.state.inner.get_user_by_id(user_id).await
    }

    async fn register_user(&self, user_id: &str, user: &UserDto) -> LibraryResult<()> {
        self.record("register_user", user_id).await;
        self.state.inner.register_user(user_id, user).await
    }

    async fn borrow_book(&self, isbn: &str, user_id: &str) -> LibraryResult<()> {
        self.record("borrow_book", isbn).await;
        if self.state.fail_borrow.load(Ordering::SeqCst) {
            return Err(LibraryError::database("store rejected borrow", Some("500".to_string()), true));
        }
        self.state.inner.borrow_book(isbn, user_id).await
    }

    async fn return_book(&self, isbn: &str) -> LibraryResult<()> {
        self.record("return_book", isbn).await;
        self.state.inner.return_book(isbn).await
    }
}

#[derive(Default)]
struct RecordingReviewsState {
    inner: StaticReviewService,
    requests: AtomicUsize,
}

#[derive(Clone, Default)]
pub(crate) struct RecordingReviews {
    state: Arc<RecordingReviewsState>,
}

impl RecordingReviews {
    pub(crate) fn new(reviews: HashMap<String, Vec<String>>) -> Self {
        Self {
            state: Arc::new(RecordingReviewsState {
                inner: StaticReviewService::new(reviews),
                requests: AtomicUsize::new(0),
            }),
        }
    }

    pub(crate) fn set_unavailable(&self, unavailable: bool) {
        self.state.inner.set_unavailable(unavailable);
    }

    pub(crate) fn requests(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReviewService for RecordingReviews {
    async fn get_reviews_for_book(&self, isbn: &str) -> LibraryResult<Vec<String>> {
        self.state.requests.fetch_add(1, Ordering::SeqCst);
        self.state.inner.get_reviews_for_book(isbn).await
    }
}

// ScriptedNotifier fails the first `failures` deliveries with NotificationFailed and
// succeeds afterwards. Every attempt is recorded.
#[derive(Default)]
pub(crate) struct ScriptedNotifier {
    failures: usize,
    other_error: bool,
    attempts: AtomicUsize,
    messages: Mutex<Vec<String>>,
}

impl ScriptedNotifier {
    pub(crate) fn reliable() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn failing(failures: usize) -> Arc<Self> {
        Arc::new(Self { failures, ..Self::default() })
    }

    // fails every attempt with an error that is not a delivery failure
    pub(crate) fn broken() -> Arc<Self> {
        Arc::new(Self { failures: usize::MAX, other_error: true, ..Self::default() })
    }

    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub(crate) async fn messages(&self) -> Vec<String> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl NotificationService for ScriptedNotifier {
    async fn send_notification(&self, message: &str) -> Result<(), LibraryError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        self.messages.lock().await.push(message.to_string());
        if attempt < self.failures {
            if self.other_error {
                return Err(LibraryError::database("notifier store down", None, false));
            }
            return Err(LibraryError::notification_failed("Notification failed!"));
        }
        Ok(())
    }
}
