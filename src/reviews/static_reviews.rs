use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::library::{LibraryError, LibraryResult};
use crate::reviews::domain::ReviewService;

#[derive(Debug, Default)]
pub struct StaticReviewService {
    reviews: RwLock<HashMap<String, Vec<String>>>,
    unavailable: AtomicBool,
}

impl StaticReviewService {
    pub fn new(reviews: HashMap<String, Vec<String>>) -> Self {
        Self {
            reviews: RwLock::new(reviews),
            unavailable: AtomicBool::new(false),
        }
    }

    pub async fn add_review(&self, isbn: &str, review: &str) {
        self.reviews.write().await
            .entry(isbn.to_string())
            .or_default()
            .push(review.to_string());
    }

    // simulates an outage of the review source
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl ReviewService for StaticReviewService {
    async fn get_reviews_for_book(&self, isbn: &str) -> LibraryResult<Vec<String>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(LibraryError::review_service_unavailable("Service unavailable"));
        }
        Ok(self.reviews.read().await.get(isbn).cloned().unwrap_or_default())
    }
}
