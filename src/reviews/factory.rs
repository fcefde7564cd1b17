use std::collections::HashMap;
use crate::reviews::domain::ReviewService;
use crate::reviews::static_reviews::StaticReviewService;

pub fn create_review_service(reviews: HashMap<String, Vec<String>>) -> Box<dyn ReviewService> {
    Box::new(StaticReviewService::new(reviews))
}
