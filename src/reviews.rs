pub mod domain;
pub mod factory;
pub mod static_reviews;
