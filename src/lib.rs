//! Library service core: validates and orchestrates book inventory, user registration,
//! loans and review notifications over pluggable catalog, review and notifier backends.

pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod library;
pub mod reviews;
pub mod users;
pub mod utils;
