use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookDto carries a book between the library service and the catalog store. The store owns
// the record, callers only ever see copies of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            book_status: BookStatus::Available,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn borrow(&mut self) {
        self.book_status = BookStatus::Borrowed;
        self.updated_at = Utc::now().naive_utc();
    }

    pub fn return_book(&mut self) {
        self.book_status = BookStatus::Available;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn is_borrowed(&self) -> bool {
        self.book_status == BookStatus::Borrowed
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }
}
