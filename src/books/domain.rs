use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub trait Book: Identifiable {
    fn is_borrowed(&self) -> bool;
    fn status(&self) -> BookStatus;
}
