use async_trait::async_trait;
use crate::core::library::LibraryError;

// NotificationService is the delivery capability attached to every registered user.
// Failed deliveries are reported as LibraryError::NotificationFailed.
#[async_trait]
pub trait NotificationService: Sync + Send {
    async fn send_notification(&self, message: &str) -> Result<(), LibraryError>;
}
