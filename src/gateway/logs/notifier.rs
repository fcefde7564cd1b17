use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;
use crate::core::library::LibraryError;
use crate::gateway::events::NotificationService;

// LogNotificationService delivers messages as tracing events and keeps what it delivered
// so that callers can inspect it.
#[derive(Debug)]
pub struct LogNotificationService {
    recipient: String,
    delivered: Mutex<Vec<String>>,
}

impl LogNotificationService {
    pub fn new(recipient: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
            delivered: Mutex::new(vec![]),
        }
    }

    pub async fn delivered(&self) -> Vec<String> {
        self.delivered.lock().await.clone()
    }
}

#[async_trait]
impl NotificationService for LogNotificationService {
    async fn send_notification(&self, message: &str) -> Result<(), LibraryError> {
        info!(recipient = self.recipient.as_str(), body = message, "notification delivered");
        self.delivered.lock().await.push(message.to_string());
        Ok(())
    }
}
