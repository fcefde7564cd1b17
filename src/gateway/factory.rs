use std::sync::Arc;
use crate::gateway::events::NotificationService;
use crate::gateway::logs::notifier::LogNotificationService;

pub fn create_notification_service(recipient: &str) -> Arc<dyn NotificationService> {
    Arc::new(LogNotificationService::new(recipient))
}
