use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use async_trait::async_trait;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::NotificationService;
use crate::users::domain::User;

// UserDto abstracts a registered library member together with the channel used to reach them.
#[derive(Clone)]
pub struct UserDto {
    pub user_id: String,
    pub version: i64,
    pub name: String,
    pub notification_service: Option<Arc<dyn NotificationService>>,
}

impl UserDto {
    pub fn new(user_id: &str, name: &str, notification_service: Option<Arc<dyn NotificationService>>) -> Self {
        Self {
            user_id: user_id.to_string(),
            version: 0,
            name: name.to_string(),
            notification_service,
        }
    }
}

impl Debug for UserDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDto")
            .field("user_id", &self.user_id)
            .field("version", &self.version)
            .field("name", &self.name)
            .field("notification_service", &self.notification_service.is_some())
            .finish()
    }
}

impl Identifiable for UserDto {
    fn id(&self) -> String {
        self.user_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[async_trait]
impl User for UserDto {
    fn has_notification_service(&self) -> bool {
        self.notification_service.is_some()
    }

    async fn send_notification(&self, message: &str) -> LibraryResult<()> {
        match &self.notification_service {
            Some(service) => service.send_notification(message).await,
            None => Err(LibraryError::invalid_argument("Invalid notification service.")),
        }
    }
}
