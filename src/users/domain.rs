use async_trait::async_trait;
use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait User: Identifiable {
    fn has_notification_service(&self) -> bool;
    async fn send_notification(&self, message: &str) -> LibraryResult<()>;
}
