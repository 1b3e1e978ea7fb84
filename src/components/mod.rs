use crate::booking::emails::EmailPayload;
use crate::error::BookingResult;
use async_trait::async_trait;

pub mod notifier;

pub use notifier::LogNotifier;

/// Delivery collaborator for notification payloads.
///
/// The booking flow depends only on this trait, so a real email provider
/// can replace the log-backed stub without touching validation logic.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Get the name of the notifier implementation
    fn name(&self) -> &'static str;

    /// Deliver one formatted payload
    async fn send(&self, payload: &EmailPayload) -> BookingResult<()>;
}
