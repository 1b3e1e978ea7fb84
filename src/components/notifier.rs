use crate::booking::emails::EmailPayload;
use crate::components::Notifier;
use crate::error::BookingResult;
use async_trait::async_trait;
use tracing::info;

const BANNER: &str = "═══════════════════════════════════════════════════";

/// Log-backed stand-in for a real email provider. Payloads are written to
/// the tracing log instead of being delivered anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, payload: &EmailPayload) -> BookingResult<()> {
        info!("{}", BANNER);
        info!("       OUTGOING EMAIL");
        info!("{}", BANNER);
        info!("To: {}", payload.to);
        info!("From: {}", payload.from);
        info!("Subject: {}", payload.subject);
        info!("───────────────────────────────────────────────────");
        for line in payload.body.lines() {
            info!("{}", line);
        }
        info!("{}", BANNER);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_notifier_send_succeeds() {
        let payload = EmailPayload {
            to: "sam@example.com".to_string(),
            from: "noreply@example.com".to_string(),
            subject: "Test".to_string(),
            body: "line one\nline two".to_string(),
        };
        assert!(LogNotifier.send(&payload).await.is_ok());
        assert_eq!(LogNotifier.name(), "log");
    }
}
