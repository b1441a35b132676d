use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::record::Record;
use super::sink::ReportSink;
use crate::shared::WatchError;

/// POSTs each report to a configured webhook as `{"content":"…"}`.
///
/// Delivery is fire-and-forget: `deliver` spawns a detached task and
/// returns immediately. The task logs a failed send and drops the outcome;
/// there is no retry and the response body is ignored. An empty URL makes
/// every send a no-op.
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
}

impl WebhookSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Sends an arbitrary text message through the same webhook envelope.
    pub fn send_message(&self, message: &str) {
        self.dispatch(message);
    }

    fn dispatch(&self, content: &str) {
        if self.url.is_empty() {
            debug!("No webhook URL configured, skipping send");
            return;
        }

        let client = self.client.clone();
        let url = self.url.clone();
        let body = webhook_payload(content);

        tokio::spawn(async move {
            match client
                .post(&url)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await
            {
                Ok(response) => {
                    debug!(status = %response.status(), "Webhook delivered");
                }
                Err(e) => {
                    debug!(error = %e, "Webhook delivery failed");
                }
            }
        });
    }
}

#[async_trait]
impl ReportSink for WebhookSink {
    async fn deliver(&self, record: &Record) -> Result<(), WatchError> {
        self.dispatch(&record.body);
        Ok(())
    }

    fn sink_name(&self) -> &'static str {
        "WebhookSink"
    }
}

fn webhook_payload(content: &str) -> String {
    format!("{{\"content\":\"{}\"}}", escape_content(content))
}

// Deliberately narrow escaper: only quotes, newlines and carriage returns.
// Backslashes and other control characters pass through, so an exotic
// display name can still break the payload.
fn escape_content(content: &str) -> String {
    content
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
