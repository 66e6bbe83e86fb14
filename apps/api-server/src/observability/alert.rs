//! Error alerting layer for tracing.
//!
//! The stores downgrade persistence failures to ERROR logs and keep
//! serving from memory. This layer picks those events up and hands them
//! to an alert sink, console by default or a webhook when configured.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{Event, Subscriber};
use tracing_subscriber::{Layer, layer::Context};

/// One captured error event, ready for delivery.
#[derive(Debug, Clone)]
pub struct AlertMessage {
    pub level: String,
    pub message: String,
    pub target: String,
    /// Storage slot the event was about, when the log carried one.
    pub key: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub fields: Vec<(String, String)>,
}

impl AlertMessage {
    /// Plain-text rendering shared by the console and webhook sinks.
    fn render(&self) -> String {
        let mut out = format!(
            "[{}] {} at {}\n{}",
            self.level, self.target, self.timestamp, self.message
        );
        if let Some(key) = &self.key {
            out.push_str("\nslot: ");
            out.push_str(key);
        }
        for (name, value) in &self.fields {
            out.push_str(&format!("\n{name}: {value}"));
        }
        out
    }
}

/// Tuning knobs for [`AlertLayer`].
#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// Least severe level that still alerts (default: ERROR).
    pub min_level: tracing::Level,
    /// Capacity of the dispatch channel.
    pub buffer_size: usize,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            min_level: tracing::Level::ERROR,
            buffer_size: 100,
        }
    }
}

/// Destination for captured alerts.
#[async_trait::async_trait]
pub trait AlertSender: Send + Sync {
    async fn send(&self, alert: AlertMessage) -> Result<(), AlertError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert delivery failed: {0}")]
    Delivery(String),
}

/// Writes alerts to stderr. The development default.
pub struct ConsoleAlertSender;

#[async_trait::async_trait]
impl AlertSender for ConsoleAlertSender {
    async fn send(&self, alert: AlertMessage) -> Result<(), AlertError> {
        eprintln!("\n🚨 {}\n", alert.render());
        Ok(())
    }
}

/// Posts alerts to a webhook URL (Slack, Discord, etc.).
pub struct WebhookAlertSender {
    url: String,
    client: reqwest::Client,
}

impl WebhookAlertSender {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl AlertSender for WebhookAlertSender {
    async fn send(&self, alert: AlertMessage) -> Result<(), AlertError> {
        let payload = serde_json::json!({ "text": format!("🚨 {}", alert.render()) });

        self.client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AlertError::Delivery(e.to_string()))?;

        Ok(())
    }
}

/// Tracing layer that forwards matching events to an [`AlertSender`].
pub struct AlertLayer {
    sender: mpsc::Sender<AlertMessage>,
    min_level: tracing::Level,
}

impl AlertLayer {
    /// Spawns the dispatch task and returns the layer feeding it.
    pub fn new(sink: Arc<dyn AlertSender>, config: AlertConfig) -> Self {
        let (tx, mut rx) = mpsc::channel::<AlertMessage>(config.buffer_size);

        tokio::spawn(async move {
            while let Some(alert) = rx.recv().await {
                if let Err(e) = sink.send(alert).await {
                    eprintln!("alert sink failed: {e}");
                }
            }
        });

        Self {
            sender: tx,
            min_level: config.min_level,
        }
    }

    pub fn console() -> Self {
        Self::new(Arc::new(ConsoleAlertSender), AlertConfig::default())
    }

    pub fn webhook(url: String) -> Self {
        Self::new(Arc::new(WebhookAlertSender::new(url)), AlertConfig::default())
    }
}

/// Collects an event's message and remaining fields during `record`.
#[derive(Default)]
struct EventFields {
    message: String,
    rest: Vec<(String, String)>,
}

impl EventFields {
    fn of(event: &Event<'_>) -> Self {
        let mut fields = Self::default();
        event.record(&mut fields);
        fields
    }

    /// Removes and returns a named field, when the event carried it.
    fn take(&mut self, name: &str) -> Option<String> {
        let at = self.rest.iter().position(|(n, _)| n == name)?;
        Some(self.rest.remove(at).1)
    }

    fn push(&mut self, field: &tracing::field::Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.rest.push((field.name().to_string(), value));
        }
    }
}

impl tracing::field::Visit for EventFields {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.push(field, value.to_string());
    }
}

impl<S> Layer<S> for AlertLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // tracing orders levels by verbosity: ERROR is the smallest
        if *event.metadata().level() > self.min_level {
            return;
        }

        let mut fields = EventFields::of(event);
        let key = fields.take("key");

        let alert = AlertMessage {
            level: event.metadata().level().to_string(),
            message: fields.message,
            target: event.metadata().target().to_string(),
            key,
            timestamp: chrono::Utc::now(),
            fields: fields.rest,
        };

        // never block the caller; a full channel drops the alert
        let _ = self.sender.try_send(alert);
    }
}
