//! Direct APM record sender.
//!
//! The APM agent tails stdout. Records sent here skip the subscriber and its
//! filters so they reach the agent immediately, whatever the console level.

use std::io::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::Level;

use crate::server::config::ApmConfig;

#[derive(Debug, Clone)]
pub struct ApmClient {
    app_name: String,
}

impl ApmClient {
    pub fn new(config: &ApmConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Writes one record to stdout.
    ///
    /// A failed write is logged and otherwise ignored.
    pub fn send(&self, level: Level, message: &str, metadata: Map<String, Value>) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_record(&mut stdout, Utc::now(), level, message, metadata) {
            tracing::warn!(error = %e, "Failed to send APM record");
        }
    }

    /// Serializes `{timestamp, level, message, app, ...metadata}` as a single line.
    ///
    /// Metadata keys that collide with the four standard keys are overwritten.
    pub fn write_record<W: Write>(
        &self,
        writer: &mut W,
        now: DateTime<Utc>,
        level: Level,
        message: &str,
        metadata: Map<String, Value>,
    ) -> io::Result<()> {
        let mut record = metadata;
        record.insert(
            "timestamp".to_string(),
            Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        record.insert(
            "level".to_string(),
            Value::String(level.as_str().to_lowercase()),
        );
        record.insert("message".to_string(), Value::String(message.to_string()));
        record.insert("app".to_string(), Value::String(self.app_name.clone()));

        serde_json::to_writer(&mut *writer, &Value::Object(record))?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}
