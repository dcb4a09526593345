//! Process status shared by the `/start` command and the HTTP info routes.

use chrono::{DateTime, Utc};

/// Static facts about the running service.
#[derive(Debug, Clone)]
pub struct ServiceStatus {
    started_at: DateTime<Utc>,
    port: u16,
}

impl ServiceStatus {
    /// Status for a service started now and listening on `port`.
    #[must_use]
    pub fn new(port: u16) -> Self {
        Self::started_at(port, Utc::now())
    }

    #[must_use]
    pub const fn started_at(port: u16, started_at: DateTime<Utc>) -> Self {
        Self { started_at, port }
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Uptime as `Hh Mm Ss`.
    #[must_use]
    pub fn uptime(&self) -> String {
        format_uptime(self.started_at, Utc::now())
    }

    /// Local webhook URL advertised to operators.
    #[must_use]
    pub fn webhook_endpoint(&self) -> String {
        format!("http://localhost:{}/webhook", self.port)
    }
}

pub(crate) fn format_uptime(started_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let total_seconds = (now - started_at).num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{hours}h {minutes}m {seconds}s")
}
