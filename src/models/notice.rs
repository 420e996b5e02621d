use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A user-visible message, the widget's equivalent of an alert box.
#[derive(Clone, Debug, Serialize)]
pub struct Notice {
    pub id: Uuid,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            raised_at: Utc::now(),
        }
    }
}
