use std::sync::{Mutex, PoisonError};

use log::warn;
use uuid::Uuid;

use crate::{errors::ConnectorError, models::notice::Notice};

/// Sink for messages the user has to see.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Pending notices, shown by the page until dismissed.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeBoard {
    pub fn pending(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn dismiss(&self, id: Uuid) -> Result<Notice, ConnectorError> {
        let mut notices = self.notices.lock().unwrap_or_else(PoisonError::into_inner);
        let position = notices
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| ConnectorError::NoticeNotFoundError(id.to_string()))?;
        Ok(notices.remove(position))
    }
}

impl Notifier for NoticeBoard {
    fn notify(&self, message: &str) {
        warn!("notice: {}", message);
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notice::new(message));
    }
}
