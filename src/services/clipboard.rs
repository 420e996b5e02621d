use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::errors::ConnectorError;

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ConnectorError>;
}

/// Clipboard kept by the widget host. The page reads the last copied
/// text back and hands it to the browser.
#[derive(Debug, Default)]
pub struct SessionClipboard {
    contents: Mutex<Option<String>>,
}

impl SessionClipboard {
    pub fn read_text(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Clipboard for SessionClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ConnectorError> {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
        Ok(())
    }
}
