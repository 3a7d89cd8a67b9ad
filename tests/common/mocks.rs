use async_trait::async_trait;
use bfhl_service::{Error, Result, llm::TextGenerator};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock text generator for testing
#[derive(Debug, Clone)]
pub struct MockTextGenerator {
    pub reply: Option<String>,
    pub error: Option<String>,
    pub delay: Option<Duration>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self {
            reply: None,
            error: None,
            delay: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = Some(reply.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(ref error) = self.error {
            return Err(Error::upstream(error.clone()));
        }

        self.reply
            .clone()
            .ok_or_else(|| Error::upstream("No mock reply configured"))
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}
