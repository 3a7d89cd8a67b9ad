mod operation;

pub use operation::{Operation, OperationKey, OperationOutput};

use crate::{Error, Result, llm::TextGenerator, numeric};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tracing::{debug, info};

pub const SINGLE_WORD_INSTRUCTION: &str = "Answer in exactly one single word. do not use punctuation.";

/// Appends the single-word instruction to a user prompt.
pub fn single_word_prompt(prompt: &str) -> String {
    format!("{prompt} {SINGLE_WORD_INSTRUCTION}")
}

/// First whitespace-delimited token of the trimmed reply, taken verbatim.
pub fn first_word(reply: &str) -> Option<&str> {
    reply.split_whitespace().next()
}

/// Routes a validated request to the numeric toolkit or the text generator.
pub struct Dispatcher {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl Dispatcher {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub async fn dispatch(&self, body: &Value) -> Result<OperationOutput> {
        let operation = Operation::parse(body)?;
        let key = operation.key();

        let output = self.execute(operation).await?;
        info!("Completed {} operation", key);

        Ok(output)
    }

    pub async fn execute(&self, operation: Operation) -> Result<OperationOutput> {
        match operation {
            Operation::Fibonacci(n) => numeric::fibonacci(n).map(OperationOutput::Series),
            Operation::Prime(values) => {
                let primes = tokio::task::spawn_blocking(move || numeric::filter_primes(&values))
                    .await
                    .map_err(|e| Error::internal(format!("prime filter task failed: {e}")))?;
                Ok(OperationOutput::Primes(primes))
            }
            Operation::Lcm(values) => numeric::lcm_of(&values).map(OperationOutput::Value),
            Operation::Hcf(values) => Ok(OperationOutput::Value(numeric::hcf_of(&values))),
            Operation::Ai(prompt) => self.answer(&prompt).await.map(OperationOutput::Word),
        }
    }

    async fn answer(&self, prompt: &str) -> Result<String> {
        let prompt = single_word_prompt(prompt);
        debug!("Forwarding prompt to text generator ({} chars)", prompt.len());

        let reply = tokio::time::timeout(self.timeout, self.generator.generate(&prompt))
            .await
            .map_err(|_| Error::UpstreamTimeout(self.timeout))??;

        first_word(&reply)
            .map(str::to_string)
            .ok_or_else(|| Error::upstream("text generator returned an empty reply"))
    }
}
