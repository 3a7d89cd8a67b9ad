mod client;

pub use client::{OpenAiClient, TextGenerator};
