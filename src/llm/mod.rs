//! LLM integration for pawnote
//!
//! Builds the discharge note prompt and issues one request to the DeepSeek
//! chat-completions API.

mod client;
mod deepseek;
mod prompts;

pub use client::{build_generator, NoteGenerator};
pub use deepseek::DeepSeekClient;
pub use prompts::{build_discharge_prompt, SYSTEM_PROMPT};
