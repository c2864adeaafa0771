// Question Generation Pipeline
// Implements: upload validation, chunking, keyword-based chunk selection,
// prompt composition, and model-reply parsing.
// All LLM calls go through llm_client — no direct Groq calls here.

pub mod chunker;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod scorer;
pub mod validation;
