// Resume tailoring: one prompt, one completion call, text returned as-is.
// All model calls go through llm_client.

pub mod handlers;
pub mod prompts;
