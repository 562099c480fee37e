// Portal assistant chatbot: ordered intent rules first, model answer second.

pub mod handlers;
pub mod intents;
pub mod prompts;
pub mod rate_limit;
