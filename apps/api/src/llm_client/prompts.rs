// Prompt fragments shared by every JSON-producing feature.
// Feature-specific prompts live next to the feature (ats, resume_builder, chat).

/// Appended to prompts whose reply is parsed as JSON.
pub const RAW_JSON_INSTRUCTION: &str =
    "Do not include markdown formatting (like ```json). Just return the raw JSON string.";
