// Resume builder assistance: role-based content suggestions and draft review.
// Both degrade to canned content when the model is absent or fails.

pub mod builder;
pub mod handlers;
pub mod prompts;
