// Cover letter drafting: tone selection and template fill.
// The job description gates the draft but is never parsed.

pub mod composer;
pub mod handlers;
pub mod templates;
pub mod tone;
