// Shared system prompts. The matching prompt body lives in matching::prompts.

/// System message for every resume ranking call.
pub const HR_MATCHING_SYSTEM: &str = "You are a professional HR assistant that specializes in \
    matching resumes to job descriptions.";
