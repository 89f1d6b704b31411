// Prompt text for the resume ranking call.

pub const JOB_DESCRIPTION_HEADER: &str = "Job Description:";

pub const RESUMES_HEADER: &str = "I have the following resumes:";

/// Ranking instructions appended after the resume blocks.
pub const RANKING_INSTRUCTIONS: &str = r#"Based on the job description, rank these resumes from best to worst match.
Provide a score from 0-100 for each resume and explain the reasoning.
Format your response as:
1. Resume X (File: filename, Page: Y) - Score: XX/100 - [Brief explanation]
2. Resume Z (File: filename, Page: W) - Score: XX/100 - [Brief explanation]
And so on..."#;
