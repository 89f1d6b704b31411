// Resume matching: job description resolution, prompt assembly, and the
// end-to-end pipeline. All LLM calls go through llm_client.

pub mod job_description;
pub mod pipeline;
pub mod prompt_builder;
pub mod prompts;
