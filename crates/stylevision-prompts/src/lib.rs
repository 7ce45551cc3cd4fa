pub mod instructions;
pub mod request;

pub use request::{Attribute, DescriptionRequest};

pub const SYSTEM_PROMPT: &str = "You are an expert product description generator.";

/// Assemble the full user prompt for a description request.
pub fn assemble_prompt(request: &DescriptionRequest) -> String {
    let mut prompt = String::new();
    instructions::append_instructions(&mut prompt);
    request.append_attributes(&mut prompt);
    instructions::append_output_format(&mut prompt);
    prompt
}
