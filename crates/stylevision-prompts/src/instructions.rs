/// Append the copywriting instructions to the prompt.
pub fn append_instructions(prompt: &mut String) {
    prompt.push_str(
        "Write a short, catchy, marketing-friendly product description in plain text. \
         Make it engaging and professional, as if for an online store, but not too long.\n\
         - Always mention the product name early in the description.\n\
         - Do not invent or hallucinate any attribute that is not listed below.\n\
         - Do not mention an occasion, region or occasion/region of any kind.\n\
         - Give each description a fresh opening; vary adjectives and sentence structure.\n\
         - Combine the listed attributes naturally into flowing sentences.\n\
         - Include any care instructions that are listed.\n\
         - Use correct British grammar.\n\n",
    );
}

/// Append the closing output-format line.
pub fn append_output_format(prompt: &mut String) {
    prompt.push_str("\nOutput as a single, plain-text paragraph using correct British grammar.");
}
