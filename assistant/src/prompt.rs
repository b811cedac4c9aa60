//! Grounding instruction for the model.

/// System message: answer from the context, cite the source, decline otherwise.
///
/// # Example
/// ```
/// # use assistant::prompt::build_system_prompt;
/// let p = build_system_prompt("[FEES - Scholarships]: ...");
/// assert!(p.ends_with("[FEES - Scholarships]: ..."));
/// ```
pub fn build_system_prompt(context: &str) -> String {
    format!(
        "You are a helpful University Assistant.\n\
         Use the following context to answer the student's question.\n\
         If the answer is in the context, always include the source link provided.\n\
         If the answer is NOT in the context, politely say you only have information about specific university topics.\n\
         \n\
         Context:\n\
         {context}"
    )
}
