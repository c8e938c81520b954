/// System instruction sent with every tailoring request.
pub const TAILOR_SYSTEM: &str = "You are a professional resume writer. \
    Rewrite the user's resume bullet points to match the job description terminology.";

/// Builds the user message pairing the job description with the resume text.
pub fn build_tailor_prompt(job_description: &str, resume_text: &str) -> String {
    format!("JD: {job_description}\n\nResume: {resume_text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_puts_jd_before_resume() {
        let prompt = build_tailor_prompt("Rust engineer", "Wrote Go services");
        assert_eq!(prompt, "JD: Rust engineer\n\nResume: Wrote Go services");
    }

    #[test]
    fn test_prompt_keeps_inputs_verbatim() {
        let jd = "  {braces} and\nnewlines ";
        let resume = "- bullet one\n- bullet two";
        let prompt = build_tailor_prompt(jd, resume);
        assert!(prompt.contains(jd));
        assert!(prompt.ends_with(resume));
    }

    #[test]
    fn test_system_prompt_mentions_terminology() {
        assert!(TAILOR_SYSTEM.contains("job description terminology"));
        assert!(TAILOR_SYSTEM.starts_with("You are a professional resume writer."));
    }
}
