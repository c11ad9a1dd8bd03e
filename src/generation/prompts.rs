//! Prompt text sent to the model. Field values are embedded verbatim.

/// Asks for the experience rewritten as resume bullets, XYZ style.
pub fn bullet_points(raw_experience: &str, job_title: &str) -> String {
    format!(
        "Rewrite this for a professional resume using Google XYZ formula: {raw_experience}. Target Job: {job_title}"
    )
}

pub fn portfolio_bio(name: &str, job_title: &str) -> String {
    format!("Write a 2-sentence professional bio for {name}, a {job_title}.")
}
