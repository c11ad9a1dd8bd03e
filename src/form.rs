use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub const EMPTY_EXPERIENCE_WARNING: &str = "Please enter your experience.";

/// Field values of one form submission, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub raw_experience: String,
}

/// A submission that passed the experience check. Only constructed by
/// [`FormInput::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    name: String,
    job_title: String,
    raw_experience: String,
}

impl FormInput {
    pub fn new(
        name: impl Into<String>,
        job_title: impl Into<String>,
        raw_experience: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            job_title: job_title.into(),
            raw_experience: raw_experience.into(),
        }
    }

    /// Name and job title may be empty. Experience may not.
    pub fn validate(&self) -> Result<ValidatedInput> {
        if self.raw_experience.trim().is_empty() {
            return Err(Error::validation(EMPTY_EXPERIENCE_WARNING));
        }

        Ok(ValidatedInput {
            name: self.name.clone(),
            job_title: self.job_title.clone(),
            raw_experience: self.raw_experience.clone(),
        })
    }
}

impl ValidatedInput {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn raw_experience(&self) -> &str {
        &self.raw_experience
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t ")]
    fn test_blank_experience_rejected(#[case] experience: &str) {
        let err = FormInput::new("Ada", "Engineer", experience)
            .validate()
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), EMPTY_EXPERIENCE_WARNING);
    }

    #[test]
    fn test_empty_name_and_title_allowed() {
        let input = FormInput::new("", "", "shipped things").validate().unwrap();

        assert_eq!(input.name(), "");
        assert_eq!(input.job_title(), "");
        assert_eq!(input.raw_experience(), "shipped things");
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let input = FormInput::new(" Ada ", "Engineer", "  led a team  ")
            .validate()
            .unwrap();

        assert_eq!(input.name(), " Ada ");
        assert_eq!(input.raw_experience(), "  led a team  ");
    }
}
