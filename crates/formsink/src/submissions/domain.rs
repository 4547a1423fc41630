use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on insert. Monotonic, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubmissionId(pub i64);

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub name: String,
    pub email: String,
    pub age: Option<u8>,
    pub submitted_at: DateTime<Utc>,
}

/// Raw form input as posted by the browser. The age field arrives as free
/// text so the service can distinguish "absent" from "invalid".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: Option<String>,
}

/// A submission that has passed validation and is ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub age: Option<u8>,
}

/// User-correctable input problems. Messages are part of the UI contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Age must be a number")]
    AgeNotANumber,
    #[error("Please enter a valid age (1-120)")]
    AgeOutOfRange,
}

pub const AGE_MIN: u8 = 1;
pub const AGE_MAX: u8 = 120;

impl SubmissionForm {
    /// Validate the raw input, producing a persistable submission.
    ///
    /// Name and email are trimmed before the checks. The only email rule is
    /// the presence of an `@`. An empty age field means the age was not
    /// supplied; a non-empty field must parse to an integer in
    /// [`AGE_MIN`, `AGE_MAX`].
    pub fn validate(&self) -> Result<NewSubmission, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if email.is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if !email.contains('@') {
            return Err(ValidationError::EmailInvalid);
        }

        let age = parse_age(self.age.as_deref())?;

        Ok(NewSubmission {
            name: name.to_string(),
            email: email.to_string(),
            age,
        })
    }
}

/// Explicit age parsing: `Ok(None)` when the field was absent or blank,
/// distinct errors for non-numeric and out-of-range input.
pub fn parse_age(raw: Option<&str>) -> Result<Option<u8>, ValidationError> {
    let raw = match raw {
        Some(value) if !value.trim().is_empty() => value.trim(),
        _ => return Ok(None),
    };

    let age: i64 = raw.parse().map_err(|_| ValidationError::AgeNotANumber)?;
    if age < i64::from(AGE_MIN) || age > i64::from(AGE_MAX) {
        return Err(ValidationError::AgeOutOfRange);
    }

    Ok(Some(age as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, age: Option<&str>) -> SubmissionForm {
        SubmissionForm {
            name: name.to_string(),
            email: email.to_string(),
            age: age.map(str::to_string),
        }
    }

    #[test]
    fn accepts_valid_input_and_trims_whitespace() {
        let validated = form("  Ada Lovelace ", " ada@example.com ", Some("36"))
            .validate()
            .expect("valid form");
        assert_eq!(validated.name, "Ada Lovelace");
        assert_eq!(validated.email, "ada@example.com");
        assert_eq!(validated.age, Some(36));
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            form("   ", "ada@example.com", None).validate(),
            Err(ValidationError::NameRequired)
        );
    }

    #[test]
    fn rejects_empty_email() {
        assert_eq!(
            form("Ada", "", None).validate(),
            Err(ValidationError::EmailRequired)
        );
    }

    #[test]
    fn rejects_email_without_at_sign() {
        assert_eq!(
            form("Ada", "nope", None).validate(),
            Err(ValidationError::EmailInvalid)
        );
    }

    #[test]
    fn absent_or_blank_age_is_none() {
        assert_eq!(parse_age(None), Ok(None));
        assert_eq!(parse_age(Some("")), Ok(None));
        assert_eq!(parse_age(Some("   ")), Ok(None));
    }

    #[test]
    fn non_numeric_age_is_a_distinct_error() {
        assert_eq!(parse_age(Some("abc")), Err(ValidationError::AgeNotANumber));
        assert_eq!(parse_age(Some("12.5")), Err(ValidationError::AgeNotANumber));
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert_eq!(parse_age(Some("1")), Ok(Some(1)));
        assert_eq!(parse_age(Some("120")), Ok(Some(120)));
        assert_eq!(parse_age(Some("0")), Err(ValidationError::AgeOutOfRange));
        assert_eq!(parse_age(Some("150")), Err(ValidationError::AgeOutOfRange));
        assert_eq!(parse_age(Some("-3")), Err(ValidationError::AgeOutOfRange));
    }
}
