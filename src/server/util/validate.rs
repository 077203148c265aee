use std::str::FromStr;

use crate::server::error::AppError;

/// Collects failed validation rules so they can be reported in one response.
///
/// # Example
///
/// ```rust,ignore
/// let mut v = Validator::new();
/// v.length(&dto.name, 1, 100, "Hero name must be between 1 and 100 characters");
/// v.check(!dto.roles.is_empty(), "Hero must have at least one role");
/// v.finish()?;
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` when `ok` is false.
    pub fn check(&mut self, ok: bool, message: impl Into<String>) -> &mut Self {
        if !ok {
            self.errors.push(message.into());
        }
        self
    }

    /// Checks the character count of the trimmed value against an inclusive range.
    pub fn length(&mut self, value: &str, min: usize, max: usize, message: &str) -> &mut Self {
        let len = value.trim().chars().count();
        self.check(len >= min && len <= max, message)
    }

    /// Checks an optional float against an inclusive range. `None` fails.
    pub fn range(&mut self, value: Option<f64>, min: f64, max: f64, message: &str) -> &mut Self {
        let ok = value.is_some_and(|v| v.is_finite() && v >= min && v <= max);
        self.check(ok, message)
    }

    /// Parses `value`, recording `message` and returning `None` when it fails.
    pub fn parse<T: FromStr>(&mut self, value: &str, message: &str) -> Option<T> {
        match value.trim().parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.errors.push(message.to_string());
                None
            }
        }
    }

    /// Parses every value, recording `message` once if any of them fails.
    pub fn parse_all<T: FromStr>(&mut self, values: &[String], message: &str) -> Vec<T> {
        let mut parsed = Vec::with_capacity(values.len());
        let mut failed = false;
        for value in values {
            match value.trim().parse::<T>() {
                Ok(v) => parsed.push(v),
                Err(_) => failed = true,
            }
        }
        if failed {
            self.errors.push(message.to_string());
        }
        parsed
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `Err(AppError::Validation)` listing every failed rule, if any.
    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

/// Basic shape check for an email address: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_failed_rule() {
        let mut v = Validator::new();
        v.length("", 1, 100, "name");
        v.range(Some(120.0), 0.0, 100.0, "rate");
        v.range(None, 0.0, 100.0, "missing");
        v.check(true, "unused");

        let Err(AppError::Validation(details)) = v.finish() else {
            panic!("expected validation error");
        };

        assert_eq!(details, vec!["name", "rate", "missing"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut v = Validator::new();
        v.length("Điêu Thuyền", 1, 11, "too long");

        assert!(v.is_valid());
    }

    #[test]
    fn reports_bad_enum_values_once() {
        let mut v = Validator::new();
        let parsed: Vec<u8> = v.parse_all(&["1".into(), "x".into(), "y".into()], "Invalid");

        assert_eq!(parsed, vec![1]);
        assert!(v.finish().is_err());
    }

    #[test]
    fn checks_email_shape() {
        assert!(is_valid_email("admin@bloghok.com"));
        assert!(!is_valid_email("admin@localhost"));
        assert!(!is_valid_email("admin.bloghok.com"));
        assert!(!is_valid_email("ad min@bloghok.com"));
        assert!(!is_valid_email("@bloghok.com"));
    }
}
