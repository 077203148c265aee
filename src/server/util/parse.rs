use crate::server::{error::AppError, model::pagination::PageParams};

/// Longest slug accepted in a path segment.
const MAX_SLUG_LENGTH: usize = 200;

/// Parses a resource id from a path segment.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Positive id
/// - `Err(AppError::BadRequest)` - Value is not a positive integer
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    match value.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest("Invalid ID format".to_string())),
    }
}

/// Checks a slug path segment against `^[a-z0-9-]{1,200}$`.
///
/// # Returns
/// - `Ok(&str)` - The trimmed slug
/// - `Err(AppError::BadRequest)` - Empty, too long or contains other characters
pub fn parse_slug(value: &str) -> Result<&str, AppError> {
    let slug = value.trim();
    let valid = !slug.is_empty()
        && slug.len() <= MAX_SLUG_LENGTH
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');

    if valid {
        Ok(slug)
    } else {
        Err(AppError::BadRequest("Invalid slug format".to_string()))
    }
}

/// Parses the `page` and `limit` query parameters.
///
/// Both problems are reported together when both values are invalid.
///
/// # Arguments
/// - `page` - Raw `page` value, defaults to 1
/// - `limit` - Raw `limit` value, defaults to 20
///
/// # Returns
/// - `Ok(PageParams)` - `page >= 1` and `1 <= limit <= 100`
/// - `Err(AppError::Validation)` - One or both values out of range or not integers
pub fn parse_page(page: Option<&str>, limit: Option<&str>) -> Result<PageParams, AppError> {
    let mut errors = Vec::new();

    let page = match page.map(str::trim).filter(|p| !p.is_empty()) {
        None => PageParams::DEFAULT_PAGE,
        Some(raw) => match raw.parse::<u64>() {
            Ok(page) if page >= 1 => page,
            _ => {
                errors.push("Page must be a positive integer".to_string());
                PageParams::DEFAULT_PAGE
            }
        },
    };

    let limit = match limit.map(str::trim).filter(|l| !l.is_empty()) {
        None => PageParams::DEFAULT_LIMIT,
        Some(raw) => match raw.parse::<u64>() {
            Ok(limit) if (1..=PageParams::MAX_LIMIT).contains(&limit) => limit,
            _ => {
                errors.push("Limit must be between 1 and 100".to_string());
                PageParams::DEFAULT_LIMIT
            }
        },
    };

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(PageParams { page, limit })
}

/// Treats an absent, empty or `"all"` filter value as no filter.
pub fn filter_value(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_ids() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("507f1f77bcf86cd799439011").is_err());
    }

    #[test]
    fn validates_slug_characters() {
        assert_eq!(parse_slug("lu-bu-2").unwrap(), "lu-bu-2");
        assert!(parse_slug("Lu-Bu").is_err());
        assert!(parse_slug("lu_bu").is_err());
        assert!(parse_slug("").is_err());
        assert!(parse_slug(&"a".repeat(201)).is_err());
    }

    #[test]
    fn applies_page_defaults() {
        let params = parse_page(None, None).unwrap();

        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 20);
    }

    #[test]
    fn collects_both_page_errors() {
        let Err(AppError::Validation(details)) = parse_page(Some("0"), Some("101")) else {
            panic!("expected validation error");
        };

        assert_eq!(details.len(), 2);
    }

    #[test]
    fn ignores_all_filter() {
        assert_eq!(filter_value(Some("all")), None);
        assert_eq!(filter_value(Some(" ")), None);
        assert_eq!(filter_value(Some("Tank")), Some("Tank"));
    }
}
