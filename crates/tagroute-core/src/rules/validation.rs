use crate::errors::{Result, RouteError};
use crate::model::Rule;

/// Validate a rule before it is persisted or installed
///
/// Enforces the creation-time contract:
///
/// 1. The tag is non-empty (and not whitespace-only)
/// 2. The destination id is non-empty
///
/// Destination existence is deliberately NOT checked here; it is re-checked
/// every time the rule fires, since the destination can vanish between rule
/// creation and firing.
///
/// # Errors
/// Returns `InvalidRule` describing the first violation; callers surface it
/// as a declined operation, never a panic.
pub fn validate_rule(rule: &Rule) -> Result<()> {
    if rule.tag.trim().is_empty() {
        return Err(RouteError::InvalidRule {
            reason: "tag cannot be empty".to_string(),
        });
    }

    if rule.destination_id.trim().is_empty() {
        return Err(RouteError::InvalidRule {
            reason: "destination cannot be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rule_passes() {
        assert!(validate_rule(&Rule::new("Inbox", "page-x")).is_ok());
    }

    #[test]
    fn test_empty_tag_declined() {
        let result = validate_rule(&Rule::new("", "page-x"));
        assert!(matches!(result, Err(RouteError::InvalidRule { .. })));
    }

    #[test]
    fn test_whitespace_tag_declined() {
        let result = validate_rule(&Rule::new("   ", "page-x"));
        assert!(matches!(result, Err(RouteError::InvalidRule { .. })));
    }

    #[test]
    fn test_empty_destination_declined() {
        let result = validate_rule(&Rule::new("Inbox", ""));
        assert!(matches!(result, Err(RouteError::InvalidRule { .. })));
    }
}
