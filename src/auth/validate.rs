/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    if value.trim().chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate a phone number: digits with optional `+`, spaces and dashes,
/// 6 to 20 characters.
pub fn validate_mobile(mobile: &str) -> Option<String> {
    let trimmed = mobile.trim();
    if trimmed.is_empty() {
        return Some("Mobile number is required".to_string());
    }
    if trimmed.len() < 6 || trimmed.len() > 20 {
        return Some("Mobile number must be 6 to 20 characters".to_string());
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-'))
    {
        return Some("Mobile number may only contain digits, '+', spaces and dashes".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields() {
        assert!(validate_required("  ", "Zone", 10).is_some());
        assert!(validate_required("North", "Zone", 3).is_some());
        assert!(validate_required("North", "Zone", 10).is_none());
    }

    #[test]
    fn optional_fields() {
        assert!(validate_optional("", "Remarks", 5).is_none());
        assert!(validate_optional("too long", "Remarks", 5).is_some());
    }

    #[test]
    fn mobile_numbers() {
        assert!(validate_mobile("9999999999").is_none());
        assert!(validate_mobile("+91 98765-43210").is_none());
        assert!(validate_mobile("").is_some());
        assert!(validate_mobile("123").is_some());
        assert!(validate_mobile("call me maybe").is_some());
    }
}
