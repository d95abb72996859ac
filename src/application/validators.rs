use validator::ValidateEmail;

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Free-text form fields must contain something other than whitespace.
pub fn is_non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}
