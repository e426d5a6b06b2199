/// Both roles sign in with the same form: officers type their badge number,
/// drivers their email address.
pub fn validate_credentials(identifier: &str, password: &str) -> Result<(), String> {
    if identifier.trim().is_empty() {
        return Err("Enter your email or badge number".into());
    }
    if password.is_empty() {
        return Err("Enter your password".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_identifier() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("   ", "secret").is_err());
    }

    #[test]
    fn rejects_empty_password() {
        assert!(validate_credentials("badge1", "").is_err());
    }

    #[test]
    fn accepts_badge_or_email_identifiers() {
        assert!(validate_credentials("badge1", "secret").is_ok());
        assert!(validate_credentials("sami@example.dz", "secret").is_ok());
    }
}
