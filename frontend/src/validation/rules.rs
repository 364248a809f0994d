//! Common validation rules shared across form drafts.

use validator::ValidationError;

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Validates admin-managed usernames.
///
/// Requirements:
/// - Only ASCII letters, digits and underscores
/// - 3-20 characters in length
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !(3..=20).contains(&username.len()) {
        return Err(invalid(
            "username_invalid_length",
            "Username must be 3-20 characters",
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(invalid(
            "username_invalid_characters",
            "Username may only contain letters, digits and underscores",
        ));
    }
    Ok(())
}

/// Validates admin password strength.
///
/// Requirements:
/// - At least 8 characters from letters, digits and `@$!%*?&`
/// - At least one lowercase letter, one uppercase letter and one digit
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    const MESSAGE: &str =
        "Password needs 8+ characters with upper and lower case letters and a digit";
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "@$!%*?&".contains(c));
    let strong = password.len() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit());
    if allowed && strong {
        Ok(())
    } else {
        Err(invalid("password_too_weak", MESSAGE))
    }
}

/// Config keys start with a letter and continue with letters, digits or underscores.
pub fn validate_config_key(key: &str) -> Result<(), ValidationError> {
    let mut chars = key.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if starts_with_letter && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(invalid(
            "config_key_invalid",
            "Config key must start with a letter and contain only letters, digits and underscores",
        ))
    }
}

pub fn validate_yes_no(flag: &str) -> Result<(), ValidationError> {
    match flag {
        "Y" | "N" => Ok(()),
        _ => Err(invalid("flag_invalid", "Expected Y or N")),
    }
}

/// Mainland mobile numbers: `1`, then `3`-`9`, then nine digits.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let bytes = phone.as_bytes();
    let valid = bytes.len() == 11
        && bytes[0] == b'1'
        && (b'3'..=b'9').contains(&bytes[1])
        && bytes.iter().all(u8::is_ascii_digit);
    if valid {
        Ok(())
    } else {
        Err(invalid("phone_invalid", "Invalid phone number"))
    }
}

pub fn validate_pay_password(pin: &str) -> Result<(), ValidationError> {
    if pin.len() == 6 && pin.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(invalid("pay_password_invalid", "Pay password must be 6 digits"))
    }
}
