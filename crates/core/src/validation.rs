//! Client-side form checks. They run synchronously before the session
//! component is called, field by field in form order, and stop at the first
//! failure so only one message is surfaced at a time.

use regex::Regex;
use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

/// Form field a validation message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// DOM id of the matching input.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

/// The check that rejected a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Required,
    EmailFormat,
    MinLength,
    Uppercase,
    Digit,
    Match,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldError {
    pub field: Field,
    pub rule: Rule,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    /// Returns the first missing field.
    pub fn validate(&self) -> Result<(), FieldError> {
        required(Field::Email, &self.email, "Email is required")?;
        required(Field::Password, &self.password, "Password is required")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// # Errors
    /// Returns the first failing rule, checking fields in form order.
    pub fn validate(&self) -> Result<(), FieldError> {
        required(Field::FirstName, &self.first_name, "First name is required")?;
        required(Field::LastName, &self.last_name, "Last name is required")?;
        validate_email(&self.email)?;
        required(Field::Password, &self.password, "Password is required")?;
        required(
            Field::ConfirmPassword,
            &self.confirm_password,
            "Please confirm your password",
        )?;
        validate_password(&self.password, &self.confirm_password)
    }
}

/// Presence and format of an email address.
///
/// # Errors
/// Returns a [`Rule::Required`] or [`Rule::EmailFormat`] error.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    required(Field::Email, email, "Email is required")?;

    if Regex::new(EMAIL_PATTERN).is_ok_and(|re| re.is_match(email.trim())) {
        Ok(())
    } else {
        Err(FieldError::new(
            Field::Email,
            Rule::EmailFormat,
            "Invalid email address",
        ))
    }
}

/// Strength rules on their own: length, then uppercase, then digit.
///
/// # Errors
/// Returns the first rule the password breaks.
pub fn validate_password_policy(password: &str) -> Result<(), FieldError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::new(
            Field::Password,
            Rule::MinLength,
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    if !password.chars().any(char::is_uppercase) {
        return Err(FieldError::new(
            Field::Password,
            Rule::Uppercase,
            "Password must contain an uppercase letter",
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(FieldError::new(
            Field::Password,
            Rule::Digit,
            "Password must contain a number",
        ));
    }

    Ok(())
}

/// Strength rules followed by the confirmation check.
///
/// # Errors
/// Returns the first rule the pair breaks.
pub fn validate_password(password: &str, confirmation: &str) -> Result<(), FieldError> {
    validate_password_policy(password)?;

    if password != confirmation {
        return Err(FieldError::new(
            Field::ConfirmPassword,
            Rule::Match,
            "Passwords do not match",
        ));
    }

    Ok(())
}

fn required(field: Field, value: &str, message: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::new(field, Rule::Required, message))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_of(result: Result<(), FieldError>) -> Option<Rule> {
        result.err().map(|err| err.rule)
    }

    fn signup_form(password: &str, confirm: &str) -> SignUpForm {
        SignUpForm {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn short_password_fails_length() {
        assert_eq!(
            rule_of(validate_password("short1", "short1")),
            Some(Rule::MinLength)
        );
    }

    #[test]
    fn lowercase_password_fails_uppercase() {
        assert_eq!(
            rule_of(validate_password("alllower1", "alllower1")),
            Some(Rule::Uppercase)
        );
    }

    #[test]
    fn password_without_digit_fails_digit() {
        assert_eq!(
            rule_of(validate_password("NoDigitsHere", "NoDigitsHere")),
            Some(Rule::Digit)
        );
    }

    #[test]
    fn mismatched_confirmation_fails_match() {
        let err = validate_password("Abc12345", "Abc12346").unwrap_err();
        assert_eq!(err.rule, Rule::Match);
        assert_eq!(err.field, Field::ConfirmPassword);
        assert_eq!(err.message, "Passwords do not match");
    }

    #[test]
    fn strong_matching_password_passes() {
        assert_eq!(validate_password("Abc12345", "Abc12345"), Ok(()));
    }

    #[test]
    fn length_is_checked_before_other_rules() {
        // breaks every rule; only the first is reported
        let err = validate_password("abc", "xyz").unwrap_err();
        assert_eq!(err.rule, Rule::MinLength);
        assert_eq!(err.message, "Password must be at least 8 characters");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(rule_of(validate_password_policy("Ünï1ab")), Some(Rule::MinLength));
        assert_eq!(validate_password_policy("Ünïcode12"), Ok(()));
    }

    #[test]
    fn email_format() {
        assert_eq!(validate_email("jane@example.com"), Ok(()));
        assert_eq!(validate_email("JANE.DOE+tag@Mail.Example.ORG"), Ok(()));
        assert_eq!(rule_of(validate_email("jane@example")), Some(Rule::EmailFormat));
        assert_eq!(rule_of(validate_email("jane example.com")), Some(Rule::EmailFormat));
        assert_eq!(rule_of(validate_email("  ")), Some(Rule::Required));
    }

    #[test]
    fn signup_form_checks_fields_in_order() {
        let mut form = SignUpForm::default();
        let err = form.validate().unwrap_err();
        assert_eq!((err.field, err.rule), (Field::FirstName, Rule::Required));
        assert_eq!(err.message, "First name is required");

        form.first_name = "Jane".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!((err.field, err.rule), (Field::LastName, Rule::Required));

        form.last_name = "Doe".to_string();
        form.email = "bad".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!((err.field, err.rule), (Field::Email, Rule::EmailFormat));

        form.email = "jane@example.com".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!((err.field, err.rule), (Field::Password, Rule::Required));

        form.password = "Abc12345".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!((err.field, err.rule), (Field::ConfirmPassword, Rule::Required));
        assert_eq!(err.message, "Please confirm your password");
    }

    #[test]
    fn signup_form_applies_password_rules() {
        assert_eq!(
            rule_of(signup_form("NoDigitsHere", "NoDigitsHere").validate()),
            Some(Rule::Digit)
        );
        assert_eq!(
            rule_of(signup_form("Abc12345", "abc12345").validate()),
            Some(Rule::Match)
        );
        assert_eq!(signup_form("Abc12345", "Abc12345").validate(), Ok(()));
    }

    #[test]
    fn login_form_requires_both_fields() {
        let form = LoginForm {
            email: " ".to_string(),
            password: "x".to_string(),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.field, Field::Email);
        assert_eq!(err.to_string(), "Email is required");

        let form = LoginForm {
            email: "jane@example.com".to_string(),
            password: String::new(),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.field, Field::Password);

        let form = LoginForm {
            email: "jane@example.com".to_string(),
            password: "x".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn field_ids_match_form_inputs() {
        assert_eq!(Field::FirstName.id(), "firstName");
        assert_eq!(Field::ConfirmPassword.id(), "confirmPassword");
    }
}
