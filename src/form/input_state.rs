//! Raw form input and the values derived from it

use super::{
    format_email, is_password_valid_and_confirmed, is_valid_email, is_valid_password,
    password_length, password_matches,
};
use std::fmt;

/// The four raw inputs of the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Email,
    Password,
    Confirmation,
    AgreeTerms,
}

impl InputField {
    #[cfg(test)]
    pub const ALL: [InputField; 4] = [
        InputField::Email,
        InputField::Password,
        InputField::Confirmation,
        InputField::AgreeTerms,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InputField::Email => "email",
            InputField::Password => "password",
            InputField::Confirmation => "confirmation",
            InputField::AgreeTerms => "agree_terms",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The only mutable state of a form session
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawInputState {
    pub email_text: String,
    pub password_text: String,
    pub confirmation_text: String,
    pub agree_terms: bool,
}

// Password contents stay out of logs and panic messages
impl fmt::Debug for RawInputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawInputState")
            .field("email_text", &self.email_text)
            .field("password_len", &password_length(&self.password_text))
            .field("confirmation_len", &password_length(&self.confirmation_text))
            .field("agree_terms", &self.agree_terms)
            .finish()
    }
}

/// Every derived value of the form, computed from one [`RawInputState`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub formatted_email: String,
    pub email_valid: bool,
    pub password_valid: bool,
    pub password_matches_confirmation: bool,
    pub password_valid_and_confirmed: bool,
    pub form_is_valid: bool,
}

impl FormSnapshot {
    pub fn derive(state: &RawInputState) -> Self {
        let formatted_email = format_email(&state.email_text);
        let email_valid = is_valid_email(&formatted_email);
        let password_valid = is_valid_password(&state.password_text);
        let password_matches_confirmation =
            password_matches(&state.password_text, &state.confirmation_text);
        let password_valid_and_confirmed =
            is_password_valid_and_confirmed(&state.password_text, &state.confirmation_text);
        let form_is_valid = email_valid && password_valid_and_confirmed && state.agree_terms;

        Self {
            formatted_email,
            email_valid,
            password_valid,
            password_matches_confirmation,
            password_valid_and_confirmed,
            form_is_valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(email: &str, password: &str, confirmation: &str, agree: bool) -> RawInputState {
        RawInputState {
            email_text: email.to_string(),
            password_text: password.to_string(),
            confirmation_text: confirmation.to_string(),
            agree_terms: agree,
        }
    }

    #[test]
    fn test_default_state_is_invalid() {
        let snapshot = FormSnapshot::derive(&RawInputState::default());
        assert_eq!(
            snapshot,
            FormSnapshot {
                formatted_email: String::new(),
                email_valid: false,
                password_valid: false,
                password_matches_confirmation: true,
                password_valid_and_confirmed: false,
                form_is_valid: false,
            }
        );
    }

    #[test]
    fn test_fully_valid_state() {
        let snapshot = FormSnapshot::derive(&state(
            " User@Example.COM ",
            "goodpass1",
            "goodpass1",
            true,
        ));
        assert_eq!(
            snapshot,
            FormSnapshot {
                formatted_email: "user@example.com".to_string(),
                email_valid: true,
                password_valid: true,
                password_matches_confirmation: true,
                password_valid_and_confirmed: true,
                form_is_valid: true,
            }
        );
    }

    #[test]
    fn test_form_valid_is_and_of_parts() {
        let emails = ["", "a@b.c", "nope"];
        let passwords = ["", "password", "goodpass1", "short"];
        let confirmations = ["", "goodpass1", "password"];
        for email in emails {
            for password in passwords {
                for confirmation in confirmations {
                    for agree in [false, true] {
                        let s = FormSnapshot::derive(&state(email, password, confirmation, agree));
                        assert_eq!(
                            s.form_is_valid,
                            s.email_valid && s.password_valid_and_confirmed && agree
                        );
                        assert_eq!(
                            s.password_valid_and_confirmed,
                            s.password_valid && s.password_matches_confirmation
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_debug_hides_password() {
        let debug_str = format!("{:?}", state("a@b.c", "secret-pass", "secret-pass", false));
        assert!(debug_str.contains("RawInputState"));
        assert!(!debug_str.contains("secret-pass"));
    }

    #[test]
    fn test_field_names() {
        let names: Vec<_> = InputField::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(names, vec!["email", "password", "confirmation", "agree_terms"]);
    }
}
