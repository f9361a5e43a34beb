//! The widget surface a presenter drives

use std::fmt;

/// Text fields whose colour reflects validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Email,
    Password,
    Confirmation,
}

impl FormField {
    pub const ALL: [FormField; 3] = [
        FormField::Email,
        FormField::Password,
        FormField::Confirmation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Email => "Email Address",
            FormField::Password => "Password",
            FormField::Confirmation => "Confirm Password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field text colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextColor {
    /// Regular label colour, used for valid input
    #[default]
    Label,
    /// Red, used for invalid input
    Error,
}

impl TextColor {
    pub fn for_validity(valid: bool) -> Self {
        if valid {
            TextColor::Label
        } else {
            TextColor::Error
        }
    }
}

/// A modal message with dismiss buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: Option<String>,
    pub actions: Vec<String>,
}

impl Alert {
    /// Shown after a successful sign-up tap
    pub fn welcome() -> Self {
        Self {
            title: "Welcome!".to_string(),
            message: None,
            actions: vec!["Dismiss".to_string()],
        }
    }
}

/// Widget operations needed by the sign-up screen
#[cfg_attr(test, mockall::automock)]
pub trait FormView {
    /// Enable or disable the sign-up button
    fn set_sign_up_enabled(&mut self, enabled: bool);

    /// Change a text field's text colour
    fn set_text_color(&mut self, field: FormField, color: TextColor);

    /// Replace the text shown in the email field
    fn set_email_text(&mut self, text: String);

    fn present_alert(&mut self, alert: Alert);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_validity() {
        assert_eq!(TextColor::for_validity(true), TextColor::Label);
        assert_eq!(TextColor::for_validity(false), TextColor::Error);
    }

    #[test]
    fn test_welcome_alert() {
        let alert = Alert::welcome();
        assert_eq!(alert.title, "Welcome!");
        assert!(alert.message.is_none());
        assert_eq!(alert.actions, vec!["Dismiss".to_string()]);
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(FormField::Email.to_string(), "Email Address");
        assert_eq!(FormField::Confirmation.label(), "Confirm Password");
    }
}
