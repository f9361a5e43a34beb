//! Text rendering of the sign-up widgets

use crate::form::password_length;
use crate::presenter::{Alert, FormField, FormView, TextColor};
use crossterm::style::Stylize;

/// Label column width, wide enough for the longest field label
const LABEL_WIDTH: usize = 18;

/// Rendering switches taken from the user config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
    pub mask_password: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            mask_password: true,
        }
    }
}

/// Widget state of the sign-up screen, kept in memory and printed on demand
#[derive(Debug, Default)]
pub struct ConsoleView {
    email_text: String,
    password_text: String,
    confirmation_text: String,
    agree_terms: bool,
    colors: [TextColor; 3],
    sign_up_enabled: bool,
    alerts: Vec<Alert>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record text typed into a field, as the widget would hold it
    pub fn type_text(&mut self, field: FormField, text: &str) {
        let slot = match field {
            FormField::Email => &mut self.email_text,
            FormField::Password => &mut self.password_text,
            FormField::Confirmation => &mut self.confirmation_text,
        };
        text.clone_into(slot);
    }

    pub fn set_agree_switch(&mut self, on: bool) {
        self.agree_terms = on;
    }

    pub fn field_text(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email_text,
            FormField::Password => &self.password_text,
            FormField::Confirmation => &self.confirmation_text,
        }
    }

    pub fn text_color(&self, field: FormField) -> TextColor {
        self.colors[field_index(field)]
    }

    pub fn is_sign_up_enabled(&self) -> bool {
        self.sign_up_enabled
    }

    /// Remove and return alerts presented since the last call
    pub fn take_alerts(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.alerts)
    }

    /// Render every widget as text, one per line
    pub fn render(&self, options: RenderOptions) -> String {
        let mut lines = Vec::with_capacity(5);
        for field in FormField::ALL {
            let raw = self.field_text(field);
            let text = match field {
                FormField::Email => raw.to_string(),
                _ if options.mask_password => "*".repeat(password_length(raw)),
                _ => raw.to_string(),
            };
            let value = styled(&format!("[{text}]"), self.text_color(field), options);
            lines.push(format!("{:<width$}{value}", field.label(), width = LABEL_WIDTH));
        }

        let switch = if self.agree_terms { "[x]" } else { "[ ]" };
        lines.push(format!("{:<width$}{switch}", "Agree to terms", width = LABEL_WIDTH));

        let button = if self.sign_up_enabled {
            "< Sign Up >".to_string()
        } else if options.color {
            "< Sign Up >".to_string().dark_grey().to_string()
        } else {
            "< Sign Up > (disabled)".to_string()
        };
        lines.push(format!("{:<width$}{button}", "", width = LABEL_WIDTH));

        lines.join("\n")
    }
}

impl FormView for ConsoleView {
    fn set_sign_up_enabled(&mut self, enabled: bool) {
        self.sign_up_enabled = enabled;
    }

    fn set_text_color(&mut self, field: FormField, color: TextColor) {
        self.colors[field_index(field)] = color;
    }

    fn set_email_text(&mut self, text: String) {
        self.email_text = text;
    }

    fn present_alert(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }
}

/// Render an alert as a single boxed line
pub fn render_alert(alert: &Alert) -> String {
    let mut out = format!("[ {} ]", alert.title);
    if let Some(message) = &alert.message {
        out.push(' ');
        out.push_str(message);
    }
    for action in &alert.actions {
        out.push_str(&format!(" ({action})"));
    }
    out
}

fn field_index(field: FormField) -> usize {
    match field {
        FormField::Email => 0,
        FormField::Password => 1,
        FormField::Confirmation => 2,
    }
}

fn styled(text: &str, color: TextColor, options: RenderOptions) -> String {
    match (color, options.color) {
        (TextColor::Label, _) => text.to_string(),
        (TextColor::Error, true) => text.to_string().red().to_string(),
        (TextColor::Error, false) => format!("{text} !"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLAIN: RenderOptions = RenderOptions {
        color: false,
        mask_password: true,
    };

    #[test]
    fn test_new_view_defaults() {
        let view = ConsoleView::new();
        assert!(!view.is_sign_up_enabled());
        for field in FormField::ALL {
            assert_eq!(view.field_text(field), "");
            assert_eq!(view.text_color(field), TextColor::Label);
        }
    }

    #[test]
    fn test_presenter_calls_update_state() {
        let mut view = ConsoleView::new();
        view.type_text(FormField::Email, " A@B.C ");
        view.set_email_text("a@b.c".to_string());
        view.set_text_color(FormField::Password, TextColor::Error);
        view.set_sign_up_enabled(true);

        assert_eq!(view.field_text(FormField::Email), "a@b.c");
        assert_eq!(view.text_color(FormField::Password), TextColor::Error);
        assert_eq!(view.text_color(FormField::Email), TextColor::Label);
        assert!(view.is_sign_up_enabled());
    }

    #[test]
    fn test_alerts_are_drained() {
        let mut view = ConsoleView::new();
        view.present_alert(Alert::welcome());
        assert_eq!(view.take_alerts(), vec![Alert::welcome()]);
        assert!(view.take_alerts().is_empty());
    }

    #[test]
    fn test_render_plain() {
        let mut view = ConsoleView::new();
        view.type_text(FormField::Email, "a@b.c");
        view.type_text(FormField::Password, "secret1");
        view.set_text_color(FormField::Password, TextColor::Error);
        view.set_agree_switch(true);

        let expected = [
            "Email Address     [a@b.c]",
            "Password          [*******] !",
            "Confirm Password  []",
            "Agree to terms    [x]",
            "                  < Sign Up > (disabled)",
        ]
        .join("\n");
        assert_eq!(view.render(PLAIN), expected);
    }

    #[test]
    fn test_render_unmasked() {
        let mut view = ConsoleView::new();
        view.type_text(FormField::Confirmation, "visible");
        let rendered = view.render(RenderOptions {
            color: false,
            mask_password: false,
        });
        assert!(rendered.contains("Confirm Password  [visible]"));
    }

    #[test]
    fn test_render_colored_drops_plain_marker() {
        let mut view = ConsoleView::new();
        view.set_text_color(FormField::Email, TextColor::Error);
        let rendered = view.render(RenderOptions::default());
        assert!(rendered.contains("[]"));
        assert!(!rendered.contains(" !"));
        assert!(!rendered.contains("(disabled)"));
    }

    #[test]
    fn test_render_alert() {
        assert_eq!(render_alert(&Alert::welcome()), "[ Welcome! ] (Dismiss)");
        let alert = Alert {
            title: "Note".to_string(),
            message: Some("hello".to_string()),
            actions: vec![],
        };
        assert_eq!(render_alert(&alert), "[ Note ] hello");
    }
}
