//! Console session: reads commands, feeds the form, prints the widgets

use super::command::{Command, HELP};
use super::view::{render_alert, ConsoleView, RenderOptions};
use crate::config::FormConfig;
use crate::form::SignupForm;
use crate::presenter::{FormField, Presenter};
use anyhow::Result;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

/// One sign-up session driven from text input
pub struct ConsoleApp {
    presenter: Presenter<ConsoleView>,
    config: FormConfig,
    quit: bool,
}

impl ConsoleApp {
    pub fn new(config: FormConfig) -> Self {
        let view = Rc::new(RefCell::new(ConsoleView::new()));
        let presenter = Presenter::bind(SignupForm::new(), view);
        Self {
            presenter,
            config,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn form(&self) -> &SignupForm {
        self.presenter.form()
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            color: self.config.color(),
            mask_password: self.config.mask_password(),
        }
    }

    /// Read commands until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        writeln!(output, "Sign up (type `help` for commands)")?;
        self.show(output)?;

        for line in input.lines() {
            self.handle_line(&line?, output)?;
            if self.should_quit() {
                break;
            }
        }

        tracing::info!(
            form_is_valid = self.form().form_is_valid().get(),
            "Session ended"
        );
        Ok(())
    }

    /// Handle one line of input; malformed commands are reported, not fatal
    pub fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> Result<()> {
        match Command::parse(line) {
            Ok(Some(command)) => self.handle_command(command, output),
            Ok(None) => Ok(()),
            Err(err) => {
                tracing::debug!(%err, "Rejected command");
                writeln!(output, "error: {err}")?;
                Ok(())
            }
        }
    }

    pub fn handle_command<W: Write>(&mut self, command: Command, output: &mut W) -> Result<()> {
        match command {
            Command::Email(text) => {
                self.type_text(FormField::Email, &text);
                self.form().set_email(text);
                self.show_if_configured(output)?;
            }
            Command::Password(text) => {
                self.type_text(FormField::Password, &text);
                self.form().set_password(text);
                self.show_if_configured(output)?;
            }
            Command::Confirm(text) => {
                self.type_text(FormField::Confirmation, &text);
                self.form().set_confirmation(text);
                self.show_if_configured(output)?;
            }
            Command::Agree(on) => {
                self.presenter.view().borrow_mut().set_agree_switch(on);
                self.form().set_agree_terms(on);
                self.show_if_configured(output)?;
            }
            Command::Submit => self.submit(output)?,
            Command::Show => self.show(output)?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => self.quit = true,
        }
        Ok(())
    }

    fn type_text(&self, field: FormField, text: &str) {
        // The view borrow must end before the form notifies the presenter
        self.presenter.view().borrow_mut().type_text(field, text);
    }

    fn submit<W: Write>(&mut self, output: &mut W) -> Result<()> {
        let enabled = self.presenter.view().borrow().is_sign_up_enabled();
        if !enabled {
            tracing::debug!("Sign up ignored while disabled");
            writeln!(output, "Sign Up is disabled")?;
            return Ok(());
        }

        self.presenter.sign_up();
        let alerts = self.presenter.view().borrow_mut().take_alerts();
        for alert in alerts {
            writeln!(output, "{}", render_alert(&alert))?;
        }
        Ok(())
    }

    fn show<W: Write>(&self, output: &mut W) -> Result<()> {
        let rendered = self.presenter.view().borrow().render(self.render_options());
        writeln!(output, "{rendered}")?;
        Ok(())
    }

    fn show_if_configured<W: Write>(&self, output: &mut W) -> Result<()> {
        if self.config.show_after_each_command() {
            self.show(output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::TextColor;

    fn quiet_config() -> FormConfig {
        FormConfig {
            color: Some(false),
            show_after_each_command: Some(false),
            ..Default::default()
        }
    }

    fn feed(app: &mut ConsoleApp, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            app.handle_line(line, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_new_app_is_invalid_and_disabled() {
        let app = ConsoleApp::new(quiet_config());
        assert!(!app.should_quit());
        assert!(!app.form().form_is_valid().get());
        assert!(!app.presenter.view().borrow().is_sign_up_enabled());
    }

    #[test]
    fn test_full_session_enables_and_submits() {
        let mut app = ConsoleApp::new(quiet_config());
        let out = feed(
            &mut app,
            &[
                "email  User@Example.COM ",
                "password goodpass1",
                "confirm goodpass1",
                "agree on",
                "submit",
            ],
        );

        assert!(app.form().form_is_valid().get());
        let view = app.presenter.view().borrow();
        assert!(view.is_sign_up_enabled());
        assert_eq!(view.field_text(FormField::Email), "user@example.com");
        assert_eq!(out, "[ Welcome! ] (Dismiss)\n");
    }

    #[test]
    fn test_submit_while_disabled_is_refused() {
        let mut app = ConsoleApp::new(quiet_config());
        let out = feed(&mut app, &["email a@b.c", "submit"]);
        assert_eq!(out, "Sign Up is disabled\n");
    }

    #[test]
    fn test_bad_command_is_reported_and_session_continues() {
        let mut app = ConsoleApp::new(quiet_config());
        let out = feed(&mut app, &["agree sometimes", "email a@b.c"]);
        assert_eq!(out, "error: invalid value `sometimes`, expected on or off\n");
        assert!(app.form().email_valid().get());
    }

    #[test]
    fn test_invalid_password_is_colored_as_error() {
        let mut app = ConsoleApp::new(quiet_config());
        feed(&mut app, &["password password", "confirm password"]);
        let view = app.presenter.view().borrow();
        assert_eq!(view.text_color(FormField::Password), TextColor::Error);
        assert_eq!(view.text_color(FormField::Confirmation), TextColor::Label);
    }

    #[test]
    fn test_quit_stops_run() {
        let mut app = ConsoleApp::new(quiet_config());
        let input = "email a@b.c\nquit\nemail changed@after.quit\n";
        let mut out = Vec::new();
        app.run(input.as_bytes(), &mut out).unwrap();
        assert!(app.should_quit());
        assert_eq!(app.form().email_text().get(), "a@b.c");
    }

    #[test]
    fn test_run_prints_form_after_input_when_configured() {
        let mut app = ConsoleApp::new(FormConfig {
            color: Some(false),
            ..Default::default()
        });
        let mut out = Vec::new();
        app.run("agree yes\n".as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Sign up (type `help` for commands)\n"));
        assert!(out.contains("Agree to terms    [ ]"));
        assert!(out.contains("Agree to terms    [x]"));
    }

    #[test]
    fn test_help_lists_commands() {
        let mut app = ConsoleApp::new(quiet_config());
        let out = feed(&mut app, &["help"]);
        assert!(out.contains("agree on|off"));
        assert!(out.contains("submit"));
    }
}
