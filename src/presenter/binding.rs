//! Binds form signals to a [`FormView`]

use super::view::{Alert, FormField, FormView, TextColor};
use crate::form::SignupForm;
use crate::signal::{ReadSignal, Subscriptions};
use std::cell::RefCell;
use std::rc::Rc;

/// Keeps a view in sync with a sign-up form for as long as it lives.
///
/// Dropping the presenter cancels every binding.
pub struct Presenter<V: FormView> {
    form: SignupForm,
    view: Rc<RefCell<V>>,
    subscriptions: Subscriptions,
}

impl<V: FormView + 'static> Presenter<V> {
    /// Subscribe the view to the form.
    ///
    /// Every binding replays, so the view reflects the current form state
    /// before this returns.
    pub fn bind(form: SignupForm, view: Rc<RefCell<V>>) -> Self {
        let mut subscriptions = Subscriptions::new();

        {
            let view = Rc::clone(&view);
            form.form_is_valid()
                .subscribe(move |valid| view.borrow_mut().set_sign_up_enabled(*valid))
                .store_in(&mut subscriptions);
        }

        bind_color(&form.email_valid(), FormField::Email, &view, &mut subscriptions);
        bind_color(&form.password_valid(), FormField::Password, &view, &mut subscriptions);
        bind_color(
            &form.password_matches_confirmation(),
            FormField::Confirmation,
            &view,
            &mut subscriptions,
        );

        // Rewrite the email field to its normalized form, but only when it
        // differs from what was typed. The raw input is left untouched.
        {
            let view = Rc::clone(&view);
            let raw = form.email_text();
            form.formatted_email()
                .subscribe_filtered(
                    move |formatted| *formatted != raw.get(),
                    move |formatted| view.borrow_mut().set_email_text(formatted.clone()),
                )
                .store_in(&mut subscriptions);
        }

        tracing::debug!(bindings = subscriptions.len(), "Presenter bound");

        Self {
            form,
            view,
            subscriptions,
        }
    }

    /// Handle a tap on the sign-up button
    pub fn sign_up(&self) {
        tracing::info!(form_is_valid = self.form.form_is_valid().get(), "Sign up tapped");
        self.view.borrow_mut().present_alert(Alert::welcome());
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn view(&self) -> &Rc<RefCell<V>> {
        &self.view
    }
}

fn bind_color<V: FormView + 'static>(
    signal: &ReadSignal<bool>,
    field: FormField,
    view: &Rc<RefCell<V>>,
    subscriptions: &mut Subscriptions,
) {
    let view = Rc::clone(view);
    signal
        .subscribe(move |valid| {
            view.borrow_mut()
                .set_text_color(field, TextColor::for_validity(*valid))
        })
        .store_in(subscriptions);
}
