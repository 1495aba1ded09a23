use std::fmt;

use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::RelayConfig;
use crate::contact::flow::{ContactFlow, SubmissionOutcome, SubmitRejected};
use crate::contact::form::Field;
use crate::contact::relay::{self, RelayError};
use crate::head::{self, PageMeta};

pub enum Msg {
    Update(Field, String),
    Submit,
    Settled(Result<(), RelayError>),
}

pub struct Contact {
    flow: ContactFlow,
    relay: RelayConfig,
    applied_meta: Option<PageMeta>,
}

impl Contact {
    fn page_meta(&self) -> PageMeta {
        match self.flow.outcome() {
            SubmissionOutcome::Sent => PageMeta::sent(),
            _ => PageMeta::contact(),
        }
    }

    fn text_input(&self, ctx: &Context<Self>, field: Field, input_type: &'static str) -> Html {
        let oninput = ctx.link().batch_callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field_update(&input.name(), input.value())
        });

        html! {
            <input
                type={input_type}
                name={field.name()}
                placeholder={field.label()}
                required={field.is_required()}
                value={self.flow.form().get(field).to_string()}
                class={classes!("contact-input", (field != Field::Name && field != Field::Company).then(|| "wide"))}
                oninput={oninput}
            />
        }
    }
}

/// Resolves an input's `name` attribute; unknown names are dropped.
fn field_update(name: &str, value: String) -> Option<Msg> {
    match Field::from_name(name) {
        Some(field) => Some(Msg::Update(field, value)),
        None => {
            warn!("Ignoring input from unknown field {:?}", name);
            None
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        report_alert(window.alert_with_message(message));
    }
}

/// Logs a dialog the browser refused to show. Returns whether it failed.
fn report_alert<E: fmt::Debug>(result: Result<(), E>) -> bool {
    match result {
        Ok(()) => false,
        Err(e) => {
            warn!("Failed to show alert: {:?}", e);
            true
        }
    }
}

impl Component for Contact {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: ContactFlow::new(),
            relay: RelayConfig::from_env(),
            applied_meta: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Update(field, value) => self.flow.update_field(field, value),
            Msg::Submit => match self.flow.begin_submit() {
                Ok(form) => {
                    let relay = self.relay.clone();
                    // Yew drops the message if the page is gone by the time
                    // the relay answers.
                    ctx.link().send_future(async move {
                        Msg::Settled(relay::send(&relay, &form).await)
                    });
                    true
                }
                Err(SubmitRejected::InFlight) => {
                    debug!("Ignoring submit while a message is being sent");
                    false
                }
                Err(e) => {
                    warn!("Contact form not submitted: {}", e);
                    if let SubmitRejected::MissingFields(_) = e {
                        alert("Please fill in your name, email and message.");
                    }
                    false
                }
            },
            Msg::Settled(result) => {
                match &result {
                    Ok(()) => info!("Contact message delivered"),
                    Err(e) => gloo_console::error!(format!("Contact relay failed: {}", e)),
                }
                if let SubmissionOutcome::Failed(message) = self.flow.settle(result) {
                    alert(message);
                }
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }

        let meta = self.page_meta();
        if self.applied_meta.as_ref() != Some(&meta) {
            if let Err(e) = head::apply(&meta) {
                warn!("Failed to apply page metadata for {}: {:?}", meta.title, e);
            }
            self.applied_meta = Some(meta);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if *self.flow.outcome() == SubmissionOutcome::Sent {
            return html! {
                <h1 class="contact-sent">{"Thanks! We'll be in touch shortly."}</h1>
            };
        }

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_message = ctx.link().batch_callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            field_update(&input.name(), input.value())
        });
        let sending = self.flow.is_in_flight();

        html! {
            <section class="contact-page">
                <style>
                    {r#"
                        .contact-page {
                            max-width: 48rem;
                            margin: 0 auto;
                        }
                        .contact-page h1, .contact-sent {
                            text-align: center;
                            font-size: 2.25rem;
                            font-weight: 700;
                            margin-bottom: 1.5rem;
                        }
                        .contact-form {
                            display: flex;
                            flex-direction: column;
                            gap: 1.5rem;
                        }
                        .contact-grid {
                            display: grid;
                            gap: 1.5rem;
                            grid-template-columns: 1fr;
                        }
                        @media (min-width: 768px) {
                            .contact-grid {
                                grid-template-columns: 1fr 1fr;
                            }
                            .contact-input.wide {
                                grid-column: span 2;
                            }
                        }
                        .contact-input, .contact-message {
                            padding: 0.75rem;
                            border: none;
                            border-radius: 0.375rem;
                            color: inherit;
                            background: rgba(255, 255, 255, 0.1);
                            backdrop-filter: blur(12px);
                        }
                        .contact-input::placeholder, .contact-message::placeholder {
                            color: #d1d5db;
                        }
                        .contact-submit {
                            display: block;
                            margin: 0 auto;
                            padding: 0.75rem 1.5rem;
                            font-size: 1.125rem;
                            font-weight: 600;
                            color: white;
                            border: none;
                            border-radius: 0.5rem;
                            background: #3b82f6;
                            cursor: pointer;
                        }
                        .contact-submit:hover {
                            background: #2563eb;
                        }
                        .contact-submit:disabled {
                            opacity: 0.6;
                            cursor: wait;
                        }
                    "#}
                </style>
                <h1>{"Contact Us"}</h1>
                <form class="contact-form" onsubmit={onsubmit}>
                    <div class="contact-grid">
                        { self.text_input(ctx, Field::Name, "text") }
                        { self.text_input(ctx, Field::Company, "text") }
                        { self.text_input(ctx, Field::Email, "email") }
                        { self.text_input(ctx, Field::ProjectType, "text") }
                    </div>
                    <textarea
                        class="contact-message"
                        name={Field::Message.name()}
                        placeholder={Field::Message.label()}
                        required=true
                        rows="6"
                        value={self.flow.form().message.clone()}
                        oninput={on_message}
                    />
                    <button type="submit" class="contact-submit" disabled={sending}>
                        { if sending { "Sending..." } else { "Send Message" } }
                    </button>
                </form>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_names_select_the_field_to_update() {
        assert!(matches!(
            field_update("email", "a@b.com".into()),
            Some(Msg::Update(Field::Email, value)) if value == "a@b.com"
        ));
        assert!(matches!(
            field_update("type", "MLOps".into()),
            Some(Msg::Update(Field::ProjectType, _))
        ));
        assert!(matches!(
            field_update("message", " hi ".into()),
            Some(Msg::Update(Field::Message, value)) if value == " hi "
        ));
    }

    #[test]
    fn unknown_input_names_are_ignored() {
        assert!(field_update("phone", "555".into()).is_none());
        assert!(field_update("", "x".into()).is_none());
    }

    #[test]
    fn blocked_alert_is_reported() {
        assert!(report_alert::<&str>(Err("dialogs are blocked")));
        assert!(!report_alert::<&str>(Ok(())));
    }
}
