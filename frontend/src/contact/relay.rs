//! Client for the EmailJS transactional-email relay.

use std::future::Future;

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;
use web_sys::AbortController;

use super::form::ContactForm;
use crate::config::{self, RelayConfig};

/// SDK version string the relay expects alongside the credentials.
const LIB_VERSION: &str = "4.4.1";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("failed to encode relay request: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("relay did not answer within {0} ms")]
    Timeout(u32),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    lib_version: &'static str,
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactForm,
}

impl<'a> RelayRequest<'a> {
    pub fn new(config: &'a RelayConfig, form: &'a ContactForm) -> Self {
        Self {
            lib_version: LIB_VERSION,
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: form,
        }
    }
}

/// Resolves `sending` unless `timeout` finishes first, in which case
/// `on_timeout` runs before the error is returned.
async fn within<F, T>(
    sending: F,
    timeout: T,
    on_timeout: impl FnOnce(),
) -> Result<F::Output, RelayError>
where
    F: Future,
    T: Future,
{
    pin_mut!(sending, timeout);
    match select(sending, timeout).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => {
            on_timeout();
            Err(RelayError::Timeout(config::RELAY_TIMEOUT_MS))
        }
    }
}

/// Makes exactly one delivery attempt. A timed-out attempt aborts the fetch.
pub async fn send(config: &RelayConfig, form: &ContactForm) -> Result<(), RelayError> {
    let controller =
        AbortController::new().map_err(|e| RelayError::Network(format!("{:?}", e)))?;
    let signal = controller.signal();

    let request = Request::post(config::get_relay_url())
        .abort_signal(Some(&signal))
        .json(&RelayRequest::new(config, form))
        .map_err(|e| RelayError::Encode(e.to_string()))?;

    let response = within(
        request.send(),
        TimeoutFuture::new(config::RELAY_TIMEOUT_MS),
        || controller.abort(),
    )
    .await?
    .map_err(|e| RelayError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::Field;
    use futures::executor::block_on;
    use futures::future::{pending, ready};
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn request_carries_credentials_and_full_form() {
        let config = RelayConfig {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "pk".into(),
        };
        let mut form = ContactForm::default();
        form.update_field(Field::Name, "Jane");
        form.update_field(Field::Email, "a@b.com");
        form.update_field(Field::Message, "hi");

        let body = serde_json::to_value(RelayRequest::new(&config, &form)).unwrap();
        assert_eq!(
            body,
            json!({
                "lib_version": LIB_VERSION,
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pk",
                "template_params": {
                    "name": "Jane",
                    "company": "",
                    "email": "a@b.com",
                    "type": "",
                    "message": "hi",
                },
            })
        );
    }

    #[test]
    fn rejection_message_includes_status() {
        let err = RelayError::Rejected {
            status: 412,
            body: "The Public Key is invalid".into(),
        };
        assert_eq!(
            err.to_string(),
            "relay rejected the message (412): The Public Key is invalid"
        );
    }

    #[test]
    fn timeout_aborts_the_outstanding_send() {
        let aborted = Cell::new(false);
        let result = block_on(within(pending::<()>(), ready(()), || aborted.set(true)));

        assert_eq!(result, Err(RelayError::Timeout(config::RELAY_TIMEOUT_MS)));
        assert!(aborted.get());
    }

    #[test]
    fn answer_before_timeout_leaves_send_alone() {
        let aborted = Cell::new(false);
        let result = block_on(within(ready(204u16), pending::<()>(), || aborted.set(true)));

        assert_eq!(result, Ok(204));
        assert!(!aborted.get());
    }
}
