//! Submission state for the contact page, independent of how the request is
//! actually sent.

use thiserror::Error;

use super::form::{ContactForm, Field};

/// The only text a visitor sees when delivery fails, whatever the cause.
pub const FAILURE_MESSAGE: &str =
    "There was a problem sending your message. Please try again later.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Idle,
    Sent,
    Failed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the message has already been sent")]
    AlreadySent,
    #[error("missing required fields: {0:?}")]
    MissingFields(Vec<Field>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFlow {
    form: ContactForm,
    outcome: SubmissionOutcome,
    in_flight: bool,
}

impl Default for ContactFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFlow {
    pub fn new() -> Self {
        Self {
            form: ContactForm::default(),
            outcome: SubmissionOutcome::Idle,
            in_flight: false,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Returns false when the change was ignored because the form is gone.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.outcome == SubmissionOutcome::Sent {
            return false;
        }
        self.form.update_field(field, value);
        true
    }

    /// Marks a request as outstanding and hands back the snapshot to send.
    pub fn begin_submit(&mut self) -> Result<ContactForm, SubmitRejected> {
        if self.outcome == SubmissionOutcome::Sent {
            return Err(SubmitRejected::AlreadySent);
        }
        if self.in_flight {
            return Err(SubmitRejected::InFlight);
        }
        let missing = self.form.missing_required();
        if !missing.is_empty() {
            return Err(SubmitRejected::MissingFields(missing));
        }

        self.outcome = SubmissionOutcome::Idle;
        self.in_flight = true;
        Ok(self.form.clone())
    }

    /// Records the result of the outstanding request. Any error collapses to
    /// the generic failure; results with nothing outstanding are dropped.
    pub fn settle<E>(&mut self, result: Result<(), E>) -> &SubmissionOutcome {
        if !self.in_flight {
            return &self.outcome;
        }
        self.in_flight = false;
        self.outcome = match result {
            Ok(()) => SubmissionOutcome::Sent,
            Err(_) => SubmissionOutcome::Failed(FAILURE_MESSAGE.to_string()),
        };
        &self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::relay::RelayError;

    fn jane() -> ContactFlow {
        let mut flow = ContactFlow::new();
        flow.update_field(Field::Name, "Jane");
        flow.update_field(Field::Company, "");
        flow.update_field(Field::Email, "a@b.com");
        flow.update_field(Field::ProjectType, "");
        flow.update_field(Field::Message, "hi");
        flow
    }

    #[test]
    fn successful_relay_marks_sent_once() {
        let mut flow = jane();
        let snapshot = flow.begin_submit().unwrap();
        assert_eq!(snapshot.name, "Jane");
        assert!(flow.is_in_flight());

        assert_eq!(
            flow.settle::<RelayError>(Ok(())),
            &SubmissionOutcome::Sent
        );
        assert!(!flow.is_in_flight());

        // The form never reopens.
        assert_eq!(flow.begin_submit(), Err(SubmitRejected::AlreadySent));
        assert!(!flow.update_field(Field::Message, "again"));
        assert_eq!(flow.form().message, "hi");

        // A late duplicate result changes nothing.
        flow.settle(Err(RelayError::Network("late".into())));
        assert_eq!(flow.outcome(), &SubmissionOutcome::Sent);
    }

    #[test]
    fn failing_relay_keeps_values_and_allows_retry() {
        let mut flow = jane();
        let before = flow.form().clone();
        flow.begin_submit().unwrap();

        let outcome = flow.settle(Err(RelayError::Rejected {
            status: 400,
            body: "bad template".into(),
        }));
        assert_eq!(
            outcome,
            &SubmissionOutcome::Failed(FAILURE_MESSAGE.to_string())
        );
        assert_eq!(flow.form(), &before);

        let retry = flow.begin_submit().unwrap();
        assert_eq!(retry, before);
        assert_eq!(flow.outcome(), &SubmissionOutcome::Idle);
    }

    #[test]
    fn every_failure_cause_reads_the_same() {
        let causes = [
            RelayError::Network("offline".into()),
            RelayError::Timeout(15_000),
            RelayError::Encode("nope".into()),
        ];
        for cause in causes {
            let mut flow = jane();
            flow.begin_submit().unwrap();
            assert_eq!(
                flow.settle(Err(cause)),
                &SubmissionOutcome::Failed(FAILURE_MESSAGE.to_string())
            );
        }
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut flow = jane();
        flow.begin_submit().unwrap();
        assert_eq!(flow.begin_submit(), Err(SubmitRejected::InFlight));

        flow.settle(Err(RelayError::Timeout(15_000)));
        assert!(flow.begin_submit().is_ok());
    }

    #[test]
    fn empty_required_fields_block_submission() {
        let mut flow = ContactFlow::new();
        flow.update_field(Field::Name, "Jane");
        assert_eq!(
            flow.begin_submit(),
            Err(SubmitRejected::MissingFields(vec![Field::Email, Field::Message]))
        );
        assert!(!flow.is_in_flight());
    }

    #[test]
    fn whitespace_message_is_forwarded_as_is() {
        let mut flow = jane();
        flow.update_field(Field::Message, "   ");

        let snapshot = flow.begin_submit().unwrap();
        assert_eq!(snapshot.message, "   ");
        assert!(flow.is_in_flight());
    }

    #[test]
    fn edits_while_failed_are_kept() {
        let mut flow = jane();
        flow.begin_submit().unwrap();
        flow.settle(Err(RelayError::Network("offline".into())));

        assert!(flow.update_field(Field::Company, "Acme"));
        assert_eq!(flow.begin_submit().unwrap().company, "Acme");
    }
}
