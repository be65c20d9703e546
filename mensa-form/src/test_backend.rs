//! Test backend for driving form sessions without user interaction.
//!
//! `TestBackend` fills a session from preset answers keyed by question
//! id, advancing through the real validation gate page by page. A page
//! whose required questions stay unanswered fails the run with the
//! gate's message content.

use std::collections::BTreeMap;

use mensa_types::AnswerValue;

use crate::{FormBackend, FormError, FormOutcome, FormSession};

/// A backend that answers from a preset map.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    answers: BTreeMap<u64, AnswerValue>,
}

/// Error type for [`TestBackend`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TestBackendError {
    #[error("blocked on page {page}: missing {}", missing.join(", "))]
    Blocked { page: u32, missing: Vec<String> },

    #[error("session was already submitted")]
    AlreadySubmitted,
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset an answer for a question.
    pub fn with_answer(mut self, question_id: u64, value: impl Into<AnswerValue>) -> Self {
        self.answers.insert(question_id, value.into());
        self
    }

    /// Preset a text answer.
    pub fn with_text(self, question_id: u64, value: impl Into<String>) -> Self {
        self.with_answer(question_id, AnswerValue::Text(value.into()))
    }

    /// Preset a star rating.
    pub fn with_rating(self, question_id: u64, value: f64) -> Self {
        self.with_answer(question_id, AnswerValue::Rating(value))
    }
}

impl FormBackend for TestBackend {
    type Error = TestBackendError;

    fn run(&self, session: &mut FormSession) -> Result<FormOutcome, Self::Error> {
        loop {
            let ids: Vec<u64> = session.current_questions().iter().map(|q| q.id).collect();
            for id in ids {
                if let Some(value) = self.answers.get(&id) {
                    session
                        .set_answer(id, value.clone())
                        .map_err(|_| TestBackendError::AlreadySubmitted)?;
                }
            }

            if session.is_last_page() {
                return Ok(FormOutcome::Completed);
            }
            match session.next() {
                Ok(()) => {}
                Err(FormError::PageBlocked { missing }) => {
                    return Err(TestBackendError::Blocked {
                        page: session.progress().0,
                        missing,
                    });
                }
                Err(FormError::AlreadySubmitted) => {
                    return Err(TestBackendError::AlreadySubmitted);
                }
            }
        }
    }
}
