use serde::Serialize;

use crate::Answers;

/// One submitted answer on the wire. The value is always a string,
/// whatever shape the store held.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerItem {
    pub question: u64,
    pub value: String,
}

/// The request body for `POST /responses/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsePayload {
    pub survey: u64,
    pub answers: Vec<AnswerItem>,
}

impl ResponsePayload {
    /// Serialize the answer store, stringifying every value. Items come
    /// out in ascending question-id order.
    pub fn from_answers(survey: u64, answers: &Answers) -> Self {
        Self {
            survey,
            answers: collect_items(answers),
        }
    }
}

/// The request body for `PUT /responses/{id}/` - same shape minus the
/// survey reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePayload {
    pub answers: Vec<AnswerItem>,
}

impl UpdatePayload {
    pub fn from_answers(answers: &Answers) -> Self {
        Self {
            answers: collect_items(answers),
        }
    }
}

fn collect_items(answers: &Answers) -> Vec<AnswerItem> {
    answers
        .iter()
        .map(|(question, value)| AnswerItem {
            question,
            value: value.to_wire(),
        })
        .collect()
}
