use std::collections::BTreeMap;

/// A single answer value as held by the store.
///
/// Widgets decide the shape they want held: plain strings for text,
/// choice, date and scale (scale keeps the number's string form), a
/// comma-joined string for multi-select, and a numeric rating for stars.
/// Nothing coerces at write time - stringification happens once, when
/// the wire payload is built.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    Text(String),
    Rating(f64),
}

impl AnswerValue {
    /// Try to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Rating(_) => None,
        }
    }

    /// Try to get this value as a rating.
    pub fn as_rating(&self) -> Option<f64> {
        match self {
            Self::Rating(r) => Some(*r),
            Self::Text(_) => None,
        }
    }

    /// Whether this value counts as unanswered for a required check:
    /// empty or whitespace-only text, or a rating demoted to zero.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Rating(r) => *r <= 0.0,
        }
    }

    /// The submitted string form. Integral ratings print without a
    /// fractional part (`4.0` becomes `"4"`, `3.5` stays `"3.5"`).
    pub fn to_wire(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Rating(r) if r.fract() == 0.0 => format!("{}", *r as i64),
            Self::Rating(r) => format!("{r}"),
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for AnswerValue {
    fn from(r: f64) -> Self {
        Self::Rating(r)
    }
}

/// The in-memory answer store: question id to current value.
///
/// At most one entry per question, last write wins. Created empty when a
/// form mounts and discarded after submission - never partially persisted.
/// Keys are ordered so the submitted payload is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: BTreeMap<u64, AnswerValue>,
}

impl Answers {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the answer for a question.
    pub fn set(&mut self, question_id: u64, value: impl Into<AnswerValue>) {
        self.values.insert(question_id, value.into());
    }

    /// Get the current answer for a question.
    pub fn get(&self, question_id: u64) -> Option<&AnswerValue> {
        self.values.get(&question_id)
    }

    /// Whether a question has a non-blank answer.
    pub fn is_answered(&self, question_id: u64) -> bool {
        self.get(question_id).is_some_and(|v| !v.is_blank())
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, question_id: u64) -> Option<AnswerValue> {
        self.values.remove(&question_id)
    }

    /// Iterate over all answers in ascending question-id order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &AnswerValue)> {
        self.values.iter().map(|(id, v)| (*id, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(u64, AnswerValue)> for Answers {
    fn from_iter<I: IntoIterator<Item = (u64, AnswerValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut answers = Answers::new();
        answers.set(1, "ilk");
        answers.set(1, "son");
        assert_eq!(answers.get(1).and_then(AnswerValue::as_str), Some("son"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn blank_detection() {
        assert!(AnswerValue::Text("   ".into()).is_blank());
        assert!(AnswerValue::Rating(0.0).is_blank());
        assert!(!AnswerValue::Text("ok".into()).is_blank());
        assert!(!AnswerValue::Rating(0.5).is_blank());
    }

    #[test]
    fn wire_form_of_ratings() {
        assert_eq!(AnswerValue::Rating(4.0).to_wire(), "4");
        assert_eq!(AnswerValue::Rating(3.5).to_wire(), "3.5");
        assert_eq!(AnswerValue::Text("7".into()).to_wire(), "7");
    }
}
