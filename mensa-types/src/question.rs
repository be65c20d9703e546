use serde::{Deserialize, Serialize};

use crate::options;

/// A single question in a survey.
///
/// Delivered by the API nested inside a `Survey`. Delivery order is not
/// guaranteed - sort by [`Question::order`] before grouping into pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique within the survey.
    pub id: u64,

    /// Back-reference to the owning survey, used by admin question CRUD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey: Option<u64>,

    /// The prompt text shown to the user.
    pub text: String,

    /// The kind of question (determines the input widget).
    #[serde(rename = "question_type")]
    pub kind: QuestionKind,

    /// Option labels for choice/multiple questions, normalized to a
    /// trimmed, ordered list regardless of the wire representation.
    #[serde(
        default,
        deserialize_with = "options::deserialize",
        serialize_with = "options::serialize"
    )]
    pub options: Vec<String>,

    /// Sequence of this question within and across pages.
    #[serde(default)]
    pub order: i64,

    /// Declared page, if any. Use [`Question::page`] for the resolved value.
    #[serde(default)]
    pub page_number: Option<u32>,

    /// Whether an answer is mandatory before leaving the page forward.
    #[serde(default)]
    pub required: bool,
}

impl Question {
    /// Create a new question. Defaults: page 1, order 0, not required.
    pub fn new(id: u64, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id,
            survey: None,
            text: text.into(),
            kind,
            options: Vec::new(),
            order: 0,
            page_number: None,
            required: false,
        }
    }

    /// Set the option labels (for choice/multiple questions).
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sequence order.
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Assign the question to a page.
    pub fn on_page(mut self, page: u32) -> Self {
        self.page_number = Some(page);
        self
    }

    /// Mark the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The resolved page this question belongs to.
    ///
    /// A missing, null or zero `page_number` resolves to page 1.
    pub fn page(&self) -> u32 {
        match self.page_number {
            Some(p) if p >= 1 => p,
            _ => 1,
        }
    }
}

/// The kind of question, determining the input widget and value shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free-form single-line text.
    Text,

    /// Single-select over the option labels.
    Choice,

    /// Multi-select over the option labels; the answer is a
    /// comma-joined string of the selected labels.
    Multiple,

    /// Five-star rating with half-point granularity.
    Star,

    /// ISO date string.
    Date,

    /// Discrete 1-10 scale, stored as the number's string form.
    Scale,
}

impl QuestionKind {
    /// Kinds that carry an option list.
    pub fn has_options(self) -> bool {
        matches!(self, Self::Choice | Self::Multiple)
    }

    /// Kinds whose aggregated results are an average plus a distribution.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Star | Self::Scale)
    }

    /// The lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Choice => "choice",
            Self::Multiple => "multiple",
            Self::Star => "star",
            Self::Date => "date",
            Self::Scale => "scale",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_resolution() {
        let q = Question::new(1, "Kampüs?", QuestionKind::Text);
        assert_eq!(q.page(), 1);
        assert_eq!(q.clone().on_page(3).page(), 3);
        // Zero is falsy on the wire and resolves to page 1.
        let mut zero = q;
        zero.page_number = Some(0);
        assert_eq!(zero.page(), 1);
    }

    #[test]
    fn deserializes_delimited_options() {
        let q: Question = serde_json::from_str(
            r#"{"id": 5, "text": "Memnun musunuz?", "question_type": "choice",
                "options": "Evet, Hayır", "order": 2, "page_number": null, "required": true}"#,
        )
        .unwrap();
        assert_eq!(q.kind, QuestionKind::Choice);
        assert_eq!(q.options, vec!["Evet", "Hayır"]);
        assert_eq!(q.page(), 1);
        assert!(q.required);
    }

    #[test]
    fn deserializes_split_options() {
        let q: Question = serde_json::from_str(
            r#"{"id": 6, "text": "Hangileri?", "question_type": "multiple",
                "options": [" Çorba", "Pilav "], "order": 0}"#,
        )
        .unwrap();
        assert_eq!(q.options, vec!["Çorba", "Pilav"]);
        assert!(!q.required);
    }

    #[test]
    fn serializes_options_as_delimited_string() {
        let q = Question::new(7, "Öğün?", QuestionKind::Choice).with_options(["Öğle", "Akşam"]);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["options"], "Öğle, Akşam");
        assert_eq!(json["question_type"], "choice");
    }
}
