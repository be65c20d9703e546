use std::collections::BTreeMap;

use serde::Deserialize;

use crate::QuestionKind;

/// Aggregated results for one question, as returned by
/// `GET /surveys/{id}/results/`.
///
/// The server does all the statistics; this side only renders the
/// numbers. The `results` value is shaped by the question kind, so it
/// deserializes structurally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionResults {
    pub id: u64,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Number of answers received for this question.
    pub total: u64,
    #[serde(default)]
    pub results: ResultData,
}

/// The per-kind aggregation payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResultData {
    /// Star/scale questions: mean score plus a score -> count histogram.
    RatingStats {
        average: f64,
        distribution: BTreeMap<String, u64>,
    },

    /// Choice/multiple questions: option label -> selection count.
    OptionCounts(BTreeMap<String, u64>),

    /// Text/date questions: raw values, newest first, capped server-side.
    Raw(Vec<String>),

    /// The server sends `null` for questions with no aggregation.
    Empty,
}

impl Default for ResultData {
    fn default() -> Self {
        Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_rating_stats() {
        let r: QuestionResults = serde_json::from_str(
            r#"{"id": 1, "text": "Puan?", "type": "star", "total": 3,
                "results": {"average": 4.3, "distribution": {"1": 0, "4": 1, "5": 2}}}"#,
        )
        .unwrap();
        match r.results {
            ResultData::RatingStats { average, ref distribution } => {
                assert_eq!(average, 4.3);
                assert_eq!(distribution.get("5"), Some(&2));
            }
            ref other => panic!("expected rating stats, got {other:?}"),
        }
    }

    #[test]
    fn deserializes_option_counts() {
        let r: QuestionResults = serde_json::from_str(
            r#"{"id": 2, "text": "Memnun musunuz?", "type": "choice", "total": 5,
                "results": {"Evet": 4, "Hayır": 1}}"#,
        )
        .unwrap();
        assert!(matches!(r.results, ResultData::OptionCounts(ref counts) if counts["Evet"] == 4));
    }

    #[test]
    fn deserializes_raw_values_and_null() {
        let r: QuestionResults = serde_json::from_str(
            r#"{"id": 3, "text": "Yorum?", "type": "text", "total": 2,
                "results": ["güzel", "idare eder"]}"#,
        )
        .unwrap();
        assert!(matches!(r.results, ResultData::Raw(ref vs) if vs.len() == 2));

        let empty: QuestionResults = serde_json::from_str(
            r#"{"id": 4, "text": "Tarih?", "type": "date", "total": 0, "results": null}"#,
        )
        .unwrap();
        assert_eq!(empty.results, ResultData::Empty);
    }
}
