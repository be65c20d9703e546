//! Per-kind widget behaviors.
//!
//! Each question kind has one widget implementing [`QuestionWidget`]:
//! apply an input event to the current stored value and produce the new
//! value. Call sites pick the widget with a single [`widget_for`]
//! lookup instead of branching on kind strings.

use mensa_types::{AnswerValue, QuestionKind, options};

/// An input event from whatever surface is rendering the form.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetInput {
    /// Typed text (text questions).
    Text(String),

    /// A selected option label (choice questions).
    Pick(String),

    /// An option label toggled on or off (multiple questions).
    Toggle(String),

    /// A clicked star, 1..=5 (star questions).
    Star(u8),

    /// An ISO date string (date questions).
    Date(String),

    /// A selected scale point, 1..=10 (scale questions).
    Scale(u8),
}

/// A question kind's value behavior.
pub trait QuestionWidget {
    /// Apply `input` to `current`, returning the value to store.
    /// `None` means the input doesn't fit this widget and is ignored.
    fn apply(&self, current: Option<&AnswerValue>, input: &WidgetInput) -> Option<AnswerValue>;
}

/// The widget for a question kind.
pub fn widget_for(kind: QuestionKind) -> &'static dyn QuestionWidget {
    match kind {
        QuestionKind::Text => &TextWidget,
        QuestionKind::Choice => &ChoiceWidget,
        QuestionKind::Multiple => &MultipleWidget,
        QuestionKind::Star => &StarWidget,
        QuestionKind::Date => &DateWidget,
        QuestionKind::Scale => &ScaleWidget,
    }
}

/// String passthrough.
struct TextWidget;

impl QuestionWidget for TextWidget {
    fn apply(&self, _current: Option<&AnswerValue>, input: &WidgetInput) -> Option<AnswerValue> {
        let WidgetInput::Text(s) = input else {
            return None;
        };
        Some(AnswerValue::Text(s.clone()))
    }
}

/// Single-select: the stored value is the trimmed option label.
struct ChoiceWidget;

impl QuestionWidget for ChoiceWidget {
    fn apply(&self, _current: Option<&AnswerValue>, input: &WidgetInput) -> Option<AnswerValue> {
        let WidgetInput::Pick(label) = input else {
            return None;
        };
        Some(AnswerValue::Text(label.trim().to_string()))
    }
}

/// Multi-select held as a comma-joined string of selected labels.
///
/// Toggling re-derives inclusion by trimmed label, not by index, so
/// duplicate-labeled options are indistinguishable.
struct MultipleWidget;

impl QuestionWidget for MultipleWidget {
    fn apply(&self, current: Option<&AnswerValue>, input: &WidgetInput) -> Option<AnswerValue> {
        let WidgetInput::Toggle(label) = input else {
            return None;
        };
        let label = label.trim();
        let mut selected = current
            .and_then(AnswerValue::as_str)
            .map(options::split)
            .unwrap_or_default();
        if let Some(pos) = selected.iter().position(|s| s == label) {
            selected.remove(pos);
        } else {
            selected.push(label.to_string());
        }
        Some(AnswerValue::Text(options::join(&selected)))
    }
}

/// Five stars with half-point granularity.
///
/// Clicking star n when the value is already n demotes to n - 0.5;
/// clicking again at n - 0.5 drops to the previous whole star; any
/// other click sets the full value n.
struct StarWidget;

impl QuestionWidget for StarWidget {
    fn apply(&self, current: Option<&AnswerValue>, input: &WidgetInput) -> Option<AnswerValue> {
        let WidgetInput::Star(star) = input else {
            return None;
        };
        let star = f64::from((*star).clamp(1, 5));
        let value = current.and_then(AnswerValue::as_rating).unwrap_or(0.0);
        let next = if value == star {
            star - 0.5
        } else if value == star - 0.5 {
            star - 1.0
        } else {
            star
        };
        Some(AnswerValue::Rating(next.clamp(0.0, 5.0)))
    }
}

/// ISO date string passthrough.
struct DateWidget;

impl QuestionWidget for DateWidget {
    fn apply(&self, _current: Option<&AnswerValue>, input: &WidgetInput) -> Option<AnswerValue> {
        let WidgetInput::Date(s) = input else {
            return None;
        };
        Some(AnswerValue::Text(s.clone()))
    }
}

/// Discrete 1-10 single-select, stored as the number's string form.
struct ScaleWidget;

impl QuestionWidget for ScaleWidget {
    fn apply(&self, _current: Option<&AnswerValue>, input: &WidgetInput) -> Option<AnswerValue> {
        let WidgetInput::Scale(n) = input else {
            return None;
        };
        Some(AnswerValue::Text((*n).clamp(1, 10).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(kind: QuestionKind, current: Option<&AnswerValue>, input: WidgetInput) -> AnswerValue {
        widget_for(kind).apply(current, &input).expect("applicable input")
    }

    #[test]
    fn choice_trims_label() {
        let v = apply(QuestionKind::Choice, None, WidgetInput::Pick(" Evet ".into()));
        assert_eq!(v, AnswerValue::Text("Evet".into()));
    }

    #[test]
    fn double_toggle_is_idempotent() {
        let start = AnswerValue::Text("Çorba, Pilav".into());
        let once = apply(
            QuestionKind::Multiple,
            Some(&start),
            WidgetInput::Toggle("Salata".into()),
        );
        assert_eq!(once, AnswerValue::Text("Çorba, Pilav, Salata".into()));
        let twice = apply(
            QuestionKind::Multiple,
            Some(&once),
            WidgetInput::Toggle("Salata".into()),
        );
        assert_eq!(twice, start);
    }

    #[test]
    fn toggle_starts_from_empty() {
        let v = apply(QuestionKind::Multiple, None, WidgetInput::Toggle("Çorba".into()));
        assert_eq!(v, AnswerValue::Text("Çorba".into()));
    }

    #[test]
    fn star_demotes_by_half_then_whole() {
        let full = apply(QuestionKind::Star, None, WidgetInput::Star(3));
        assert_eq!(full, AnswerValue::Rating(3.0));
        let half = apply(QuestionKind::Star, Some(&full), WidgetInput::Star(3));
        assert_eq!(half, AnswerValue::Rating(2.5));
        let prev = apply(QuestionKind::Star, Some(&half), WidgetInput::Star(3));
        assert_eq!(prev, AnswerValue::Rating(2.0));
    }

    #[test]
    fn first_star_clears_to_zero() {
        let half = AnswerValue::Rating(0.5);
        let v = apply(QuestionKind::Star, Some(&half), WidgetInput::Star(1));
        assert_eq!(v, AnswerValue::Rating(0.0));
        assert!(v.is_blank());
    }

    #[test]
    fn scale_stores_string_form() {
        let v = apply(QuestionKind::Scale, None, WidgetInput::Scale(7));
        assert_eq!(v, AnswerValue::Text("7".into()));
    }

    #[test]
    fn scale_clamps_out_of_range_points() {
        let low = apply(QuestionKind::Scale, None, WidgetInput::Scale(0));
        assert_eq!(low, AnswerValue::Text("1".into()));
        let high = apply(QuestionKind::Scale, None, WidgetInput::Scale(200));
        assert_eq!(high, AnswerValue::Text("10".into()));
    }

    #[test]
    fn mismatched_input_is_ignored() {
        assert!(
            widget_for(QuestionKind::Text)
                .apply(None, &WidgetInput::Star(4))
                .is_none()
        );
    }
}
