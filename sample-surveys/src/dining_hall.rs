use mensa_types::{Question, QuestionKind, Survey};

/// A single-page feedback form delivered with questions out of order and
/// without explicit page numbers - the shape older surveys come in.
pub fn dining_hall_feedback() -> Survey {
    Survey::new(
        2,
        "Yemekhane Geri Bildirimi",
        vec![
            Question::new(11, "Servis hızından memnun musunuz?", QuestionKind::Choice)
                .with_options(["Evet", "Hayır"])
                .with_order(2)
                .required(),
            Question::new(10, "Görüşleriniz", QuestionKind::Text).with_order(1),
        ],
    )
}
