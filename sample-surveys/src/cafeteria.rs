use mensa_types::{Question, QuestionKind, Survey};

/// A three-page cafeteria satisfaction survey exercising every question
/// kind, with required questions on the first and last pages.
pub fn cafeteria_satisfaction() -> Survey {
    Survey::new(
        1,
        "Yemekhane Memnuniyet Anketi",
        vec![
            Question::new(1, "Bugünkü yemeği puanlayın", QuestionKind::Star)
                .on_page(1)
                .with_order(1)
                .required(),
            Question::new(2, "Yemekhaneyi hangi öğünde kullandınız?", QuestionKind::Choice)
                .with_options(["Öğle", "Akşam"])
                .on_page(1)
                .with_order(2)
                .required(),
            Question::new(3, "Hangi yemekleri aldınız?", QuestionKind::Multiple)
                .with_options(["Çorba", "Ana Yemek", "Pilav", "Salata", "Tatlı"])
                .on_page(2)
                .with_order(3),
            Question::new(4, "Ziyaret tarihi", QuestionKind::Date)
                .on_page(2)
                .with_order(4),
            Question::new(5, "Genel memnuniyetiniz (1-10)?", QuestionKind::Scale)
                .on_page(3)
                .with_order(5)
                .required(),
            Question::new(6, "Eklemek istediğiniz bir şey var mı?", QuestionKind::Text)
                .on_page(3)
                .with_order(6),
        ],
    )
    .with_description("Haftalık yemekhane memnuniyet ölçümü")
}
