use crate::{Answers, Question};

/// The required questions among `questions` that have no usable answer.
///
/// An answer is usable when it is present and non-blank (non-empty after
/// trimming; ratings above zero). Callers scope `questions` to a single
/// page when gating navigation, or to the whole survey for the edit flow.
pub fn missing_required<'a>(questions: &'a [Question], answers: &Answers) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|q| q.required && !answers.is_answered(q.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionKind;

    #[test]
    fn flags_blank_and_absent_answers() {
        let questions = vec![
            Question::new(1, "Adınız?", QuestionKind::Text).required(),
            Question::new(2, "Yorum?", QuestionKind::Text),
            Question::new(3, "Puan?", QuestionKind::Star).required(),
        ];
        let mut answers = Answers::new();
        answers.set(1, "   ");

        let missing = missing_required(&questions, &answers);
        let ids: Vec<u64> = missing.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3]);

        answers.set(1, "Ali");
        answers.set(3, 4.5);
        assert!(missing_required(&questions, &answers).is_empty());
    }
}
