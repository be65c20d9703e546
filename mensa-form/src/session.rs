use mensa_types::{
    Answers, AnswerValue, Pages, Question, ResponsePayload, Survey, UpdatePayload,
    missing_required,
};

use crate::{WidgetInput, widget_for};

/// Errors surfaced by the form session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    /// Required questions on the current page are unanswered; navigation
    /// stays put. The message lists each missing question's text.
    #[error("please answer the required questions first: {}", missing.join(", "))]
    PageBlocked { missing: Vec<String> },

    /// The session reached its terminal submitted state; a fresh session
    /// is needed to answer again.
    #[error("this survey response was already submitted")]
    AlreadySubmitted,
}

/// One user's pass through a survey form.
///
/// Created empty at mount, mutated while the user edits, and replaced by
/// the one-way submitted flag after a successful submission. The current
/// page starts at 1; the visible question subset is fully determined by
/// the page counter.
#[derive(Debug, Clone)]
pub struct FormSession {
    survey_id: u64,
    title: String,
    description: String,
    pages: Pages,
    answers: Answers,
    current_page: u32,
    submitted: bool,
}

impl FormSession {
    /// Start a fresh session for a survey.
    pub fn new(survey: Survey) -> Self {
        Self::with_answers(survey, Answers::new())
    }

    /// Start a session seeded from an existing response, for the edit
    /// flow. Use [`FormSession::update_payload`] when done - unlike a
    /// first submission it validates every question.
    pub fn for_edit(survey: Survey, answers: Answers) -> Self {
        Self::with_answers(survey, answers)
    }

    fn with_answers(survey: Survey, answers: Answers) -> Self {
        Self {
            survey_id: survey.id,
            title: survey.title,
            description: survey.description,
            pages: Pages::group(survey.questions),
            answers,
            current_page: 1,
            submitted: false,
        }
    }

    pub fn survey_id(&self) -> u64 {
        self.survey_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `(current page, max page)` for progress display.
    pub fn progress(&self) -> (u32, u32) {
        (self.current_page, self.pages.max_page())
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.pages.max_page()
    }

    /// The active page's questions, in order. May be empty when the
    /// survey's page numbering has gaps.
    pub fn current_questions(&self) -> &[Question] {
        self.pages.questions_on(self.current_page)
    }

    /// Look up any question by id, on whatever page.
    pub fn question(&self, question_id: u64) -> Option<&Question> {
        self.pages.all_questions().find(|q| q.id == question_id)
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn answer(&self, question_id: u64) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    /// Insert or overwrite an answer. Last write wins.
    pub fn set_answer(
        &mut self,
        question_id: u64,
        value: impl Into<AnswerValue>,
    ) -> Result<(), FormError> {
        if self.submitted {
            return Err(FormError::AlreadySubmitted);
        }
        self.answers.set(question_id, value);
        Ok(())
    }

    /// Route a widget input event through the question's widget and
    /// store the resulting value. Inputs that don't fit the question's
    /// kind are ignored.
    pub fn apply_input(
        &mut self,
        question_id: u64,
        input: &WidgetInput,
    ) -> Result<(), FormError> {
        if self.submitted {
            return Err(FormError::AlreadySubmitted);
        }
        let Some(question) = self.question(question_id) else {
            return Ok(());
        };
        let widget = widget_for(question.kind);
        if let Some(value) = widget.apply(self.answers.get(question_id), input) {
            self.answers.set(question_id, value);
        }
        Ok(())
    }

    /// Advance to the next page, gated on the current page's required
    /// questions. On the final page this is a no-op - the only forward
    /// control there is submission.
    pub fn next(&mut self) -> Result<(), FormError> {
        if self.submitted {
            return Err(FormError::AlreadySubmitted);
        }
        if self.is_last_page() {
            return Ok(());
        }
        self.check_page(self.current_questions())?;
        self.current_page += 1;
        Ok(())
    }

    /// Go back one page. Never validates; no-op on page 1.
    pub fn back(&mut self) {
        if !self.submitted && self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Build the submission payload, re-validating the final page.
    ///
    /// Earlier pages are not re-checked here: each was gated on its own
    /// "next" transition.
    pub fn payload(&self) -> Result<ResponsePayload, FormError> {
        if self.submitted {
            return Err(FormError::AlreadySubmitted);
        }
        self.check_page(self.pages.questions_on(self.pages.max_page()))?;
        Ok(ResponsePayload::from_answers(self.survey_id, &self.answers))
    }

    /// Build the update payload for an edited response, validating all
    /// questions across every page.
    pub fn update_payload(&self) -> Result<UpdatePayload, FormError> {
        if self.submitted {
            return Err(FormError::AlreadySubmitted);
        }
        let all: Vec<Question> = self.pages.all_questions().cloned().collect();
        self.check_page(&all)?;
        Ok(UpdatePayload::from_answers(&self.answers))
    }

    /// Flip the one-way terminal flag after a successful submission.
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    fn check_page(&self, questions: &[Question]) -> Result<(), FormError> {
        let missing = missing_required(questions, &self.answers);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::PageBlocked {
                missing: missing.iter().map(|q| q.text.clone()).collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensa_types::{Question, QuestionKind};

    fn two_page_survey() -> Survey {
        Survey::new(
            1,
            "Yemekhane Memnuniyeti",
            vec![
                Question::new(1, "Görüşünüz?", QuestionKind::Text)
                    .on_page(1)
                    .required(),
                Question::new(2, "Genel puan?", QuestionKind::Scale)
                    .on_page(2)
                    .with_order(1),
            ],
        )
    }

    #[test]
    fn starts_on_page_one() {
        let session = FormSession::new(two_page_survey());
        assert_eq!(session.progress(), (1, 2));
        assert_eq!(session.current_questions().len(), 1);
    }

    #[test]
    fn required_question_blocks_next() {
        let mut session = FormSession::new(two_page_survey());
        let err = session.next().unwrap_err();
        assert_eq!(
            err,
            FormError::PageBlocked {
                missing: vec!["Görüşünüz?".into()]
            }
        );
        assert_eq!(session.progress().0, 1);

        session.set_answer(1, "ok").unwrap();
        session.next().unwrap();
        assert_eq!(session.progress().0, 2);
        assert_eq!(session.current_questions()[0].id, 2);
    }

    #[test]
    fn next_on_last_page_is_noop() {
        let mut session = FormSession::new(two_page_survey());
        session.set_answer(1, "ok").unwrap();
        session.next().unwrap();
        assert!(session.is_last_page());
        session.next().unwrap();
        assert_eq!(session.progress().0, 2);
    }

    #[test]
    fn back_never_validates() {
        let mut session = FormSession::new(two_page_survey());
        session.set_answer(1, "ok").unwrap();
        session.next().unwrap();
        session.set_answer(1, "  ").unwrap();
        session.back();
        assert_eq!(session.progress().0, 1);
        session.back();
        assert_eq!(session.progress().0, 1);
    }

    #[test]
    fn payload_checks_final_page_only() {
        let mut survey = two_page_survey();
        survey.questions[1].required = true;
        let mut session = FormSession::new(survey);
        session.set_answer(1, "ok").unwrap();
        session.next().unwrap();

        // Final page required question still empty.
        assert!(matches!(
            session.payload(),
            Err(FormError::PageBlocked { .. })
        ));

        session.set_answer(2, "7").unwrap();
        let payload = session.payload().unwrap();
        assert_eq!(payload.survey, 1);
        assert_eq!(payload.answers.len(), 2);
    }

    #[test]
    fn submitted_flag_is_terminal() {
        let mut session = FormSession::new(two_page_survey());
        session.set_answer(1, "ok").unwrap();
        session.mark_submitted();
        assert!(session.is_submitted());
        assert_eq!(
            session.set_answer(1, "değişiklik"),
            Err(FormError::AlreadySubmitted)
        );
        assert_eq!(session.next(), Err(FormError::AlreadySubmitted));
        assert!(matches!(
            session.payload(),
            Err(FormError::AlreadySubmitted)
        ));
    }

    #[test]
    fn update_payload_validates_all_pages() {
        let mut survey = two_page_survey();
        survey.questions[1].required = true;
        let mut answers = Answers::new();
        answers.set(1, "eski cevap");
        let session = FormSession::for_edit(survey, answers);

        let err = session.update_payload().unwrap_err();
        assert_eq!(
            err,
            FormError::PageBlocked {
                missing: vec!["Genel puan?".into()]
            }
        );
    }

    #[test]
    fn gap_page_renders_empty() {
        let survey = Survey::new(
            2,
            "Boşluklu",
            vec![
                Question::new(1, "a", QuestionKind::Text).on_page(1),
                Question::new(2, "b", QuestionKind::Text).on_page(3),
            ],
        );
        let mut session = FormSession::new(survey);
        session.next().unwrap();
        assert_eq!(session.progress().0, 2);
        assert!(session.current_questions().is_empty());
        session.next().unwrap();
        assert_eq!(session.current_questions()[0].id, 2);
    }
}
