//! Integration tests for mensa-form

use mensa_form::{FormBackend, FormOutcome, FormSession, TestBackend, TestBackendError};
use sample_surveys::{cafeteria_satisfaction, dining_hall_feedback};

#[test]
fn full_run_produces_stringified_payload() {
    let mut session = FormSession::new(cafeteria_satisfaction());
    let outcome = TestBackend::new()
        .with_rating(1, 4.0)
        .with_text(2, "Öğle")
        .with_text(3, "Çorba, Salata")
        .with_text(4, "2024-11-02")
        .with_text(5, "9")
        .run(&mut session)
        .unwrap();
    assert_eq!(outcome, FormOutcome::Completed);

    let payload = session.payload().unwrap();
    assert_eq!(payload.survey, 1);
    let values: Vec<(u64, &str)> = payload
        .answers
        .iter()
        .map(|a| (a.question, a.value.as_str()))
        .collect();
    assert_eq!(
        values,
        vec![
            (1, "4"),
            (2, "Öğle"),
            (3, "Çorba, Salata"),
            (4, "2024-11-02"),
            (5, "9"),
        ]
    );

    session.mark_submitted();
    assert!(session.is_submitted());
    assert!(session.payload().is_err());
}

#[test]
fn half_star_rating_keeps_fraction_on_the_wire() {
    let mut session = FormSession::new(cafeteria_satisfaction());
    TestBackend::new()
        .with_rating(1, 3.5)
        .with_text(2, "Akşam")
        .with_text(5, "6")
        .run(&mut session)
        .unwrap();

    let payload = session.payload().unwrap();
    let star = payload.answers.iter().find(|a| a.question == 1).unwrap();
    assert_eq!(star.value, "3.5");
}

#[test]
fn missing_required_blocks_the_page_it_lives_on() {
    let mut session = FormSession::new(cafeteria_satisfaction());
    let err = TestBackend::new()
        .with_rating(1, 5.0)
        // Question 2 (required, page 1) left unanswered.
        .run(&mut session)
        .unwrap_err();
    assert_eq!(
        err,
        TestBackendError::Blocked {
            page: 1,
            missing: vec!["Yemekhaneyi hangi öğünde kullandınız?".into()],
        }
    );
    assert_eq!(session.progress().0, 1);
}

#[test]
fn unsorted_questions_render_in_declared_order() {
    let session = FormSession::new(dining_hall_feedback());
    let ids: Vec<u64> = session.current_questions().iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![10, 11]);
    assert_eq!(session.progress(), (1, 1));
}

#[test]
fn edit_run_updates_existing_answers() {
    let mut answers = mensa_types::Answers::new();
    answers.set(10, "eski görüş");
    answers.set(11, "Evet");
    let mut session = FormSession::for_edit(dining_hall_feedback(), answers);

    session.set_answer(11, "Hayır").unwrap();
    let payload = session.update_payload().unwrap();
    let values: Vec<(u64, &str)> = payload
        .answers
        .iter()
        .map(|a| (a.question, a.value.as_str()))
        .collect();
    assert_eq!(values, vec![(10, "eski görüş"), (11, "Hayır")]);
}
