//! Core types for the mensa survey platform.
//!
//! This crate provides the foundational, presentation-agnostic types:
//! - `Survey` and `Question` - the survey structure as delivered by the API
//! - `Answers` and `AnswerValue` - the in-memory answer store
//! - `Pages` - grouping of questions into form pages
//! - `ResponsePayload` - the wire shape for submitting a response
//! - `QuestionResults` - pre-aggregated statistics for the results view

mod question;
pub use question::{Question, QuestionKind};

pub mod options;

mod survey;
pub use survey::Survey;

mod answers;
pub use answers::{AnswerValue, Answers};

mod pages;
pub use pages::Pages;

mod validation;
pub use validation::missing_required;

mod payload;
pub use payload::{AnswerItem, ResponsePayload, UpdatePayload};

mod response;
pub use response::{StoredAnswer, SurveyResponse};

mod results;
pub use results::{QuestionResults, ResultData};
