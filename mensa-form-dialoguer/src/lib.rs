//! Dialoguer backend for mensa-form: page-by-page CLI prompts.

mod backend;
pub use backend::{DialoguerBackend, DialoguerError};
