//! # mensa-form
//!
//! The paginated form engine for mensa surveys. Backend-agnostic.
//!
//! A [`FormSession`] wraps a fetched survey: it groups the questions
//! into pages, holds the answer store, gates forward navigation on the
//! current page's required questions, and builds the wire payload once
//! the final page passes. Presentation is delegated to a
//! [`FormBackend`] - an interactive backend walks the session page by
//! page, a [`TestBackend`] drives it from preset answers in tests.
//!
//! ## Backends
//!
//! Backends are separate crates that implement `FormBackend`:
//! - `mensa-form-dialoguer` - CLI prompts via dialoguer

mod session;
pub use session::{FormError, FormSession};

mod widgets;
pub use widgets::{QuestionWidget, WidgetInput, widget_for};

mod backend;
pub use backend::{FormBackend, FormOutcome};

// Test backend for driving sessions without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};
