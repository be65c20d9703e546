use crate::FormSession;

/// How a backend run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Every page passed its gate; the caller can take
    /// [`FormSession::payload`] and submit.
    Completed,

    /// The user backed out (Ctrl+C, explicit cancel). The session is
    /// left as-is.
    Cancelled,
}

/// Trait for implementations that walk a user through a form session.
///
/// Backends decide presentation (CLI prompts, TUI, preset answers in
/// tests); the session owns pagination, the answer store and the
/// validation gate. A backend must advance only through
/// [`FormSession::next`] so the gate applies.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Walk the session to completion or cancellation.
    fn run(&self, session: &mut FormSession) -> Result<FormOutcome, Self::Error>;
}
