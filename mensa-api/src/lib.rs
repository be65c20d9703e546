//! HTTP client for the cafeteria survey platform.
//!
//! Thin typed wrappers over the REST endpoints plus a persisted login
//! session. All decisions (authorization, validation, aggregation) are
//! server-side; this crate shapes requests and interprets responses.

mod auth;
mod client;
mod error;
mod models;
mod responses;
mod session;
mod surveys;
mod users;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    AccountUser, LoginRequest, LoginResponse, NewQuestion, NewSurvey, NewUser, RegisterRequest,
    UserPatch,
};
pub use session::{Session, SessionError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
