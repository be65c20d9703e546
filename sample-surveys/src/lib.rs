//! Canned surveys for tests and demos.

mod cafeteria;
pub use cafeteria::cafeteria_satisfaction;

mod dining_hall;
pub use dining_hall::dining_hall_feedback;
