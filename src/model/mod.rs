//! Core data model: dimensions, questions, the built-in catalog and
//! response sets.
//!
//! Everything here is leaf data. The scoring logic lives in
//! [`crate::scoring`]; session navigation lives in [`crate::session`].

mod catalog;
mod dimension;
mod question;
mod response;

pub use catalog::QuestionCatalog;
pub use dimension::Dimension;
pub use question::{AnswerOption, Question, QuestionCategory, QuestionId};
pub use response::{load_responses, ResponseDocument, ResponseSet};
