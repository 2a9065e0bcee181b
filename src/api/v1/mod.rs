//! V1 API handlers.

mod categories;
mod questions;
mod quizzes;
mod system;

#[cfg(test)]
mod quizzes_test;
#[cfg(test)]
pub(crate) mod test_support;

pub use categories::*;
pub use questions::*;
pub use quizzes::*;
pub use system::*;
