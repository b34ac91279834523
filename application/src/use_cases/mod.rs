//! Use cases (application services)
//!
//! One use case per question-bank or drink-catalog operation. Each holds its
//! ports and takes every request parameter explicitly; none keeps state
//! between calls.

pub mod create_drink;
pub mod create_question;
pub mod delete_drink;
pub mod delete_question;
pub mod drink_details;
pub mod list_categories;
pub mod list_drinks;
pub mod list_questions;
pub mod play_quiz;
pub mod questions_by_category;
pub mod search_or_create;
pub mod search_questions;
pub mod update_drink;

#[cfg(test)]
pub(crate) mod test_support;
