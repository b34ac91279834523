//! Quiz domain.
//!
//! A quiz turn serves one random question the player has not seen yet.
//! The client carries the session state (previous questions and chosen
//! category) on every request; nothing is kept server-side.
//!
//! - [`selector::QuizScope`]: which category a turn draws from
//! - [`selector::eligible_questions`]: the eligible set for a turn
//! - [`selector::draw`]: uniform pick from the eligible set

pub mod selector;
