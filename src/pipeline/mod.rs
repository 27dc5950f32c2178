//! Email processing pipeline.
//!
//! Every email flows through three independent, pure steps:
//! 1. `Classifier::classify()` — ordered keyword rules, first match wins
//! 2. `extract_actions()` — independent task-phrase patterns
//! 3. `draft_reply()` — canned reply selection on the subject line
//!
//! `InboxProcessor` sequences the steps and writes results into the
//! application state. The steps stand in for LLM calls and never fail.

pub mod actions;
pub mod classifier;
pub mod processor;
pub mod reply;
pub mod types;
