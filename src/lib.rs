//! CineSaga question engine.
//!
//! Procedurally builds movie quiz questions from a static corpus, scaled to a
//! player's level. The engine (`pipeline::QuestionEngine`) is synchronous and
//! I/O free; the HTTP surface in `routes` serves its batches.

pub mod blueprint;
pub mod builders;
pub mod config;
pub mod distractors;
pub mod domain;
pub mod logic;
pub mod oracle;
pub mod pipeline;
pub mod protocol;
pub mod provider;
pub mod routes;
pub mod seeds;
pub mod state;
pub mod telemetry;
pub mod tier;
pub mod util;

pub use domain::{Movie, Question};
pub use pipeline::QuestionEngine;
pub use provider::{DataProvider, MovieCorpus};
