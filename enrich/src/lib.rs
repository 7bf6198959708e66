//! Survey response enrichment.
//!
//! Turns the raw, denormalized record a survey platform stores for one
//! submission into human-readable (question, answer) pairs:
//!
//! 1. [`catalog`] — per-survey snapshot of questions and subquestions,
//!    indexed for lookup by code and parent relationship
//! 2. [`fieldcode`] — decodes raw response column names such as
//!    `G1Q00001_SQ003` into question / subquestion / rank parts
//! 3. [`resolver`] — maps one decoded field and its raw value to question
//!    text and an answer label
//! 4. [`pipeline`] — runs the above over every answer field of a response
//!
//! The crate is pure: it operates on snapshots handed in by the caller and
//! never talks to a database or the network.

pub mod catalog;
pub mod fieldcode;
pub mod pipeline;
pub mod resolver;
pub mod response;
pub mod testutils;
