//! Paced word-chunk dictation for handwriting practice.
//!
//! Text is split into words and read a few at a time: the focused chunk is
//! highlighted (and optionally spoken) with a little context on either side,
//! and the user steps through it at their own pace.

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod reading;
pub mod speech;
pub mod ui;
