#![deny(missing_docs)]
//! Vocabulary lessons Telegram bot.
//!
//! Serves per-lesson vocabulary lists, a downloadable course book, and a
//! fixed set of audio tracks behind inline-keyboard menus. Audio deliveries
//! go through a single-consumer sequencer so at most one upload is in
//! flight at a time and requests complete in arrival order.

/// Audio track store and delivery sequencer
pub mod audio;
/// Telegram bot implementation
pub mod bot;
/// Configuration management
pub mod config;
/// Vocabulary spreadsheet ingestion
pub mod vocabulary;
