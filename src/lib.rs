//! Linkdeck - a terminal board of link cards
//!
//! Cards are added from a URL input, opened in the system browser,
//! selected one at a time and deleted. The card list lives in memory
//! for the duration of the session.
//!
//! # Features
//! - **clipboard**: copy a card URL to the system clipboard (default)
//!
//! # Architecture
//! - `deck`: Card model, URL normalization and the card list controller
//! - `interfaces`: Terminal user interface
//! - `config`: Configuration management
//! - `system`: Logging setup and panic handling
//! - `cli`: Command-line arguments

pub mod cli;
pub mod config;
pub mod deck;
pub mod errors;
pub mod interfaces;
pub mod system;
