//! Core library for textstat.
//!
//! Computes descriptive statistics over a block of text: word count,
//! sentence count, average word length, and the longest word.
//!
//! # Modules
//!
//! - [`analyzer`] - The analysis entry points
//! - [`report`] - The result type and its text rendering
//! - [`config`] - Configuration loading for the command-line tool
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textstat_core::{analyze, format};
//!
//! let result = analyze("Hello, world! How are you?");
//! assert_eq!(result.word_count(), 5);
//! assert_eq!(result.sentence_count(), 2);
//!
//! println!("{}", format(&result));
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod report;

mod text;

pub use analyzer::{analyze, analyze_opt};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use report::{TextAnalysisResult, format};
