//! Core components of the `finews-rs` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The HTTP [`FeedClient`] and its builder.
//! - The primary [`FnError`] type.
//! - Shared data models like [`Trend`] and [`Tickers`].
//! - The collaborator traits the ingestor is assembled from.

/// The feed client (`FeedClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`FnError`) for the crate.
pub mod error;
/// Shared data models used across multiple modules (e.g., `Trend`, `Tickers`).
pub mod models;
/// Collaborator traits: feed source, sentiment, symbol recognition, storage.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::FnError`
pub use client::{Backoff, FeedClient, FeedClientBuilder, RetryConfig};
pub use error::FnError;
pub use models::{TICKER_SEPARATOR, Tickers, Trend};
pub use services::{ArticleStore, FeedSource, SentimentAnalyzer, SymbolRecognizer};
