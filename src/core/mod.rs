//! Core components of the `stock-report` crate.
//!
//! This module contains the foundational building blocks shared by the sources and
//! the snapshot builder:
//! - The HTTP [`ReportClient`] and its builder.
//! - The primary [`ReportError`] type.
//! - Shared data models like [`PricePoint`] and [`RawHeadline`].
//! - The source traits the builder is written against.

/// The HTTP client (`ReportClient`), builder, and defaults.
pub mod client;
/// The primary error type (`ReportError`) for the crate.
pub mod error;
/// Shared data models used by sources and the snapshot builder.
pub mod models;
/// Source traits abstracting quote and headline lookups.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::ReportClient`
pub use client::{ReportClient, ReportClientBuilder};
pub use error::ReportError;
pub use models::{Interval, NewsLocale, PricePoint, Range, RawHeadline};
pub use services::{HeadlineSource, QuoteSource, SeriesRequest, SourceFuture};
