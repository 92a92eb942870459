//! geocmp_rs
//!
//! A lightweight Rust library for fetching, caching, and comparing
//! socioeconomic indicators across countries and sub-national regions.
//! Pairs with the `geocmp` CLI.
//!
//! ### Features
//! - Fetch World Bank indicators for one or more entities and years or ranges
//! - In-memory TTL cache with stale-fallback degradation and per-key
//!   in-flight deduplication
//! - Built-in entity tables (countries, US/India/Australia/Canada regions)
//!   for offline operation
//! - Curated indicator catalog, state-level estimates, quick summary stats
//! - Save results as CSV or JSON in a tidy, analysis-friendly schema
//!
//! ### Example
//! ```no_run
//! use geocmp_rs::{DataService, DateSpec};
//!
//! let svc = DataService::with_defaults();
//! let data = svc.fetch_indicators(
//!     &["USA".into(), "CHN".into()],
//!     &["NY.GDP.PCAP.CD".into()],
//!     Some(DateSpec::Range { start: 2015, end: 2020 }),
//! )?;
//! geocmp_rs::storage::save_csv(&data, "gdp_2015_2020.csv")?;
//! let stats = geocmp_rs::stats::grouped_summary(&data);
//! println!("{:#?}", stats);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod cache;
pub mod error;
pub mod fallback;
pub mod format;
pub mod indicators;
pub mod models;
pub mod regional;
pub mod retry;
pub mod service;
pub mod stats;
pub mod storage;

pub use api::{Client, IndicatorSource};
pub use cache::{Clock, QueryKey, SystemClock, TtlCache};
pub use error::FetchError;
pub use models::{DateSpec, Entity, IndicatorRecord, Scope};
pub use retry::RetryPolicy;
pub use service::{DataService, ServiceConfig};
