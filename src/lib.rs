//! FootwearERP dashboard client
//!
//! Fetches orders, documents, QC reports and dashboard statistics from the
//! FootwearERP REST API, renders them into an in-memory document and handles
//! navigation, row filtering and new-order submission.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod actions;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod debounce;
pub mod errors;
pub mod filter;
pub mod loaders;
pub mod markup;
pub mod models;
pub mod navigation;
pub mod notifications;
pub mod render;
pub mod state;
pub mod surface;

pub use dashboard::{Dashboard, LoadOutcome, PoExtractor, SamplePoExtractor};
pub use errors::ClientError;
