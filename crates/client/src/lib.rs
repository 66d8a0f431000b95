// crates/client/src/lib.rs
//! Async client for the Fin Manager REST API.
//!
//! One module per backend resource; every module is an `impl FinanceClient`
//! block so the client stays a single value that can be shared behind an
//! `Arc`. All operations map success and failure into [`ApiError`], the
//! uniform result shape the stores build on.

pub mod accounts;
pub mod cash_flow;
pub mod categories;
pub mod classifier;
mod client;
mod config;
pub mod credit_cards;
mod error;
pub mod import;
pub mod subcategories;
pub mod transactions;

pub use client::FinanceClient;
pub use config::ClientConfig;
pub use error::ApiError;
