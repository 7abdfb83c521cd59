//! # CLI Module
//!
//! This module provides the command-line interface layer for the coin-change
//! client. It implements all user-facing commands and coordinates between the
//! service client, the persisted denomination selection, and terminal output.
//!
//! ## Command Categories
//!
//! ### Connectivity
//!
//! - [`health`] - Probes the service health endpoint on demand and reports
//!   the connection state.
//!
//! ### Calculation
//!
//! - [`calculate`] - Validates the amount locally, resolves the denomination
//!   selection, gates on a health probe, and renders the returned breakdown.
//!
//! ### Selection
//!
//! - [`list_denominations`] - Shows the catalog with selection markers
//! - [`select_denominations`] / [`deselect_denominations`] - Toggle entries
//! - [`select_all_denominations`] / [`clear_denominations`] - Bulk edits
//! - [`remote_denominations`] - Shows the catalog the server advertises
//!
//! ## Error Presentation
//!
//! Validation failures and service errors are printed through the crate's
//! colored macros and terminate the invocation; editing the selection never
//! requires the service to be reachable.

mod calculate;
mod denominations;
mod health;

pub use calculate::calculate;
pub use denominations::clear_denominations;
pub use denominations::deselect_denominations;
pub use denominations::list_denominations;
pub use denominations::remote_denominations;
pub use denominations::select_all_denominations;
pub use denominations::select_denominations;
pub use health::health;
