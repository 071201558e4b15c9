//! Repository metrics collection
//!
//! # Overview
//!
//! Gathers per-repository metrics from a source-code hosting platform's API into flat records
//! ready to be appended to a dataset: stars, forks, topics, commit count, contributor count,
//! the number of top contributors disclosing nothing about themselves and days since the last update.
//!
//! Commit and contributor totals are not read from an exact count field. Collections are requested
//! one item per page and the total is the page number of the `last` pagination link.
//!
//! A contributor's identity disclosure is `low` if location, company, twitter handle, blog and
//! email are all empty, otherwise `high`. It is a rough proxy for automated or placeholder accounts.
//!
//! Repositories are processed one at a time. A repository failing to aggregate is skipped and
//! reported, it never aborts the batch.

pub mod api;
pub mod identifier;
pub mod identity;
pub mod recency;

#[cfg(feature = "aggregator")]
pub mod aggregator;
#[cfg(feature = "aggregator")]
pub mod batch;
#[cfg(feature = "aggregator")]
pub mod disclosure;

#[cfg(all(test, feature = "aggregator"))]
mod fake;
