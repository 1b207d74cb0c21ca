//! # mirna-de
//!
//! Differential miRNA expression between two sample groups.
//!
//! Each row of an expression matrix (one miRNA) is compared between two groups of
//! sample columns, selected by their header label, with an independent two-sample
//! t-test. Rows whose p-value is at or below the Bonferroni-corrected threshold
//! `alpha / rows` are reported as differentially expressed.
//!
//! ## Quick Start
//!
//! Build an [`ExpressionSet`](data::ExpressionSet) from the loaders in [`io`], pick the
//! two groups with [`SampleGroup::from_header`](testing::utils::SampleGroup::from_header)
//! and call `differential_expression` from the
//! [`ExpressionStatTests`](testing::inference::ExpressionStatTests) trait, or run the
//! whole thing with [`pipeline::run`].
//!
//! ## Module Organization
//!
//! - **[`io`]**: expression matrix, identifier and header loaders; result writer
//! - **[`data`]**: the validated expression set
//! - **[`testing`]**: t-tests, Bonferroni correction, group selection
//! - **[`pipeline`]**: configuration and the end-to-end driver

pub mod data;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod testing;

pub use error::ExpressionError;
pub use pipeline::{Config, Summary};
