//! Version inference layer
//!
//! This module answers "what is the current release version of this
//! repository?" by reading the repository through a Git platform client.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Engine    │────▶│   Client    │────▶│ GitHub API  │
//! │ (strategy)  │     │ (3 reads)   │     │ raw content │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   Parser    │     │ Classifier  │
//! │ (manifests) │     │ (statuses)  │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`engine`]: Tag and manifest strategies
//! - [`client`]: Client trait for listing files and tags and reading raw files
//! - [`clients`]: Concrete client implementations (GitHub)
//! - [`classifier`]: Maps error messages to response status categories
//! - [`error`]: Error type of the inference pipeline

pub mod classifier;
pub mod client;
pub mod clients;
pub mod engine;
pub mod error;
