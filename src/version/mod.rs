//! Version lookup layer
//!
//! Holds the parsed changelog for the life of the process and answers
//! per-version queries.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│    Cache    │◀────│  Resolver   │
//! │ (raw text)  │     │ (parse once)│     │  (lookup)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            ▼                   ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   Parser    │     │  Normalize  │
//!                     │  (table)    │     │ (-alpha cut)│
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: Build-once table cache and the process-wide instance
//! - [`error`]: Error types for sources and installation
//! - [`normalize`]: Legacy alias and pre-release suffix rules
//! - [`resolver`]: Normalized lookup of a requested version
//! - [`semver`]: Semantic ordering of version keys
//! - [`source`]: Raw document sources (in-memory, bundled, file)

pub mod cache;
pub mod error;
pub mod normalize;
pub mod resolver;
pub mod semver;
pub mod source;
