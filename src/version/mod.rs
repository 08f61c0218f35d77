//! Version lookup against the npm registry
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Resolver   │────▶│  Bootstrap  │
//! │  (fetch)    │     │(filter/sort)│     │  (notice)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │   Semver    │
//! │   (npm)     │     │ (ordering)  │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for fetching package metadata
//! - [`registries`]: Concrete registry implementations (npm)
//! - [`resolver`]: Version enumeration, next-version and latest-version queries
//! - [`semver`]: Version parsing and the shared precedence comparator
//! - [`error`]: Error types for registry and resolver operations
//! - [`types`]: Package metadata returned by a registry

pub mod error;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod semver;
pub mod types;
