// Rust guideline compliant 2026-10-18

//! MetaNetX Resolver Core Library
//!
//! This crate resolves metabolite identifiers and names to cross-reference
//! records using the MetaNetX web service:
//! - Data models (InputType, MetaboliteRecord)
//! - Query normalization (namespace tags, exact-match marker)
//! - Remote source trait and blocking HTTP implementation
//! - Response parsing and xref extraction
//! - Configuration loading and error types

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod resolver;
pub mod response;
pub mod source;
pub mod xrefs;

pub use config::ResolverConfig;
pub use error::{Error, ErrorCode, Result};
pub use models::{InputType, MetaboliteRecord};
pub use query::{Endpoint, LookupRequest};
pub use resolver::IdentifierResolver;
pub use source::{HttpSource, MetaboliteSource};
