// Rust guideline compliant 2026-10-18

//! Command implementations for the mnx CLI.

pub mod config;
pub mod resolve;
