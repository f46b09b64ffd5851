// annogen-config/src/lib.rs
// ============================================================================
// Module: Annogen Config Library
// Description: Canonical config model, validation, and artifact generation.
// Purpose: Single source of truth for annogen.toml semantics.
// Dependencies: annogen-core, serde, toml
// ============================================================================

//! ## Overview
//! `annogen-config` defines the validated input bundle for annotation-driven
//! OpenAPI generation and the `annogen.toml` settings that produce it. It
//! provides strict, fail-closed validation and deterministic generators for
//! config schema, examples, and docs.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod docs;
pub mod examples;
pub mod schema;
pub mod settings;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use docs::config_docs_markdown;
pub use docs::verify_config_docs;
pub use docs::write_config_docs;
pub use examples::config_toml_example;
pub use schema::config_schema;
pub use settings::*;
