// annogen-config/src/docs.rs
// ============================================================================
// Module: Config Docs Generator
// Description: Markdown generator for annogen.toml documentation.
// Purpose: Keep config docs in sync with schema and validation.
// Dependencies: serde_json, std
// ============================================================================

//! ## Overview
//! Generates `Docs/configuration/annogen.toml.md` from the canonical
//! configuration schema. The output is deterministic; drift between the
//! generated text and the committed file is an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::schema::config_schema;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default output path for generated configuration docs.
const DOCS_PATH: &str = "Docs/configuration/annogen.toml.md";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when generating or verifying config docs.
#[derive(Debug, Error)]
pub enum DocsError {
    /// IO failure while writing docs.
    #[error("docs io error: {0}")]
    Io(String),
    /// Schema traversal or rendering error.
    #[error("docs schema error: {0}")]
    Schema(String),
    /// Generated docs do not match the committed file.
    #[error("docs drift: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Generates the configuration markdown documentation.
///
/// # Errors
///
/// Returns [`DocsError`] when schema traversal fails.
pub fn config_docs_markdown() -> Result<String, DocsError> {
    let schema = config_schema();
    let mut out = String::new();

    out.push_str("<!--\n");
    out.push_str("Docs/configuration/annogen.toml.md\n");
    out.push_str("============================================================================\n");
    out.push_str("Document: Annogen Configuration\n");
    out.push_str("Description: Reference for annogen.toml configuration fields.\n");
    out.push_str("Purpose: Document generation inputs and filter selection.\n");
    out.push_str("Generated: This file is auto-generated; do not edit manually.\n");
    out.push_str("============================================================================\n");
    out.push_str("-->\n\n");

    out.push_str("# annogen.toml Configuration\n\n");
    out.push_str("## Overview\n\n");
    out.push_str("`annogen.toml` names the annotation XML documents and assemblies that\n");
    out.push_str("drive OpenAPI generation, the target document version, and the filter\n");
    out.push_str("pipelines to run. All inputs are validated and fail closed on errors.\n\n");

    out.push_str("## Top-Level Sections\n\n");

    for section in SECTIONS {
        out.push_str("### ");
        out.push_str(section.heading);
        out.push_str("\n\n");
        out.push_str(section.description);
        out.push_str("\n\n");
        let table = render_table(&schema, section).map_err(DocsError::Schema)?;
        out.push_str(&table);
        out.push('\n');
    }

    out.push_str("## Example\n\n");
    out.push_str("```toml\n");
    out.push_str(&crate::examples::config_toml_example());
    out.push_str("```\n");

    Ok(out)
}

/// Writes the generated docs to the standard location.
///
/// # Errors
///
/// Returns [`DocsError`] when file output fails.
pub fn write_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = config_docs_markdown()?;
    fs::write(path, content.as_bytes()).map_err(|err| DocsError::Io(err.to_string()))
}

/// Verifies the on-disk docs match the generated output.
///
/// # Errors
///
/// Returns [`DocsError`] when the docs drift.
pub fn verify_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = config_docs_markdown()?;
    let existing = fs::read_to_string(path).map_err(|err| DocsError::Io(err.to_string()))?;
    if existing != content {
        return Err(DocsError::Drift(format!("docs mismatch: {}", path.display())));
    }
    Ok(())
}

// ============================================================================
// SECTION: Section Specs
// ============================================================================

/// Specification for one rendered documentation section.
struct SectionSpec {
    /// Section heading, including TOML table name.
    heading: &'static str,
    /// Section description displayed beneath the heading.
    description: &'static str,
    /// JSON pointer to the section's schema object.
    pointer: &'static str,
    /// Ordered field list rendered in the docs table.
    fields: &'static [&'static str],
}

/// Rendered sections, in document order.
const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        heading: "[generation]",
        description: "Inputs for one generation run.",
        pointer: "/properties/generation",
        fields: &[
            "annotation_xml_paths",
            "assembly_paths",
            "document_version",
            "advanced_configuration_xml_path",
        ],
    },
    SectionSpec {
        heading: "[filters]",
        description: "Ordered filter pipelines; omitted lists use the standard pipeline.",
        pointer: "/properties/filters",
        fields: &[
            "document_filters",
            "operation_filters",
            "pre_processing_operation_filters",
            "post_processing_document_filters",
        ],
    },
];

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders the field table for one section.
fn render_table(schema: &Value, section: &SectionSpec) -> Result<String, String> {
    let mut out = String::new();
    out.push_str("| Field | Type | Default | Notes |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    for field in section.fields {
        let pointer = format!("{}/properties/{}", section.pointer, field);
        let property = schema
            .pointer(&pointer)
            .ok_or_else(|| format!("missing schema property at {pointer}"))?;
        out.push_str("| `");
        out.push_str(field);
        out.push_str("` | ");
        out.push_str(&render_type(property));
        out.push_str(" | ");
        out.push_str(&render_default(property));
        out.push_str(" | ");
        out.push_str(&render_notes(property));
        out.push_str(" |\n");
    }
    Ok(out)
}

/// Renders the type cell for one schema property.
fn render_type(property: &Value) -> String {
    if property.get("oneOf").is_some() {
        return "string?".to_string();
    }
    property
        .get("type")
        .and_then(Value::as_str)
        .map_or_else(|| "object".to_string(), ToString::to_string)
}

/// Renders the default cell for one schema property.
fn render_default(property: &Value) -> String {
    property.get("default").map_or_else(
        || "required".to_string(),
        |default| {
            let rendered = default.to_string();
            format!("`{rendered}`")
        },
    )
}

/// Renders the notes cell for one schema property.
fn render_notes(property: &Value) -> String {
    let mut notes = property
        .get("description")
        .and_then(Value::as_str)
        .map_or_else(String::new, ToString::to_string);
    if let Some(allowed) = property.pointer("/items/enum").and_then(Value::as_array) {
        let names: Vec<&str> = allowed.iter().filter_map(Value::as_str).collect();
        if !names.is_empty() {
            notes.push_str(" Allowed: `");
            notes.push_str(&names.join("`, `"));
            notes.push_str("`.");
        }
    }
    notes
}
