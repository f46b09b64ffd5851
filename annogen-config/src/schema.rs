// annogen-config/src/schema.rs
// ============================================================================
// Module: Config Schemas
// Description: JSON schema builders for annogen.toml.
// Purpose: Provide canonical validation schema for config artifacts.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for Annogen settings. The schema is
//! generated from the canonical settings model and is used by tooling, docs,
//! and validation pipelines. Filter enum values and limits are kept in sync
//! with the runtime model by tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::settings::MAX_TOTAL_PATH_LENGTH;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Returns the JSON schema for `annogen.toml`.
#[must_use]
pub fn config_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "annogen://contract/schemas/config.schema.json",
        "title": "Annogen Configuration",
        "description": "Generation inputs and filter selection for Annogen.",
        "type": "object",
        "properties": {
            "generation": generation_schema(),
            "filters": filters_schema()
        },
        "required": ["generation"],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Generation Settings
// ============================================================================

/// Schema for the `[generation]` settings table.
fn generation_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "annotation_xml_paths": {
                "type": "array",
                "items": path_string_schema("Path to one annotation XML document."),
                "description": "Annotation XML documents to mine for comments."
            },
            "assembly_paths": {
                "type": "array",
                "items": path_string_schema("Relative or absolute assembly path."),
                "description": "Assemblies the annotation documents refer to."
            },
            "document_version": {
                "type": "string",
                "minLength": 1,
                "pattern": "\\S",
                "description": "Version stamped into the generated document."
            },
            "advanced_configuration_xml_path": {
                "oneOf": [
                    { "type": "null" },
                    path_string_schema("Path to an advanced generation directives document.")
                ],
                "default": null
            }
        },
        "required": ["annotation_xml_paths", "assembly_paths", "document_version"],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Filter Settings
// ============================================================================

/// Schema for the `[filters]` settings table.
fn filters_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "document_filters": filter_pipeline_schema(
                json!(["assembly_name_to_info", "url_to_server",
                       "member_summary_to_schema_description"]),
                json!(["assembly_name_to_info", "url_to_server",
                       "member_summary_to_schema_description"]),
                "Filters applied to the document as a whole."
            ),
            "operation_filters": filter_pipeline_schema(
                json!(["group_to_tag", "param_to_parameter", "remarks_to_description",
                       "response_to_response", "summary_to_summary"]),
                json!(["group_to_tag", "param_to_parameter", "remarks_to_description",
                       "response_to_response", "summary_to_summary"]),
                "Filters applied to each generated operation."
            ),
            "pre_processing_operation_filters": filter_pipeline_schema(
                json!(["convert_alternative_param_tags", "populate_in_attribute",
                       "validate_in_attribute"]),
                json!(["convert_alternative_param_tags", "populate_in_attribute",
                       "validate_in_attribute"]),
                "Filters applied to annotation elements before generation."
            ),
            "post_processing_document_filters": filter_pipeline_schema(
                json!(["remove_failed_generation_operation"]),
                json!(["remove_failed_generation_operation"]),
                "Filters applied to the assembled document after generation."
            )
        },
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Schema for a non-empty, length-limited path string.
fn path_string_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "maxLength": MAX_TOTAL_PATH_LENGTH,
        "description": description
    })
}

/// Schema for one ordered, duplicate-free filter pipeline.
fn filter_pipeline_schema(allowed: Value, default: Value, description: &str) -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "string",
            "enum": allowed
        },
        "uniqueItems": true,
        "default": default,
        "description": description
    })
}
