// annogen-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical examples for Annogen settings. Outputs are deterministic and
//! kept in sync with schema and docs by tests.

/// Returns a canonical example `annogen.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[generation]
annotation_xml_paths = ["obj/docs/Contoso.Service.xml"]
assembly_paths = ["bin/Release/Contoso.Service.dll"]
document_version = "V1"
# advanced_configuration_xml_path = "config/advanced-generation.xml"

[filters]
document_filters = [
    "assembly_name_to_info",
    "url_to_server",
    "member_summary_to_schema_description",
]
operation_filters = [
    "group_to_tag",
    "param_to_parameter",
    "remarks_to_description",
    "response_to_response",
    "summary_to_summary",
]
pre_processing_operation_filters = [
    "convert_alternative_param_tags",
    "populate_in_attribute",
    "validate_in_attribute",
]
post_processing_document_filters = [
    "remove_failed_generation_operation",
]
"#,
    )
}
