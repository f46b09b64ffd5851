//! Filter selection validation tests for annogen-config.
// annogen-config/tests/filter_validation.rs
// =============================================================================
// Module: Filter Config Validation Tests
// Description: Validate default pipelines and filter list constraints.
// Purpose: Ensure filter selection stays ordered, known, and duplicate-free.
// =============================================================================

use annogen_config::ConfigError;
use annogen_config::FilterConfig;
use annogen_core::DocumentFilterKind;
use annogen_core::OperationFilterKind;
use annogen_core::PostProcessingDocumentFilterKind;
use annogen_core::PreProcessingOperationFilterKind;

mod common;

type TestResult = Result<(), String>;

/// Asserts a validation result failed with the given message fragment.
fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid filter config".to_string()),
    }
}

#[test]
fn default_selection_runs_every_standard_pipeline() -> TestResult {
    let filters = FilterConfig::default();
    if filters.document_filters != DocumentFilterKind::standard() {
        return Err("document pipeline must default to the standard order".to_string());
    }
    if filters.operation_filters != OperationFilterKind::standard() {
        return Err("operation pipeline must default to the standard order".to_string());
    }
    if filters.pre_processing_operation_filters != PreProcessingOperationFilterKind::standard() {
        return Err("pre-processing pipeline must default to the standard order".to_string());
    }
    if filters.post_processing_document_filters != PostProcessingDocumentFilterKind::standard() {
        return Err("post-processing pipeline must default to the standard order".to_string());
    }
    filters.validate().map_err(|err| err.to_string())
}

#[test]
fn partial_filters_table_keeps_other_defaults() -> TestResult {
    let settings = common::settings_from_toml(
        r#"[generation]
annotation_xml_paths = ["service.xml"]
assembly_paths = ["service.dll"]
document_version = "V1"

[filters]
operation_filters = ["group_to_tag"]
"#,
    )
    .map_err(|err| err.to_string())?;

    if settings.filters.operation_filters != [OperationFilterKind::GroupToTag] {
        return Err("overridden pipeline must be used verbatim".to_string());
    }
    if settings.filters.document_filters != DocumentFilterKind::standard() {
        return Err("untouched pipelines must keep their defaults".to_string());
    }
    Ok(())
}

#[test]
fn empty_pipeline_disables_a_stage() -> TestResult {
    let filters =
        FilterConfig { post_processing_document_filters: Vec::new(), ..FilterConfig::default() };
    filters.validate().map_err(|err| err.to_string())
}

#[test]
fn repeated_filter_in_a_pipeline_is_rejected() -> TestResult {
    let filters = FilterConfig {
        operation_filters: vec![OperationFilterKind::GroupToTag, OperationFilterKind::GroupToTag],
        ..FilterConfig::default()
    };
    assert_invalid(filters.validate(), "filters.operation_filters must not repeat a filter")
}

#[test]
fn repeated_filter_is_rejected_through_settings_validation() -> TestResult {
    let settings = common::settings_from_toml(
        r#"[generation]
annotation_xml_paths = ["service.xml"]
assembly_paths = ["service.dll"]
document_version = "V1"

[filters]
document_filters = ["url_to_server", "url_to_server"]
"#,
    )
    .map_err(|err| err.to_string())?;
    assert_invalid(settings.validate(), "filters.document_filters must not repeat a filter")
}

#[test]
fn unknown_filter_name_fails_deserialization() -> TestResult {
    let result = common::settings_from_toml(
        r#"[filters]
operation_filters = ["no_such_filter"]
"#,
    );
    if result.is_ok() {
        return Err("unknown filter names must fail deserialization".to_string());
    }
    Ok(())
}
