//! Construction and accessor tests for the generator configuration.
// annogen-config/tests/config_construction.rs
// =============================================================================
// Module: Generator Config Construction Tests
// Description: Validate construction-time checks and accessor behavior.
// Purpose: Ensure the input bundle validates once and stays read-only after.
// =============================================================================

use std::path::PathBuf;

use annogen_config::ConfigError;
use annogen_config::FilterConfig;
use annogen_config::GeneratorConfig;

mod common;

type TestResult = Result<(), String>;

/// Asserts a construction result failed naming the given parameter.
fn assert_missing<T>(result: Result<T, ConfigError>, parameter: &str) -> TestResult {
    match result {
        Err(ConfigError::MissingArgument { parameter: actual }) => {
            if actual == parameter {
                Ok(())
            } else {
                Err(format!("missing argument named {actual}, expected {parameter}"))
            }
        }
        Err(error) => Err(format!("unexpected error kind: {error}")),
        Ok(_) => Err(format!("expected missing argument: {parameter}")),
    }
}

#[test]
fn construction_preserves_every_input() -> TestResult {
    let document = common::sample_document()?;
    let paths = vec![PathBuf::from("bin/service.dll"), PathBuf::from("bin/models.dll")];
    let config = GeneratorConfig::new(vec![document.clone()], paths.clone(), "V1")
        .map_err(|err| err.to_string())?;

    if config.annotation_documents() != [document] {
        return Err("annotation documents must round-trip unchanged".to_string());
    }
    if config.assembly_paths() != paths {
        return Err("assembly paths must round-trip unchanged".to_string());
    }
    if config.document_version() != "V1" {
        return Err("document version must round-trip unchanged".to_string());
    }
    if config.filter_config() != &FilterConfig::default() {
        return Err("three-argument form must apply the standard filters".to_string());
    }
    Ok(())
}

#[test]
fn empty_sequences_are_accepted() -> TestResult {
    let config = GeneratorConfig::new(Vec::new(), Vec::new(), "V1")
        .map_err(|err| err.to_string())?;
    if !config.annotation_documents().is_empty() || !config.assembly_paths().is_empty() {
        return Err("empty input sequences must be preserved".to_string());
    }
    Ok(())
}

#[test]
fn blank_document_version_is_rejected() -> TestResult {
    assert_missing(GeneratorConfig::new(Vec::new(), Vec::new(), ""), "document_version")?;
    assert_missing(GeneratorConfig::new(Vec::new(), Vec::new(), "   "), "document_version")?;
    Ok(())
}

#[test]
fn non_blank_document_version_is_accepted() -> TestResult {
    let config = GeneratorConfig::new(Vec::new(), Vec::new(), "1.0")
        .map_err(|err| err.to_string())?;
    if config.document_version() != "1.0" {
        return Err("document version must be stored verbatim".to_string());
    }
    Ok(())
}

#[test]
fn blank_version_rejected_through_full_form_too() -> TestResult {
    assert_missing(
        GeneratorConfig::with_filter_config(Vec::new(), Vec::new(), " ", FilterConfig::default()),
        "document_version",
    )
}

#[test]
fn default_filters_match_explicit_default() -> TestResult {
    let document = common::sample_document()?;
    let paths = vec![PathBuf::from("service.dll")];
    let implicit = GeneratorConfig::new(vec![document.clone()], paths.clone(), "V1")
        .map_err(|err| err.to_string())?;
    let explicit = GeneratorConfig::with_filter_config(
        vec![document],
        paths,
        "V1",
        FilterConfig::default(),
    )
    .map_err(|err| err.to_string())?;

    if implicit != explicit {
        return Err("three- and four-argument forms must agree on defaults".to_string());
    }
    Ok(())
}

#[test]
fn advanced_document_defaults_to_absent() -> TestResult {
    let config =
        GeneratorConfig::new(Vec::new(), Vec::new(), "V1").map_err(|err| err.to_string())?;
    if config.advanced_configuration_document().is_some() {
        return Err("advanced document must be absent until set".to_string());
    }
    Ok(())
}

#[test]
fn advanced_document_can_be_set_and_cleared() -> TestResult {
    let mut config =
        GeneratorConfig::new(Vec::new(), Vec::new(), "V1").map_err(|err| err.to_string())?;
    let advanced = common::advanced_document()?;

    config.set_advanced_configuration_document(Some(advanced.clone()));
    if config.advanced_configuration_document() != Some(&advanced) {
        return Err("advanced document must read back the value just set".to_string());
    }

    config.set_advanced_configuration_document(None);
    if config.advanced_configuration_document().is_some() {
        return Err("advanced document must be clearable".to_string());
    }
    Ok(())
}
