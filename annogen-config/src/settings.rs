// annogen-config/src/settings.rs
// ============================================================================
// Module: Generator Settings
// Description: The annogen.toml file model and its resolution into a config.
// Purpose: Provide strict, fail-closed settings parsing with hard limits.
// Dependencies: annogen-core, serde, toml
// ============================================================================

//! ## Overview
//! Settings are loaded from a TOML file with strict size and path limits.
//! [`GeneratorSettings`] names annotation XML files and assemblies by path;
//! [`GeneratorSettings::resolve`] reads and parses those files and produces
//! the validated [`GeneratorConfig`] handed to the generation pipeline.
//! Settings inputs are untrusted; missing or invalid settings fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use annogen_core::AnnotationDocument;
use serde::Deserialize;
use serde::Serialize;

use crate::config::ConfigError;
use crate::config::FilterConfig;
use crate::config::GeneratorConfig;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default settings filename when no path is specified.
const DEFAULT_SETTINGS_NAME: &str = "annogen.toml";
/// Environment variable used to override the settings path.
pub(crate) const SETTINGS_ENV_VAR: &str = "ANNOGEN_CONFIG";
/// Maximum settings file size in bytes.
pub(crate) const MAX_SETTINGS_FILE_SIZE: usize = 1024 * 1024;
/// Maximum size of a single annotation XML file in bytes.
pub(crate) const MAX_ANNOTATION_XML_SIZE: usize = 8 * 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Settings Types
// ============================================================================

/// The `annogen.toml` settings model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Generation inputs: annotation XML files, assemblies, version.
    #[serde(default)]
    pub generation: GenerationSettings,
    /// Filter selection; defaults to the standard pipelines.
    #[serde(default)]
    pub filters: FilterConfig,
}

/// The `[generation]` settings table.
///
/// Required keys stay optional in the model so their absence is reported as
/// a missing argument by [`GeneratorSettings::validate`] rather than as a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Paths to the annotation XML documents to mine for comments.
    #[serde(default)]
    pub annotation_xml_paths: Option<Vec<PathBuf>>,
    /// Relative or absolute paths to the assemblies the annotations refer to.
    #[serde(default)]
    pub assembly_paths: Option<Vec<PathBuf>>,
    /// Version stamped into the generated document.
    #[serde(default)]
    pub document_version: Option<String>,
    /// Optional path to an advanced generation directives document.
    #[serde(default)]
    pub advanced_configuration_xml_path: Option<PathBuf>,
}

impl GeneratorSettings {
    /// Loads settings from disk using the default resolution rules.
    ///
    /// Resolution order: explicit path, then [`SETTINGS_ENV_VAR`], then
    /// `annogen.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_SETTINGS_FILE_SIZE {
            return Err(ConfigError::Invalid("settings file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("settings file must be utf-8".to_string()))?;
        let settings: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings for completeness and internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingArgument`] for an absent required key,
    /// or [`ConfigError::Invalid`] for malformed values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let annotation_xml_paths =
            self.generation.annotation_xml_paths.as_ref().ok_or(ConfigError::MissingArgument {
                parameter: "generation.annotation_xml_paths",
            })?;
        for path in annotation_xml_paths {
            validate_path_entry("generation.annotation_xml_paths", path)?;
        }
        let assembly_paths =
            self.generation.assembly_paths.as_ref().ok_or(ConfigError::MissingArgument {
                parameter: "generation.assembly_paths",
            })?;
        for path in assembly_paths {
            validate_path_entry("generation.assembly_paths", path)?;
        }
        let document_version =
            self.generation.document_version.as_deref().ok_or(ConfigError::MissingArgument {
                parameter: "generation.document_version",
            })?;
        if document_version.trim().is_empty() {
            return Err(ConfigError::MissingArgument {
                parameter: "generation.document_version",
            });
        }
        if let Some(path) = &self.generation.advanced_configuration_xml_path {
            validate_path_entry("generation.advanced_configuration_xml_path", path)?;
        }
        self.filters.validate()?;
        Ok(())
    }

    /// Resolves the settings into a [`GeneratorConfig`].
    ///
    /// Annotation XML files (and the advanced-configuration file, when set)
    /// are read relative to `base_dir` and parsed once here. Assembly paths
    /// pass through verbatim; the reflection stage resolves them itself.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when validation, file reading, or XML parsing
    /// fails.
    pub fn resolve(&self, base_dir: Option<&Path>) -> Result<GeneratorConfig, ConfigError> {
        self.validate()?;
        let annotation_xml_paths =
            self.generation.annotation_xml_paths.as_deref().unwrap_or_default();
        let mut annotation_documents = Vec::with_capacity(annotation_xml_paths.len());
        for path in annotation_xml_paths {
            annotation_documents.push(read_annotation_document(&join_base(base_dir, path))?);
        }
        let assembly_paths = self.generation.assembly_paths.clone().unwrap_or_default();
        let document_version = self.generation.document_version.clone().unwrap_or_default();
        let mut config = GeneratorConfig::with_filter_config(
            annotation_documents,
            assembly_paths,
            document_version,
            self.filters.clone(),
        )?;
        if let Some(path) = &self.generation.advanced_configuration_xml_path {
            let document = read_annotation_document(&join_base(base_dir, path))?;
            config.set_advanced_configuration_document(Some(document));
        }
        Ok(config)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the settings path from an explicit value or environment default.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(SETTINGS_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("settings path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_SETTINGS_NAME))
}

/// Validates the resolved settings path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("settings path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("settings path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a configured path entry against length constraints.
fn validate_path_entry(field: &str, path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} entries must be non-empty")));
    }
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} entry exceeds max length")));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Joins a configured path onto the optional base directory.
fn join_base(base_dir: Option<&Path>, path: &Path) -> PathBuf {
    base_dir.map_or_else(|| path.to_path_buf(), |base| base.join(path))
}

/// Reads and parses one annotation XML file with a size cap.
fn read_annotation_document(path: &Path) -> Result<AnnotationDocument, ConfigError> {
    let bytes =
        fs::read(path).map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;
    if bytes.len() > MAX_ANNOTATION_XML_SIZE {
        return Err(ConfigError::Invalid(format!(
            "annotation xml exceeds size limit: {}",
            path.display()
        )));
    }
    AnnotationDocument::from_reader(bytes.as_slice())
        .map_err(|err| ConfigError::Document(format!("{}: {err}", path.display())))
}
