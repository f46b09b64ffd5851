// annogen-config/src/config.rs
// ============================================================================
// Module: Generator Configuration
// Description: The validated input bundle consumed by the generation pipeline.
// Purpose: Hold annotation documents, assembly paths, the document version,
//          and filter selection behind construction-time validation.
// Dependencies: annogen-core, serde, thiserror
// ============================================================================

//! ## Overview
//! [`GeneratorConfig`] bundles everything the generation pipeline needs:
//! parsed annotation documents, paths to the assemblies those annotations
//! refer to, the target document version, and the filter pipelines to run.
//! Required fields are validated when the bundle is constructed and are
//! read-only afterwards; only the optional advanced-configuration document
//! may change later. Construction does no I/O and either fully succeeds or
//! fails with a [`ConfigError::MissingArgument`] naming the offending
//! parameter.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashSet;
use std::hash::Hash;
use std::path::PathBuf;

use annogen_core::AnnotationDocument;
use annogen_core::DocumentFilterKind;
use annogen_core::OperationFilterKind;
use annogen_core::PostProcessingDocumentFilterKind;
use annogen_core::PreProcessingOperationFilterKind;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while constructing, loading, or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required argument or settings key was absent or blank.
    #[error("missing required argument: {parameter}")]
    MissingArgument {
        /// Identity of the offending parameter or settings key.
        parameter: &'static str,
    },
    /// I/O failure while reading configuration or annotation inputs.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// An annotation XML input could not be parsed.
    #[error("annotation document error: {0}")]
    Document(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Generator Configuration
// ============================================================================

/// The validated input bundle for one generation run.
///
/// Required fields never change after construction. The optional
/// advanced-configuration document may be set or cleared freely; callers
/// sharing a config across threads must finish such mutation before handing
/// the bundle out, which exclusive borrows already enforce.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Parsed annotation documents to mine for member comments.
    annotation_documents: Vec<AnnotationDocument>,
    /// Relative or absolute paths to the assemblies the annotations refer to.
    assembly_paths: Vec<PathBuf>,
    /// Version stamped into the generated document.
    document_version: String,
    /// Filter pipelines applied during generation.
    filter_config: FilterConfig,
    /// Optional document carrying advanced generation directives.
    advanced_configuration_document: Option<AnnotationDocument>,
}

impl GeneratorConfig {
    /// Creates a configuration with the standard filter pipelines.
    ///
    /// Empty sequences are accepted; `document_version` must contain at
    /// least one non-whitespace character.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingArgument`] when `document_version` is
    /// blank.
    pub fn new(
        annotation_documents: Vec<AnnotationDocument>,
        assembly_paths: Vec<PathBuf>,
        document_version: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::with_filter_config(
            annotation_documents,
            assembly_paths,
            document_version,
            FilterConfig::default(),
        )
    }

    /// Creates a configuration with an explicit filter selection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingArgument`] when `document_version` is
    /// blank.
    pub fn with_filter_config(
        annotation_documents: Vec<AnnotationDocument>,
        assembly_paths: Vec<PathBuf>,
        document_version: impl Into<String>,
        filter_config: FilterConfig,
    ) -> Result<Self, ConfigError> {
        let document_version = document_version.into();
        validate_document_version(&document_version)?;
        Ok(Self {
            annotation_documents,
            assembly_paths,
            document_version,
            filter_config,
            advanced_configuration_document: None,
        })
    }

    /// Returns a builder for staged assembly of the configuration.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Returns the parsed annotation documents.
    #[must_use]
    pub fn annotation_documents(&self) -> &[AnnotationDocument] {
        &self.annotation_documents
    }

    /// Returns the configured assembly paths.
    #[must_use]
    pub fn assembly_paths(&self) -> &[PathBuf] {
        &self.assembly_paths
    }

    /// Returns the target document version.
    #[must_use]
    pub fn document_version(&self) -> &str {
        &self.document_version
    }

    /// Returns the filter selection for this run.
    #[must_use]
    pub fn filter_config(&self) -> &FilterConfig {
        &self.filter_config
    }

    /// Returns the advanced-configuration document, if one was supplied.
    #[must_use]
    pub fn advanced_configuration_document(&self) -> Option<&AnnotationDocument> {
        self.advanced_configuration_document.as_ref()
    }

    /// Sets or clears the advanced-configuration document.
    pub fn set_advanced_configuration_document(
        &mut self,
        document: Option<AnnotationDocument>,
    ) {
        self.advanced_configuration_document = document;
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Staged assembly for [`GeneratorConfig`].
///
/// Every required field starts unset; [`build`](Self::build) reports the
/// first still-unset field as [`ConfigError::MissingArgument`]. Leaving the
/// filter selection unset applies the standard pipelines.
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    /// Staged annotation documents.
    annotation_documents: Option<Vec<AnnotationDocument>>,
    /// Staged assembly paths.
    assembly_paths: Option<Vec<PathBuf>>,
    /// Staged document version.
    document_version: Option<String>,
    /// Staged filter selection.
    filter_config: Option<FilterConfig>,
    /// Staged advanced-configuration document.
    advanced_configuration_document: Option<AnnotationDocument>,
}

impl GeneratorConfigBuilder {
    /// Stages the annotation documents.
    #[must_use]
    pub fn annotation_documents(mut self, documents: Vec<AnnotationDocument>) -> Self {
        self.annotation_documents = Some(documents);
        self
    }

    /// Stages the assembly paths.
    #[must_use]
    pub fn assembly_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.assembly_paths = Some(paths);
        self
    }

    /// Stages the document version.
    #[must_use]
    pub fn document_version(mut self, version: impl Into<String>) -> Self {
        self.document_version = Some(version.into());
        self
    }

    /// Stages an explicit filter selection.
    #[must_use]
    pub fn filter_config(mut self, filter_config: FilterConfig) -> Self {
        self.filter_config = Some(filter_config);
        self
    }

    /// Stages the advanced-configuration document.
    #[must_use]
    pub fn advanced_configuration_document(mut self, document: AnnotationDocument) -> Self {
        self.advanced_configuration_document = Some(document);
        self
    }

    /// Builds the configuration, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingArgument`] naming the first unset
    /// required field, or `document_version` when the staged version is
    /// blank.
    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        let annotation_documents = self
            .annotation_documents
            .ok_or(ConfigError::MissingArgument { parameter: "annotation_documents" })?;
        let assembly_paths = self
            .assembly_paths
            .ok_or(ConfigError::MissingArgument { parameter: "assembly_paths" })?;
        let document_version = self
            .document_version
            .ok_or(ConfigError::MissingArgument { parameter: "document_version" })?;
        let filter_config = self.filter_config.unwrap_or_default();
        let mut config = GeneratorConfig::with_filter_config(
            annotation_documents,
            assembly_paths,
            document_version,
            filter_config,
        )?;
        config.set_advanced_configuration_document(self.advanced_configuration_document);
        Ok(config)
    }
}

// ============================================================================
// SECTION: Filter Configuration
// ============================================================================

/// Filter selection for one generation run.
///
/// Each list is an ordered pipeline; the default selection runs every
/// standard filter in its documented order. Lists deserialize independently,
/// so a `[filters]` table may override any subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Filters applied to the document as a whole.
    #[serde(default = "default_document_filters")]
    pub document_filters: Vec<DocumentFilterKind>,
    /// Filters applied to each generated operation.
    #[serde(default = "default_operation_filters")]
    pub operation_filters: Vec<OperationFilterKind>,
    /// Filters applied to annotation elements before operation generation.
    #[serde(default = "default_pre_processing_operation_filters")]
    pub pre_processing_operation_filters: Vec<PreProcessingOperationFilterKind>,
    /// Filters applied to the assembled document after generation.
    #[serde(default = "default_post_processing_document_filters")]
    pub post_processing_document_filters: Vec<PostProcessingDocumentFilterKind>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            document_filters: default_document_filters(),
            operation_filters: default_operation_filters(),
            pre_processing_operation_filters: default_pre_processing_operation_filters(),
            post_processing_document_filters: default_post_processing_document_filters(),
        }
    }
}

impl FilterConfig {
    /// Validates the filter selection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a pipeline lists the same
    /// filter twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_unique(&self.document_filters, "filters.document_filters")?;
        ensure_unique(&self.operation_filters, "filters.operation_filters")?;
        ensure_unique(
            &self.pre_processing_operation_filters,
            "filters.pre_processing_operation_filters",
        )?;
        ensure_unique(
            &self.post_processing_document_filters,
            "filters.post_processing_document_filters",
        )?;
        Ok(())
    }
}

/// Returns the standard document filter pipeline.
pub(crate) fn default_document_filters() -> Vec<DocumentFilterKind> {
    DocumentFilterKind::standard().to_vec()
}

/// Returns the standard operation filter pipeline.
pub(crate) fn default_operation_filters() -> Vec<OperationFilterKind> {
    OperationFilterKind::standard().to_vec()
}

/// Returns the standard pre-processing operation filter pipeline.
pub(crate) fn default_pre_processing_operation_filters() -> Vec<PreProcessingOperationFilterKind> {
    PreProcessingOperationFilterKind::standard().to_vec()
}

/// Returns the standard post-processing document filter pipeline.
pub(crate) fn default_post_processing_document_filters() -> Vec<PostProcessingDocumentFilterKind> {
    PostProcessingDocumentFilterKind::standard().to_vec()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rejects a blank document version.
///
/// A blank version reports the same missing-argument kind as an absent one;
/// the error taxonomy deliberately stays that small.
fn validate_document_version(document_version: &str) -> Result<(), ConfigError> {
    if document_version.trim().is_empty() {
        return Err(ConfigError::MissingArgument { parameter: "document_version" });
    }
    Ok(())
}

/// Rejects a pipeline that lists the same filter twice.
fn ensure_unique<T: Hash + Eq + Copy>(pipeline: &[T], list: &str) -> Result<(), ConfigError> {
    let unique: HashSet<T> = pipeline.iter().copied().collect();
    if unique.len() != pipeline.len() {
        return Err(ConfigError::Invalid(format!("{list} must not repeat a filter")));
    }
    Ok(())
}
