// annogen-core/src/filters.rs
// ============================================================================
// Module: Filter Vocabulary
// Description: Closed enums naming the generation filters per pipeline stage.
// Purpose: Provide stable, serializable filter names with standard orderings.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Generation runs four ordered filter pipelines: document filters,
//! operation filters, pre-processing operation filters, and post-processing
//! document filters. This module names every filter the pipeline can run and
//! fixes the standard order for each stage. The filters themselves are
//! implemented by the generation pipeline, not here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Document Filters
// ============================================================================

/// Filters applied to the document as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFilterKind {
    /// Populates the document info section from the assembly name.
    AssemblyNameToInfo,
    /// Maps annotated service URLs to server entries.
    UrlToServer,
    /// Copies member summaries onto the matching schema descriptions.
    MemberSummaryToSchemaDescription,
}

impl DocumentFilterKind {
    /// Returns the standard document filter pipeline, in execution order.
    #[must_use]
    pub const fn standard() -> &'static [Self] {
        &[Self::AssemblyNameToInfo, Self::UrlToServer, Self::MemberSummaryToSchemaDescription]
    }
}

// ============================================================================
// SECTION: Operation Filters
// ============================================================================

/// Filters applied to each generated operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationFilterKind {
    /// Maps group tags to OpenAPI tags.
    GroupToTag,
    /// Maps param tags to OpenAPI parameters.
    ParamToParameter,
    /// Maps remarks tags to operation descriptions.
    RemarksToDescription,
    /// Maps response tags to OpenAPI responses.
    ResponseToResponse,
    /// Maps summary tags to operation summaries.
    SummaryToSummary,
}

impl OperationFilterKind {
    /// Returns the standard operation filter pipeline, in execution order.
    #[must_use]
    pub const fn standard() -> &'static [Self] {
        &[
            Self::GroupToTag,
            Self::ParamToParameter,
            Self::RemarksToDescription,
            Self::ResponseToResponse,
            Self::SummaryToSummary,
        ]
    }
}

// ============================================================================
// SECTION: Pre-Processing Operation Filters
// ============================================================================

/// Filters applied to annotation elements before operation generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreProcessingOperationFilterKind {
    /// Rewrites alternative param tag spellings into the canonical form.
    ConvertAlternativeParamTags,
    /// Populates missing `in` attributes on param tags.
    PopulateInAttribute,
    /// Validates `in` attributes on param tags.
    ValidateInAttribute,
}

impl PreProcessingOperationFilterKind {
    /// Returns the standard pre-processing pipeline, in execution order.
    #[must_use]
    pub const fn standard() -> &'static [Self] {
        &[Self::ConvertAlternativeParamTags, Self::PopulateInAttribute, Self::ValidateInAttribute]
    }
}

// ============================================================================
// SECTION: Post-Processing Document Filters
// ============================================================================

/// Filters applied to the assembled document after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostProcessingDocumentFilterKind {
    /// Removes operations whose generation failed from the document.
    RemoveFailedGenerationOperation,
}

impl PostProcessingDocumentFilterKind {
    /// Returns the standard post-processing pipeline, in execution order.
    #[must_use]
    pub const fn standard() -> &'static [Self] {
        &[Self::RemoveFailedGenerationOperation]
    }
}
