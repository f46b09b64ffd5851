// annogen-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for annogen-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use annogen_config::GeneratorSettings;
use annogen_core::AnnotationDocument;

/// A minimal annotation XML body in the shape emitted by doc tooling.
pub const ANNOTATION_XML: &str = r#"<?xml version="1.0"?>
<doc>
    <assembly><name>Contoso.Service</name></assembly>
    <members>
        <member name="M:Contoso.Service.Get">
            <summary>Fetches a resource.</summary>
        </member>
    </members>
</doc>"#;

/// A minimal advanced generation directives XML body.
pub const ADVANCED_XML: &str = r#"<?xml version="1.0"?>
<advancedGenerationConfig>
    <documentVariants><variant name="internal"/></documentVariants>
</advancedGenerationConfig>"#;

/// A minimal valid `annogen.toml` payload.
pub const MINIMAL_SETTINGS_TOML: &str = r#"[generation]
annotation_xml_paths = ["service.xml"]
assembly_paths = ["service.dll"]
document_version = "V1"
"#;

/// Parses a TOML string into `GeneratorSettings` for tests.
pub fn settings_from_toml(toml_str: &str) -> Result<GeneratorSettings, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns minimal settings naming one annotation document and assembly.
pub fn minimal_settings() -> Result<GeneratorSettings, toml::de::Error> {
    settings_from_toml(MINIMAL_SETTINGS_TOML)
}

/// Parses the shared annotation XML into a document handle.
pub fn sample_document() -> Result<AnnotationDocument, String> {
    AnnotationDocument::parse_str(ANNOTATION_XML).map_err(|err| err.to_string())
}

/// Parses the shared advanced directives XML into a document handle.
pub fn advanced_document() -> Result<AnnotationDocument, String> {
    AnnotationDocument::parse_str(ADVANCED_XML).map_err(|err| err.to_string())
}
