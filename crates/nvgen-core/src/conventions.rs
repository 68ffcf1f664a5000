//! Fixed literals spliced into the generated wrappers.
//!
//! The defaults reproduce the driver interface layer these wrappers are
//! compiled into: an `NV_STATUS` return type, the `nvidia_query` resolver and
//! the `NVLIB_EXPORTED` visibility macro.

pub const DEFAULT_FUNCTION_PREFIX: &str = "NVIDIA_RAW_";
pub const DEFAULT_STATUS_TYPE: &str = "NV_STATUS";
pub const DEFAULT_RESOLVER: &str = "nvidia_query";
pub const DEFAULT_EXPORT_MARKER: &str = "NVLIB_EXPORTED";
pub const DEFAULT_POINTER_VAR: &str = "pointer";
pub const DEFAULT_COMMENT_MARKER: char = '#';
pub const DEFAULT_BODY_EXTENSION: &str = "cpp";
pub const DEFAULT_HEADER_EXTENSION: &str = "h";

/// Suffix appended to the output prefix before the extension.
pub const GENERATED_STEM_SUFFIX: &str = "_gen";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conventions {
    pub function_prefix: String,
    pub status_type: String,
    pub resolver: String,
    pub export_marker: String,
    pub pointer_var: String,
    pub comment_marker: char,
    pub body_extension: String,
    pub header_extension: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Conventions {
            function_prefix: DEFAULT_FUNCTION_PREFIX.to_string(),
            status_type: DEFAULT_STATUS_TYPE.to_string(),
            resolver: DEFAULT_RESOLVER.to_string(),
            export_marker: DEFAULT_EXPORT_MARKER.to_string(),
            pointer_var: DEFAULT_POINTER_VAR.to_string(),
            comment_marker: DEFAULT_COMMENT_MARKER,
            body_extension: DEFAULT_BODY_EXTENSION.to_string(),
            header_extension: DEFAULT_HEADER_EXTENSION.to_string(),
        }
    }
}
