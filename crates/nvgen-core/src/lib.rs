//! Schema-driven generator for lazily-resolved driver entry point wrappers.
//!
//! A schema row `identifier,name_suffix,param_spec,...` becomes one C++
//! function that resolves its target through the driver's query entry point on
//! first call and forwards every argument, plus a matching exported
//! declaration.

pub mod compile;
pub mod conventions;
pub mod diagnostics;
pub mod emit;
pub mod schema;
mod util;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::conventions::Conventions;
use crate::emit::{Artifacts, OutputPaths, Provenance};

/// Reads, compiles and renders a schema without touching the output files.
pub fn render_schema(conv: &Conventions, schema_path: &Path) -> Result<Artifacts> {
    let schema = schema::read_schema(schema_path, conv.comment_marker)
        .with_context(|| format!("read schema: {}", schema_path.display()))?;
    let descriptors = compile::compile_rows(conv, &schema.rows)
        .with_context(|| format!("compile schema: {}", schema_path.display()))?;
    info!(
        schema = %schema_path.display(),
        functions = descriptors.len(),
        "compiled schema"
    );

    let provenance = Provenance {
        schema_name: schema_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| schema_path.display().to_string()),
        schema_sha256: util::sha256_hex(schema.source.as_bytes()),
    };
    Ok(emit::emit_artifacts(conv, Some(&provenance), &descriptors))
}

/// Runs the whole pipeline and writes `<prefix>_gen.cpp` and `<prefix>_gen.h`.
///
/// Every row is rendered before either file is opened, so a malformed row
/// leaves existing artifacts untouched.
pub fn generate(conv: &Conventions, schema_path: &Path, output_prefix: &str) -> Result<OutputPaths> {
    let artifacts = render_schema(conv, schema_path)?;
    let paths = OutputPaths::from_prefix(output_prefix, conv);
    emit::write_artifacts(&paths, &artifacts)
        .with_context(|| format!("write artifacts for prefix {output_prefix:?}"))?;
    Ok(paths)
}
