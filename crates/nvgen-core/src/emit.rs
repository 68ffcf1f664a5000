use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::compile::FunctionDescriptor;
use crate::conventions::{Conventions, GENERATED_STEM_SUFFIX};
use crate::diagnostics::{Diagnostic, DiagnosticCode};

/// Rendered text of both generated files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artifacts {
    pub body: String,
    pub header: String,
}

/// Where the schema came from, recorded at the top of each artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub schema_name: String,
    pub schema_sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub body: PathBuf,
    pub header: PathBuf,
}

impl OutputPaths {
    pub fn from_prefix(prefix: &str, conv: &Conventions) -> Self {
        let stem = format!("{prefix}{GENERATED_STEM_SUFFIX}");
        OutputPaths {
            body: PathBuf::from(format!("{stem}.{}", conv.body_extension)),
            header: PathBuf::from(format!("{stem}.{}", conv.header_extension)),
        }
    }
}

pub fn render_definition(conv: &Conventions, d: &FunctionDescriptor) -> String {
    let status = &conv.status_type;
    let ptr = &conv.pointer_var;
    format!(
        "{status} {name}({params}) {{\n  static {decl}  = 0;\n  if(!{ptr}) {{{ptr} = ({ty}){resolver}(0x{id}); }}\n  return (*{ptr})({args});\n}}\n\n",
        name = d.name,
        params = d.param_list,
        decl = d.pointer_decl,
        ty = d.pointer_type,
        resolver = conv.resolver,
        id = d.id,
        args = d.arg_list,
    )
}

pub fn render_declaration(conv: &Conventions, d: &FunctionDescriptor) -> String {
    format!(
        "{} {} {}({});\n\n",
        conv.export_marker, conv.status_type, d.name, d.param_list
    )
}

fn render_banner(p: &Provenance) -> String {
    format!(
        "// Generated by nvgen from {}. Do not edit.\n// source_sha256: {}\n\n",
        p.schema_name, p.schema_sha256
    )
}

/// Renders every descriptor, in order, into one body and one header buffer.
pub fn emit_artifacts(
    conv: &Conventions,
    provenance: Option<&Provenance>,
    descriptors: &[FunctionDescriptor],
) -> Artifacts {
    let mut out = Artifacts::default();
    if let Some(p) = provenance {
        let banner = render_banner(p);
        out.body.push_str(&banner);
        out.header.push_str(&banner);
    }
    for d in descriptors {
        out.body.push_str(&render_definition(conv, d));
        out.header.push_str(&render_declaration(conv, d));
    }
    out
}

pub fn write_artifacts(paths: &OutputPaths, artifacts: &Artifacts) -> Result<()> {
    write_one(&paths.body, &artifacts.body)?;
    write_one(&paths.header, &artifacts.header)
}

fn write_one(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text.as_bytes()).map_err(|err| {
        Diagnostic::error(
            DiagnosticCode::NVG0200UnwritableArtifact,
            format!("{}: {err}", path.display()),
        )
    })?;
    info!(path = %path.display(), bytes = text.len(), "wrote artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile_row;
    use crate::schema::SchemaRow;

    fn descriptor(id: &str, suffix: &str, specs: &[&str]) -> FunctionDescriptor {
        let row = SchemaRow {
            line: 1,
            id: id.to_string(),
            name_suffix: suffix.to_string(),
            param_specs: specs.iter().map(|s| s.to_string()).collect(),
        };
        compile_row(&Conventions::default(), &row).expect("compile")
    }

    #[test]
    fn definition_resolves_once_and_forwards() {
        let d = descriptor("20", "GetErrorString", &["const char * input", "char * output"]);
        assert_eq!(
            render_definition(&Conventions::default(), &d),
            "NV_STATUS NVIDIA_RAW_GetErrorString(const char * input, char * output) {\n\
             \x20 static NV_STATUS (*pointer)(const char *,char *)  = 0;\n\
             \x20 if(!pointer) {pointer = (NV_STATUS (*)(const char *,char *))nvidia_query(0x20); }\n\
             \x20 return (*pointer)(input, output);\n\
             }\n\n"
        );
    }

    #[test]
    fn declaration_is_exported_prototype() {
        let d = descriptor("20", "GetErrorString", &["const char * input", "char * output"]);
        assert_eq!(
            render_declaration(&Conventions::default(), &d),
            "NVLIB_EXPORTED NV_STATUS NVIDIA_RAW_GetErrorString(const char * input, char * output);\n\n"
        );
    }

    #[test]
    fn zero_param_function_calls_with_no_args() {
        let d = descriptor("0150E828", "Initialize", &[]);
        let body = render_definition(&Conventions::default(), &d);
        assert!(body.starts_with("NV_STATUS NVIDIA_RAW_Initialize() {\n"), "{body}");
        assert!(body.contains("nvidia_query(0x0150E828)"));
        assert!(body.contains("return (*pointer)();"));
    }

    #[test]
    fn duplicates_are_emitted_in_order() {
        let a = descriptor("1", "Same", &["int a"]);
        let b = descriptor("1", "Same", &["int a"]);
        let out = emit_artifacts(&Conventions::default(), None, &[a, b]);
        assert_eq!(out.header.matches("NVIDIA_RAW_Same(int a);").count(), 2);
        assert_eq!(out.body.matches("NVIDIA_RAW_Same(int a) {").count(), 2);
    }

    #[test]
    fn output_paths_follow_prefix() {
        let p = OutputPaths::from_prefix("out/nvidia_interface", &Conventions::default());
        assert_eq!(p.body, PathBuf::from("out/nvidia_interface_gen.cpp"));
        assert_eq!(p.header, PathBuf::from("out/nvidia_interface_gen.h"));
    }

    #[test]
    fn banner_leads_both_artifacts() {
        let prov = Provenance {
            schema_name: "nvapi.csv".to_string(),
            schema_sha256: "ab".repeat(32),
        };
        let out = emit_artifacts(&Conventions::default(), Some(&prov), &[]);
        assert_eq!(out.body, out.header);
        assert!(out.body.starts_with("// Generated by nvgen from nvapi.csv. Do not edit.\n"));
    }
}
