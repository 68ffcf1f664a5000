use tracing::debug;

use crate::conventions::Conventions;
use crate::diagnostics::{Diagnostic, DiagnosticCode};
use crate::schema::SchemaRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

/// A compiled row, ready for rendering.
///
/// `params` has one entry per parameter specification of the source row and
/// their types, joined with `,`, are exactly the argument list inside
/// `pointer_type` and `pointer_decl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub line: usize,
    pub id: String,
    pub name: String,
    pub params: Vec<Param>,
    /// The row's parameter specifications as written, joined with `", "`.
    pub param_list: String,
    /// Parameter names joined with `", "`, used to forward the call.
    pub arg_list: String,
    pub pointer_type: String,
    pub pointer_decl: String,
}

impl FunctionDescriptor {
    pub fn param_types(&self) -> String {
        self.params
            .iter()
            .map(|p| p.ty.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub fn compile_rows(conv: &Conventions, rows: &[SchemaRow]) -> Result<Vec<FunctionDescriptor>, Diagnostic> {
    rows.iter().map(|row| compile_row(conv, row)).collect()
}

pub fn compile_row(conv: &Conventions, row: &SchemaRow) -> Result<FunctionDescriptor, Diagnostic> {
    let mut params = Vec::with_capacity(row.param_specs.len());
    for (idx, spec) in row.param_specs.iter().enumerate() {
        params.push(split_param(row.line, idx + 1, spec)?);
    }

    let types = params
        .iter()
        .map(|p| p.ty.as_str())
        .collect::<Vec<_>>()
        .join(",");
    let arg_list = params
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let d = FunctionDescriptor {
        line: row.line,
        id: row.id.clone(),
        name: format!("{}{}", conv.function_prefix, row.name_suffix),
        param_list: row.param_specs.join(", "),
        arg_list,
        pointer_type: format!("{} (*)({types})", conv.status_type),
        pointer_decl: format!("{} (*{})({types})", conv.status_type, conv.pointer_var),
        params,
    };
    debug!(line = d.line, name = %d.name, id = %d.id, params = d.params.len(), "compiled row");
    Ok(d)
}

/// Splits `"<type tokens> <name>"`: the last whitespace-separated token is
/// the name, everything before it is the type.
fn split_param(lno: usize, pos: usize, spec: &str) -> Result<Param, Diagnostic> {
    let tokens: Vec<&str> = spec.split_whitespace().collect();
    let Some((name, ty)) = tokens.split_last() else {
        return Err(Diagnostic::at_line(
            DiagnosticCode::NVG0110MalformedParam,
            lno,
            format!("parameter {pos} is empty"),
        ));
    };
    if ty.is_empty() {
        return Err(Diagnostic::at_line(
            DiagnosticCode::NVG0110MalformedParam,
            lno,
            format!("parameter {pos} has no type: {spec:?}"),
        ));
    }
    Ok(Param {
        ty: ty.join(" "),
        name: name.to_string(),
    })
}
