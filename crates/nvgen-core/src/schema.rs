use std::path::Path;

use anyhow::Result;

use crate::diagnostics::{Diagnostic, DiagnosticCode};

/// One data line of the schema, validated once at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRow {
    /// 1-based line in the schema file.
    pub line: usize,
    /// Hex digits of the entry point identifier, without any `0x` prefix.
    pub id: String,
    pub name_suffix: String,
    /// Parameter specifications exactly as written between the commas.
    pub param_specs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub source: String,
    pub rows: Vec<SchemaRow>,
}

pub fn read_schema(path: &Path, comment_marker: char) -> Result<Schema> {
    let src = std::fs::read_to_string(path).map_err(|err| {
        Diagnostic::error(
            DiagnosticCode::NVG0001UnreadableSchema,
            format!("{}: {err}", path.display()),
        )
    })?;
    let rows = parse_schema(&src, comment_marker)?;
    Ok(Schema { source: src, rows })
}

pub fn parse_schema(src: &str, comment_marker: char) -> Result<Vec<SchemaRow>, Diagnostic> {
    let mut rows = Vec::new();
    for (idx, raw) in src.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.starts_with(comment_marker) || line.trim().is_empty() {
            continue;
        }
        rows.push(parse_row(idx + 1, line)?);
    }
    Ok(rows)
}

fn parse_row(lno: usize, line: &str) -> Result<SchemaRow, Diagnostic> {
    let mut fields = line.split(',');
    let (Some(id), Some(name_suffix)) = (fields.next(), fields.next()) else {
        return Err(Diagnostic::at_line(
            DiagnosticCode::NVG0100MalformedRow,
            lno,
            format!("expected at least 2 comma-separated fields: {line:?}"),
        ));
    };

    let id = parse_identifier(lno, id.trim())?;
    let name_suffix = name_suffix.trim();
    if name_suffix.is_empty() || !name_suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(Diagnostic::at_line(
            DiagnosticCode::NVG0102BadNameSuffix,
            lno,
            format!("{name_suffix:?}"),
        ));
    }

    Ok(SchemaRow {
        line: lno,
        id,
        name_suffix: name_suffix.to_string(),
        param_specs: fields.map(str::to_string).collect(),
    })
}

fn parse_identifier(lno: usize, raw: &str) -> Result<String, Diagnostic> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Diagnostic::at_line(
            DiagnosticCode::NVG0101BadIdentifier,
            lno,
            format!("{raw:?}"),
        ));
    }
    Ok(digits.to_string())
}
