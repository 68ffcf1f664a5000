use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Read,
    Compile,
    Emit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticCode {
    NVG0001UnreadableSchema,
    NVG0100MalformedRow,
    NVG0101BadIdentifier,
    NVG0102BadNameSuffix,
    NVG0110MalformedParam,
    NVG0200UnwritableArtifact,
}

impl DiagnosticCode {
    pub fn code_str(self) -> &'static str {
        match self {
            DiagnosticCode::NVG0001UnreadableSchema => "NVG0001",
            DiagnosticCode::NVG0100MalformedRow => "NVG0100",
            DiagnosticCode::NVG0101BadIdentifier => "NVG0101",
            DiagnosticCode::NVG0102BadNameSuffix => "NVG0102",
            DiagnosticCode::NVG0110MalformedParam => "NVG0110",
            DiagnosticCode::NVG0200UnwritableArtifact => "NVG0200",
        }
    }

    pub fn phase(self) -> Phase {
        match self {
            DiagnosticCode::NVG0001UnreadableSchema
            | DiagnosticCode::NVG0100MalformedRow
            | DiagnosticCode::NVG0101BadIdentifier
            | DiagnosticCode::NVG0102BadNameSuffix => Phase::Read,
            DiagnosticCode::NVG0110MalformedParam => Phase::Compile,
            DiagnosticCode::NVG0200UnwritableArtifact => Phase::Emit,
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            DiagnosticCode::NVG0001UnreadableSchema => "failed to read schema file",
            DiagnosticCode::NVG0100MalformedRow => "malformed schema row",
            DiagnosticCode::NVG0101BadIdentifier => "identifier is not a hexadecimal literal",
            DiagnosticCode::NVG0102BadNameSuffix => "function name suffix is not an identifier",
            DiagnosticCode::NVG0110MalformedParam => "parameter has no separable type and name",
            DiagnosticCode::NVG0200UnwritableArtifact => "failed to write generated artifact",
        }
    }

    pub fn default_help(self) -> Option<&'static str> {
        match self {
            DiagnosticCode::NVG0100MalformedRow => {
                Some("Rows are `identifier,name_suffix,param_spec,...` with at least two fields.")
            }
            DiagnosticCode::NVG0110MalformedParam => Some(
                "Write each parameter as `<type tokens> <name>`; the last token is the name.",
            ),
            _ => None,
        }
    }
}

/// A fatal, row-addressed generator error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    /// 1-based schema line, when the failure belongs to a row.
    pub line: Option<usize>,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            line: None,
            message: message.into(),
            help: code.default_help().map(|s| s.to_string()),
        }
    }

    pub fn at_line(code: DiagnosticCode, line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            line: Some(line),
            ..Diagnostic::error(code, message)
        }
    }

    pub fn phase(&self) -> Phase {
        self.code.phase()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.code.code_str(), self.phase())?;
        if let Some(line) = self.line {
            write!(f, " line {line}")?;
        }
        write!(f, ": {}: {}", self.code.default_message(), self.message)?;
        if let Some(help) = &self.help {
            write!(f, "\n  help: {help}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_line_and_help() {
        let d = Diagnostic::at_line(DiagnosticCode::NVG0110MalformedParam, 7, "parameter 1: \"flag\"");
        let s = d.to_string();
        assert!(s.starts_with("NVG0110 Compile line 7: "), "{s}");
        assert!(s.contains("\"flag\""));
        assert!(s.contains("help: "));
    }

    #[test]
    fn codes_without_help_render_single_line() {
        let d = Diagnostic::error(DiagnosticCode::NVG0001UnreadableSchema, "nope.csv");
        assert_eq!(d.to_string().lines().count(), 1);
        assert_eq!(d.phase(), Phase::Read);
    }
}
