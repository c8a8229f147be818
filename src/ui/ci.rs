//! Diagnostics in the formats CI runners and Xcode pick out of build logs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    fn keyword(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A message optionally pinned to a file and line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<'a> {
    pub severity: Severity,
    pub message: &'a str,
    pub file: Option<&'a str>,
    pub line: Option<usize>,
}

impl<'a> Diagnostic<'a> {
    pub fn new(severity: Severity, message: &'a str) -> Self {
        Self {
            severity,
            message,
            file: None,
            line: None,
        }
    }

    pub fn at(mut self, file: Option<&'a str>, line: Option<usize>) -> Self {
        self.file = file;
        self.line = line;
        self
    }

    /// GitHub Actions workflow command (`::error file=..,line=..::msg`)
    pub fn github_annotation(&self, title: &str) -> String {
        let location = self
            .file
            .map(|f| format!("file={},", escape_workflow_value(f)))
            .unwrap_or_default();
        let line = self
            .line
            .filter(|_| self.file.is_some())
            .map(|l| format!("line={},", l))
            .unwrap_or_default();

        format!(
            "::{} {}{}title={}::{}",
            self.severity.keyword(),
            location,
            line,
            escape_workflow_value(title),
            escape_workflow_value(self.message)
        )
    }

    /// `file:line: error: msg`, the shape Xcode turns into an issue
    pub fn xcode_line(&self) -> String {
        let message = self.message.replace('\n', " ");
        let location = match (self.file, self.line) {
            (Some(file), Some(line)) => format!("{}:{}: ", file, line),
            (Some(file), None) => format!("{}: ", file),
            _ => String::new(),
        };
        format!("{}{}: {}", location, self.severity.keyword(), message)
    }
}

fn escape_workflow_value(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
