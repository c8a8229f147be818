//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unchanged: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale: Option<usize>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            written: None,
            unchanged: None,
            stale: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            success: false,
            ..Self::success(command)
        }
    }

    pub fn with_counts(mut self, written: usize, unchanged: usize) -> Self {
        self.written = Some(written);
        self.unchanged = Some(unchanged);
        self
    }

    pub fn with_stale(mut self, stale: usize) -> Self {
        self.stale = Some(stale);
        self
    }
}

/// One generated artifact and what happened to it.
#[derive(Debug, Clone, Serialize)]
pub struct FileEvent<'a> {
    pub event: &'static str,
    pub path: String,
    pub status: &'a str,
    pub language: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<&'a str>,
}

impl<'a> FileEvent<'a> {
    pub fn new(path: String, status: &'a str, language: &'a str, variant: Option<&'a str>) -> Self {
        Self {
            event: "file",
            path,
            status,
            language,
            variant,
        }
    }
}

/// One catalog asset and its symbol.
#[derive(Debug, Clone, Serialize)]
pub struct AssetEvent<'a> {
    pub event: &'static str,
    pub name: &'a str,
    pub kind: &'a str,
    pub symbol: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<&'a str>,
}

impl<'a> AssetEvent<'a> {
    pub fn new(name: &'a str, kind: &'a str, symbol: &'a str, variant: Option<&'a str>) -> Self {
        Self {
            event: "asset",
            name,
            kind,
            symbol,
            variant,
        }
    }
}

/// Non-fatal warning (e.g. unknown config key).
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub message: String,
}

impl WarningEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            message: message.into(),
        }
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            code,
            message: message.into(),
            asset: None,
        }
    }

    pub fn with_asset(mut self, asset: Option<&str>) -> Self {
        self.asset = asset.map(str::to_string);
        self
    }
}
