use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Setting or file that caused the error (e.g., "OPENAI_BASE_URL", "en_A_spades.mp3")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected format, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "openai_tts", "azure_tts")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for card audio generation.
#[derive(Debug, Error)]
pub enum Error {
    /// A required credential is absent. This is the only condition that stops
    /// a run before it starts.
    #[error("{variable} not found")]
    MissingCredential {
        variable: &'static str,
        hint: String,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {message}{}", format_context(.context))]
    Network {
        message: String,
        context: ErrorContext,
    },

    #[error("Remote error: HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Runtime error: {message}{}", format_context(.context))]
    Runtime {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn missing_credential(variable: &'static str, hint: impl Into<String>) -> Self {
        Error::MissingCredential {
            variable,
            hint: hint.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new network error with structured context
    pub fn network_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Network {
            message: msg.into(),
            context,
        }
    }

    /// Create a new runtime error with structured context
    pub fn runtime_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Runtime {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. }
            | Error::Network { context, .. }
            | Error::Runtime { context, .. } => Some(context),
            _ => None,
        }
    }
}
