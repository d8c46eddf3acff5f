//! Parser context configuration.

/// Options for a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Emit a `debug` tracing event for every consumed token
    pub trace_matches: bool,
    /// Indentation of cross-reference continuation lines in rendered diagnostics
    pub continuation_indent: usize,
    /// Error count at which [`crate::parser::ParserCtx::error_limit_reached`] starts returning `true`
    pub error_limit: Option<usize>,
    /// Also print every diagnostic to stderr, whatever the sink does with it
    pub echo_diagnostics: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            trace_matches: true,
            continuation_indent: 5,
            error_limit: None,
            echo_diagnostics: false,
        }
    }
}

impl ParserConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable per-match tracing
    pub fn with_trace_matches(mut self, enabled: bool) -> Self {
        self.trace_matches = enabled;
        self
    }

    /// Set the continuation-line indentation
    pub fn with_continuation_indent(mut self, width: usize) -> Self {
        self.continuation_indent = width;
        self
    }

    /// Set the error limit the driver wants to observe
    pub fn with_error_limit(mut self, limit: usize) -> Self {
        self.error_limit = Some(limit);
        self
    }

    /// Echo diagnostics to stderr
    pub fn with_echo_diagnostics(mut self, enabled: bool) -> Self {
        self.echo_diagnostics = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert!(config.trace_matches);
        assert_eq!(config.continuation_indent, 5);
        assert_eq!(config.error_limit, None);
        assert!(!config.echo_diagnostics);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(ParserConfig::new(), ParserConfig::default());
    }

    #[test]
    fn test_builder_chain() {
        let config = ParserConfig::new()
            .with_trace_matches(false)
            .with_continuation_indent(2)
            .with_error_limit(20)
            .with_echo_diagnostics(true);
        assert!(!config.trace_matches);
        assert_eq!(config.continuation_indent, 2);
        assert_eq!(config.error_limit, Some(20));
        assert!(config.echo_diagnostics);
    }
}
