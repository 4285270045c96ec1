//! Assembly of a ready-to-use [`Checker`] from a [`Config`].

use gocheckstyle_core::{BuildError, Checker, Config, SourceFormatter};
use gocheckstyle_go::{GoParser, Gofmt};
use gocheckstyle_rules::rules_from_config;
use tracing::debug;

/// Builds a Go [`Checker`] from a configuration.
///
/// The Go parser is always used. The formatter defaults to [`Gofmt`] and can
/// be replaced, which is how tests avoid depending on a Go toolchain.
pub struct CheckstyleBuilder {
    config: Config,
    formatter: Option<Box<dyn SourceFormatter>>,
}

impl CheckstyleBuilder {
    /// Creates a builder for the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            formatter: None,
        }
    }

    /// Uses a custom formatter for the `formated` rule.
    #[must_use]
    pub fn formatter<F: SourceFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Runs the given `gofmt` executable instead of the one on `PATH`.
    #[must_use]
    pub fn gofmt(self, program: impl Into<String>) -> Self {
        self.formatter(Gofmt::with_program(program))
    }

    /// Builds the checker.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying builder rejects the setup.
    pub fn build(self) -> Result<Checker, BuildError> {
        let formatter = self
            .formatter
            .unwrap_or_else(|| Box::new(Gofmt::new()));
        let set = rules_from_config(&self.config, formatter);
        debug!("Enabled {} rule(s)", set.len());

        let mut builder = Checker::builder()
            .parser(GoParser::new())
            .fatal_rules(self.config.fatal_rules());
        for rule in set.source_rules {
            builder = builder.source_rule_box(rule);
        }
        for rule in set.rules {
            builder = builder.rule_box(rule);
        }

        builder.build()
    }
}
