use std::borrow::Cow;

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::core::error::PipelineError;
use crate::core::types::MatchMode;

/// Ordered multi-pass replace over a collection of lines.
///
/// Each `(pattern, replacement)` pair is one pass. Passes run in the order
/// given and every pass replaces all occurrences on every line, so later
/// passes see the output of earlier ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstitutionEngine {
    mode: MatchMode,
}

impl SubstitutionEngine {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    fn compile(&self, pattern: &str) -> Result<Regex, PipelineError> {
        let source = match self.mode {
            MatchMode::Regex => Cow::Borrowed(pattern),
            MatchMode::Literal => Cow::Owned(regex::escape(pattern)),
        };

        Regex::new(&source).map_err(|source| PipelineError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
    }

    /// Run every pass over `lines`, mutating them in place.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidPattern` if a pattern does not compile.
    /// Passes before the bad pattern have already been applied to `lines`.
    pub fn apply<P, R>(&self, lines: &mut [String], pairs: &[(P, R)]) -> Result<(), PipelineError>
    where
        P: AsRef<str>,
        R: AsRef<str>,
    {
        for (pattern, replacement) in pairs {
            let regex = self.compile(pattern.as_ref())?;
            let replacement = replacement.as_ref();
            let mut changed = 0usize;

            for line in lines.iter_mut() {
                let replaced = match self.mode {
                    MatchMode::Regex => regex.replace_all(line.as_str(), replacement),
                    MatchMode::Literal => regex.replace_all(line.as_str(), NoExpand(replacement)),
                };
                let replaced = match replaced {
                    Cow::Borrowed(_) => continue,
                    Cow::Owned(replaced) => replaced,
                };
                *line = replaced;
                changed += 1;
            }

            debug!(
                pattern = pattern.as_ref(),
                replacement, changed, "Substitution pass"
            );
        }

        Ok(())
    }
}
