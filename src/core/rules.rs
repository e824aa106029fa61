use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::error::PipelineError;
use crate::utils::validation::validate_rule_lists;

/// A single rename rule: a regular expression and its replacement text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    pub pattern: String,
    pub replacement: String,
}

impl PatternRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    rule: PatternRule,
    regex: Regex,
}

/// An ordered list of rename rules with first-match-wins precedence.
///
/// Every pattern is compiled when the set is built, so a bad pattern is
/// reported before any line is touched.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile rules in precedence order
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidPattern` for the first pattern that is
    /// not a valid regular expression.
    pub fn new(rules: Vec<PatternRule>) -> Result<Self, PipelineError> {
        let rules = rules
            .into_iter()
            .map(|rule| {
                let regex =
                    Regex::new(&rule.pattern).map_err(|source| PipelineError::InvalidPattern {
                        pattern: rule.pattern.clone(),
                        source,
                    })?;
                Ok(CompiledRule { rule, regex })
            })
            .collect::<Result<Vec<_>, PipelineError>>()?;

        Ok(Self { rules })
    }

    /// Zip a pattern list and a replacement list positionally
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::ConfigurationMismatch` if the lists differ in
    /// length, or `PipelineError::InvalidPattern` if a pattern does not compile.
    pub fn from_lists(patterns: &[String], replacements: &[String]) -> Result<Self, PipelineError> {
        validate_rule_lists(patterns, replacements)?;

        let rules = patterns
            .iter()
            .zip(replacements)
            .map(|(pattern, replacement)| PatternRule::new(pattern, replacement))
            .collect();

        Self::new(rules)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply rules in order and return the output of the first one that
    /// changes `identifier`.
    ///
    /// A rule that matches but produces the same text does not count as a
    /// match; evaluation moves on to the next rule.
    pub fn first_rename(&self, identifier: &str) -> Option<String> {
        self.rules.iter().find_map(|compiled| {
            let renamed = compiled
                .regex
                .replace_all(identifier, compiled.rule.replacement.as_str());
            (renamed != identifier).then(|| renamed.into_owned())
        })
    }
}
