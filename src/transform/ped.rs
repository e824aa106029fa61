use tracing::debug;

use crate::core::rules::RuleSet;

/// Output of [`NameRewriter::rewrite`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PedRewrite {
    /// One tab-joined line per input line
    pub lines: Vec<String>,

    /// One identifier per non-blank input line, in input order
    pub rename_log: Vec<String>,

    /// Number of identifiers changed by a rule
    pub renamed: usize,
}

/// Split a PED line on spaces and tabs, collapsing runs of separators
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ' ' || c == '\t')
        .filter(|field| !field.is_empty())
        .collect()
}

/// Renames the sample identifier (first column) of PED lines.
///
/// Blank lines are emitted as empty lines and produce no log entry, so the log
/// is shorter than the rewritten file whenever the input has blank lines.
#[derive(Debug, Clone, Copy)]
pub struct NameRewriter<'a> {
    rules: &'a RuleSet,
}

impl<'a> NameRewriter<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    pub fn rewrite<S: AsRef<str>>(&self, input: &[S]) -> PedRewrite {
        let mut result = PedRewrite {
            lines: Vec::with_capacity(input.len()),
            rename_log: Vec::with_capacity(input.len()),
            renamed: 0,
        };

        for line in input {
            let mut fields = split_fields(line.as_ref());

            let renamed = fields
                .first()
                .and_then(|identifier| self.rules.first_rename(identifier));
            if let Some(renamed) = &renamed {
                fields[0] = renamed.as_str();
                result.renamed += 1;
            }
            if let Some(identifier) = fields.first() {
                result.rename_log.push((*identifier).to_string());
            }

            result.lines.push(fields.join("\t"));
        }

        debug!(
            lines = result.lines.len(),
            logged = result.rename_log.len(),
            renamed = result.renamed,
            "Rewrote PED identifiers"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(pairs: &[(&str, &str)]) -> RuleSet {
        let patterns: Vec<String> = pairs.iter().map(|(p, _)| p.to_string()).collect();
        let replacements: Vec<String> = pairs.iter().map(|(_, r)| r.to_string()).collect();
        RuleSet::from_lists(&patterns, &replacements).unwrap()
    }

    #[test]
    fn test_matching_rule_renames() {
        let rules = rules(&[("^F", "M")]);
        let result = NameRewriter::new(&rules).rewrite(&["FAM1 0 0 1 2"]);
        assert_eq!(result.lines, vec!["MAM1\t0\t0\t1\t2"]);
        assert_eq!(result.rename_log, vec!["MAM1"]);
        assert_eq!(result.renamed, 1);
    }

    #[test]
    fn test_no_match_keeps_identifier() {
        let rules = rules(&[("^F", "M")]);
        let result = NameRewriter::new(&rules).rewrite(&["XAM1 0 0 1 2"]);
        assert_eq!(result.lines, vec!["XAM1\t0\t0\t1\t2"]);
        assert_eq!(result.rename_log, vec!["XAM1"]);
        assert_eq!(result.renamed, 0);
    }

    #[test]
    fn test_blank_line_has_no_log_entry() {
        let rules = rules(&[("^F", "M")]);
        let result = NameRewriter::new(&rules).rewrite(&["FAM1 0 0 1 2", "", "FAM2 0 0 2 1"]);
        assert_eq!(result.lines.len(), 3);
        assert_eq!(result.lines[1], "");
        assert_eq!(result.rename_log, vec!["MAM1", "MAM2"]);
        assert_eq!(result.rename_log.len() + 1, result.lines.len());
    }

    #[test]
    fn test_whitespace_only_line_is_blank() {
        let rules = rules(&[]);
        let result = NameRewriter::new(&rules).rewrite(&[" \t  "]);
        assert_eq!(result.lines, vec![""]);
        assert!(result.rename_log.is_empty());
    }

    #[test]
    fn test_only_identifier_column_is_rewritten() {
        let rules = rules(&[("F", "M")]);
        let result = NameRewriter::new(&rules).rewrite(&["FAM1  FAM1\tF 0"]);
        assert_eq!(result.lines, vec!["MAM1\tFAM1\tF\t0"]);
    }

    #[test]
    fn test_first_rule_wins() {
        let rules = rules(&[("^X", "Y"), ("^F", "M"), ("^FAM", "Z")]);
        let result = NameRewriter::new(&rules).rewrite(&["FAM1 0", "XAM1 0"]);
        assert_eq!(result.rename_log, vec!["MAM1", "YAM1"]);
    }

    #[test]
    fn test_rewrite_is_idempotent_once_rules_stop_matching() {
        let rules = rules(&[("^F", "M")]);
        let rewriter = NameRewriter::new(&rules);
        let first = rewriter.rewrite(&["FAM1 0 0 1 2", "XAM1 0 0 1 2"]);
        let second = rewriter.rewrite(&first.lines);
        assert_eq!(second.lines, first.lines);
        assert_eq!(second.rename_log, first.rename_log);
        assert_eq!(second.renamed, 0);
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(split_fields("a  b\t\tc "), vec!["a", "b", "c"]);
        assert!(split_fields("").is_empty());
    }
}
