use std::collections::HashSet;

/// Identifiers of this many characters or fewer are treated as already-short
/// chromosome names, not contigs.
pub const MAX_TRIVIAL_NAME_LENGTH: usize = 2;

/// First tab-delimited field of a MAP line
pub fn first_field(line: &str) -> &str {
    line.split('\t').next().unwrap_or_default()
}

/// Distinct contig identifiers in order of first appearance.
///
/// Must be called on the original lines, before any substitution pass has
/// rewritten them.
pub fn extract_unique_contigs<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut contigs = Vec::new();

    for line in lines {
        let name = first_field(line.as_ref());
        if name.chars().count() <= MAX_TRIVIAL_NAME_LENGTH {
            continue;
        }
        if seen.insert(name) {
            contigs.push(name.to_string());
        }
    }

    contigs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order_without_duplicates() {
        let map = [
            "scaffold_10\tm1\t0\t100",
            "scaffold_2\tm2\t0\t200",
            "scaffold_10\tm3\t0\t300",
        ];
        assert_eq!(
            extract_unique_contigs(&map),
            vec!["scaffold_10".to_string(), "scaffold_2".to_string()]
        );
    }

    #[test]
    fn test_short_names_excluded() {
        let map = ["1\tm1", "XY\tm2", "chr\tm3", "", "MT\tm4"];
        assert_eq!(extract_unique_contigs(&map), vec!["chr".to_string()]);
    }

    #[test]
    fn test_length_counts_characters() {
        // Two characters, four bytes
        let map = ["éé\tm1", "ééé\tm2"];
        assert_eq!(extract_unique_contigs(&map), vec!["ééé".to_string()]);
    }

    #[test]
    fn test_first_field() {
        assert_eq!(first_field("scaffold_1\tm1\t0"), "scaffold_1");
        assert_eq!(first_field("no tabs here"), "no tabs here");
        assert_eq!(first_field(""), "");
        assert_eq!(first_field("\tm1"), "");
    }
}
