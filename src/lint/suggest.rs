//! Typo correction for rule identifiers.

use crate::schema::SchemaRegistry;

/// Largest edit distance at which a registered identifier is suggested.
pub const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Suggest a registered rule identifier for a possibly misspelled one.
///
/// An exact case-insensitive hit returns the canonical identifier. Otherwise
/// an identifier is a candidate when either string contains the other, or
/// when their edit distance is at most [`MAX_SUGGESTION_DISTANCE`]. The
/// closest candidate wins; ties go to the earlier identifier in registry
/// order. Use [`rule_suggestions`] to see every tied candidate.
pub fn suggest_rule<'a>(registry: &'a SchemaRegistry, name: &str) -> Option<&'a str> {
    rule_suggestions(registry, name).into_iter().next()
}

/// Every registered identifier at the closest distance to `name`, in
/// registry order.
///
/// More than one entry means the typo is ambiguous.
pub fn rule_suggestions<'a>(registry: &'a SchemaRegistry, name: &str) -> Vec<&'a str> {
    if name.is_empty() {
        return Vec::new();
    }
    if let Some((id, _)) = registry.get(name) {
        return vec![id];
    }

    let wanted = name.to_lowercase();
    let mut best_distance = usize::MAX;
    let mut best: Vec<&str> = Vec::new();

    for id in registry.rule_ids() {
        let candidate = id.to_lowercase();
        let distance = levenshtein_distance(&wanted, &candidate);
        let overlaps = candidate.contains(&wanted) || wanted.contains(&candidate);

        if !overlaps && distance > MAX_SUGGESTION_DISTANCE {
            continue;
        }
        if distance < best_distance {
            best_distance = distance;
            best.clear();
        }
        if distance == best_distance {
            best.push(id);
        }
    }

    if !best.is_empty() {
        tracing::trace!(
            "Suggesting {:?} for '{}' (distance {})",
            best,
            name,
            best_distance
        );
    }

    best
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut dp = vec![vec![0; n + 1]; m + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[m][n]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RuleSchema;

    fn registry(ids: &[&str]) -> SchemaRegistry {
        let mut registry = SchemaRegistry::new();
        for id in ids {
            registry.register(*id, RuleSchema::default());
        }
        registry
    }

    #[test]
    fn distance_basics() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "ab"), 2);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("MD013", "MD013"), 0);
        assert_eq!(levenshtein_distance("MD999", "MD099"), 1);
    }

    #[test]
    fn exact_match_ignores_case() {
        let registry = registry(&["MD013"]);
        assert_eq!(suggest_rule(&registry, "md013"), Some("MD013"));
    }

    #[test]
    fn suggests_within_distance_two() {
        let registry = registry(&["MD001", "MD013"]);
        assert_eq!(suggest_rule(&registry, "MD13"), Some("MD013"));
    }

    #[test]
    fn prefers_closest_candidate() {
        let registry = registry(&["MD009", "MD099"]);
        assert_eq!(suggest_rule(&registry, "MD999"), Some("MD099"));
    }

    #[test]
    fn ties_go_to_registry_order() {
        let registry = registry(&["MD019", "MD009"]);
        assert_eq!(suggest_rule(&registry, "MD999"), Some("MD009"));
    }

    #[test]
    fn reports_every_tied_candidate() {
        let registry = registry(&["MD001", "MD013", "MD030"]);
        assert_eq!(rule_suggestions(&registry, "MD0013"), vec!["MD001", "MD013"]);
        assert_eq!(rule_suggestions(&registry, "MD13"), vec!["MD013"]);
        assert_eq!(rule_suggestions(&registry, "md030"), vec!["MD030"]);
    }

    #[test]
    fn substring_matches_regardless_of_distance() {
        let registry = registry(&["MD013"]);
        assert_eq!(suggest_rule(&registry, "rule-MD013-long"), Some("MD013"));
    }

    #[test]
    fn no_suggestion_when_too_far() {
        let registry = registry(&["MD001"]);
        assert_eq!(suggest_rule(&registry, "XYZ999"), None);
    }

    #[test]
    fn empty_name_has_no_suggestion() {
        let registry = registry(&["MD001"]);
        assert_eq!(suggest_rule(&registry, ""), None);
    }
}
