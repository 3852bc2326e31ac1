//! Duplicate detection
//!
//! Dependabot opens a new pull request for every version of a package it
//! sees. When several of them pile up for the same package in the same
//! repository, only the latest is worth reviewing; this module finds those
//! piles.

use super::ReviewUnit;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Extract the bumped package from a title such as `Bump lodash from 4.17.20 to 4.17.21`
pub fn package_name(title: &str) -> Option<&str> {
    static PACKAGE_REGEX: OnceLock<Regex> = OnceLock::new();

    let regex =
        PACKAGE_REGEX.get_or_init(|| Regex::new(r"\b(?i:bump) ([A-Za-z0-9@/-]+)").unwrap());

    regex
        .captures(title)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
}

/// Keep only units that share a package and repository with at least one other unit
///
/// Units whose title names no package are dropped with a warning. Output is
/// ordered by repository, then package, then number.
pub fn group_duplicates(units: Vec<ReviewUnit>) -> Vec<ReviewUnit> {
    let mut groups: BTreeMap<(String, String), Vec<ReviewUnit>> = BTreeMap::new();

    for unit in units {
        let Some(package) = unit.package().map(str::to_owned) else {
            log::warn!("No package found in title of {}: {:?}", unit, unit.title);
            continue;
        };
        groups
            .entry((unit.repository.clone(), package))
            .or_default()
            .push(unit);
    }

    groups
        .into_values()
        .filter(|group| group.len() >= 2)
        .flat_map(|mut group| {
            group.sort_by_key(|unit| unit.number);
            group
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unit(repository: &str, number: u64, title: &str) -> ReviewUnit {
        ReviewUnit::new(repository, number, title)
    }

    fn numbers(units: &[ReviewUnit]) -> Vec<(String, u64)> {
        units
            .iter()
            .map(|u| (u.repository.clone(), u.number))
            .collect()
    }

    #[test]
    fn test_package_name() {
        assert_eq!(
            package_name("Bump lodash from 4.17.20 to 4.17.21"),
            Some("lodash")
        );
        assert_eq!(
            package_name("build(deps): bump @types/node from 14 to 16"),
            Some("@types/node")
        );
        assert_eq!(package_name("BUMP golang.org/x/net"), Some("golang"));
        assert_eq!(package_name("Bump k8s-client"), Some("k8s-client"));
        assert_eq!(package_name("Update README"), None);
        assert_eq!(package_name("Rebump lodash"), None);
    }

    #[test]
    fn test_keeps_groups_of_two_or_more() {
        let result = group_duplicates(vec![
            unit("org/a", 1, "Bump lodash"),
            unit("org/a", 2, "bump lodash"),
            unit("org/a", 3, "Bump axios"),
        ]);
        assert_eq!(
            numbers(&result),
            vec![("org/a".to_string(), 1), ("org/a".to_string(), 2)]
        );
    }

    #[test]
    fn test_same_package_in_different_repositories_is_not_a_duplicate() {
        let result = group_duplicates(vec![
            unit("org/a", 1, "Bump lodash"),
            unit("org/b", 2, "Bump lodash"),
        ]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_unparsable_titles_are_dropped() {
        let result = group_duplicates(vec![
            unit("org/a", 1, "Bump foo"),
            unit("org/a", 2, "Update dependencies"),
            unit("org/a", 3, "Update dependencies"),
            unit("org/a", 4, "Bump foo"),
        ]);
        assert_eq!(
            numbers(&result),
            vec![("org/a".to_string(), 1), ("org/a".to_string(), 4)]
        );
    }

    #[test]
    fn test_output_is_sorted_by_repository_then_package_then_number() {
        let result = group_duplicates(vec![
            unit("org/b", 9, "Bump serde"),
            unit("org/a", 5, "Bump tokio"),
            unit("org/b", 3, "Bump serde"),
            unit("org/a", 4, "Bump axios"),
            unit("org/a", 2, "Bump tokio"),
            unit("org/a", 8, "Bump axios"),
        ]);
        assert_eq!(
            numbers(&result),
            vec![
                ("org/a".to_string(), 4),
                ("org/a".to_string(), 8),
                ("org/a".to_string(), 2),
                ("org/a".to_string(), 5),
                ("org/b".to_string(), 3),
                ("org/b".to_string(), 9),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(group_duplicates(Vec::new()).is_empty());
    }
}
