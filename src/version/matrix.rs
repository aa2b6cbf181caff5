//! Minimum-macOS constraint to supported release table for casks

use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};

/// Constraints and the releases satisfying them, newest release first.
///
/// Big Sur is published as either 11.0 or 10.16. The arm64 entry is spelled
/// without an underscore as in the published table, so it never equals the
/// `arm64_big_sur` CLI identifier.
const BUILTIN: &[(&str, &[&str])] = &[
    (">=11.0", &["arm64big_sur", "big_sur"]),
    (">=10.16", &["arm64big_sur", "big_sur"]),
    (">=10.15", &["arm64big_sur", "big_sur", "catalina"]),
    (">=10.14", &["arm64big_sur", "big_sur", "catalina", "mojave"]),
    (
        ">=10.13",
        &["arm64big_sur", "big_sur", "catalina", "mojave", "high_sierra"],
    ),
    (
        ">=10.12",
        &[
            "arm64big_sur",
            "big_sur",
            "catalina",
            "mojave",
            "high_sierra",
            "sierra",
        ],
    ),
    (
        ">=10.11",
        &[
            "arm64big_sur",
            "big_sur",
            "catalina",
            "mojave",
            "high_sierra",
            "el_capitan",
        ],
    ),
];

static BUILTIN_MATRIX: LazyLock<SupportMatrix> = LazyLock::new(|| SupportMatrix::new(BUILTIN));

/// Immutable lookup from a `>=<version>` constraint to supported releases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportMatrix {
    entries: IndexMap<String, IndexSet<String>>,
}

impl SupportMatrix {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(constraint, versions)| {
                    (
                        constraint.to_string(),
                        versions.iter().map(|v| v.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// The table shipped with the tool
    pub fn builtin() -> &'static SupportMatrix {
        &BUILTIN_MATRIX
    }

    /// Releases satisfying `constraint` (e.g. `">=10.14"`)
    pub fn get(&self, constraint: &str) -> Option<&IndexSet<String>> {
        self.entries.get(constraint)
    }

    pub fn constraints(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(">=11.0", vec!["arm64big_sur", "big_sur"])]
    #[case(">=10.16", vec!["arm64big_sur", "big_sur"])]
    #[case(">=10.14", vec!["arm64big_sur", "big_sur", "catalina", "mojave"])]
    #[case(
        ">=10.12",
        vec!["arm64big_sur", "big_sur", "catalina", "mojave", "high_sierra", "sierra"]
    )]
    fn builtin_maps_constraint_to_releases_in_order(
        #[case] constraint: &str,
        #[case] expected: Vec<&str>,
    ) {
        let versions = SupportMatrix::builtin().get(constraint).unwrap();

        assert_eq!(versions.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn builtin_el_capitan_row_skips_sierra() {
        let versions = SupportMatrix::builtin().get(">=10.11").unwrap();

        assert!(versions.contains("el_capitan"));
        assert!(!versions.contains("sierra"));
    }

    #[test]
    fn builtin_lists_constraints_in_declaration_order() {
        let constraints: Vec<&str> = SupportMatrix::builtin().constraints().collect();

        assert_eq!(
            constraints,
            vec![">=11.0", ">=10.16", ">=10.15", ">=10.14", ">=10.13", ">=10.12", ">=10.11"]
        );
    }

    #[rstest]
    #[case(">=12")]
    #[case(">=10.9")]
    #[case("10.14")]
    fn get_returns_none_for_unknown_constraint(#[case] constraint: &str) {
        assert_eq!(SupportMatrix::builtin().get(constraint), None);
    }
}
