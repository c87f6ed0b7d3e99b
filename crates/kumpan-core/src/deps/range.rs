//! npm-style version ranges evaluated with `semver`
//!
//! `semver::VersionReq` covers single comparator sets; npm ranges add `||`
//! alternatives, space-separated comparators, hyphen ranges and `x` wildcards.
//! Dist-tags such as `latest` are not ranges and do not parse.

use semver::{Comparator, Op, Prerelease, Version, VersionReq};

/// An npm range: any of the alternatives must match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    alternatives: Vec<VersionReq>,
}

impl Range {
    /// Parse an npm range; `None` if any alternative is not understood
    pub fn parse(input: &str) -> Option<Self> {
        let alternatives = input
            .split("||")
            .map(parse_comparator_set)
            .collect::<Option<Vec<_>>>()?;
        Some(Self { alternatives })
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }

    /// Lowest version that satisfies the range, like npm's `minVersion`
    pub fn min_version(&self) -> Option<Version> {
        let zero = Version::new(0, 0, 0);
        if self.matches(&zero) {
            return Some(zero);
        }

        self.alternatives
            .iter()
            .filter_map(|req| {
                let candidate = req
                    .comparators
                    .iter()
                    .filter_map(lower_bound)
                    .max()
                    .unwrap_or_else(|| Version::new(0, 0, 0));
                req.matches(&candidate).then_some(candidate)
            })
            .min()
    }
}

/// Minimum version satisfying `range`, or `None` for unparsable/unsatisfiable ranges
pub fn min_version(range: &str) -> Option<Version> {
    Range::parse(range)?.min_version()
}

/// Whether `version` satisfies `range`; unparsable ranges are never satisfied
pub fn satisfies(version: &Version, range: &str) -> bool {
    Range::parse(range).is_some_and(|r| r.matches(version))
}

fn parse_comparator_set(input: &str) -> Option<VersionReq> {
    let input = input.trim();
    if input.is_empty() || matches!(input, "*" | "x" | "X") {
        return Some(VersionReq::STAR);
    }

    if let Some((low, high)) = input.split_once(" - ") {
        let req = format!(">={}, <={}", strip_v(low.trim()), strip_v(high.trim()));
        return VersionReq::parse(&req).ok();
    }

    let mut comparators = Vec::new();
    let mut pending_op: Option<&str> = None;
    for token in input.split_whitespace() {
        if token.chars().all(|c| matches!(c, '<' | '>' | '=' | '^' | '~')) {
            pending_op = Some(token);
            continue;
        }
        let comparator = match pending_op.take() {
            Some(op) => format!("{}{}", op, strip_v(token)),
            None => normalize_comparator(token),
        };
        comparators.push(comparator);
    }

    VersionReq::parse(&comparators.join(", ")).ok()
}

/// Drop a `v` prefix that follows the operator (`>=v1.2.0` -> `>=1.2.0`)
///
/// A bare version is exact in npm but a caret requirement in `semver`, so it
/// gets an explicit `=` unless it is a wildcard (`1.x`).
fn normalize_comparator(token: &str) -> String {
    let split = token
        .find(|c: char| !matches!(c, '<' | '>' | '=' | '^' | '~'))
        .unwrap_or(token.len());
    let (op, version) = token.split_at(split);
    let version = strip_v(version);
    let is_wildcard = version.contains(['*', 'x', 'X']);
    if op.is_empty() && !is_wildcard {
        format!("={}", version)
    } else {
        format!("{}{}", op, version)
    }
}

fn strip_v(version: &str) -> &str {
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}

/// Smallest version a single comparator admits, `None` for upper bounds
fn lower_bound(comparator: &Comparator) -> Option<Version> {
    let mut version = Version {
        major: comparator.major,
        minor: comparator.minor.unwrap_or(0),
        patch: comparator.patch.unwrap_or(0),
        pre: comparator.pre.clone(),
        build: semver::BuildMetadata::EMPTY,
    };

    match comparator.op {
        Op::Greater => {
            if comparator.minor.is_none() {
                version = Version::new(comparator.major + 1, 0, 0);
            } else if comparator.patch.is_none() {
                version = Version::new(comparator.major, version.minor + 1, 0);
            } else if comparator.pre.is_empty() {
                version.patch += 1;
            } else {
                version.pre = Prerelease::new(&format!("{}.0", comparator.pre)).ok()?;
            }
            Some(version)
        }
        Op::Less | Op::LessEq => None,
        _ => Some(version),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_min_version_common_ranges() {
        assert_eq!(min_version("^1.0.0"), Some(v("1.0.0")));
        assert_eq!(min_version("~1.2.3"), Some(v("1.2.3")));
        assert_eq!(min_version("1.2.3"), Some(v("1.2.3")));
        assert_eq!(min_version(">=2.1.0"), Some(v("2.1.0")));
        assert_eq!(min_version("^18"), Some(v("18.0.0")));
        assert_eq!(min_version("1.x"), Some(v("1.0.0")));
    }

    #[test]
    fn test_min_version_any() {
        assert_eq!(min_version("*"), Some(v("0.0.0")));
        assert_eq!(min_version(""), Some(v("0.0.0")));
        assert_eq!(min_version("<2.0.0"), Some(v("0.0.0")));
    }

    #[test]
    fn test_min_version_exclusive_lower_bound() {
        assert_eq!(min_version(">1.2.3"), Some(v("1.2.4")));
        assert_eq!(min_version(">1.2"), Some(v("1.3.0")));
        assert_eq!(min_version(">1"), Some(v("2.0.0")));
    }

    #[test]
    fn test_min_version_alternatives_and_sets() {
        assert_eq!(min_version("^2.0.0 || ^1.4.0"), Some(v("1.4.0")));
        assert_eq!(min_version(">=1.2.0 <2.0.0"), Some(v("1.2.0")));
        assert_eq!(min_version(">= 1.5.0 < 2"), Some(v("1.5.0")));
        assert_eq!(min_version("1.2.0 - 1.4.0"), Some(v("1.2.0")));
        assert_eq!(min_version("v1.2.0"), Some(v("1.2.0")));
    }

    #[test]
    fn test_min_version_unparsable() {
        assert_eq!(min_version("workspace:*"), None);
        assert_eq!(min_version("github:user/repo"), None);
        assert_eq!(min_version("not a range"), None);
        assert_eq!(min_version("latest"), None);
        assert_eq!(min_version("next"), None);
    }

    #[test]
    fn test_min_version_unsatisfiable() {
        assert_eq!(min_version(">2.0.0 <1.0.0"), None);
    }

    #[test]
    fn test_satisfies() {
        assert!(satisfies(&v("1.3.0"), "^1.2.0"));
        assert!(!satisfies(&v("1.0.0"), "^1.2.0"));
        assert!(satisfies(&v("2.5.0"), "^1.0.0 || ^2.0.0"));
        assert!(satisfies(&v("1.0.0"), "*"));
        assert!(!satisfies(&v("1.0.0"), "workspace:*"));
    }

    #[test]
    fn test_bare_version_is_exact() {
        assert!(satisfies(&v("1.2.3"), "1.2.3"));
        assert!(!satisfies(&v("1.5.0"), "1.2.3"));
        assert!(satisfies(&v("1.2.9"), "1.2"));
    }
}
