//! Maturity ordering of Kubernetes-style API versions.
//!
//! Versions look like `v1`, `v2beta3` or `v1alpha1`. A stable version is always more
//! mature than any beta, and a beta more mature than any alpha; within one level the
//! higher major, then the higher minor wins. Strings that don't follow this pattern
//! rank below every conforming version and are ordered lexically among themselves.

use std::cmp::Ordering;

/// Stability level of an API version, from least to most mature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApiVersionLevel {
    Alpha,
    Beta,
    Stable,
}

/// A successfully parsed API version string.
///
/// # Examples
///
/// ```
/// use kube_api_timeline::algorithms::api_version::{ApiVersionLevel, ParsedApiVersion};
///
/// let parsed = ParsedApiVersion::parse("v2beta1").unwrap();
/// assert_eq!(parsed.major, 2);
/// assert_eq!(parsed.level, ApiVersionLevel::Beta);
/// assert_eq!(parsed.minor, 1);
///
/// assert!(ParsedApiVersion::parse("foo").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedApiVersion {
    pub major: u64,
    pub level: ApiVersionLevel,
    /// Always 0 for stable versions.
    pub minor: u64,
}

impl ParsedApiVersion {
    pub fn parse(version: &str) -> Option<Self> {
        let rest = version.strip_prefix('v')?;
        let major_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if major_len == 0 {
            return None;
        }

        let major = rest[..major_len].parse().ok()?;
        let rest = &rest[major_len..];

        if rest.is_empty() {
            return Some(Self {
                major,
                level: ApiVersionLevel::Stable,
                minor: 0,
            });
        }

        let (level, minor) = if let Some(minor) = rest.strip_prefix("beta") {
            (ApiVersionLevel::Beta, minor)
        } else if let Some(minor) = rest.strip_prefix("alpha") {
            (ApiVersionLevel::Alpha, minor)
        } else {
            return None;
        };

        if minor.is_empty() || !minor.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self {
            major,
            level,
            minor: minor.parse().ok()?,
        })
    }

    fn maturity(&self) -> (ApiVersionLevel, u64, u64) {
        (self.level, self.major, self.minor)
    }
}

/// Compares two API versions so that the more mature one sorts first.
///
/// Returns [`Ordering::Less`] when `a` is more mature than `b`, which makes it
/// directly usable with `sort_by`.
///
/// # Examples
///
/// ```
/// use kube_api_timeline::algorithms::api_version::compare_api_versions;
///
/// let mut versions = vec!["v1beta1", "v1alpha1", "v2", "v1"];
/// versions.sort_by(|a, b| compare_api_versions(a, b));
/// assert_eq!(versions, vec!["v2", "v1", "v1beta1", "v1alpha1"]);
/// ```
pub fn compare_api_versions(a: &str, b: &str) -> Ordering {
    match (ParsedApiVersion::parse(a), ParsedApiVersion::parse(b)) {
        (Some(pa), Some(pb)) => pb.maturity().cmp(&pa.maturity()).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Returns `true` if `candidate` is strictly more mature than `baseline`.
pub fn is_more_mature(candidate: &str, baseline: &str) -> bool {
    compare_api_versions(candidate, baseline) == Ordering::Less
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stable() {
        let parsed = ParsedApiVersion::parse("v1").unwrap();
        assert_eq!(parsed.major, 1);
        assert_eq!(parsed.level, ApiVersionLevel::Stable);
        assert_eq!(parsed.minor, 0);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "v", "1", "vbeta1", "v1beta", "v1gamma1", "v1beta1x", "V1"] {
            assert!(
                ParsedApiVersion::parse(input).is_none(),
                "{} should not parse",
                input
            );
        }
    }

    #[test]
    fn test_stable_beats_beta_beats_alpha() {
        assert_eq!(compare_api_versions("v1", "v2beta1"), Ordering::Less);
        assert_eq!(compare_api_versions("v1beta1", "v2alpha1"), Ordering::Less);
        assert_eq!(compare_api_versions("v1alpha1", "v1beta1"), Ordering::Greater);
    }

    #[test]
    fn test_numeric_ordering() {
        assert_eq!(compare_api_versions("v2", "v1"), Ordering::Less);
        assert_eq!(compare_api_versions("v1beta2", "v1beta1"), Ordering::Less);
        assert_eq!(compare_api_versions("v10", "v9"), Ordering::Less);
        assert_eq!(compare_api_versions("v1beta10", "v1beta9"), Ordering::Less);
    }

    #[test]
    fn test_non_conforming_sort_last() {
        let mut versions = vec!["zeta", "v1alpha1", "alpha", "v1"];
        versions.sort_by(|a, b| compare_api_versions(a, b));
        assert_eq!(versions, vec!["v1", "v1alpha1", "alpha", "zeta"]);
    }

    #[test]
    fn test_equal_versions() {
        assert_eq!(compare_api_versions("v1", "v1"), Ordering::Equal);
        assert!(!is_more_mature("v1", "v1"));
        assert!(is_more_mature("v1", "v1beta1"));
    }
}
