use std::cmp::Ordering;

use semver::Version;

/// Parse a version string, accepting a single leading `v`.
///
/// Examples:
/// - "1.2.3" -> Version(1, 2, 3)
/// - "v1.2.3" -> Version(1, 2, 3)
/// - "2.0.0-beta.1+build.5" -> Version(2, 0, 0, pre: beta.1, build: build.5)
pub fn parse_version(version: &str) -> Result<Version, semver::Error> {
    let trimmed = version.trim();
    let stripped = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(stripped)
}

/// Compares two versions by semver precedence.
///
/// Unlike `Version::cmp`, build metadata is ignored.
pub fn cmp_precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}

/// Three-way comparator ordering versions greatest first.
pub fn descending(a: &Version, b: &Version) -> Ordering {
    cmp_precedence(b, a)
}

/// Returns true if `version` has higher precedence than `base`.
pub fn is_newer(version: &Version, base: &Version) -> bool {
    cmp_precedence(version, base) == Ordering::Greater
}

/// Parses each candidate and sorts the parseable ones greatest first.
///
/// Entries that are not valid semver are dropped. The original spelling of
/// each version is kept alongside its parsed form.
pub fn sort_descending<I>(versions: I) -> Vec<(String, Version)>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed: Vec<(String, Version)> = versions
        .into_iter()
        .filter_map(|v| match parse_version(&v) {
            Ok(parsed) => Some((v, parsed)),
            Err(e) => {
                tracing::debug!("Skipping invalid version {:?}: {}", v, e);
                None
            }
        })
        .collect();

    parsed.sort_by(|(_, a), (_, b)| descending(a, b));
    parsed
}
