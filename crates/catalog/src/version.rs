//! Version string comparison and client compatibility resolution.
//!
//! Add-on and application versions are dotted strings ("1.5.0.2").
//! Compatibility ranges may use a trailing wildcard in the maximum
//! ("1.5.*" matches every 1.5.x release). The update-check feed uses
//! [`current_version_for_client`] to pick the newest version whose range
//! contains the client's application version.

use crate::types::{Application, Version};
use std::cmp::Ordering;

/// Numeric value of one dotted-version segment.
///
/// `*` is treated as unbounded; a segment with a non-numeric suffix
/// ("0b3") compares by its leading digits, and a fully non-numeric
/// segment counts as zero.
fn segment_value(segment: &str) -> u32 {
    if segment == "*" {
        return u32::MAX;
    }
    let digits: String = segment.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Compare two dotted version strings segment-by-segment.
///
/// Missing trailing segments count as zero, so "1.5" == "1.5.0".
pub fn cmp_versions(a: &str, b: &str) -> Ordering {
    let left: Vec<u32> = a.split('.').map(segment_value).collect();
    let right: Vec<u32> = b.split('.').map(segment_value).collect();
    let len = left.len().max(right.len());
    for i in 0..len {
        let l = left.get(i).copied().unwrap_or(0);
        let r = right.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Whether `app_version` falls inside the inclusive `[min, max]` range.
pub fn version_in_range(app_version: &str, min: &str, max: &str) -> bool {
    cmp_versions(app_version, min) != Ordering::Less
        && cmp_versions(app_version, max) != Ordering::Greater
}

/// Resolve the newest version compatible with a client.
///
/// Scans `versions` (upload order) for entries targeting `app` whose
/// compatibility range contains `app_version`, and returns the one with
/// the highest version string. Ties go to the latest upload. Returns
/// `None` when nothing is compatible; the update feed renders that as an
/// empty reply rather than an error.
pub fn current_version_for_client<'a>(
    versions: &'a [Version],
    app: Application,
    app_version: &str,
) -> Option<&'a Version> {
    versions
        .iter()
        .filter(|v| v.app == app)
        .filter(|v| version_in_range(app_version, &v.min_app_version, &v.max_app_version))
        .max_by(|a, b| cmp_versions(&a.version, &b.version))
}
