//! Dependency reconciliation between an item and its host project

use super::range;
use crate::scopes::DependencyMap;

/// Declared dependencies the host project does not already satisfy
///
/// A dependency is kept (with its declared range) when the host lacks it, or when
/// the host's range does not admit the declared minimum version. Declared ranges
/// without a computable minimum are skipped. Returns `None` only when nothing was
/// declared at all.
pub fn compare_dependencies(
    declared: Option<&DependencyMap>,
    installed: Option<&DependencyMap>,
) -> Option<DependencyMap> {
    let declared = declared?;

    let missing = declared
        .iter()
        .filter(|(name, range_str)| {
            let Some(minimum) = range::min_version(range_str) else {
                return false;
            };
            match installed.and_then(|deps| deps.get(*name)) {
                Some(installed_range) => !range::satisfies(&minimum, installed_range),
                None => true,
            }
        })
        .map(|(name, range_str)| (name.clone(), range_str.clone()))
        .collect();

    Some(missing)
}
