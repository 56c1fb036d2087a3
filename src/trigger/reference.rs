use crate::error::TriggerError;

/// Branch whose builds are published under the `latest` tag
const DEFAULT_BRANCH: &str = "master";
const DEFAULT_BRANCH_TAG: &str = "latest";

/// Derive an image tag from a git ref such as `refs/heads/master` or `refs/tags/v1.0.0`.
///
/// Only the last path segment matters: `master` maps to `latest`, anything
/// else is used as the tag unchanged.
pub fn resolve_tag(reference: &str) -> Result<String, TriggerError> {
    let last = reference
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| TriggerError::InvalidReference(reference.to_string()))?;

    if last == DEFAULT_BRANCH {
        Ok(DEFAULT_BRANCH_TAG.to_string())
    } else {
        Ok(last.to_string())
    }
}
