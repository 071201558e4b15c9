use std::fmt::Display;
use std::str::FromStr;

use crate::api::{Error, Result};

pub const GITHUB_HOST: &str = "github.com";

/// `owner/name` of a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let (owner, name) = (owner.into(), name.into());
        if !valid_segment(&owner) || !valid_segment(&name) {
            return Err(Error::Parse(format!("{:?}/{:?} is not an owner/name pair", owner, name)));
        }
        Ok(RepoId { owner, name })
    }

    /// Resolves any reference accepted by [`extract_owner_and_repo`].
    pub fn from_reference(reference: &str) -> Result<Self> {
        extract_owner_and_repo(reference)?.parse()
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(|c: char| c == '/' || c.is_whitespace())
}

impl FromStr for RepoId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((owner, name)) => RepoId::new(owner, name),
            None => Err(Error::Parse(format!("{:?} is not an owner/name pair", s))),
        }
    }
}

impl Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Normalizes a URL-like or path-like reference to `owner/name`.
///
/// `https://www.github.com/psf/requests/tree/main` and `~/go/src/github.com/psf/requests`
/// both give `psf/requests`. The `github.com` marker is matched case-insensitively where a
/// host or path segment starts. An empty reference gives an empty identifier. A reference
/// without the marker or with fewer than two segments after it is rejected.
pub fn extract_owner_and_repo(reference: &str) -> Result<String> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Ok(String::new());
    }
    let path = host_marker_end(reference)
        .and_then(|end| reference[end..].strip_prefix('/'))
        .ok_or_else(|| Error::Parse(format!("{:?} is not a {} reference", reference, GITHUB_HOST)))?;
    let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();

    let mut segments = path.split('/');
    match (segments.next(), segments.next()) {
        (Some(owner), Some(name)) if valid_segment(owner) && valid_segment(name) => Ok(format!("{}/{}", owner, name)),
        _ => Err(Error::Parse(format!("{:?} has no owner/name path", reference))),
    }
}

/// Byte offset right after the first `github.com` starting at a segment boundary.
fn host_marker_end(reference: &str) -> Option<usize> {
    // ASCII lowercasing keeps byte offsets valid for `reference`
    let lowercase = reference.to_ascii_lowercase();
    lowercase
        .match_indices(GITHUB_HOST)
        .map(|(start, _)| start)
        .find(|&start| start == 0 || matches!(lowercase.as_bytes()[start - 1], b'/' | b'.' | b'@' | b':' | b' '))
        .map(|start| start + GITHUB_HOST.len())
}
