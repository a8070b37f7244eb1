//! Routes of the remote story spoiler API

use reqwest::Url;

pub const AUTHENTICATION: &[&str] = &["api", "User", "Authentication"];
pub const CREATE_STORY: &[&str] = &["api", "Story", "Create"];
pub const EDIT_STORY: &[&str] = &["api", "Story", "Edit"];
pub const ALL_STORIES: &[&str] = &["api", "Story", "All"];
pub const DELETE_STORY: &[&str] = &["api", "Story", "Delete"];

/// Parses the configured base URL, rejecting URLs that cannot carry a path.
pub fn parse_base_url(base_url: &str) -> Result<Url, anyhow::Error> {
    let url = Url::parse(base_url)
        .map_err(|e| anyhow::anyhow!("Invalid base url {:?}: {}", base_url, e))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("Base url {:?} cannot carry a path.", base_url);
    }
    Ok(url)
}

#[derive(thiserror::Error, Debug)]
pub enum EndpointError {
    #[error("Base url {0} cannot carry a path.")]
    CannotBeABase(Url),
    #[error("{0:?} cannot be used as a path segment.")]
    InvalidSegment(String),
}

/// Appends `route` and an optional trailing id to `base`.
///
/// Every segment is percent-encoded. Ids that would not end up as exactly
/// one non-empty trailing segment (`""`, `"."`, `".."`) are rejected.
pub fn endpoint(base: &Url, route: &[&str], id: Option<&str>) -> Result<Url, EndpointError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| EndpointError::CannotBeABase(base.clone()))?
        .pop_if_empty()
        .extend(route);

    if let Some(id) = id {
        let route_segments = segment_count(&url);
        url.path_segments_mut()
            .map_err(|()| EndpointError::CannotBeABase(base.clone()))?
            .push(id);
        let last_is_non_empty = url
            .path_segments()
            .and_then(|segments| segments.last())
            .is_some_and(|segment| !segment.is_empty());
        if !last_is_non_empty || segment_count(&url) != route_segments + 1 {
            return Err(EndpointError::InvalidSegment(id.to_string()));
        }
    }
    Ok(url)
}

fn segment_count(url: &Url) -> usize {
    url.path_segments().map_or(0, Iterator::count)
}
