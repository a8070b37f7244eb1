/// Server-assigned identifier of a story spoiler.
///
/// Only obtainable through [`StoryId::parse`], so an empty or dot-only id
/// never reaches an edit or delete call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryId(String);

impl StoryId {
    /// Returns an instance of `StoryId` if the input is not blank and is not
    /// a `.` or `..` path segment.
    pub fn parse(s: String) -> Result<StoryId, String> {
        let is_dot_segment = matches!(s.trim(), "." | "..");
        if s.trim().is_empty() || is_dot_segment {
            Err(format!("{:?} is not a valid story id.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for StoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
