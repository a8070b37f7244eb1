use serde::{Deserialize, Serialize};

/// Request body for creating or editing a story spoiler.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoryPayload {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl StoryPayload {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: String::new(),
        }
    }
}

/// One element of the `GET /api/Story/All` response.
///
/// The remote service does not document the shape of list items, so every
/// field is optional and unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorySummary {
    #[serde(alias = "storyId")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub msg: Option<String>,
}
