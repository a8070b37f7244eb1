use serde::Deserialize;

/// The `{ "msg": ... }` envelope returned by most endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    pub msg: Option<String>,
}

/// Body of a successful `POST /api/Story/Create`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedStory {
    pub story_id: Option<String>,
    pub msg: Option<String>,
}
