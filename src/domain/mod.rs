mod api_response;
mod story;
mod story_id;

pub use api_response::{ApiMessage, CreatedStory};
pub use story::{StoryPayload, StorySummary};
pub use story_id::StoryId;
