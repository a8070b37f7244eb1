use crate::authentication::AuthError;
use crate::configuration::Settings;
use crate::domain::{StoryId, StoryPayload};
use crate::story_client::StoryClient;
use crate::suite::expectations::StepError;
use crate::suite::steps;

/// State established once before any step runs.
#[derive(Debug)]
pub struct SuiteContext {
    pub client: StoryClient,
}

impl SuiteContext {
    #[tracing::instrument(name = "Suite setup", skip_all, fields(base_url = %settings.api.base_url))]
    pub async fn setup(settings: &Settings) -> Result<Self, AuthError> {
        let client = StoryClient::authenticate(&settings.api, &settings.credentials()).await?;
        Ok(Self { client })
    }

    pub fn from_client(client: StoryClient) -> Self {
        Self { client }
    }

    /// Releases the HTTP client and its pooled connections.
    pub fn teardown(self) {
        tracing::info!("Suite teardown: releasing HTTP client");
        drop(self.client);
    }
}

/// A story created on the remote API for the duration of a test.
#[derive(Debug, Clone)]
pub struct StoryFixture {
    id: StoryId,
}

impl StoryFixture {
    pub fn new(id: StoryId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &StoryId {
        &self.id
    }

    /// Creates a story and captures its id.
    pub async fn create(context: &SuiteContext, payload: &StoryPayload) -> Result<Self, StepError> {
        steps::create_story_with(context, payload).await
    }

    /// Deletes the story, expecting the API's confirmation message.
    pub async fn remove(self, context: &SuiteContext) -> Result<(), StepError> {
        steps::delete_story(context, &self).await
    }
}
