use crate::authentication::{AuthError, BearerToken, Credentials, get_access_token};
use crate::configuration::ApiSettings;
use crate::domain::StoryPayload;
use crate::endpoints::{
    ALL_STORIES, CREATE_STORY, DELETE_STORY, EDIT_STORY, EndpointError, endpoint, parse_base_url,
};
use anyhow::Context;
use reqwest::{Client, RequestBuilder, Response, Url};

#[derive(thiserror::Error, Debug)]
pub enum StoryClientError {
    #[error(transparent)]
    InvalidRoute(#[from] EndpointError),
    #[error("Failed to execute request.")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the story spoiler API.
///
/// Responses are handed back untouched: 4xx answers are expected outcomes
/// for several checks, so no status is turned into an error here.
#[derive(Clone, Debug)]
pub struct StoryClient {
    base_url: Url,
    http_client: Client,
    token: BearerToken,
}

impl StoryClient {
    pub fn new(
        base_url: &str,
        token: BearerToken,
        timeout: std::time::Duration,
    ) -> Result<Self, anyhow::Error> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            http_client: build_http_client(timeout)?,
            token,
        })
    }

    /// Logs in with `credentials` and returns a client carrying the token.
    #[tracing::instrument(name = "Authenticating story client", skip_all)]
    pub async fn authenticate(
        settings: &ApiSettings,
        credentials: &Credentials,
    ) -> Result<Self, AuthError> {
        let base_url = parse_base_url(&settings.base_url)?;
        let http_client = build_http_client(settings.timeout())?;
        let token = get_access_token(&http_client, &base_url, credentials).await?;
        tracing::info!("Obtained access token for {}", credentials.username);
        Ok(Self {
            base_url,
            http_client,
            token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(self.token.expose())
    }

    #[tracing::instrument(name = "Creating story", skip(self))]
    pub async fn create_story(
        &self,
        payload: &StoryPayload,
    ) -> Result<Response, StoryClientError> {
        let url = endpoint(&self.base_url, CREATE_STORY, None)?;
        let response = self
            .authorized(self.http_client.post(url))
            .json(payload)
            .send()
            .await?;
        Ok(response)
    }

    #[tracing::instrument(name = "Editing story", skip(self))]
    pub async fn edit_story(
        &self,
        story_id: &str,
        payload: &StoryPayload,
    ) -> Result<Response, StoryClientError> {
        let url = endpoint(&self.base_url, EDIT_STORY, Some(story_id))?;
        let response = self
            .authorized(self.http_client.put(url))
            .json(payload)
            .send()
            .await?;
        Ok(response)
    }

    #[tracing::instrument(name = "Listing stories", skip(self))]
    pub async fn list_stories(&self) -> Result<Response, StoryClientError> {
        let url = endpoint(&self.base_url, ALL_STORIES, None)?;
        let response = self.authorized(self.http_client.get(url)).send().await?;
        Ok(response)
    }

    #[tracing::instrument(name = "Deleting story", skip(self))]
    pub async fn delete_story(&self, story_id: &str) -> Result<Response, StoryClientError> {
        let url = endpoint(&self.base_url, DELETE_STORY, Some(story_id))?;
        let response = self.authorized(self.http_client.delete(url)).send().await?;
        Ok(response)
    }
}

fn build_http_client(timeout: std::time::Duration) -> Result<Client, anyhow::Error> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build the HTTP client.")
}
