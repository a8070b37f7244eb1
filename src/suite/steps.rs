//! The checks run against the story spoiler API.
//!
//! Every step takes the suite context, plus the story fixture when it acts
//! on the story created by [`create_story`].

use crate::domain::{ApiMessage, CreatedStory, StoryId, StoryPayload, StorySummary};
use crate::suite::context::{StoryFixture, SuiteContext};
use crate::suite::expectations::{
    StepError, expect_message_contains, expect_message_eq, expect_status, read_json,
};
use reqwest::StatusCode;

pub const NEW_STORY_TITLE: &str = "new Story";
pub const NEW_STORY_DESCRIPTION: &str = "Back in the time";
pub const EDITED_STORY_TITLE: &str = "EditedMystery";
pub const EDITED_STORY_DESCRIPTION: &str = "Обновено описание със свежа интрига!";

pub const NON_EXISTING_EDIT_ID: &str = "999";
pub const NON_EXISTING_DELETE_ID: &str = "non-existent-id-999";

pub const DELETED_MESSAGE: &str = "Deleted successfully!";
pub const NO_SPOILERS_MESSAGE: &str = "No spoilers";
pub const UNABLE_TO_DELETE_MESSAGE: &str = "Unable to delete this story spoiler!";

pub fn new_story_payload() -> StoryPayload {
    StoryPayload::new(NEW_STORY_TITLE, NEW_STORY_DESCRIPTION)
}

pub fn edited_story_payload() -> StoryPayload {
    StoryPayload::new(EDITED_STORY_TITLE, EDITED_STORY_DESCRIPTION)
}

#[tracing::instrument(name = "Step: create story", skip(context))]
pub async fn create_story(context: &SuiteContext) -> Result<StoryFixture, StepError> {
    create_story_with(context, &new_story_payload()).await
}

pub async fn create_story_with(
    context: &SuiteContext,
    payload: &StoryPayload,
) -> Result<StoryFixture, StepError> {
    let response = context.client.create_story(payload).await?;
    let response = expect_status(response, StatusCode::CREATED).await?;
    let body: CreatedStory = read_json(response).await?;
    let story_id = body
        .story_id
        .ok_or(StepError::MissingField("storyId"))
        .and_then(|id| StoryId::parse(id).map_err(|_| StepError::MissingField("storyId")))?;
    tracing::info!("Created story {}", story_id);
    Ok(StoryFixture::new(story_id))
}

#[tracing::instrument(name = "Step: edit story title", skip(context, story), fields(story_id = %story.id()))]
pub async fn edit_story_title(
    context: &SuiteContext,
    story: &StoryFixture,
) -> Result<(), StepError> {
    let response = context
        .client
        .edit_story(story.id().as_ref(), &edited_story_payload())
        .await?;
    expect_status(response, StatusCode::OK).await?;
    Ok(())
}

#[tracing::instrument(name = "Step: list stories", skip(context))]
pub async fn list_stories(context: &SuiteContext) -> Result<Vec<StorySummary>, StepError> {
    let response = context.client.list_stories().await?;
    let response = expect_status(response, StatusCode::OK).await?;
    let stories: Vec<StorySummary> = read_json(response).await?;
    if stories.is_empty() {
        return Err(StepError::EmptyStoryList);
    }
    Ok(stories)
}

#[tracing::instrument(name = "Step: delete story", skip(context, story), fields(story_id = %story.id()))]
pub async fn delete_story(context: &SuiteContext, story: &StoryFixture) -> Result<(), StepError> {
    let response = context.client.delete_story(story.id().as_ref()).await?;
    let response = expect_status(response, StatusCode::OK).await?;
    let body: ApiMessage = read_json(response).await?;
    expect_message_eq(body.msg, DELETED_MESSAGE)
}

#[tracing::instrument(name = "Step: create story without required fields", skip(context))]
pub async fn create_story_without_required_fields(context: &SuiteContext) -> Result<(), StepError> {
    let response = context
        .client
        .create_story(&StoryPayload::new("", ""))
        .await?;
    expect_status(response, StatusCode::BAD_REQUEST).await?;
    Ok(())
}

#[tracing::instrument(name = "Step: edit non-existing story", skip(context))]
pub async fn edit_non_existing_story(context: &SuiteContext) -> Result<(), StepError> {
    let payload = StoryPayload::new("Edited Title", "Trying to edit a non-existing spoiler.");
    let response = context
        .client
        .edit_story(NON_EXISTING_EDIT_ID, &payload)
        .await?;
    let response = expect_status(response, StatusCode::NOT_FOUND).await?;
    let body: ApiMessage = read_json(response).await?;
    expect_message_contains(body.msg, NO_SPOILERS_MESSAGE)
}

#[tracing::instrument(name = "Step: delete non-existing story", skip(context))]
pub async fn delete_non_existing_story(context: &SuiteContext) -> Result<(), StepError> {
    delete_expecting_refusal(context, NON_EXISTING_DELETE_ID).await
}

#[tracing::instrument(name = "Step: delete already deleted story", skip(context, story), fields(story_id = %story.id()))]
pub async fn delete_already_deleted_story(
    context: &SuiteContext,
    story: &StoryFixture,
) -> Result<(), StepError> {
    delete_expecting_refusal(context, story.id().as_ref()).await
}

async fn delete_expecting_refusal(context: &SuiteContext, story_id: &str) -> Result<(), StepError> {
    let response = context.client.delete_story(story_id).await?;
    let response = expect_status(response, StatusCode::BAD_REQUEST).await?;
    let body: ApiMessage = read_json(response).await?;
    expect_message_contains(body.msg, UNABLE_TO_DELETE_MESSAGE)
}
