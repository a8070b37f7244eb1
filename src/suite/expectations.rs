use crate::story_client::StoryClientError;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Why a suite step failed.
#[derive(thiserror::Error, Debug)]
pub enum StepError {
    #[error("Expected status {expected}, got {actual}. Body: {body}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },
    #[error("Response body has no `{0}` field.")]
    MissingField(&'static str),
    #[error("Expected message {expected:?}, got {actual:?}.")]
    MessageMismatch { expected: String, actual: String },
    #[error("The story list is empty.")]
    EmptyStoryList,
    #[error("No story id is available, the create step did not produce one.")]
    MissingStoryId,
    #[error(transparent)]
    Request(#[from] StoryClientError),
    #[error("Failed to read the response body.")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to decode the response body.")]
    Decode(#[from] serde_json::Error),
}

/// Fails with the response body attached unless the status is `expected`.
pub async fn expect_status(
    response: Response,
    expected: StatusCode,
) -> Result<Response, StepError> {
    let actual = response.status();
    if actual == expected {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
    Err(StepError::UnexpectedStatus {
        expected,
        actual,
        body,
    })
}

/// Reads the whole body and decodes it as JSON.
pub async fn read_json<T>(response: Response) -> Result<T, StepError>
where
    T: DeserializeOwned,
{
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub fn expect_message_eq(msg: Option<String>, expected: &str) -> Result<(), StepError> {
    let actual = msg.ok_or(StepError::MissingField("msg"))?;
    if actual == expected {
        Ok(())
    } else {
        Err(StepError::MessageMismatch {
            expected: expected.to_string(),
            actual,
        })
    }
}

pub fn expect_message_contains(msg: Option<String>, fragment: &str) -> Result<(), StepError> {
    let actual = msg.ok_or(StepError::MissingField("msg"))?;
    if actual.contains(fragment) {
        Ok(())
    } else {
        Err(StepError::MessageMismatch {
            expected: format!("a message containing {:?}", fragment),
            actual,
        })
    }
}
