use crate::authentication::BearerToken;
use crate::endpoints::{AUTHENTICATION, endpoint};
use anyhow::Context;
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Login was rejected with status {status}.")]
    Rejected { status: StatusCode },
    #[error("Login response did not contain an access token.")]
    MissingToken,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: Option<String>,
}

/// Exchanges `credentials` for a bearer token.
#[tracing::instrument(
    name = "Request access token",
    skip(http_client, base_url, credentials),
    fields(username = %credentials.username)
)]
pub async fn get_access_token(
    http_client: &Client,
    base_url: &Url,
    credentials: &Credentials,
) -> Result<BearerToken, AuthError> {
    let url =
        endpoint(base_url, AUTHENTICATION, None).context("Failed to build the login url.")?;
    let response = http_client
        .post(url)
        .json(&LoginRequest {
            username: &credentials.username,
            password: credentials.password.expose_secret(),
        })
        .send()
        .await
        .context("Failed to send the login request.")?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("Login failed with status {}", status);
        return Err(AuthError::Rejected { status });
    }

    let body: LoginResponse = response
        .json()
        .await
        .context("Failed to decode the login response.")?;
    body.access_token
        .and_then(BearerToken::parse)
        .ok_or(AuthError::MissingToken)
}
