// SPDX-License-Identifier: MPL-2.0
//! Thin HTTP client over the platform API.
//!
//! One request per operation; errors surface as `Error::Api`. Without a
//! configured base URL the client answers from the bundled mock data set,
//! which keeps the whole app usable offline and in demos.

use super::dto::{
    AuthSession, FeedPost, ForgotPasswordRequest, LocationDetail, LocationSummary, LoginRequest,
    NewPostRequest, OtpChallenge, OtpVerifyRequest, RegisterRequest, UserProfile, VideoItem,
    WalletSnapshot,
};
use super::mock;
use crate::error::{Error, Result};
use chrono::Utc;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl ApiClient {
    /// Builds a client. `base_url` comes from the `[api]` config section;
    /// `None` selects the mock data set.
    #[must_use]
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
        }
    }

    /// True when requests are answered from the bundled fixtures.
    #[must_use]
    pub fn is_mock(&self) -> bool {
        self.base_url.is_none()
    }

    fn url(&self, path: &str) -> Option<String> {
        self.base_url.as_ref().map(|base| format!("{base}{path}"))
    }

    pub async fn nearby_locations(&self) -> Result<Vec<LocationSummary>> {
        match self.url("/locations/nearby") {
            Some(url) => Ok(self.http.get(url).send().await?.error_for_status()?.json().await?),
            None => Ok(mock::nearby_locations()),
        }
    }

    pub async fn location(&self, id: &str) -> Result<LocationDetail> {
        match self.url(&format!("/locations/{id}")) {
            Some(url) => Ok(self.http.get(url).send().await?.error_for_status()?.json().await?),
            None => mock::location_detail(id)
                .ok_or_else(|| Error::Api(format!("unknown location {id}"))),
        }
    }

    pub async fn feed(&self) -> Result<Vec<FeedPost>> {
        match self.url("/social/feed") {
            Some(url) => Ok(self.http.get(url).send().await?.error_for_status()?.json().await?),
            None => Ok(mock::feed()),
        }
    }

    pub async fn video(&self, id: &str) -> Result<VideoItem> {
        match self.url(&format!("/videos/{id}")) {
            Some(url) => Ok(self.http.get(url).send().await?.error_for_status()?.json().await?),
            None => mock::video(id).ok_or_else(|| Error::Api(format!("unknown video {id}"))),
        }
    }

    pub async fn wallet(&self) -> Result<WalletSnapshot> {
        match self.url("/wallet") {
            Some(url) => Ok(self.http.get(url).send().await?.error_for_status()?.json().await?),
            None => Ok(mock::wallet()),
        }
    }

    pub async fn profile(&self) -> Result<UserProfile> {
        match self.url("/profile") {
            Some(url) => Ok(self.http.get(url).send().await?.error_for_status()?.json().await?),
            None => Ok(mock::profile()),
        }
    }

    /// Publishes a feed post and returns the stored entry.
    pub async fn publish_post(&self, request: NewPostRequest) -> Result<FeedPost> {
        match self.url("/social/posts") {
            Some(url) => Ok(self
                .http
                .post(url)
                .json(&request)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?),
            None => Ok(FeedPost {
                id: format!("post-local-{}", Utc::now().timestamp()),
                author: mock::profile().handle,
                body: request.body,
                location_id: request.location_id,
                video_id: None,
                posted_at: Utc::now(),
                likes: 0,
            }),
        }
    }

    /// Starts the login sequence; a successful response means an OTP code
    /// was dispatched out of band.
    pub async fn login(&self, request: LoginRequest) -> Result<OtpChallenge> {
        match self.url("/auth/login") {
            Some(url) => Ok(self
                .http
                .post(url)
                .json(&request)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?),
            None => Ok(mock::otp_challenge()),
        }
    }

    pub async fn verify_otp(&self, request: OtpVerifyRequest) -> Result<AuthSession> {
        match self.url("/auth/otp-verify") {
            Some(url) => Ok(self
                .http
                .post(url)
                .json(&request)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?),
            None => {
                // The fixture accepts any six-digit code.
                if request.code.len() == 6 && request.code.chars().all(|c| c.is_ascii_digit()) {
                    Ok(mock::session())
                } else {
                    Err(Error::Api("invalid verification code".into()))
                }
            }
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthSession> {
        match self.url("/auth/register") {
            Some(url) => Ok(self
                .http
                .post(url)
                .json(&request)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?),
            None => {
                let mut session = mock::session();
                session.user.display_name = request.display_name;
                Ok(session)
            }
        }
    }

    pub async fn forgot_password(&self, request: ForgotPasswordRequest) -> Result<()> {
        match self.url("/auth/forgot-password") {
            Some(url) => {
                self.http
                    .post(url)
                    .json(&request)
                    .send()
                    .await?
                    .error_for_status()?;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_client() -> ApiClient {
        ApiClient::new(None)
    }

    #[tokio::test]
    async fn mock_client_serves_nearby_locations() {
        let client = mock_client();
        assert!(client.is_mock());
        let locations = client.nearby_locations().await.expect("fixtures");
        assert!(!locations.is_empty());
    }

    #[tokio::test]
    async fn mock_client_reports_unknown_location() {
        let client = mock_client();
        let err = client.location("nowhere").await.unwrap_err();
        assert!(matches!(err, Error::Api(_)));
    }

    #[tokio::test]
    async fn mock_login_then_verify_yields_session() {
        let client = mock_client();
        let challenge = client
            .login(LoginRequest {
                identifier: "demo@wayfare.example".into(),
                password: "hunter2".into(),
            })
            .await
            .expect("challenge");

        let session = client
            .verify_otp(OtpVerifyRequest {
                challenge_id: challenge.challenge_id,
                code: "123456".into(),
            })
            .await
            .expect("session");
        assert!(!session.token.is_empty());
    }

    #[tokio::test]
    async fn mock_verify_rejects_malformed_code() {
        let client = mock_client();
        let err = client
            .verify_otp(OtpVerifyRequest {
                challenge_id: "mock-challenge-1".into(),
                code: "abc".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(_)));
    }

    #[test]
    fn base_url_is_normalized_without_trailing_slash() {
        let client = ApiClient::new(Some("https://api.wayfare.example/".into()));
        assert_eq!(
            client.url("/wallet"),
            Some("https://api.wayfare.example/wallet".to_string())
        );
    }
}
