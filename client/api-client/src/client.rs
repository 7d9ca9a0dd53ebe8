//! HTTP client for the Uplift backend
//!
//! One request per call, in call order. There is no retry policy; a
//! failed call surfaces to the caller, who may issue it again.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use error_types::{ClientError, ErrorResponse, Result};

use crate::config::ApiConfig;
use crate::models::{
    Cause, CommunityEvent, Donation, NewDonation, NewEvent, NewOpportunity, NewPost,
    PaginationParams, Post, SignupConfirmation, VolunteerOpportunity,
};

/// Typed client over the backend REST surface
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Full URL for an API path
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/api/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            path
        )
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(self.endpoint(path))
            .bearer_auth(&self.config.api_key)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(self.endpoint(path))
            .bearer_auth(&self.config.api_key)
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.client
            .put(self.endpoint(path))
            .bearer_auth(&self.config.api_key)
    }

    fn delete_request(&self, path: &str) -> RequestBuilder {
        self.client
            .delete(self.endpoint(path))
            .bearer_auth(&self.config.api_key)
    }

    /// Send a request and decode the JSON response
    async fn expect_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::response_error(status.as_u16(), response).await);
        }
        Ok(response.json::<T>().await?)
    }

    /// Send a request where only the status matters
    async fn expect_success(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::response_error(status.as_u16(), response).await);
        }
        Ok(())
    }

    async fn response_error(status: u16, response: reqwest::Response) -> ClientError {
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        // Prefer the structured error body when the backend sends one
        match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(body) => ClientError::from_status(status, body.error),
            Err(_) => ClientError::from_status(status, text),
        }
    }

    // ============= Causes =============

    pub async fn list_causes(&self, page: PaginationParams) -> Result<Vec<Cause>> {
        debug!(page = page.page, "listing causes");
        self.expect_json(
            self.get("causes")
                .query(&[("page", page.page), ("perPage", page.per_page)]),
        )
        .await
    }

    pub async fn get_cause(&self, id: Uuid) -> Result<Cause> {
        self.expect_json(self.get(&format!("causes/{}", id))).await
    }

    // ============= Donations =============

    pub async fn create_donation(&self, donation: &NewDonation) -> Result<Donation> {
        donation.validate()?;
        info!(cause_id = %donation.cause_id, "submitting donation");
        self.expect_json(self.post("donations").json(donation)).await
    }

    // ============= Events =============

    pub async fn list_events(&self, page: PaginationParams) -> Result<Vec<CommunityEvent>> {
        debug!(page = page.page, "listing events");
        self.expect_json(
            self.get("events")
                .query(&[("page", page.page), ("perPage", page.per_page)]),
        )
        .await
    }

    pub async fn create_event(&self, event: &NewEvent) -> Result<CommunityEvent> {
        event.validate()?;
        info!(title = %event.title, "creating event");
        self.expect_json(self.post("events").json(event)).await
    }

    pub async fn update_event(&self, id: Uuid, event: &NewEvent) -> Result<CommunityEvent> {
        event.validate()?;
        self.expect_json(self.put(&format!("events/{}", id)).json(event))
            .await
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<()> {
        self.expect_success(self.delete_request(&format!("events/{}", id)))
            .await
    }

    // ============= Volunteer opportunities =============

    pub async fn list_opportunities(
        &self,
        page: PaginationParams,
    ) -> Result<Vec<VolunteerOpportunity>> {
        self.expect_json(
            self.get("opportunities")
                .query(&[("page", page.page), ("perPage", page.per_page)]),
        )
        .await
    }

    pub async fn create_opportunity(
        &self,
        opportunity: &NewOpportunity,
    ) -> Result<VolunteerOpportunity> {
        opportunity.validate()?;
        info!(title = %opportunity.title, "creating volunteer opportunity");
        self.expect_json(self.post("opportunities").json(opportunity))
            .await
    }

    pub async fn signup(&self, opportunity_id: Uuid) -> Result<SignupConfirmation> {
        info!(%opportunity_id, "signing up volunteer");
        self.expect_json(self.post(&format!("opportunities/{}/signup", opportunity_id)))
            .await
    }

    // ============= Posts and feed =============

    /// Fetch the raw feed; callers run `feed_core::compose` on the result
    pub async fn fetch_feed(&self) -> Result<Vec<Post>> {
        debug!("fetching feed");
        self.expect_json(self.get("feed")).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<Post> {
        post.validate()?;
        self.expect_json(self.post("posts").json(post)).await
    }

    pub async fn update_post(&self, id: &str, post: &NewPost) -> Result<Post> {
        post.validate()?;
        self.expect_json(self.put(&format!("posts/{}", id)).json(post))
            .await
    }

    pub async fn delete_post(&self, id: &str) -> Result<()> {
        self.expect_success(self.delete_request(&format!("posts/{}", id)))
            .await
    }
}
