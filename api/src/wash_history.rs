//! Fetching pages of a client's wash history from the REST service.

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::model::PageRequest;
use crate::model::PageResult;
use crate::subject_id::SubjectId;

/// A trait for any service that can provide pages of wash history.
pub trait WashHistorySource {
    /// Fetches one page of the given client's wash history.
    async fn fetch_wash_history(
        &self,
        subject: SubjectId,
        request: PageRequest,
    ) -> Result<PageResult, FetchError>;
}

/// Reads wash history from the dashboard's REST backend.
#[derive(Clone, Debug)]
pub struct RestWashHistory {
    client: reqwest::Client,
    config: ApiConfig,
}

impl RestWashHistory {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl PartialEq for RestWashHistory {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl WashHistorySource for RestWashHistory {
    async fn fetch_wash_history(
        &self,
        subject: SubjectId,
        request: PageRequest,
    ) -> Result<PageResult, FetchError> {
        let url = self.config.washes_url(subject);
        debug!(
            "GET {} page={} pageSize={}",
            url,
            request.page(),
            request.page_size()
        );

        let resp = self
            .client
            .get(&url)
            .query(&[("page", request.page()), ("pageSize", request.page_size())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!("wash history request for client {} failed: {}", subject, status);
            return Err(FetchError::Status { status, url });
        }

        let body = resp.bytes().await?;
        let page: PageResult = serde_json::from_slice(&body)?;
        Ok(page)
    }
}
