//! Blocking HTTP client for the remote search endpoints.

use std::time::Duration;

use classfind_search_api::{
	ClassQuery, ClassResourcePage, ClassSearchPage, ResourceQuery, SearchService, ServiceError,
};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

/// Connection settings for [`HttpSearchService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
	pub base_url: String,
	pub token: Option<String>,
	pub timeout: Duration,
}

impl Default for ServiceSettings {
	fn default() -> Self {
		Self {
			base_url: "http://localhost:8080/api".to_string(),
			token: None,
			timeout: Duration::from_secs(10),
		}
	}
}

/// [`SearchService`] backed by `GET {base}/classes/search` and
/// `GET {base}/classes/{id}/search`.
#[derive(Debug, Clone)]
pub struct HttpSearchService {
	client: Client,
	base_url: String,
}

impl HttpSearchService {
	pub fn new(settings: &ServiceSettings) -> Result<Self, ServiceError> {
		let base_url = settings.base_url.trim().trim_end_matches('/').to_string();
		if base_url.is_empty() {
			return Err(ServiceError::Config("base url must not be empty".into()));
		}

		let mut headers = HeaderMap::new();
		if let Some(token) = settings.token.as_deref().filter(|token| !token.is_empty()) {
			let value = HeaderValue::from_str(&format!("Bearer {token}"))
				.map_err(|err| ServiceError::Config(format!("invalid token: {err}")))?;
			headers.insert(AUTHORIZATION, value);
		}

		let client = Client::builder()
			.timeout(settings.timeout)
			.default_headers(headers)
			.build()
			.map_err(|err| ServiceError::Config(err.to_string()))?;

		Ok(Self { client, base_url })
	}

	fn get_json<T>(&self, path: &str, params: &[(&str, &str)]) -> Result<T, ServiceError>
	where
		T: DeserializeOwned,
	{
		let url = format!("{}{}", self.base_url, path);
		tracing::debug!(%url, ?params, "querying search service");
		let response = self
			.client
			.get(&url)
			.query(params)
			.send()
			.map_err(|err| ServiceError::Transport(err.to_string()))?;

		let status = response.status();
		let body = response
			.text()
			.map_err(|err| ServiceError::Transport(err.to_string()))?;
		if !status.is_success() {
			return Err(ServiceError::Status {
				status: status.as_u16(),
				body,
			});
		}
		serde_json::from_str(&body).map_err(|err| ServiceError::Decode(err.to_string()))
	}
}

impl SearchService for HttpSearchService {
	fn search_classes(&self, query: &ClassQuery) -> Result<ClassSearchPage, ServiceError> {
		self.get_json("/classes/search", &[("query", query.query.as_str())])
	}

	fn search_class_resources(
		&self,
		query: &ResourceQuery,
	) -> Result<ClassResourcePage, ServiceError> {
		let path = format!("/classes/{}/search", query.class_id);
		let mut params = vec![("query", query.query.as_str())];
		if let Some(kind) = query.kind {
			params.push(("type", kind.as_str()));
		}
		self.get_json(&path, &params)
	}
}
