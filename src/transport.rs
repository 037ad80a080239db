use std::time::Duration;

use log::trace;
use reqwest::blocking::Client;
use reqwest::Url;

use crate::error::{Error, Result};

/// Blocking HTTP access to the bridge
///
/// Every call is one round trip. Failures surface as [`Error::Network`].
pub trait Transport: Send + Sync {
	/// `GET url`, returning the raw response body
	fn get(&self, url: &Url) -> Result<Vec<u8>>;

	/// `PUT url + path` with a JSON body, returning the response text
	fn put(&self, url: &Url, path: &str, body: &str) -> Result<String>;
}

/// Append `path` to `url` without replacing its last segment
pub(crate) fn join(url: &Url, path: &str) -> String {
	format!("{}{}", url.as_str().trim_end_matches('/'), path)
}

/// [`Transport`] backed by a blocking reqwest client
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
	client: Client,
}

impl HttpTransport {
	/// A client without any timeout; a hung bridge blocks the caller
	pub fn new() -> Self {
		Self::from_client(Client::new())
	}

	pub fn with_timeout(timeout: Duration) -> Result<Self> {
		let client = Client::builder()
			.timeout(timeout)
			.build()
			.map_err(|e| Error::network("build client", e))?;
		Ok(Self::from_client(client))
	}

	pub fn from_client(client: Client) -> Self {
		HttpTransport { client }
	}
}

impl Transport for HttpTransport {
	fn get(&self, url: &Url) -> Result<Vec<u8>> {
		trace!("GET {}", url);
		let response = self
			.client
			.get(url.clone())
			.send()
			.and_then(|r| r.error_for_status())
			.map_err(|e| Error::network("get", e))?;
		let body = response.bytes().map_err(|e| Error::network("get", e))?;
		Ok(body.to_vec())
	}

	fn put(&self, url: &Url, path: &str, body: &str) -> Result<String> {
		let target = join(url, path);
		trace!("PUT {} {}", target, body);
		let response = self
			.client
			.put(target.as_str())
			.header(reqwest::header::CONTENT_TYPE, "application/json")
			.body(body.to_string())
			.send()
			.and_then(|r| r.error_for_status())
			.map_err(|e| Error::network("put", e))?;
		response.text().map_err(|e| Error::network("put", e))
	}
}
