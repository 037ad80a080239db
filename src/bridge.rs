use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::Url;

use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::error::{Error, Result};
use crate::light::Light;
use crate::lights::LightDescriptor;
use crate::transport::{HttpTransport, Transport};

/// Bridge error type for a resource that does not exist
const RESOURCE_NOT_AVAILABLE: u16 = 3;

#[derive(Deserialize, Debug)]
struct ApiError {
	#[serde(rename = "type")]
	kind: u16,
	#[serde(default)]
	address: String,
	#[serde(default)]
	description: String,
}

#[derive(Deserialize, Debug)]
struct ErrorEntry {
	error: ApiError,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum LightReply {
	Found(LightDescriptor),
	Failed(Vec<ErrorEntry>),
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum LightsReply {
	Found(BTreeMap<String, LightDescriptor>),
	Failed(Vec<ErrorEntry>),
}

fn bridge_error(entry: &ErrorEntry) -> Error {
	Error::network("get", format!("{} ({})", entry.error.description, entry.error.address))
}

/// An already paired Hue bridge, addressed by host and username
pub struct Bridge {
	base_url: String,
	lights_url: Url,
	transport: Arc<dyn Transport>,
	diagnostics: Arc<dyn Diagnostics>,
}

impl Bridge {
	pub fn new(host: &str, username: &str) -> Result<Self> {
		Self::with_transport(host, username, Arc::new(HttpTransport::new()))
	}

	pub fn with_transport(host: &str, username: &str, transport: Arc<dyn Transport>) -> Result<Self> {
		let base_url = format!("http://{}/api/{}", host, username);
		let lights_url = parse_url(&format!("{}/lights", base_url))?;
		Ok(Bridge {
			base_url,
			lights_url,
			transport,
			diagnostics: Arc::new(LogDiagnostics),
		})
	}

	/// Sink handed to every light this bridge builds
	pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
		self.diagnostics = diagnostics;
		self
	}

	pub fn light_url(&self, id: &str) -> Result<Url> {
		parse_url(&format!("{}/lights/{}", self.base_url, id))
	}

	/// Look up a single light. Fails with [`Error::DeviceNotFound`] if the bridge does not know it.
	pub fn light(&self, id: &str) -> Result<Light> {
		let url = self.light_url(id)?;
		let body = self.transport.get(&url)?;
		let reply: LightReply = serde_json::from_slice(&body).map_err(|e| Error::network("decode", e))?;
		let descriptor = match reply {
			LightReply::Found(descriptor) => Some(descriptor),
			LightReply::Failed(errors) => {
				if let Some(entry) = errors.iter().find(|e| e.error.kind != RESOURCE_NOT_AVAILABLE) {
					return Err(bridge_error(entry));
				}
				None
			}
		};
		self.build(id, descriptor.as_ref(), url)
	}

	/// All lights the bridge knows, ordered by id
	pub fn lights(&self) -> Result<Vec<Light>> {
		let body = self.transport.get(&self.lights_url)?;
		let reply: LightsReply = serde_json::from_slice(&body).map_err(|e| Error::network("decode", e))?;
		let all = match reply {
			LightsReply::Found(all) => all,
			LightsReply::Failed(errors) => {
				return Err(errors
					.first()
					.map(bridge_error)
					.unwrap_or_else(|| Error::network("get", "bridge answered with an empty error list")))
			}
		};
		all.iter()
			.map(|(id, descriptor)| self.build(id, Some(descriptor), self.light_url(id)?))
			.collect()
	}

	fn build(&self, id: &str, descriptor: Option<&LightDescriptor>, url: Url) -> Result<Light> {
		let light = Light::new(id, descriptor, url, self.transport.clone())?;
		Ok(light.with_diagnostics(self.diagnostics.clone()))
	}
}

fn parse_url(url: &str) -> Result<Url> {
	Url::parse(url).map_err(|e| Error::invalid_url(url, &e.to_string()))
}
