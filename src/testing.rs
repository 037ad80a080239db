//! In-memory bridge and diagnostics sink for unit tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use reqwest::Url;
use serde_json::{json, Map, Value};

use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::transport::{join, Transport};

pub const HOST: &str = "bridge.test";
pub const USERNAME: &str = "tester";

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
	pub method: &'static str,
	pub url: String,
	pub body: Option<String>,
}

enum Entry {
	Light(Value),
	Raw(String),
}

/// Serves `/api/<user>/lights[/<id>[/state]]` and honors state PUTs.
#[derive(Default)]
pub struct MockBridge {
	lights: Mutex<BTreeMap<String, Entry>>,
	calls: Mutex<Vec<Call>>,
	offline: Mutex<bool>,
	unauthorized: Mutex<bool>,
}

impl MockBridge {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn lights_url() -> String {
		format!("http://{}/api/{}/lights", HOST, USERNAME)
	}

	pub fn url(&self, id: &str) -> Url {
		Url::parse(&format!("{}/{}", Self::lights_url(), id)).unwrap()
	}

	pub fn add_light(&self, id: &str, descriptor: Value) -> Url {
		self.lights.lock().unwrap().insert(id.to_string(), Entry::Light(descriptor));
		self.url(id)
	}

	pub fn add_raw(&self, id: &str, body: &str) -> Url {
		self.lights.lock().unwrap().insert(id.to_string(), Entry::Raw(body.to_string()));
		self.url(id)
	}

	pub fn set_offline(&self, offline: bool) {
		*self.offline.lock().unwrap() = offline;
	}

	/// Answer every GET the way a bridge answers an unknown username
	pub fn set_unauthorized(&self, unauthorized: bool) {
		*self.unauthorized.lock().unwrap() = unauthorized;
	}

	pub fn calls(&self) -> Vec<Call> {
		self.calls.lock().unwrap().clone()
	}

	fn record(&self, method: &'static str, url: &str, body: Option<&str>) -> Result<()> {
		self.calls.lock().unwrap().push(Call {
			method,
			url: url.to_string(),
			body: body.map(String::from),
		});
		if *self.offline.lock().unwrap() {
			let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
			return Err(Error::network(if method == "GET" { "get" } else { "put" }, refused));
		}
		Ok(())
	}

	fn not_found(resource: &str) -> Value {
		json!([{"error": {"type": 3, "address": resource, "description": format!("resource, {}, not available", resource)}}])
	}
}

impl Transport for MockBridge {
	fn get(&self, url: &Url) -> Result<Vec<u8>> {
		self.record("GET", url.as_str(), None)?;
		if *self.unauthorized.lock().unwrap() {
			let denied = json!([{"error": {"type": 1, "address": "/lights", "description": "unauthorized user"}}]);
			return Ok(denied.to_string().into_bytes());
		}
		let lights = self.lights.lock().unwrap();
		let path = url.as_str();
		if path == Self::lights_url() {
			let all: Map<String, Value> = lights
				.iter()
				.filter_map(|(id, entry)| match entry {
					Entry::Light(value) => Some((id.clone(), value.clone())),
					Entry::Raw(_) => None,
				})
				.collect();
			return Ok(Value::Object(all).to_string().into_bytes());
		}
		let id = path.trim_start_matches(&format!("{}/", Self::lights_url()));
		let body = match lights.get(id) {
			Some(Entry::Light(value)) => value.to_string(),
			Some(Entry::Raw(raw)) => raw.clone(),
			None => Self::not_found(&format!("/lights/{}", id)).to_string(),
		};
		Ok(body.into_bytes())
	}

	fn put(&self, url: &Url, path: &str, body: &str) -> Result<String> {
		let target = join(url, path);
		self.record("PUT", &target, Some(body))?;
		let id = url.as_str().trim_start_matches(&format!("{}/", Self::lights_url())).to_string();
		let mut lights = self.lights.lock().unwrap();
		let state = match lights.get_mut(&id) {
			Some(Entry::Light(value)) => &mut value["state"],
			_ => return Ok(Self::not_found(&format!("/lights/{}{}", id, path)).to_string()),
		};
		let changes: Map<String, Value> = serde_json::from_str(body).unwrap();
		let mut answer = Vec::new();
		for (key, value) in changes {
			match key.as_str() {
				"xy" => state["colormode"] = json!("xy"),
				"ct" => state["colormode"] = json!("ct"),
				"hue" | "sat" => state["colormode"] = json!("hs"),
				_ => {}
			}
			answer.push(json!({"success": {format!("/lights/{}/state/{}", id, key): value.clone()}}));
			state[key.as_str()] = value;
		}
		Ok(Value::Array(answer).to_string())
	}
}

/// Captures every `(light id, message)` report
#[derive(Default)]
pub struct RecordingDiagnostics {
	messages: Mutex<Vec<(String, String)>>,
}

impl RecordingDiagnostics {
	pub fn messages(&self) -> Vec<(String, String)> {
		self.messages.lock().unwrap().clone()
	}
}

impl Diagnostics for RecordingDiagnostics {
	fn record(&self, light_id: &str, message: &str) {
		self.messages.lock().unwrap().push((light_id.to_string(), message.to_string()));
	}
}
