use std::fmt;
use std::sync::Arc;

use reqwest::Url;
use serde_json::json;

use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::error::{Error, Result};
use crate::light_type::LightType;
use crate::lights::{LightDescriptor, LightState};
use crate::state::{ColorMode, State};
use crate::transport::Transport;

const STATE_PATH: &str = "/state";

/// Color temperature reported for lights that have no color mode at all
pub const DIMMABLE_LIGHT_COLOR_TEMPERATURE: u16 = 370;

/// A single light behind the bridge
///
/// Holds no cached device state: every read and write is a fresh request.
#[derive(Clone)]
pub struct Light {
	id: String,
	name: String,
	base_url: Url,
	light_type: LightType,
	transport: Arc<dyn Transport>,
	diagnostics: Arc<dyn Diagnostics>,
}

impl Light {
	/// Build a controller for the light `id` located at `base_url`.
	///
	/// Fails with [`Error::DeviceNotFound`] when there is no descriptor for it.
	pub fn new(
		id: &str,
		descriptor: Option<&LightDescriptor>,
		base_url: Url,
		transport: Arc<dyn Transport>,
	) -> Result<Self> {
		let descriptor = descriptor.ok_or_else(|| Error::DeviceNotFound(id.to_string()))?;
		Ok(Light {
			id: id.to_string(),
			name: descriptor.name.clone(),
			base_url,
			light_type: LightType::classify(&descriptor.light_type),
			transport,
			diagnostics: Arc::new(LogDiagnostics),
		})
	}

	/// Replace the sink receiving raw bridge responses
	pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
		self.diagnostics = diagnostics;
		self
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	/// The name as it was when this light was looked up
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn light_type(&self) -> LightType {
		self.light_type
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	pub fn turn_on(&self) -> Result<()> {
		self.put_state(&json!({"on": true}).to_string())
	}

	pub fn turn_off(&self) -> Result<()> {
		self.put_state(&json!({"on": false}).to_string())
	}

	/// Passed through unchecked; the bridge decides what is in range.
	pub fn set_brightness(&self, bri: u8) -> Result<()> {
		self.put_state(&json!({ "bri": bri }).to_string())
	}

	pub fn set_state(&self, state: &State) -> Result<()> {
		let body = serde_json::to_string(state).map_err(Error::Encoding)?;
		self.put_state(&body)
	}

	pub fn is_on(&self) -> Result<bool> {
		Ok(self.fetch_state()?.on)
	}

	/// Read the light's current state back as a [`State`].
	///
	/// Lights without a color mode are reported at
	/// [`DIMMABLE_LIGHT_COLOR_TEMPERATURE`].
	pub fn get_state(&self) -> Result<State> {
		let state = self.fetch_state()?;
		let mut builder = State::builder().on(state.on);
		if let Some(bri) = state.bri {
			builder = builder.brightness(bri);
		}
		let mode = match state.colormode.as_deref() {
			None => return Ok(builder.color_temperature_in_mireks(DIMMABLE_LIGHT_COLOR_TEMPERATURE).build()),
			Some(mode) => mode,
		};
		builder = match ColorMode::parse(mode) {
			Some(ColorMode::Xy) => builder.xy(required(state.xy, "xy")?),
			Some(ColorMode::ColorTemperature) => builder.color_temperature_in_mireks(required(state.ct, "ct")?),
			Some(ColorMode::HueSaturation) => {
				builder.hue_saturation(required(state.hue, "hue")?, required(state.sat, "sat")?)
			}
			None => return Err(Error::UnknownColorMode(mode.to_string())),
		};
		Ok(builder.build())
	}

	fn fetch_state(&self) -> Result<LightState> {
		let body = self.transport.get(&self.base_url)?;
		let light: LightDescriptor = serde_json::from_slice(&body).map_err(|e| Error::network("decode", e))?;
		self.diagnostics.record(&self.id, &format!("{:?}", light.state));
		Ok(light.state)
	}

	fn put_state(&self, body: &str) -> Result<()> {
		let result = self.transport.put(&self.base_url, STATE_PATH, body)?;
		self.diagnostics.record(&self.id, &result);
		Ok(())
	}
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
	value.ok_or_else(|| Error::network("decode", format!("missing field `{}` for its color mode", field)))
}

impl fmt::Display for Light {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "Light{{id='{}', name='{}', type={}}}", self.id, self.name, self.light_type)
	}
}

impl fmt::Debug for Light {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Light")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("base_url", &self.base_url.as_str())
			.field("light_type", &self.light_type)
			.finish()
	}
}
