//! Desired light state, as sent to `PUT <light>/state` and as read back by [`crate::Light::get_state`].

/// The three mutually exclusive color models of a light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
	Xy,
	ColorTemperature,
	HueSaturation,
}

impl ColorMode {
	/// Parse the bridge's `colormode` value. Returns `None` for anything but `xy`, `ct` and `hs`.
	pub fn parse(mode: &str) -> Option<Self> {
		match mode {
			"xy" => Some(ColorMode::Xy),
			"ct" => Some(ColorMode::ColorTemperature),
			"hs" => Some(ColorMode::HueSaturation),
			_ => None,
		}
	}
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
enum Color {
	Xy {
		#[serde(serialize_with = "finite_xy")]
		xy: [f32; 2],
	},
	ColorTemperature { ct: u16 },
	HueSaturation { hue: u16, sat: u8 },
}

/// JSON has no NaN or infinity; serde_json would write them as `null`.
fn finite_xy<S>(xy: &[f32; 2], serializer: S) -> Result<S::Ok, S::Error>
where
	S: serde::Serializer,
{
	if xy.iter().any(|c| !c.is_finite()) {
		return Err(<S::Error as serde::ser::Error>::custom(format!(
			"non-finite xy coordinates {:?}",
			xy
		)));
	}
	serde::Serialize::serialize(xy, serializer)
}

/// A light state built with [`State::builder`]
///
/// At most one color model is set. Fields left unset are not sent, so the
/// light keeps its current value for them.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct State {
	#[serde(skip_serializing_if = "Option::is_none")]
	on: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	bri: Option<u8>,
	#[serde(flatten)]
	color: Option<Color>,
	#[serde(rename = "transitiontime", skip_serializing_if = "Option::is_none")]
	transition_time: Option<u16>,
}

impl State {
	pub fn builder() -> StateBuilder {
		StateBuilder::default()
	}

	pub fn on(&self) -> Option<bool> {
		self.on
	}

	pub fn brightness(&self) -> Option<u8> {
		self.bri
	}

	pub fn color_mode(&self) -> Option<ColorMode> {
		match self.color {
			Some(Color::Xy { .. }) => Some(ColorMode::Xy),
			Some(Color::ColorTemperature { .. }) => Some(ColorMode::ColorTemperature),
			Some(Color::HueSaturation { .. }) => Some(ColorMode::HueSaturation),
			None => None,
		}
	}

	pub fn xy(&self) -> Option<[f32; 2]> {
		match self.color {
			Some(Color::Xy { xy }) => Some(xy),
			_ => None,
		}
	}

	/// Color temperature in mireks
	pub fn color_temperature(&self) -> Option<u16> {
		match self.color {
			Some(Color::ColorTemperature { ct }) => Some(ct),
			_ => None,
		}
	}

	pub fn hue(&self) -> Option<u16> {
		match self.color {
			Some(Color::HueSaturation { hue, .. }) => Some(hue),
			_ => None,
		}
	}

	pub fn saturation(&self) -> Option<u8> {
		match self.color {
			Some(Color::HueSaturation { sat, .. }) => Some(sat),
			_ => None,
		}
	}

	/// Transition time in deciseconds
	pub fn transition_time(&self) -> Option<u16> {
		self.transition_time
	}
}

/// Builder for [`State`]. Selecting a color model replaces the previous one.
#[derive(Debug, Clone, Default)]
pub struct StateBuilder {
	state: State,
}

impl StateBuilder {
	pub fn on(mut self, on: bool) -> Self {
		self.state.on = Some(on);
		self
	}

	pub fn brightness(mut self, bri: u8) -> Self {
		self.state.bri = Some(bri);
		self
	}

	/// CIE chromaticity coordinates
	pub fn xy(mut self, xy: [f32; 2]) -> Self {
		self.state.color = Some(Color::Xy { xy });
		self
	}

	pub fn color_temperature_in_mireks(mut self, ct: u16) -> Self {
		self.state.color = Some(Color::ColorTemperature { ct });
		self
	}

	pub fn hue_saturation(mut self, hue: u16, sat: u8) -> Self {
		self.state.color = Some(Color::HueSaturation { hue, sat });
		self
	}

	pub fn transition_time(mut self, deciseconds: u16) -> Self {
		self.state.transition_time = Some(deciseconds);
		self
	}

	pub fn build(self) -> State {
		self.state
	}
}
