use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// What a light can do, as derived from the type string the bridge reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum LightType {
	#[strum(serialize = "On/off light")]
	OnOff,
	#[strum(serialize = "Dimmable light")]
	Dimmable,
	#[strum(serialize = "Color temperature light")]
	ColorTemperature,
	#[strum(serialize = "Color light")]
	Color,
	#[strum(serialize = "Extended color light")]
	ExtendedColor,
	Unknown,
}

impl LightType {
	/// Classify a reported type string. Never fails; unrecognized strings are `Unknown`.
	pub fn classify(reported: &str) -> Self {
		let reported = reported.trim();
		LightType::iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(reported))
			.unwrap_or(LightType::Unknown)
	}

	/// The type string the bridge uses for this kind of light
	pub fn as_str(&self) -> &'static str {
		self.into()
	}
}

impl Default for LightType {
	fn default() -> Self {
		LightType::Unknown
	}
}

impl From<&str> for LightType {
	fn from(reported: &str) -> Self {
		LightType::classify(reported)
	}
}
