#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
/// Attributes of a light, as the bridge describes it
pub struct LightDescriptor {
	pub name: String,
	#[serde(rename = "type")]
	pub light_type: String,
	#[serde(default)]
	pub uniqueid: String,
	#[serde(default)]
	pub modelid: String,
	#[serde(default)]
	pub manufacturername: String,
	#[serde(default)]
	pub swversion: String,
	pub state: LightState,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
/// Current state of a light
///
/// Plain dimmable and on/off lights leave out every color field.
pub struct LightState {
	pub on: bool,
	/// Brightness
	pub bri: Option<u8>,
	/// Which color model currently drives the light
	pub colormode: Option<String>,
	/// CIE chromaticity coordinates
	pub xy: Option<[f32; 2]>,
	/// Color temperature in mireks
	pub ct: Option<u16>,
	pub hue: Option<u16>,
	pub sat: Option<u8>,
	/// Alert mode
	pub alert: Option<String>,
	#[serde(default)]
	pub reachable: bool,
}
