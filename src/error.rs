use std::error::Error as StdError;

/// Boxed cause carried by [`Error::Network`].
pub type Cause = Box<dyn StdError + Send + Sync>;

/// All errors that can occur while talking to a light through the bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The id did not resolve to a light known to the bridge
	#[error("light {0} cannot be found")]
	DeviceNotFound(String),

	/// Transport failure, or a response body that could not be decoded
	#[error("network {action} error: {source}")]
	Network {
		action: String,
		#[source]
		source: Cause,
	},

	/// Failed to serialize a desired state
	#[error("failed to encode state: {0}")]
	Encoding(#[source] serde_json::Error),

	/// The light reported a color mode this crate does not know
	#[error("unknown color mode '{0}'")]
	UnknownColorMode(String),

	/// A bridge address did not form a valid URL
	#[error("invalid url {url}: {reason}")]
	InvalidUrl { url: String, reason: String },
}

impl Error {
	/// Create a new network error
	pub fn network<E>(action: &str, err: E) -> Self
	where
		E: Into<Cause>,
	{
		Error::Network {
			action: action.to_string(),
			source: err.into(),
		}
	}

	/// Create a new invalid url error
	pub fn invalid_url(url: &str, reason: &str) -> Self {
		Error::InvalidUrl {
			url: url.to_string(),
			reason: reason.to_string(),
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
