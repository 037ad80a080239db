#[macro_use]
extern crate serde_derive;
extern crate reqwest;
extern crate serde;
extern crate serde_json;
pub mod error;
pub use error::{Error, Result};
pub mod lights;
pub mod light_type;
pub use light_type::LightType;
pub mod state;
pub use state::{ColorMode, State, StateBuilder};
pub mod transport;
pub use transport::{HttpTransport, Transport};
pub mod diagnostics;
pub use diagnostics::{Diagnostics, LogDiagnostics};
mod light;
pub use light::{Light, DIMMABLE_LIGHT_COLOR_TEMPERATURE};
pub mod bridge;
pub use bridge::Bridge;
#[cfg(test)]
mod testing;
