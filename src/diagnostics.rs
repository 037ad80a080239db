use log::debug;

/// Side channel for raw bridge responses
///
/// Reports happen in addition to returning typed errors, never instead of them.
pub trait Diagnostics: Send + Sync {
	fn record(&self, light_id: &str, message: &str);
}

/// Forwards every report to the `log` facade at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
	fn record(&self, light_id: &str, message: &str) {
		debug!("light {}: {}", light_id, message);
	}
}
