//! Constants used throughout env2secret.
//!
//! Centralizes default paths and the fixed Secret literals.

/// Default input file (.env).
pub const ENV_FILE: &str = ".env";

/// Default output manifest path.
pub const OUTPUT_FILE: &str = "secrets.yaml";

/// Default Secret resource name.
pub const SECRET_NAME: &str = "env-secrets";

/// Kubernetes API version of the Secret resource.
pub const API_VERSION: &str = "v1";

/// Resource kind.
pub const KIND: &str = "Secret";

/// Secret type for arbitrary user-defined data.
pub const SECRET_TYPE: &str = "Opaque";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "ENV2SECRET_LOG";

/// Unix permissions for a newly created manifest.
///
/// An existing output file keeps its mode.
#[cfg(unix)]
pub const OUTPUT_MODE: u32 = 0o600;
