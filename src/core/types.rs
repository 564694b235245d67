//! Type aliases for domain concepts.

use std::collections::BTreeMap;

/// A key taken from the left-hand side of a `KEY=VALUE` line.
pub type SecretKey = String;

/// A base64-encoded secret value, as stored in the Secret's `data` field.
pub type EncodedValue = String;

/// Parsed env file contents: key to encoded value.
///
/// Sorted so the rendered manifest is stable across runs.
pub type SecretData = BTreeMap<SecretKey, EncodedValue>;
