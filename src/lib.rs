//! env2secret - Convert a .env file into a Kubernetes Secret manifest.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── convert       # Read, build and write pipeline
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── constants     # Defaults and fixed Secret literals
//!     ├── env           # .env parsing and base64 encoding
//!     ├── manifest      # Secret resource and YAML rendering
//!     └── types         # Domain type aliases
//! ```
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use env2secret::core::{env, manifest};
//!
//! let data = env::parse(Cursor::new("API_KEY=secret\n# comment\n")).unwrap();
//! let yaml = manifest::build(data, "env-secrets", Some("prod")).unwrap();
//!
//! assert!(yaml.contains("namespace: prod"));
//! assert!(yaml.contains("API_KEY: c2VjcmV0"));
//! ```

pub mod cli;
pub mod core;
pub mod error;
