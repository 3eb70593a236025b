//! # jsonfr-cli — Command-Line Interface
//!
//! Provides the `jsonfr` binary, a thin shell around `jsonfr-replace`.
//!
//! ## Subcommands
//!
//! - `jsonfr replace` — Apply a replacement and write the document and diff.
//! - `jsonfr preview` — List what a replacement would change, write nothing.
//!
//! ```bash
//! jsonfr replace --document record.json --schema schema.yaml \
//!     --search CERN --replacement "CERN (Geneva)" --output out.json --diff-output diff.json
//! jsonfr preview --document record.json --schema schema.yaml --search CERN --replacement x
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `jsonfr-replace`; no traversal logic lives here.

pub mod config;
pub mod io;
pub mod preview;
pub mod replace;

use std::path::Path;

/// Returns true when `path` has a `.yaml` or `.yml` extension.
pub fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_extensions_are_detected() {
        assert!(is_yaml(Path::new("schema.yaml")));
        assert!(is_yaml(Path::new("dir/schema.YML")));
        assert!(!is_yaml(Path::new("schema.json")));
        assert!(!is_yaml(Path::new("schema")));
    }
}
