//! Knobs for a find-and-replace run.

use serde::{Deserialize, Serialize};

use crate::diff::DiffMode;
use crate::matcher::DiffMarkup;

/// Options for [`FindReplace`](crate::FindReplace).
///
/// Every field has a default, so a config file may set any subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplaceOptions {
    /// Only replace string values exactly equal to the search term.
    pub match_whole: bool,
    /// Rendering used by [`FindReplaceOutcome::diff_html`](crate::FindReplaceOutcome::diff_html).
    pub diff_mode: DiffMode,
    /// Tags wrapped around inserted and deleted text.
    pub markup: DiffMarkup,
}
