//! Costume file naming

use super::Charset;
use serde::{Deserialize, Serialize};

/// How to name the costume of a character that is not filename-safe
///
/// Safe characters (letters of the charset, digits, space, `_`, `-`) are
/// always written under the character itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FilenamePolicy {
    /// Use the character's 0-based position in the charset
    #[default]
    Index,
    /// Use the character verbatim; names the filesystem cannot hold abort the run
    Raw,
}

impl FilenamePolicy {
    /// File stem for the costume of `c`, found at `index` in `charset`
    pub fn costume_stem(self, charset: &Charset, index: usize, c: char) -> String {
        if charset.is_filename_safe(c) {
            return c.to_string();
        }
        match self {
            FilenamePolicy::Index => index.to_string(),
            FilenamePolicy::Raw => c.to_string(),
        }
    }
}
