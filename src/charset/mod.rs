//! Charset model
//!
//! A [`Charset`] is the ordered list of characters a run turns into
//! costumes and kerning rows. Order matters twice: it is the order costumes
//! are written (and imported downstream), and it is the row/column order of
//! the kerning table.
//!
//! A charset is built once, before any export work, and never mutated.

mod filename;

pub use filename::FilenamePolicy;

use std::collections::BTreeSet;
use std::fmt;

/// Latin capital letters, the default uppercase class
pub const DEFAULT_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The built-in charset, in import order
pub const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ abcdefghijklmnopqrstuvwxyz`1234567890-=[]\\;',./~!@#$%^&*()_+{}|:\"<>?";

const DIGITS: &str = "0123456789";

/// Which costume directory a character lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Uppercase,
    Other,
}

impl Bucket {
    /// Directory name under the font data root
    pub fn dir_name(self) -> &'static str {
        match self {
            Bucket::Uppercase => "uppercase-costumes",
            Bucket::Other => "all-other-costumes",
        }
    }

    pub fn all() -> [Bucket; 2] {
        [Bucket::Uppercase, Bucket::Other]
    }
}

/// Ordered character set plus its derived classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
    uppercase: Vec<char>,
    filename_safe: BTreeSet<char>,
}

impl Charset {
    /// The built-in charset: capitals, space, lowercase, then digits and
    /// ASCII punctuation.
    pub fn default_charset() -> Self {
        let uppercase: Vec<char> = DEFAULT_UPPERCASE.chars().collect();
        Self {
            chars: DEFAULT_CHARSET.chars().collect(),
            filename_safe: filename_safe_set(&uppercase),
            uppercase,
        }
    }

    /// Build a charset from operator-supplied letters and extra characters.
    ///
    /// The letters are upper-cased first; the resulting charset is
    /// `letters ++ lowercase(letters) ++ extras`. Duplicates are kept as
    /// given.
    pub fn with_custom_charset<U, E>(upper_letters: U, extras: E) -> Self
    where
        U: IntoIterator<Item = char>,
        E: IntoIterator<Item = char>,
    {
        let uppercase: Vec<char> = upper_letters
            .into_iter()
            .flat_map(char::to_uppercase)
            .collect();

        let mut chars = uppercase.clone();
        chars.extend(lowercase(&uppercase));
        chars.extend(extras);

        Self {
            chars,
            filename_safe: filename_safe_set(&uppercase),
            uppercase,
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn uppercase_class(&self) -> &[char] {
        &self.uppercase
    }

    pub fn is_uppercase_class(&self, c: char) -> bool {
        self.uppercase.contains(&c)
    }

    /// Characters outside the uppercase class, in charset order
    pub fn others(&self) -> impl Iterator<Item = char> + '_ {
        self.chars
            .iter()
            .copied()
            .filter(|c| !self.is_uppercase_class(*c))
    }

    /// Whether `c` can be used verbatim as an artifact name
    pub fn is_filename_safe(&self, c: char) -> bool {
        self.filename_safe.contains(&c)
    }

    pub fn bucket_of(&self, c: char) -> Bucket {
        if self.is_uppercase_class(c) {
            Bucket::Uppercase
        } else {
            Bucket::Other
        }
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::default_charset()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

fn lowercase(letters: &[char]) -> impl Iterator<Item = char> + '_ {
    letters.iter().flat_map(|c| c.to_lowercase())
}

/// letters, space, their lowercase forms, digits, `_` and `-`
fn filename_safe_set(uppercase: &[char]) -> BTreeSet<char> {
    uppercase
        .iter()
        .copied()
        .chain(std::iter::once(' '))
        .chain(lowercase(uppercase))
        .chain(DIGITS.chars())
        .chain(['_', '-'])
        .collect()
}
