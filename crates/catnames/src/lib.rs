#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Embedded list of cat names used to assemble memorable passwords.
use meowpass_password::WordList;
use once_cell::sync::Lazy;

const SOURCE: &str = include_str!("cat_names.txt");

static CAT_NAMES: Lazy<CatNames> = Lazy::new(|| CatNames::parse(SOURCE));

/// List of cat names.
#[derive(Debug, Clone, Default)]
pub struct CatNames {
    names: Vec<&'static str>,
}

impl CatNames {
    /// Shared list of the embedded cat names.
    pub fn builtin() -> &'static CatNames {
        &CAT_NAMES
    }

    /// Parse a list of names with one name per line.
    ///
    /// Surrounding whitespace is trimmed; blank lines and lines
    /// starting with `#` are ignored.
    pub fn parse(source: &'static str) -> Self {
        let names = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        Self { names }
    }

    /// Names in the list.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }
}

impl WordList for CatNames {
    type Token = &'static str;

    fn tokens(&self) -> &[&'static str] {
        &self.names
    }
}
