//! Ordered token lists.

/// An ordered list of class tokens.
///
/// Token lists are built from strings (split on whitespace) or from sequences
/// of strings, so both `"h-8 px-3"` and `["h-8", "px-3"]` describe the same
/// two tokens. Order is preserved; duplicates are kept, since collapsing them
/// is the merger's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tokens(Vec<String>);

impl Tokens {
    /// Creates an empty token list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every whitespace-separated token in `group`.
    pub fn push_group(&mut self, group: &str) {
        self.0
            .extend(group.split_whitespace().map(str::to_string));
    }

    /// Appends all tokens of another list.
    pub fn extend_from(&mut self, other: &Tokens) {
        self.0.extend(other.0.iter().cloned());
    }

    /// Returns the tokens as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterates over the tokens.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the list, returning the tokens.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Tokens {
    fn from(group: &str) -> Self {
        let mut tokens = Tokens::new();
        tokens.push_group(group);
        tokens
    }
}

impl From<String> for Tokens {
    fn from(group: String) -> Self {
        Tokens::from(group.as_str())
    }
}

impl From<&String> for Tokens {
    fn from(group: &String) -> Self {
        Tokens::from(group.as_str())
    }
}

impl From<&[&str]> for Tokens {
    fn from(groups: &[&str]) -> Self {
        groups.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for Tokens {
    fn from(groups: [&str; N]) -> Self {
        groups.into_iter().collect()
    }
}

impl From<Vec<&str>> for Tokens {
    fn from(groups: Vec<&str>) -> Self {
        groups.into_iter().collect()
    }
}

impl From<Vec<String>> for Tokens {
    fn from(groups: Vec<String>) -> Self {
        groups.iter().map(String::as_str).collect()
    }
}

impl<'a> FromIterator<&'a str> for Tokens {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut tokens = Tokens::new();
        for group in iter {
            tokens.push_group(group);
        }
        tokens
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
