//! Utility token parsing.
//!
//! A class token such as `focus-visible:!-mt-2` is made of three parts:
//!
//! - a chain of variant modifiers (`focus-visible:`), split on `:` outside of
//!   brackets so arbitrary values like `group-data-[state=open]:` stay intact
//! - an optional important marker (`!`, leading or trailing)
//! - the utility itself (`mt-2`), optionally negated with a leading `-`
//!
//! Only the utility takes part in property-group lookup. The modifiers and the
//! important marker become part of the conflict key, so `hover:bg-a` and
//! `bg-b` never override each other.

/// A class token split into its modifier chain and base utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    raw: &'a str,
    modifiers: &'a str,
    important: bool,
    negative: bool,
    utility: &'a str,
}

impl<'a> Token<'a> {
    /// Parses a single whitespace-free token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylecraft_merge::Token;
    ///
    /// let token = Token::parse("hover:!-mt-2");
    /// assert_eq!(token.modifiers(), "hover:");
    /// assert!(token.is_important());
    /// assert!(token.is_negative());
    /// assert_eq!(token.utility(), "mt-2");
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        let boundary = modifier_boundary(raw);
        let (modifiers, rest) = raw.split_at(boundary);

        let (important, rest) = match rest.strip_prefix('!') {
            Some(stripped) => (true, stripped),
            None => match rest.strip_suffix('!') {
                Some(stripped) => (true, stripped),
                None => (false, rest),
            },
        };

        let (negative, utility) = match rest.strip_prefix('-') {
            Some(stripped) if !stripped.is_empty() => (true, stripped),
            _ => (false, rest),
        };

        Self {
            raw,
            modifiers,
            important,
            negative,
            utility,
        }
    }

    /// The token exactly as written.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The modifier chain including its trailing `:`, or `""`.
    pub fn modifiers(&self) -> &'a str {
        self.modifiers
    }

    /// Returns true if the token carries the important marker.
    pub fn is_important(&self) -> bool {
        self.important
    }

    /// Returns true if the utility is negated (`-mb-px`).
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The bare utility without modifiers, important marker or sign.
    pub fn utility(&self) -> &'a str {
        self.utility
    }

    /// Returns true for arbitrary properties such as `[mask-type:alpha]`.
    ///
    /// These never belong to a property group.
    pub fn is_arbitrary_property(&self) -> bool {
        self.utility.starts_with('[')
    }

    /// Builds the conflict key for this token once its group is known.
    pub(crate) fn conflict_key(&self, group: &str) -> String {
        let mut key = String::with_capacity(self.modifiers.len() + group.len() + 1);
        key.push_str(self.modifiers);
        if self.important {
            key.push('!');
        }
        key.push_str(group);
        key
    }
}

/// Returns the byte offset just past the last top-level `:`.
fn modifier_boundary(raw: &str) -> usize {
    let mut depth = 0usize;
    let mut boundary = 0;
    for (i, byte) in raw.bytes().enumerate() {
        match byte {
            b'[' | b'(' => depth += 1,
            b']' | b')' => depth = depth.saturating_sub(1),
            b':' if depth == 0 => boundary = i + 1,
            _ => {}
        }
    }
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_utility() {
        let token = Token::parse("h-10");
        assert_eq!(token.raw(), "h-10");
        assert_eq!(token.modifiers(), "");
        assert!(!token.is_important());
        assert!(!token.is_negative());
        assert_eq!(token.utility(), "h-10");
    }

    #[test]
    fn test_parse_modifier_chain() {
        let token = Token::parse("dark:focus-visible:ring-2");
        assert_eq!(token.modifiers(), "dark:focus-visible:");
        assert_eq!(token.utility(), "ring-2");
    }

    #[test]
    fn test_parse_bracketed_modifier_keeps_inner_colon() {
        let token = Token::parse("group-data-[state:open]:bg-primary");
        assert_eq!(token.modifiers(), "group-data-[state:open]:");
        assert_eq!(token.utility(), "bg-primary");
    }

    #[test]
    fn test_parse_arbitrary_value_with_colon() {
        let token = Token::parse("min-w-[var(--a:b)]");
        assert_eq!(token.modifiers(), "");
        assert_eq!(token.utility(), "min-w-[var(--a:b)]");
    }

    #[test]
    fn test_parse_important_leading_and_trailing() {
        assert!(Token::parse("!h-8").is_important());
        assert!(Token::parse("h-8!").is_important());
        assert_eq!(Token::parse("h-8!").utility(), "h-8");
    }

    #[test]
    fn test_parse_negative() {
        let token = Token::parse("-mb-px");
        assert!(token.is_negative());
        assert_eq!(token.utility(), "mb-px");
    }

    #[test]
    fn test_lone_dash_is_not_negative() {
        let token = Token::parse("-");
        assert!(!token.is_negative());
        assert_eq!(token.utility(), "-");
    }

    #[test]
    fn test_arbitrary_property() {
        assert!(Token::parse("[mask-type:alpha]").is_arbitrary_property());
        assert!(Token::parse("hover:[mask-type:alpha]").is_arbitrary_property());
        assert!(!Token::parse("bg-[#fff]").is_arbitrary_property());
    }

    #[test]
    fn test_conflict_key_includes_modifiers_and_important() {
        assert_eq!(Token::parse("hover:!bg-a").conflict_key("bg"), "hover:!bg");
        assert_eq!(Token::parse("bg-a").conflict_key("bg"), "bg");
    }
}
