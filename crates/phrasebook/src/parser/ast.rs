//! Public AST types for scanned phrase templates.

/// A scanned template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// A template made of a single literal run (or nothing, for `""`).
    pub fn literal(text: &str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Literal(text.to_string())]
        };
        Template { segments }
    }

    /// Token names in order of appearance, repeats included.
    pub fn token_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Token { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text (no interpolation).
    Literal(String),
    /// A placeholder token.
    Token {
        /// Text between the prefix and the suffix; may be empty.
        name: String,
        /// The full matched text including delimiters, emitted verbatim when
        /// no substitution is available.
        raw: String,
    },
}
