use std::fmt;

/// Parsed form of an id prompt answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The `ALL` sentinel (case-insensitive).
    All,
    /// Explicit ids, in input order.
    Ids(Vec<String>),
}

/// An id that was requested but absent from the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownId(pub String);

impl fmt::Display for UnknownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id {} not found", self.0)
    }
}

impl std::error::Error for UnknownId {}

/// Parses a comma-separated id list; a lone `all` token selects everything.
/// Whitespace around tokens is ignored, empty tokens are dropped.
pub fn parse_selection(input: &str) -> Selection {
    if input.trim().eq_ignore_ascii_case("all") {
        return Selection::All;
    }
    let ids = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();
    Selection::Ids(ids)
}

impl Selection {
    /// Resolves the selection against a listing. `id_of` projects an item's
    /// id. Fails on the first requested id missing from the listing.
    pub fn resolve<'a, T>(
        &self,
        items: &'a [T],
        id_of: impl Fn(&T) -> &str,
    ) -> Result<Vec<&'a T>, UnknownId> {
        match self {
            Selection::All => Ok(items.iter().collect()),
            Selection::Ids(ids) => ids
                .iter()
                .map(|id| {
                    items
                        .iter()
                        .find(|item| id_of(item) == id)
                        .ok_or_else(|| UnknownId(id.clone()))
                })
                .collect(),
        }
    }
}
