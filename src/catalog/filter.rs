//! Substring filter over catalog records.
//!
//! Filtering is a pure function of the records and a [`QueryState`]: the query
//! text is trimmed and lower-cased, then every record whose selected field
//! (name or alcohol type), lower-cased, contains it is retained. Relative
//! order is preserved and an empty query is the identity.

use crate::domain::Recipe;

/// Field the query text is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Match against the recipe name.
    #[default]
    ByName,
    /// Match against the alcohol type.
    ByAlcoholType,
}

impl FilterMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::ByName => Self::ByAlcoholType,
            Self::ByAlcoholType => Self::ByName,
        }
    }

    /// Tab label shown in the listing.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ByName => "Name",
            Self::ByAlcoholType => "Alcohol Type",
        }
    }

    /// Search bar placeholder for this mode.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::ByName => "Search by cocktail name...",
            Self::ByAlcoholType => "Search by alcohol type...",
        }
    }

    /// The field of `recipe` this mode matches against.
    #[must_use]
    pub fn field(self, recipe: &Recipe) -> &str {
        match self {
            Self::ByName => &recipe.name,
            Self::ByAlcoholType => &recipe.alcohol_type,
        }
    }
}

/// Current search input: the active mode and the raw text typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub mode: FilterMode,
    pub text: String,
}

impl QueryState {
    /// Switches the filter mode and clears the text.
    ///
    /// The text is cleared even when `mode` is already active, so a name
    /// fragment is never reinterpreted as an alcohol type.
    pub fn set_mode(&mut self, mode: FilterMode) {
        self.mode = mode;
        self.text.clear();
    }

    /// Whether the query selects every record.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Trims and lower-cases query text.
#[must_use]
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Returns the records matching `query`, preserving their relative order.
///
/// # Examples
///
/// ```
/// use emerald_shaker::catalog::{filter, FilterMode, QueryState};
/// use emerald_shaker::domain::{Recipe, RecipeId};
///
/// let make = |id: &str, name: &str, kind: &str| Recipe {
///     id: RecipeId::new(id),
///     name: name.into(),
///     alcohol_type: kind.into(),
///     glass: String::new(),
///     ingredients: vec![],
///     food_pairings: vec![],
///     instructions: String::new(),
/// };
/// let records = vec![make("1", "Margarita", "Tequila"), make("2", "Daiquiri", "Rum")];
///
/// let query = QueryState { mode: FilterMode::ByName, text: "mar".into() };
/// let hits = filter(&records, &query);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id.as_str(), "1");
/// ```
#[must_use]
pub fn filter<'a>(records: &'a [Recipe], query: &QueryState) -> Vec<&'a Recipe> {
    let _span = tracing::debug_span!(
        "filter_recipes",
        total = records.len(),
        mode = ?query.mode,
        query_len = query.text.len()
    )
    .entered();

    let needle = normalize_query(&query.text);
    if needle.is_empty() {
        return records.iter().collect();
    }

    let matches: Vec<&Recipe> = records
        .iter()
        .filter(|recipe| query.mode.field(recipe).to_lowercase().contains(&needle))
        .collect();

    tracing::debug!(matched = matches.len(), "filter applied");
    matches
}

/// Character range `(start, end)` of the first case-insensitive occurrence of
/// the normalized query inside `haystack`.
///
/// Indices count characters of `haystack`, not bytes, so the range can be
/// used directly for highlighting. Returns `None` for a blank query or when
/// there is no occurrence.
#[must_use]
pub fn match_range(haystack: &str, query: &str) -> Option<(usize, usize)> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return None;
    }

    // Lower-case the whole string, as `filter` does, so context-sensitive
    // mappings (final sigma) agree. Each char still lowers to the same
    // number of chars as on its own.
    let lowered = haystack.to_lowercase();
    let mut lowered_chars = lowered.chars();
    let mut owners: Vec<usize> = Vec::with_capacity(lowered.len());
    for (char_idx, ch) in haystack.chars().enumerate() {
        for lower in lowered_chars.by_ref().take(ch.to_lowercase().count()) {
            owners.extend(std::iter::repeat(char_idx).take(lower.len_utf8()));
        }
    }

    let start = lowered.find(&needle)?;
    let end = start + needle.len();
    Some((*owners.get(start)?, *owners.get(end - 1)? + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecipeId;

    fn recipe(id: &str, name: &str, alcohol_type: &str) -> Recipe {
        Recipe {
            id: RecipeId::new(id),
            name: name.to_string(),
            alcohol_type: alcohol_type.to_string(),
            glass: String::new(),
            ingredients: vec![],
            food_pairings: vec![],
            instructions: String::new(),
        }
    }

    fn query(mode: FilterMode, text: &str) -> QueryState {
        QueryState {
            mode,
            text: text.to_string(),
        }
    }

    fn ids(hits: &[&Recipe]) -> Vec<String> {
        hits.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn whitespace_only_query_is_identity() {
        let records = vec![recipe("1", "Margarita", "Tequila"), recipe("2", "Daiquiri", "Rum")];
        let hits = filter(&records, &query(FilterMode::ByAlcoholType, "   \t"));
        assert_eq!(ids(&hits), ["1", "2"]);
        assert!(std::ptr::eq(hits[0], &records[0]));
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let records = vec![recipe("1", "Old Fashioned", "Whiskey"), recipe("2", "Mojito", "Rum")];
        let hits = filter(&records, &query(FilterMode::ByName, "  FASHION "));
        assert_eq!(ids(&hits), ["1"]);
    }

    #[test]
    fn mode_selects_the_matched_field() {
        let records = vec![recipe("1", "Rum Runner", "Rum"), recipe("2", "Gin Rummy", "Gin")];
        assert_eq!(ids(&filter(&records, &query(FilterMode::ByName, "rum"))), ["1", "2"]);
        assert_eq!(ids(&filter(&records, &query(FilterMode::ByAlcoholType, "rum"))), ["1"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let records = vec![recipe("1", "Mojito", "Rum")];
        assert!(filter(&records, &query(FilterMode::ByName, "zzz")).is_empty());
    }

    #[test]
    fn inner_whitespace_is_significant() {
        let records = vec![recipe("1", "Old Fashioned", "Whiskey")];
        assert!(filter(&records, &query(FilterMode::ByName, "old  fashioned")).is_empty());
    }

    #[test]
    fn set_mode_always_clears_text() {
        let mut q = query(FilterMode::ByName, "mar");
        q.set_mode(FilterMode::ByName);
        assert!(q.text.is_empty());
        q.text.push_str("gin");
        q.set_mode(FilterMode::ByAlcoholType);
        assert_eq!(q, QueryState { mode: FilterMode::ByAlcoholType, text: String::new() });
    }

    #[test]
    fn match_range_counts_characters() {
        assert_eq!(match_range("Piña Colada", "colada"), Some((5, 11)));
        assert_eq!(match_range("Piña Colada", "ÑA"), Some((2, 4)));
        assert_eq!(match_range("Mojito", " "), None);
        assert_eq!(match_range("Mojito", "gin"), None);
    }

    #[test]
    fn highlight_agrees_with_filter_on_final_sigma() {
        let records = vec![recipe("1", "ΧΑΟΣ", "Ouzo")];
        let hits = filter(&records, &query(FilterMode::ByName, "ΑΟΣ"));
        assert_eq!(ids(&hits), ["1"]);
        assert_eq!(match_range("ΧΑΟΣ", "ΑΟΣ"), Some((1, 4)));
    }
}
