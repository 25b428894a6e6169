use crate::types::Product;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Compiled size budget for a search pattern.
pub const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Compiled product search term.
///
/// The term is matched literally: regex metacharacters are escaped before the
/// case-insensitive pattern is built. An absent or empty term matches everything.
#[derive(Debug, Clone)]
pub enum SearchTerm {
    All,
    Pattern(Regex),
    /// The escaped term did not fit the pattern size limit; matches no product.
    Nothing,
}

impl SearchTerm {
    pub fn new(term: Option<&str>) -> Self {
        Self::with_size_limit(term, PATTERN_SIZE_LIMIT)
    }

    pub fn with_size_limit(term: Option<&str>, size_limit: usize) -> Self {
        let Some(term) = term.filter(|t| !t.is_empty()) else {
            return SearchTerm::All;
        };

        match RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .size_limit(size_limit)
            .build()
        {
            Ok(re) => SearchTerm::Pattern(re),
            Err(e) => {
                warn!(error = %e, term_len = term.len(), "search term rejected by regex engine");
                SearchTerm::Nothing
            }
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            SearchTerm::All => true,
            SearchTerm::Pattern(re) => {
                re.is_match(&product.name) || re.is_match(&product.description)
            }
            SearchTerm::Nothing => false,
        }
    }
}

/// Products whose name or description contains `term`, in input order.
pub fn filter(products: &[Product], term: Option<&str>) -> Vec<Product> {
    let term = SearchTerm::new(term);
    products
        .iter()
        .filter(|p| term.matches(p))
        .cloned()
        .collect()
}
