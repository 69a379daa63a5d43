/// Types that can be matched against the panel search box
pub trait Searchable {
    /// Text the search string is matched against
    fn search_key(&self) -> &str;

    /// Case-insensitive substring match; only the empty filter matches everything.
    /// Whitespace is part of the filter.
    fn matches_filter(&self, filter: &str) -> bool {
        filter.is_empty() || self.search_key().to_lowercase().contains(&filter.to_lowercase())
    }
}

/// Items matching `filter`, in their original order
pub fn filter_items<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let needle = filter.to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.search_key().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// "Showing X of Y" counter of a panel section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionCount {
    /// Items matching the search
    pub shown: usize,
    /// Items in the section before searching
    pub total: usize,
}

impl SectionCount {
    pub fn label(&self) -> String {
        format!("Showing {} of {}", self.shown, self.total)
    }
}
