//! Gallery category filtering.

/// Pseudo-category that matches every item.
pub const ALL_CATEGORIES: &str = "All";

/// One gallery photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub src: String,
    pub alt: String,
    pub category: String,
}

impl GalleryItem {
    pub fn new(src: impl Into<String>, alt: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            category: category.into(),
        }
    }
}

/// Items in `category`, or all items for [`ALL_CATEGORIES`].
///
/// The result is what the lightbox navigates over, so its order matches
/// the source order.
pub fn filter_items<'a>(items: &'a [GalleryItem], category: &str) -> Vec<&'a GalleryItem> {
    items
        .iter()
        .filter(|item| category == ALL_CATEGORIES || item.category == category)
        .collect()
}

/// Distinct categories in first-seen order, prefixed with [`ALL_CATEGORIES`].
pub fn categories(items: &[GalleryItem]) -> Vec<&str> {
    let mut out = vec![ALL_CATEGORIES];
    for item in items {
        if !out.contains(&item.category.as_str()) {
            out.push(item.category.as_str());
        }
    }
    out
}

/// [`categories`] paired with how many items each one shows.
pub fn category_counts(items: &[GalleryItem]) -> Vec<(&str, usize)> {
    categories(items)
        .into_iter()
        .map(|category| (category, filter_items(items, category).len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<GalleryItem> {
        vec![
            GalleryItem::new("a.jpg", "Ceremony", "Weddings"),
            GalleryItem::new("b.jpg", "Conference", "Corporate"),
            GalleryItem::new("c.jpg", "Reception", "Weddings"),
        ]
    }

    #[test]
    fn all_keeps_everything_in_order() {
        let items = items();
        let filtered = filter_items(&items, ALL_CATEGORIES);
        let srcs: Vec<_> = filtered.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(srcs, ["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn filters_by_category() {
        let items = items();
        assert_eq!(filter_items(&items, "Weddings").len(), 2);
        assert!(filter_items(&items, "Décor").is_empty());
    }

    #[test]
    fn categories_are_distinct() {
        assert_eq!(categories(&items()), ["All", "Weddings", "Corporate"]);
    }

    #[test]
    fn counts_follow_category_order() {
        assert_eq!(
            category_counts(&items()),
            [("All", 3), ("Weddings", 2), ("Corporate", 1)]
        );
        assert_eq!(category_counts(&[]), [("All", 0)]);
    }
}
