//! Page sets affected by publishing a resource.

use url::Url;

/// The site pages that change when a resource is published.
///
/// Publishing touches three pages: the resource page itself, the resources
/// listing index, and the category index. All three are announced together
/// so search engines re-crawl the listings along with the new content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePages {
    pub resource: String,
    pub listing: String,
    pub categories: String,
}

impl ResourcePages {
    /// Builds the page set for a resource slug against the site base URL.
    pub fn for_slug(base_url: &Url, slug: &str) -> Self {
        let root = base_url.as_str().trim_end_matches('/');
        Self {
            resource: format!("{root}/resources/{slug}"),
            listing: format!("{root}/resources"),
            categories: format!("{root}/resources/categories"),
        }
    }

    /// Announcement order: item page first, then the listing indexes.
    pub fn urls(&self) -> Vec<String> {
        vec![
            self.resource.clone(),
            self.listing.clone(),
            self.categories.clone(),
        ]
    }
}
