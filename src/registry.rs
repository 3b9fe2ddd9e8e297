//! Page Registry Module
//!
//! Fixed mapping from page name to the ordered fragments that compose it.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

// == Fragment List ==
/// Ordered, immutable sequence of fragment identifiers.
///
/// Cloning is cheap: the identifiers are shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FragmentList(Arc<[String]>);

impl FragmentList {
    /// Builds a list from string literals.
    pub fn from_static(fragments: &[&str]) -> Self {
        fragments.iter().map(|f| f.to_string()).collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for FragmentList {
    fn from(fragments: Vec<String>) -> Self {
        Self(fragments.into())
    }
}

impl FromIterator<String> for FragmentList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FragmentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

// == Page Entry ==
/// A registered page and its fragment composition.
#[derive(Debug, Clone, Copy)]
pub struct PageEntry {
    pub page_name: &'static str,
    pub fragments: &'static [&'static str],
}

/// Pages known to the composer.
pub const BUILTIN_PAGES: &[PageEntry] = &[
    PageEntry {
        page_name: "home",
        fragments: &[
            "fragments/header",
            "fragments/content",
            "fragments/offers",
            "fragments/footer",
        ],
    },
    PageEntry {
        page_name: "product",
        fragments: &[
            "fragments/header",
            "fragments/sidebar",
            "fragments/productDetails",
            "fragments/reviews",
            "fragments/footer",
        ],
    },
    PageEntry {
        page_name: "about",
        fragments: &["fragments/header", "fragments/sidebar", "fragments/footer"],
    },
    PageEntry {
        page_name: "contact",
        fragments: &["fragments/header", "fragments/footer"],
    },
];

// == Page Registry ==
/// Read-only lookup table from page name to [`FragmentList`].
///
/// Names match case-insensitively (ASCII folding over the whole name). The
/// table never changes after construction, so a registry can be shared across
/// threads without locking.
#[derive(Debug, Clone)]
pub struct PageRegistry {
    entries: Vec<(&'static str, FragmentList)>,
}

impl PageRegistry {
    /// Creates a registry over [`BUILTIN_PAGES`].
    pub fn builtin() -> Self {
        Self::from_static(BUILTIN_PAGES)
    }

    /// Creates a registry over a fixed table.
    pub fn from_static(pages: &'static [PageEntry]) -> Self {
        Self {
            entries: pages
                .iter()
                .map(|page| (page.page_name, FragmentList::from_static(page.fragments)))
                .collect(),
        }
    }

    // == Lookup ==
    /// Returns the fragments for `page_name`, or `None` if no page matches.
    pub fn lookup(&self, page_name: &str) -> Option<FragmentList> {
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(page_name))
            .map(|(_, fragments)| fragments.clone())
    }

    /// Returns true if `page_name` has a registered composition.
    pub fn is_registered(&self, page_name: &str) -> bool {
        self.lookup(page_name).is_some()
    }

    /// Registered page names in table order.
    pub fn page_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
