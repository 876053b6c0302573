//! Fixed suggestion catalog.
//!
//! Records are grouped by [`CategoryKey`] and stored as `'static` arrays, one
//! data file per category. A pick is identified by its [`SuggestionId`]
//! (category + position) rather than by the record value, so two records with
//! the same text in different places are still different picks.
use std::fmt;
use std::sync::OnceLock;

use crate::error::ConfigurationError;

mod adventurous;
mod chill;
mod culture;

pub use adventurous::ADVENTUROUS;
pub use chill::CHILL;
pub use culture::CULTURE;

// --- Categories --------------------------------------------------------------

/// The three fixed groupings. Declaration order is the order bound to the
/// number keys 1/2/3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CategoryKey {
    #[default]
    Chill,
    Adventurous,
    Culture,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 3] = [
        CategoryKey::Chill,
        CategoryKey::Adventurous,
        CategoryKey::Culture,
    ];

    /// Position in declaration order (0-based).
    pub fn index(self) -> usize {
        match self {
            CategoryKey::Chill => 0,
            CategoryKey::Adventurous => 1,
            CategoryKey::Culture => 2,
        }
    }

    /// Value of the `data-mode` attribute on the matching category pill.
    pub fn mode(self) -> &'static str {
        match self {
            CategoryKey::Chill => "chill",
            CategoryKey::Adventurous => "adventurous",
            CategoryKey::Culture => "culture",
        }
    }

    pub fn from_mode(mode: &str) -> Option<CategoryKey> {
        Self::ALL.into_iter().find(|c| c.mode() == mode)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mode())
    }
}

// --- Records -----------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Energy {
    Low,
    Medium,
    High,
}

impl Energy {
    pub fn label(self) -> &'static str {
        match self {
            Energy::Low => "Low",
            Energy::Medium => "Medium",
            Energy::High => "High",
        }
    }
}

/// One curated suggestion. Immutable; lives in the static catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuggestionRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str, // display label, e.g. "45 min"
    pub energy: Energy,
    pub map_link: Option<&'static str>,
}

/// Stable identity of a record: its category and position in that list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SuggestionId {
    pub category: CategoryKey,
    pub index: usize,
}

impl SuggestionId {
    pub fn new(category: CategoryKey, index: usize) -> Self {
        Self { category, index }
    }
}

// --- Catalog -----------------------------------------------------------------

/// Mapping from category to its ordered list of records. Slots are optional so
/// that a misassembled catalog can be detected by [`Catalog::validate`].
#[derive(Clone, Debug)]
pub struct Catalog {
    lists: [Option<&'static [SuggestionRecord]>; 3],
}

impl Catalog {
    pub fn empty() -> Self {
        Self { lists: [None; 3] }
    }

    pub fn with_list(
        mut self,
        category: CategoryKey,
        records: &'static [SuggestionRecord],
    ) -> Self {
        self.lists[category.index()] = Some(records);
        self
    }

    /// The built-in London catalog, assembled once.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            Catalog::empty()
                .with_list(CategoryKey::Chill, &CHILL)
                .with_list(CategoryKey::Adventurous, &ADVENTUROUS)
                .with_list(CategoryKey::Culture, &CULTURE)
        })
    }

    /// Records for `category`. Missing and empty lists are both configuration
    /// defects.
    pub fn list(
        &self,
        category: CategoryKey,
    ) -> Result<&'static [SuggestionRecord], ConfigurationError> {
        match self.lists[category.index()] {
            None => Err(ConfigurationError::MissingCategory(category)),
            Some([]) => Err(ConfigurationError::EmptyCategory(category)),
            Some(records) => Ok(records),
        }
    }

    pub fn get(&self, id: SuggestionId) -> Option<&'static SuggestionRecord> {
        self.lists[id.category.index()].and_then(|records| records.get(id.index))
    }

    /// Startup check: every category has a non-empty list.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for category in CategoryKey::ALL {
            self.list(category)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        assert!(Catalog::builtin().validate().is_ok());
    }

    #[test]
    fn missing_and_empty_lists_are_rejected() {
        let catalog = Catalog::empty()
            .with_list(CategoryKey::Chill, &CHILL)
            .with_list(CategoryKey::Adventurous, &[]);
        assert_eq!(
            catalog.list(CategoryKey::Adventurous),
            Err(ConfigurationError::EmptyCategory(CategoryKey::Adventurous))
        );
        assert_eq!(
            catalog.validate(),
            Err(ConfigurationError::EmptyCategory(CategoryKey::Adventurous))
        );
        assert_eq!(
            catalog.list(CategoryKey::Culture),
            Err(ConfigurationError::MissingCategory(CategoryKey::Culture))
        );
    }

    #[test]
    fn mode_round_trips_through_from_mode() {
        for c in CategoryKey::ALL {
            assert_eq!(CategoryKey::from_mode(c.mode()), Some(c));
        }
        assert_eq!(CategoryKey::from_mode("nightlife"), None);
    }

    #[test]
    fn get_resolves_ids_by_position() {
        let catalog = Catalog::builtin();
        let id = SuggestionId::new(CategoryKey::Culture, 0);
        assert_eq!(catalog.get(id).map(|r| r.title), Some(CULTURE[0].title));
        assert!(catalog.get(SuggestionId::new(CategoryKey::Culture, 999)).is_none());
    }
}
