//! Anti-repeat selection.
//!
//! `pick` excludes the recent picks from the category list and draws uniformly
//! from what is left. When nothing is left (history covers the whole list) it
//! draws from the full list and reports that history must be reset. The
//! function itself never touches history; the caller applies the reset and
//! records the new pick.
use rand::Rng;

use crate::catalog::{Catalog, CategoryKey, SuggestionId};
use crate::error::ConfigurationError;
use crate::history::RecentPicks;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub id: SuggestionId,
    /// True when every candidate was excluded and the draw fell back to the
    /// full list. The caller must clear history before recording `id`.
    pub history_reset: bool,
}

pub fn pick<R: Rng + ?Sized>(
    catalog: &Catalog,
    category: CategoryKey,
    recent: &RecentPicks,
    rng: &mut R,
) -> Result<Selection, ConfigurationError> {
    let records = catalog.list(category)?;

    let available: Vec<usize> = (0..records.len())
        .filter(|&i| !recent.contains(&SuggestionId::new(category, i)))
        .collect();

    if available.is_empty() {
        let index = rng.gen_range(0..records.len());
        return Ok(Selection {
            id: SuggestionId::new(category, index),
            history_reset: true,
        });
    }

    let index = available[rng.gen_range(0..available.len())];
    Ok(Selection {
        id: SuggestionId::new(category, index),
        history_reset: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CHILL, SuggestionRecord};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn short_catalog(records: &'static [SuggestionRecord]) -> Catalog {
        Catalog::empty()
            .with_list(CategoryKey::Chill, records)
            .with_list(CategoryKey::Adventurous, records)
            .with_list(CategoryKey::Culture, records)
    }

    // Mirrors the controller's bookkeeping so the properties hold over a run.
    fn record(recent: &mut RecentPicks, selection: Selection) {
        if selection.history_reset {
            recent.clear();
        }
        recent.push(selection.id);
    }

    #[test]
    fn never_repeats_recent_picks_in_long_lists() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let mut recent = RecentPicks::default();
        for _ in 0..2_000 {
            let before: Vec<SuggestionId> = recent.iter().copied().collect();
            let sel = pick(catalog, CategoryKey::Chill, &recent, &mut rng).unwrap();
            assert!(!sel.history_reset);
            assert!(!before.contains(&sel.id), "repeat of {:?} within {:?}", sel.id, before);
            record(&mut recent, sel);
        }
    }

    #[test]
    fn covered_short_list_falls_back_to_full_list() {
        let catalog = short_catalog(&CHILL[..2]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut recent = RecentPicks::default();
        recent.push(SuggestionId::new(CategoryKey::Chill, 0));
        recent.push(SuggestionId::new(CategoryKey::Chill, 1));

        let sel = pick(&catalog, CategoryKey::Chill, &recent, &mut rng).unwrap();
        assert!(sel.history_reset);
        assert!(sel.id.index < 2);
    }

    #[test]
    fn short_list_resets_whenever_history_covers_it() {
        let catalog = short_catalog(&CHILL[..3]);
        let mut rng = StdRng::seed_from_u64(99);
        let mut recent = RecentPicks::default();
        let mut resets = 0;
        for _ in 0..300 {
            let covered =
                (0..3).all(|i| recent.contains(&SuggestionId::new(CategoryKey::Chill, i)));
            let sel = pick(&catalog, CategoryKey::Chill, &recent, &mut rng).unwrap();
            assert_eq!(sel.history_reset, covered);
            if sel.history_reset {
                resets += 1;
            }
            record(&mut recent, sel);
        }
        assert!(resets > 0);
    }

    #[test]
    fn single_record_list_always_resets_after_first_pick() {
        let catalog = short_catalog(&CHILL[..1]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut recent = RecentPicks::default();
        let first = pick(&catalog, CategoryKey::Chill, &recent, &mut rng).unwrap();
        assert!(!first.history_reset);
        record(&mut recent, first);
        for _ in 0..5 {
            let sel = pick(&catalog, CategoryKey::Chill, &recent, &mut rng).unwrap();
            assert!(sel.history_reset);
            assert_eq!(sel.id.index, 0);
            record(&mut recent, sel);
        }
    }

    #[test]
    fn foreign_history_does_not_filter_other_categories() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        let mut recent = RecentPicks::default();
        for i in 0..3 {
            recent.push(SuggestionId::new(CategoryKey::Chill, i));
        }
        let sel = pick(catalog, CategoryKey::Culture, &recent, &mut rng).unwrap();
        assert_eq!(sel.id.category, CategoryKey::Culture);
        assert!(!sel.history_reset);
    }

    #[test]
    fn empty_list_is_a_configuration_error() {
        let catalog = Catalog::empty().with_list(CategoryKey::Chill, &[]);
        let mut rng = StdRng::seed_from_u64(0);
        let err =
            pick(&catalog, CategoryKey::Chill, &RecentPicks::default(), &mut rng).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyCategory(CategoryKey::Chill));
    }
}
