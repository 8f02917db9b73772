//! Derived read-only views over a catalog snapshot.
//!
//! Every function here takes a fresh `list_movies()` result and computes
//! without touching storage - no view has persisted side effects.

use rand::seq::IteratorRandom;

use crate::domain::movie::{Catalog, MovieDetails};

/// Aggregate rating statistics for a non-empty catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingStats {
    pub count: usize,
    pub average: f64,
    pub max_rating: f64,
    pub min_rating: f64,
    /// All titles sharing the maximum rating (ties included).
    pub best: Vec<String>,
    /// All titles sharing the minimum rating (ties included).
    pub worst: Vec<String>,
}

/// Compute min/max/average and tie-inclusive best/worst lists.
///
/// Returns `None` for an empty catalog; the caller reports that as a
/// plain message, not an error.
pub fn stats(catalog: &Catalog) -> Option<RatingStats> {
    if catalog.is_empty() {
        return None;
    }

    let sum: f64 = catalog.values().map(|m| m.rating).sum();
    let max_rating = catalog
        .values()
        .map(|m| m.rating)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_rating = catalog
        .values()
        .map(|m| m.rating)
        .fold(f64::INFINITY, f64::min);

    let best = catalog
        .iter()
        .filter(|(_, m)| m.rating == max_rating)
        .map(|(t, _)| t.clone())
        .collect();
    let worst = catalog
        .iter()
        .filter(|(_, m)| m.rating == min_rating)
        .map(|(t, _)| t.clone())
        .collect();

    Some(RatingStats {
        count: catalog.len(),
        average: sum / catalog.len() as f64,
        max_rating,
        min_rating,
        best,
        worst,
    })
}

/// Pick one entry uniformly at random, or `None` when the catalog is empty.
pub fn random_movie(catalog: &Catalog) -> Option<(&str, &MovieDetails)> {
    catalog
        .iter()
        .choose(&mut rand::rng())
        .map(|(t, m)| (t.as_str(), m))
}

/// Entries ordered by descending rating; ties keep title order for a
/// stable display.
pub fn sorted_by_rating(catalog: &Catalog) -> Vec<(&str, &MovieDetails)> {
    let mut entries: Vec<_> = catalog.iter().map(|(t, m)| (t.as_str(), m)).collect();
    entries.sort_by(|a, b| {
        b.1.rating
            .partial_cmp(&a.1.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    entries
}

/// Case-insensitive substring search over titles.
pub fn search_titles<'a>(catalog: &'a Catalog, query: &str) -> Vec<(&'a str, &'a MovieDetails)> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|(t, _)| t.to_lowercase().contains(&needle))
        .map(|(t, m)| (t.as_str(), m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(year: i32, rating: f64) -> MovieDetails {
        MovieDetails {
            year,
            rating,
            poster: String::new(),
        }
    }

    fn sample() -> Catalog {
        let mut c = Catalog::new();
        c.insert("Alien".into(), details(1979, 8.5));
        c.insert("Dune".into(), details(2021, 8.0));
        c.insert("Gigli".into(), details(2003, 2.5));
        c
    }

    #[test]
    fn stats_on_empty_catalog_is_none() {
        assert!(stats(&Catalog::new()).is_none());
    }

    #[test]
    fn stats_computes_average_and_extremes() {
        let s = stats(&sample()).unwrap();
        assert_eq!(s.count, 3);
        assert!((s.average - 19.0 / 3.0).abs() < 1e-9);
        assert_eq!(s.max_rating, 8.5);
        assert_eq!(s.min_rating, 2.5);
        assert_eq!(s.best, vec!["Alien".to_string()]);
        assert_eq!(s.worst, vec!["Gigli".to_string()]);
    }

    #[test]
    fn stats_includes_all_tied_best_movies() {
        let mut c = sample();
        c.insert("Heat".into(), details(1995, 8.5));
        let s = stats(&c).unwrap();
        assert_eq!(s.best, vec!["Alien".to_string(), "Heat".to_string()]);
    }

    #[test]
    fn sorted_is_descending_with_stable_ties() {
        let mut c = sample();
        c.insert("Heat".into(), details(1995, 8.5));
        let order: Vec<_> = sorted_by_rating(&c).into_iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["Alien", "Heat", "Dune", "Gigli"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let c = sample();
        let hits: Vec<_> = search_titles(&c, "dUn").into_iter().map(|(t, _)| t).collect();
        assert_eq!(hits, vec!["Dune"]);
        assert!(search_titles(&c, "zzz").is_empty());
    }

    #[test]
    fn random_movie_comes_from_the_catalog() {
        let c = sample();
        let (title, _) = random_movie(&c).unwrap();
        assert!(c.contains_key(title));
        assert!(random_movie(&Catalog::new()).is_none());
    }
}
