//! CSV-backed movie store.
//!
//! File format: header row `title,rating,year,poster`, one data row per
//! movie, standard quoting for embedded commas (handled by the `csv`
//! crate). Note the field order in the file differs from the JSON
//! document's `year, rating, poster` - cosmetic only, both parse into the
//! same record.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use cinedex_core::{
    application::{ApplicationError, ports::MovieStore},
    domain::{Catalog, Movie, MovieDetails, movie::find_key_ignore_case},
    error::{CoreError, CoreResult},
};

use super::map_io_error;

/// Field order here is the on-disk column order.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    title: String,
    rating: f64,
    year: i32,
    poster: String,
}

/// Movie store over a delimited flat file.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Open a store at `path`, creating the file with only the header row
    /// if it does not exist. An un-writable path is a hard error - the
    /// one failure that aborts startup.
    pub fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "Creating CSV store");
            let mut writer =
                csv::Writer::from_path(&path).map_err(|e| map_csv_error(&path, e))?;
            writer
                .write_record(["title", "rating", "year", "poster"])
                .map_err(|e| map_csv_error(&path, e))?;
            writer
                .flush()
                .map_err(|e| map_io_error(&path, e, "create store file"))?;
        }
        Ok(Self { path })
    }

    fn load(&self) -> CoreResult<Catalog> {
        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|e| map_csv_error(&self.path, e))?;

        let mut catalog = Catalog::new();
        for row in reader.deserialize::<CsvRow>() {
            let row = row.map_err(|e| map_csv_error(&self.path, e))?;
            catalog.insert(
                row.title,
                MovieDetails {
                    year: row.year,
                    rating: row.rating,
                    poster: row.poster,
                },
            );
        }
        Ok(catalog)
    }

    /// Rewrite the whole file: header plus one row per entry. The header
    /// is written explicitly so it survives even when the last row is
    /// deleted (serde-driven headers only appear with at least one row).
    fn save(&self, catalog: &Catalog) -> CoreResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| map_csv_error(&self.path, e))?;
        writer
            .write_record(["title", "rating", "year", "poster"])
            .map_err(|e| map_csv_error(&self.path, e))?;
        for (title, details) in catalog {
            writer
                .serialize(CsvRow {
                    title: title.clone(),
                    rating: details.rating,
                    year: details.year,
                    poster: details.poster.clone(),
                })
                .map_err(|e| map_csv_error(&self.path, e))?;
        }
        writer
            .flush()
            .map_err(|e| map_io_error(&self.path, e, "write store file"))
    }
}

impl MovieStore for CsvStore {
    fn list_movies(&self) -> CoreResult<Catalog> {
        self.load()
    }

    fn add_movie(&self, movie: &Movie) -> CoreResult<()> {
        // Upsert via read-modify-write, same as delete/update. A blind
        // append could leave two rows for one title.
        let mut catalog = self.load()?;
        let (title, details) = movie.clone().into_entry();
        catalog.insert(title, details);
        self.save(&catalog)
    }

    fn delete_movie(&self, title: &str) -> CoreResult<bool> {
        let mut catalog = self.load()?;
        let Some(key) = find_key_ignore_case(&catalog, title).map(String::from) else {
            return Ok(false);
        };
        catalog.remove(&key);
        self.save(&catalog)?;
        Ok(true)
    }

    fn update_movie(&self, title: &str, new_rating: f64) -> CoreResult<bool> {
        let mut catalog = self.load()?;
        let Some(key) = find_key_ignore_case(&catalog, title).map(String::from) else {
            return Ok(false);
        };
        if let Some(details) = catalog.get_mut(&key) {
            details.rating = new_rating;
        }
        self.save(&catalog)?;
        Ok(true)
    }
}

/// The csv crate wraps both I/O and deserialization failures; a malformed
/// numeric field must surface as a parse error for the whole operation.
fn map_csv_error(path: &Path, e: csv::Error) -> CoreError {
    if e.is_io_error() {
        ApplicationError::StorageIo {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    } else {
        ApplicationError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> CsvStore {
        CsvStore::open(dir.path().join("movies.csv")).unwrap()
    }

    #[test]
    fn fresh_store_creates_header_and_lists_empty() {
        let dir = TempDir::new().unwrap();
        let s = store(&dir);

        assert!(s.list_movies().unwrap().is_empty());
        let raw = fs::read_to_string(dir.path().join("movies.csv")).unwrap();
        assert_eq!(raw.trim(), "title,rating,year,poster");
    }

    #[test]
    fn add_then_list_round_trips_all_fields() {
        let dir = TempDir::new().unwrap();
        let s = store(&dir);
        s.add_movie(&Movie::new("Dune", 2021, 8.0, "http://p/dune.jpg"))
            .unwrap();

        let catalog = s.list_movies().unwrap();
        let details = &catalog["Dune"];
        assert_eq!(details.year, 2021);
        assert_eq!(details.rating, 8.0);
        assert_eq!(details.poster, "http://p/dune.jpg");
    }

    #[test]
    fn titles_with_commas_survive_quoting() {
        let dir = TempDir::new().unwrap();
        let s = store(&dir);
        s.add_movie(&Movie::new("The Good, the Bad and the Ugly", 1966, 8.8, ""))
            .unwrap();

        let catalog = s.list_movies().unwrap();
        assert!(catalog.contains_key("The Good, the Bad and the Ugly"));
    }

    #[test]
    fn duplicate_add_upserts_one_row_in_the_file() {
        let dir = TempDir::new().unwrap();
        let s = store(&dir);
        s.add_movie(&Movie::new("Dune", 2021, 8.0, "url1")).unwrap();
        s.add_movie(&Movie::new("Dune", 2022, 9.0, "url2")).unwrap();

        let raw = fs::read_to_string(dir.path().join("movies.csv")).unwrap();
        assert_eq!(raw.lines().filter(|l| l.starts_with("Dune")).count(), 1);

        let details = &s.list_movies().unwrap()["Dune"];
        assert_eq!((details.year, details.rating), (2022, 9.0));
        assert_eq!(details.poster, "url2");
    }

    #[test]
    fn delete_is_case_insensitive_and_idempotent() {
        let dir = TempDir::new().unwrap();
        let s = store(&dir);
        s.add_movie(&Movie::new("Inception", 2010, 8.8, "")).unwrap();

        assert!(s.delete_movie("inception").unwrap());
        assert!(s.list_movies().unwrap().is_empty());
        // Second delete: no error, store unchanged.
        assert!(!s.delete_movie("inception").unwrap());
        assert!(s.list_movies().unwrap().is_empty());
    }

    #[test]
    fn update_changes_only_the_rating() {
        let dir = TempDir::new().unwrap();
        let s = store(&dir);
        s.add_movie(&Movie::new("Dune", 2021, 8.0, "url1")).unwrap();

        assert!(s.update_movie("DUNE", 9.5).unwrap());
        let details = &s.list_movies().unwrap()["Dune"];
        assert_eq!(details.rating, 9.5);
        assert_eq!(details.year, 2021);
        assert_eq!(details.poster, "url1");
    }

    #[test]
    fn update_of_missing_title_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let s = store(&dir);
        assert!(!s.update_movie("Ghost", 5.0).unwrap());
    }

    #[test]
    fn malformed_rating_row_fails_list_with_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.csv");
        fs::write(&path, "title,rating,year,poster\nDune,eight,2021,url\n").unwrap();

        let s = CsvStore::open(&path).unwrap();
        let err = s.list_movies().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::Parse { .. })
        ));
    }

    #[test]
    fn existing_file_is_not_truncated_on_open() {
        let dir = TempDir::new().unwrap();
        {
            let s = store(&dir);
            s.add_movie(&Movie::new("Alien", 1979, 8.5, "")).unwrap();
        }
        let reopened = store(&dir);
        assert_eq!(reopened.list_movies().unwrap().len(), 1);
    }
}
