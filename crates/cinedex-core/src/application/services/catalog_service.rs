//! Catalog Service - main application orchestrator.
//!
//! This service maps each user command to exactly one storage call (plus,
//! for lookup-based adds, one metadata call first). It owns the adapters
//! as an explicit state object - there is no module-level mutable state.
//!
//! Derived read-only views (stats, random, sorted, search) are computed
//! purely from a fresh `list_movies()` snapshot and never write.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{GalleryWriter, MetadataSource, MovieStore},
    },
    domain::{self, Catalog, DomainValidator as validator, Movie, MovieDetails, RatingStats},
    error::{CoreError, CoreResult},
};

/// Main catalog service.
///
/// Orchestrates storage, metadata lookup, and gallery generation behind
/// the driven ports.
pub struct CatalogService {
    store: Box<dyn MovieStore>,
    metadata: Option<Box<dyn MetadataSource>>,
    gallery: Option<Box<dyn GalleryWriter>>,
}

impl CatalogService {
    /// Create a service over a storage backend.
    pub fn new(store: Box<dyn MovieStore>) -> Self {
        Self {
            store,
            metadata: None,
            gallery: None,
        }
    }

    /// Attach a metadata source (enables [`Self::add_by_lookup`]).
    pub fn with_metadata(mut self, metadata: Box<dyn MetadataSource>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Attach a gallery writer (enables [`Self::generate_gallery`]).
    pub fn with_gallery(mut self, gallery: Box<dyn GalleryWriter>) -> Self {
        self.gallery = Some(gallery);
        self
    }

    /// Fresh snapshot of the whole catalog.
    pub fn list(&self) -> CoreResult<Catalog> {
        self.store.list_movies()
    }

    /// Resolve `title` via the metadata source and upsert the result.
    ///
    /// Returns the stored record, or `None` when the source does not know
    /// the title (recoverable; the user may retry with another spelling).
    #[instrument(skip(self))]
    pub fn add_by_lookup(&self, title: &str) -> CoreResult<Option<Movie>> {
        validator::validate_title(title).map_err(CoreError::Domain)?;

        let metadata = self
            .metadata
            .as_deref()
            .ok_or(ApplicationError::AdapterNotConfigured { name: "metadata" })?;

        let Some(movie) = metadata.lookup(title)? else {
            info!(title, "Title unknown to metadata source");
            return Ok(None);
        };

        // The source may report "rating not available" as 0.0; that is
        // still inside the accepted range, so this only guards decode bugs.
        validator::validate_movie(&movie).map_err(CoreError::Domain)?;

        self.store.add_movie(&movie)?;
        info!(title = %movie.title, year = movie.year, "Movie added from lookup");
        Ok(Some(movie))
    }

    /// Upsert a fully specified record without any network lookup.
    #[instrument(skip_all, fields(title = %movie.title))]
    pub fn add_manual(&self, movie: Movie) -> CoreResult<()> {
        validator::validate_movie(&movie).map_err(CoreError::Domain)?;
        self.store.add_movie(&movie)?;
        info!("Movie added");
        Ok(())
    }

    /// Set a new rating on the case-insensitive match for `title`.
    ///
    /// Returns `false` when no record matched; the caller reports that as
    /// "not found", never as a failure.
    #[instrument(skip(self))]
    pub fn update(&self, title: &str, new_rating: f64) -> CoreResult<bool> {
        validator::validate_rating(new_rating).map_err(CoreError::Domain)?;
        let updated = self.store.update_movie(title, new_rating)?;
        if updated {
            info!(title, new_rating, "Rating updated");
        } else {
            warn!(title, "Update target not found");
        }
        Ok(updated)
    }

    /// Delete the case-insensitive match for `title`. Idempotent.
    #[instrument(skip(self))]
    pub fn delete(&self, title: &str) -> CoreResult<bool> {
        let deleted = self.store.delete_movie(title)?;
        if deleted {
            info!(title, "Movie deleted");
        }
        Ok(deleted)
    }

    /// Rating statistics, `None` for an empty catalog.
    pub fn stats(&self) -> CoreResult<Option<RatingStats>> {
        Ok(domain::stats(&self.store.list_movies()?))
    }

    /// One uniformly random entry, `None` for an empty catalog.
    pub fn random(&self) -> CoreResult<Option<(String, MovieDetails)>> {
        let catalog = self.store.list_movies()?;
        Ok(domain::random_movie(&catalog).map(|(t, m)| (t.to_string(), m.clone())))
    }

    /// All entries ordered by descending rating.
    pub fn sorted(&self) -> CoreResult<Vec<(String, MovieDetails)>> {
        let catalog = self.store.list_movies()?;
        Ok(domain::sorted_by_rating(&catalog)
            .into_iter()
            .map(|(t, m)| (t.to_string(), m.clone()))
            .collect())
    }

    /// Case-insensitive substring title search.
    pub fn search(&self, query: &str) -> CoreResult<Vec<(String, MovieDetails)>> {
        let catalog = self.store.list_movies()?;
        Ok(domain::search_titles(&catalog, query)
            .into_iter()
            .map(|(t, m)| (t.to_string(), m.clone()))
            .collect())
    }

    /// Render the HTML gallery from a fresh snapshot.
    #[instrument(skip(self))]
    pub fn generate_gallery(&self, page_title: &str) -> CoreResult<PathBuf> {
        let gallery = self
            .gallery
            .as_deref()
            .ok_or(ApplicationError::AdapterNotConfigured { name: "gallery" })?;

        let catalog = self.store.list_movies()?;
        let path = gallery.write_gallery(page_title, &catalog)?;
        info!(path = %path.display(), "Gallery generated");
        Ok(path)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockGalleryWriter, MockMetadataSource, MockMovieStore};
    use crate::domain::DomainError;

    fn service_with(store: MockMovieStore) -> CatalogService {
        CatalogService::new(Box::new(store))
    }

    #[test]
    fn update_rejects_out_of_range_rating_before_touching_store() {
        let mut store = MockMovieStore::new();
        store.expect_update_movie().never();

        let err = service_with(store).update("Dune", 10.1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Domain(DomainError::RatingOutOfRange { .. })
        ));
    }

    #[test]
    fn update_accepts_boundary_ratings() {
        let mut store = MockMovieStore::new();
        store
            .expect_update_movie()
            .times(2)
            .returning(|_, _| Ok(true));

        let service = service_with(store);
        assert!(service.update("Dune", 0.0).unwrap());
        assert!(service.update("Dune", 10.0).unwrap());
    }

    #[test]
    fn update_reports_missing_title_as_false() {
        let mut store = MockMovieStore::new();
        store.expect_update_movie().returning(|_, _| Ok(false));

        assert!(!service_with(store).update("Ghost", 5.0).unwrap());
    }

    #[test]
    fn add_manual_validates_the_record() {
        let mut store = MockMovieStore::new();
        store.expect_add_movie().never();

        let err = service_with(store)
            .add_manual(Movie::new("", 2021, 8.0, ""))
            .unwrap_err();
        assert!(matches!(err, CoreError::Domain(DomainError::EmptyTitle)));
    }

    #[test]
    fn add_by_lookup_without_source_is_a_configuration_error() {
        let mut store = MockMovieStore::new();
        store.expect_add_movie().never();

        let err = service_with(store).add_by_lookup("Dune").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::AdapterNotConfigured { name: "metadata" })
        ));
    }

    #[test]
    fn add_by_lookup_stores_the_resolved_record() {
        let mut store = MockMovieStore::new();
        store
            .expect_add_movie()
            .withf(|m| m.title == "Dune" && m.year == 2021)
            .times(1)
            .returning(|_| Ok(()));

        let mut metadata = MockMetadataSource::new();
        metadata
            .expect_lookup()
            .returning(|_| Ok(Some(Movie::new("Dune", 2021, 8.0, "url"))));

        let service = service_with(store).with_metadata(Box::new(metadata));
        let added = service.add_by_lookup("dune").unwrap().unwrap();
        assert_eq!(added.title, "Dune");
    }

    #[test]
    fn add_by_lookup_absence_is_not_an_error_and_stores_nothing() {
        let mut store = MockMovieStore::new();
        store.expect_add_movie().never();

        let mut metadata = MockMetadataSource::new();
        metadata.expect_lookup().returning(|_| Ok(None));

        let service = service_with(store).with_metadata(Box::new(metadata));
        assert!(service.add_by_lookup("No Such Film").unwrap().is_none());
    }

    #[test]
    fn views_read_a_fresh_snapshot() {
        let mut store = MockMovieStore::new();
        store.expect_list_movies().times(2).returning(|| {
            let mut c = Catalog::new();
            c.insert(
                "Dune".into(),
                MovieDetails {
                    year: 2021,
                    rating: 8.0,
                    poster: String::new(),
                },
            );
            Ok(c)
        });

        let service = service_with(store);
        assert_eq!(service.stats().unwrap().unwrap().count, 1);
        assert_eq!(service.search("dun").unwrap().len(), 1);
    }

    #[test]
    fn gallery_without_writer_is_a_configuration_error() {
        let store = MockMovieStore::new();
        let err = service_with(store).generate_gallery("My Movies").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::AdapterNotConfigured { name: "gallery" })
        ));
    }

    #[test]
    fn gallery_renders_from_snapshot() {
        let mut store = MockMovieStore::new();
        store.expect_list_movies().returning(|| Ok(Catalog::new()));

        let mut gallery = MockGalleryWriter::new();
        gallery
            .expect_write_gallery()
            .withf(|title, _| title == "My Movies")
            .returning(|_, _| Ok(PathBuf::from("index.html")));

        let service = service_with(store).with_gallery(Box::new(gallery));
        assert_eq!(
            service.generate_gallery("My Movies").unwrap(),
            PathBuf::from("index.html")
        );
    }
}
