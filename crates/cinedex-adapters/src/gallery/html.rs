//! Static HTML gallery renderer.
//!
//! Plain placeholder substitution: the template carries exactly two
//! tokens, `__TEMPLATE_TITLE__` and `__TEMPLATE_MOVIE_GRID__`. The grid
//! fragment is rebuilt from the catalog on every call; the companion
//! stylesheet is copied next to the generated page.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::instrument;

use cinedex_core::{
    application::{ApplicationError, ports::GalleryWriter},
    domain::Catalog,
    error::{CoreError, CoreResult},
};

use super::builtin;

const TITLE_TOKEN: &str = "__TEMPLATE_TITLE__";
const GRID_TOKEN: &str = "__TEMPLATE_MOVIE_GRID__";

/// Gallery writer emitting `index.html` + `style.css` into an output
/// directory, from either user-supplied assets or the built-in defaults.
pub struct HtmlGallery {
    output_dir: PathBuf,
    template: Option<PathBuf>,
    stylesheet: Option<PathBuf>,
}

impl HtmlGallery {
    /// Gallery with the built-in template and stylesheet.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            template: None,
            stylesheet: None,
        }
    }

    /// Use a custom template file instead of the built-in one.
    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = Some(path.into());
        self
    }

    /// Use a custom stylesheet instead of the built-in one.
    pub fn with_stylesheet(mut self, path: impl Into<PathBuf>) -> Self {
        self.stylesheet = Some(path.into());
        self
    }

    /// A user-supplied asset that is missing is a distinct, reportable
    /// error; the built-in fallback can never be missing.
    fn load_asset(path: &Option<PathBuf>, fallback: &str) -> CoreResult<String> {
        match path {
            Some(p) => fs::read_to_string(p).map_err(|_| {
                CoreError::Application(ApplicationError::GalleryAsset { path: p.clone() })
            }),
            None => Ok(fallback.to_string()),
        }
    }
}

impl GalleryWriter for HtmlGallery {
    #[instrument(skip(self, catalog), fields(movies = catalog.len()))]
    fn write_gallery(&self, title: &str, catalog: &Catalog) -> CoreResult<PathBuf> {
        let template = Self::load_asset(&self.template, builtin::DEFAULT_TEMPLATE)?;
        let stylesheet = Self::load_asset(&self.stylesheet, builtin::DEFAULT_STYLESHEET)?;

        let page = template
            .replace(TITLE_TOKEN, &escape_html(title))
            .replace(GRID_TOKEN, &render_grid(catalog));
        let page = format!(
            "{page}<!-- generated by cinedex on {} -->\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M")
        );

        fs::create_dir_all(&self.output_dir).map_err(|e| gallery_output(e, &self.output_dir))?;

        let index_path = self.output_dir.join("index.html");
        fs::write(&index_path, page).map_err(|e| gallery_output(e, &index_path))?;

        let css_path = self.output_dir.join("style.css");
        fs::write(&css_path, stylesheet).map_err(|e| gallery_output(e, &css_path))?;

        Ok(index_path)
    }
}

fn gallery_output(e: std::io::Error, path: &Path) -> CoreError {
    ApplicationError::GalleryOutput {
        reason: format!("{}: {}", path.display(), e),
    }
    .into()
}

/// One `<li>` per movie, in catalog (title) order.
fn render_grid(catalog: &Catalog) -> String {
    let mut grid = String::new();
    for (title, movie) in catalog {
        let title = escape_html(title);
        grid.push_str(&format!(
            r#"
        <li class="movie-item">
            <div class="movie-poster">
                <img class="movie-poster-img" src="{poster}" alt="{title} Poster"/>
            </div>
            <div class="movie-title">{title}</div>
            <div class="movie-year">{year}</div>
            <div class="movie-rating">Rating: {rating}/10</div>
        </li>"#,
            poster = escape_html(&movie.poster),
            title = title,
            year = movie.year,
            rating = movie.rating,
        ));
    }
    grid
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use cinedex_core::domain::MovieDetails;
    use tempfile::TempDir;

    fn catalog() -> Catalog {
        let mut c = Catalog::new();
        c.insert(
            "Dune".into(),
            MovieDetails {
                year: 2021,
                rating: 8.0,
                poster: "http://p/dune.jpg".into(),
            },
        );
        c.insert(
            "Alien".into(),
            MovieDetails {
                year: 1979,
                rating: 8.5,
                poster: String::new(),
            },
        );
        c
    }

    #[test]
    fn writes_index_and_stylesheet_with_substituted_tokens() {
        let dir = TempDir::new().unwrap();
        let gallery = HtmlGallery::new(dir.path());

        let index = gallery.write_gallery("My Movies", &catalog()).unwrap();
        let page = fs::read_to_string(&index).unwrap();

        assert!(page.contains("<title>My Movies</title>"));
        assert!(!page.contains(TITLE_TOKEN));
        assert!(!page.contains(GRID_TOKEN));
        assert_eq!(page.matches("movie-item").count(), 2);
        assert!(page.contains("Rating: 8.5/10"));
        assert!(dir.path().join("style.css").exists());
    }

    #[test]
    fn missing_user_template_is_a_distinct_asset_error() {
        let dir = TempDir::new().unwrap();
        let gallery =
            HtmlGallery::new(dir.path()).with_template(dir.path().join("_static/missing.html"));

        let err = gallery.write_gallery("t", &Catalog::new()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::GalleryAsset { .. })
        ));
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn missing_user_stylesheet_is_a_distinct_asset_error() {
        let dir = TempDir::new().unwrap();
        let gallery =
            HtmlGallery::new(dir.path()).with_stylesheet(dir.path().join("missing.css"));

        let err = gallery.write_gallery("t", &Catalog::new()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::GalleryAsset { .. })
        ));
    }

    #[test]
    fn custom_template_is_used_verbatim() {
        let dir = TempDir::new().unwrap();
        let template_path = dir.path().join("custom.html");
        fs::write(&template_path, "<h1>__TEMPLATE_TITLE__</h1>__TEMPLATE_MOVIE_GRID__").unwrap();

        let gallery = HtmlGallery::new(dir.path()).with_template(&template_path);
        let index = gallery.write_gallery("Custom", &catalog()).unwrap();

        let page = fs::read_to_string(index).unwrap();
        assert!(page.starts_with("<h1>Custom</h1>"));
    }

    #[test]
    fn titles_are_html_escaped() {
        let dir = TempDir::new().unwrap();
        let mut c = Catalog::new();
        c.insert(
            "Fast & Furious".into(),
            MovieDetails {
                year: 2001,
                rating: 6.8,
                poster: String::new(),
            },
        );

        let index = HtmlGallery::new(dir.path()).write_gallery("A & B", &c).unwrap();
        let page = fs::read_to_string(index).unwrap();
        assert!(page.contains("Fast &amp; Furious"));
        assert!(page.contains("<title>A &amp; B</title>"));
    }
}
