//! Built-in gallery assets.
//!
//! Used when the user does not point the gallery command at their own
//! `_static/` template and stylesheet. Compiled into the binary, so the
//! default gallery works from any directory.

/// Default page template. The two substitution tokens are the whole
/// contract: one for the page title, one for the repeated item list.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
    <title>__TEMPLATE_TITLE__</title>
    <link rel="stylesheet" href="style.css"/>
</head>
<body>
<div class="list-movies-title">
    <h1>__TEMPLATE_TITLE__</h1>
</div>
<div>
    <ol class="movie-grid">__TEMPLATE_MOVIE_GRID__
    </ol>
</div>
</body>
</html>
"#;

/// Default stylesheet written next to the generated page.
pub const DEFAULT_STYLESHEET: &str = r#"body {
    background-color: #f4f1ea;
    font-family: Georgia, 'Times New Roman', serif;
    margin: 0;
}

.list-movies-title {
    background-color: #1f2937;
    color: #f9fafb;
    text-align: center;
    padding: 16px 0;
}

.movie-grid {
    display: flex;
    flex-wrap: wrap;
    gap: 24px;
    justify-content: center;
    list-style: none;
    padding: 24px;
}

.movie-item {
    width: 180px;
    text-align: center;
}

.movie-poster-img {
    width: 160px;
    height: 240px;
    object-fit: cover;
    border-radius: 4px;
    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.3);
}

.movie-title {
    font-weight: bold;
    margin-top: 8px;
}

.movie-year,
.movie-rating {
    color: #4b5563;
    font-size: 0.9em;
}
"#;
