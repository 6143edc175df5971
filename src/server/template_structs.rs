//! Askama template structs for the development host.

use askama::Template;

/// Title shown on the index page.
pub const PAGE_TITLE: &str = "coinfall";

/// Index page: the coin container plus the browser build bootstrap.
#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <link rel="stylesheet" href="/static/coins.css">
</head>
<body>
    <div class="coin-background"></div>
    <main>
        <h1>{{ title }}</h1>
    </main>
    <script type="module">
        import init from "{{ script_path|safe }}";
        init();
    </script>
</body>
</html>
"#
)]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub script_path: &'a str,
}

/// Render the index page.
pub fn index_page(title: &str) -> Result<String, askama::Error> {
    IndexTemplate {
        title,
        script_path: "/pkg/coinfall.js",
    }
    .render()
}
