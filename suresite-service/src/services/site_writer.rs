use askama::Template;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteWriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

/// A page to materialise as a static site.
#[derive(Debug, Clone)]
pub struct SitePage {
    pub page_id: String,
    pub html: String,
    pub css: String,
    pub js: String,
}

#[derive(Template)]
#[template(path = "saved_site.html", escape = "none")]
struct SavedSiteTemplate<'a> {
    page_id: &'a str,
    html: &'a str,
    css: &'a str,
    js: &'a str,
}

/// Writes pages under `<root>/page-<id>/`.
#[derive(Debug, Clone)]
pub struct SiteWriter {
    root: PathBuf,
}

impl SiteWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write `index.html`, plus `styles.css` / `script.js` when non-empty.
    /// Returns the page directory.
    pub async fn save(&self, page: &SitePage) -> Result<PathBuf, SiteWriteError> {
        let page_dir = self.root.join(format!("page-{}", page.page_id));
        tokio::fs::create_dir_all(&page_dir).await?;

        let index = SavedSiteTemplate {
            page_id: &page.page_id,
            html: &page.html,
            css: &page.css,
            js: &page.js,
        }
        .render()?;
        tokio::fs::write(page_dir.join("index.html"), index).await?;

        if !page.css.is_empty() {
            tokio::fs::write(page_dir.join("styles.css"), &page.css).await?;
        }
        if !page.js.is_empty() {
            tokio::fs::write(page_dir.join("script.js"), &page.js).await?;
        }

        tracing::info!(
            page_id = %page.page_id,
            dir = %page_dir.display(),
            "Website saved"
        );

        Ok(page_dir)
    }
}
