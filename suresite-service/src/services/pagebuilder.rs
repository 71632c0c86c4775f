//! Export of generated pages into the Puck page builder's JSON database.
//!
//! The database is a single JSON object keyed by page route. Every export is a
//! read-modify-write of the whole file, serialized through an async mutex and
//! finished with an atomic rename.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

pub const CUSTOM_HTML_BLOCK: &str = "CustomHtmlBlock";

#[derive(Debug, Error)]
pub enum PageBuilderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid page database: {0}")]
    Json(#[from] serde_json::Error),
}

/// A page as submitted for export.
#[derive(Debug, Clone)]
pub struct PageExport {
    pub title: String,
    pub path: Option<String>,
    pub html: String,
    pub css: String,
    pub js: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PuckPage {
    pub root: PuckRoot,
    pub content: Vec<PuckBlock>,
    pub zones: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PuckRoot {
    pub props: PuckRootProps,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PuckRootProps {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PuckBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub props: HtmlBlockProps,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HtmlBlockProps {
    pub id: String,
    pub html: String,
    pub css: String,
    pub js: String,
}

impl PuckPage {
    fn single_html_block(page: PageExport, stamp: i64) -> Self {
        Self {
            root: PuckRoot {
                props: PuckRootProps { title: page.title },
            },
            content: vec![PuckBlock {
                kind: CUSTOM_HTML_BLOCK.to_string(),
                props: HtmlBlockProps {
                    id: format!("{}-{}", CUSTOM_HTML_BLOCK, stamp),
                    html: page.html,
                    css: page.css,
                    js: page.js,
                },
            }],
            zones: Map::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageBuilderStore {
    db_path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl PageBuilderStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Insert `page` into the database and return the route it was stored under.
    ///
    /// An explicit route replaces whatever page was stored there. Without one the
    /// route is `/page-<unix millis>`, suffixed if that key is already taken.
    pub async fn export(&self, page: PageExport) -> Result<String, PageBuilderError> {
        let _guard = self.lock.lock().await;

        let mut database = self.read_database().await?;
        let stamp = Utc::now().timestamp_millis();

        let route = match page.path.as_deref() {
            Some(path) if !path.is_empty() && path != "/" => path.to_string(),
            _ => unique_route(&database, stamp),
        };

        let document = serde_json::to_value(PuckPage::single_html_block(page, stamp))?;
        database.insert(route.clone(), document);
        self.write_database(&database).await?;

        tracing::info!(
            route = %route,
            db = %self.db_path.display(),
            pages = database.len(),
            "Page exported to pagebuilder"
        );

        Ok(route)
    }

    /// Fetch a stored page by route.
    #[cfg(test)]
    pub async fn get(&self, route: &str) -> Result<Option<PuckPage>, PageBuilderError> {
        let _guard = self.lock.lock().await;
        let database = self.read_database().await?;
        database
            .get(route)
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()
            .map_err(PageBuilderError::from)
    }

    async fn read_database(&self) -> Result<Map<String, Value>, PageBuilderError> {
        match tokio::fs::read(&self.db_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Map::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_database(&self, database: &Map<String, Value>) -> Result<(), PageBuilderError> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let body = serde_json::to_vec_pretty(database)?;
        let tmp_path = self.db_path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, body).await?;
        tokio::fs::rename(&tmp_path, &self.db_path).await?;
        Ok(())
    }
}

fn unique_route(database: &Map<String, Value>, stamp: i64) -> String {
    let base = format!("/page-{}", stamp);
    if !database.contains_key(&base) {
        return base;
    }
    (1..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !database.contains_key(candidate))
        .unwrap_or(base)
}
