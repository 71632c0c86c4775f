use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::{is_filled, single_error};

pub const TITLE_AND_HTML_REQUIRED: &str = "Title and HTML are required";
pub const PAGE_ID_AND_HTML_REQUIRED: &str = "Page ID and HTML are required";
pub const INVALID_PAGE_ID: &str = "Page ID may only contain letters, digits, '-' and '_'";

#[derive(Debug, Deserialize, ToSchema)]
pub struct PageExportRequest {
    #[schema(example = "Landing")]
    pub title: Option<String>,
    /// Page route inside the page builder. Generated when absent or `/`.
    #[schema(example = "/landing")]
    pub path: Option<String>,
    pub html: Option<String>,
    pub css: Option<String>,
    pub js: Option<String>,
}

impl Validate for PageExportRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        if is_filled(&self.title) && is_filled(&self.html) {
            Ok(())
        } else {
            Err(single_error("title", "required", TITLE_AND_HTML_REQUIRED))
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveWebsiteRequest {
    #[schema(example = "home-1")]
    pub page_id: Option<String>,
    pub html: Option<String>,
    pub css: Option<String>,
    pub js: Option<String>,
}

/// Page ids become directory names, so only a conservative character set is allowed.
fn is_safe_page_id(id: &str) -> bool {
    id.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl Validate for SaveWebsiteRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        if !(is_filled(&self.page_id) && is_filled(&self.html)) {
            return Err(single_error("pageId", "required", PAGE_ID_AND_HTML_REQUIRED));
        }
        match self.page_id.as_deref() {
            Some(id) if is_safe_page_id(id) => Ok(()),
            _ => Err(single_error("pageId", "charset", INVALID_PAGE_ID)),
        }
    }
}

/// Shared response shape of both export endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExportResponse {
    pub success: bool,
    pub message: String,
    pub path: String,
}
