//! Placeholder website generator.
//!
//! No model is consulted: the page is a fixed template with the prompt dropped
//! into one paragraph, and the stylesheet and script never change.

use askama::Template;

pub const GENERATED_CSS: &str = r#"
/* Generated CSS styles */
.container {
    max-width: 1200px;
}

.bg-gray-100 {
    background-color: #f3f4f6;
}

.text-blue-600 {
    color: #2563eb;
}
"#;

pub const GENERATED_JS: &str = r#"
// Generated JavaScript code
console.log('Generated website loaded successfully!');
"#;

#[derive(Template)]
#[template(path = "generated_site.html")]
struct GeneratedSiteTemplate<'a> {
    prompt: &'a str,
    escape_prompt: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    pub html: String,
    pub css: String,
    pub js: String,
}

/// Render the placeholder site for `prompt`.
///
/// Unless `escape_prompt` is set the prompt is inserted without HTML escaping,
/// so markup in the prompt becomes markup in the page.
pub fn generate_site(prompt: &str, escape_prompt: bool) -> Result<GeneratedSite, askama::Error> {
    let html = GeneratedSiteTemplate {
        prompt,
        escape_prompt,
    }
    .render()?;

    Ok(GeneratedSite {
        html,
        css: GENERATED_CSS.to_string(),
        js: GENERATED_JS.to_string(),
    })
}
