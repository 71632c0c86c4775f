pub mod generator;
pub mod metrics;
pub mod pagebuilder;
pub mod site_writer;

pub use generator::{generate_site, GeneratedSite};
pub use metrics::{get_metrics, init_metrics};
pub use pagebuilder::{PageBuilderError, PageBuilderStore, PageExport};
pub use site_writer::{SitePage, SiteWriteError, SiteWriter};
