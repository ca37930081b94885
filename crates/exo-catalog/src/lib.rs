pub mod catalog;
pub mod config;
pub mod error;
pub mod missions;

pub use catalog::{load_catalog, parse_catalog};
pub use config::{DATA_DIR_ENV, ExoConfig, data_dir};
pub use error::{CatalogError, Result};
pub use missions::{Mission, load_missions, parse_missions};
