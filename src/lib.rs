pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, Settings};
pub use core::{catalog::DeviceCatalog, engine::CatalogEngine};
pub use domain::model::{
    CableDetails, CapabilityDetails, CaseDetails, Category, Connectable, DetailPayload, Device,
};
pub use utils::error::{CatalogError, Result};
