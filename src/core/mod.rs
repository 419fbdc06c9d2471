pub mod catalog;
pub mod engine;
pub mod report;
pub mod session;

pub use crate::core::catalog::DeviceCatalog;
pub use crate::domain::model::{
    CableDetails, CapabilityDetails, CaseDetails, Category, Connectable, DetailPayload, Device,
};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
