pub mod registry;
pub mod ui;

pub use registry::{DocumentRegistry, RegistryError};
