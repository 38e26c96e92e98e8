pub mod catalog;
pub mod config;
pub mod db;
pub mod frequency;
pub mod report;
pub mod store;
pub mod weekday;

pub use config::StoreConfig;
pub use store::Store;

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
#[cfg(feature = "uniffi")]
pub mod runtime;
#[cfg(feature = "uniffi")]
pub mod uniffi_interface;
