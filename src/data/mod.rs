//! Data module - CSV loading into raw salary records

mod loader;

pub use loader::{LoaderError, RawRecord, SalaryLoader};
