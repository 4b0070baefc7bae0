pub mod controller;
pub mod render;

pub use controller::{FormController, EXPORT_XML_FILENAME, EXPORT_ZIP_FILENAME};
