//! Services built on top of ports.

mod menu_catalog;

pub use menu_catalog::MenuCatalog;
