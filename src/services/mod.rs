//! Business logic services for the StockFlow backend

pub mod alert;
pub mod catalog;
pub mod inventory;
pub mod product;
pub mod seed;
pub mod supplier;

pub use alert::AlertService;
pub use catalog::CatalogService;
pub use inventory::InventoryService;
pub use product::ProductService;
pub use seed::SeedService;
pub use supplier::SupplierService;
