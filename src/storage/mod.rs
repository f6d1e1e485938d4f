pub mod backend;
pub mod ledger;
pub mod registry;
pub mod table;

pub use backend::CatalogBackend;
pub use ledger::{IdempotencyLedger, Reservation};
pub use registry::{RegionRegistry, SUPPORTED_REGIONS, SharedBackend};
pub use table::EntityTable;
