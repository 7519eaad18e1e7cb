pub mod accessory_repository;
pub mod margin_repository;
pub mod material_repository;

pub use accessory_repository::{AccessoryRepository, MySqlAccessoryRepository};
pub use margin_repository::{MarginConfigRepository, MySqlMarginConfigRepository};
pub use material_repository::{MaterialRepository, MySqlMaterialRepository};
