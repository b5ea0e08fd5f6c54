//! UI Components
//!
//! Leptos components for the create-point page.

mod create_point;
mod contact_fields;
mod address_select;
mod map_picker;
mod items_grid;

pub use create_point::CreatePoint;
pub use contact_fields::ContactFields;
pub use address_select::AddressSelect;
pub use map_picker::MapPicker;
pub use items_grid::ItemsGrid;
