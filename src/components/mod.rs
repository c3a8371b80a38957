pub mod design_system;
pub mod filters;
pub mod header;
pub mod property_card;
pub mod property_grid;
pub mod stats_summary;
