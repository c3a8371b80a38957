pub mod notification_service;
pub mod property_service;
pub mod stats_service;
pub mod sync_service;
