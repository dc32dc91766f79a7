// Application layer - Use cases over dashboard snapshots
pub mod dashboard_service;
pub mod dashboard_source;
pub mod error;
pub mod snapshot_cache;
