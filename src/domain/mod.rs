// Domain layer - Dashboard composition model
pub mod dashboard;
pub mod icon;
pub mod insight;
pub mod metric;
pub mod news;
pub mod section;
