// Application layer - Use cases and storage port
pub mod builder_service;
pub mod dashboard_store;
pub mod ids;
pub mod storage;
pub mod widget_catalog;
