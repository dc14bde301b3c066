// Core infrastructure modules
pub mod core;

// Data-access modules
pub mod config;
pub mod db;
pub mod model;
pub mod relations;
pub mod repo;
pub mod reports;
pub mod schema;
pub mod test_utils;
pub mod tx;
