pub mod db_utils;
pub mod models;
pub mod store;
