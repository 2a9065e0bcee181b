pub mod api;
pub mod db;
pub mod paths;

mod serde_utils;
