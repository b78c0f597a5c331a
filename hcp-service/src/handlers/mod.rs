pub mod collections;
pub mod health;

pub use collections::{api_test, fetch_hcp_data, fetch_referal_data};
pub use health::health_check;
