pub mod health;
pub mod master_data;

pub use health::health_check;
pub use master_data::fetch_master_data;
