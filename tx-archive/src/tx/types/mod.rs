pub mod result;
pub mod tx_data;
