pub mod source_kind;
pub mod standard_transaction_source;
pub mod transaction_source;
