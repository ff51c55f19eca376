pub mod convert;
pub mod engine;
pub mod naming;
pub mod types;
