pub mod config;
pub mod llm;

pub use llm::ApiCaller;
