use lazy_static::lazy_static;
use std::env;
use std::sync::Arc;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub system_prompt: String,
}

lazy_static! {
    pub static ref CONFIG: Arc<Config> = Arc::new(Config {
        api_key: env::var("LLM_API_KEY").unwrap_or_default(),
        endpoint: env::var("LLM_ENDPOINT")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
        system_prompt: env::var("LLM_SYSTEM_PROMPT").unwrap_or_else(|_| {
            "You are a helpful assistant. Provide clear, concise answers.".to_string()
        }),
    });
}
