use anyhow::{anyhow, Result};
use llm_caller::config::CONFIG;
use llm_caller::ApiCaller;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    dotenv::dotenv().ok();

    let prompt = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if prompt.is_empty() {
        return Err(anyhow!("usage: llm-caller <prompt>"));
    }

    let caller = ApiCaller::new(&CONFIG.api_key, &CONFIG.endpoint);
    match caller.call_llm(&CONFIG.system_prompt, &prompt).await {
        Some(completion) => {
            println!("{}", completion);
            Ok(())
        }
        None => Err(anyhow!("no completion returned")),
    }
}
