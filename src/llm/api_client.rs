use anyhow::{anyhow, Result};
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const MODEL: &str = "gpt-4o";
const DEFAULT_MAX_TOKENS: u32 = 8000;
const DEFAULT_TEMPERATURE: f32 = 0.5;

#[derive(Clone)]
pub struct ApiCaller {
    client: Client,
    api_key: String,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

impl ApiCaller {
    pub fn new(api_key: &str, endpoint: &str) -> Self {
        ApiCaller {
            client: Client::new(),
            api_key: api_key.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub async fn call_llm(&self, system_prompt: &str, user_prompt: &str) -> Option<String> {
        self.call_llm_with(
            system_prompt,
            user_prompt,
            DEFAULT_MAX_TOKENS,
            DEFAULT_TEMPERATURE,
        )
        .await
    }

    pub async fn call_llm_with(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Option<String> {
        match self
            .request_completion(system_prompt, user_prompt, max_tokens, temperature)
            .await
        {
            Ok(text) => Some(text),
            Err(e) => {
                error!("LLM API call failed: {:#}", e);
                None
            }
        }
    }

    async fn request_completion(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String> {
        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            max_tokens,
            temperature,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("response contained no choices"))?;

        Ok(choice.message.content.trim().to_string())
    }
}
