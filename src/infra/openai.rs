use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::commit::CommitMessage;
use crate::domain::prompt::{Message, Prompt};
use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url,
            model,
        }
    }

    fn completions_endpoint(base_url: &str) -> String {
        format!("{}/chat/completions", base_url.trim_end_matches('/'))
    }

    fn error_detail(body: &str) -> String {
        serde_json::from_str::<ApiErrorResponse>(body)
            .map(|payload| payload.error.message)
            .unwrap_or_else(|_| body.trim().to_string())
    }
}

#[async_trait]
impl LanguageModelService for OpenAiClient {
    async fn complete(&self, prompt: &Prompt) -> AppResult<CommitMessage> {
        let endpoint = Self::completions_endpoint(&self.base_url);
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: prompt.messages(),
        };

        info!(model = %self.model, messages = prompt.messages().len(), "requesting completion");
        debug!(%endpoint, "sending chat completion request");

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|err| {
                AppError::LanguageModel(format!("failed to call chat completion API: {err}"))
            })?;

        let status = response.status();
        debug!(%status, "chat completion API responded");
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::LanguageModel(format!(
                "chat completion API responded with {status}: {}",
                Self::error_detail(&body)
            )));
        }

        let payload: ChatCompletionResponse = response.json().await.map_err(|err| {
            AppError::LanguageModel(format!("failed to parse chat completion response: {err}"))
        })?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::LanguageModel("response contained no choices".to_string()))?
            .message
            .content
            .ok_or_else(|| {
                AppError::LanguageModel("first choice carried no message content".to_string())
            })?;

        Ok(CommitMessage(content))
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}
