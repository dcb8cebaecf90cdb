use crate::models::chat::{ChatMessage, ChatRole};
use crate::services::gemini_service::{Content, GeminiService, Part};
use crate::services::prompt_service;

/// Canned reply when the model call fails; chat degrades, it never errors.
pub const CHAT_FALLBACK_REPLY: &str = "Sorry, I couldn't get a response. Please try again.";

#[derive(Clone)]
pub struct ChatService {
    gemini: GeminiService,
}

impl ChatService {
    pub fn new(gemini: GeminiService) -> Self {
        Self { gemini }
    }

    /// One conversational turn with the destination guide. The system
    /// instruction is keyed to the destination when one is set; prior turns
    /// are replayed role-tagged so the model keeps context.
    pub async fn send(
        &self,
        destination: Option<&str>,
        history: &[ChatMessage],
        message: &str,
    ) -> String {
        let system_instruction = prompt_service::chat_system_instruction(destination);

        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content {
                role: Some(
                    match turn.role {
                        ChatRole::User => "user",
                        ChatRole::Model => "model",
                    }
                    .to_string(),
                ),
                parts: vec![Part {
                    text: turn.text.clone(),
                }],
            })
            .collect();

        contents.push(Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: message.to_string(),
            }],
        });

        match self.gemini.generate_text(system_instruction, contents).await {
            Ok(reply) => reply,
            Err(e) => {
                eprintln!("Chat error: {}", e);
                CHAT_FALLBACK_REPLY.to_string()
            }
        }
    }
}
