use serde::Serialize;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that generates meaningful commit messages \
based on a list of changes. The commit message should include a title summarizing the changes \
and bullets '-' for the detailed changes. Each change should be on a new line in an imperative \
style. Please ensure that no line exceeds 80 characters in length.";

const CHANGES_PREFIX: &str = "Write a git commit message for the following changes: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    messages: Vec<Message>,
}

impl Prompt {
    pub fn assemble(changes: &str, instruction: Option<&str>) -> Self {
        let mut messages = vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(format!("{CHANGES_PREFIX}{changes}")),
        ];

        if let Some(instruction) = instruction.filter(|text| !text.is_empty()) {
            messages.push(Message::user(instruction));
        }

        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_messages_without_instruction() {
        let prompt = Prompt::assemble("added null check to parser", None);
        let messages = prompt.messages();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(
            messages[1].content,
            "Write a git commit message for the following changes: added null check to parser"
        );
    }

    #[test]
    fn instruction_becomes_third_user_message() {
        let prompt = Prompt::assemble("bump deps", Some("Mention the security fix"));
        let messages = prompt.messages();

        assert_eq!(messages.len(), 3);
        assert_eq!(
            messages.iter().map(|m| m.role).collect::<Vec<_>>(),
            vec![Role::System, Role::User, Role::User]
        );
        assert_eq!(messages[2].content, "Mention the security fix");
    }

    #[test]
    fn empty_instruction_is_ignored() {
        let prompt = Prompt::assemble("bump deps", Some(""));
        assert_eq!(prompt.messages().len(), 2);
    }

    #[test]
    fn system_prompt_carries_format_guidance() {
        assert!(SYSTEM_PROMPT.contains("imperative"));
        assert!(SYSTEM_PROMPT.contains("80 characters"));
        assert!(SYSTEM_PROMPT.contains("bullets '-'"));
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(Message::system("hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "system", "content": "hi" }));
    }
}
