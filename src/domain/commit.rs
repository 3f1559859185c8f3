#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(pub String);

impl CommitMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
