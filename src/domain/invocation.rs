#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub changes: String,
    pub instruction: Option<String>,
}

impl Invocation {
    pub fn new(changes: impl Into<String>, instruction: Option<String>) -> Self {
        Self {
            changes: changes.into(),
            instruction: instruction.filter(|text| !text.is_empty()),
        }
    }
}
