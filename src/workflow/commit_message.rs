use tracing::debug;

use crate::context::AppContext;
use crate::domain::change::resolve_changes;
use crate::domain::commit::CommitMessage;
use crate::domain::invocation::Invocation;
use crate::domain::prompt::Prompt;
use crate::error::AppResult;

pub async fn generate_commit_message(
    ctx: &AppContext,
    invocation: &Invocation,
) -> AppResult<CommitMessage> {
    let changes = resolve_changes(&invocation.changes)?;
    debug!(
        source = ?changes.source,
        bytes = changes.text.len(),
        model = %ctx.config.model,
        "resolved changes"
    );

    let prompt = Prompt::assemble(&changes.text, invocation.instruction.as_deref());

    ctx.language_model.complete(&prompt).await
}
