use std::io::Write;

use crate::context::AppContext;
use crate::domain::invocation::Invocation;
use crate::error::AppResult;
use crate::workflow::commit_message::generate_commit_message;

#[derive(Debug, Clone)]
pub struct CommitCommandArgs {
    pub changes: String,
    pub instruction: Option<String>,
}

/// Generates the message and writes it to `out` unchanged.
pub async fn run<W: Write>(
    ctx: &AppContext,
    args: CommitCommandArgs,
    out: &mut W,
) -> AppResult<()> {
    let invocation = Invocation::new(args.changes, args.instruction);
    let message = generate_commit_message(ctx, &invocation).await?;

    writeln!(out, "{}", message.as_str())?;
    out.flush()?;
    Ok(())
}
