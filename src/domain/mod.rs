pub mod change;
pub mod commit;
pub mod invocation;
pub mod prompt;
