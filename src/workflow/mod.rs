pub mod commit_message;
