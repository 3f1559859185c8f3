use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found in environment variables")]
    MissingCredential(&'static str),
    #[error("{} does not exist.", .0.display())]
    DiffNotFound(PathBuf),
    #[error("language model error: {0}")]
    LanguageModel(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
