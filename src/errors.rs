//! Unified application error type.
//! The record store, the core logic and the CLI handlers all return
//! AppError so every failure reaches the user through the same path.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Record validation
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A record already exists for the name '{0}'")]
    DuplicateName(String),

    #[error("No record with id {0}")]
    NotFound(usize),

    #[error("Exit already registered for record id {0}")]
    AlreadyClosed(usize),

    // ---------------------------
    // Data file
    // ---------------------------
    #[error("Data file error: {0}")]
    Persistence(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
