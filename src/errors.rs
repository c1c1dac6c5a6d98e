//! Unified application error type.
//! All modules (core, store, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Store-related
    // ---------------------------
    #[error("Attendance store error: {0}")]
    Store(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Attendance business errors
    // (expected conditions: always returned, never panicked)
    // ---------------------------
    #[error("Already clocked in: an open session exists")]
    AlreadyWorking,

    #[error("Not clocked in: no open session")]
    NotWorking,

    #[error("A break is already in progress")]
    AlreadyOnBreak,

    #[error("No break is in progress")]
    NotOnBreak,

    #[error("Cannot clock out without at least one task line")]
    MissingTasks,

    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Corrections are restricted to reviewer or admin roles")]
    Forbidden,

    #[error("Invalid correction: {0}")]
    Validation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
