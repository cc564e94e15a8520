use thiserror::Error;

/// Failures surfaced by the persistent start-page store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task text cannot be empty")]
    EmptyTaskText,
    #[error("No task with id '{0}'")]
    TaskNotFound(String),
    #[error("Wallpaper '{0}' is neither a file:// URI nor an existing image path")]
    InvalidWallpaper(String),
    #[error("The custom theme needs a wallpaper")]
    WallpaperRequired,
    #[error("Stored value for '{key}' is unreadable: {reason}")]
    Corrupt { key: String, reason: String },
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
