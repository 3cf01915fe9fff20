use thiserror::Error;

/// Fallos del almacenamiento local. Nunca salen del `ProgressStore`:
/// allí se registran con `log` y se cae a los valores por defecto.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("progress record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("storage rejected the write: {0}")]
    Rejected(String),
}

/// Errores al cargar el catálogo de lecciones.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid lesson catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("lesson catalog has no vocabulary pairs")]
    EmptyPool,
    #[error("duplicate lesson id `{0}`")]
    DuplicateLesson(String),
    #[error("lesson `{0}` has an empty id or title")]
    EmptyLesson(String),
}
