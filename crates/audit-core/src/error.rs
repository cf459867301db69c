use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("schema mismatch: missing required columns {missing:?} (found headers: {headers:?})")]
    SchemaMismatch {
        missing: Vec<String>,
        headers: Vec<String>,
    },

    #[error("failed to parse report: {0}")]
    ParseFailure(String),

    #[error("narrative service error: {0}")]
    ExternalService(String),

    #[error("export failed: {0}")]
    Export(String),
}

pub type AuditResult<T> = Result<T, AuditError>;
