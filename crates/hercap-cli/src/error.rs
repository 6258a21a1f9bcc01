use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] hercap_core::ValidationError),

    #[error("dataset failed to load: {0}")]
    Dataset(#[from] hercap_core::MalformedRecordError),

    #[error("export failed: {0}")]
    Export(#[from] hercap_core::ExportError),

    #[error("strict mode failed: warnings={warning_count}")]
    StrictModeViolation { warning_count: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Dataset(_) => 3,
            Self::Serialization(_) => 4,
            Self::StrictModeViolation { .. } => 5,
            Self::Export(_) | Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_categories_to_exit_codes() {
        let validation = CliError::from(hercap_core::ValidationError::EmptyName);
        assert_eq!(validation.exit_code(), 2);

        let strict = CliError::StrictModeViolation { warning_count: 1 };
        assert_eq!(strict.exit_code(), 5);
    }
}
