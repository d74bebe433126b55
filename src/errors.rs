use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to list functions in {region}: {message}")]
    Registry { region: String, message: String },

    #[error("Failed to fetch metrics for {function_name}: {message}")]
    Metrics {
        function_name: String,
        message: String,
    },

    #[error("{0}")]
    Usage(String),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl ReportError {
    pub fn registry(region: &str, message: impl Into<String>) -> Self {
        ReportError::Registry {
            region: region.to_string(),
            message: message.into(),
        }
    }

    pub fn metrics(function_name: &str, message: impl Into<String>) -> Self {
        ReportError::Metrics {
            function_name: function_name.to_string(),
            message: message.into(),
        }
    }

    /// The underlying collaborator message, without the variant prefix.
    ///
    /// Operator diagnostics print this after their own lead-in.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            ReportError::Registry { message, .. } | ReportError::Metrics { message, .. } => {
                message.clone()
            }
            ReportError::Usage(msg) => msg.clone(),
            ReportError::Output(e) => e.to_string(),
        }
    }
}
