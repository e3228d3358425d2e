use serde::Serialize;

use crate::core::{Symbol, YfError};
use crate::fundamentals::FinancialStatements;
use crate::metrics::MetricsBundle;
use crate::profile::CompanyInfo;

/// Everything emitted for a successfully resolved symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialReport {
    pub symbol: Symbol,
    pub company_info: CompanyInfo,
    pub financial_statements: FinancialStatements,
    pub metrics: MetricsBundle,
}

/// The single JSON document written per invocation.
///
/// Serializes as `{"status": "success", ...report fields}` or
/// `{"status": "error", "error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResultEnvelope {
    Success(Box<FinancialReport>),
    Error { error: String },
}

impl ResultEnvelope {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Process exit status for this envelope: 0 on success, 1 on error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }

    /// Compact JSON text of the envelope.
    ///
    /// Serialization of these types cannot fail in practice; if it ever does, an
    /// error envelope describing the failure is returned instead so the output
    /// is always one complete document.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            let fallback = Self::error(format!("failed to serialize result: {e}"));
            serde_json::to_string(&fallback)
                .unwrap_or_else(|_| r#"{"status":"error","error":"serialization failed"}"#.into())
        })
    }
}

impl From<Result<FinancialReport, YfError>> for ResultEnvelope {
    fn from(res: Result<FinancialReport, YfError>) -> Self {
        match res {
            Ok(report) => Self::Success(Box::new(report)),
            Err(e) => Self::error(e.to_string()),
        }
    }
}
