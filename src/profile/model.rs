use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::YfError;

/// The raw quoteSummary result for a symbol: module name to module object.
///
/// Fields are addressed as `module.field`, e.g. `summaryDetail.beta`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileRecord {
    modules: Map<String, Value>,
}

impl ProfileRecord {
    /// Wrap a quoteSummary result object.
    ///
    /// # Errors
    ///
    /// Returns `YfError::Data` if `value` is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, YfError> {
        match value {
            Value::Object(modules) => Ok(Self { modules }),
            other => Err(YfError::Data(format!(
                "quoteSummary result is not an object: {other}"
            ))),
        }
    }

    #[must_use]
    pub fn module(&self, name: &str) -> Option<&Value> {
        self.modules.get(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Look up `module.field`. An absent module or field is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `YfError::Data` if the path has no `.` separator or the module is
    /// present but is not a JSON object.
    pub fn field(&self, path: &str) -> Result<Option<&Value>, YfError> {
        let (module, field) = path
            .split_once('.')
            .ok_or_else(|| YfError::Data(format!("field path {path:?} has no module")))?;
        match self.modules.get(module) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(m)) => Ok(m.get(field)),
            Some(_) => Err(YfError::Data(format!("module {module} is not an object"))),
        }
    }

    /// Like [`field`](Self::field), treating malformed modules as absent.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        self.field(path).ok().flatten()
    }
}

impl From<Map<String, Value>> for ProfileRecord {
    fn from(modules: Map<String, Value>) -> Self {
        Self { modules }
    }
}

/// Descriptive attributes of a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyInfo {
    pub name: String,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub country: Option<String>,
    pub employees: Option<u64>,
    pub exchange: Option<String>,
}
