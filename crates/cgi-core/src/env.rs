//! The environment mapping a CGI gateway supplies to a handler.

use serde::Serialize;

/// Result of an environment lookup.
///
/// Absence is a normal, displayable state for every variable, never an
/// error. Renderers turn `NotSet` into a placeholder, not an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnvValue {
    /// The variable was present with this value.
    Set(String),
    /// The variable was absent from the environment.
    NotSet,
}

impl EnvValue {
    /// Whether the variable was present.
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// The value as a string slice, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Set(v) => Some(v.as_str()),
            Self::NotSet => None,
        }
    }

    /// The value, or a caller-supplied fallback.
    pub fn unwrap_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.as_str().unwrap_or(fallback)
    }
}

impl From<Option<String>> for EnvValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => Self::Set(v),
            None => Self::NotSet,
        }
    }
}

/// Ordered mapping of CGI metavariables for one request.
///
/// The gateway hands a handler its environment as key/value pairs
/// (`SERVER_PROTOCOL`, `REQUEST_METHOD`, `HTTP_*` header derivatives
/// and friends). Renderers receive this mapping explicitly instead of
/// reading the ambient process environment, so tests can inject any
/// shape of request without touching process state.
#[derive(Debug, Clone, Default)]
pub struct GatewayEnv {
    vars: Vec<(String, String)>,
}

impl GatewayEnv {
    /// Capture the current process environment.
    ///
    /// This is the one place a page binary touches ambient state; every
    /// stage downstream works off the captured mapping.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build an environment from explicit pairs (test injection).
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a variable. Never fails; absence is a value.
    pub fn get(&self, key: &str) -> EnvValue {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .into()
    }

    /// Iterate all variables in the order the gateway supplied them.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables in the environment.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    // Well-known CGI metavariables, as set by the gateway.

    /// `GATEWAY_INTERFACE`, e.g. `CGI/1.1`.
    pub fn gateway_interface(&self) -> EnvValue {
        self.get("GATEWAY_INTERFACE")
    }

    /// `SERVER_PROTOCOL`, e.g. `HTTP/1.1`.
    pub fn server_protocol(&self) -> EnvValue {
        self.get("SERVER_PROTOCOL")
    }

    /// `SERVER_SOFTWARE`, the serving gateway's identity string.
    pub fn server_software(&self) -> EnvValue {
        self.get("SERVER_SOFTWARE")
    }

    /// `SERVER_NAME`, the virtual host name.
    pub fn server_name(&self) -> EnvValue {
        self.get("SERVER_NAME")
    }

    /// `SERVER_PORT`.
    pub fn server_port(&self) -> EnvValue {
        self.get("SERVER_PORT")
    }

    /// `REQUEST_METHOD`.
    pub fn request_method(&self) -> EnvValue {
        self.get("REQUEST_METHOD")
    }

    /// `QUERY_STRING`, the raw undecoded query string.
    pub fn query_string(&self) -> EnvValue {
        self.get("QUERY_STRING")
    }

    /// `SCRIPT_NAME`, the URL path of the script.
    pub fn script_name(&self) -> EnvValue {
        self.get("SCRIPT_NAME")
    }

    /// `SCRIPT_FILENAME`, the filesystem path of the script.
    pub fn script_filename(&self) -> EnvValue {
        self.get("SCRIPT_FILENAME")
    }

    /// `PATH_INFO`, extra path after the script name.
    pub fn path_info(&self) -> EnvValue {
        self.get("PATH_INFO")
    }

    /// `DOCUMENT_ROOT`.
    pub fn document_root(&self) -> EnvValue {
        self.get("DOCUMENT_ROOT")
    }
}
