use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// How the service is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    /// Behind API Gateway, driven by the Lambda runtime.
    Lambda,
    /// Plain HTTP listener, for local development.
    Local,
}

impl Runtime {
    pub fn as_str(self) -> &'static str {
        match self {
            Runtime::Lambda => "lambda",
            Runtime::Local => "local",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub runtime: Runtime,
    /// Only used by [`Runtime::Local`].
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`.
    ///
    /// - `R2ISS_RUNTIME`: `lambda` (default) or `local`
    /// - `R2ISS_BIND_ADDR`: listen address for the local runtime
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let runtime = match lookup("R2ISS_RUNTIME").as_deref().map(str::trim) {
            None | Some("") | Some("lambda") => Runtime::Lambda,
            Some("local") => Runtime::Local,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid R2ISS_RUNTIME '{other}': expected 'lambda' or 'local'"
                ));
            }
        };

        let raw_addr = lookup("R2ISS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("invalid R2ISS_BIND_ADDR '{raw_addr}': {e}"))?;

        Ok(Self { runtime, bind_addr })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            runtime: Runtime::Lambda,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}
