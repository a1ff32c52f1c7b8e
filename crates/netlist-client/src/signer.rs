//! Request signing hook.
//!
//! The network lists API expects every request to carry an authorization
//! header computed from the final method, URL and body. The signing scheme
//! lives outside this crate; plug it in through [`RequestSigner`].

use netlist_core::Result;

/// Signs a fully built request right before it is sent
pub trait RequestSigner: Send + Sync {
    /// Add authentication material to the request
    fn sign(&self, request: &mut reqwest::Request) -> Result<()>;
}

/// Signer that leaves requests untouched (proxies, test servers)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSigner;

impl RequestSigner for NoopSigner {
    fn sign(&self, _request: &mut reqwest::Request) -> Result<()> {
        Ok(())
    }
}

/// Signer that attaches a fixed header to every request
#[derive(Debug, Clone)]
pub struct StaticHeaderSigner {
    name: reqwest::header::HeaderName,
    value: reqwest::header::HeaderValue,
}

impl StaticHeaderSigner {
    /// Create a signer for the given header
    pub fn new(name: &str, value: &str) -> Result<Self> {
        let name = reqwest::header::HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| netlist_core::NetlistError::Config(format!("invalid header name: {e}")))?;
        let mut value = reqwest::header::HeaderValue::from_str(value)
            .map_err(|e| netlist_core::NetlistError::Config(format!("invalid header value: {e}")))?;
        value.set_sensitive(true);
        Ok(Self { name, value })
    }
}

impl RequestSigner for StaticHeaderSigner {
    fn sign(&self, request: &mut reqwest::Request) -> Result<()> {
        request
            .headers_mut()
            .insert(self.name.clone(), self.value.clone());
        Ok(())
    }
}
