/// Gateway errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a response (DNS, connection, TLS, ...).
    #[error("gateway.network")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("gateway.status")]
    Status { status: u16, message: String },
    /// The response body could not be decoded into the expected shape.
    #[error("gateway.decode")]
    Decode(String),
    /// The outgoing payload could not be assembled.
    #[error("gateway.request")]
    Request(String),
}

impl GatewayError {
    pub fn network(detail: impl Into<String>) -> Self {
        GatewayError::Network(detail.into())
    }
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        GatewayError::Status {
            status,
            message: message.into(),
        }
    }
    pub fn decode(detail: impl Into<String>) -> Self {
        GatewayError::Decode(detail.into())
    }
    pub fn request(detail: impl Into<String>) -> Self {
        GatewayError::Request(detail.into())
    }

    /// Diagnostic text for logs; never shown to the user as-is.
    pub fn detail(&self) -> String {
        match self {
            GatewayError::Network(d) | GatewayError::Decode(d) | GatewayError::Request(d) => {
                d.clone()
            }
            GatewayError::Status { status, message } => format!("HTTP {}: {}", status, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_code_style_messages() {
        assert_eq!(GatewayError::network("refused").to_string(), "gateway.network");
        assert_eq!(GatewayError::status(500, "boom").to_string(), "gateway.status");
    }

    #[test]
    fn should_keep_status_and_message_in_detail() {
        let error = GatewayError::status(404, "Vendor not found");
        assert_eq!(error.detail(), "HTTP 404: Vendor not found");
    }
}
