use crate::domain::errors::GatewayError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// Required fields were blank; nothing was sent.
    #[error("form.missing_fields")]
    MissingFields(Vec<&'static str>),
    #[error("gateway.failed")]
    Gateway(#[from] GatewayError),
}
