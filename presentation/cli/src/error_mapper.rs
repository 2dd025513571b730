use business::domain::errors::GatewayError;
use business::domain::form::errors::SessionError;
use business::domain::image::errors::ImageError;

/// Human-readable text for an error code held by a store or returned by a session.
pub fn describe_code(code: &str) -> &'static str {
    match code {
        "gateway.network" => "Could not reach the inventory server",
        "gateway.status" => "The inventory server rejected the request",
        "gateway.decode" => "The inventory server sent an unexpected response",
        "gateway.request" => "The request could not be prepared",
        "gateway.failed" => "Saving failed",
        "form.missing_fields" => "Some required fields are empty",
        "image.empty" => "The selected image file is empty",
        "image.decode_failed" => "The selected file is not a readable image",
        "image.encode_failed" => "The image could not be compressed",
        "image.too_large" => "The image is too large even after compression",
        "image.superseded" => "A newer image selection replaced this one",
        "image.intake_unavailable" => "Images are not supported for this form",
        _ => "Unexpected error",
    }
}

pub trait IntoUserMessage {
    fn into_user_message(self) -> String;
}

impl IntoUserMessage for GatewayError {
    fn into_user_message(self) -> String {
        let text = describe_code(&self.to_string());
        match self {
            GatewayError::Status { status, message } if !message.is_empty() => {
                format!("{} (HTTP {}: {})", text, status, message)
            }
            GatewayError::Status { status, .. } => format!("{} (HTTP {})", text, status),
            _ => text.to_string(),
        }
    }
}

impl IntoUserMessage for SessionError {
    fn into_user_message(self) -> String {
        match self {
            SessionError::MissingFields(fields) => {
                format!("Please fill in: {}", fields.join(", "))
            }
            SessionError::Gateway(e) => format!("Saving failed: {}", e.into_user_message()),
        }
    }
}

impl IntoUserMessage for ImageError {
    fn into_user_message(self) -> String {
        describe_code(&self.to_string()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_every_gateway_code() {
        for error in [
            GatewayError::network("refused"),
            GatewayError::status(500, "boom"),
            GatewayError::decode("eof"),
            GatewayError::request("bad mime"),
        ] {
            assert_ne!(describe_code(&error.to_string()), "Unexpected error");
        }
    }

    #[test]
    fn should_include_status_and_server_message() {
        let message = GatewayError::status(404, "Vendor not found").into_user_message();

        assert_eq!(
            message,
            "The inventory server rejected the request (HTTP 404: Vendor not found)"
        );
    }

    #[test]
    fn should_list_missing_fields() {
        let message =
            SessionError::MissingFields(vec!["name", "sellingPrice"]).into_user_message();

        assert_eq!(message, "Please fill in: name, sellingPrice");
    }

    #[test]
    fn should_wrap_gateway_failure_of_session() {
        let message =
            SessionError::Gateway(GatewayError::network("refused")).into_user_message();

        assert_eq!(message, "Saving failed: Could not reach the inventory server");
    }

    #[test]
    fn should_describe_image_errors() {
        assert_eq!(
            ImageError::DecodeFailed.into_user_message(),
            "The selected file is not a readable image"
        );
        assert_eq!(describe_code("something.else"), "Unexpected error");
    }
}
