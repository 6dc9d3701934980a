use thiserror::Error;

/// Every way a request or decode can fail. Closed on purpose: callers match
/// exhaustively and the set does not grow per status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The URL string could not be parsed. No request was sent.
    #[error("invalid URL")]
    InvalidUrl,
    /// Transport failure or non-2xx status, carrying a human-readable message.
    #[error("{0}")]
    Custom(String),
    /// The status was 2xx but the response carried no body bytes.
    #[error("no data in response")]
    NoData,
    /// The transport could not produce a well-formed HTTP response.
    #[error("unknown HTTP response")]
    UnknownHttpResponse,
    /// JSON deserialization of a response body failed.
    #[error("decode error: {0}")]
    DecodeError(String),
}

impl Error {
    /// Map a non-2xx status code to an error.
    ///
    /// The well-known codes get fixed messages; anything else falls back to
    /// `description` when supplied, or an interpolated message. Callers depend
    /// on these exact strings.
    pub fn from_status(code: u16, description: Option<String>) -> Self {
        match code {
            400 => Error::Custom("Bad Request".to_string()),
            401 => Error::Custom("Unauthorized".to_string()),
            403 => Error::Custom("Forbidden".to_string()),
            404 => Error::Custom("Not Found".to_string()),
            500 => Error::Custom("Internal Server Error".to_string()),
            _ => Error::Custom(
                description
                    .unwrap_or_else(|| format!("Unknown Error with status code: {}", code)),
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_codes_map_to_fixed_messages() {
        let cases = [
            (400, "Bad Request"),
            (401, "Unauthorized"),
            (403, "Forbidden"),
            (404, "Not Found"),
            (500, "Internal Server Error"),
        ];
        for (code, message) in cases {
            assert_eq!(
                Error::from_status(code, None),
                Error::Custom(message.to_string()),
                "status {code}"
            );
        }
    }

    #[test]
    fn unknown_status_codes_interpolate_the_code() {
        assert_eq!(
            Error::from_status(418, None),
            Error::Custom("Unknown Error with status code: 418".to_string())
        );
        assert_eq!(
            Error::from_status(502, None),
            Error::Custom("Unknown Error with status code: 502".to_string())
        );
    }

    #[test]
    fn supplied_description_overrides_the_fallback_only() {
        assert_eq!(
            Error::from_status(503, Some("upstream down".to_string())),
            Error::Custom("upstream down".to_string())
        );
        // fixed messages win over a description
        assert_eq!(
            Error::from_status(404, Some("ignored".to_string())),
            Error::Custom("Not Found".to_string())
        );
    }

    #[test]
    fn display_matches_the_carried_message() {
        assert_eq!(Error::Custom("Forbidden".to_string()).to_string(), "Forbidden");
        assert_eq!(Error::InvalidUrl.to_string(), "invalid URL");
        assert_eq!(
            Error::DecodeError("missing field `x`".to_string()).to_string(),
            "decode error: missing field `x`"
        );
    }
}
