//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod fetch_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Build a request against an invalid URL to get a real reqwest error
        let client = reqwest::Client::new();
        let result = client.get("not a url").send().await;
        let reqwest_error = result.unwrap_err();
        let fetch_error = FetchError::from(reqwest_error);

        match fetch_error {
            FetchError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let fetch_error = FetchError::from(json_error);

        match fetch_error {
            FetchError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let fetch_error = FetchError::from(io_error);

        match fetch_error {
            FetchError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("bad\nkey").unwrap_err();
        let fetch_error = FetchError::from(header_error);

        match fetch_error {
            FetchError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "five-four-one".parse::<u32>().unwrap_err();
        let fetch_error = FetchError::from(parse_error);

        match fetch_error {
            FetchError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_missing_api_key_message() {
        let error = FetchError::MissingApiKey {
            env_var: "API_FOOTBALL_KEY".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("API key not provided"));
        assert!(message.contains("API_FOOTBALL_KEY"));
    }

    #[test]
    fn test_api_error_message() {
        let error = FetchError::Api {
            endpoint: "standings".to_string(),
            errors: r#"{"plan":"Free plans do not have access to this season"}"#.to_string(),
        };

        let message = error.to_string();
        assert!(message.starts_with("API returned errors for standings"));
        assert!(message.contains("Free plans"));
    }

    #[test]
    fn test_shape_helper() {
        let error = FetchError::shape("standings: missing league.standings[0]");

        match &error {
            FetchError::UnexpectedShape { context } => {
                assert_eq!(context, "standings: missing league.standings[0]");
            }
            _ => panic!("Expected UnexpectedShape error variant"),
        }
        assert_eq!(
            error.to_string(),
            "Unexpected response shape: standings: missing league.standings[0]"
        );
    }

    #[test]
    fn test_season_and_rival_messages() {
        let season = FetchError::InvalidSeason {
            value: "24".to_string(),
        };
        assert_eq!(
            season.to_string(),
            "Invalid season: 24 (expected a four-digit year)"
        );

        let rival = FetchError::InvalidRival {
            value: "Barcelona".to_string(),
        };
        assert_eq!(
            rival.to_string(),
            "Invalid rival: Barcelona (expected ID:LABEL)"
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FetchError>();
    }
}
