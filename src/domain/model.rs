use crate::utils::error::{BreedError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 品種 -> 子品種列表，保持 JSON 文件中的順序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedsPayload {
    entries: Vec<(String, Vec<String>)>,
}

impl BreedsPayload {
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, Vec<String>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 解析上游回應 `{ "message": { "<breed>": ["<sub-breed>", ...] }, "status": "..." }`
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let document: Value = serde_json::from_slice(body)
            .map_err(|e| BreedError::malformed(format!("body is not valid JSON: {}", e)))?;
        Self::from_value(document)
    }

    pub fn from_value(document: Value) -> Result<Self> {
        let Value::Object(mut root) = document else {
            return Err(BreedError::malformed("expected a JSON object"));
        };

        let message = root
            .remove("message")
            .ok_or_else(|| BreedError::malformed("missing 'message' field"))?;

        let Value::Object(breeds) = message else {
            return Err(BreedError::malformed("'message' is not an object"));
        };

        let mut entries = Vec::with_capacity(breeds.len());
        for (breed, sub_breeds) in breeds {
            // 只接受 null 或字串陣列；數字、布林、字串一律視為格式錯誤
            let sub_breeds = match sub_breeds {
                Value::Null => Vec::new(),
                Value::Array(items) => items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(name) => Ok(name),
                        other => Err(BreedError::malformed(format!(
                            "sub-breed of '{}' is not a string: {}",
                            breed, other
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?,
                other => {
                    return Err(BreedError::malformed(format!(
                        "sub-breeds of '{}' are not a list: {}",
                        breed, other
                    )))
                }
            };
            entries.push((breed, sub_breeds));
        }

        Ok(Self { entries })
    }
}

pub type FlattenedBreedList = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResult {
    pub status_code: u16,
    pub body: FlattenedBreedList,
}

impl SuccessResult {
    pub fn new(body: FlattenedBreedList) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResult {
    pub status_code: u16,
    pub message: String,
}

impl ErrorResult {
    pub const REQUEST_TIMEOUT: &'static str = "Request Timeout";
    pub const SOMETHING_WENT_WRONG: &'static str = "Something went wrong";
    pub const LOADING_FALLBACK: &'static str = "Error Loading Dog Breeds";

    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    pub fn request_timeout() -> Self {
        Self::new(408, Self::REQUEST_TIMEOUT)
    }

    pub fn internal() -> Self {
        Self::new(500, Self::SOMETHING_WENT_WRONG)
    }
}

impl From<BreedError> for ErrorResult {
    fn from(err: BreedError) -> Self {
        match err {
            BreedError::TransportTimeout => ErrorResult::request_timeout(),
            BreedError::HttpStatusError { status, text } => {
                let message = if text.is_empty() {
                    ErrorResult::LOADING_FALLBACK.to_string()
                } else {
                    text
                };
                ErrorResult::new(status, message)
            }
            BreedError::TransportError { .. }
            | BreedError::MalformedPayload { .. }
            | BreedError::IoError(_)
            | BreedError::ConfigError { .. }
            | BreedError::InvalidConfigValueError { .. }
            | BreedError::MissingConfigError { .. } => ErrorResult::internal(),
        }
    }
}

/// 每次呼叫恰好產生其中一種結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HandlerResponse {
    Success(SuccessResult),
    Error(ErrorResult),
}

impl HandlerResponse {
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerResponse::Success(success) => success.status_code,
            HandlerResponse::Error(error) => error.status_code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, HandlerResponse::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_preserves_document_order() {
        let body = br#"{"message":{"terrier":["yorkshire"],"akita":[],"bulldog":["french","english"]},"status":"success"}"#;
        let payload = BreedsPayload::from_json(body).unwrap();

        let breeds: Vec<&str> = payload.entries().iter().map(|(b, _)| b.as_str()).collect();
        assert_eq!(breeds, vec!["terrier", "akita", "bulldog"]);
        assert_eq!(payload.entries()[2].1, vec!["french", "english"]);
    }

    #[test]
    fn test_null_sub_breeds_are_empty() {
        let payload = BreedsPayload::from_value(json!({"message": {"pug": null}})).unwrap();
        assert_eq!(payload.entries(), &[("pug".to_string(), vec![])]);
    }

    #[test]
    fn test_rejects_unexpected_shapes() {
        let cases = vec![
            json!("invalid body response"),
            json!({"status": "success"}),
            json!({"message": "Breed not found"}),
            json!({"message": ["beagle"]}),
            json!({"message": {"hound": "afghan"}}),
            json!({"message": {"hound": [1, 2]}}),
            json!({"message": {"hound": 5}}),
            json!({"message": {"hound": false}}),
            json!({"message": {"hound": ""}}),
        ];

        for case in cases {
            let result = BreedsPayload::from_value(case.clone());
            assert!(
                matches!(result, Err(BreedError::MalformedPayload { .. })),
                "expected malformed payload for {}",
                case
            );
        }
    }

    #[test]
    fn test_rejects_non_json_body() {
        let result = BreedsPayload::from_json(b"<html>oops</html>");
        assert!(matches!(result, Err(BreedError::MalformedPayload { .. })));
    }

    #[test]
    fn test_error_table() {
        assert_eq!(
            ErrorResult::from(BreedError::TransportTimeout),
            ErrorResult::new(408, "Request Timeout")
        );
        assert_eq!(
            ErrorResult::from(BreedError::HttpStatusError {
                status: 404,
                text: "Not Found".to_string()
            }),
            ErrorResult::new(404, "Not Found")
        );
        assert_eq!(
            ErrorResult::from(BreedError::HttpStatusError {
                status: 599,
                text: String::new()
            }),
            ErrorResult::new(599, "Error Loading Dog Breeds")
        );
        assert_eq!(
            ErrorResult::from(BreedError::malformed("bare string")),
            ErrorResult::new(500, "Something went wrong")
        );
        assert_eq!(
            ErrorResult::from(BreedError::TransportError {
                message: "socket hang up".to_string()
            }),
            ErrorResult::new(500, "Something went wrong")
        );
    }

    #[test]
    fn test_response_wire_shape() {
        let success = HandlerResponse::Success(SuccessResult::new(vec!["beagle".to_string()]));
        assert_eq!(
            serde_json::to_value(&success).unwrap(),
            json!({"statusCode": 200, "body": ["beagle"]})
        );

        let error = HandlerResponse::Error(ErrorResult::request_timeout());
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({"statusCode": 408, "message": "Request Timeout"})
        );
    }
}
