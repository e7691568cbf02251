use serde::Serialize;
use serde_json::Value;
use crate::errors::AppError;

// Lookup request format
#[derive(Debug, PartialEq)]
pub struct CheckRequest {
    // only a string can match, anything else counts as not listed
    pub username: Option<Value>,
    // opaque, echoed back untouched
    pub check_string: Option<Value>,
}

impl CheckRequest {
    // Any JSON document is accepted except `null`. Fields are only read from
    // an object; arrays and scalars carry no fields. Repeated keys keep the last value.
    pub fn parse(body: &[u8]) -> Result<Self, AppError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Err(AppError::NullBody),
            Value::Object(mut fields) => Ok(Self {
                username: fields.remove("username"),
                check_string: fields.remove("check_string"),
            }),
            _ => Ok(Self {
                username: None,
                check_string: None,
            }),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_ref().and_then(Value::as_str)
    }
}

// Lookup response format
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CheckResponse {
    pub is_whitelisted: bool,
    // absent in the request means absent in the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_string: Option<Value>,
    pub time_order: Option<bool>,
}

impl CheckResponse {
    pub fn new(time_order: Option<bool>, check_string: Option<Value>) -> Self {
        Self {
            is_whitelisted: time_order.is_some(),
            check_string,
            time_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_check_string_is_kept() {
        let req = CheckRequest::parse(br#"{"username": "siapa", "check_string": null}"#).unwrap();
        assert_eq!(req.check_string, Some(Value::Null));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let req = CheckRequest::parse(b"{}").unwrap();
        assert!(req.username.is_none());
        assert!(req.check_string.is_none());
    }

    #[test]
    fn non_string_username_is_ignored() {
        let req = CheckRequest::parse(br#"{"username": 42}"#).unwrap();
        assert_eq!(req.username(), None);
    }

    #[test]
    fn arrays_carry_no_fields() {
        let req = CheckRequest::parse(br#"["siapa", "abc"]"#).unwrap();
        assert_eq!(req.username(), None);
        assert!(req.check_string.is_none());
    }

    #[test]
    fn scalars_carry_no_fields() {
        for body in [&b"5"[..], &b"true"[..], &br#""siapa""#[..]] {
            let req = CheckRequest::parse(body).unwrap();
            assert_eq!(req.username, None);
            assert_eq!(req.check_string, None);
        }
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        let req = CheckRequest::parse(
            br#"{"username": "nobody", "username": "siapa", "check_string": 1, "check_string": 2}"#,
        )
        .unwrap();
        assert_eq!(req.username(), Some("siapa"));
        assert_eq!(req.check_string, Some(json!(2)));
    }

    #[test]
    fn null_body_is_rejected() {
        assert!(matches!(CheckRequest::parse(b"null"), Err(AppError::NullBody)));
        assert!(matches!(CheckRequest::parse(b" null \n"), Err(AppError::NullBody)));
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(matches!(CheckRequest::parse(b"{not json"), Err(AppError::InvalidBody(_))));
        assert!(matches!(CheckRequest::parse(b""), Err(AppError::InvalidBody(_))));
    }

    #[test]
    fn absent_check_string_is_omitted() {
        let res = CheckResponse::new(None, None);
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({"is_whitelisted": false, "time_order": null})
        );
    }

    #[test]
    fn response_keeps_field_order() {
        let res = CheckResponse::new(Some(true), Some(json!("abc")));
        assert_eq!(
            serde_json::to_string(&res).unwrap(),
            r#"{"is_whitelisted":true,"check_string":"abc","time_order":true}"#
        );
    }
}
