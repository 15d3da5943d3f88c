//! The body a frame client posts back when a viewer presses a button.
//!
//! Only the envelope is strict: the body must be a JSON object carrying an
//! `untrustedData` object. Every field inside it is optional, and a field of
//! the wrong type reads as absent.

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FramePacket {
    pub untrusted_data: UntrustedData,
    #[serde(default, deserialize_with = "lenient")]
    pub trusted_data: Option<TrustedData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntrustedData {
    #[serde(default, deserialize_with = "lenient")]
    pub fid: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message_hash: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub network: Option<u64>,
    #[serde(default)]
    pub button_index: Option<Value>,
    #[serde(default)]
    pub input_text: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub cast_id: Option<CastId>,
}

#[derive(Debug, Deserialize)]
pub struct CastId {
    pub fid: u64,
    pub hash: String,
}

/// Signed message bytes. Carried through for completeness, never verified.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedData {
    #[serde(default)]
    pub message_bytes: Option<String>,
}

impl FramePacket {
    /// Parses a posted body. The shape is checked on the raw JSON first, since
    /// derived struct impls would also accept positional arrays.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        match value.get("untrustedData") {
            Some(Value::Object(_)) => serde_json::from_value(value),
            _ => Err(serde_json::Error::custom(
                "expected an object with an `untrustedData` object",
            )),
        }
    }
}

impl UntrustedData {
    /// The pressed button as an integer.
    ///
    /// Integral numbers (`2`, `2.0`) and numeric strings (`"2"`) are accepted,
    /// anything else is `None`.
    pub fn button_index(&self) -> Option<i64> {
        match self.button_index.as_ref()? {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// The typed text, if the viewer entered any.
    pub fn input_text(&self) -> Option<&str> {
        match self.input_text.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn untrusted(value: Value) -> UntrustedData {
        let body = serde_json::to_vec(&json!({ "untrustedData": value })).unwrap();
        FramePacket::from_slice(&body).unwrap().untrusted_data
    }

    #[test]
    fn parses_a_full_client_packet() {
        let body = json!({
            "untrustedData": {
                "fid": 2,
                "url": "https://frame.example/",
                "messageHash": "0xd2b1ddc6c88e865a33cb1a565e0058d757042974",
                "timestamp": 1706243218,
                "network": 1,
                "buttonIndex": 3,
                "inputText": "gm",
                "castId": { "fid": 226, "hash": "0xa48dd46161d8e57725f5e26e34ec19c13ff7f3b9" }
            },
            "trustedData": { "messageBytes": "d2b1ddc6c88e865a33cb1a565e0058d757042974" }
        });
        let packet = FramePacket::from_slice(body.to_string().as_bytes()).unwrap();

        assert_eq!(packet.untrusted_data.fid, Some(2));
        assert_eq!(packet.untrusted_data.button_index(), Some(3));
        assert_eq!(packet.untrusted_data.input_text(), Some("gm"));
        assert_eq!(packet.untrusted_data.cast_id.as_ref().map(|c| c.fid), Some(226));
        assert!(packet.trusted_data.and_then(|t| t.message_bytes).is_some());
    }

    #[test]
    fn envelope_is_required() {
        assert!(FramePacket::from_slice(b"{}").is_err());
        assert!(FramePacket::from_slice(b"not json").is_err());
        assert!(FramePacket::from_slice(br#"{"untrustedData": null}"#).is_err());
        assert!(FramePacket::from_slice(br#"[]"#).is_err());
        assert!(FramePacket::from_slice(br#"[{}]"#).is_err());
        assert!(FramePacket::from_slice(br#"{"untrustedData": []}"#).is_err());
        assert!(FramePacket::from_slice(br#"{"untrustedData": [null, null, null, null, null, 3]}"#).is_err());
        assert!(FramePacket::from_slice(br#"{"untrustedData": 5}"#).is_err());
    }

    #[test]
    fn empty_untrusted_data_is_accepted() {
        let data = untrusted(json!({}));
        assert_eq!(data.button_index(), None);
        assert_eq!(data.input_text(), None);
    }

    #[test]
    fn button_index_coercion() {
        assert_eq!(untrusted(json!({ "buttonIndex": 2 })).button_index(), Some(2));
        assert_eq!(untrusted(json!({ "buttonIndex": 2.0 })).button_index(), Some(2));
        assert_eq!(untrusted(json!({ "buttonIndex": " 4" })).button_index(), Some(4));
        assert_eq!(untrusted(json!({ "buttonIndex": -1 })).button_index(), Some(-1));
        assert_eq!(untrusted(json!({ "buttonIndex": 1.5 })).button_index(), None);
        assert_eq!(untrusted(json!({ "buttonIndex": "two" })).button_index(), None);
        assert_eq!(untrusted(json!({ "buttonIndex": true })).button_index(), None);
        assert_eq!(untrusted(json!({ "buttonIndex": null })).button_index(), None);
        assert_eq!(untrusted(json!({ "buttonIndex": [1] })).button_index(), None);
    }

    #[test]
    fn empty_or_non_string_text_reads_as_absent() {
        assert_eq!(untrusted(json!({ "inputText": "" })).input_text(), None);
        assert_eq!(untrusted(json!({ "inputText": 7 })).input_text(), None);
        assert_eq!(untrusted(json!({ "inputText": " " })).input_text(), Some(" "));
    }

    #[test]
    fn mistyped_optional_fields_do_not_reject_the_packet() {
        let data = untrusted(json!({ "fid": "abc", "castId": 5, "buttonIndex": 1 }));
        assert_eq!(data.fid, None);
        assert!(data.cast_id.is_none());
        assert_eq!(data.button_index(), Some(1));
    }
}
