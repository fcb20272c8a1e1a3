use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::json;

use super::{AudioConfig, MP3, SynthesisInput, SynthesizeRequest, Voice};
use crate::synthesis::response::{ErrorEnvelope, SynthesizeResponse};

#[test]
fn synthesize_request_matches_wire_format() {
    let voice = Voice {
        language_code: "ja-JP".to_owned(),
        name: "ja-JP-Neural2-C".to_owned(),
    };
    let request = SynthesizeRequest {
        input: SynthesisInput { text: "さんびゃく" },
        voice: &voice,
        audio_config: AudioConfig { audio_encoding: MP3 },
    };

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "input": { "text": "さんびゃく" },
            "voice": { "languageCode": "ja-JP", "name": "ja-JP-Neural2-C" },
            "audioConfig": { "audioEncoding": "MP3" },
        }),
    );
}

#[test]
fn audio_content_is_base64() {
    let body = json!({ "audioContent": STANDARD.encode(b"ID3...") }).to_string();

    let response: SynthesizeResponse = serde_json::from_str(&body).unwrap();

    assert_eq!(STANDARD.decode(response.audio_content).unwrap(), b"ID3...");
}

#[test]
fn error_envelope_carries_the_api_error() {
    let body = json!({
        "error": {
            "code": 403,
            "message": "The request is missing a valid API key.",
            "status": "PERMISSION_DENIED",
        },
    })
    .to_string();

    let envelope: ErrorEnvelope = serde_json::from_str(&body).unwrap();

    assert_eq!(envelope.error.code, 403);
    assert_eq!(envelope.error.status, "PERMISSION_DENIED");
}
