pub mod response;

#[cfg(test)]
mod tests;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use url::Url;

use self::response::{ErrorEnvelope, SynthesizeResponse};
use crate::{error::TtsError, request::Request};

const MP3: &str = "MP3";

/// Voice selection parameters sent with every synthesis request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voice {
    pub language_code: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: &'a Voice,
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
}

#[derive(Debug, Clone)]
pub struct Synthesizer {
    pub(crate) base: Url,
    pub(crate) client: Client,
    pub(crate) api_key: String,
}

impl Request for Synthesizer {
    fn base(&self) -> &Url {
        &self.base
    }

    fn client(&self) -> &Client {
        &self.client
    }
}

pub type Audio = Bytes;

impl Synthesizer {
    /// Synthesizes `text` with the given voice and returns the MP3 bytes.
    pub async fn synthesize(&self, text: &str, voice: &Voice) -> Result<Audio, TtsError> {
        let request = SynthesizeRequest {
            input: SynthesisInput { text },
            voice,
            audio_config: AudioConfig { audio_encoding: MP3 },
        };
        let (status, bytes) = self
            .post("v1/text:synthesize", &[("key", self.api_key.as_str())], &request)
            .await?;
        match status {
            StatusCode::OK => {
                let response: SynthesizeResponse =
                    serde_json::from_slice(&bytes).map_err(TtsError::MalformedResponse)?;
                let audio = STANDARD
                    .decode(response.audio_content)
                    .map_err(TtsError::DecodeError)?;

                Ok(Bytes::from(audio))
            },
            _ => {
                let envelope: ErrorEnvelope =
                    serde_json::from_slice(&bytes).map_err(TtsError::MalformedResponse)?;

                Err(TtsError::UnsuccessfulRequest(envelope.error))
            },
        }
    }
}
