pub mod error;
pub mod request;
pub mod synthesis;
pub mod tts;

pub use bytes::Bytes;

pub use tts::Tts;
