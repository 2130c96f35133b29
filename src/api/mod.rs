//! API service modules for ElevenLabs endpoints.
//!
//! Each service provides methods for one group of endpoints and is
//! obtained from an [`ElevenLabsClient`](crate::ElevenLabsClient).

mod history;
mod models;
mod samples;
mod text_to_speech;
mod user;
mod voices;

pub use history::HistoryService;
pub use models::ModelsService;
pub use samples::SamplesService;
pub use text_to_speech::TextToSpeechService;
pub use user::UserService;
pub use voices::VoicesService;
