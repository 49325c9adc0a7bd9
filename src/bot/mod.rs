/// Command and callback handlers
pub mod handlers;
/// Telegram implementation of the audio delivery transport
pub mod transport;
/// Menu keyboards, callback tokens, and user-facing texts
pub mod views;
