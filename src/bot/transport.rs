//! Telegram implementation of the audio delivery transport.

use crate::audio::{AudioTransport, TrackStore};
use crate::bot::views;
use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, ChatId, InputFile};

/// Identifies the interaction a track was requested from.
#[derive(Debug, Clone)]
pub struct AudioRequester {
    /// Id of the callback query produced by the track button press.
    pub callback_id: CallbackQueryId,
    /// Chat the track is delivered to.
    pub chat_id: ChatId,
}

/// Telegram-backed transport for the audio delivery worker.
pub struct TelegramAudioTransport {
    bot: Bot,
}

impl TelegramAudioTransport {
    /// Create a transport bound to a bot instance.
    #[must_use]
    pub const fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl AudioTransport for TelegramAudioTransport {
    type Requester = AudioRequester;

    async fn acknowledge(&self, requester: &AudioRequester) -> Result<()> {
        self.bot
            .answer_callback_query(requester.callback_id.clone())
            .text(views::audio_wait_notice())
            .show_alert(true)
            .await?;
        Ok(())
    }

    async fn send_track(
        &self,
        requester: &AudioRequester,
        track: u8,
        content: Vec<u8>,
    ) -> Result<()> {
        let file = InputFile::memory(content).file_name(TrackStore::file_name(track));
        self.bot
            .send_audio(requester.chat_id, file)
            .caption(views::track_caption(track))
            .await?;
        Ok(())
    }

    async fn send_missing(&self, requester: &AudioRequester, track: u8) -> Result<()> {
        self.bot
            .send_message(requester.chat_id, views::track_missing_message(track))
            .await?;
        Ok(())
    }

    async fn send_failed(&self, requester: &AudioRequester, track: u8) -> Result<()> {
        self.bot
            .send_message(requester.chat_id, views::track_failed_message(track))
            .await?;
        Ok(())
    }
}
