//! Command and callback handlers.
//!
//! All screens here are plain request/response: render a fixed keyboard or
//! word list. The only stateful path is the audio track buttons, which are
//! handed to the delivery sequencer instead of being answered in place.

use crate::audio::{AudioRequest, AudioSequencer};
use crate::bot::transport::AudioRequester;
use crate::bot::views;
use crate::config::Settings;
use crate::vocabulary::Vocabulary;
use anyhow::Result;
use std::io;
use std::path::Path;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, ChatId, InputFile};
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

/// Supported bot commands.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "دستورات پشتیبانی‌شده:")]
pub enum Command {
    /// Show the top-level lesson menu.
    #[command(description = "شروع کار با ربات.")]
    Start,
    /// Liveness probe.
    #[command(description = "بررسی سلامت ربات.")]
    Healthcheck,
}

/// Reply to `/start` with the welcome text and the main menu.
///
/// # Errors
///
/// Returns an error if the Telegram API call fails.
pub async fn start(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, views::welcome_message())
        .reply_markup(views::main_menu_keyboard())
        .await?;
    Ok(())
}

/// Reply `OK` to `/healthcheck`.
///
/// # Errors
///
/// Returns an error if the Telegram API call fails.
pub async fn healthcheck(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, "OK").await?;
    Ok(())
}

/// Route an inline-keyboard callback to the matching screen or action.
///
/// Track buttons are validated here and enqueued; their acknowledgment is
/// sent by the delivery worker, in queue order. Everything else is answered
/// and rendered immediately.
///
/// # Errors
///
/// Returns an error if Telegram API calls fail.
pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    vocabulary: Arc<Vocabulary>,
    sequencer: Arc<AudioSequencer<AudioRequester>>,
    settings: Arc<Settings>,
) -> Result<()> {
    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    let Some(message) = q.message.as_ref() else {
        warn!(data, "Callback without an attached message; ignoring");
        let _ = bot.answer_callback_query(q.id.clone()).await;
        return Ok(());
    };
    let chat_id = message.chat().id;
    let message_id = message.id();

    if let Some(track) = views::audio_track_from_callback(data) {
        sequencer.enqueue(AudioRequest {
            requester: AudioRequester {
                callback_id: q.id.clone(),
                chat_id,
            },
            track,
        });
        return Ok(());
    }

    match data {
        views::CALLBACK_AUDIO_MENU => {
            bot.answer_callback_query(q.id.clone()).await?;
            bot.edit_message_text(chat_id, message_id, views::audio_menu_message())
                .reply_markup(views::audio_menu_keyboard())
                .await?;
        }
        views::CALLBACK_DOWNLOAD_BOOK => {
            bot.answer_callback_query(q.id.clone())
                .text(views::book_wait_notice())
                .show_alert(true)
                .await?;
            send_book(&bot, chat_id, Path::new(&settings.book_path)).await?;
        }
        views::CALLBACK_BACK_TO_MENU => {
            bot.answer_callback_query(q.id.clone()).await?;
            bot.edit_message_text(chat_id, message_id, views::welcome_message())
                .reply_markup(views::main_menu_keyboard())
                .await?;
        }
        lesson if views::is_lesson_callback(lesson) => {
            bot.answer_callback_query(q.id.clone()).await?;
            let words = vocabulary.lesson_words(lesson).unwrap_or_default();
            bot.edit_message_text(chat_id, message_id, views::lesson_message(words))
                .reply_markup(views::main_menu_keyboard())
                .await?;
        }
        other => {
            info!(data = other, "Unknown callback payload; ignoring");
            let _ = bot.answer_callback_query(q.id.clone()).await;
        }
    }

    Ok(())
}

/// Send the course book as a document, or apologize if it is unavailable.
async fn send_book(bot: &Bot, chat_id: ChatId, book_path: &Path) -> Result<()> {
    match tokio::fs::read(book_path).await {
        Ok(content) => {
            let file_name = book_path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("book.pdf")
                .to_owned();
            let file = InputFile::memory(content).file_name(file_name);
            bot.send_document(chat_id, file).await?;
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %book_path.display(), "Book file missing");
            bot.send_message(chat_id, views::book_missing_message())
                .await?;
        }
        Err(e) => {
            tracing::error!(path = %book_path.display(), error = %e, "Book read failed");
            bot.send_message(chat_id, views::book_missing_message())
                .await?;
        }
    }
    Ok(())
}
