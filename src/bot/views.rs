//! Menu keyboards, callback tokens, and user-facing texts.

use crate::config::{MENU_LESSON_COUNT, TRACK_COUNT};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

// ─────────────────────────────────────────────────────────────────────────────
// Callback tokens
// ─────────────────────────────────────────────────────────────────────────────

/// Callback data for the book download button.
pub const CALLBACK_DOWNLOAD_BOOK: &str = "download_book";
/// Callback data for opening the audio track menu.
pub const CALLBACK_AUDIO_MENU: &str = "audio_files";
/// Callback data for returning to the top-level menu.
pub const CALLBACK_BACK_TO_MENU: &str = "back_to_menu";

/// Callback prefix for lesson buttons (`lesson1`..`lesson6`).
const LESSON_CALLBACK_PREFIX: &str = "lesson";
/// Callback prefix for audio track buttons (`audio_1`..`audio_49`).
const AUDIO_CALLBACK_PREFIX: &str = "audio_";

/// Parse an `audio_<n>` callback payload into a track number.
///
/// Returns `None` for anything outside `1..=TRACK_COUNT`. Out-of-range
/// buttons are never rendered, so such payloads are malformed and must not
/// reach the delivery queue.
#[must_use]
pub fn audio_track_from_callback(data: &str) -> Option<u8> {
    let track: u8 = data.strip_prefix(AUDIO_CALLBACK_PREFIX)?.parse().ok()?;
    (1..=TRACK_COUNT).contains(&track).then_some(track)
}

/// Whether a callback payload selects a lesson from the main menu.
#[must_use]
pub fn is_lesson_callback(data: &str) -> bool {
    data.strip_prefix(LESSON_CALLBACK_PREFIX)
        .and_then(|n| n.parse::<u8>().ok())
        .is_some_and(|n| (1..=MENU_LESSON_COUNT).contains(&n))
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyboards
// ─────────────────────────────────────────────────────────────────────────────

const LESSON_ICONS: [&str; 6] = ["📘", "📙", "📕", "📒", "📗", "📓"];

/// Top-level menu: lesson buttons in rows of two, then a row with the book
/// download and audio menu buttons.
#[must_use]
pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    let buttons: Vec<InlineKeyboardButton> = (1..=MENU_LESSON_COUNT)
        .map(|n| {
            let icon = LESSON_ICONS[usize::from(n - 1) % LESSON_ICONS.len()];
            InlineKeyboardButton::callback(
                format!("{icon} درس {n}"),
                format!("{LESSON_CALLBACK_PREFIX}{n}"),
            )
        })
        .collect();

    let mut rows: Vec<Vec<InlineKeyboardButton>> =
        buttons.chunks(2).map(<[InlineKeyboardButton]>::to_vec).collect();
    rows.push(vec![
        InlineKeyboardButton::callback("📥 دانلود کتاب", CALLBACK_DOWNLOAD_BOOK),
        InlineKeyboardButton::callback("🎵 فایل‌های صوتی", CALLBACK_AUDIO_MENU),
    ]);

    InlineKeyboardMarkup::new(rows)
}

/// Audio menu: one button per track in rows of two, plus a back row.
#[must_use]
pub fn audio_menu_keyboard() -> InlineKeyboardMarkup {
    let buttons: Vec<InlineKeyboardButton> = (1..=TRACK_COUNT)
        .map(|n| {
            InlineKeyboardButton::callback(
                format!("فایل صوتی {n}"),
                format!("{AUDIO_CALLBACK_PREFIX}{n}"),
            )
        })
        .collect();

    let mut rows: Vec<Vec<InlineKeyboardButton>> =
        buttons.chunks(2).map(<[InlineKeyboardButton]>::to_vec).collect();
    rows.push(vec![InlineKeyboardButton::callback(
        "🔙 برگشت به منوی اصلی",
        CALLBACK_BACK_TO_MENU,
    )]);

    InlineKeyboardMarkup::new(rows)
}

// ─────────────────────────────────────────────────────────────────────────────
// Texts
// ─────────────────────────────────────────────────────────────────────────────

/// Greeting shown above the top-level menu.
#[must_use]
pub fn welcome_message() -> &'static str {
    "👋 سلام دوست خوبم! \n\n🔍 میخوای لغات مهم درس‌ها رو یاد بگیری؟\n\n\
     ✅ پس یکی از درس‌ها رو از لیست زیر انتخاب کن تا برات لغات رو بفرستم:"
}

/// Word list screen for a lesson, or a friendly fallback when the lesson
/// has no loaded words yet.
#[must_use]
pub fn lesson_message(words: &[String]) -> String {
    if words.is_empty() {
        return "😅 هنوز لغتی برای این درس ندارم... صبر کن یه کم یاد بگیرم بعداً برات می‌فرستم!"
            .to_string();
    }

    format!(
        "🌟 لغات مهم انتخابی شما:\n\n{}\n\n📖 می‌تونی دوباره از لیست زیر درس دیگه‌ای انتخاب کنی!",
        words.join("\n")
    )
}

/// Header of the audio track menu.
#[must_use]
pub fn audio_menu_message() -> String {
    format!("🎵 اینجا {TRACK_COUNT} فایل صوتی داریم:\nلطفاً یکی را انتخاب کنید:")
}

/// Transient notice answered to a track button press.
#[must_use]
pub fn audio_wait_notice() -> &'static str {
    "🔊 لطفاً یکی دو دقیقه صبر کن، فایلتو دریافت می‌کنی..."
}

/// Caption attached to a delivered track.
#[must_use]
pub fn track_caption(track: u8) -> String {
    format!("🎧 فایل صوتی درس {track}")
}

/// Not-found message for a track without a backing file.
#[must_use]
pub fn track_missing_message(track: u8) -> String {
    format!("🚫 فایل صوتی درس {track} موجود نیست.")
}

/// Generic failure message for an unexpected delivery error.
#[must_use]
pub fn track_failed_message(track: u8) -> String {
    format!("😔 ارسال فایل صوتی درس {track} ممکن نشد، لطفاً بعداً دوباره تلاش کن.")
}

/// Long alert answered to the book download button.
#[must_use]
pub fn book_wait_notice() -> &'static str {
    "📥 فایل ما حدودا 10 مگ هست و برای دریافتش یکم باید منتظر باشی... دارم برات ارسال میکنم"
}

/// Message sent when the book file is unavailable.
#[must_use]
pub fn book_missing_message() -> &'static str {
    "😔 فایل کتاب فعلاً در دسترس نیست، لطفاً بعداً دوباره تلاش کن."
}
