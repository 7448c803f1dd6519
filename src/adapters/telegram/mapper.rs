//! Maps grammers messages to domain `IncomingPost`.
//!
//! Only channel posts carrying a video or a generic file are indexable;
//! everything else maps to None. The media's document id is kept as an
//! opaque string identifier.

use crate::domain::{IncomingPost, MediaKind};
use grammers_client::types::{Chat, Media, Message};

/// Extract an indexable post from a message, if it is one.
pub fn post_from_message(message: &Message) -> Option<IncomingPost> {
    if !matches!(message.chat(), Chat::Channel(_)) {
        return None;
    }

    // Videos arrive as documents with a video mime type.
    let (media_file_id, media_kind) = match message.media()? {
        Media::Document(document) => {
            let kind = if document
                .mime_type()
                .is_some_and(|mime| mime.starts_with("video/"))
            {
                MediaKind::Video
            } else {
                MediaKind::Document
            };
            (document.id().to_string(), kind)
        }
        _ => return None,
    };

    Some(IncomingPost {
        media_file_id,
        media_kind,
        caption: message.text().to_string(),
    })
}
