//! Outbound link helpers: each builds an external URL, opens it in a new
//! browsing context and leaves a tracking entry. All of them tolerate a
//! missing `window` by doing nothing.

use serde_json::json;

use crate::config;

/// Structured log entry for a user action; the sink is the console until an
/// analytics collector is wired up.
pub fn track_event(name: &str, properties: serde_json::Value) {
    log::info!("event tracked: {name} {properties}");
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

/// WhatsApp deep link with the pre-filled greeting.
pub fn open_whatsapp() {
    let url = format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_PHONE,
        urlencoding::encode(config::WHATSAPP_GREETING)
    );
    open_in_new_tab(&url);
    track_event("whatsapp_click", json!({}));
}

pub fn open_live_stream() {
    if let Some(window) = web_sys::window() {
        let _ = window
            .open_with_url_and_target(config::LIVE_STREAM_URL, config::LIVE_STREAM_WINDOW_NAME);
    }
    track_event("live_stream_click", json!({}));
}

pub fn play_video() {
    open_in_new_tab(config::VIDEO_URL);
    track_event("video_play", json!({}));
}

pub fn play_audio() {
    open_in_new_tab(config::AUDIO_URL);
    track_event("audio_play", json!({}));
}

pub fn social_url(platform: &str) -> Option<&'static str> {
    match platform {
        "facebook" => Some(config::FACEBOOK_URL),
        "instagram" => Some(config::INSTAGRAM_URL),
        "youtube" => Some(config::YOUTUBE_URL),
        "twitter" => Some(config::TWITTER_URL),
        _ => None,
    }
}

/// Opens the platform's profile page; unknown platform keys are ignored.
pub fn open_social_media(platform: &str) {
    if let Some(url) = social_url(platform) {
        open_in_new_tab(url);
        track_event("social_click", json!({ "platform": platform }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_platforms_resolve() {
        assert_eq!(social_url("facebook"), Some(config::FACEBOOK_URL));
        assert_eq!(social_url("instagram"), Some(config::INSTAGRAM_URL));
        assert_eq!(social_url("youtube"), Some(config::YOUTUBE_URL));
        assert_eq!(social_url("twitter"), Some(config::TWITTER_URL));
    }

    #[test]
    fn unknown_platform_is_ignored() {
        assert_eq!(social_url("myspace"), None);
    }
}
