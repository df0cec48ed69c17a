//! Site-wide constants: contact endpoints, outbound URLs and UI timings.

pub const WHATSAPP_PHONE: &str = "6282189608134";
pub const WHATSAPP_GREETING: &str = "Halo, saya ingin bertanya mengenai kegiatan gereja.";

pub const LIVE_STREAM_URL: &str = "https://youtube.com/live/Lj2nLATiYb4?feature=share";
pub const LIVE_STREAM_WINDOW_NAME: &str = "GPIB Pasar Minggu";
pub const VIDEO_URL: &str = "https://youtube.com/watch?v=example";
pub const AUDIO_URL: &str = "https://example.com/audio.mp3";

pub const FACEBOOK_URL: &str = "https://facebook.com/gpibsejahtera";
pub const INSTAGRAM_URL: &str = "https://instagram.com/gpibsejahtera";
pub const YOUTUBE_URL: &str = "https://youtube.com/@gpibpasarminggu1519";
pub const TWITTER_URL: &str = "https://twitter.com/gpibsejahtera";

/// Section ids and nav labels, in document order. The ids double as the
/// anchor fragments the nav links point at.
pub const SECTIONS: &[(&str, &str)] = &[
    ("beranda", "Beranda"),
    ("tentang", "Tentang Kami"),
    ("jadwal", "Jadwal Ibadah"),
    ("warta", "Warta Jemaat"),
    ("galeri", "Galeri"),
    ("kontak", "Kontak"),
];

/// Simulated latency of the contact-form delivery, in milliseconds.
pub const DELIVERY_LATENCY_MS: u32 = 1_500;

/// Minimum spacing between scroll-handler runs, in milliseconds.
pub const SCROLL_THROTTLE_MS: u32 = 100;
