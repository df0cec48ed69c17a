//! The one-page site: hero, profile, service schedule, news, gallery and
//! contact sections. Owns the notice board and hands the notify callback
//! down to whatever needs to toast.

use serde_json::json;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::icon::Icon;
use crate::components::notification::{NotificationHost, NoticeAction};
use crate::components::reveal::Reveal;
use crate::outbox::OutboxHandle;
use crate::state::notice::{NoticeBoard, NoticeRequest};
use crate::actions;

const STYLES: &str = r#"
    * { box-sizing: border-box; margin: 0; }
    body {
        font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
        color: #223;
        background: #fdfdfb;
        line-height: 1.6;
    }
    section { padding: 5rem 1.5rem; max-width: 1080px; margin: 0 auto; }
    h2 { font-size: 2rem; margin-bottom: 1.5rem; color: #1a2a4a; }

    .site-header {
        position: fixed; top: 0; left: 0; right: 0; z-index: 40;
        background: transparent;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .site-header.scrolled {
        background: #ffffff;
        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.12);
    }
    .header-inner {
        max-width: 1080px; margin: 0 auto; padding: 0.75rem 1.5rem;
        display: flex; align-items: center; justify-content: space-between;
    }
    .logo { font-weight: 700; font-size: 1.2rem; color: #1a2a4a; text-decoration: none; }
    .desktop-nav { display: flex; gap: 1.25rem; }
    .nav-link { color: #334; text-decoration: none; padding: 0.25rem 0; }
    .nav-link.active { color: #b8860b; border-bottom: 2px solid #b8860b; }
    .burger { display: none; background: none; border: none; cursor: pointer; color: #1a2a4a; }
    .mobile-menu { display: none; }
    @media (max-width: 768px) {
        .desktop-nav { display: none; }
        .burger { display: block; }
        .mobile-menu.open {
            display: flex; flex-direction: column; gap: 0.5rem;
            background: #ffffff; padding: 1rem 1.5rem;
            box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
        }
    }

    .hero {
        min-height: 100vh; display: flex; flex-direction: column;
        align-items: center; justify-content: center; text-align: center;
        background: linear-gradient(160deg, #1a2a4a 0%, #2d4a7a 100%);
        color: #fff; max-width: none;
    }
    .hero h1 { font-size: 2.6rem; margin-bottom: 1rem; }
    .hero p { max-width: 620px; margin-bottom: 2rem; color: #dde; }
    .hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; justify-content: center; }

    .button {
        display: inline-flex; align-items: center; gap: 0.5rem;
        border: none; border-radius: 8px; padding: 0.7rem 1.4rem;
        font-size: 1rem; cursor: pointer; text-decoration: none;
    }
    .button-primary { background: #b8860b; color: #fff; }
    .button-ghost { background: transparent; color: #fff; border: 1px solid #fff; }
    .button:disabled { opacity: 0.6; cursor: wait; }

    .card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; }
    .card {
        background: #fff; border-radius: 12px; padding: 1.75rem;
        box-shadow: 0 4px 16px rgba(20, 30, 60, 0.08);
    }
    .card h3 { margin-bottom: 0.5rem; color: #1a2a4a; }
    .card .icon { color: #b8860b; margin-bottom: 0.75rem; }

    .schedule-list { list-style: none; padding: 0; }
    .schedule-list li {
        display: flex; justify-content: space-between; gap: 1rem;
        padding: 0.9rem 0; border-bottom: 1px solid #e5e5dd;
    }

    .news-item { margin-bottom: 1.5rem; }
    .news-item time { color: #778; font-size: 0.85rem; }
    .read-more {
        background: none; border: none; color: #b8860b; cursor: pointer;
        display: inline-flex; align-items: center; font-size: 0.95rem; padding: 0;
    }

    .gallery-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 0.75rem; }
    .gallery-item { border: none; padding: 0; cursor: pointer; border-radius: 8px; overflow: hidden; }
    .gallery-item img { width: 100%; height: 160px; object-fit: cover; display: block; }

    .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2.5rem; }
    @media (max-width: 768px) { .contact-grid { grid-template-columns: 1fr; } }
    .contact-item { display: flex; gap: 0.75rem; align-items: flex-start; margin-bottom: 1rem; }
    .contact-item .icon { color: #b8860b; flex-shrink: 0; }
    .social-row { display: flex; gap: 0.75rem; margin-top: 1rem; }
    .social-row button {
        background: #1a2a4a; color: #fff; border: none; border-radius: 50%;
        width: 42px; height: 42px; display: inline-flex;
        align-items: center; justify-content: center; cursor: pointer;
    }

    .contact-form { display: flex; flex-direction: column; gap: 0.9rem; }
    .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 0.9rem; }
    @media (max-width: 600px) { .form-row { grid-template-columns: 1fr; } }
    .contact-form input, .contact-form textarea {
        padding: 0.7rem 0.9rem; border: 1px solid #ccd; border-radius: 8px;
        font: inherit; resize: vertical;
    }

    .toast-stack {
        position: fixed; top: 5rem; right: 1rem; z-index: 50;
        display: flex; flex-direction: column; gap: 0.5rem; max-width: 24rem;
    }
    .toast {
        display: flex; gap: 0.6rem; align-items: flex-start;
        color: #fff; padding: 1rem; border-radius: 8px;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
        animation: toast-in 0.3s ease;
    }
    .toast-info { background: #2563eb; }
    .toast-success { background: #16a34a; }
    .toast-warning { background: #d97706; }
    .toast-error { background: #dc2626; }
    .toast-text { font-size: 0.9rem; }
    ul.toast-text { padding-left: 1.1rem; }
    .toast-icon { flex-shrink: 0; }
    .toast-leaving { animation: toast-out 0.3s ease forwards; }
    @keyframes toast-in {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes toast-out {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(100%); opacity: 0; }
    }

    .modal-overlay {
        position: fixed; inset: 0; z-index: 60;
        background: rgba(10, 15, 30, 0.6);
        display: flex; align-items: center; justify-content: center; padding: 1.5rem;
    }
    .modal-card {
        background: #fff; border-radius: 12px; padding: 2.5rem;
        max-width: 420px; text-align: center;
    }
    .modal-card .modal-icon { color: #16a34a; width: 48px; height: 48px; }
    .modal-card h3 { margin: 1rem 0 0.5rem; }
    .modal-card p { margin-bottom: 1.5rem; color: #556; }
"#;

const SCHEDULE: &[(&str, &str, &str)] = &[
    ("Ibadah Minggu I", "Minggu", "06.00 WIB"),
    ("Ibadah Minggu II", "Minggu", "09.00 WIB"),
    ("Ibadah Minggu III", "Minggu", "17.00 WIB"),
    ("Ibadah Keluarga", "Rabu", "19.00 WIB"),
    ("Persekutuan Doa", "Jumat", "05.00 WIB"),
];

const NEWS: &[(&str, &str, &str, &str)] = &[
    (
        "warta-1",
        "Perayaan HUT ke-75 Jemaat",
        "12 Oktober 2025",
        "Rangkaian ibadah syukur dan kegiatan sosial menyambut hari ulang tahun jemaat.",
    ),
    (
        "warta-2",
        "Pelayanan Kasih ke Panti Asuhan",
        "28 September 2025",
        "Komisi Pelkat PKB mengunjungi panti asuhan di wilayah Jakarta Selatan.",
    ),
    (
        "warta-3",
        "Pendaftaran Katekisasi Dibuka",
        "15 September 2025",
        "Kelas katekisasi periode baru dimulai bulan depan, pendaftaran di sekretariat.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    let board = use_reducer(NoticeBoard::default);
    let outbox = use_memo(|_| OutboxHandle::default(), ());

    let notify: Callback<NoticeRequest> = {
        let board = board.clone();
        Callback::from(move |request| board.dispatch(NoticeAction::Push(request)))
    };
    let dismiss: Callback<u32> = {
        let board = board.clone();
        Callback::from(move |id| board.dispatch(NoticeAction::Dismiss(id)))
    };

    let read_more = {
        let notify = notify.clone();
        move |article_id: &'static str| {
            let notify = notify.clone();
            Callback::from(move |_: MouseEvent| {
                actions::track_event("read_more", json!({ "article": article_id }));
                notify.emit(NoticeRequest::info("Artikel lengkap akan segera tersedia!"));
            })
        }
    };

    let open_gallery = {
        let notify = notify.clone();
        move |index: usize| {
            let notify = notify.clone();
            Callback::from(move |_: MouseEvent| {
                actions::track_event("gallery_open", json!({ "image": index }));
                notify.emit(NoticeRequest::info("Galeri foto akan segera tersedia!"));
            })
        }
    };

    let social_button = |platform: &'static str| {
        let onclick = Callback::from(move |_: MouseEvent| actions::open_social_media(platform));
        html! {
            <button {onclick} aria-label={platform}>
                <Icon name={platform} />
            </button>
        }
    };

    let on_whatsapp = Callback::from(|_: MouseEvent| actions::open_whatsapp());
    let on_live_stream = Callback::from(|_: MouseEvent| actions::open_live_stream());
    let on_play_video = Callback::from(|_: MouseEvent| actions::play_video());
    let on_play_audio = Callback::from(|_: MouseEvent| actions::play_audio());

    html! {
        <>
            <style>{ STYLES }</style>

            <section id="beranda" class="hero">
                <h1>{ "GPIB Jemaat Sejahtera Pasar Minggu" }</h1>
                <p>
                    { "Selamat datang di rumah persekutuan kami. Mari beribadah, \
                       bertumbuh dan melayani bersama dalam kasih Kristus." }
                </p>
                <div class="hero-actions">
                    <button class="button button-primary" onclick={on_live_stream}>
                        <Icon name="radio" />{ "Ibadah Live Streaming" }
                    </button>
                    <button class="button button-ghost" onclick={on_whatsapp.clone()}>
                        <Icon name="message-circle" />{ "Hubungi Kami" }
                    </button>
                </div>
            </section>

            <section id="tentang">
                <Reveal>
                    <h2>{ "Tentang Kami" }</h2>
                    <div class="card-grid">
                        <Reveal class="card">
                            <Icon name="check-circle" />
                            <h3>{ "Visi" }</h3>
                            <p>{ "Menjadi gereja yang mewujudkan damai sejahtera bagi seluruh ciptaan." }</p>
                        </Reveal>
                        <Reveal class="card">
                            <Icon name="info" />
                            <h3>{ "Misi" }</h3>
                            <p>{ "Melaksanakan panggilan kesaksian dan pelayanan di tengah masyarakat." }</p>
                        </Reveal>
                        <Reveal class="card">
                            <Icon name="play-circle" />
                            <h3>{ "Khotbah Online" }</h3>
                            <p>{ "Saksikan rekaman khotbah dan ibadah melalui kanal media kami." }</p>
                            <button class="read-more" onclick={on_play_video}>
                                { "Tonton video" }<Icon name="chevron-right" />
                            </button>
                            <button class="read-more" onclick={on_play_audio}>
                                { "Dengarkan audio" }<Icon name="chevron-right" />
                            </button>
                        </Reveal>
                    </div>
                </Reveal>
            </section>

            <section id="jadwal">
                <Reveal>
                    <h2>{ "Jadwal Ibadah" }</h2>
                    <ul class="schedule-list">
                        { for SCHEDULE.iter().map(|&(name, day, time)| html! {
                            <li>
                                <span>{ name }</span>
                                <span><Icon name="clock" />{ format!(" {day}, {time}") }</span>
                            </li>
                        }) }
                    </ul>
                </Reveal>
            </section>

            <section id="warta">
                <Reveal>
                    <h2>{ "Warta Jemaat" }</h2>
                    { for NEWS.iter().map(|&(id, title, date, summary)| html! {
                        <Reveal class="news-item">
                            <h3>{ title }</h3>
                            <time>{ date }</time>
                            <p>{ summary }</p>
                            <button class="read-more" onclick={read_more(id)}>
                                { "Baca selengkapnya" }<Icon name="chevron-right" />
                            </button>
                        </Reveal>
                    }) }
                </Reveal>
            </section>

            <section id="galeri">
                <Reveal>
                    <h2>{ "Galeri" }</h2>
                    <div class="gallery-grid">
                        { for (0..6).map(|index| html! {
                            <button class="gallery-item" onclick={open_gallery(index)}>
                                <img
                                    src={format!("/assets/galeri-{}.jpg", index + 1)}
                                    alt={format!("Dokumentasi kegiatan {}", index + 1)}
                                    loading="lazy"
                                />
                            </button>
                        }) }
                    </div>
                </Reveal>
            </section>

            <section id="kontak">
                <Reveal>
                    <h2>{ "Kontak" }</h2>
                    <div class="contact-grid">
                        <div>
                            <Reveal class="contact-item">
                                <Icon name="map-pin" />
                                <p>{ "Jl. Raya Pasar Minggu, Jakarta Selatan" }</p>
                            </Reveal>
                            <Reveal class="contact-item">
                                <Icon name="phone" />
                                <p>{ "+62 821-8960-8134" }</p>
                            </Reveal>
                            <Reveal class="contact-item">
                                <Icon name="mail" />
                                <p>{ "sekretariat@gpibsejahtera.or.id" }</p>
                            </Reveal>
                            <button class="button button-primary" onclick={on_whatsapp}>
                                <Icon name="message-circle" />{ "Chat WhatsApp" }
                            </button>
                            <div class="social-row">
                                { social_button("facebook") }
                                { social_button("instagram") }
                                { social_button("youtube") }
                                { social_button("twitter") }
                            </div>
                        </div>
                        <ContactForm notify={notify} outbox={(*outbox).clone()} />
                    </div>
                </Reveal>
            </section>

            <NotificationHost notices={board.notices.clone()} on_dismiss={dismiss} />
        </>
    }
}
