//! Attendance detail page
//!
//! Reads `?whatsapp=` from the location, fetches every month on record for
//! that number and renders the selected month.

use absen_types::{
    short_date, AttendanceRecord, DayStatus, DetailState, DetailView, LookupQuery, RequestSeq,
    PORTAL_YEAR,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::use_session;
use crate::utils::{clock, dom};
use crate::Route;

#[function_component(AbsenPage)]
pub fn absen_page() -> Html {
    let context = use_session();
    let navigator = use_navigator();
    let location = use_location();
    let phone = location
        .and_then(|l| l.query::<LookupQuery>().ok())
        .and_then(|q| q.phone().map(str::to_string));

    let state = {
        let phone = phone.clone();
        use_state(move || DetailState::start(phone.as_deref()))
    };
    let seq = use_state(RequestSeq::new);

    {
        let state = state.clone();
        let seq = (*seq).clone();
        use_effect_with(phone, move |phone| {
            let phone = phone.clone();
            state.set(DetailState::start(phone.as_deref()));
            if let Some(phone) = phone {
                let ticket = seq.begin();
                spawn_local(async move {
                    let outcome = context.api.check_attendance(&phone).await;
                    if seq.is_current(ticket) {
                        if let Err(e) = &outcome {
                            log::error!("Attendance lookup failed: {}", e);
                        }
                        state.set(DetailState::resolve(outcome));
                    }
                });
            }
            || ()
        });
    }

    let go_home = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    match &*state {
        DetailState::Loading => html! {
            <div class="page-loading">
                <div class="spinner"></div>
                <p class="loading-title">{ "Memuat Data" }</p>
                <p class="muted">{ "Mengambil riwayat kehadiran Anda..." }</p>
            </div>
        },
        DetailState::NoIdentifier => html! {
            <div class="page-error">
                <p>{ state.error_message().unwrap_or_default() }</p>
                <button class="btn-primary" onclick={go_home}>{ "← Kembali" }</button>
            </div>
        },
        DetailState::Failed(message) => html! {
            <div class="page-error">
                <p class="error-title">{ message }</p>
                <p class="muted">{ "Pastikan nomor WhatsApp Anda benar dan terdaftar di sistem." }</p>
                <button class="btn-primary" onclick={go_home}>{ "← Cari Kembali" }</button>
            </div>
        },
        DetailState::Loaded(view) => {
            let on_month_change = {
                let state = state.clone();
                let view = view.clone();
                Callback::from(move |e: Event| {
                    let mut next = view.clone();
                    if next.select(&dom::select_value(&e)) {
                        state.set(DetailState::Loaded(next));
                    }
                })
            };
            render_detail(view, on_month_change, go_home)
        }
    }
}

fn render_detail(view: &DetailView, on_month_change: Callback<Event>, go_home: Callback<MouseEvent>) -> Html {
    let record = view.current();
    let month = view.selected_month();
    let rows = view.rows();

    html! {
        <div class="detail-page">
            <header class="detail-header">
                <div class="detail-title">
                    <button class="btn-icon" onclick={go_home}>{ "←" }</button>
                    <div>
                        <h1>{ "Detail Absensi" }</h1>
                        <p class="muted">{ "Riwayat kehadiran mentee" }</p>
                    </div>
                </div>
                <select class="month-select" onchange={on_month_change}>
                    { for view.months().into_iter().map(|m| html! {
                        <option key={m} value={m.to_string()} selected={m == month}>
                            { format!("{} {}", m, PORTAL_YEAR) }
                        </option>
                    }) }
                </select>
            </header>

            { render_profile(record) }

            <div class="stat-grid four">
                { stat_tile("present", "Hadir", record.summary.present.to_string(), "Sesi") }
                { stat_tile("excused", "Izin / Sakit", record.summary.excused.to_string(), "Sesi") }
                { stat_tile("absent", "Alpha", record.summary.absent.to_string(), "Sesi") }
                { stat_tile("total", "Persentase", format!("{}%", record.display_percent()), "Kehadiran") }
            </div>

            <section class="card">
                <div class="card-header">
                    <div>
                        <h3>{ "Riwayat Kehadiran" }</h3>
                        <p class="muted">{ format!("Bulan {} {}", month, PORTAL_YEAR) }</p>
                    </div>
                    <span class="count-badge">{ format!("{} hari", rows.len()) }</span>
                </div>
                if rows.is_empty() {
                    <div class="empty-state">
                        <p>{ "Belum ada data absensi untuk bulan ini." }</p>
                    </div>
                } else {
                    <ul class="day-list">
                        { for rows.iter().map(|(day, raw, status)| html! {
                            <li key={day.to_string()} class="day-row">
                                <div class="day-cell">
                                    <span class="day-number">{ *day }</span>
                                    <span class="day-date">{ format!("{} {}, {}", month, day, PORTAL_YEAR) }</span>
                                </div>
                                { status_badge(raw, status) }
                            </li>
                        }) }
                    </ul>
                }
            </section>

            <footer class="page-footer">
                { format!("© {} Infinite Learning Indonesia. All rights reserved.", clock::current_year()) }
            </footer>
        </div>
    }
}

fn render_profile(record: &AttendanceRecord) -> Html {
    let fields = [
        ("Institusi", &record.institution),
        ("Program", &record.program),
        ("Jenjang", &record.level),
        ("Mentor", &record.mentor),
    ];
    let synced = record
        .last_fetched_at
        .map(|at| short_date(at, clock::local_offset()))
        .unwrap_or_else(|| "-".to_string());

    html! {
        <section class="profile-card">
            <div class="profile-banner">
                <div class="avatar large">{ record.initial() }</div>
                <div class="profile-identity">
                    <h2>{ &record.name }</h2>
                    <p>{ &record.program }</p>
                    <div class="profile-tags">
                        <span class="batch-badge">{ record.batch_label() }</span>
                        <span class="sync-date">{ format!("Sync: {}", synced) }</span>
                    </div>
                </div>
            </div>
            <div class="profile-fields">
                { for fields.iter().map(|(label, value)| html! {
                    <div class="profile-field" key={*label}>
                        <p class="field-label">{ *label }</p>
                        <p class="field-value">{ value.as_str() }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn stat_tile(tone: &'static str, label: &'static str, value: String, unit: &'static str) -> Html {
    html! {
        <div class={classes!("stat-tile", tone)}>
            <p class="tile-label">{ label }</p>
            <p class="tile-value">{ value }</p>
            <p class="tile-unit">{ unit }</p>
        </div>
    }
}

fn status_badge(raw: &str, status: &DayStatus) -> Html {
    match status.badge_class() {
        Some(class) => html! { <span class={class}>{ status.label().to_string() }</span> },
        None => html! { <span class="status-plain">{ raw.to_string() }</span> },
    }
}
