//! Airtable sync tab

use absen_types::{LastSync, SyncControl, SyncResult};
use yew::prelude::*;

use crate::components::MonthSelect;

#[derive(Properties, PartialEq)]
pub struct SyncPanelProps {
    pub control: SyncControl,
    pub last_sync: LastSync,
    pub on_select: Callback<String>,
    pub on_start: Callback<()>,
}

#[function_component(SyncPanel)]
pub fn sync_panel(props: &SyncPanelProps) -> Html {
    let control = &props.control;
    let on_start = {
        let on_start = props.on_start.clone();
        Callback::from(move |_: MouseEvent| on_start.emit(()))
    };

    html! {
        <div class="tab-sync">
            <div class="banner">
                <h3>{ "Sinkronisasi Data Airtable" }</h3>
                <p class="muted">
                    { "Tarik data kehadiran terbaru dari Airtable ke database portal untuk bulan yang dipilih." }
                </p>
                <div class="sync-meta">
                    <span>{ format!("Terakhir sync: {}", props.last_sync.date) }</span>
                    if let Some(time) = &props.last_sync.time {
                        <span>{ format!("Pukul {} WIB", time) }</span>
                    }
                </div>
            </div>

            <section class="card">
                <div class="card-header">
                    <h3>{ "Pilih Periode Bulan" }</h3>
                </div>
                <div class="card-body sync-form">
                    <div class="form-group">
                        <label>{ "Bulan Target" }</label>
                        <MonthSelect
                            value={control.month.clone()}
                            on_change={props.on_select.clone()}
                            disabled={control.loading}
                        />
                    </div>
                    <button class="btn-primary" disabled={!control.can_start()} onclick={on_start}>
                        if control.loading {
                            <span class="spinner inline"></span>
                            { "Menyinkronkan..." }
                        } else {
                            { "Mulai Sinkronisasi" }
                        }
                    </button>
                </div>
            </section>

            if let Some(error) = &control.error {
                <div class="alert error">
                    <p class="alert-title">{ "Sinkronisasi Gagal" }</p>
                    <p>{ error }</p>
                    <p class="muted">{ "Pastikan server backend berjalan dan koneksi ke Airtable aktif." }</p>
                </div>
            }

            if let Some(result) = &control.result {
                { render_result(result) }
            }
        </div>
    }
}

fn render_result(result: &SyncResult) -> Html {
    let counts = [
        ("Total Diambil", result.stats.total_fetched, "total"),
        ("Data Baru", result.stats.inserted, "present"),
        ("Diperbarui", result.stats.updated, "sync"),
    ];

    html! {
        <>
            <div class="alert success">
                <p class="alert-title">{ "Sinkronisasi Berhasil!" }</p>
                if let Some(message) = &result.message {
                    <p>{ message }</p>
                }
            </div>

            <div class="stat-grid three">
                { for counts.iter().map(|(label, value, tone)| html! {
                    <div class={classes!("stat-tile", *tone)} key={*label}>
                        <p class="tile-label">{ *label }</p>
                        <p class="tile-value">{ *value }</p>
                    </div>
                }) }
            </div>

            if result.has_problems() {
                <section class="card problems">
                    <div class="card-header">
                        <div>
                            <h3>{ "Laporan Masalah" }</h3>
                            <p class="muted">{ "Beberapa record memerlukan perhatian lebih lanjut." }</p>
                        </div>
                    </div>
                    <div class="card-body">
                        if !result.skipped_records.is_empty() {
                            <h4>{ format!("Record Dilewati ({})", result.skipped_records.len()) }</h4>
                            <ul class="problem-list">
                                { for result.skipped_records.iter().enumerate().map(|(i, r)| html! {
                                    <li key={i}>
                                        <span class="problem-name">{ &r.name }</span>
                                        <span class="muted">{ &r.reason }</span>
                                    </li>
                                }) }
                            </ul>
                        }
                        if !result.duplicate_records.is_empty() {
                            <h4>{ format!("Nomor WA Duplikat ({})", result.duplicate_records.len()) }</h4>
                            <ul class="problem-list">
                                { for result.duplicate_records.iter().enumerate().map(|(i, r)| html! {
                                    <li key={i}>
                                        <span class="problem-name">{ &r.name }</span>
                                        <span class="muted">{ &r.whatsapp }</span>
                                    </li>
                                }) }
                            </ul>
                        }
                    </div>
                </section>
            }
        </>
    }
}
