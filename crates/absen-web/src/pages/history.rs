//! Daily attendance history tab

use absen_types::{DailyHistoryRow, RequestSeq, DEFAULT_MONTH};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::MonthSelect;
use crate::session::use_session;

#[function_component(HistoryPanel)]
pub fn history_panel() -> Html {
    let context = use_session();
    let month = use_state(|| DEFAULT_MONTH.to_string());
    let rows = use_state(Vec::<DailyHistoryRow>::new);
    let total = use_state(|| 0u32);
    let loading = use_state(|| true);
    let seq = use_state(RequestSeq::new);

    {
        let rows = rows.clone();
        let total = total.clone();
        let loading = loading.clone();
        let seq = (*seq).clone();
        use_effect_with((*month).clone(), move |month| {
            let month = month.clone();
            let ticket = seq.begin();
            loading.set(true);
            spawn_local(async move {
                let outcome = context.api.history(&month, None).await;
                if !seq.is_current(ticket) {
                    log::debug!("Dropping stale history response for {}", month);
                    return;
                }
                match outcome {
                    Ok(resp) => {
                        total.set(resp.total_mentee);
                        rows.set(resp.history);
                    }
                    Err(e) => {
                        log::error!("Failed to fetch history: {}", e);
                        rows.set(Vec::new());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_month = {
        let month = month.clone();
        Callback::from(move |value: String| month.set(value))
    };

    html! {
        <div class="tab-history">
            <div class="banner">
                <h3>{ "Riwayat Kehadiran Harian" }</h3>
                <p class="muted">
                    { "Rekap jumlah mentee yang hadir, izin, dan alpha untuk setiap hari dalam bulan yang dipilih." }
                </p>
            </div>

            <section class="card">
                <div class="card-header">
                    <div class="history-controls">
                        <label>{ "Bulan:" }</label>
                        <MonthSelect value={(*month).clone()} on_change={on_month} />
                    </div>
                    if !*loading {
                        <span class="count-badge">{ format!("{} mentee", *total) }</span>
                    }
                </div>

                if *loading {
                    <div class="table-placeholder">
                        <div class="spinner"></div>
                        <p>{ "Memuat riwayat..." }</p>
                    </div>
                } else if rows.is_empty() {
                    <div class="empty-state">
                        <p>{ "Belum ada data kehadiran untuk bulan ini." }</p>
                    </div>
                } else {
                    <div class="table-wrap">
                        <table class="data-table history-table">
                            <thead>
                                <tr>
                                    <th>{ "Tanggal" }</th>
                                    <th class="center">{ "Hadir" }</th>
                                    <th class="center">{ "Izin" }</th>
                                    <th class="center">{ "Alpha" }</th>
                                    <th class="center">{ "Belum Diisi" }</th>
                                    <th>{ "% Hadir" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for rows.iter().map(render_row) }
                            </tbody>
                        </table>
                    </div>
                }
            </section>
        </div>
    }
}

fn render_row(row: &DailyHistoryRow) -> Html {
    let empty = row.is_empty();
    let rate = match (row.percent(), row.tier()) {
        (Some(pct), Some(tier)) => html! {
            <div class="progress-cell">
                <div class="progress-track">
                    <div class={classes!("progress-fill", tier.bar_class())} style={format!("width: {}%", pct)}></div>
                </div>
                <span class={classes!("progress-text", tier.text_class())}>{ format!("{}%", pct) }</span>
            </div>
        },
        _ => html! { <span class="muted">{ "-" }</span> },
    };

    html! {
        <tr key={row.day} class={classes!(empty.then_some("row-empty"))}>
            <td>{ row.label() }</td>
            <td class="center count present">{ row.present }</td>
            <td class="center count excused">{ row.excused }</td>
            <td class="center count absent">{ row.absent }</td>
            <td class="center count unfilled">{ row.unfilled }</td>
            <td>{ rate }</td>
        </tr>
    }
}
