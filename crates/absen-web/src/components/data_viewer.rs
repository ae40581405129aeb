//! Paginated mentee table
//!
//! Fetches one page of `/admin/data` whenever the page or the program filter
//! changes. With a fixed program the filter dropdown is hidden.

use absen_types::{MenteeSummary, PageCursor, ProgramFilter, RequestSeq};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::session::use_session;
use crate::utils::dom;

#[derive(Properties, PartialEq)]
pub struct DataViewerProps {
    /// Fixed program keyword; hides the filter control when set
    #[prop_or_default]
    pub program: Option<AttrValue>,
}

#[function_component(DataViewer)]
pub fn data_viewer(props: &DataViewerProps) -> Html {
    let context = use_session();
    let filter = use_state(|| ProgramFilter::from_option(props.program.as_deref()));
    let cursor = use_state(PageCursor::default);
    let rows = use_state(Vec::<MenteeSummary>::new);
    let total = use_state(|| 0u64);
    let programs = use_state(Vec::<String>::new);
    let loading = use_state(|| true);
    let seq = use_state(RequestSeq::new);

    {
        let cursor = cursor.clone();
        let rows = rows.clone();
        let total = total.clone();
        let programs = programs.clone();
        let loading = loading.clone();
        let seq = (*seq).clone();
        let current = *cursor;
        use_effect_with(((*filter).clone(), cursor.page()), move |(filter, page)| {
            let (filter, page) = (filter.clone(), *page);
            let ticket = seq.begin();
            loading.set(true);
            spawn_local(async move {
                let outcome = context.api.mentee_page(&filter, page).await;
                if !seq.is_current(ticket) {
                    log::debug!("Dropping stale page {} response", page);
                    return;
                }
                match outcome {
                    Ok(resp) => {
                        total.set(resp.total_records());
                        if let Some(options) = resp.program_options() {
                            programs.set(options.to_vec());
                        }
                        cursor.set(current.with_total_pages(resp.meta.total_pages));
                        rows.set(resp.data);
                    }
                    Err(e) => log::error!("Failed to load data: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_program_change = {
        let filter = filter.clone();
        let cursor = cursor.clone();
        Callback::from(move |e: Event| {
            let value = dom::select_value(&e);
            filter.set(ProgramFilter::from_option(Some(&value)));
            cursor.set(cursor.reset());
        })
    };

    let on_prev = {
        let cursor = cursor.clone();
        Callback::from(move |_| {
            if let Some(prev) = cursor.prev() {
                cursor.set(prev);
            }
        })
    };

    let on_next = {
        let cursor = cursor.clone();
        Callback::from(move |_| {
            if let Some(next) = cursor.next() {
                cursor.set(next);
            }
        })
    };

    let fixed = props.program.is_some();
    let heading = match &props.program {
        Some(program) => format!("Mentee {}", program),
        None => "Semua Mentee".to_string(),
    };

    html! {
        <div class="data-viewer">
            <div class="data-viewer-header">
                <div class="title-row">
                    <h2>{ heading }</h2>
                    if !*loading {
                        <span class="count-badge">{ format!("{} data", *total) }</span>
                    }
                </div>
                if !fixed {
                    <select class="program-select" onchange={on_program_change}>
                        <option value={ProgramFilter::ALL} selected={*filter == ProgramFilter::All}>
                            { "Semua Program" }
                        </option>
                        { for programs.iter().map(|p| html! {
                            <option
                                key={p.clone()}
                                value={p.clone()}
                                selected={filter.option_value() == p.as_str()}
                            >
                                { p }
                            </option>
                        }) }
                    </select>
                }
            </div>

            <div class="table-wrap">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Informasi Mentee" }</th>
                            <th>{ "Program" }</th>
                            <th>{ "Periode" }</th>
                            <th>{ "Tingkat Kehadiran" }</th>
                            <th class="right">{ "Detail (H / I / A)" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        if *loading {
                            <tr>
                                <td colspan="5" class="table-placeholder">
                                    <div class="spinner"></div>
                                    <p>{ "Memuat data..." }</p>
                                    <p class="muted">{ "Mengambil data mentee terbaru dari database" }</p>
                                </td>
                            </tr>
                        } else if rows.is_empty() {
                            <tr>
                                <td colspan="5" class="table-placeholder">
                                    <p>{ "Data Tidak Ditemukan" }</p>
                                    <p class="muted">
                                        { "Tidak ada data mentee untuk filter yang dipilih." }
                                        if !fixed {
                                            { " Coba ubah filter program." }
                                        }
                                    </p>
                                </td>
                            </tr>
                        } else {
                            { for rows.iter().map(render_row) }
                        }
                    </tbody>
                </table>
            </div>

            if !*loading && !rows.is_empty() {
                <div class="pagination">
                    <p class="muted">
                        { format!("Menampilkan halaman {} dari {} halaman", cursor.page(), cursor.total_pages()) }
                    </p>
                    <div class="pager">
                        <button class="btn-page" disabled={!cursor.has_prev()} onclick={on_prev}>
                            { "‹ Sebelumnya" }
                        </button>
                        <span class="page-indicator">
                            { format!("{} / {}", cursor.page(), cursor.total_pages()) }
                        </span>
                        <button class="btn-page" disabled={!cursor.has_next()} onclick={on_next}>
                            { "Berikutnya ›" }
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}

fn render_row(item: &MenteeSummary) -> Html {
    let tier = item.tier();
    let percent = item.summary.percent;

    html! {
        <tr key={item.id.clone()}>
            <td>
                <div class="mentee-cell">
                    <div class="avatar small">{ item.initials() }</div>
                    <div class="mentee-meta">
                        <span class="mentee-name">{ &item.name }</span>
                        <span class="mentee-institution">{ &item.institution }</span>
                    </div>
                </div>
            </td>
            <td><span class="program-badge">{ &item.program }</span></td>
            <td><span class="period">{ &item.month }</span></td>
            <td>
                <div class="progress-cell" title={tier.label()}>
                    <div class="progress-track">
                        <div
                            class={classes!("progress-fill", tier.bar_class())}
                            style={format!("width: {}%", percent.clamp(0.0, 100.0))}
                        ></div>
                    </div>
                    <span class={classes!("progress-text", tier.text_class())}>
                        { format!("{}%", percent) }
                    </span>
                </div>
            </td>
            <td class="right">
                <span class="count present">{ item.summary.present }</span>
                <span class="sep">{ "/" }</span>
                <span class="count excused">{ item.summary.excused }</span>
                <span class="sep">{ "/" }</span>
                <span class="count absent">{ item.summary.absent }</span>
            </td>
        </tr>
    }
}
