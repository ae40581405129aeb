//! Public lookup page
//!
//! Takes a WhatsApp number and hands it to the detail page as `?whatsapp=`.

use absen_types::LookupQuery;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::utils::{clock, dom};
use crate::Route;

const FEATURES: [(&str, &str); 3] = [
    ("Real-time", "Data kehadiran diperbarui secara berkala"),
    ("Statistik", "Ringkasan persentase kehadiran otomatis"),
    ("Aman", "Akses data hanya dengan nomor terdaftar"),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigator = use_navigator();
    let whatsapp = use_state(String::new);
    let loading = use_state(|| false);

    let on_input = {
        let whatsapp = whatsapp.clone();
        Callback::from(move |e: InputEvent| whatsapp.set(dom::input_value(&e)))
    };

    let on_submit = {
        let whatsapp = whatsapp.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(query) = LookupQuery::from_input(&whatsapp) else {
                return;
            };
            let Some(navigator) = &navigator else {
                log::error!("No router available for lookup navigation");
                return;
            };
            loading.set(true);
            if let Err(e) = navigator.push_with_query(&Route::Absen, &query) {
                log::error!("Failed to open detail page: {}", e);
                loading.set(false);
            }
        })
    };

    html! {
        <div class="lookup-page">
            <div class="lookup-column">
                <div class="lookup-card">
                    <div class="lookup-header">
                        <h1>{ "Portal Absensi" }</h1>
                        <p class="muted">
                            { "Pantau kehadiran dan performa belajar Anda secara real-time. Masukkan nomor WhatsApp terdaftar untuk memulai." }
                        </p>
                        <span class="cohort-tag">{ "Infinite Learning Indonesia · Batch 10" }</span>
                    </div>

                    <form onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="whatsapp">{ "Nomor WhatsApp" }</label>
                            <input
                                id="whatsapp"
                                type="tel"
                                placeholder="Contoh: 08123456789"
                                value={(*whatsapp).clone()}
                                oninput={on_input}
                                required={true}
                            />
                            <p class="hint">{ "Pastikan nomor WA aktif dan sesuai dengan data pendaftaran." }</p>
                        </div>

                        <button type="submit" class="btn-primary" disabled={*loading}>
                            if *loading {
                                { "Memproses..." }
                            } else {
                                { "Lihat Riwayat Absensi →" }
                            }
                        </button>
                    </form>
                </div>

                <div class="feature-grid">
                    { for FEATURES.iter().map(|(title, desc)| html! {
                        <div class="feature-card" key={*title}>
                            <p class="feature-title">{ *title }</p>
                            <p class="feature-desc">{ *desc }</p>
                        </div>
                    }) }
                </div>

                <footer class="page-footer">
                    { format!("© {} Infinite Learning Indonesia. All rights reserved.", clock::current_year()) }
                </footer>
            </div>
        </div>
    }
}
