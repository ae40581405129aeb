//! Per-program stat cards

use absen_types::{RequestSeq, StatsData};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::stat_card::{count_or_dots, StatCard};
use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct ProgramStatsProps {
    /// Program keyword passed to `/admin/stats?program=`
    pub program: AttrValue,
}

#[function_component(ProgramStats)]
pub fn program_stats(props: &ProgramStatsProps) -> Html {
    let context = use_session();
    let stats = use_state(|| None::<StatsData>);
    let loading = use_state(|| true);
    let seq = use_state(RequestSeq::new);

    {
        let stats = stats.clone();
        let loading = loading.clone();
        let seq = (*seq).clone();
        use_effect_with(props.program.clone(), move |program| {
            let program = program.to_string();
            let ticket = seq.begin();
            loading.set(true);
            spawn_local(async move {
                let outcome = context.api.stats(Some(&program)).await;
                if !seq.is_current(ticket) {
                    log::debug!("Dropping stale stats response for {}", program);
                    return;
                }
                match outcome {
                    Ok(data) => stats.set(Some(data)),
                    Err(e) => log::error!("Failed to fetch program stats for {}: {}", program, e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let today = stats.as_ref().and_then(|s| s.today.as_ref());
    let day = today
        .map(|t| t.date.to_string())
        .unwrap_or_else(|| "...".to_string());

    html! {
        <div class="stat-grid three">
            <StatCard
                tone="total"
                badge="Total"
                value={count_or_dots(*loading, today.map(|t| t.total_mentee_this_month))}
                caption="Total mentee terdaftar bulan ini"
            />
            <StatCard
                tone="present"
                badge="Hadir"
                value={count_or_dots(*loading, today.map(|t| t.present))}
                caption={format!("Mentee hadir hari ini (tgl {})", day)}
            />
            <StatCard
                tone="absent"
                badge="Alpha"
                value={count_or_dots(*loading, today.map(|t| t.absent))}
                caption={format!("Mentee alpha hari ini (tgl {})", day)}
            />
        </div>
    }
}
