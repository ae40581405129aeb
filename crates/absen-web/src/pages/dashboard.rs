//! Admin Dashboard
//!
//! Sidebar shell hosting the overview, sync, program, history and settings
//! tabs. Global stats are fetched on mount and again after every successful
//! sync; sync state survives tab switches.

use absen_types::{
    ApiError, LastSync, RequestSeq, SessionAction, StatsData, SyncAction, SyncControl, SyncResult,
    Tab, Ticket,
};
use yew::prelude::*;
use yew_router::prelude::*;

use super::history::HistoryPanel;
use super::settings::SettingsPanel;
use super::sync::SyncPanel;
use crate::components::{count_or_dots, DataViewer, ProgramStats, Sidebar, StatCard};
use crate::session::SessionContext;
use crate::Route;

pub enum DashboardMsg {
    SessionChanged(SessionContext),
    SelectTab(Tab),
    ToggleMenu(bool),
    RefreshStats,
    StatsLoaded(Ticket, Result<StatsData, ApiError>),
    SelectMonth(String),
    StartSync,
    SyncFinished(Result<SyncResult, ApiError>),
    Logout,
    LoggedOut,
}

pub struct Dashboard {
    tab: Tab,
    menu_open: bool,
    stats: Option<StatsData>,
    stats_loading: bool,
    stats_seq: RequestSeq,
    sync: SyncControl,
    session: Option<SessionContext>,
    _session_listener: Option<ContextHandle<SessionContext>>,
}

impl Component for Dashboard {
    type Message = DashboardMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, listener) = ctx
            .link()
            .context::<SessionContext>(ctx.link().callback(DashboardMsg::SessionChanged))
            .map_or((None, None), |(session, listener)| (Some(session), Some(listener)));

        ctx.link().send_message(DashboardMsg::RefreshStats);

        Self {
            tab: Tab::default(),
            menu_open: false,
            stats: None,
            stats_loading: true,
            stats_seq: RequestSeq::new(),
            sync: SyncControl::default(),
            session,
            _session_listener: listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DashboardMsg::SessionChanged(session) => {
                self.session = Some(session);
                true
            }
            DashboardMsg::SelectTab(tab) => {
                self.tab = tab;
                self.menu_open = false;
                true
            }
            DashboardMsg::ToggleMenu(open) => {
                self.menu_open = open;
                true
            }
            DashboardMsg::RefreshStats => {
                let Some(session) = self.session.clone() else {
                    return false;
                };
                self.stats_loading = true;
                let ticket = self.stats_seq.begin();
                ctx.link().send_future(async move {
                    DashboardMsg::StatsLoaded(ticket, session.api.stats(None).await)
                });
                true
            }
            DashboardMsg::StatsLoaded(ticket, outcome) => {
                if !self.stats_seq.is_current(ticket) {
                    return false;
                }
                self.stats_loading = false;
                match outcome {
                    Ok(stats) => self.stats = Some(stats),
                    Err(e) => log::error!("Failed to fetch stats: {}", e),
                }
                true
            }
            DashboardMsg::SelectMonth(month) => {
                self.sync.apply(SyncAction::SelectMonth(month));
                true
            }
            DashboardMsg::StartSync => {
                if !self.sync.can_start() {
                    return false;
                }
                let Some(session) = self.session.clone() else {
                    return false;
                };
                self.sync.apply(SyncAction::Start);

                let month = self.sync.month.clone();
                log::info!("Starting sync for {}", month);
                ctx.link().send_future(async move {
                    DashboardMsg::SyncFinished(session.api.sync_month(&month).await)
                });
                true
            }
            DashboardMsg::SyncFinished(outcome) => {
                let succeeded = outcome.is_ok();
                if let Err(e) = &outcome {
                    log::error!("Sync failed: {}", e);
                }
                self.sync.apply(SyncAction::Finished(outcome));
                if succeeded {
                    ctx.link().send_message(DashboardMsg::RefreshStats);
                }
                true
            }
            DashboardMsg::Logout => {
                let Some(session) = self.session.clone() else {
                    ctx.link().send_message(DashboardMsg::LoggedOut);
                    return false;
                };
                ctx.link().send_future(async move {
                    if let Err(e) = session.api.logout().await {
                        log::warn!("Logout call failed, leaving anyway: {}", e);
                    }
                    session.dispatch(SessionAction::SignedOut);
                    DashboardMsg::LoggedOut
                });
                false
            }
            DashboardMsg::LoggedOut => {
                match ctx.link().navigator() {
                    Some(navigator) => navigator.push(&Route::Login),
                    None => log::error!("No router available after logout"),
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let user = self.session.as_ref().and_then(SessionContext::user);

        let sidebar = html! {
            <Sidebar
                active={self.tab}
                user={user.clone()}
                on_select={link.callback(DashboardMsg::SelectTab)}
                on_logout={link.callback(|_| DashboardMsg::Logout)}
            />
        };

        let chip_initial = user
            .as_ref()
            .map(|u| u.initial())
            .unwrap_or_else(|| "A".to_string());

        html! {
            <div class="dashboard">
                <aside class="sidebar desktop">{ sidebar.clone() }</aside>

                if self.menu_open {
                    <div class="sidebar-overlay">
                        <div class="backdrop" onclick={link.callback(|_| DashboardMsg::ToggleMenu(false))}></div>
                        <aside class="sidebar mobile">{ sidebar }</aside>
                    </div>
                }

                <main class="dashboard-main">
                    <header class="dashboard-header">
                        <div class="header-title">
                            <button class="btn-menu" onclick={link.callback(|_| DashboardMsg::ToggleMenu(true))}>
                                { "☰" }
                            </button>
                            <div>
                                <h2>{ self.tab.title() }</h2>
                                <p class="muted">{ self.tab.subtitle() }</p>
                            </div>
                        </div>
                        <div class="header-user">
                            <div class="avatar small">{ chip_initial }</div>
                            <span>{ user.as_ref().map(|u| u.role.label()).unwrap_or("Admin") }</span>
                        </div>
                    </header>

                    <div class="dashboard-content">
                        { self.view_tab(ctx) }
                    </div>
                </main>
            </div>
        }
    }
}

impl Dashboard {
    fn last_sync(&self) -> LastSync {
        LastSync::in_wib(self.stats.as_ref().and_then(|s| s.last_sync))
    }

    fn view_tab(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match self.tab {
            Tab::Overview => self.view_overview(ctx),
            Tab::Sync => html! {
                <SyncPanel
                    control={self.sync.clone()}
                    last_sync={self.last_sync()}
                    on_select={link.callback(DashboardMsg::SelectMonth)}
                    on_start={link.callback(|_| DashboardMsg::StartSync)}
                />
            },
            Tab::Web | Tab::Mobile | Tab::Ai => self.view_program(self.tab),
            Tab::History => html! { <HistoryPanel /> },
            Tab::Settings => html! { <SettingsPanel /> },
        }
    }

    fn view_overview(&self, ctx: &Context<Self>) -> Html {
        let loading = self.stats_loading;
        let today = self.stats.as_ref().and_then(|s| s.today.as_ref());
        let day = today
            .map(|t| format!("{} {}", t.date, t.month))
            .unwrap_or_else(|| "...".to_string());
        let month = today
            .map(|t| t.month.clone())
            .unwrap_or_else(|| "...".to_string());
        let last_sync = self.last_sync();

        let sync_value = if loading {
            "...".to_string()
        } else {
            last_sync.time.clone().unwrap_or_else(|| "N/A".to_string())
        };
        let sync_caption = if loading {
            "Memuat...".to_string()
        } else {
            last_sync.date.clone()
        };

        html! {
            <div class="tab-overview">
                <div class="stat-grid four">
                    <StatCard
                        tone="present"
                        badge="Hadir"
                        value={count_or_dots(loading, today.map(|t| t.present))}
                        caption={format!("Mentee hadir hari ini · tgl {}", day)}
                    />
                    <StatCard
                        tone="absent"
                        badge="Alpha"
                        value={count_or_dots(loading, today.map(|t| t.absent))}
                        caption={format!("Mentee alpha · tgl {}", day)}
                    />
                    <StatCard
                        tone="total"
                        badge="Total"
                        value={count_or_dots(loading, today.map(|t| t.total_mentee_this_month))}
                        caption={format!("Total mentee bulan {} (semua program)", month)}
                    />
                    <StatCard
                        tone="sync"
                        badge="Sync →"
                        value={sync_value}
                        caption={sync_caption}
                        onclick={ctx.link().callback(|_| DashboardMsg::SelectTab(Tab::Sync))}
                    />
                </div>

                <section class="card">
                    <div class="card-header">
                        <div>
                            <h3>{ "Seluruh Data Mentee" }</h3>
                            <p class="muted">{ "Daftar lengkap mentee beserta ringkasan kehadiran dari semua program." }</p>
                        </div>
                    </div>
                    <div class="card-body">
                        <DataViewer />
                    </div>
                </section>
            </div>
        }
    }

    fn view_program(&self, tab: Tab) -> Html {
        let (Some(program), Some(name)) = (tab.program(), tab.program_name()) else {
            return html! {};
        };

        html! {
            <div class="tab-program" key={program}>
                <div class="banner">
                    <h3>{ format!("Program {}", name) }</h3>
                    <p class="muted">
                        { format!("Menampilkan data kehadiran khusus mentee yang terdaftar di program {}. ", name) }
                        { "Data difilter secara otomatis berdasarkan program yang dipilih." }
                    </p>
                </div>
                <ProgramStats program={program} />
                <section class="card">
                    <div class="card-body">
                        <DataViewer key={program} program={Some(AttrValue::from(program))} />
                    </div>
                </section>
            </div>
        }
    }
}
