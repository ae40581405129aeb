//! Dashboard sidebar

use absen_types::{AdminUser, Tab};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Tab,
    pub user: Option<AdminUser>,
    pub on_select: Callback<Tab>,
    pub on_logout: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let initial = props
        .user
        .as_ref()
        .map(AdminUser::initial)
        .unwrap_or_else(|| "A".to_string());
    let name = props
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Admin".to_string());
    let role = props
        .user
        .as_ref()
        .map(|u| u.role.label())
        .unwrap_or("Admin");

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <div class="sidebar-inner">
            <div class="sidebar-brand">
                <span class="brand-title">{ "Admin Panel" }</span>
                <span class="brand-subtitle">{ "Absensi Management" }</span>
            </div>

            <nav class="sidebar-nav">
                { for Tab::ALL.iter().map(|tab| {
                    let tab = *tab;
                    let active = tab == props.active;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_| on_select.emit(tab))
                    };
                    html! {
                        <>
                            if let Some(section) = tab.section() {
                                <div class="nav-section">{ section }</div>
                            }
                            <button
                                class={classes!("nav-item", active.then_some("active"))}
                                onclick={onclick}
                            >
                                <span class="nav-label">{ tab.nav_label() }</span>
                                if active {
                                    <span class="nav-chevron">{ "›" }</span>
                                }
                            </button>
                        </>
                    }
                }) }
            </nav>

            <div class="sidebar-footer">
                <div class="sidebar-user">
                    <div class="avatar">{ initial }</div>
                    <div class="user-meta">
                        <p class="user-name">{ name }</p>
                        <p class="user-role">{ role }</p>
                    </div>
                </div>
                <button class="btn-logout" onclick={on_logout}>
                    { "Keluar dari Sistem" }
                </button>
            </div>
        </div>
    }
}
