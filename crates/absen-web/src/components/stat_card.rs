//! Stat card component

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    /// Colour variant: `present`, `absent`, `total` or `sync`
    pub tone: AttrValue,
    pub badge: AttrValue,
    pub value: AttrValue,
    pub caption: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let clickable = props.onclick.is_some();

    html! {
        <div
            class={classes!("stat-card", props.tone.to_string(), clickable.then_some("clickable"))}
            onclick={props.onclick.clone()}
        >
            <div class="stat-card-head">
                <span class={classes!("stat-badge", props.tone.to_string())}>{ &props.badge }</span>
            </div>
            <div class="stat-value">{ &props.value }</div>
            <p class="stat-caption">{ &props.caption }</p>
        </div>
    }
}

/// Loading placeholder used for every numeric card.
pub fn count_or_dots<T: ToString>(loading: bool, value: Option<T>) -> AttrValue {
    if loading {
        AttrValue::from("...")
    } else {
        AttrValue::from(value.map(|v| v.to_string()).unwrap_or_else(|| "0".to_string()))
    }
}
