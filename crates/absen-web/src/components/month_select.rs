//! Month dropdown over the fixed catalogue

use absen_types::MONTHS;
use yew::prelude::*;

use crate::utils::dom;

#[derive(Properties, PartialEq)]
pub struct MonthSelectProps {
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(MonthSelect)]
pub fn month_select(props: &MonthSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| on_change.emit(dom::select_value(&e)))
    };

    html! {
        <select class="month-select" {onchange} disabled={props.disabled}>
            { for MONTHS.iter().map(|m| html! {
                <option key={m.code} value={m.code} selected={props.value == m.code}>
                    { m.display() }
                </option>
            }) }
        </select>
    }
}
