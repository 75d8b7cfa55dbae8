use yew::prelude::*;

use crate::model::{LEGEND_ORDER, Party};

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub color: &'static str,
    pub label: &'static str,
    pub count: usize,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    html! { <span style="display:inline-flex; align-items:center; gap:6px; padding:4px 10px; border:1px solid #e8e8e8; border-radius:999px;"> <span style={format!("display:inline-block; width:10px; height:10px; background:{}; border:1px solid #ddd; border-radius:999px;", props.color)}></span> <b>{ props.label }</b> <span style="color:#6b7280;">{ props.count }</span> </span> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PartyLegendProps {
    /// Regions per party; parties missing from the list show 0.
    pub counts: Vec<(Party, usize)>,
}

#[function_component]
pub fn PartyLegend(props: &PartyLegendProps) -> Html {
    let count_of = |p: Party| {
        props
            .counts
            .iter()
            .find(|(q, _)| *q == p)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    };
    html! {<div style="display:flex; align-items:center; gap:8px; margin-top:12px; flex-wrap:wrap;">
        { for LEGEND_ORDER.iter().map(|p| html! {
            <LegendRow key={p.key()} color={p.color()} label={p.label()} count={count_of(*p)} />
        }) }
        <span style="display:inline-flex; gap:6px; padding:4px 10px; border:1px solid #e8e8e8; border-radius:999px;">
            <span style="color:#6b7280;">{"클릭 순서:"}</span>{" 의석순"}
        </span>
    </div>}
}
