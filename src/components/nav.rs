use yew::prelude::*;

use super::app::View;
use crate::model::ElectionLevel;

#[derive(Properties, PartialEq, Clone)]
pub struct NavProps {
    pub current: View,
    pub on_navigate: Callback<View>,
}

fn tab(current: &View, target: View, label: &'static str, on_navigate: &Callback<View>) -> Html {
    let active = *current == target;
    let onclick = {
        let cb = on_navigate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(target))
    };
    let style = if active {
        "background:#111827; color:#fff; border:1px solid #111827;"
    } else {
        "border:1px solid #e8e8e8;"
    };
    html! { <button {onclick} style={style}>{ label }</button> }
}

#[function_component]
pub fn Nav(props: &NavProps) -> Html {
    html! {<div style="display:flex; gap:8px; margin-bottom:14px;">
        { tab(&props.current, View::Map(ElectionLevel::Governor), "1) 시·도지사", &props.on_navigate) }
        { tab(&props.current, View::Map(ElectionLevel::Sigungu), "2) 시·군·구", &props.on_navigate) }
    </div>}
}
