use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MapControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
    pub scale_label: String,
}

#[function_component(MapControls)]
pub fn map_controls(props: &MapControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rs = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; right:14px; top:14px; display:grid; gap:8px; z-index:10;">
        <button onclick={zi} title="확대">{"＋"}</button>
        <button onclick={zo} title="축소">{"－"}</button>
        <button onclick={rs} title="리셋">{"Reset"}</button>
        <div style="display:flex; justify-content:center; padding:4px 8px; border:1px solid #e8e8e8; border-radius:999px; font-size:12px; color:#6b7280;">
            { props.scale_label.clone() }
        </div>
    </div>}
}
