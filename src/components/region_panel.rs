use crate::csv::CsvRow;
use crate::model::Party;
use yew::prelude::*;

use super::geo_map::HoverRegion;

#[derive(Properties, PartialEq, Clone)]
pub struct RegionPanelProps {
    pub hover: Option<HoverRegion>,
    pub predicted: Party,
    pub past_results: Vec<CsvRow>,
    pub candidates: Vec<CsvRow>,
}

fn cell(row: &CsvRow, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

fn history_table(rows: &[CsvRow], headers: [&'static str; 4], keys: [&'static str; 4]) -> Html {
    if rows.is_empty() {
        return html! { <div style="color:#6b7280; line-height:1.6;">{"추가예정"}</div> };
    }
    let th_style = "text-align:left; padding:6px 8px; border-bottom:1px solid #eee; font-size:12px; color:#6b7280;";
    let td_style = "padding:6px 8px; border-bottom:1px solid #f3f3f3; font-size:13px;";
    html! {
        <table style="width:100%; border-collapse:collapse;">
            <thead>
                <tr>{ for headers.iter().map(|h| html! { <th style={th_style}>{ *h }</th> }) }</tr>
            </thead>
            <tbody>
                { for rows.iter().map(|r| html! {
                    <tr>{ for keys.iter().map(|k| html! { <td style={td_style}>{ cell(r, k) }</td> }) }</tr>
                }) }
            </tbody>
        </table>
    }
}

#[function_component]
pub fn RegionPanel(props: &RegionPanelProps) -> Html {
    let section_style = "margin-top:14px;";
    let section_title_style = "font-weight:900; margin-bottom:8px;";

    let body = match &props.hover {
        None => html! { <div style="color:#6b7280;">{" "}</div> },
        Some(h) => html! {
            <>
                <div style="font-size:18px; font-weight:900;">{ h.name.clone() }</div>
                <div style={section_style}>
                    <div style="border:1px solid #e8e8e8; border-radius:14px; padding:12px;">
                        <h3 style="margin:0 0 6px 0; font-size:13px; color:#6b7280;">{"예측"}</h3>
                        <div style={format!("font-weight:700; color:{};", props.predicted.color())}>
                            { props.predicted.label() }
                        </div>
                    </div>
                </div>
                <div style={section_style}>
                    <div style={section_title_style}>{"과거 선거 결과"}</div>
                    { history_table(
                        &props.past_results,
                        ["연도", "당선", "정당", "득표율"],
                        ["year", "winner_name", "winner_party", "vote_share"],
                    ) }
                </div>
                <div style={section_style}>
                    <div style={section_title_style}>{"후보자"}</div>
                    { history_table(
                        &props.candidates,
                        ["연도", "후보", "정당", "현직"],
                        ["year", "candidate_name", "party", "incumbent"],
                    ) }
                </div>
            </>
        },
    };

    html! {
        <aside style="background:#fff; border:1px solid #e8e8e8; border-radius:16px; padding:16px;">
            <h2 style="margin-top:0; margin-bottom:10px; font-size:18px;">{"지역 상세"}</h2>
            { body }
        </aside>
    }
}
