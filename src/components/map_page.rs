use std::rc::Rc;
use yew::prelude::*;

use super::geo_map::{GeoMap, HoverRegion};
use super::legend::PartyLegend;
use super::region_panel::RegionPanel;
use crate::codec::{decode_assignment, encode_assignment};
use crate::config::PageConfig;
use crate::csv::CsvRow;
use crate::export::{download_text_file, export_filename, now_stamp, selection_csv};
use crate::history::{CANDIDATES_LIMIT, PAST_RESULTS_LIMIT, rows_for_region};
use crate::loader;
use crate::model::{PredictionAction, PredictionState};
use crate::url_state::{query_param, replace_query_param};
use crate::util::{clog, cwarn};

#[derive(Properties, PartialEq, Clone)]
pub struct MapPageProps {
    pub config: &'static PageConfig,
}

/// One election level: map on the left, region details on the right.
#[function_component]
pub fn MapPage(props: &MapPageProps) -> Html {
    let config = props.config;
    let prediction = use_reducer(PredictionState::default);
    let hover = use_state(|| None::<HoverRegion>);
    let past_rows = use_state(|| Rc::new(Vec::<CsvRow>::new()));
    let candidate_rows = use_state(|| Rc::new(Vec::<CsvRow>::new()));

    // Regions first, then the share token is applied on top of them.
    {
        let prediction = prediction.clone();
        use_effect_with(config.regions_url, move |url| {
            let url = *url;
            let key = config.url_key;
            wasm_bindgen_futures::spawn_local(async move {
                match loader::load_regions(url).await {
                    Ok(regions) => {
                        let prior = decode_assignment(query_param(key).as_deref());
                        clog(&format!(
                            "{}: {} regions, token {}",
                            config.level.as_str(),
                            regions.len(),
                            if prior.is_some() { "applied" } else { "absent" }
                        ));
                        prediction.dispatch(PredictionAction::Init {
                            regions: Rc::new(regions),
                            prior,
                        });
                    }
                    Err(err) => cwarn(&format!("region list load failed: {err}")),
                }
            });
            || ()
        });
    }

    // History tables are optional; a missing file leaves them empty.
    {
        let past_rows = past_rows.clone();
        let candidate_rows = candidate_rows.clone();
        use_effect_with(config.level, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match loader::load_csv(config.past_results_csv_url).await {
                    Ok(rows) => past_rows.set(Rc::new(rows)),
                    Err(err) => cwarn(&format!("past results unavailable: {err}")),
                }
                match loader::load_csv(config.candidates_csv_url).await {
                    Ok(rows) => candidate_rows.set(Rc::new(rows)),
                    Err(err) => cwarn(&format!("candidates unavailable: {err}")),
                }
            });
            || ()
        });
    }

    // Mirror every change into the address bar.
    {
        let prediction = prediction.clone();
        use_effect_with(prediction.version, move |_| {
            if prediction.is_loaded() {
                replace_query_param(config.url_key, &encode_assignment(&prediction.assignment));
            }
            || ()
        });
    }

    let on_hover_region = {
        let hover = hover.clone();
        Callback::from(move |h: Option<HoverRegion>| {
            if *hover != h {
                hover.set(h);
            }
        })
    };

    let on_reset = {
        let prediction = prediction.clone();
        Callback::from(move |_: MouseEvent| prediction.dispatch(PredictionAction::Reset))
    };

    let on_download = {
        let prediction = prediction.clone();
        Callback::from(move |_: MouseEvent| {
            let csv = selection_csv(config.level, &prediction.regions, &prediction.assignment);
            let filename = export_filename(config.level, &now_stamp());
            if let Err(err) = download_text_file(&filename, &csv, "text/csv;charset=utf-8") {
                cwarn(&format!("download failed: {err:?}"));
            }
        })
    };

    let (predicted, past, candidates) = match &*hover {
        Some(h) => (
            prediction.party_for(&h.id),
            rows_for_region(&past_rows, config.level, &h.id, PAST_RESULTS_LIMIT),
            rows_for_region(&candidate_rows, config.level, &h.id, CANDIDATES_LIMIT),
        ),
        None => Default::default(),
    };
    let counts: Vec<_> = prediction.counts().into_iter().collect();

    html! {
        <section>
            <div style="background:#fff; border:1px solid #e8e8e8; border-radius:16px; padding:16px;">
                <div style="display:flex; align-items:center; justify-content:space-between; gap:8px; flex-wrap:wrap;">
                    <h2 style="margin:0; font-size:20px;">{ config.title }</h2>
                    <div style="display:flex; gap:8px;">
                        <button onclick={on_reset}>{"초기화"}</button>
                        <button onclick={on_download} disabled={!prediction.is_loaded()}>
                            {"선택 결과 CSV 다운로드"}
                        </button>
                    </div>
                </div>
                <PartyLegend {counts} />
            </div>
            <div style="display:grid; grid-template-columns:1.45fr 0.85fr; gap:14px; margin-top:14px; align-items:start;">
                <div style="background:#fff; border:1px solid #e8e8e8; border-radius:16px; overflow:hidden;">
                    <GeoMap {config} prediction={prediction.clone()} {on_hover_region} />
                </div>
                <RegionPanel
                    hover={(*hover).clone()}
                    {predicted}
                    past_results={past}
                    {candidates}
                />
            </div>
        </section>
    }
}
