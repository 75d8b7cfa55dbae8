use std::rc::Rc;
use wasm_bindgen::JsCast;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, PointerEvent, ResizeObserver, WheelEvent};
use yew::prelude::*;

use super::map_controls::MapControls;
use crate::config::PageConfig;
use crate::geo::{FeatureCollection, project_features};
use crate::loader;
use crate::model::{PredictionAction, PredictionState};
use crate::state::{ClientRect, MapSurface, client_to_viewbox, layout_size};
use crate::util::{clog, cwarn};

#[derive(Clone, Debug, PartialEq)]
pub struct HoverRegion {
    pub id: String,
    pub name: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct GeoMapProps {
    pub config: &'static PageConfig,
    pub prediction: UseReducerHandle<PredictionState>,
    pub on_hover_region: Callback<Option<HoverRegion>>,
}

fn client_rect(el: &Element) -> ClientRect {
    let r = el.get_bounding_client_rect();
    ClientRect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Pointer id carried by a click, when the browser dispatches clicks as `PointerEvent`.
fn click_pointer_id(e: &MouseEvent) -> Option<i32> {
    e.dyn_ref::<PointerEvent>()
        .map(|p| p.pointer_id())
        .filter(|id| *id > 0)
}

#[function_component]
pub fn GeoMap(props: &GeoMapProps) -> Html {
    let config = props.config;
    let container_ref = use_node_ref();
    let svg_ref = use_node_ref();
    let geo = use_state(|| None::<Rc<FeatureCollection>>);
    let size = use_state(|| (900.0_f64, 600.0_f64));
    let size_ref = use_mut_ref(|| (900.0_f64, 600.0_f64));
    let surface = use_mut_ref(|| {
        MapSurface::new(config.enable_zoom, config.excluded_regions.iter().copied())
    });
    let redraw = use_force_update();

    // Fetch geometry; a new source always starts from the identity view.
    {
        let geo = geo.clone();
        let surface = surface.clone();
        use_effect_with(config.geo_url, move |url| {
            surface.borrow_mut().reset_on_load();
            let url = *url;
            wasm_bindgen_futures::spawn_local(async move {
                match loader::load_geometry(url).await {
                    Ok(fc) => {
                        clog(&format!("geometry loaded: {} features", fc.features.len()));
                        geo.set(Some(Rc::new(fc)));
                    }
                    Err(err) => cwarn(&format!("geometry load failed: {err}")),
                }
            });
            || ()
        });
    }

    // Track the container width; only the layout size changes, never the view.
    {
        let container_ref = container_ref.clone();
        let size = size.clone();
        let size_ref = size_ref.clone();
        let loaded = geo.is_some();
        use_effect_with(loaded, move |_| {
            let el = container_ref.cast::<Element>();
            let measure = {
                let el = el.clone();
                move || {
                    if let Some(el) = &el {
                        let next = layout_size(el.get_bounding_client_rect().width());
                        if *size_ref.borrow() != next {
                            *size_ref.borrow_mut() = next;
                            size.set(next);
                        }
                    }
                }
            };
            measure();
            let on_resize = Closure::wrap(Box::new(measure) as Box<dyn FnMut()>);
            let observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref()).ok();
            if let (Some(observer), Some(el)) = (&observer, &el) {
                observer.observe(el);
            }
            move || {
                if let Some(observer) = &observer {
                    observer.disconnect();
                }
                drop(on_resize);
            }
        });
    }

    // Wheel zoom needs a non-passive listener to be able to cancel page scrolling.
    {
        let svg_ref = svg_ref.clone();
        let surface = surface.clone();
        let size_ref = size_ref.clone();
        let redraw = redraw.clone();
        let loaded = geo.is_some();
        use_effect_with(loaded, move |_| {
            let listener = svg_ref.cast::<Element>().map(|svg| {
                let target = svg.clone();
                EventListener::new_with_options(
                    &target,
                    "wheel",
                    EventListenerOptions {
                        phase: EventListenerPhase::Bubble,
                        passive: false,
                    },
                    move |e: &Event| {
                        let Some(e) = e.dyn_ref::<WheelEvent>() else {
                            return;
                        };
                        let (w, h) = *size_ref.borrow();
                        let (cx, cy) = client_to_viewbox(
                            e.client_x() as f64,
                            e.client_y() as f64,
                            client_rect(&svg),
                            w,
                            h,
                        );
                        if surface.borrow_mut().wheel(cx, cy, e.delta_y()) {
                            e.prevent_default();
                            redraw.force_update();
                        }
                    },
                )
            });
            move || drop(listener)
        });
    }

    let paths = {
        let geo_ptr = geo.as_ref().map(|g| Rc::as_ptr(g) as usize);
        let geo = (*geo).clone();
        use_memo((geo_ptr, *size), move |(_, (w, h))| {
            geo.as_ref()
                .map(|fc| project_features(fc, *w, *h))
                .unwrap_or_default()
        })
    };

    if geo.is_none() {
        return html! {
            <div ref={container_ref} style="width:100%; height:600px; display:grid; place-items:center;">
                <div style="color:#6b7280;">{"지도 로딩 중…"}</div>
            </div>
        };
    }

    let onpointerdown = {
        let surface = surface.clone();
        Callback::from(move |e: PointerEvent| {
            surface
                .borrow_mut()
                .pointer_down(e.pointer_id(), e.button(), (e.client_x() as f64, e.client_y() as f64));
        })
    };
    let onpointermove = {
        let surface = surface.clone();
        let svg_ref = svg_ref.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: PointerEvent| {
            // a release outside the map never reaches us; the button mask tells
            if surface
                .borrow_mut()
                .release_if_unpressed(e.pointer_id(), e.buttons())
            {
                redraw.force_update();
                return;
            }
            let moved = surface
                .borrow_mut()
                .pointer_move(e.pointer_id(), (e.client_x() as f64, e.client_y() as f64));
            if moved {
                // capture only once dragging; capturing on down swallows path clicks
                if let Some(svg) = svg_ref.cast::<Element>() {
                    let _ = svg.set_pointer_capture(e.pointer_id());
                }
                redraw.force_update();
            }
        })
    };
    let onpointerup = {
        let surface = surface.clone();
        let svg_ref = svg_ref.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: PointerEvent| {
            let was_dragging = surface.borrow().is_dragging();
            if surface.borrow_mut().pointer_up(e.pointer_id()) {
                if let Some(svg) = svg_ref.cast::<Element>() {
                    let _ = svg.release_pointer_capture(e.pointer_id());
                }
                if was_dragging {
                    redraw.force_update();
                }
            }
        })
    };

    let zoom_cb = |f: fn(&mut MapSurface)| {
        let surface = surface.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            f(&mut surface.borrow_mut());
            redraw.force_update();
        })
    };
    let on_zoom_in = zoom_cb(|s| {
        s.zoom_in();
    });
    let on_zoom_out = zoom_cb(|s| {
        s.zoom_out();
    });
    let on_reset = zoom_cb(|s| {
        s.reset_view();
    });

    let (w, h) = *size;
    let (view, cursor, zoom_enabled) = {
        let s = surface.borrow();
        (s.view(), s.cursor(), s.zoom_enabled())
    };
    let prediction = &props.prediction;

    let region_paths = paths
        .iter()
        .map(|p| {
            let party = prediction.party_for(&p.id);
            let onmouseenter = {
                let surface = surface.clone();
                let cb = props.on_hover_region.clone();
                let hover = HoverRegion {
                    id: p.id.clone(),
                    name: p.name.clone(),
                };
                Callback::from(move |_: MouseEvent| {
                    if surface.borrow().is_interactive(&hover.id) {
                        cb.emit(Some(hover.clone()));
                    } else {
                        cb.emit(None);
                    }
                })
            };
            let onmouseleave = {
                let cb = props.on_hover_region.clone();
                Callback::from(move |_: MouseEvent| cb.emit(None))
            };
            let onclick = {
                let surface = surface.clone();
                let prediction = prediction.clone();
                let id = p.id.clone();
                Callback::from(move |e: MouseEvent| {
                    if surface.borrow().accept_click(&id, click_pointer_id(&e)) {
                        prediction.dispatch(PredictionAction::Cycle { id: id.clone() });
                    }
                })
            };
            html! {
                <path
                    key={p.id.clone()}
                    d={p.d.clone()}
                    fill={party.color()}
                    stroke="#111827"
                    stroke-opacity="0.22"
                    stroke-width="0.8"
                    style={format!("cursor:{};", cursor)}
                    {onmouseenter}
                    {onmouseleave}
                    {onclick}
                />
            }
        })
        .collect::<Html>();

    let touch_action = if zoom_enabled { "none" } else { "auto" };
    let hint = if zoom_enabled { "휠: 확대/축소 · 드래그: 이동" } else { " " };

    html! {
        <div ref={container_ref} style="width:100%; position:relative;">
            { if zoom_enabled {
                html! { <MapControls
                    on_zoom_in={on_zoom_in}
                    on_zoom_out={on_zoom_out}
                    on_reset={on_reset}
                    scale_label={view.scale_label()}
                /> }
            } else { html! {} } }
            <svg
                ref={svg_ref}
                width="100%"
                height={h.to_string()}
                viewBox={format!("0 0 {} {}", w, h)}
                role="img"
                aria-label={config.title}
                style={format!("touch-action:{};", touch_action)}
                {onpointerdown}
                {onpointermove}
                onpointerup={onpointerup.clone()}
                onpointercancel={onpointerup}
            >
                <rect x="0" y="0" width={w.to_string()} height={h.to_string()} fill="#ffffff" rx="16" />
                <g transform={view.svg_transform()}>
                    { region_paths }
                </g>
                <text x="18" y="30" font-size="14" fill="#111" font-weight="900">{ config.title }</text>
                <text x="18" y="50" font-size="12" fill="#6b7280">{ hint }</text>
            </svg>
        </div>
    }
}
