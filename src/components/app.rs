use super::{map_page::MapPage, nav::Nav};
use crate::config::PageConfig;
use crate::model::ElectionLevel;
use crate::url_state::{current_path, replace_path};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Map(ElectionLevel),
}

impl View {
    pub fn from_path(path: &str) -> View {
        match path.trim_end_matches('/') {
            "/governor" => View::Map(ElectionLevel::Governor),
            "/sigungu" => View::Map(ElectionLevel::Sigungu),
            _ => View::Home,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::Map(level) => PageConfig::for_level(level).route(),
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::from_path(&current_path()));

    let navigate = {
        let view = view.clone();
        Callback::from(move |next: View| {
            if *view != next {
                replace_path(next.path());
                view.set(next);
            }
        })
    };
    let to_home = {
        let navigate = navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(View::Home);
        })
    };

    let body = match *view {
        View::Home => {
            let link = |level: ElectionLevel| {
                let navigate = navigate.clone();
                let config = PageConfig::for_level(level);
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    navigate.emit(View::Map(level));
                });
                html! {
                    <li style="margin:6px 0;">
                        <a href={config.route()} {onclick}>{ config.title }</a>
                    </li>
                }
            };
            html! {
                <div style="background:#fff; border:1px solid #e8e8e8; border-radius:16px; padding:16px;">
                    <p style="margin-top:0; color:#6b7280;">
                        {"지역을 클릭해 예상 당선 정당을 고르고, 주소를 공유하거나 CSV로 내려받을 수 있습니다."}
                    </p>
                    <ul style="padding-left:18px; margin:0;">
                        { link(ElectionLevel::Governor) }
                        { link(ElectionLevel::Sigungu) }
                    </ul>
                </div>
            }
        }
        // keyed so switching levels remounts with fresh state
        View::Map(level) => html! {
            <MapPage key={level.as_str()} config={PageConfig::for_level(level)} />
        },
    };

    html! {
        <div id="root" style="max-width:1280px; margin:0 auto; padding:18px; font-family:system-ui, sans-serif; color:#111827;">
            <h1 style="margin:0 0 12px 0; font-size:22px;">
                <a href="/" onclick={to_home} style="color:inherit; text-decoration:none;">
                    {"지방선거 인터랙티브 맵"}
                </a>
            </h1>
            <Nav current={*view} on_navigate={navigate} />
            { body }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_select_views() {
        assert_eq!(View::from_path("/governor"), View::Map(ElectionLevel::Governor));
        assert_eq!(View::from_path("/sigungu/"), View::Map(ElectionLevel::Sigungu));
        assert_eq!(View::from_path("/"), View::Home);
        assert_eq!(View::from_path("/elsewhere"), View::Home);
    }

    #[test]
    fn view_paths_round_trip() {
        for v in [
            View::Home,
            View::Map(ElectionLevel::Governor),
            View::Map(ElectionLevel::Sigungu),
        ] {
            assert_eq!(View::from_path(v.path()), v);
        }
    }
}
