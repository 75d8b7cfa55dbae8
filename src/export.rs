use wasm_bindgen::{JsCast, JsValue};

use crate::csv::{CsvRow, to_csv};
use crate::model::{Assignment, ElectionLevel, Region};

pub const EXPORT_HEADER: [&str; 5] = [
    "level",
    "region_id",
    "region_name",
    "selected_party",
    "selected_party_label",
];

/// One row per region, in region-list order.
pub fn selection_csv(level: ElectionLevel, regions: &[Region], assignment: &Assignment) -> String {
    let rows: Vec<CsvRow> = regions
        .iter()
        .map(|r| {
            let party = assignment.get(&r.id).copied().unwrap_or_default();
            [
                ("level", level.as_str()),
                ("region_id", r.id.as_str()),
                ("region_name", r.name.as_str()),
                ("selected_party", party.key()),
                ("selected_party_label", party.label()),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
        })
        .collect();
    to_csv(&rows, &EXPORT_HEADER)
}

/// Local-time stamp `YYYY-MM-DD_HHMM`.
pub fn stamp(year: u32, month: u32, day: u32, hour: u32, minute: u32) -> String {
    format!("{year}-{month:02}-{day:02}_{hour:02}{minute:02}")
}

pub fn export_filename(level: ElectionLevel, stamp: &str) -> String {
    format!("selection_{}_{}.csv", level.as_str(), stamp)
}

pub fn now_stamp() -> String {
    let d = js_sys::Date::new_0();
    stamp(d.get_full_year(), d.get_month() + 1, d.get_date(), d.get_hours(), d.get_minutes())
}

/// Offer `content` as a file download through a temporary object URL.
pub fn download_text_file(filename: &str, content: &str, mime: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let opts = web_sys::BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::parse_csv;
    use crate::model::Party;

    fn regions() -> Vec<Region> {
        ["A", "B", "C"]
            .iter()
            .map(|id| Region {
                id: id.to_string(),
                name: format!("{id}구"),
            })
            .collect()
    }

    #[test]
    fn one_row_per_region_with_defaults() {
        let mut a = Assignment::new();
        a.insert("A".into(), Party::Cho);
        let text = selection_csv(ElectionLevel::Sigungu, &regions(), &a);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("level,region_id,region_name,selected_party,selected_party_label")
        );
        assert_eq!(lines.next(), Some("sigungu,A,A구,CHO,조국혁신당"));
        assert_eq!(lines.next(), Some("sigungu,B,B구,TOSSUP,미정"));
        assert_eq!(lines.next(), Some("sigungu,C,C구,TOSSUP,미정"));
        assert_eq!(lines.next(), None);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn names_with_commas_survive_export() {
        let regions = vec![Region {
            id: "1".into(),
            name: "중구, \"구\"".into(),
        }];
        let text = selection_csv(ElectionLevel::Governor, &regions, &Assignment::new());
        let back = parse_csv(&text);
        assert_eq!(back[0]["region_name"], "중구, \"구\"");
        assert_eq!(back[0]["selected_party"], "TOSSUP");
    }

    #[test]
    fn filename_format() {
        assert_eq!(stamp(2026, 6, 3, 9, 5), "2026-06-03_0905");
        assert_eq!(
            export_filename(ElectionLevel::Governor, "2026-06-03_0905"),
            "selection_governor_2026-06-03_0905.csv"
        );
    }
}
