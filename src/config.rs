use crate::model::ElectionLevel;

/// Static description of one map page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub level: ElectionLevel,
    pub title: &'static str,
    pub geo_url: &'static str,
    pub regions_url: &'static str,
    pub past_results_csv_url: &'static str,
    pub candidates_csv_url: &'static str,
    /// Query parameter carrying the share token.
    pub url_key: &'static str,
    pub enable_zoom: bool,
    /// Regions drawn but never hoverable or clickable.
    pub excluded_regions: &'static [&'static str],
}

pub static GOVERNOR: PageConfig = PageConfig {
    level: ElectionLevel::Governor,
    title: "1) 시·도지사 (광역자치단체장)",
    geo_url: "/data/governor.geojson",
    regions_url: "/data/regions-governor.json",
    past_results_csv_url: "/data/past-results-governor.csv",
    candidates_csv_url: "/data/candidates-governor.csv",
    url_key: "g",
    enable_zoom: false,
    excluded_regions: &[],
};

pub static SIGUNGU: PageConfig = PageConfig {
    level: ElectionLevel::Sigungu,
    title: "2) 시·군·구 (기초자치단체장)",
    geo_url: "/data/sigungu-basic.geojson",
    regions_url: "/data/regions-sigungu-basic.json",
    past_results_csv_url: "/data/past-results-sigungu.csv",
    candidates_csv_url: "/data/candidates-sigungu.csv",
    url_key: "s",
    enable_zoom: true,
    // 제주시, 서귀포시
    excluded_regions: &["50110", "50130"],
};

impl PageConfig {
    pub fn for_level(level: ElectionLevel) -> &'static PageConfig {
        match level {
            ElectionLevel::Governor => &GOVERNOR,
            ElectionLevel::Sigungu => &SIGUNGU,
        }
    }

    pub fn route(&self) -> &'static str {
        match self.level {
            ElectionLevel::Governor => "/governor",
            ElectionLevel::Sigungu => "/sigungu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_their_pages() {
        assert_eq!(PageConfig::for_level(ElectionLevel::Governor).url_key, "g");
        assert_eq!(PageConfig::for_level(ElectionLevel::Sigungu).url_key, "s");
        assert_eq!(SIGUNGU.route(), "/sigungu");
    }

    #[test]
    fn only_detailed_map_zooms_and_excludes() {
        assert!(!GOVERNOR.enable_zoom);
        assert!(SIGUNGU.enable_zoom);
        assert_eq!(SIGUNGU.excluded_regions, &["50110", "50130"]);
        assert!(GOVERNOR.excluded_regions.is_empty());
    }
}
