//! Parties, regions, and the per-region prediction store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::Reducible;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Party {
    Dpk,
    Ppp,
    Jp,
    Gae,
    Cho,
    Other,
    #[default]
    Tossup,
}

/// Order a region advances through on each click.
pub const CYCLE: [Party; 7] = [
    Party::Tossup,
    Party::Dpk,
    Party::Ppp,
    Party::Cho,
    Party::Jp,
    Party::Gae,
    Party::Other,
];

/// Legend order (seat order, undecided last).
pub const LEGEND_ORDER: [Party; 7] = [
    Party::Dpk,
    Party::Ppp,
    Party::Cho,
    Party::Jp,
    Party::Gae,
    Party::Other,
    Party::Tossup,
];

impl Party {
    pub fn key(self) -> &'static str {
        match self {
            Party::Dpk => "DPK",
            Party::Ppp => "PPP",
            Party::Jp => "JP",
            Party::Gae => "GAE",
            Party::Cho => "CHO",
            Party::Other => "OTHER",
            Party::Tossup => "TOSSUP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Party::Ppp => "국민의힘",
            Party::Dpk => "더불어민주당",
            Party::Jp => "진보당",
            Party::Gae => "개혁신당",
            Party::Cho => "조국혁신당",
            Party::Other => "무소속",
            Party::Tossup => "미정",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Party::Ppp => "#e11d48",
            Party::Dpk => "#2563eb",
            Party::Jp => "#782B90",
            Party::Gae => "#FF7210",
            Party::Cho => "#06275E",
            Party::Other => "#6b7280",
            Party::Tossup => "#e5e7eb",
        }
    }

    pub fn next(self) -> Party {
        let idx = CYCLE.iter().position(|p| *p == self).unwrap_or(0);
        CYCLE[(idx + 1) % CYCLE.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionLevel {
    Governor,
    Sigungu,
}

impl ElectionLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ElectionLevel::Governor => "governor",
            ElectionLevel::Sigungu => "sigungu",
        }
    }
}

/// One selectable region. Extra fields in the source JSON are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
}

pub type Assignment = BTreeMap<String, Party>;

/// Every region at the undecided default.
pub fn empty_assignment(regions: &[Region]) -> Assignment {
    regions
        .iter()
        .map(|r| (r.id.clone(), Party::Tossup))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionState {
    pub regions: Rc<Vec<Region>>,
    pub assignment: Assignment,
    /// Bumped on every change; cheap dependency for effects.
    pub version: u64,
}

impl PredictionState {
    pub fn party_for(&self, id: &str) -> Party {
        self.assignment.get(id).copied().unwrap_or_default()
    }

    pub fn is_loaded(&self) -> bool {
        !self.regions.is_empty()
    }

    pub fn counts(&self) -> BTreeMap<Party, usize> {
        let mut c: BTreeMap<Party, usize> = LEGEND_ORDER.iter().map(|p| (*p, 0)).collect();
        for p in self.assignment.values() {
            *c.entry(*p).or_insert(0) += 1;
        }
        c
    }
}

#[derive(Clone, Debug)]
pub enum PredictionAction {
    /// Region list arrived; overlay a decoded share token if any.
    Init {
        regions: Rc<Vec<Region>>,
        prior: Option<Assignment>,
    },
    Cycle {
        id: String,
    },
    Reset,
}

impl Reducible for PredictionState {
    type Action = PredictionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PredictionAction::*;
        let mut new = (*self).clone();
        match action {
            Init { regions, prior } => {
                let mut assignment = empty_assignment(&regions);
                if let Some(prior) = prior {
                    for (id, party) in prior {
                        // ids outside the region list are dropped
                        if let Some(slot) = assignment.get_mut(&id) {
                            *slot = party;
                        }
                    }
                }
                new.regions = regions;
                new.assignment = assignment;
            }
            Cycle { id } => {
                let next = new.party_for(&id).next();
                new.assignment.insert(id, next);
            }
            Reset => {
                new.assignment = empty_assignment(&new.regions);
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(ids: &[&str]) -> Rc<Vec<Region>> {
        Rc::new(
            ids.iter()
                .map(|id| Region {
                    id: id.to_string(),
                    name: format!("region {id}"),
                })
                .collect(),
        )
    }

    fn init(ids: &[&str], prior: Option<Assignment>) -> Rc<PredictionState> {
        Rc::new(PredictionState::default()).reduce(PredictionAction::Init {
            regions: regions(ids),
            prior,
        })
    }

    #[test]
    fn cycle_wraps_through_all_parties() {
        let mut p = Party::Tossup;
        let mut seen = Vec::new();
        for _ in 0..CYCLE.len() {
            p = p.next();
            seen.push(p);
        }
        assert_eq!(
            seen,
            vec![
                Party::Dpk,
                Party::Ppp,
                Party::Cho,
                Party::Jp,
                Party::Gae,
                Party::Other,
                Party::Tossup
            ]
        );
    }

    #[test]
    fn three_clicks_follow_cycle_order() {
        let mut s = init(&["A", "B", "C"], None);
        assert!(s.assignment.values().all(|p| *p == Party::Tossup));
        let expected = [Party::Dpk, Party::Ppp, Party::Cho];
        for want in expected {
            s = s.reduce(PredictionAction::Cycle { id: "A".into() });
            assert_eq!(s.party_for("A"), want);
        }
        assert_eq!(s.party_for("B"), Party::Tossup);
        assert_eq!(s.party_for("C"), Party::Tossup);
    }

    #[test]
    fn init_overlays_prior_for_known_regions_only() {
        let mut prior = Assignment::new();
        prior.insert("B".into(), Party::Ppp);
        prior.insert("Z".into(), Party::Dpk);
        let s = init(&["A", "B"], Some(prior));
        assert_eq!(s.assignment.len(), 2);
        assert_eq!(s.party_for("B"), Party::Ppp);
        assert_eq!(s.party_for("A"), Party::Tossup);
        assert!(!s.assignment.contains_key("Z"));
    }

    #[test]
    fn reset_clears_everything_to_default() {
        let mut s = init(&["A", "B"], None);
        s = s.reduce(PredictionAction::Cycle { id: "A".into() });
        s = s.reduce(PredictionAction::Cycle { id: "B".into() });
        let before = s.version;
        s = s.reduce(PredictionAction::Reset);
        assert!(s.version > before);
        assert_eq!(s.assignment, empty_assignment(&s.regions));
    }

    #[test]
    fn counts_cover_every_party() {
        let mut s = init(&["A", "B", "C"], None);
        s = s.reduce(PredictionAction::Cycle { id: "A".into() });
        let c = s.counts();
        assert_eq!(c.len(), 7);
        assert_eq!(c[&Party::Dpk], 1);
        assert_eq!(c[&Party::Tossup], 2);
        assert_eq!(c[&Party::Gae], 0);
    }

    #[test]
    fn party_serializes_as_key() {
        assert_eq!(serde_json::to_string(&Party::Cho).unwrap(), "\"CHO\"");
        for p in CYCLE {
            assert_eq!(serde_json::to_string(&p).unwrap(), format!("\"{}\"", p.key()));
        }
    }

    #[test]
    fn region_ignores_extra_fields() {
        let r: Vec<Region> =
            serde_json::from_str(r#"[{"id":"11","name":"서울특별시","code":1,"extra":[1,2]}]"#)
                .unwrap();
        assert_eq!(r[0].id, "11");
        assert_eq!(r[0].name, "서울특별시");
    }
}
