use serde::Deserialize;

/// `regions.json`
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Regions {
    pub provinces: Vec<Province>,
}

impl Regions {
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.provinces
            .iter()
            .find(|p| p.code == code)
            .map(|p| p.name.as_str())
    }

    pub fn code_of(&self, name: &str) -> Option<&str> {
        self.provinces
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.code.as_str())
    }
}

/// A first-level administrative region
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Province {
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// `polls_2026.json`
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Polls {
    pub meta: PollMeta,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PollMeta {
    pub last_update: String,
}

/// All surveys published on one date
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TimelineEntry {
    pub date: String,
    pub surveys: Vec<Survey>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub region_code: String,
    pub candidates: Vec<Candidate>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub party: String,
    pub rate: f64,
}
