//! Regional poll map for the 2026 local elections.

pub mod data;
pub mod model;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{Duration, NaiveDate};
use htmlize::escape_text;
use tracing::{debug, info};

use crate::error::{MapError, MapResult};
use crate::geo::LatLng;
use crate::map::{BaseMap, CircleStyle, Corner, Element, Layer, MapDocument, Popup, Shape, Tiles};
pub use data::load;
use model::{Candidate, Polls, Regions};

pub const OUTPUT_FILE: &str = "election_map.html";
pub const CSV_FILE: &str = "election_polls.csv";

const TITLE: &str = "2026 지방선거 여론조사 시각화";
const FALLBACK_COLOR: &str = "#999";
const MIN_RADIUS: f64 = 10.0;

/// Party colors in legend order
const PARTY_COLORS: &[(&str, &str, &str)] = &[
    ("민주당", "#3b82f6", "민주당 우위 지역"),
    ("국민의힘", "#ef4444", "국민의힘 우위 지역"),
    ("기타", "#8b949e", "기타 후보 우위"),
];

pub fn party_color(party: &str) -> &'static str {
    PARTY_COLORS
        .iter()
        .find(|(name, _, _)| *name == party)
        .map(|(_, color, _)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Most recent survey of a region
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatestSurvey<'a> {
    pub date: &'a str,
    pub candidates: &'a [Candidate],
}

/// Latest survey per region code.
///
/// Dates are ISO strings, so lexical order is chronological. Among surveys
/// on the same date the first one in the timeline wins.
pub fn latest_surveys(polls: &Polls) -> HashMap<&str, LatestSurvey<'_>> {
    let mut latest: HashMap<&str, LatestSurvey<'_>> = HashMap::new();
    for entry in &polls.timeline {
        for survey in &entry.surveys {
            let newer = latest
                .get(survey.region_code.as_str())
                .map_or(true, |current| entry.date.as_str() > current.date);
            if newer {
                latest.insert(
                    &survey.region_code,
                    LatestSurvey {
                        date: &entry.date,
                        candidates: &survey.candidates,
                    },
                );
            }
        }
    }
    latest
}

/// Candidate with the strictly highest rate; ties go to the earlier one
pub fn leading_candidate(candidates: &[Candidate]) -> Option<&Candidate> {
    let mut iter = candidates.iter();
    let first = iter.next()?;
    Some(iter.fold(first, |best, c| if c.rate > best.rate { c } else { best }))
}

/// Marker radius in pixels for the leading rate
pub fn marker_radius(rate: f64) -> f64 {
    (rate / 2.0).max(MIN_RADIUS)
}

/// Survey results of one region over time
#[derive(Clone, Debug, PartialEq)]
pub struct RegionPoll {
    pub date: String,
    pub candidates: Vec<Candidate>,
}

/// Timeline of one region in timeline order
pub fn region_timeline(polls: &Polls, region_code: &str) -> Vec<RegionPoll> {
    polls
        .timeline
        .iter()
        .filter_map(|entry| {
            entry
                .surveys
                .iter()
                .find(|s| s.region_code == region_code)
                .map(|s| RegionPoll {
                    date: entry.date.clone(),
                    candidates: s.candidates.clone(),
                })
        })
        .collect()
}

/// Keep entries within `days` of the newest date; `days <= 0` keeps all.
///
/// Entries whose date does not parse as `YYYY-MM-DD` are dropped.
pub fn filter_timeline_by_days(timeline: &[RegionPoll], days: i64) -> Vec<RegionPoll> {
    if days <= 0 {
        return timeline.to_vec();
    }

    let dated: Vec<(NaiveDate, &RegionPoll)> = timeline
        .iter()
        .filter_map(|p| {
            NaiveDate::parse_from_str(&p.date, "%Y-%m-%d")
                .ok()
                .map(|d| (d, p))
        })
        .collect();
    let Some(newest) = dated.iter().map(|(d, _)| *d).max() else {
        return timeline.to_vec();
    };
    let cutoff = Duration::try_days(days)
        .and_then(|span| newest.checked_sub_signed(span))
        .unwrap_or(NaiveDate::MIN);

    dated
        .into_iter()
        .filter(|(d, _)| *d >= cutoff)
        .map(|(_, p)| p.clone())
        .collect()
}

/// Mean support of one candidate across a timeline
#[derive(Clone, Debug, PartialEq)]
pub struct Support {
    pub name: String,
    pub party: String,
    pub rate: f64,
}

/// Mean rate per candidate, rounded to one decimal, in first-seen order
pub fn average_support(timeline: &[RegionPoll]) -> Vec<Support> {
    let mut sums: Vec<(String, String, f64, u32)> = Vec::new();
    for entry in timeline {
        for cand in &entry.candidates {
            match sums.iter_mut().find(|(name, ..)| *name == cand.name) {
                Some((_, _, sum, count)) => {
                    *sum += cand.rate;
                    *count += 1;
                }
                None => sums.push((cand.name.clone(), cand.party.clone(), cand.rate, 1)),
            }
        }
    }

    sums.into_iter()
        .map(|(name, party, sum, count)| Support {
            name,
            party,
            rate: (sum / count as f64 * 10.0).round() / 10.0,
        })
        .collect()
}

/// Every candidate row of every survey as CSV
pub fn export_csv(regions: &Regions, polls: &Polls) -> String {
    let mut csv = String::from("날짜,지역,후보자,정당,지지도(%)\n");
    for entry in &polls.timeline {
        for survey in &entry.surveys {
            let region = regions
                .name_of(&survey.region_code)
                .unwrap_or(&survey.region_code);
            for cand in &survey.candidates {
                csv.push_str(&format!(
                    "{},{},{},{},{}\n",
                    quote(&entry.date),
                    quote(region),
                    quote(&cand.name),
                    quote(&cand.party),
                    cand.rate
                ));
            }
        }
    }
    csv
}

/// Write [`export_csv`] output to `path`
pub fn save_csv(regions: &Regions, polls: &Polls, path: &Path) -> MapResult<()> {
    fs::write(path, export_csv(regions, polls)).map_err(|source| MapError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "saved poll table");
    Ok(())
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Popup listing candidates from highest to lowest rate
pub fn popup_html(region_name: &str, candidates: &[Candidate], survey_date: &str) -> String {
    let mut sorted: Vec<&Candidate> = candidates.iter().collect();
    sorted.sort_by(|a, b| b.rate.total_cmp(&a.rate));

    let mut html = format!(
        "<div style=\"font-family:'Malgun Gothic',sans-serif;width:280px;\">\
         <h3 style=\"margin:5px 0;color:#333;\">{}</h3><hr style=\"margin:5px 0;\">\
         <table style=\"width:100%;border-collapse:collapse;font-size:12px;\">\
         <tr style=\"background:#f5f5f5;\"><td style=\"padding:3px;\"><strong>조사일</strong></td>\
         <td style=\"padding:3px;text-align:right;\">{}</td></tr>",
        escape_text(region_name),
        escape_text(survey_date),
    );
    for cand in sorted {
        html.push_str(&format!(
            "<tr><td style=\"padding:3px;\">{} ({})</td>\
             <td style=\"padding:3px;text-align:right;\"><strong style=\"color:{};\">{:.1}%</strong></td></tr>",
            escape_text(cand.name.as_str()),
            escape_text(cand.party.as_str()),
            party_color(&cand.party),
            cand.rate,
        ));
    }
    html.push_str("</table></div>");
    html
}

/// Build the poll map: one layer per province with a current leader
pub fn build_map(regions: &Regions, polls: &Polls) -> MapDocument {
    let base = BaseMap {
        center: LatLng::new(36.3, 127.8),
        zoom: 7,
        tiles: Tiles::CartoDbPositron,
    };
    let mut doc = MapDocument::new(TITLE, base).with_layer_control(Corner::TopRight, false);

    // One layer per province, colored by its current leader
    let latest = latest_surveys(polls);
    for province in &regions.provinces {
        let Some(survey) = latest.get(province.code.as_str()) else {
            debug!(region = %province.name, "no survey");
            continue;
        };
        let Some(leader) = leading_candidate(survey.candidates) else {
            continue;
        };

        let color = party_color(&leader.party);
        let mut layer = Layer::new(format!("📍 {}", province.name));
        layer.push(
            Element::new(Shape::CircleMarker {
                at: LatLng::new(province.lat, province.lng),
                style: CircleStyle {
                    radius: marker_radius(leader.rate),
                    color: color.to_string(),
                    fill_color: color.to_string(),
                    fill_opacity: 0.7,
                    weight: 2.0,
                    opacity: 1.0,
                },
            })
            .with_popup(Popup::new(
                popup_html(&province.name, survey.candidates, survey.date),
                300,
            )),
        );
        doc.add_layer(layer);
    }

    // Panels
    doc.add_overlay(legend_html(&polls.meta.last_update));
    doc.add_overlay(title_html());
    doc.add_overlay(info_html());

    info!(regions = doc.layers().len(), "election map composed");
    doc
}

fn legend_html(last_update: &str) -> String {
    let mut items = String::new();
    for (_, color, label) in PARTY_COLORS {
        items.push_str(&format!(
            "<div style=\"margin-bottom:8px;\"><span style=\"display:inline-block;width:12px;height:12px;\
             background-color:{color};border-radius:50%;margin-right:5px;\"></span>\
             <strong>{label}</strong></div>"
        ));
    }
    format!(
        "<div id=\"legend\" style=\"position:fixed;bottom:50px;right:10px;width:280px;\
         background-color:white;border:2px solid grey;z-index:9999;font-size:14px;padding:10px;\
         border-radius:5px;font-family:'Malgun Gothic',sans-serif;\">\
         <h4 style=\"margin:0 0 10px 0;padding-bottom:5px;border-bottom:1px solid #ddd;\">⚡ 범례</h4>\
         {items}<hr style=\"margin:8px 0;border:none;border-top:1px solid #ddd;\">\
         <div style=\"font-size:12px;color:#666;\"><strong>마커 크기:</strong> 최고 지지율에 비례<br>\
         <strong>마지막 업데이트:</strong> {}</div></div>",
        escape_text(last_update)
    )
}

fn title_html() -> String {
    format!(
        "<div id=\"title\" style=\"position:fixed;top:10px;left:50px;background-color:white;\
         border:2px solid grey;z-index:9999;font-size:18px;padding:15px;border-radius:5px;\
         font-family:'Malgun Gothic',sans-serif;font-weight:bold;\">📊 {TITLE}</div>"
    )
}

fn info_html() -> String {
    "<div id=\"info\" style=\"position:fixed;top:70px;right:10px;width:280px;background-color:white;\
     border:1px solid #ddd;z-index:9999;font-size:12px;padding:10px;border-radius:5px;\
     font-family:'Malgun Gothic',sans-serif;\"><strong>사용 방법:</strong><br>\
     1. 오른쪽 목록에서 지역 레이어를 켜고 끕니다<br>\
     2. 지도의 마커를 클릭하면 상세 정보를 봅니다</div>"
        .to_string()
}
