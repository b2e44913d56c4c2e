//! Constant tables for the grid diagram.
//!
//! Positions and routes are illustrative, not surveyed.

use crate::geo::LatLng;
use crate::map::style::{FacilityCategory, FacilityIcon, VoltageClass, VoltageStyle};

/// A generating plant
#[derive(Clone, Copy, Debug)]
pub struct PowerPlant {
    pub name: &'static str,
    pub category: FacilityCategory,
    pub at: LatLng,
    pub capacity: &'static str,
    pub units: u32,
    pub operator: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Substation {
    pub name: &'static str,
    pub category: FacilityCategory,
    pub at: LatLng,
    pub voltage_kv: u32,
    pub capacity: &'static str,
}

/// A major load center
#[derive(Clone, Copy, Debug)]
pub struct City {
    pub name: &'static str,
    pub at: LatLng,
    pub population: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct TransmissionLine {
    pub name: &'static str,
    pub voltage: VoltageClass,
    pub from: &'static str,
    pub to: &'static str,
    pub length_km: u32,
    pub path: &'static [LatLng],
}

const fn p(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng)
}

pub const VOLTAGE_STYLES: &[(VoltageClass, VoltageStyle)] = &[
    (
        VoltageClass::Kv765,
        VoltageStyle {
            color: "#DC2626",
            weight: 5.0,
            dash_array: "15 8",
            opacity: 0.9,
            label: "765kV (초고압)",
        },
    ),
    (
        VoltageClass::Kv345,
        VoltageStyle {
            color: "#EA580C",
            weight: 3.5,
            dash_array: "10 6",
            opacity: 0.85,
            label: "345kV (고압)",
        },
    ),
    (
        VoltageClass::Kv154,
        VoltageStyle {
            color: "#CA8A04",
            weight: 2.5,
            dash_array: "6 4",
            opacity: 0.75,
            label: "154kV (중압)",
        },
    ),
    (
        VoltageClass::Hvdc,
        VoltageStyle {
            color: "#7C3AED",
            weight: 4.0,
            dash_array: "12 4 4 4",
            opacity: 0.9,
            label: "HVDC (직류송전)",
        },
    ),
];

pub const FACILITY_ICONS: &[(FacilityCategory, FacilityIcon)] = &[
    (FacilityCategory::Nuclear, icon("red", "bolt", "원자력발전소")),
    (FacilityCategory::Coal, icon("darkred", "industry", "석탄화력발전소")),
    (FacilityCategory::Lng, icon("orange", "fire", "LNG발전소")),
    (FacilityCategory::Hydro, icon("blue", "tint", "수력발전소")),
    (FacilityCategory::Renewable, icon("green", "leaf", "신재생에너지")),
    (FacilityCategory::Substation765, icon("red", "circle", "765kV 변전소")),
    (FacilityCategory::Substation345, icon("orange", "circle", "345kV 변전소")),
    (FacilityCategory::City, icon("cadetblue", "building", "주요 소비지")),
];

const fn icon(color: &'static str, glyph: &'static str, label: &'static str) -> FacilityIcon {
    FacilityIcon {
        color,
        icon: glyph,
        prefix: "fa",
        label,
    }
}

const fn plant(
    name: &'static str,
    category: FacilityCategory,
    at: LatLng,
    capacity: &'static str,
    units: u32,
    operator: &'static str,
) -> PowerPlant {
    PowerPlant {
        name,
        category,
        at,
        capacity,
        units,
        operator,
    }
}

use FacilityCategory::*;

pub const POWER_PLANTS: &[PowerPlant] = &[
    plant("고리/신고리 원자력", Nuclear, p(35.316, 129.290), "10,720MW", 10, "한국수력원자력"),
    plant("한빛(영광) 원자력", Nuclear, p(35.413, 126.416), "5,900MW", 6, "한국수력원자력"),
    plant("한울(울진) 원자력", Nuclear, p(37.093, 129.383), "5,900MW", 6, "한국수력원자력"),
    plant("월성 원자력", Nuclear, p(35.714, 129.476), "4,796MW", 5, "한국수력원자력"),
    plant("새울(신한울) 원자력", Nuclear, p(37.098, 129.380), "2,800MW", 2, "한국수력원자력"),
    plant("당진 화력", Coal, p(36.975, 126.598), "6,040MW", 10, "한국동서발전"),
    plant("태안 화력", Coal, p(36.770, 126.260), "6,100MW", 10, "한국서부발전"),
    plant("보령 화력", Coal, p(36.380, 126.490), "4,000MW", 8, "한국중부발전"),
    plant("하동 화력", Coal, p(34.960, 127.880), "4,000MW", 8, "한국남부발전"),
    plant("삼천포 화력", Coal, p(34.913, 128.068), "3,240MW", 6, "한국남동발전"),
    plant("영흥 화력", Coal, p(37.240, 126.430), "5,080MW", 6, "한국남동발전"),
    plant("인천 LNG복합", Lng, p(37.455, 126.590), "3,413MW", 8, "한국중부발전"),
    plant("평택 LNG복합", Lng, p(36.970, 126.870), "1,972MW", 6, "한국중부발전"),
    plant("서인천 LNG복합", Lng, p(37.460, 126.580), "1,800MW", 5, "한국서부발전"),
    plant("양양 양수발전", Hydro, p(38.050, 128.640), "1,000MW", 4, "한국수력원자력"),
    plant("청평 수력발전", Hydro, p(37.730, 127.440), "139MW", 4, "한국수력원자력"),
    plant("제주 한림풍력", Renewable, p(33.380, 126.270), "100MW", 20, "제주에너지공사"),
];

const fn substation(
    name: &'static str,
    voltage_kv: u32,
    at: LatLng,
    capacity: &'static str,
) -> Substation {
    let category = if voltage_kv == 765 {
        Substation765
    } else {
        Substation345
    };
    Substation {
        name,
        category,
        at,
        voltage_kv,
        capacity,
    }
}

pub const SUBSTATIONS: &[Substation] = &[
    substation("신안성 변전소", 765, p(37.005, 127.183), "6,000MVA"),
    substation("신가평 변전소", 765, p(37.798, 127.505), "8,000MVA"),
    substation("신태백 변전소", 765, p(37.120, 128.900), "4,000MVA"),
    substation("북경남 변전소", 765, p(35.620, 128.850), "6,000MVA"),
    substation("신서산 변전소", 765, p(36.700, 126.580), "4,000MVA"),
    substation("동서울 변전소", 345, p(37.540, 127.080), "3,000MVA"),
    substation("서서울 변전소", 345, p(37.550, 126.870), "2,500MVA"),
    substation("신인천 변전소", 345, p(37.430, 126.650), "2,000MVA"),
    substation("신용인 변전소", 345, p(37.200, 127.100), "2,500MVA"),
    substation("대전 변전소", 345, p(36.350, 127.400), "2,000MVA"),
    substation("대구 변전소", 345, p(35.880, 128.610), "2,000MVA"),
    substation("광주 변전소", 345, p(35.170, 126.910), "1,500MVA"),
    substation("부산 변전소", 345, p(35.180, 129.050), "2,000MVA"),
];

pub const MAJOR_CITIES: &[City] = &[
    City { name: "서울/수도권", at: p(37.560, 126.970), population: "2,600만" },
    City { name: "부산", at: p(35.170, 129.070), population: "340만" },
    City { name: "대구", at: p(35.870, 128.600), population: "240만" },
    City { name: "대전/세종", at: p(36.350, 127.380), population: "200만" },
    City { name: "광주", at: p(35.160, 126.850), population: "150만" },
];

const fn line(
    name: &'static str,
    voltage: VoltageClass,
    from: &'static str,
    to: &'static str,
    length_km: u32,
    path: &'static [LatLng],
) -> TransmissionLine {
    TransmissionLine {
        name,
        voltage,
        from,
        to,
        length_km,
        path,
    }
}

use VoltageClass::{Hvdc, Kv154, Kv345, Kv765};

pub const TRANSMISSION_LINES: &[TransmissionLine] = &[
    // 765kV trunk
    line(
        "서해안 765kV (당진→신서산→신안성)", Kv765, "당진화력", "신안성변전소", 176,
        &[p(36.975, 126.598), p(36.850, 126.570), p(36.700, 126.580),
          p(36.800, 126.750), p(36.900, 126.950), p(37.005, 127.183)],
    ),
    line(
        "중부 765kV (신안성→신가평)", Kv765, "신안성변전소", "신가평변전소", 78,
        &[p(37.005, 127.183), p(37.150, 127.250), p(37.350, 127.350),
          p(37.550, 127.420), p(37.798, 127.505)],
    ),
    line(
        "동해안 765kV (한울→신태백)", Kv765, "한울원전", "신태백변전소", 47,
        &[p(37.093, 129.383), p(37.100, 129.200), p(37.110, 129.050), p(37.120, 128.900)],
    ),
    line(
        "영동 765kV (신태백→신가평)", Kv765, "신태백변전소", "신가평변전소", 155,
        &[p(37.120, 128.900), p(37.200, 128.600), p(37.350, 128.300),
          p(37.500, 128.000), p(37.650, 127.750), p(37.798, 127.505)],
    ),
    line(
        "동남 765kV (고리→북경남)", Kv765, "고리원전", "북경남변전소", 91,
        &[p(35.316, 129.290), p(35.400, 129.150), p(35.500, 129.000), p(35.620, 128.850)],
    ),
    // 345kV backbone
    line(
        "수도권 345kV 환상망 (서서울→동서울)", Kv345, "서서울변전소", "동서울변전소", 35,
        &[p(37.550, 126.870), p(37.570, 126.950), p(37.560, 127.000), p(37.540, 127.080)],
    ),
    line(
        "수도권 345kV (신인천→서서울)", Kv345, "신인천변전소", "서서울변전소", 30,
        &[p(37.430, 126.650), p(37.460, 126.720), p(37.500, 126.800), p(37.550, 126.870)],
    ),
    line(
        "경부 345kV (신안성→대전)", Kv345, "신안성변전소", "대전변전소", 110,
        &[p(37.005, 127.183), p(36.850, 127.200), p(36.700, 127.250),
          p(36.550, 127.300), p(36.350, 127.400)],
    ),
    line(
        "호남 345kV (대전→광주)", Kv345, "대전변전소", "광주변전소", 170,
        &[p(36.350, 127.400), p(36.100, 127.250), p(35.850, 127.050),
          p(35.600, 126.950), p(35.170, 126.910)],
    ),
    line(
        "경부 345kV (대전→대구)", Kv345, "대전변전소", "대구변전소", 130,
        &[p(36.350, 127.400), p(36.200, 127.600), p(36.050, 127.850),
          p(35.950, 128.150), p(35.880, 128.610)],
    ),
    line(
        "경남 345kV (대구→부산)", Kv345, "대구변전소", "부산변전소", 90,
        &[p(35.880, 128.610), p(35.750, 128.700), p(35.600, 128.800),
          p(35.400, 128.950), p(35.180, 129.050)],
    ),
    line(
        "영광-광주 345kV", Kv345, "한빛원전", "광주변전소", 85,
        &[p(35.413, 126.416), p(35.350, 126.550), p(35.280, 126.680),
          p(35.200, 126.800), p(35.170, 126.910)],
    ),
    line(
        "보령-대전 345kV", Kv345, "보령화력", "대전변전소", 95,
        &[p(36.380, 126.490), p(36.380, 126.650), p(36.370, 126.850),
          p(36.360, 127.100), p(36.350, 127.400)],
    ),
    line(
        "신안성-신용인 345kV", Kv345, "신안성변전소", "신용인변전소", 20,
        &[p(37.005, 127.183), p(37.100, 127.150), p(37.200, 127.100)],
    ),
    line(
        "영흥-신인천 345kV", Kv345, "영흥화력", "신인천변전소", 40,
        &[p(37.240, 126.430), p(37.300, 126.500), p(37.370, 126.580), p(37.430, 126.650)],
    ),
    // 154kV samples
    line(
        "하동-삼천포 154kV", Kv154, "하동화력", "삼천포화력", 25,
        &[p(34.960, 127.880), p(34.940, 127.960), p(34.913, 128.068)],
    ),
    line(
        "월성-부산 154kV", Kv154, "월성원전", "부산변전소", 60,
        &[p(35.714, 129.476), p(35.600, 129.400), p(35.450, 129.300),
          p(35.300, 129.150), p(35.180, 129.050)],
    ),
    // HVDC links to Jeju
    line(
        "해남-제주 HVDC", Hvdc, "해남", "제주", 101,
        &[p(34.570, 126.570), p(34.400, 126.520), p(34.100, 126.450),
          p(33.800, 126.400), p(33.510, 126.530)],
    ),
    line(
        "진도-제주 HVDC #2", Hvdc, "진도", "제주", 122,
        &[p(34.490, 126.260), p(34.300, 126.280), p(34.050, 126.300),
          p(33.750, 126.310), p(33.510, 126.530)],
    ),
];
