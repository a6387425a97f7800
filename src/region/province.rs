use super::MacroRegion;

/// First-level administrative divisions of South Korea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Province {
    Seoul,
    Busan,
    Daegu,
    Incheon,
    Gwangju,
    Daejeon,
    Ulsan,
    Sejong,
    Gyeonggi,
    Gangwon,
    Chungbuk,
    Chungnam,
    Jeonbuk,
    Jeonnam,
    Gyeongbuk,
    Gyeongnam,
    Jeju,
}

impl Province {
    pub const ALL: [Province; 17] = [
        Province::Seoul,
        Province::Busan,
        Province::Daegu,
        Province::Incheon,
        Province::Gwangju,
        Province::Daejeon,
        Province::Ulsan,
        Province::Sejong,
        Province::Gyeonggi,
        Province::Gangwon,
        Province::Chungbuk,
        Province::Chungnam,
        Province::Jeonbuk,
        Province::Jeonnam,
        Province::Gyeongbuk,
        Province::Gyeongnam,
        Province::Jeju,
    ];

    /// Two-digit statistical code used by the common province boundary files.
    pub fn code(&self) -> &'static str {
        match self {
            Province::Seoul     => "11",
            Province::Busan     => "21",
            Province::Daegu     => "22",
            Province::Incheon   => "23",
            Province::Gwangju   => "24",
            Province::Daejeon   => "25",
            Province::Ulsan     => "26",
            Province::Sejong    => "29",
            Province::Gyeonggi  => "31",
            Province::Gangwon   => "32",
            Province::Chungbuk  => "33",
            Province::Chungnam  => "34",
            Province::Jeonbuk   => "35",
            Province::Jeonnam   => "36",
            Province::Gyeongbuk => "37",
            Province::Gyeongnam => "38",
            Province::Jeju      => "39",
        }
    }

    /// Accepted names: English (with and without the `-do` suffix) and Korean (full and short).
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            Province::Seoul     => &["Seoul", "서울특별시", "서울"],
            Province::Busan     => &["Busan", "부산광역시", "부산"],
            Province::Daegu     => &["Daegu", "대구광역시", "대구"],
            Province::Incheon   => &["Incheon", "인천광역시", "인천"],
            Province::Gwangju   => &["Gwangju", "광주광역시", "광주"],
            Province::Daejeon   => &["Daejeon", "대전광역시", "대전"],
            Province::Ulsan     => &["Ulsan", "울산광역시", "울산"],
            Province::Sejong    => &["Sejong", "Sejong-si", "세종특별자치시", "세종"],
            Province::Gyeonggi  => &["Gyeonggi-do", "Gyeonggi", "경기도", "경기"],
            Province::Gangwon   => &["Gangwon-do", "Gangwon", "강원도", "강원특별자치도", "강원"],
            Province::Chungbuk  => &["Chungcheongbuk-do", "Chungbuk", "충청북도", "충북"],
            Province::Chungnam  => &["Chungcheongnam-do", "Chungnam", "충청남도", "충남"],
            Province::Jeonbuk   => &["Jeollabuk-do", "Jeonbuk", "전라북도", "전북특별자치도", "전북"],
            Province::Jeonnam   => &["Jeollanam-do", "Jeonnam", "전라남도", "전남"],
            Province::Gyeongbuk => &["Gyeongsangbuk-do", "Gyeongbuk", "경상북도", "경북"],
            Province::Gyeongnam => &["Gyeongsangnam-do", "Gyeongnam", "경상남도", "경남"],
            Province::Jeju      => &["Jeju-do", "Jeju", "제주특별자치도", "제주도", "제주"],
        }
    }

    /// Macro-region this province is drawn and counted under.
    pub fn region(&self) -> MacroRegion {
        match self {
            Province::Seoul => MacroRegion::Capital,
            Province::Gyeonggi | Province::Incheon => MacroRegion::Gyeonggi,
            Province::Gangwon => MacroRegion::Gangwon,
            Province::Chungbuk | Province::Chungnam | Province::Daejeon | Province::Sejong => MacroRegion::Chungcheong,
            Province::Jeonbuk | Province::Jeonnam | Province::Gwangju => MacroRegion::Jeolla,
            Province::Gyeongbuk | Province::Gyeongnam | Province::Busan | Province::Daegu | Province::Ulsan => MacroRegion::Gyeongsang,
            Province::Jeju => MacroRegion::Jeju,
        }
    }

    /// Resolve a province by code or by any accepted name. ASCII case and surrounding whitespace are ignored.
    pub fn from_id(id: &str) -> Option<Province> {
        let id = id.trim();
        if id.is_empty() { return None }

        Province::ALL.into_iter().find(|province| {
            province.code() == id || province.names().iter().any(|name| name.eq_ignore_ascii_case(id))
        })
    }
}

/// Macro-region for a province id. Unknown ids map to `None` and must be left out of aggregation.
#[inline]
pub fn region_of(province_id: &str) -> Option<MacroRegion> {
    Province::from_id(province_id).map(|province| province.region())
}
