use serde::{Deserialize, Serialize};

use super::MacroRegion;

/// Keyword groups tried in order; the first group with a matching keyword wins.
/// Keywords are lowercase so they can be tested against a lowercased address.
const KEYWORD_GROUPS: [(MacroRegion, &[&str]); MacroRegion::COUNT] = [
    (MacroRegion::Capital, &["서울", "seoul"]),
    (MacroRegion::Gyeonggi, &["경기", "인천", "gyeonggi", "incheon"]),
    (MacroRegion::Gangwon, &["강원", "gangwon"]),
    (MacroRegion::Chungcheong, &[
        "충청", "충북", "충남", "대전", "세종",
        "chungcheong", "chungbuk", "chungnam", "daejeon", "sejong",
    ]),
    (MacroRegion::Jeolla, &[
        "전라", "전북", "전남", "광주",
        "jeolla", "jeonbuk", "jeonnam", "gwangju",
    ]),
    (MacroRegion::Gyeongsang, &[
        "경상", "경북", "경남", "부산", "대구", "울산",
        "gyeongsang", "gyeongbuk", "gyeongnam", "busan", "daegu", "ulsan",
    ]),
    (MacroRegion::Jeju, &["제주", "jeju"]),
];

/// Result of classifying a free-text address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressClass {
    Region(MacroRegion),
    Unclassified,
}

impl AddressClass {
    #[inline]
    pub fn region(&self) -> Option<MacroRegion> {
        match self {
            AddressClass::Region(region) => Some(*region),
            AddressClass::Unclassified => None,
        }
    }
}

/// Assign an address to a macro-region by ordered, case-insensitive substring matching.
pub fn classify(address: &str) -> AddressClass {
    let address = address.to_lowercase();
    KEYWORD_GROUPS.iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| address.contains(keyword)))
        .map_or(AddressClass::Unclassified, |&(region, _)| AddressClass::Region(region))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_follow_region_order() {
        let order = KEYWORD_GROUPS.iter().map(|(region, _)| *region).collect::<Vec<_>>();
        assert_eq!(order, MacroRegion::ALL.to_vec());
    }

    #[test]
    fn keywords_are_lowercase() {
        for (_, keywords) in KEYWORD_GROUPS {
            for keyword in keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn classifies_each_region() {
        let cases = [
            ("서울 강남구 테헤란로 1", MacroRegion::Capital),
            ("인천광역시 중구 공항로 272", MacroRegion::Gyeonggi),
            ("경기도 수원시 팔달구", MacroRegion::Gyeonggi),
            ("강원특별자치도 강릉시", MacroRegion::Gangwon),
            ("대전광역시 유성구", MacroRegion::Chungcheong),
            ("세종특별자치시 한누리대로", MacroRegion::Chungcheong),
            ("전라남도 여수시", MacroRegion::Jeolla),
            ("광주광역시 동구", MacroRegion::Jeolla),
            ("부산광역시 해운대구", MacroRegion::Gyeongsang),
            ("경상북도 경주시", MacroRegion::Gyeongsang),
            ("제주특별자치도 제주시 공항로 2", MacroRegion::Jeju),
        ];
        for (address, region) in cases {
            assert_eq!(classify(address), AddressClass::Region(region), "{address}");
        }
    }

    #[test]
    fn english_addresses_ignore_case() {
        assert_eq!(classify("12 Myeongdong-gil, Jung-gu, SEOUL"), AddressClass::Region(MacroRegion::Capital));
        assert_eq!(classify("Haeundae Beach, Busan"), AddressClass::Region(MacroRegion::Gyeongsang));
        assert_eq!(classify("Jeju International Airport"), AddressClass::Region(MacroRegion::Jeju));
    }

    #[test]
    fn capital_wins_over_later_groups() {
        assert_eq!(classify("서울특별시 종로구 경기 빌딩"), AddressClass::Region(MacroRegion::Capital));
        assert_eq!(classify("서울특별시 중구 부산빌딩 3층"), AddressClass::Region(MacroRegion::Capital));
    }

    #[test]
    fn gyeonggi_gwangju_is_not_jeolla() {
        // 광주 also names a city in Gyeonggi; the earlier group must win.
        assert_eq!(classify("경기도 광주시 오포읍"), AddressClass::Region(MacroRegion::Gyeonggi));
    }

    #[test]
    fn unmatched_addresses_are_unclassified() {
        assert_eq!(classify(""), AddressClass::Unclassified);
        assert_eq!(classify("1600 Amphitheatre Pkwy, Mountain View"), AddressClass::Unclassified);
        assert_eq!(classify("도쿄도 신주쿠구").region(), None);
    }
}
