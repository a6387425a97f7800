use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse grouping used for map labels and statistics.
///
/// Variant order is display order and is also the order keyword groups are
/// tried when classifying addresses (capital first, Jeju last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroRegion {
    Capital,     // Seoul
    Gyeonggi,    // Gyeonggi + Incheon
    Gangwon,
    Chungcheong, // Chungbuk, Chungnam, Daejeon, Sejong
    Jeolla,      // Jeonbuk, Jeonnam, Gwangju
    Gyeongsang,  // Gyeongbuk, Gyeongnam, Busan, Daegu, Ulsan
    Jeju,        // island province
}

impl MacroRegion {
    pub const COUNT: usize = 7;

    pub const ALL: [MacroRegion; MacroRegion::COUNT] = [
        MacroRegion::Capital,
        MacroRegion::Gyeonggi,
        MacroRegion::Gangwon,
        MacroRegion::Chungcheong,
        MacroRegion::Jeolla,
        MacroRegion::Gyeongsang,
        MacroRegion::Jeju,
    ];

    /// Stable identifier, matching the serde representation.
    pub fn id(&self) -> &'static str {
        match self {
            MacroRegion::Capital => "capital",
            MacroRegion::Gyeonggi => "gyeonggi",
            MacroRegion::Gangwon => "gangwon",
            MacroRegion::Chungcheong => "chungcheong",
            MacroRegion::Jeolla => "jeolla",
            MacroRegion::Gyeongsang => "gyeongsang",
            MacroRegion::Jeju => "jeju",
        }
    }

    /// Label shown on the map.
    pub fn name(&self) -> &'static str {
        match self {
            MacroRegion::Capital => "서울",
            MacroRegion::Gyeonggi => "경기·인천",
            MacroRegion::Gangwon => "강원",
            MacroRegion::Chungcheong => "충청",
            MacroRegion::Jeolla => "전라",
            MacroRegion::Gyeongsang => "경상",
            MacroRegion::Jeju => "제주",
        }
    }

    /// Fill color as a CSS hex string.
    pub fn color(&self) -> &'static str {
        match self {
            MacroRegion::Capital => "#ef4444",
            MacroRegion::Gyeonggi => "#f97316",
            MacroRegion::Gangwon => "#22c55e",
            MacroRegion::Chungcheong => "#eab308",
            MacroRegion::Jeolla => "#3b82f6",
            MacroRegion::Gyeongsang => "#8b5cf6",
            MacroRegion::Jeju => "#06b6d4",
        }
    }

    /// Position in [`MacroRegion::ALL`], usable as an array index.
    #[inline]
    pub fn index(&self) -> usize { *self as usize }

    pub fn from_id(id: &str) -> Option<MacroRegion> {
        MacroRegion::ALL.into_iter().find(|region| region.id().eq_ignore_ascii_case(id.trim()))
    }
}

impl fmt::Display for MacroRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
