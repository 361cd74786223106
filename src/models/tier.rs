use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Named skill brackets, declared in rank order so the derived `Ord`
/// doubles as the tier ordinal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TierName {
    Unrated,
    Newbie,
    Pupil,
    Specialist,
    Expert,
    CandidateMaster,
    Master,
    InternationalMaster,
    Grandmaster,
}

impl TierName {
    pub const ALL: [TierName; 9] = [
        TierName::Unrated,
        TierName::Newbie,
        TierName::Pupil,
        TierName::Specialist,
        TierName::Expert,
        TierName::CandidateMaster,
        TierName::Master,
        TierName::InternationalMaster,
        TierName::Grandmaster,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TierName::Unrated => "Unrated",
            TierName::Newbie => "Newbie",
            TierName::Pupil => "Pupil",
            TierName::Specialist => "Specialist",
            TierName::Expert => "Expert",
            TierName::CandidateMaster => "Candidate Master",
            TierName::Master => "Master",
            TierName::InternationalMaster => "International Master",
            TierName::Grandmaster => "Grandmaster",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "unrated" => Some(TierName::Unrated),
            "newbie" => Some(TierName::Newbie),
            "pupil" => Some(TierName::Pupil),
            "specialist" => Some(TierName::Specialist),
            "expert" => Some(TierName::Expert),
            "candidatemaster" | "cm" => Some(TierName::CandidateMaster),
            "master" => Some(TierName::Master),
            "internationalmaster" | "im" => Some(TierName::InternationalMaster),
            "grandmaster" | "gm" => Some(TierName::Grandmaster),
            _ => None,
        }
    }

    /// Zero-based position in the ranking; Unrated is 0.
    pub fn rank(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for TierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An sRGB color stop. Serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TierColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TierColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for TierColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for TierColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorGradient {
    pub start: TierColor,
    pub end: TierColor,
}

/// Visual identity of a tier. All descriptors are `'static` constants
/// living in the tier table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierDescriptor {
    pub name: TierName,
    pub gradient: ColorGradient,
    pub badge: &'static str,
    pub text_color: TierColor,
}

/// Result of formatting a rating for display next to a user's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayResult {
    pub label: String,
    pub color: TierColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_name_parsing() {
        assert_eq!(TierName::from_str("expert"), Some(TierName::Expert));
        assert_eq!(TierName::from_str("Candidate Master"), Some(TierName::CandidateMaster));
        assert_eq!(TierName::from_str("international_master"), Some(TierName::InternationalMaster));
        assert_eq!(TierName::from_str("GM"), Some(TierName::Grandmaster));
        assert_eq!(TierName::from_str("legend"), None);
    }

    #[test]
    fn test_tier_rank_follows_declaration_order() {
        for (index, name) in TierName::ALL.iter().enumerate() {
            assert_eq!(name.rank(), index);
        }
        assert!(TierName::Pupil < TierName::Expert);
        assert!(TierName::Grandmaster > TierName::InternationalMaster);
    }

    #[test]
    fn test_color_hex() {
        let color = TierColor::rgb(0x1d, 0x4e, 0xd8);
        assert_eq!(color.hex(), "#1d4ed8");
        assert_eq!(color.to_string(), "#1d4ed8");
    }

    #[test]
    fn test_color_serializes_as_hex_string() {
        let json = serde_json::to_string(&TierColor::rgb(255, 0, 16)).unwrap();
        assert_eq!(json, "\"#ff0010\"");
    }
}
