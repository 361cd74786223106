use crate::models::{ColorGradient, TierColor, TierDescriptor, TierName};

/// Placeholder color for a rating that is missing altogether.
pub const NEUTRAL_COLOR: TierColor = TierColor::rgb(0x9c, 0xa3, 0xaf);

/// Label shown instead of a number when there is no rating.
pub const MISSING_LABEL: &str = "—";

pub static UNRATED: TierDescriptor = TierDescriptor {
    name: TierName::Unrated,
    gradient: ColorGradient {
        start: TierColor::rgb(0xd1, 0xd5, 0xdb),
        end: TierColor::rgb(0x6b, 0x72, 0x80),
    },
    badge: "🔘",
    text_color: TierColor::rgb(0x6b, 0x72, 0x80),
};

pub static GRANDMASTER: TierDescriptor = TierDescriptor {
    name: TierName::Grandmaster,
    gradient: ColorGradient {
        start: TierColor::rgb(0xf8, 0x71, 0x71),
        end: TierColor::rgb(0xb9, 0x1c, 0x1c),
    },
    badge: "🏆",
    text_color: TierColor::rgb(0xdc, 0x26, 0x26),
};

/// Exclusive upper bound of every finite bracket, ascending. Ratings at or
/// above the last bound are Grandmaster.
pub static TIER_TABLE: [(f64, TierDescriptor); 7] = [
    (
        800.0,
        TierDescriptor {
            name: TierName::Newbie,
            gradient: ColorGradient {
                start: TierColor::rgb(0xe5, 0xe7, 0xeb),
                end: TierColor::rgb(0x9c, 0xa3, 0xaf),
            },
            badge: "🌱",
            text_color: TierColor::rgb(0x4b, 0x55, 0x63),
        },
    ),
    (
        1000.0,
        TierDescriptor {
            name: TierName::Pupil,
            gradient: ColorGradient {
                start: TierColor::rgb(0x4a, 0xde, 0x80),
                end: TierColor::rgb(0x16, 0xa3, 0x4a),
            },
            badge: "🟢",
            text_color: TierColor::rgb(0x15, 0x80, 0x3d),
        },
    ),
    (
        1200.0,
        TierDescriptor {
            name: TierName::Specialist,
            gradient: ColorGradient {
                start: TierColor::rgb(0x22, 0xd3, 0xee),
                end: TierColor::rgb(0x08, 0x91, 0xb2),
            },
            badge: "🔵",
            text_color: TierColor::rgb(0x0e, 0x74, 0x90),
        },
    ),
    (
        1400.0,
        TierDescriptor {
            name: TierName::Expert,
            gradient: ColorGradient {
                start: TierColor::rgb(0x60, 0xa5, 0xfa),
                end: TierColor::rgb(0x25, 0x63, 0xeb),
            },
            badge: "⚡",
            text_color: TierColor::rgb(0x1d, 0x4e, 0xd8),
        },
    ),
    (
        1600.0,
        TierDescriptor {
            name: TierName::CandidateMaster,
            gradient: ColorGradient {
                start: TierColor::rgb(0xc0, 0x84, 0xfc),
                end: TierColor::rgb(0x93, 0x33, 0xea),
            },
            badge: "🥈",
            text_color: TierColor::rgb(0x7e, 0x22, 0xce),
        },
    ),
    (
        1900.0,
        TierDescriptor {
            name: TierName::Master,
            gradient: ColorGradient {
                start: TierColor::rgb(0xfc, 0xd3, 0x4d),
                end: TierColor::rgb(0xd9, 0x77, 0x06),
            },
            badge: "🥇",
            text_color: TierColor::rgb(0xb4, 0x53, 0x09),
        },
    ),
    (
        2200.0,
        TierDescriptor {
            name: TierName::InternationalMaster,
            gradient: ColorGradient {
                start: TierColor::rgb(0xfb, 0x92, 0x3c),
                end: TierColor::rgb(0xea, 0x58, 0x0c),
            },
            badge: "🔥",
            text_color: TierColor::rgb(0xc2, 0x41, 0x0c),
        },
    ),
];

/// One row of the tier table with its half-open rating bracket.
/// Unrated has no bracket; Grandmaster has no upper bound.
#[derive(Debug, Clone, Copy)]
pub struct TierBracket {
    pub descriptor: &'static TierDescriptor,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl TierBracket {
    pub fn contains(&self, rating: f64) -> bool {
        match (self.lower, self.upper) {
            (None, None) => !rating.is_finite() || rating <= 0.0,
            (lower, upper) => {
                rating.is_finite()
                    && rating > 0.0
                    && lower.map_or(true, |l| rating >= l)
                    && upper.map_or(true, |u| rating < u)
            }
        }
    }

    /// Interval notation matching `contains`, e.g. `(0, 800)`, `[1400, 1600)`,
    /// `[2200, ∞)`. Ratings are real numbers, so bounds are never shifted.
    pub fn range_label(&self) -> String {
        match (self.lower, self.upper) {
            (None, None) => "≤ 0".to_string(),
            (None, Some(upper)) => format!("(0, {})", upper),
            (Some(lower), Some(upper)) => format!("[{}, {})", lower, upper),
            (Some(lower), None) => format!("[{}, ∞)", lower),
        }
    }
}

/// All tiers in rank order, Unrated first.
pub fn tier_table() -> impl Iterator<Item = TierBracket> {
    let unrated = TierBracket {
        descriptor: &UNRATED,
        lower: None,
        upper: None,
    };

    let finite = TIER_TABLE.iter().enumerate().map(|(index, (upper, descriptor))| {
        let lower = index
            .checked_sub(1)
            .and_then(|previous| TIER_TABLE.get(previous))
            .map(|(bound, _)| *bound);
        TierBracket {
            descriptor,
            lower,
            upper: Some(*upper),
        }
    });

    let top = TierBracket {
        descriptor: &GRANDMASTER,
        lower: TIER_TABLE.last().map(|(bound, _)| *bound),
        upper: None,
    };

    std::iter::once(unrated).chain(finite).chain(std::iter::once(top))
}

/// Bracket of a single tier.
pub fn bracket_for(name: TierName) -> TierBracket {
    tier_table()
        .find(|bracket| bracket.descriptor.name == name)
        .unwrap_or(TierBracket {
            descriptor: &UNRATED,
            lower: None,
            upper: None,
        })
}

impl TierDescriptor {
    pub fn for_name(name: TierName) -> &'static TierDescriptor {
        match name {
            TierName::Unrated => &UNRATED,
            TierName::Grandmaster => &GRANDMASTER,
            other => TIER_TABLE
                .iter()
                .map(|(_, descriptor)| descriptor)
                .find(|descriptor| descriptor.name == other)
                .unwrap_or(&UNRATED),
        }
    }
}
