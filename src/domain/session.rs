use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date_value::DateValue;
use super::lenient;

/// Fixed court positions on the arc
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    LeftCorner,
    LeftWing,
    Center,
    RightWing,
    RightCorner,
    /// Position key not in the catalog (kept verbatim)
    Other(String),
}

impl Position {
    /// Fixed iteration order used for tie-breaks and display
    pub const CATALOG: [Position; 5] = [
        Position::LeftCorner,
        Position::LeftWing,
        Position::Center,
        Position::RightWing,
        Position::RightCorner,
    ];

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "left_corner" => Self::LeftCorner,
            "left_wing" => Self::LeftWing,
            "center" | "centre" | "top" => Self::Center,
            "right_wing" => Self::RightWing,
            "right_corner" => Self::RightCorner,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::LeftCorner => "left_corner",
            Self::LeftWing => "left_wing",
            Self::Center => "center",
            Self::RightWing => "right_wing",
            Self::RightCorner => "right_corner",
            Self::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::LeftCorner => "Left Corner",
            Self::LeftWing => "Left Wing",
            Self::Center => "Center",
            Self::RightWing => "Right Wing",
            Self::RightCorner => "Right Corner",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Position {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Position> for String {
    fn from(p: Position) -> Self {
        p.as_str().to_string()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Training drill kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrainingType {
    #[default]
    Spot,
    CatchShoot,
    OffDribble,
    RunHalf,
    /// Ad-hoc type (kept verbatim)
    Other(String),
}

impl TrainingType {
    /// Catalog order; also the stable category order for per-type charts
    pub const CATALOG: [TrainingType; 4] = [
        TrainingType::Spot,
        TrainingType::CatchShoot,
        TrainingType::OffDribble,
        TrainingType::RunHalf,
    ];

    /// Parse a drill type. Accepts every spelling the form has emitted over
    /// time (`catch_shoot`, `catch_n_shoot`, `Catch and shoot`, ...).
    /// Empty input is `Spot`.
    pub fn parse(s: &str) -> Self {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_").replace('&', "and");
        match normalized.as_str() {
            "" | "spot" | "spot_up" | "spot_shooting" => Self::Spot,
            "catch_shoot" | "catch_n_shoot" | "catch_and_shoot" => Self::CatchShoot,
            "off_dribble" | "off_the_dribble" => Self::OffDribble,
            "run_half" | "run_half_court" | "run_the_floor" => Self::RunHalf,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Spot => "spot",
            Self::CatchShoot => "catch_shoot",
            Self::OffDribble => "off_dribble",
            Self::RunHalf => "run_half",
            Self::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Spot => "Spot",
            Self::CatchShoot => "Catch & Shoot",
            Self::OffDribble => "Off Dribble",
            Self::RunHalf => "Run Half Court",
            Self::Other(s) => s,
        }
    }

    /// XP multiplier for the drill; unknown types score like spot shooting
    pub fn xp_multiplier(&self) -> f64 {
        match self {
            Self::Spot => 1.0,
            Self::CatchShoot => 1.05,
            Self::OffDribble => 1.2,
            Self::RunHalf => 1.5,
            Self::Other(_) => 1.0,
        }
    }
}

impl From<String> for TrainingType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<TrainingType> for String {
    fn from(t: TrainingType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for TrainingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shot distance category
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShotRange {
    Paint,
    Midrange,
    ThreePoint,
    Other(String),
}

impl ShotRange {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "paint" => Self::Paint,
            "midrange" | "mid_range" | "mid" => Self::Midrange,
            "3pt" | "3" | "three" | "three_point" | "3_point" => Self::ThreePoint,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Paint => "paint",
            Self::Midrange => "midrange",
            Self::ThreePoint => "3pt",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ShotRange {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ShotRange> for String {
    fn from(r: ShotRange) -> Self {
        r.as_str().to_string()
    }
}

impl std::fmt::Display for ShotRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Movement pattern during a round
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    Static,
    LeftToRight,
    RightToLeft,
    Other(String),
}

impl Direction {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "static" => Self::Static,
            "l→r" | "l_>r" | "l>r" | "ltr" | "l_to_r" | "left_to_right" => Self::LeftToRight,
            "r→l" | "r_>l" | "r>l" | "rtl" | "r_to_l" | "right_to_left" => Self::RightToLeft,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Static => "static",
            Self::LeftToRight => "L→R",
            Self::RightToLeft => "R→L",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Direction {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Direction> for String {
    fn from(d: Direction) -> Self {
        d.as_str().to_string()
    }
}

/// Shooting outcome at one court position within a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(default, alias = "zoneId", deserialize_with = "lenient::label")]
    pub position: Option<Position>,
    /// Authoritative range; falls back to the round's range when absent
    #[serde(default, deserialize_with = "lenient::label")]
    pub range: Option<ShotRange>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub made: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub attempts: u32,
}

impl Zone {
    pub fn new(position: Position, made: u32, attempts: u32) -> Self {
        Self {
            position: Some(position),
            range: None,
            made,
            attempts,
        }
    }

    pub fn with_range(mut self, range: ShotRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Made shots, never more than attempts
    pub fn made_clamped(&self) -> u32 {
        self.made.min(self.attempts)
    }

    /// Zone-level range, else the round's
    pub fn effective_range<'a>(&'a self, round: &'a Round) -> Option<&'a ShotRange> {
        self.range.as_ref().or(round.range.as_ref())
    }
}

/// One pass through the zones
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    #[serde(default, deserialize_with = "lenient::opt_count", skip_serializing_if = "Option::is_none")]
    pub round_index: Option<u32>,
    #[serde(default, deserialize_with = "lenient::label")]
    pub direction: Option<Direction>,
    #[serde(default, deserialize_with = "lenient::label")]
    pub range: Option<ShotRange>,
    #[serde(default, deserialize_with = "lenient::opt_count", skip_serializing_if = "Option::is_none")]
    pub shots_per_zone: Option<u32>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub zones: Vec<Zone>,
}

impl Round {
    pub fn new(direction: Direction, range: ShotRange, zones: Vec<Zone>) -> Self {
        Self {
            round_index: None,
            direction: Some(direction),
            range: Some(range),
            shots_per_zone: None,
            zones,
        }
    }

    /// Blank round as the entry form creates it: five zones, 10 attempts each, 3pt
    pub fn empty(index: u32) -> Self {
        Self {
            round_index: Some(index),
            direction: Some(Direction::Static),
            range: Some(ShotRange::ThreePoint),
            shots_per_zone: Some(DEFAULT_SHOTS_PER_ZONE),
            zones: Position::CATALOG
                .iter()
                .map(|p| Zone::new(p.clone(), 0, DEFAULT_SHOTS_PER_ZONE).with_range(ShotRange::ThreePoint))
                .collect(),
        }
    }
}

const DEFAULT_SHOTS_PER_ZONE: u32 = 10;

/// Cached made/attempts/accuracy, refreshed on every save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionTotals {
    #[serde(default, deserialize_with = "lenient::count")]
    pub made: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub attempts: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub accuracy: u32,
}

/// One practice log entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, deserialize_with = "lenient::label", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::label", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub date: Option<DateValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateValue>,
    #[serde(rename = "type", default, deserialize_with = "lenient::label_or_default")]
    pub training_type: TrainingType,
    #[serde(default, deserialize_with = "lenient::list")]
    pub rounds: Vec<Round>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub totals: SessionTotals,
    #[serde(default, deserialize_with = "lenient::opt_count", skip_serializing_if = "Option::is_none")]
    pub xp_earned: Option<u32>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: String,
}

impl Session {
    pub fn new(date: impl Into<DateValue>, training_type: TrainingType, rounds: Vec<Round>) -> Self {
        Self {
            date: Some(date.into()),
            training_type,
            rounds,
            ..Default::default()
        }
    }

    /// Fresh session for today with one blank round
    pub fn blank(user_id: &str, today: NaiveDate) -> Self {
        Self {
            user_id: Some(user_id.to_string()),
            date: Some(DateValue::Day(today)),
            rounds: vec![Round::empty(0)],
            ..Default::default()
        }
    }

    /// Calendar day of the session: `date`, then `createdAt`, then `timestamp`.
    /// The first field that resolves wins.
    pub fn day(&self) -> Option<NaiveDate> {
        [&self.date, &self.created_at, &self.timestamp]
            .into_iter()
            .find_map(|field| field.as_ref().and_then(DateValue::to_day))
    }

    /// Totals summed from rounds and zones. This, not the cached `totals`
    /// field, is what every analytics path reads.
    pub fn derived_totals(&self) -> SessionTotals {
        let (made, attempts) = self
            .rounds
            .iter()
            .flat_map(|r| r.zones.iter())
            .fold((0u32, 0u32), |(m, a), z| {
                (m.saturating_add(z.made_clamped()), a.saturating_add(z.attempts))
            });
        SessionTotals {
            made,
            attempts,
            accuracy: crate::stats::accuracy_pct(made as u64, attempts as u64),
        }
    }

    /// Fill the defaults older app versions left out and refresh `totals`.
    ///
    /// Round range falls back to the first zone's range, then `3pt`; zones
    /// inherit the round range; missing direction is `static`; missing
    /// position is `center`.
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        for (idx, round) in out.rounds.iter_mut().enumerate() {
            let round_range = round
                .range
                .clone()
                .or_else(|| round.zones.first().and_then(|z| z.range.clone()))
                .unwrap_or(ShotRange::ThreePoint);
            if round.round_index.is_none() {
                round.round_index = Some(idx as u32);
            }
            if round.direction.is_none() {
                round.direction = Some(Direction::Static);
            }
            for zone in &mut round.zones {
                if zone.position.is_none() {
                    zone.position = Some(Position::Center);
                }
                if zone.range.is_none() {
                    zone.range = Some(round_range.clone());
                }
            }
            round.range = Some(round_range);
        }
        out.totals = out.derived_totals();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_training_type_aliases() {
        assert_eq!(TrainingType::parse("catch_n_shoot"), TrainingType::CatchShoot);
        assert_eq!(TrainingType::parse("Catch & Shoot"), TrainingType::CatchShoot);
        assert_eq!(TrainingType::parse("catch and shoot"), TrainingType::CatchShoot);
        assert_eq!(TrainingType::parse("off the dribble"), TrainingType::OffDribble);
        assert_eq!(TrainingType::parse("run_half_court"), TrainingType::RunHalf);
        assert_eq!(TrainingType::parse("Run the floor"), TrainingType::RunHalf);
        assert_eq!(TrainingType::parse(""), TrainingType::Spot);
        assert_eq!(TrainingType::parse("other"), TrainingType::Other("other".into()));
    }

    #[test]
    fn test_direction_and_range_parse() {
        assert_eq!(Direction::parse("L→R"), Direction::LeftToRight);
        assert_eq!(Direction::parse("r->l"), Direction::RightToLeft);
        assert_eq!(ShotRange::parse("3PT"), ShotRange::ThreePoint);
        assert_eq!(ShotRange::parse("mid-range"), ShotRange::Midrange);
        assert_eq!(Position::parse("Left Wing"), Position::LeftWing);
    }

    #[test]
    fn test_session_from_loose_document() {
        let session: Session = serde_json::from_value(json!({
            "date": "2024-02-10",
            "type": "Off Dribble",
            "xpEarned": "88",
            "rounds": [{
                "direction": "L→R",
                "range": "midrange",
                "zones": [
                    { "position": "left_corner", "made": "4", "attempts": 10 },
                    { "zoneId": "center", "range": "3pt", "made": 12, "attempts": 10 },
                    { "position": "right_wing", "made": null, "attempts": -3 }
                ]
            }],
            "totals": { "made": 999, "attempts": 1 }
        }))
        .unwrap();

        assert_eq!(session.training_type, TrainingType::OffDribble);
        assert_eq!(session.xp_earned, Some(88));
        assert_eq!(session.day(), NaiveDate::from_ymd_opt(2024, 2, 10));
        let zones = &session.rounds[0].zones;
        assert_eq!(zones[1].position, Some(Position::Center));
        assert_eq!(zones[2].made, 0);
        assert_eq!(zones[2].attempts, 0);

        // made > attempts is clamped; cached totals are ignored
        let totals = session.derived_totals();
        assert_eq!(totals.made, 14);
        assert_eq!(totals.attempts, 20);
        assert_eq!(totals.accuracy, 70);
    }

    #[test]
    fn test_missing_type_defaults_to_spot() {
        let session: Session = serde_json::from_value(json!({ "date": "2024-02-10", "type": null })).unwrap();
        assert_eq!(session.training_type, TrainingType::Spot);
        assert!(session.rounds.is_empty());
    }

    #[test]
    fn test_normalized_fills_defaults() {
        let session: Session = serde_json::from_value(json!({
            "date": "2024-02-10",
            "rounds": [{ "zones": [{ "range": "paint", "made": 3, "attempts": 5 }, { "made": 1, "attempts": 5 }] }]
        }))
        .unwrap();

        let normalized = session.normalized();
        let round = &normalized.rounds[0];
        assert_eq!(round.direction, Some(Direction::Static));
        assert_eq!(round.range, Some(ShotRange::Paint));
        assert_eq!(round.round_index, Some(0));
        assert_eq!(round.zones[1].range, Some(ShotRange::Paint));
        assert_eq!(round.zones[1].position, Some(Position::Center));
        assert_eq!(normalized.totals.attempts, 10);
        assert_eq!(normalized.totals.made, 4);
    }

    #[test]
    fn test_day_falls_back_through_date_fields() {
        let from_created: Session = serde_json::from_value(json!({
            "date": "not a date",
            "createdAt": "2024-03-01",
            "timestamp": "2024-03-02"
        }))
        .unwrap();
        assert_eq!(from_created.day(), NaiveDate::from_ymd_opt(2024, 3, 1));

        let from_timestamp: Session =
            serde_json::from_value(json!({ "timestamp": "2024-03-02" })).unwrap();
        assert_eq!(from_timestamp.day(), NaiveDate::from_ymd_opt(2024, 3, 2));

        let undated: Session = serde_json::from_value(json!({ "timestamp": true })).unwrap();
        assert_eq!(undated.day(), None);
    }

    #[test]
    fn test_blank_session_for_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        let session = Session::blank("u1", today);
        assert_eq!(session.user_id.as_deref(), Some("u1"));
        assert_eq!(session.day(), Some(today));
        assert_eq!(session.training_type, TrainingType::Spot);
        assert_eq!(session.rounds.len(), 1);
        assert_eq!(session.derived_totals().attempts, 50);
        assert_eq!(session.xp_earned, None);
    }

    #[test]
    fn test_blank_round() {
        let round = Round::empty(2);
        assert_eq!(round.zones.len(), 5);
        assert!(round.zones.iter().all(|z| z.attempts == 10 && z.made == 0));
    }
}
