//! Fixed-schema result records and the `Team` column normalization rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Medal won by an entry. The source spells "no medal" as `NA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    #[serde(rename = "NA")]
    None,
}

impl Medal {
    /// The label used in the source file and in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
            Medal::None => "NA",
        }
    }

    /// True for Gold, Silver and Bronze.
    pub fn is_medal(&self) -> bool {
        !matches!(self, Medal::None)
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Medal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gold" => Ok(Medal::Gold),
            "Silver" => Ok(Medal::Silver),
            "Bronze" => Ok(Medal::Bronze),
            "NA" => Ok(Medal::None),
            other => Err(format!("unknown medal '{}'", other)),
        }
    }
}

/// An opaque column value the reports never look at.
///
/// Digit-only text is coerced to an integer once at load time; anything else
/// (including `NA` and decimals such as `80.5`) stays text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

impl FieldValue {
    pub fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = raw.parse::<i64>() {
                return FieldValue::Int(n);
            }
        }
        FieldValue::Text(raw.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// One athlete-event-country-year entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Athlete name
    pub name: String,
    /// Team as written in the source, e.g. `United States-1`
    pub team: String,
    /// National Olympic Committee code, e.g. `USA`
    pub noc: String,
    pub year: u32,
    /// Edition label, e.g. `2008 Summer`
    pub games: String,
    pub city: String,
    pub sport: String,
    pub medal: Medal,
    /// Remaining columns in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, FieldValue)>,
}

impl ResultRecord {
    /// First `-` segment of the team, the form country tokens are matched against.
    pub fn team_prefix(&self) -> &str {
        team_prefix(&self.team)
    }

    /// Normalized country name used for display and grouping.
    pub fn display_name(&self) -> &str {
        display_name(&self.team)
    }

    pub fn has_medal(&self) -> bool {
        self.medal.is_medal()
    }

    /// Look up one of the opaque columns by header name.
    pub fn extra_field(&self, column: &str) -> Option<&FieldValue> {
        self.extra
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
}

/// First segment of `team` split on `-`.
///
/// `"United States-1"` becomes `"United States"`, while
/// `"Serbia/Montenegro-2"` keeps its slash: `"Serbia/Montenegro"`.
pub fn team_prefix(team: &str) -> &str {
    team.split('-').next().unwrap_or(team)
}

/// Country display name derived from `team`.
///
/// Splits on `/` first, then on `-`; the first segment wins each time. Several
/// raw team strings collapse onto one display name, so grouping by country
/// must always go through this function.
pub fn display_name(team: &str) -> &str {
    let head = team.split('/').next().unwrap_or(team);
    team_prefix(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_parse() {
        assert_eq!("Gold".parse::<Medal>().unwrap(), Medal::Gold);
        assert_eq!("Silver".parse::<Medal>().unwrap(), Medal::Silver);
        assert_eq!("Bronze".parse::<Medal>().unwrap(), Medal::Bronze);
        assert_eq!("NA".parse::<Medal>().unwrap(), Medal::None);
        assert!("gold".parse::<Medal>().is_err());
        assert!("".parse::<Medal>().is_err());
    }

    #[test]
    fn test_medal_is_medal() {
        assert!(Medal::Gold.is_medal());
        assert!(Medal::Bronze.is_medal());
        assert!(!Medal::None.is_medal());
        assert_eq!(Medal::None.to_string(), "NA");
    }

    #[test]
    fn test_field_value_coercion() {
        assert_eq!(FieldValue::parse("24"), FieldValue::Int(24));
        assert_eq!(FieldValue::parse("0"), FieldValue::Int(0));
        assert_eq!(FieldValue::parse("NA"), FieldValue::Text("NA".to_string()));
        assert_eq!(FieldValue::parse("80.5"), FieldValue::Text("80.5".to_string()));
        assert_eq!(FieldValue::parse("-3"), FieldValue::Text("-3".to_string()));
        assert_eq!(FieldValue::parse(""), FieldValue::Text(String::new()));
    }

    #[test]
    fn test_field_value_overflow_stays_text() {
        let huge = "99999999999999999999999";
        assert_eq!(FieldValue::parse(huge), FieldValue::Text(huge.to_string()));
    }

    #[test]
    fn test_serialized_forms() {
        assert_eq!(serde_json::to_string(&Medal::None).unwrap(), "\"NA\"");
        assert_eq!(serde_json::to_string(&Medal::Gold).unwrap(), "\"Gold\"");
        assert_eq!(serde_json::to_string(&FieldValue::Int(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&FieldValue::Text("M".to_string())).unwrap(),
            "\"M\""
        );
    }

    #[test]
    fn test_team_prefix() {
        assert_eq!(team_prefix("United States-1"), "United States");
        assert_eq!(team_prefix("China"), "China");
        assert_eq!(team_prefix("Serbia/Montenegro-2"), "Serbia/Montenegro");
        assert_eq!(team_prefix(""), "");
    }

    #[test]
    fn test_display_name_slash_before_hyphen() {
        assert_eq!(display_name("United States-1"), "United States");
        assert_eq!(display_name("Serbia/Montenegro-2"), "Serbia");
        assert_eq!(display_name("Czechoslovakia"), "Czechoslovakia");
        assert_eq!(display_name("A-B/C"), "A");
    }

    #[test]
    fn test_many_teams_one_display_name() {
        let teams = ["Germany", "Germany-1", "Germany-2", "Germany/Austria"];
        assert!(teams.iter().all(|t| display_name(t) == "Germany"));
    }
}
