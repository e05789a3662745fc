use crate::domain::element::Element;
use crate::domain::tier::Tier;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyFortuneEntry {
    pub label: String,
    pub date: NaiveDate,
    pub rating: Tier,
    pub rating_text: String,
    pub overall: String,
    pub love: String,
    pub work: String,
    pub health: String,
}

/// Seven consecutive daily entries, today first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyFortune {
    /// Derived from the birth date; does not influence any entry yet.
    pub primary_element: Element,
    pub days: Vec<DailyFortuneEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameFortuneResult {
    pub family_name_strokes: u32,
    pub given_name_strokes: u32,
    pub heaven_number: u32,
    pub earth_number: u32,
    pub person_number: u32,
    pub total_number: u32,
    pub rating: Tier,
    pub rating_text: String,
    pub overall: String,
    pub love: String,
    pub work: String,
    pub health: String,
    pub advice: String,
}
