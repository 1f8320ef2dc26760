//! Client-side booking wizard state.
//!
//! These types mirror the multi-step wizard in the SPA and feed the pricing
//! engine. They are transient — only the fields the server resolves itself
//! end up on a [`super::booking::BookingRecord`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A full wizard submission: who is booking, what they picked, and the
/// session logistics.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BookingRequest {
    pub contact: Contact,
    pub selection: Selection,
    pub details: Details,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Contact {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub audience_type: AudienceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AudienceType {
    Individual,
    Family,
    Organization,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Selection {
    /// Lab catalog ID, e.g. `"c1"`.
    pub class_id: String,
    /// Bare calendar date, e.g. `"2024-11-01"`.
    pub date: String,
    pub format: SessionFormat,
    pub time_slot: TimeSlot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    pub selected_kits: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SessionFormat {
    Online,
    InHome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Details {
    pub headcount: u32,
    pub zip_code: String,
    pub address: String,
    pub kitchen_notes: String,
    pub allergies: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_slot: Option<String>,
    pub consent: bool,
    pub participant_age_group: AgeGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parental_supervision_consent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_tools_consent: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeGroup {
    Kids,
    Teens,
    Adults,
}
