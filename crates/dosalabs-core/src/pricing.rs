//! The pricing engine.
//!
//! Pure and deterministic: a wizard selection in, a whole-dollar
//! [`Quote`] out. The SPA re-runs this reactively as the guest edits the
//! form; the amount actually charged is always resolved from
//! [`crate::catalog`] at submission time.
//!
//! Travel tiers (in-home sessions):
//! 0–10 miles: free (local NJ)
//! 10–25 miles: $25 (NYC / mid NJ)
//! 25–40 miles: $50 (Long Island / upstate / deep Jersey)

use std::ops::RangeInclusive;

use jiff::civil::{Date, Weekday};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog;
use crate::models::request::{Details, Selection, SessionFormat, TimeSlot};

/// Fallback base price when the selection has no known lab yet.
pub const DEFAULT_BASE_DOLLARS: i64 = 89;

/// Kids Dosa Lab hosted in-home is priced as its own product.
const KIDS_LAB_ID: &str = "c7";
const KIDS_IN_HOME_BASE: i64 = 129;

const WEEKEND_PREMIUM: i64 = 20;

const TRAVEL_MID_FEE: i64 = 25;
const TRAVEL_FAR_FEE: i64 = 50;
const MID_NJ_ZIPS: RangeInclusive<i64> = 7_501..=8_500;
const FAR_NJ_ZIPS: RangeInclusive<i64> = 8_501..=9_999;
const NYC_ZIPS: RangeInclusive<i64> = 10_000..=11_200;

const GROUP_SURCHARGE: i64 = 40;
const LARGE_GROUP_SURCHARGE: i64 = 80;

/// A priced-out booking, in whole dollars. `total` is always
/// `base + addons`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quote {
    pub base: i64,
    pub addons: i64,
    pub total: i64,
}

/// Price a booking from the wizard state.
///
/// Surcharges accumulate independently, in order: travel fee, weekend
/// premium, headcount scaling, kit add-ons. Unknown lab IDs fall back to
/// the default base; unknown kit IDs contribute nothing.
pub fn calculate_price(selection: &Selection, details: &Details) -> Quote {
    let mut base = catalog::find_lab(&selection.class_id)
        .map(|lab| lab.price_cents / 100)
        .unwrap_or(DEFAULT_BASE_DOLLARS);

    if selection.class_id == KIDS_LAB_ID && selection.format == SessionFormat::InHome {
        base = KIDS_IN_HOME_BASE;
    }

    let mut addons = 0;

    if selection.format == SessionFormat::InHome {
        addons += travel_fee(&details.zip_code);
    }

    addons += weekend_premium(&selection.date, selection.time_slot);

    if selection.format == SessionFormat::InHome {
        addons += headcount_surcharge(details.headcount);
    }

    for kit_id in &selection.selected_kits {
        if let Some(kit) = catalog::find_kit(kit_id) {
            addons += kit.price_cents / 100;
        }
    }

    Quote {
        base,
        addons,
        total: base + addons,
    }
}

/// Distance-based travel fee, tiered by numeric ZIP. An unparseable ZIP
/// (or one outside the service area) charges nothing.
fn travel_fee(zip_code: &str) -> i64 {
    let Ok(zip) = zip_code.trim().parse::<i64>() else {
        return 0;
    };

    if FAR_NJ_ZIPS.contains(&zip) {
        TRAVEL_FAR_FEE
    } else if MID_NJ_ZIPS.contains(&zip) || NYC_ZIPS.contains(&zip) {
        TRAVEL_MID_FEE
    } else {
        0
    }
}

/// Flat premium for Saturday, Sunday, or a Friday evening slot.
///
/// The date is read as a bare calendar date — no time-zone adjustment. An
/// empty or unparseable date simply skips the premium.
fn weekend_premium(date: &str, time_slot: TimeSlot) -> i64 {
    let date_part = date.split('T').next().unwrap_or(date);
    let Ok(day) = date_part.parse::<Date>() else {
        return 0;
    };

    match day.weekday() {
        Weekday::Saturday | Weekday::Sunday => WEEKEND_PREMIUM,
        Weekday::Friday if time_slot == TimeSlot::Evening => WEEKEND_PREMIUM,
        _ => 0,
    }
}

/// Step surcharge for in-home groups: 5–8 guests, then more than 8.
fn headcount_surcharge(headcount: u32) -> i64 {
    if headcount > 8 {
        LARGE_GROUP_SURCHARGE
    } else if headcount >= 5 {
        GROUP_SURCHARGE
    } else {
        0
    }
}
