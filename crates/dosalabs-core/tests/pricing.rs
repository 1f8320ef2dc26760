use dosalabs_core::models::request::{AgeGroup, Details, Selection, SessionFormat, TimeSlot};
use dosalabs_core::pricing::{calculate_price, DEFAULT_BASE_DOLLARS};

fn selection(class_id: &str, format: SessionFormat) -> Selection {
    Selection {
        class_id: class_id.to_string(),
        date: String::new(),
        format,
        time_slot: TimeSlot::Morning,
        time_zone: None,
        selected_kits: Vec::new(),
    }
}

fn details() -> Details {
    Details {
        headcount: 2,
        zip_code: "07030".to_string(),
        address: "12 Grove St, Hoboken".to_string(),
        kitchen_notes: String::new(),
        allergies: String::new(),
        pickup_slot: None,
        consent: true,
        participant_age_group: AgeGroup::Adults,
        parental_supervision_consent: None,
        safety_tools_consent: None,
    }
}

#[test]
fn base_price_comes_from_catalog() {
    let quote = calculate_price(&selection("c1", SessionFormat::Online), &details());
    assert_eq!(quote.base, 89);
    assert_eq!(quote.addons, 0);
    assert_eq!(quote.total, 89);
}

#[test]
fn unknown_class_falls_back_to_default_base() {
    let quote = calculate_price(&selection("c99", SessionFormat::Online), &details());
    assert_eq!(quote.base, DEFAULT_BASE_DOLLARS);
}

#[test]
fn kids_lab_in_home_uses_fixed_base() {
    let quote = calculate_price(&selection("c7", SessionFormat::InHome), &details());
    assert_eq!(quote.base, 129);
}

#[test]
fn kids_lab_online_uses_catalog_base() {
    let quote = calculate_price(&selection("c7", SessionFormat::Online), &details());
    assert_eq!(quote.base, 39);
}

#[test]
fn local_zip_travels_free() {
    let mut d = details();
    d.zip_code = "07030".to_string();
    let quote = calculate_price(&selection("c1", SessionFormat::InHome), &d);
    assert_eq!(quote.addons, 0);
}

#[test]
fn mid_nj_zip_adds_mid_travel_fee() {
    let mut d = details();
    d.zip_code = "07702".to_string();
    let quote = calculate_price(&selection("c1", SessionFormat::InHome), &d);
    assert_eq!(quote.addons, 25);
}

#[test]
fn deep_nj_zip_adds_far_travel_fee() {
    let mut d = details();
    d.zip_code = "08701".to_string();
    let quote = calculate_price(&selection("c1", SessionFormat::InHome), &d);
    assert_eq!(quote.addons, 50);
}

#[test]
fn nyc_zip_adds_mid_travel_fee() {
    let mut d = details();
    d.zip_code = "10001".to_string();
    let quote = calculate_price(&selection("c1", SessionFormat::InHome), &d);
    assert_eq!(quote.addons, 25);
}

#[test]
fn online_sessions_never_charge_travel() {
    let mut d = details();
    d.zip_code = "08701".to_string();
    let quote = calculate_price(&selection("c1", SessionFormat::Online), &d);
    assert_eq!(quote.addons, 0);
}

#[test]
fn unparseable_zip_charges_no_travel_fee() {
    let mut d = details();
    d.zip_code = "not-a-zip".to_string();
    let quote = calculate_price(&selection("c1", SessionFormat::InHome), &d);
    assert_eq!(quote.addons, 0);
}

#[test]
fn saturday_adds_weekend_premium() {
    let mut s = selection("c1", SessionFormat::Online);
    s.date = "2024-11-02".to_string();
    let quote = calculate_price(&s, &details());
    assert_eq!(quote.addons, 20);
}

#[test]
fn sunday_adds_weekend_premium() {
    let mut s = selection("c1", SessionFormat::Online);
    s.date = "2024-11-03".to_string();
    let quote = calculate_price(&s, &details());
    assert_eq!(quote.addons, 20);
}

#[test]
fn friday_evening_adds_weekend_premium() {
    let mut s = selection("c1", SessionFormat::Online);
    s.date = "2024-11-01".to_string();
    s.time_slot = TimeSlot::Evening;
    let quote = calculate_price(&s, &details());
    assert_eq!(quote.addons, 20);
}

#[test]
fn friday_afternoon_has_no_premium() {
    let mut s = selection("c1", SessionFormat::Online);
    s.date = "2024-11-01".to_string();
    s.time_slot = TimeSlot::Afternoon;
    let quote = calculate_price(&s, &details());
    assert_eq!(quote.addons, 0);
}

#[test]
fn empty_date_skips_weekend_premium() {
    let quote = calculate_price(&selection("c1", SessionFormat::Online), &details());
    assert_eq!(quote.addons, 0);
}

#[test]
fn unparseable_date_skips_weekend_premium() {
    let mut s = selection("c1", SessionFormat::Online);
    s.date = "next saturday".to_string();
    let quote = calculate_price(&s, &details());
    assert_eq!(quote.addons, 0);
}

#[test]
fn datetime_strings_use_only_the_date_part() {
    let mut s = selection("c1", SessionFormat::Online);
    s.date = "2024-11-02T10:00".to_string();
    let quote = calculate_price(&s, &details());
    assert_eq!(quote.addons, 20);
}

#[test]
fn four_guests_in_home_have_no_group_surcharge() {
    let mut d = details();
    d.headcount = 4;
    let quote = calculate_price(&selection("c1", SessionFormat::InHome), &d);
    assert_eq!(quote.addons, 0);
}

#[test]
fn five_guests_in_home_add_mid_surcharge() {
    let mut d = details();
    d.headcount = 5;
    let quote = calculate_price(&selection("c1", SessionFormat::InHome), &d);
    assert_eq!(quote.addons, 40);
}

#[test]
fn eight_guests_in_home_stay_in_mid_tier() {
    let mut d = details();
    d.headcount = 8;
    let quote = calculate_price(&selection("c1", SessionFormat::InHome), &d);
    assert_eq!(quote.addons, 40);
}

#[test]
fn nine_guests_in_home_add_large_surcharge() {
    let mut d = details();
    d.headcount = 9;
    let quote = calculate_price(&selection("c1", SessionFormat::InHome), &d);
    assert_eq!(quote.addons, 80);
}

#[test]
fn online_sessions_never_scale_by_headcount() {
    let mut d = details();
    d.headcount = 12;
    let quote = calculate_price(&selection("c1", SessionFormat::Online), &d);
    assert_eq!(quote.addons, 0);
}

#[test]
fn selected_kits_add_their_unit_prices() {
    let mut s = selection("c1", SessionFormat::Online);
    s.selected_kits = vec!["k1".to_string(), "k2".to_string()];
    let quote = calculate_price(&s, &details());
    assert_eq!(quote.addons, 59 + 24);
}

#[test]
fn unknown_kit_ids_contribute_nothing() {
    let mut s = selection("c1", SessionFormat::Online);
    s.selected_kits = vec!["k1".to_string(), "k9".to_string()];
    let quote = calculate_price(&s, &details());
    assert_eq!(quote.addons, 59);
}

#[test]
fn surcharges_accumulate_and_total_is_base_plus_addons() {
    // Weekend family lab, in-home, far zip, 10 guests, every kit.
    let mut s = selection("c6", SessionFormat::InHome);
    s.date = "2024-11-02".to_string();
    s.selected_kits = vec!["k1".to_string(), "k2".to_string(), "k3".to_string()];
    let mut d = details();
    d.zip_code = "08701".to_string();
    d.headcount = 10;

    let quote = calculate_price(&s, &d);
    assert_eq!(quote.base, 249);
    assert_eq!(quote.addons, 50 + 20 + 80 + 95);
    assert_eq!(quote.total, quote.base + quote.addons);
}

#[test]
fn pricing_is_deterministic() {
    let mut s = selection("c6", SessionFormat::InHome);
    s.date = "2024-11-02".to_string();
    s.selected_kits = vec!["k2".to_string()];
    let d = details();

    assert_eq!(calculate_price(&s, &d), calculate_price(&s, &d));
}
