use chrono::NaiveDate;

use arena_catalog::catalog::{Catalog, search};
use arena_catalog::error::{AppError, FixtureError};
use arena_catalog::model::sport::{DEFAULT_ACCENT, filter_by_sport, sport_color};
use arena_catalog::model::{BookingStatus, BookingTab, Role, Sport, SportFilter, User};

fn catalog() -> Catalog {
    Catalog::fixture().expect("fixture catalog should load")
}

fn ids<T>(items: &[&T], id: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|i| id(*i).to_string()).collect()
}

fn player() -> User {
    User {
        id: "u1".into(),
        name: "Bilal".into(),
        email: "bilal@example.com".into(),
        phone: "0300-0000000".into(),
        role: Role::Player,
        profile_image: None,
    }
}

#[test]
fn filter_all_returns_everything_in_order() {
    let cat = catalog();
    let all = filter_by_sport(cat.arenas(), SportFilter::All);
    assert_eq!(all.len(), cat.arenas().len());
    assert!(all.iter().zip(cat.arenas()).all(|(a, b)| *a == b));
}

#[test]
fn filter_cricket_returns_both_cricket_arenas_in_order() {
    let cat = catalog();
    let cricket = filter_by_sport(cat.arenas(), Sport::Cricket.into());
    let names: Vec<&str> = cricket.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Lahore Cricket Center", "Royal Cricket Academy"]);
}

#[test]
fn filter_keeps_exactly_matching_sport_for_every_collection() {
    let cat = catalog();
    for sport in Sport::ALL {
        let teams = filter_by_sport(cat.teams(), sport.into());
        assert!(teams.iter().all(|t| t.sport == sport));
        assert_eq!(teams.len(), cat.teams().iter().filter(|t| t.sport == sport).count());

        let coaches = filter_by_sport(cat.coaches(), sport.into());
        assert!(coaches.iter().all(|c| c.sport == sport));
        assert_eq!(coaches.len(), cat.coaches().iter().filter(|c| c.sport == sport).count());
    }
}

#[test]
fn filter_on_empty_collection_is_empty() {
    let empty: Vec<arena_catalog::model::Team> = Vec::new();
    assert!(filter_by_sport(&empty, Sport::Tennis.into()).is_empty());
}

#[test]
fn arena_search_matches_location_case_insensitively() {
    let cat = catalog();
    assert_eq!(cat.search_arenas("lahore").len(), 4);
    assert_eq!(cat.search_arenas("LAHORE").len(), 4);

    let gulberg = cat.search_arenas("gulberg");
    assert_eq!(ids(&gulberg, |a| a.name.as_str()), vec!["Lahore Cricket Center"]);
}

#[test]
fn empty_query_is_identity() {
    let cat = catalog();
    assert_eq!(cat.search_arenas("").len(), cat.arenas().len());
    assert_eq!(cat.search_teams("").len(), cat.teams().len());
    assert_eq!(cat.search_coaches("").len(), cat.coaches().len());
}

#[test]
fn search_is_idempotent() {
    let cat = catalog();
    for q in ["cricket", "a", "town", "zzz", ""] {
        let once = search(cat.arenas(), q);
        let twice = search(once.iter().copied(), q);
        assert_eq!(once, twice, "query {:?}", q);
    }
}

#[test]
fn search_does_not_trim_whitespace() {
    let cat = catalog();
    assert!(cat.search_arenas(" lahore ").is_empty());
}

#[test]
fn team_search_matches_captain() {
    let cat = catalog();
    let found = cat.search_teams("hassan");
    assert_eq!(ids(&found, |t| t.captain.as_str()), vec!["Hassan Ali"]);
    assert_eq!(found[0].name, "Royal Strikers");
}

#[test]
fn coach_search_matches_name_only() {
    let cat = catalog();
    assert_eq!(cat.search_coaches("maria").len(), 1);
    // "tennis" only appears in the description, which is not searched.
    assert!(cat.search_coaches("tennis").is_empty());
}

#[test]
fn combined_filter_commutes() {
    let cat = catalog();
    let filters = [
        SportFilter::All,
        Sport::Cricket.into(),
        Sport::Football.into(),
        Sport::Tennis.into(),
    ];
    for filter in filters {
        for q in ["", "lahore", "cricket", "town", "club"] {
            let sport_then_search = search(filter_by_sport(cat.arenas(), filter), q);
            let search_then_sport = filter_by_sport(search(cat.arenas(), q), filter);
            assert_eq!(sport_then_search, search_then_sport);
            assert_eq!(cat.list_arenas(q, filter), sport_then_search);
        }
    }
    let royal_cricket = cat.list_teams("royal", Sport::Cricket.into());
    assert_eq!(royal_cricket.len(), 1);
    assert!(cat.list_teams("royal", Sport::Football.into()).is_empty());
}

#[test]
fn sport_color_is_total_and_distinct() {
    let colors: Vec<&str> = Sport::ALL.iter().map(|s| sport_color(s.as_str())).collect();
    assert!(colors.iter().all(|c| !c.is_empty()));
    assert_ne!(colors[0], colors[1]);
    assert_ne!(colors[1], colors[2]);
    assert_ne!(colors[0], colors[2]);
    assert_eq!(sport_color("cricket"), "#4CAF50");
    assert_eq!(sport_color("hockey"), DEFAULT_ACCENT);
    assert_eq!(sport_color(""), DEFAULT_ACCENT);
}

#[test]
fn sport_filter_parses_from_json() {
    let f: SportFilter = serde_json::from_str("\"all\"").unwrap();
    assert_eq!(f, SportFilter::All);
    let f: SportFilter = serde_json::from_str("\"tennis\"").unwrap();
    assert_eq!(f, SportFilter::Only(Sport::Tennis));
    assert!(serde_json::from_str::<SportFilter>("\"hockey\"").is_err());
    assert_eq!(serde_json::to_string(&SportFilter::Only(Sport::Football)).unwrap(), "\"football\"");
}

#[test]
fn featured_truncates_each_collection() {
    let cat = catalog();
    let all = cat.featured(SportFilter::All);
    assert_eq!(all.arenas.len(), 3);
    assert_eq!(all.teams.len(), 2);
    assert_eq!(all.coaches.len(), 2);
    assert_eq!(all.arenas[0].name, "Lahore Cricket Center");

    let tennis = cat.featured(Sport::Tennis.into());
    assert_eq!(tennis.arenas.len(), 1);
    assert_eq!(tennis.teams[0].name, "Tennis Masters");
    assert_eq!(tennis.coaches[0].name, "Coach Maria Khan");
}

#[test]
fn fixture_values_are_typed() {
    let cat = catalog();
    let arena = cat.arena("1").expect("arena 1");
    assert_eq!(arena.rating.to_string(), "4.8");
    assert_eq!(arena.price.to_string(), "Rs. 3,000");
    assert_eq!(arena.availability.len(), 3);
    assert_eq!(arena.availability[0].duration_minutes(), Some(120));
    assert_eq!(arena.open_slots().count(), 2);
    assert_eq!(cat.team("1").unwrap().open_spots(), 4);
}

#[test]
fn missing_arena_is_not_found() {
    let cat = catalog();
    assert!(cat.arena("99").is_none());
    let err = cat.require_arena("99").unwrap_err();
    assert!(matches!(err, AppError::NotFound { kind: "Arena", .. }));
    assert_eq!(err.to_string(), "Arena not found");
}

#[test]
fn duplicate_ids_are_rejected() {
    let dup_arena = r#"{"arenas":[
        {"id":"1","name":"A","sport":"cricket","location":"L","rating":4.0,"price":100,"imageUrl":"","description":""},
        {"id":"1","name":"B","sport":"tennis","location":"L","rating":4.0,"price":100,"imageUrl":"","description":""}
    ]}"#;
    assert!(matches!(Catalog::from_json(dup_arena), Err(FixtureError::DuplicateId { .. })));

    let dup_slot = r#"{"arenas":[
        {"id":"1","name":"A","sport":"cricket","location":"L","rating":4.0,"price":100,"imageUrl":"","description":"",
         "availability":[
            {"id":"s","startTime":"09:00","endTime":"10:00","isAvailable":true,"price":100},
            {"id":"s","startTime":"10:00","endTime":"11:00","isAvailable":true,"price":100}
         ]}
    ]}"#;
    assert!(matches!(Catalog::from_json(dup_slot), Err(FixtureError::DuplicateSlot { .. })));

    let bad_rating = r#"{"arenas":[
        {"id":"1","name":"A","sport":"cricket","location":"L","rating":7.5,"price":100,"imageUrl":"","description":""}
    ]}"#;
    assert!(matches!(Catalog::from_json(bad_rating), Err(FixtureError::Parse(_))));
}

#[test]
fn booking_requires_sign_in_then_slot() {
    let cat = catalog();
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let user = player();

    let err = cat.prepare_booking("1", Some("1"), date, None).unwrap_err();
    assert_eq!(err.to_string(), "Please sign in to book an arena.");

    let err = cat.prepare_booking("1", None, date, Some(&user)).unwrap_err();
    assert!(matches!(err, AppError::NoTimeSlot));

    let err = cat.prepare_booking("1", Some("2"), date, Some(&user)).unwrap_err();
    assert!(matches!(err, AppError::SlotUnavailable { .. }));

    // Slot ids belong to a single arena.
    let err = cat.prepare_booking("1", Some("4"), date, Some(&user)).unwrap_err();
    assert!(matches!(err, AppError::NotFound { kind: "Time slot", .. }));

    let err = cat.prepare_booking("42", Some("1"), date, Some(&user)).unwrap_err();
    assert!(matches!(err, AppError::NotFound { kind: "Arena", .. }));
}

#[test]
fn booking_copies_slot_and_price() {
    let cat = catalog();
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let booking = cat.prepare_booking("1", Some("3"), date, Some(&player())).expect("booking");
    assert_eq!(booking.arena_name, "Lahore Cricket Center");
    assert_eq!(booking.time_slot.start_time, "15:00");
    assert_eq!(booking.total_price.0, 3500);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.sport, Sport::Cricket);
    assert!(!booking.id.is_empty());
    // Catalog data is untouched.
    assert!(cat.arena("1").unwrap().slot("3").unwrap().is_available);
}

#[test]
fn bookings_split_by_today() {
    let cat = catalog();
    let between = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
    let upcoming = cat.bookings_in(BookingTab::Upcoming, between);
    let past = cat.bookings_in(BookingTab::Past, between);
    assert_eq!(ids(&upcoming, |b| b.id.as_str()), vec!["2"]);
    assert_eq!(ids(&past, |b| b.id.as_str()), vec!["1"]);

    // A booking on the day itself is still upcoming.
    let on_day = NaiveDate::from_ymd_opt(2030, 2, 18).unwrap();
    assert_eq!(cat.bookings_in(BookingTab::Upcoming, on_day).len(), 1);
    assert_eq!(cat.bookings_in(BookingTab::Past, on_day).len(), 1);
}

#[test]
fn booking_status_colors_follow_palette() {
    use arena_catalog::palette::{DARK, LIGHT};
    assert_eq!(BookingStatus::Confirmed.color(&LIGHT), LIGHT.success);
    assert_eq!(BookingStatus::Pending.color(&DARK), DARK.warning);
    assert_eq!(BookingStatus::Cancelled.color(&LIGHT), "#EF4444");
}
