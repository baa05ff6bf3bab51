use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::{AppError, FixtureError};
use crate::model::sport::filter_by_sport;
use crate::model::{Arena, Booking, BookingStatus, BookingTab, Coach, SportFilter, Team, User};

/// Catalog shipped with the binary.
const FIXTURE: &str = include_str!("../data/catalog.json");

const FEATURED_ARENAS: usize = 3;
const FEATURED_TEAMS: usize = 2;
const FEATURED_COACHES: usize = 2;

/// On-disk shape of the catalog fixture.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub arenas: Vec<Arena>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub coaches: Vec<Coach>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// Matches a case-insensitive free-text query against an entity.
pub trait Searchable {
    /// `needle` is already lowercased.
    fn matches_query(&self, needle: &str) -> bool;
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Searchable for Arena {
    fn matches_query(&self, needle: &str) -> bool {
        contains_folded(&self.name, needle) || contains_folded(&self.location, needle)
    }
}

impl Searchable for Team {
    fn matches_query(&self, needle: &str) -> bool {
        contains_folded(&self.name, needle) || contains_folded(&self.captain, needle)
    }
}

impl Searchable for Coach {
    fn matches_query(&self, needle: &str) -> bool {
        contains_folded(&self.name, needle)
    }
}

/// Keep the items matching `query`, in source order. An empty query keeps everything.
pub fn search<'a, T, I>(items: I, query: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let needle = query.to_lowercase();
    items.into_iter().filter(|item| item.matches_query(&needle)).collect()
}

/// Home screen preview: the first few entries of each collection for the selected sport.
#[derive(Debug, Serialize)]
pub struct Featured<'a> {
    pub arenas: Vec<&'a Arena>,
    pub teams: Vec<&'a Team>,
    pub coaches: Vec<&'a Coach>,
}

/// Read-only store of arenas, teams, coaches and sample bookings.
#[derive(Debug, Clone)]
pub struct Catalog {
    arenas: Vec<Arena>,
    teams: Vec<Team>,
    coaches: Vec<Coach>,
    bookings: Vec<Booking>,
}

impl Catalog {
    /// Load the embedded fixture catalog.
    pub fn fixture() -> Result<Self, FixtureError> {
        Self::from_json(FIXTURE)
    }

    /// Construct a catalog from a raw JSON document.
    #[instrument(level = "info", skip(body), fields(bytes = body.len()))]
    pub fn from_json(body: &str) -> Result<Self, FixtureError> {
        let doc = serde_json::from_str::<CatalogDocument>(body)?;
        Self::from_document(doc)
    }

    /// Construct a catalog, checking arena ids and per-arena slot ids are unique.
    pub fn from_document(doc: CatalogDocument) -> Result<Self, FixtureError> {
        let mut arena_ids: HashSet<&str> = HashSet::new();
        for arena in &doc.arenas {
            if !arena_ids.insert(arena.id.as_str()) {
                return Err(FixtureError::DuplicateId { kind: "arena", id: arena.id.clone() });
            }
            let mut slot_ids: HashSet<&str> = HashSet::new();
            for slot in &arena.availability {
                if !slot_ids.insert(slot.id.as_str()) {
                    return Err(FixtureError::DuplicateSlot {
                        arena_id: arena.id.clone(),
                        slot_id: slot.id.clone(),
                    });
                }
            }
        }

        info!(
            arenas = doc.arenas.len(),
            teams = doc.teams.len(),
            coaches = doc.coaches.len(),
            bookings = doc.bookings.len(),
            "Constructed catalog"
        );
        Ok(Catalog {
            arenas: doc.arenas,
            teams: doc.teams,
            coaches: doc.coaches,
            bookings: doc.bookings,
        })
    }

    pub fn arenas(&self) -> &[Arena] {
        &self.arenas
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn coaches(&self) -> &[Coach] {
        &self.coaches
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Arenas whose name or location contains `query`, ignoring case.
    pub fn search_arenas(&self, query: &str) -> Vec<&Arena> {
        search(&self.arenas, query)
    }

    /// Teams whose name or captain contains `query`, ignoring case.
    pub fn search_teams(&self, query: &str) -> Vec<&Team> {
        search(&self.teams, query)
    }

    /// Coaches whose name contains `query`, ignoring case.
    pub fn search_coaches(&self, query: &str) -> Vec<&Coach> {
        search(&self.coaches, query)
    }

    /// Listing screen contents: matches both the query and the sport selector.
    pub fn list_arenas(&self, query: &str, sport: SportFilter) -> Vec<&Arena> {
        search(filter_by_sport(&self.arenas, sport), query)
    }

    pub fn list_teams(&self, query: &str, sport: SportFilter) -> Vec<&Team> {
        search(filter_by_sport(&self.teams, sport), query)
    }

    pub fn list_coaches(&self, query: &str, sport: SportFilter) -> Vec<&Coach> {
        search(filter_by_sport(&self.coaches, sport), query)
    }

    pub fn featured(&self, sport: SportFilter) -> Featured<'_> {
        let mut arenas = filter_by_sport(&self.arenas, sport);
        arenas.truncate(FEATURED_ARENAS);
        let mut teams = filter_by_sport(&self.teams, sport);
        teams.truncate(FEATURED_TEAMS);
        let mut coaches = filter_by_sport(&self.coaches, sport);
        coaches.truncate(FEATURED_COACHES);
        Featured { arenas, teams, coaches }
    }

    pub fn arena(&self, id: &str) -> Option<&Arena> {
        self.arenas.iter().find(|a| a.id == id)
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn coach(&self, id: &str) -> Option<&Coach> {
        self.coaches.iter().find(|c| c.id == id)
    }

    /// Arena detail lookup. A missing arena is a visible "not found" state.
    pub fn require_arena(&self, id: &str) -> Result<&Arena, AppError> {
        self.arena(id).ok_or_else(|| AppError::NotFound { kind: "Arena", id: id.to_string() })
    }

    /// Validate a booking request against the catalog and build the confirmed booking.
    /// Nothing is stored; the caller only shows the result.
    #[instrument(level = "info", skip(self, user), fields(signed_in = user.is_some()))]
    pub fn prepare_booking(
        &self,
        arena_id: &str,
        slot_id: Option<&str>,
        date: NaiveDate,
        user: Option<&User>,
    ) -> Result<Booking, AppError> {
        let arena = self.require_arena(arena_id)?;
        if user.is_none() {
            return Err(AppError::SignInRequired("Please sign in to book an arena."));
        }
        let slot_id = slot_id.filter(|s| !s.is_empty()).ok_or(AppError::NoTimeSlot)?;
        let slot = arena
            .slot(slot_id)
            .ok_or_else(|| AppError::NotFound { kind: "Time slot", id: slot_id.to_string() })?;
        if !slot.is_available {
            return Err(AppError::SlotUnavailable { slot_id: slot.id.clone() });
        }

        let booking = Booking {
            id: uuid::Uuid::new_v4().to_string(),
            arena_id: arena.id.clone(),
            arena_name: arena.name.clone(),
            date,
            time_slot: slot.clone(),
            total_price: slot.price,
            status: BookingStatus::Confirmed,
            sport: arena.sport,
        };
        info!(booking_id = %booking.id, arena = %arena.name, %date, "Booking confirmed");
        Ok(booking)
    }

    /// Sample bookings on one side of `today`, in source order.
    pub fn bookings_in(&self, tab: BookingTab, today: NaiveDate) -> Vec<&Booking> {
        let found: Vec<&Booking> = self.bookings.iter().filter(|b| b.in_tab(tab, today)).collect();
        debug!(?tab, %today, count = found.len(), "Filtered bookings");
        found
    }
}
