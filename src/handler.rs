use std::sync::Arc;

use chrono::NaiveDate;
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::auth::AuthProvider;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::AppError;
use crate::model::sport::sport_color;
use crate::model::{BookingTab, SportFilter};
use crate::palette::{Palette, ThemeMode};
use crate::theme::ThemeController;
use crate::validation::{ContactForm, LoginForm, RegistrationForm};

/// Shared, long-lived collaborators handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub theme: ThemeController,
    pub auth: Arc<dyn AuthProvider>,
    pub config: Config,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Request {
    Featured {
        #[serde(default)]
        sport: SportFilter,
    },
    Arenas {
        #[serde(default)]
        query: String,
        #[serde(default)]
        sport: SportFilter,
    },
    Teams {
        #[serde(default)]
        query: String,
        #[serde(default)]
        sport: SportFilter,
    },
    Coaches {
        #[serde(default)]
        query: String,
        #[serde(default)]
        sport: SportFilter,
    },
    Arena {
        id: String,
    },
    Team {
        id: String,
    },
    Coach {
        id: String,
    },
    CreateTeam,
    SportColor {
        sport: String,
    },
    Book {
        arena_id: String,
        #[serde(default)]
        slot_id: Option<String>,
        date: NaiveDate,
    },
    Bookings {
        #[serde(default)]
        tab: BookingTab,
    },
    Theme,
    ToggleTheme,
    Login(LoginForm),
    Register(RegistrationForm),
    Logout,
    Contact(ContactForm),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub ok: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Response {
    fn success(message: impl Into<String>) -> Self {
        Self { ok: true, message: message.into(), data: None }
    }

    fn with_data(message: impl Into<String>, data: &impl Serialize) -> Result<Self, AppError> {
        Ok(Self { ok: true, message: message.into(), data: Some(serde_json::to_value(data)?) })
    }

    fn failure(err: &AppError) -> Self {
        Self { ok: false, message: err.to_string(), data: None }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeView {
    mode: ThemeMode,
    is_dark: bool,
    colors: &'static Palette,
}

impl ThemeView {
    fn of(theme: &ThemeController) -> Self {
        Self { mode: theme.mode(), is_dark: theme.is_dark(), colors: theme.colors() }
    }
}

fn count_label(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

/// Lambda entry point.
#[instrument(skip(state, event))]
pub async fn handler(state: &AppState, event: LambdaEvent<Request>) -> Result<Response, Error> {
    Ok(handle(state, event.payload).await)
}

/// Run one request. Every failure comes back as `ok: false` with a user-facing message.
pub async fn handle(state: &AppState, request: Request) -> Response {
    match dispatch(state, request).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "Request failed");
            Response::failure(&e)
        }
    }
}

async fn dispatch(state: &AppState, request: Request) -> Result<Response, AppError> {
    let catalog = &state.catalog;
    match request {
        Request::Featured { sport } => {
            let featured = catalog.featured(sport);
            Response::with_data(format!("Featured for {}", String::from(sport)), &featured)
        }
        Request::Arenas { query, sport } => {
            let found = catalog.list_arenas(&query, sport);
            Response::with_data(count_label(found.len(), "arena", "arenas"), &found)
        }
        Request::Teams { query, sport } => {
            let found = catalog.list_teams(&query, sport);
            Response::with_data(count_label(found.len(), "team", "teams"), &found)
        }
        Request::Coaches { query, sport } => {
            let found = catalog.list_coaches(&query, sport);
            Response::with_data(count_label(found.len(), "coach", "coaches"), &found)
        }
        Request::Arena { id } => {
            let arena = catalog.require_arena(&id)?;
            Response::with_data(arena.name.clone(), arena)
        }
        Request::Team { id } => {
            catalog.team(&id).ok_or_else(|| AppError::NotFound { kind: "Team", id: id.clone() })?;
            warn!(team_id = %id, "Team details requested");
            Err(AppError::NotImplemented("Team details"))
        }
        Request::Coach { id } => {
            catalog.coach(&id).ok_or_else(|| AppError::NotFound { kind: "Coach", id: id.clone() })?;
            warn!(coach_id = %id, "Coach details requested");
            Err(AppError::NotImplemented("Coach details"))
        }
        Request::CreateTeam => {
            warn!("Team creation requested");
            Err(AppError::NotImplemented("Creating a team"))
        }
        Request::SportColor { sport } => {
            let color = sport_color(&sport);
            Response::with_data(color, &color)
        }
        Request::Book { arena_id, slot_id, date } => {
            let user = state.auth.current_user();
            let booking = catalog.prepare_booking(&arena_id, slot_id.as_deref(), date, user.as_ref())?;
            Response::with_data("Your arena booking has been confirmed!", &booking)
        }
        Request::Bookings { tab } => {
            if state.auth.current_user().is_none() {
                return Err(AppError::SignInRequired("Please sign in to view your bookings."));
            }
            let found = catalog.bookings_in(tab, state.config.today());
            Response::with_data(count_label(found.len(), "booking", "bookings"), &found)
        }
        Request::Theme => {
            let view = ThemeView::of(&state.theme);
            Response::with_data(view.mode.as_str(), &view)
        }
        Request::ToggleTheme => {
            let persist = state.theme.toggle_theme();
            let view = ThemeView::of(&state.theme);
            // The runtime may freeze once we respond, so let the save finish first.
            persist.wait().await;
            Response::with_data(view.mode.as_str(), &view)
        }
        Request::Login(form) => {
            form.validate()?;
            if !state.auth.login(&form.email, &form.password) {
                return Err(AppError::InvalidCredentials);
            }
            info!("Login succeeded");
            Response::with_data("Signed in", &state.auth.current_user())
        }
        Request::Register(form) => {
            let registration = form.into_registration()?;
            if !state.auth.register(registration) {
                return Err(AppError::RegistrationFailed);
            }
            Response::with_data("Account created successfully!", &state.auth.current_user())
        }
        Request::Logout => {
            state.auth.logout();
            Ok(Response::success("Signed out"))
        }
        Request::Contact(form) => {
            form.validate()?;
            info!("Contact message accepted");
            Ok(Response::success(
                "Your message has been sent! We'll get back to you within 24 hours.",
            ))
        }
    }
}
