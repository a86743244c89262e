use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{cookie::CookieJar, Form};
use sea_orm::IntoActiveModel;
use serde::Deserialize;

use crate::{
    error::Result,
    flash,
    forms::{FieldErrors, VenueForm},
    services::{directory, local_now},
    state::AppState,
    templates::{venue_detail_page, venue_form_page, venue_search_page, venues_page, FormTarget},
};

use super::{extract::RecordId, render};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}

/// Venues grouped by state and city
pub async fn list_venues(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let areas = directory::venue_areas(&state, local_now()).await?;
    let (jar, flashes) = flash::take(jar);

    Ok((jar, Html(venues_page(&flashes, &areas).into_string())))
}

pub async fn search_venues(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(search): Form<SearchForm>,
) -> Result<(CookieJar, Html<String>)> {
    let term = search.search_term.trim();
    let results = directory::search_venues(&state, term, local_now()).await?;
    let (jar, flashes) = flash::take(jar);

    Ok((jar, Html(venue_search_page(&flashes, term, &results).into_string())))
}

pub async fn show_venue(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let detail = directory::venue_detail(&state, id, local_now()).await?;
    let (jar, flashes) = flash::take(jar);

    Ok((jar, Html(venue_detail_page(&flashes, &detail).into_string())))
}

pub async fn create_venue_form(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, flashes) = flash::take(jar);
    let page = venue_form_page(&flashes, &VenueForm::default(), &FieldErrors::default(), FormTarget::Create);

    (jar, Html(page.into_string()))
}

pub async fn create_venue_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<VenueForm>,
) -> Result<Response> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Venue form rejected");
            return Ok(render(
                StatusCode::UNPROCESSABLE_ENTITY,
                venue_form_page(&[], &form, &errors, FormTarget::Create),
            ));
        }
    };

    match state.venues().create(input.into_active_model()).await {
        Ok(venue) => {
            let jar = flash::push(jar, format!("Venue {} was successfully listed!", venue.name));
            Ok((jar, Redirect::to("/venues")).into_response())
        }
        Err(e) if e.is_persistence_failure() => {
            tracing::error!("Failed to create venue {}: {}", form.display_name(), e);
            let flashes = [format!(
                "An error occurred. Venue {} could not be listed.",
                form.display_name()
            )];
            Ok(render(
                StatusCode::OK,
                venue_form_page(&flashes, &form, &FieldErrors::default(), FormTarget::Create),
            ))
        }
        Err(e) => Err(e),
    }
}

/// Edit form pre-filled with the stored venue
pub async fn edit_venue_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let venue = state.venues().get(id).await?;
    let (jar, flashes) = flash::take(jar);
    let page = venue_form_page(
        &flashes,
        &VenueForm::from_model(&venue),
        &FieldErrors::default(),
        FormTarget::Edit(id),
    );

    Ok((jar, Html(page.into_string())))
}

pub async fn edit_venue_submission(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    jar: CookieJar,
    Form(form): Form<VenueForm>,
) -> Result<Response> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            tracing::debug!(venue_id = id, fields = ?errors.fields().collect::<Vec<_>>(), "Venue edit rejected");
            return Ok(render(
                StatusCode::UNPROCESSABLE_ENTITY,
                venue_form_page(&[], &form, &errors, FormTarget::Edit(id)),
            ));
        }
    };

    match state.venues().update(id, input.into_active_model()).await {
        Ok(venue) => {
            let jar = flash::push(jar, format!("Venue {} was successfully edited!", venue.name));
            Ok((jar, Redirect::to(&format!("/venues/{}", id))).into_response())
        }
        Err(e) if e.is_persistence_failure() => {
            tracing::error!("Failed to edit venue {}: {}", id, e);
            let flashes = [format!(
                "An error occurred. Venue {} could not be edited.",
                form.display_name()
            )];
            Ok(render(
                StatusCode::OK,
                venue_form_page(&flashes, &form, &FieldErrors::default(), FormTarget::Edit(id)),
            ))
        }
        Err(e) => Err(e),
    }
}

/// Form-driven delete: redirects back to the venue list
pub async fn delete_venue_submission(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    jar: CookieJar,
) -> Result<Response> {
    match state.venues().delete(id).await {
        Ok(venue) => {
            let jar = flash::push(jar, format!("Venue {} was deleted.", venue.name));
            Ok((jar, Redirect::to("/venues")).into_response())
        }
        Err(e) if e.is_persistence_failure() => {
            tracing::error!("Failed to delete venue {}: {}", id, e);
            let jar = flash::push(jar, "An error occurred. Venue could not be deleted.");
            Ok((jar, Redirect::to(&format!("/venues/{}", id))).into_response())
        }
        Err(e) => Err(e),
    }
}

/// Script-driven delete: empty response on success
pub async fn delete_venue(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<StatusCode> {
    state.venues().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
