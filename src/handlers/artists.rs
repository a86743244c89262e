use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{cookie::CookieJar, Form};
use sea_orm::IntoActiveModel;

use crate::{
    error::Result,
    flash,
    forms::{ArtistForm, FieldErrors},
    services::{directory, local_now},
    state::AppState,
    templates::{artist_detail_page, artist_form_page, artist_search_page, artists_page, FormTarget},
};

use super::{extract::RecordId, render, venues::SearchForm};

pub async fn list_artists(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let artists = state.artists().list().await?;
    let (jar, flashes) = flash::take(jar);

    Ok((jar, Html(artists_page(&flashes, &artists).into_string())))
}

pub async fn search_artists(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(search): Form<SearchForm>,
) -> Result<(CookieJar, Html<String>)> {
    let term = search.search_term.trim();
    let results = directory::search_artists(&state, term, local_now()).await?;
    let (jar, flashes) = flash::take(jar);

    Ok((jar, Html(artist_search_page(&flashes, term, &results).into_string())))
}

pub async fn show_artist(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let detail = directory::artist_detail(&state, id, local_now()).await?;
    let (jar, flashes) = flash::take(jar);

    Ok((jar, Html(artist_detail_page(&flashes, &detail).into_string())))
}

pub async fn create_artist_form(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, flashes) = flash::take(jar);
    let page = artist_form_page(&flashes, &ArtistForm::default(), &FieldErrors::default(), FormTarget::Create);

    (jar, Html(page.into_string()))
}

pub async fn create_artist_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ArtistForm>,
) -> Result<Response> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Artist form rejected");
            return Ok(render(
                StatusCode::UNPROCESSABLE_ENTITY,
                artist_form_page(&[], &form, &errors, FormTarget::Create),
            ));
        }
    };

    match state.artists().create(input.into_active_model()).await {
        Ok(artist) => {
            let jar = flash::push(jar, format!("Artist {} was successfully listed!", artist.name));
            Ok((jar, Redirect::to("/artists")).into_response())
        }
        Err(e) if e.is_persistence_failure() => {
            tracing::error!("Failed to create artist {}: {}", form.display_name(), e);
            let flashes = [format!(
                "An error occurred. Artist {} could not be listed.",
                form.display_name()
            )];
            Ok(render(
                StatusCode::OK,
                artist_form_page(&flashes, &form, &FieldErrors::default(), FormTarget::Create),
            ))
        }
        Err(e) => Err(e),
    }
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let artist = state.artists().get(id).await?;
    let (jar, flashes) = flash::take(jar);
    let page = artist_form_page(
        &flashes,
        &ArtistForm::from_model(&artist),
        &FieldErrors::default(),
        FormTarget::Edit(id),
    );

    Ok((jar, Html(page.into_string())))
}

pub async fn edit_artist_submission(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    jar: CookieJar,
    Form(form): Form<ArtistForm>,
) -> Result<Response> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            tracing::debug!(artist_id = id, fields = ?errors.fields().collect::<Vec<_>>(), "Artist edit rejected");
            return Ok(render(
                StatusCode::UNPROCESSABLE_ENTITY,
                artist_form_page(&[], &form, &errors, FormTarget::Edit(id)),
            ));
        }
    };

    match state.artists().update(id, input.into_active_model()).await {
        Ok(artist) => {
            let jar = flash::push(jar, format!("Artist {} was successfully edited!", artist.name));
            Ok((jar, Redirect::to(&format!("/artists/{}", id))).into_response())
        }
        Err(e) if e.is_persistence_failure() => {
            tracing::error!("Failed to edit artist {}: {}", id, e);
            let flashes = [format!(
                "An error occurred. Artist {} could not be edited.",
                form.display_name()
            )];
            Ok(render(
                StatusCode::OK,
                artist_form_page(&flashes, &form, &FieldErrors::default(), FormTarget::Edit(id)),
            ))
        }
        Err(e) => Err(e),
    }
}
