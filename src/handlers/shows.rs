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
    forms::{FieldErrors, ShowForm},
    services::directory,
    state::AppState,
    templates::{show_form_page, shows_page},
};

use super::render;

pub async fn list_shows(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let shows = directory::show_board(&state).await?;
    let (jar, flashes) = flash::take(jar);

    Ok((jar, Html(shows_page(&flashes, &shows).into_string())))
}

async fn render_show_form(
    state: &AppState,
    status: StatusCode,
    flashes: &[String],
    form: &ShowForm,
    errors: &FieldErrors,
) -> Result<Response> {
    let venues = state.venues().options().await?;
    let artists = state.artists().options().await?;

    Ok(render(
        status,
        show_form_page(flashes, form, errors, &venues, &artists),
    ))
}

pub async fn create_show_form(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Response)> {
    let (jar, flashes) = flash::take(jar);
    let page = render_show_form(
        &state,
        StatusCode::OK,
        &flashes,
        &ShowForm::default(),
        &FieldErrors::default(),
    )
    .await?;

    Ok((jar, page))
}

pub async fn create_show_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ShowForm>,
) -> Result<Response> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Show form rejected");
            return render_show_form(&state, StatusCode::UNPROCESSABLE_ENTITY, &[], &form, &errors).await;
        }
    };

    match state.shows().create(input.into_active_model()).await {
        Ok(_) => {
            let jar = flash::push(jar, "Show was successfully listed!");
            Ok((jar, Redirect::to("/shows")).into_response())
        }
        Err(e) if e.is_persistence_failure() => {
            tracing::error!(
                venue_id = form.venue_id.as_str(),
                artist_id = form.artist_id.as_str(),
                "Failed to create show: {}",
                e
            );
            let flashes = ["An error occurred. Show could not be listed.".to_string()];
            render_show_form(&state, StatusCode::OK, &flashes, &form, &FieldErrors::default()).await
        }
        Err(e) => Err(e),
    }
}
