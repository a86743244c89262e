use maud::{html, Markup};

use super::components::{
    checkbox_field, datetime_field, genre_select, option_select, state_select, submit_button,
    text_field,
};
use super::layout::base_layout;
use crate::db::repositories::NamedOption;
use crate::forms::{ArtistForm, FieldErrors, ShowForm, VenueForm};

/// Whether a record form creates a new row or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit(i32),
}

impl FormTarget {
    fn action(self, resource: &str) -> String {
        match self {
            Self::Create => format!("/{}/create", resource),
            Self::Edit(id) => format!("/{}/{}/edit", resource, id),
        }
    }

    fn heading(self, kind: &str) -> String {
        match self {
            Self::Create => format!("List a new {}", kind),
            Self::Edit(_) => format!("Edit {}", kind),
        }
    }
}

fn form_shell(flashes: &[String], heading: &str, action: &str, fields: Markup) -> Markup {
    base_layout(
        heading,
        flashes,
        html! {
            div class="max-w-3xl mx-auto" {
                h1 class="text-3xl font-bold text-gray-900 mb-8" { (heading) }
                form method="post" action=(action) class="bg-white rounded-lg shadow-sm p-6 space-y-4" {
                    (fields)
                }
            }
        },
    )
}

pub fn venue_form_page(
    flashes: &[String],
    form: &VenueForm,
    errors: &FieldErrors,
    target: FormTarget,
) -> Markup {
    form_shell(
        flashes,
        &target.heading("venue"),
        &target.action("venues"),
        html! {
            (text_field("name", "Name", &form.name, true, errors))
            (text_field("city", "City", &form.city, true, errors))
            (state_select(&form.state, errors))
            (text_field("address", "Address", &form.address, false, errors))
            (text_field("phone", "Phone", &form.phone, true, errors))
            (genre_select(&form.genres, errors))
            (text_field("image_link", "Image link", &form.image_link, false, errors))
            (text_field("website_link", "Website", &form.website_link, false, errors))
            (text_field("facebook_link", "Facebook link", &form.facebook_link, false, errors))
            (checkbox_field("seeking_talent", "Looking for talent", form.seeking_talent()))
            (text_field("seeking_description", "Seeking description", &form.seeking_description, false, errors))
            (submit_button(match target {
                FormTarget::Create => "Create venue",
                FormTarget::Edit(_) => "Save venue",
            }))
        },
    )
}

pub fn artist_form_page(
    flashes: &[String],
    form: &ArtistForm,
    errors: &FieldErrors,
    target: FormTarget,
) -> Markup {
    form_shell(
        flashes,
        &target.heading("artist"),
        &target.action("artists"),
        html! {
            (text_field("name", "Name", &form.name, true, errors))
            (text_field("city", "City", &form.city, true, errors))
            (state_select(&form.state, errors))
            (text_field("phone", "Phone", &form.phone, true, errors))
            (genre_select(&form.genres, errors))
            (text_field("image_link", "Image link", &form.image_link, false, errors))
            (text_field("website_link", "Website", &form.website_link, false, errors))
            (text_field("facebook_link", "Facebook link", &form.facebook_link, false, errors))
            (checkbox_field("seeking_venue", "Looking for venues", form.seeking_venue()))
            (text_field("seeking_description", "Seeking description", &form.seeking_description, false, errors))
            (submit_button(match target {
                FormTarget::Create => "Create artist",
                FormTarget::Edit(_) => "Save artist",
            }))
        },
    )
}

pub fn show_form_page(
    flashes: &[String],
    form: &ShowForm,
    errors: &FieldErrors,
    venues: &[NamedOption],
    artists: &[NamedOption],
) -> Markup {
    form_shell(
        flashes,
        "List a new show",
        "/shows/create",
        html! {
            (option_select("artist_id", "Artist", artists, &form.artist_id, errors))
            (option_select("venue_id", "Venue", venues, &form.venue_id, errors))
            (datetime_field("start_time", "Start time", &form.start_time, errors))
            (submit_button("Create show"))
        },
    )
}
