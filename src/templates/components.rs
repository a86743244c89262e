use maud::{html, Markup};

use crate::datetime::{format_datetime, DateFormat};
use crate::db::entities::GenreList;
use crate::db::enums::{Genre, UsState};
use crate::db::repositories::NamedOption;
use crate::forms::FieldErrors;
use crate::services::ShowDisplay;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300/1a1a1a/ffffff?text=No+Image";

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";

pub fn flash_messages(flashes: &[String]) -> Markup {
    html! {
        @if !flashes.is_empty() {
            div id="flash-messages" class="mb-6 space-y-2" {
                @for message in flashes {
                    div class="flash px-4 py-3 rounded-md bg-blue-50 border border-blue-200 text-blue-800" role="alert" {
                        (message)
                    }
                }
            }
        }
    }
}

pub fn genre_tags(genres: &GenreList) -> Markup {
    html! {
        @if !genres.is_empty() {
            div class="flex flex-wrap gap-2" {
                @for genre in genres.iter() {
                    span class="genre px-2 py-1 text-xs font-semibold rounded-full bg-gray-200 text-gray-800" {
                        (genre)
                    }
                }
            }
        }
    }
}

/// Which side of the booking a show card links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counterpart {
    Venue,
    Artist,
}

pub fn show_card(show: &ShowDisplay, counterpart: Counterpart) -> Markup {
    let (href, name, image) = match counterpart {
        Counterpart::Venue => (
            format!("/venues/{}", show.venue_id),
            show.venue_name.as_str(),
            show.venue_image_link.as_deref(),
        ),
        Counterpart::Artist => (
            format!("/artists/{}", show.artist_id),
            show.artist_name.as_str(),
            show.artist_image_link.as_deref(),
        ),
    };

    html! {
        div class="show-card listing-card bg-white rounded-lg shadow-md overflow-hidden" {
            img src=(image.unwrap_or(PLACEHOLDER_IMAGE)) alt=(name) class="w-full h-40 object-cover" loading="lazy";
            div class="p-4" {
                a href=(href) class="font-semibold text-gray-900 hover:underline" { (name) }
                p class="text-sm text-gray-600" {
                    (format_datetime(&show.start_time, DateFormat::Full))
                }
            }
        }
    }
}

pub fn show_section(title: &str, count: usize, shows: &[ShowDisplay], counterpart: Counterpart) -> Markup {
    html! {
        section class="mt-8" {
            h2 class="text-xl font-semibold mb-4" { (count) " " (title) }
            @if shows.is_empty() {
                p class="text-gray-500" { "None." }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                    @for show in shows {
                        (show_card(show, counterpart))
                    }
                }
            }
        }
    }
}

pub fn search_box(action: &str, term: &str, placeholder: &str) -> Markup {
    html! {
        form method="post" action=(action) class="flex gap-2 mb-6" {
            input type="search" name="search_term" value=(term) placeholder=(placeholder) class=(INPUT_CLASS);
            button type="submit" class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                "Search"
            }
        }
    }
}

fn field_errors(errors: &FieldErrors, field: &str) -> Markup {
    html! {
        @for message in errors.get(field) {
            p class="field-error mt-1 text-sm text-red-600" data-field=(field) { (message) }
        }
    }
}

fn field_label(name: &str, label: &str, required: bool) -> Markup {
    html! {
        label for=(name) class="block text-sm font-medium text-gray-700 mb-2" {
            (label)
            @if required { span class="text-red-600" { " *" } }
        }
    }
}

pub fn text_field(name: &str, label: &str, value: &str, required: bool, errors: &FieldErrors) -> Markup {
    html! {
        div {
            (field_label(name, label, required))
            input type="text" id=(name) name=(name) value=(value) class=(INPUT_CLASS);
            (field_errors(errors, name))
        }
    }
}

pub fn datetime_field(name: &str, label: &str, value: &str, errors: &FieldErrors) -> Markup {
    html! {
        div {
            (field_label(name, label, true))
            input type="text" id=(name) name=(name) value=(value) placeholder="YYYY-MM-DD HH:MM" class=(INPUT_CLASS);
            (field_errors(errors, name))
        }
    }
}

pub fn state_select(value: &str, errors: &FieldErrors) -> Markup {
    html! {
        div {
            (field_label("state", "State", true))
            select id="state" name="state" class=(INPUT_CLASS) {
                option value="" { "Choose a state" }
                @for state in UsState::ALL {
                    option value=(state.as_str()) selected[state.as_str() == value] { (state.as_str()) }
                }
            }
            (field_errors(errors, "state"))
        }
    }
}

pub fn genre_select(selected: &[String], errors: &FieldErrors) -> Markup {
    html! {
        div {
            (field_label("genres", "Genres", false))
            select id="genres" name="genres" multiple class=(INPUT_CLASS) {
                @for genre in Genre::ALL {
                    option value=(genre.as_str()) selected[selected.iter().any(|g| g == genre.as_str())] {
                        (genre.as_str())
                    }
                }
            }
            (field_errors(errors, "genres"))
        }
    }
}

pub fn checkbox_field(name: &str, label: &str, checked: bool) -> Markup {
    html! {
        div class="flex items-center space-x-2" {
            input type="checkbox" id=(name) name=(name) value="y" checked[checked];
            label for=(name) class="text-sm font-medium text-gray-700" { (label) }
        }
    }
}

pub fn option_select(name: &str, label: &str, options: &[NamedOption], value: &str, errors: &FieldErrors) -> Markup {
    html! {
        div {
            (field_label(name, label, true))
            select id=(name) name=(name) class=(INPUT_CLASS) {
                option value="" { "Choose one" }
                @for choice in options {
                    option value=(choice.id) selected[choice.id.to_string() == value] {
                        (choice.name) " (#" (choice.id) ")"
                    }
                }
            }
            (field_errors(errors, name))
        }
    }
}

pub fn submit_button(label: &str) -> Markup {
    html! {
        button type="submit" class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
            (label)
        }
    }
}
