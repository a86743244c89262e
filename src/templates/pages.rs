use axum::http::StatusCode;
use maud::{html, Markup};

use super::components::{genre_tags, search_box, show_card, show_section, Counterpart};
use super::layout::base_layout;
use crate::db::entities::artist;
use crate::services::{ArtistDetail, SearchResults, ShowDisplay, VenueArea, VenueDetail};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400/1a1a1a/ffffff?text=No+Image";

pub fn home_page(flashes: &[String]) -> Markup {
    base_layout(
        "Home",
        flashes,
        html! {
            div class="max-w-3xl mx-auto text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900 mb-4" { "Fyyur" }
                p class="text-gray-600 mb-8" {
                    "Find venues, discover artists and book the shows that bring them together."
                }
                div class="flex justify-center space-x-4" {
                    a href="/venues/create" class="px-4 py-2 bg-primary text-white font-semibold rounded-md" { "Post a venue" }
                    a href="/artists/create" class="px-4 py-2 bg-primary text-white font-semibold rounded-md" { "Post an artist" }
                    a href="/shows/create" class="px-4 py-2 bg-primary text-white font-semibold rounded-md" { "Post a show" }
                }
            }
        },
    )
}

pub fn venues_page(flashes: &[String], areas: &[VenueArea]) -> Markup {
    base_layout(
        "Venues",
        flashes,
        html! {
            div class="flex justify-between items-center mb-8" {
                h1 class="text-3xl font-bold text-gray-900" { "Venues" }
                a href="/venues/create" class="px-4 py-2 bg-primary text-white font-semibold rounded-md" { "New venue" }
            }

            (search_box("/venues/search", "", "Find a venue"))

            @if areas.is_empty() {
                p class="text-gray-600 text-lg" { "No venues listed yet." }
            }
            @for area in areas {
                section class="area mb-8" {
                    h2 class="text-xl font-semibold mb-3" { (area.city) ", " (area.state) }
                    ul class="space-y-2" {
                        @for venue in &area.venues {
                            li {
                                a href={ "/venues/" (venue.id) } class="text-primary hover:underline" { (venue.name) }
                                span class="ml-2 text-sm text-gray-500" {
                                    (venue.num_upcoming_shows) " upcoming shows"
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn search_results_page<T>(
    flashes: &[String],
    title: &str,
    action: &str,
    term: &str,
    results: &SearchResults<T>,
    link: impl Fn(&T) -> (String, String, usize),
) -> Markup {
    base_layout(
        title,
        flashes,
        html! {
            (search_box(action, term, "Search again"))

            h1 class="text-2xl font-bold text-gray-900 mb-6" {
                "Number of search results for \"" (term) "\": "
                span id="result-count" { (results.count) }
            }

            ul class="space-y-3" {
                @for item in &results.data {
                    @let (href, name, upcoming) = link(item);
                    li class="search-result" {
                        a href=(href) class="text-primary font-semibold hover:underline" { (name) }
                        span class="ml-2 text-sm text-gray-500" { (upcoming) " upcoming shows" }
                    }
                }
            }
        },
    )
}

pub fn venue_search_page(
    flashes: &[String],
    term: &str,
    results: &SearchResults<VenueDetail>,
) -> Markup {
    search_results_page(flashes, "Venue search", "/venues/search", term, results, |d| {
        (
            format!("/venues/{}", d.venue.id),
            d.venue.name.clone(),
            d.schedule.upcoming_shows_count(),
        )
    })
}

pub fn artist_search_page(
    flashes: &[String],
    term: &str,
    results: &SearchResults<ArtistDetail>,
) -> Markup {
    search_results_page(flashes, "Artist search", "/artists/search", term, results, |d| {
        (
            format!("/artists/{}", d.artist.id),
            d.artist.name.clone(),
            d.schedule.upcoming_shows_count(),
        )
    })
}

fn external_link(label: &str, href: Option<&str>) -> Markup {
    html! {
        @if let Some(href) = href {
            a href=(href) target="_blank" rel="noopener" class="text-primary hover:underline mr-4" { (label) }
        }
    }
}

pub fn venue_detail_page(flashes: &[String], detail: &VenueDetail) -> Markup {
    let venue = &detail.venue;

    base_layout(
        &venue.name,
        flashes,
        html! {
            div class="grid grid-cols-1 md:grid-cols-3 gap-8" {
                div class="md:col-span-2" {
                    h1 class="text-3xl font-bold text-gray-900" { (venue.name) }
                    p class="text-sm text-gray-500 mb-4" { "ID: " (venue.id) }
                    (genre_tags(&venue.genres))

                    dl class="mt-6 space-y-2 text-gray-700" {
                        div { dt class="inline font-semibold" { "Location: " } dd class="inline" { (venue.city) ", " (venue.state) } }
                        @if let Some(address) = &venue.address {
                            div { dt class="inline font-semibold" { "Address: " } dd class="inline" { (address) } }
                        }
                        div { dt class="inline font-semibold" { "Phone: " } dd class="inline" { (venue.phone) } }
                    }

                    div class="mt-4" {
                        (external_link("Website", venue.website_link.as_deref()))
                        (external_link("Facebook", venue.facebook_link.as_deref()))
                    }

                    div class="seeking mt-6 p-4 rounded-md bg-white shadow-sm" {
                        @if venue.seeking_talent {
                            p class="font-semibold text-green-700" { "Currently seeking talent" }
                            @if let Some(description) = &venue.seeking_description {
                                p class="text-gray-600" { (description) }
                            }
                        } @else {
                            p class="text-gray-500" { "Not currently seeking talent" }
                        }
                    }

                    div class="flex space-x-3 mt-6" {
                        a href={ "/venues/" (venue.id) "/edit" } class="px-4 py-2 bg-gray-200 hover:bg-gray-300 text-gray-700 font-semibold rounded-md" {
                            "Edit"
                        }
                        form method="post" action={ "/venues/" (venue.id) } {
                            button type="submit" class="px-4 py-2 bg-red-600 hover:bg-red-700 text-white font-semibold rounded-md" {
                                "Delete"
                            }
                        }
                    }
                }
                div {
                    img src=(venue.image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE)) alt=(venue.name) class="w-full rounded-lg shadow-md";
                }
            }

            (show_section("Upcoming Shows", detail.schedule.upcoming_shows_count(), detail.schedule.upcoming_shows(), Counterpart::Artist))
            (show_section("Past Shows", detail.schedule.past_shows_count(), detail.schedule.past_shows(), Counterpart::Artist))
        },
    )
}

pub fn artists_page(flashes: &[String], artists: &[artist::Model]) -> Markup {
    base_layout(
        "Artists",
        flashes,
        html! {
            div class="flex justify-between items-center mb-8" {
                h1 class="text-3xl font-bold text-gray-900" { "Artists" }
                a href="/artists/create" class="px-4 py-2 bg-primary text-white font-semibold rounded-md" { "New artist" }
            }

            (search_box("/artists/search", "", "Find an artist"))

            @if artists.is_empty() {
                p class="text-gray-600 text-lg" { "No artists listed yet." }
            } @else {
                ul class="space-y-2" {
                    @for artist in artists {
                        li class="artist" {
                            a href={ "/artists/" (artist.id) } class="text-primary hover:underline" { (artist.name) }
                        }
                    }
                }
            }
        },
    )
}

pub fn artist_detail_page(flashes: &[String], detail: &ArtistDetail) -> Markup {
    let artist = &detail.artist;

    base_layout(
        &artist.name,
        flashes,
        html! {
            div class="grid grid-cols-1 md:grid-cols-3 gap-8" {
                div class="md:col-span-2" {
                    h1 class="text-3xl font-bold text-gray-900" { (artist.name) }
                    p class="text-sm text-gray-500 mb-4" { "ID: " (artist.id) }
                    (genre_tags(&artist.genres))

                    dl class="mt-6 space-y-2 text-gray-700" {
                        div { dt class="inline font-semibold" { "Location: " } dd class="inline" { (artist.city) ", " (artist.state) } }
                        div { dt class="inline font-semibold" { "Phone: " } dd class="inline" { (artist.phone) } }
                    }

                    div class="mt-4" {
                        (external_link("Website", artist.website_link.as_deref()))
                        (external_link("Facebook", artist.facebook_link.as_deref()))
                    }

                    div class="seeking mt-6 p-4 rounded-md bg-white shadow-sm" {
                        @if artist.seeking_venue {
                            p class="font-semibold text-green-700" { "Currently seeking performance venues" }
                            @if let Some(description) = &artist.seeking_description {
                                p class="text-gray-600" { (description) }
                            }
                        } @else {
                            p class="text-gray-500" { "Not currently seeking performance venues" }
                        }
                    }

                    div class="mt-6" {
                        a href={ "/artists/" (artist.id) "/edit" } class="px-4 py-2 bg-gray-200 hover:bg-gray-300 text-gray-700 font-semibold rounded-md" {
                            "Edit"
                        }
                    }
                }
                div {
                    img src=(artist.image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE)) alt=(artist.name) class="w-full rounded-lg shadow-md";
                }
            }

            (show_section("Upcoming Shows", detail.schedule.upcoming_shows_count(), detail.schedule.upcoming_shows(), Counterpart::Venue))
            (show_section("Past Shows", detail.schedule.past_shows_count(), detail.schedule.past_shows(), Counterpart::Venue))
        },
    )
}

pub fn shows_page(flashes: &[String], shows: &[ShowDisplay]) -> Markup {
    base_layout(
        "Shows",
        flashes,
        html! {
            div class="flex justify-between items-center mb-8" {
                h1 class="text-3xl font-bold text-gray-900" { "Shows" }
                a href="/shows/create" class="px-4 py-2 bg-primary text-white font-semibold rounded-md" { "New show" }
            }

            @if shows.is_empty() {
                p class="text-gray-600 text-lg" { "No shows scheduled yet." }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                    @for show in shows {
                        div class="show" {
                            (show_card(show, Counterpart::Artist))
                            a href={ "/venues/" (show.venue_id) } class="venue mt-2 flex items-center text-sm text-gray-600 hover:underline" {
                                img src=(show.venue_image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE)) alt=(show.venue_name) class="w-8 h-8 mr-2 rounded object-cover" loading="lazy";
                                "at " (show.venue_name)
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");

    base_layout(
        title,
        &[],
        html! {
            div class="max-w-xl mx-auto text-center py-16" {
                h1 class="text-5xl font-bold text-gray-900 mb-4" { (status.as_u16()) }
                h2 class="text-xl font-semibold text-gray-700 mb-2" { (title) }
                p class="text-gray-600 mb-8" { (message) }
                a href="/" class="text-primary hover:underline" { "Back to home" }
            }
        },
    )
}
