use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::db::entities::{artist, venue};
use crate::db::repositories::ShowListing;
use crate::error::Result;
use crate::services::schedule::{ShowDisplay, ShowSchedule};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venues sharing one (state, city) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueArea {
    pub state: String,
    pub city: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    pub venue: venue::Model,
    pub schedule: ShowSchedule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    pub artist: artist::Model,
    pub schedule: ShowSchedule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Groups venues by (state, city), keeping the order the venues arrive in.
pub fn group_by_area(venues: Vec<venue::Model>, upcoming: &HashMap<i32, i64>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for venue in venues {
        let key = (venue.state.clone(), venue.city.clone());
        let slot = *index.entry(key).or_insert_with(|| {
            areas.push(VenueArea {
                state: venue.state.clone(),
                city: venue.city.clone(),
                venues: Vec::new(),
            });
            areas.len() - 1
        });

        areas[slot].venues.push(VenueSummary {
            id: venue.id,
            num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
            name: venue.name,
        });
    }

    areas
}

fn bucket_by<F>(listings: Vec<ShowListing>, key: F) -> HashMap<i32, Vec<ShowListing>>
where
    F: Fn(&ShowListing) -> i32,
{
    let mut buckets: HashMap<i32, Vec<ShowListing>> = HashMap::new();
    for listing in listings {
        buckets.entry(key(&listing)).or_default().push(listing);
    }
    buckets
}

pub async fn venue_areas(state: &AppState, now: NaiveDateTime) -> Result<Vec<VenueArea>> {
    let venues = state.venues().list_by_location().await?;
    let upcoming = state.venues().upcoming_show_counts(now).await?;

    Ok(group_by_area(venues, &upcoming))
}

pub async fn venue_detail(state: &AppState, id: i32, now: NaiveDateTime) -> Result<VenueDetail> {
    let venue = state.venues().get(id).await?;
    let shows = state.shows().for_venues(vec![id]).await?;

    Ok(VenueDetail {
        venue,
        schedule: ShowSchedule::split(shows, now),
    })
}

pub async fn artist_detail(state: &AppState, id: i32, now: NaiveDateTime) -> Result<ArtistDetail> {
    let artist = state.artists().get(id).await?;
    let shows = state.shows().for_artists(vec![id]).await?;

    Ok(ArtistDetail {
        artist,
        schedule: ShowSchedule::split(shows, now),
    })
}

pub async fn search_venues(
    state: &AppState,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults<VenueDetail>> {
    let venues = state.venues().search_by_name(term).await?;
    let ids = venues.iter().map(|v| v.id).collect();
    let mut shows = bucket_by(state.shows().for_venues(ids).await?, |s| s.venue_id);

    let data = venues
        .into_iter()
        .map(|venue| VenueDetail {
            schedule: ShowSchedule::split(shows.remove(&venue.id).unwrap_or_default(), now),
            venue,
        })
        .collect();

    tracing::debug!(term, "Venue search");
    Ok(SearchResults::new(data))
}

pub async fn search_artists(
    state: &AppState,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults<ArtistDetail>> {
    let artists = state.artists().search_by_name(term).await?;
    let ids = artists.iter().map(|a| a.id).collect();
    let mut shows = bucket_by(state.shows().for_artists(ids).await?, |s| s.artist_id);

    let data = artists
        .into_iter()
        .map(|artist| ArtistDetail {
            schedule: ShowSchedule::split(shows.remove(&artist.id).unwrap_or_default(), now),
            artist,
        })
        .collect();

    tracing::debug!(term, "Artist search");
    Ok(SearchResults::new(data))
}

/// Every show with its venue and artist display fields.
pub async fn show_board(state: &AppState) -> Result<Vec<ShowDisplay>> {
    let shows = state.shows().list_all().await?;
    Ok(shows.into_iter().map(ShowDisplay::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::entities::GenreList;
    use pretty_assertions::assert_eq;

    fn venue(id: i32, name: &str, city: &str, state: &str) -> venue::Model {
        venue::Model {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: None,
            phone: "415-555-0100".to_string(),
            genres: GenreList::default(),
            image_link: None,
            website_link: None,
            facebook_link: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }

    #[test]
    fn test_group_by_area() {
        let venues = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
        ];
        let upcoming = HashMap::from([(3, 1)]);

        let areas = group_by_area(venues, &upcoming);

        assert_eq!(
            areas,
            vec![
                VenueArea {
                    state: "CA".into(),
                    city: "San Francisco".into(),
                    venues: vec![
                        VenueSummary {
                            id: 1,
                            name: "The Musical Hop".into(),
                            num_upcoming_shows: 0,
                        },
                        VenueSummary {
                            id: 3,
                            name: "Park Square Live Music & Coffee".into(),
                            num_upcoming_shows: 1,
                        },
                    ],
                },
                VenueArea {
                    state: "NY".into(),
                    city: "New York".into(),
                    venues: vec![VenueSummary {
                        id: 2,
                        name: "The Dueling Pianos Bar".into(),
                        num_upcoming_shows: 0,
                    }],
                },
            ]
        );
    }

    #[test]
    fn test_same_city_name_in_different_states_is_separate() {
        let venues = vec![
            venue(1, "Harbor Hall", "Portland", "ME"),
            venue(2, "Rose Room", "Portland", "OR"),
        ];

        let areas = group_by_area(venues, &HashMap::new());

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].state, "ME");
        assert_eq!(areas[1].state, "OR");
    }

    #[test]
    fn test_group_by_area_empty() {
        assert!(group_by_area(Vec::new(), &HashMap::new()).is_empty());
    }
}
