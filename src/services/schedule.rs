use chrono::NaiveDateTime;
use serde::Serialize;

use crate::db::repositories::ShowListing;

/// Display record for one show, carrying both sides of the booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowDisplay {
    pub show_id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    /// ISO-ish start time, formatted for display by the templates.
    pub start_time: String,
}

impl From<ShowListing> for ShowDisplay {
    fn from(listing: ShowListing) -> Self {
        Self {
            show_id: listing.show_id,
            venue_id: listing.venue_id,
            venue_name: listing.venue_name,
            venue_image_link: listing.venue_image_link,
            artist_id: listing.artist_id,
            artist_name: listing.artist_name,
            artist_image_link: listing.artist_image_link,
            start_time: listing.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Shows partitioned around a reference time. Counts always match list lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowSchedule {
    past_shows: Vec<ShowDisplay>,
    past_shows_count: usize,
    upcoming_shows: Vec<ShowDisplay>,
    upcoming_shows_count: usize,
}

impl ShowSchedule {
    /// Shows strictly before `now` are past; everything else is upcoming.
    pub fn split(listings: impl IntoIterator<Item = ShowListing>, now: NaiveDateTime) -> Self {
        let (past, upcoming): (Vec<_>, Vec<_>) = listings
            .into_iter()
            .partition(|listing| listing.start_time < now);

        let past_shows: Vec<ShowDisplay> = past.into_iter().map(ShowDisplay::from).collect();
        let upcoming_shows: Vec<ShowDisplay> =
            upcoming.into_iter().map(ShowDisplay::from).collect();

        Self {
            past_shows_count: past_shows.len(),
            past_shows,
            upcoming_shows_count: upcoming_shows.len(),
            upcoming_shows,
        }
    }

    pub fn past_shows(&self) -> &[ShowDisplay] {
        &self.past_shows
    }

    pub fn past_shows_count(&self) -> usize {
        self.past_shows_count
    }

    pub fn upcoming_shows(&self) -> &[ShowDisplay] {
        &self.upcoming_shows
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows_count
    }
}

/// Wall-clock time used for past/upcoming classification.
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn listing(show_id: i32, start_time: NaiveDateTime) -> ShowListing {
        ShowListing {
            show_id,
            start_time,
            venue_id: 1,
            venue_name: "The Musical Hop".to_string(),
            venue_image_link: None,
            artist_id: 2,
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: Some("https://images.example.com/petals.jpg".to_string()),
        }
    }

    #[test]
    fn test_split_partitions_around_now() {
        let now = at(15, 12);
        let schedule = ShowSchedule::split(
            vec![
                listing(1, at(1, 20)),
                listing(2, at(20, 20)),
                listing(3, at(14, 23)),
                listing(4, at(30, 18)),
            ],
            now,
        );

        let past: Vec<i32> = schedule.past_shows().iter().map(|s| s.show_id).collect();
        let upcoming: Vec<i32> = schedule.upcoming_shows().iter().map(|s| s.show_id).collect();
        assert_eq!(past, vec![1, 3]);
        assert_eq!(upcoming, vec![2, 4]);
        assert_eq!(schedule.past_shows_count(), 2);
        assert_eq!(schedule.upcoming_shows_count(), 2);
    }

    #[test]
    fn test_show_at_exactly_now_is_upcoming() {
        let now = at(15, 12);
        let schedule = ShowSchedule::split(
            vec![listing(1, now), listing(2, now - Duration::seconds(1))],
            now,
        );

        assert_eq!(schedule.upcoming_shows()[0].show_id, 1);
        assert_eq!(schedule.past_shows()[0].show_id, 2);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = ShowSchedule::split(Vec::new(), at(1, 0));
        assert_eq!(schedule, ShowSchedule::default());
        assert_eq!(schedule.past_shows_count(), 0);
        assert!(schedule.upcoming_shows().is_empty());
    }

    #[test]
    fn test_display_record_carries_both_sides() {
        let display = ShowDisplay::from(listing(9, at(3, 21)));

        assert_eq!(display.venue_name, "The Musical Hop");
        assert_eq!(display.artist_name, "Guns N Petals");
        assert_eq!(display.start_time, "2030-06-03 21:00:00");
    }
}
