use chrono::NaiveDateTime;
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::Deserialize;

use super::{Checker, FieldErrors};
use crate::db::entities::show;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowInput {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

impl ShowForm {
    /// Existence of the referenced rows is left to the foreign keys.
    pub fn validate(&self) -> Result<ShowInput, FieldErrors> {
        let mut check = Checker::default();

        let artist_id = check.id("artist_id", &self.artist_id);
        let venue_id = check.id("venue_id", &self.venue_id);
        let start_time = check.datetime("start_time", &self.start_time);

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if check.is_ok() => Ok(ShowInput {
                artist_id,
                venue_id,
                start_time,
            }),
            _ => Err(check.into_errors()),
        }
    }
}

impl IntoActiveModel<show::ActiveModel> for ShowInput {
    fn into_active_model(self) -> show::ActiveModel {
        show::ActiveModel {
            id: NotSet,
            start_time: Set(self.start_time),
            venue_id: Set(self.venue_id),
            artist_id: Set(self.artist_id),
        }
    }
}
