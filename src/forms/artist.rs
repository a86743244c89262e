use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::Deserialize;

use super::{parse_flag, Checker, FieldErrors};
use crate::db::entities::{artist, GenreList};
use crate::db::enums::{Genre, UsState};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub website_link: String,
    pub facebook_link: String,
    pub seeking_venue: Option<String>,
    pub seeking_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: UsState,
    pub phone: String,
    pub genres: Vec<Genre>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn from_model(artist: &artist::Model) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.0.clone(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue.then(|| "y".to_string()),
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn seeking_venue(&self) -> bool {
        parse_flag(self.seeking_venue.as_deref())
    }

    pub fn display_name(&self) -> &str {
        match self.name.trim() {
            "" => "(unnamed)",
            name => name,
        }
    }

    pub fn validate(&self) -> Result<ArtistInput, FieldErrors> {
        let mut check = Checker::default();

        let name = check.required("name", &self.name);
        let city = check.required("city", &self.city);
        let state = check.state("state", &self.state);
        let phone = check.phone("phone", &self.phone);
        let genres = check.genres("genres", &self.genres);
        let image_link = check.optional_url("image_link", &self.image_link);
        let website_link = check.optional_url("website_link", &self.website_link);
        let facebook_link = check.optional_url("facebook_link", &self.facebook_link);
        let seeking_description = check.optional(&self.seeking_description);

        match (name, city, state, phone) {
            (Some(name), Some(city), Some(state), Some(phone)) if check.is_ok() => Ok(ArtistInput {
                name,
                city,
                state,
                phone,
                genres,
                image_link,
                website_link,
                facebook_link,
                seeking_venue: self.seeking_venue(),
                seeking_description,
            }),
            _ => Err(check.into_errors()),
        }
    }
}

impl IntoActiveModel<artist::ActiveModel> for ArtistInput {
    fn into_active_model(self) -> artist::ActiveModel {
        artist::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            city: Set(self.city),
            state: Set(self.state.into()),
            phone: Set(self.phone),
            genres: Set(GenreList(self.genres.into_iter().map(String::from).collect())),
            image_link: Set(self.image_link),
            website_link: Set(self.website_link),
            facebook_link: Set(self.facebook_link),
            seeking_venue: Set(self.seeking_venue),
            seeking_description: Set(self.seeking_description),
        }
    }
}
