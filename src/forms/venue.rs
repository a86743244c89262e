use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::Deserialize;

use super::{parse_flag, Checker, FieldErrors};
use crate::db::entities::{venue, GenreList};
use crate::db::enums::{Genre, UsState};

/// Raw venue form as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub website_link: String,
    pub facebook_link: String,
    pub seeking_talent: Option<String>,
    pub seeking_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: UsState,
    pub address: Option<String>,
    pub phone: String,
    pub genres: Vec<Genre>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Pre-fills the edit form from a stored venue.
    pub fn from_model(venue: &venue::Model) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone().unwrap_or_default(),
            phone: venue.phone.clone(),
            genres: venue.genres.0.clone(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent.then(|| "y".to_string()),
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn seeking_talent(&self) -> bool {
        parse_flag(self.seeking_talent.as_deref())
    }

    /// Name for flash messages, falling back when the field was left blank.
    pub fn display_name(&self) -> &str {
        match self.name.trim() {
            "" => "(unnamed)",
            name => name,
        }
    }

    pub fn validate(&self) -> Result<VenueInput, FieldErrors> {
        let mut check = Checker::default();

        let name = check.required("name", &self.name);
        let city = check.required("city", &self.city);
        let state = check.state("state", &self.state);
        let phone = check.phone("phone", &self.phone);
        let address = check.optional(&self.address);
        let genres = check.genres("genres", &self.genres);
        let image_link = check.optional_url("image_link", &self.image_link);
        let website_link = check.optional_url("website_link", &self.website_link);
        let facebook_link = check.optional_url("facebook_link", &self.facebook_link);
        let seeking_description = check.optional(&self.seeking_description);

        match (name, city, state, phone) {
            (Some(name), Some(city), Some(state), Some(phone)) if check.is_ok() => Ok(VenueInput {
                name,
                city,
                state,
                address,
                phone,
                genres,
                image_link,
                website_link,
                facebook_link,
                seeking_talent: self.seeking_talent(),
                seeking_description,
            }),
            _ => Err(check.into_errors()),
        }
    }
}

impl IntoActiveModel<venue::ActiveModel> for VenueInput {
    fn into_active_model(self) -> venue::ActiveModel {
        venue::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            city: Set(self.city),
            state: Set(self.state.into()),
            address: Set(self.address),
            phone: Set(self.phone),
            genres: Set(GenreList(self.genres.into_iter().map(String::from).collect())),
            image_link: Set(self.image_link),
            website_link: Set(self.website_link),
            facebook_link: Set(self.facebook_link),
            seeking_talent: Set(self.seeking_talent),
            seeking_description: Set(self.seeking_description),
        }
    }
}
