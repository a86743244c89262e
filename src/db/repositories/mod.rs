use std::collections::HashMap;

use chrono::NaiveDateTime;
use sea_orm::sea_query::{Expr, IntoColumnRef, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
    TransactionTrait,
};

use crate::db::entities::{artist, show, venue};
use crate::error::{AppError, Result};

/// A show flattened with the display fields of its venue and artist.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct ShowListing {
    pub show_id: i32,
    pub start_time: NaiveDateTime,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

/// Id and name pair used to populate select boxes.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct NamedOption {
    pub id: i32,
    pub name: String,
}

/// Case-insensitive substring match with LIKE wildcards in `term` taken literally.
///
/// Both sides are folded by the database's `LOWER` so the column and the term
/// always get the same case mapping.
fn name_contains(column: impl IntoColumnRef, term: &str) -> SimpleExpr {
    let escaped = term
        .replace('!', "!!")
        .replace('%', "!%")
        .replace('_', "!_");

    Expr::cust_with_exprs(
        "LOWER($1) LIKE LOWER($2) ESCAPE '!'",
        [
            Expr::col(column).into(),
            Expr::val(format!("%{}%", escaped)).into(),
        ],
    )
}

pub struct VenueRepository {
    db: DatabaseConnection,
}

impl VenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All venues ordered by state, then city, then id.
    pub async fn list_by_location(&self) -> Result<Vec<venue::Model>> {
        Ok(venue::Entity::find()
            .order_by_asc(venue::Column::State)
            .order_by_asc(venue::Column::City)
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<venue::Model>> {
        Ok(venue::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> Result<venue::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))
    }

    pub async fn search_by_name(&self, term: &str) -> Result<Vec<venue::Model>> {
        Ok(venue::Entity::find()
            .filter(name_contains((venue::Entity, venue::Column::Name), term))
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn options(&self) -> Result<Vec<NamedOption>> {
        Ok(venue::Entity::find()
            .select_only()
            .column(venue::Column::Id)
            .column(venue::Column::Name)
            .order_by_asc(venue::Column::Name)
            .into_model::<NamedOption>()
            .all(&self.db)
            .await?)
    }

    /// Upcoming show count per venue, from a single aggregate query.
    pub async fn upcoming_show_counts(&self, now: NaiveDateTime) -> Result<HashMap<i32, i64>> {
        let rows: Vec<(i32, i64)> = show::Entity::find()
            .select_only()
            .column(show::Column::VenueId)
            .column_as(show::Column::Id.count(), "show_count")
            .filter(show::Column::StartTime.gte(now))
            .group_by(show::Column::VenueId)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    pub async fn create(&self, venue: venue::ActiveModel) -> Result<venue::Model> {
        let txn = self.db.begin().await?;
        let created = venue.insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(venue_id = created.id, "Venue created");
        Ok(created)
    }

    /// Overwrites every editable column of venue `id`.
    pub async fn update(&self, id: i32, mut venue: venue::ActiveModel) -> Result<venue::Model> {
        let txn = self.db.begin().await?;

        if venue::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(AppError::NotFound(format!("Venue {} not found", id)));
        }

        venue.id = Unchanged(id);
        let updated = venue.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(venue_id = id, "Venue updated");
        Ok(updated)
    }

    /// Deletes the venue together with its shows and returns the removed row.
    pub async fn delete(&self, id: i32) -> Result<venue::Model> {
        let txn = self.db.begin().await?;

        let existing = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

        let shows = show::Entity::delete_many()
            .filter(show::Column::VenueId.eq(id))
            .exec(&txn)
            .await?;
        venue::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        tracing::info!(
            venue_id = id,
            shows_removed = shows.rows_affected,
            "Venue deleted"
        );
        Ok(existing)
    }
}

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> Result<artist::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))
    }

    pub async fn search_by_name(&self, term: &str) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .filter(name_contains((artist::Entity, artist::Column::Name), term))
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn options(&self) -> Result<Vec<NamedOption>> {
        Ok(artist::Entity::find()
            .select_only()
            .column(artist::Column::Id)
            .column(artist::Column::Name)
            .order_by_asc(artist::Column::Name)
            .into_model::<NamedOption>()
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, artist: artist::ActiveModel) -> Result<artist::Model> {
        let txn = self.db.begin().await?;
        let created = artist.insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(artist_id = created.id, "Artist created");
        Ok(created)
    }

    /// Overwrites every editable column of artist `id`.
    pub async fn update(&self, id: i32, mut artist: artist::ActiveModel) -> Result<artist::Model> {
        let txn = self.db.begin().await?;

        if artist::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(AppError::NotFound(format!("Artist {} not found", id)));
        }

        artist.id = Unchanged(id);
        let updated = artist.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(artist_id = id, "Artist updated");
        Ok(updated)
    }
}

pub struct ShowRepository {
    db: DatabaseConnection,
}

impl ShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn listings() -> Select<show::Entity> {
        show::Entity::find()
            .select_only()
            .column_as(show::Column::Id, "show_id")
            .column_as(show::Column::StartTime, "start_time")
            .column_as(show::Column::VenueId, "venue_id")
            .column_as(venue::Column::Name, "venue_name")
            .column_as(venue::Column::ImageLink, "venue_image_link")
            .column_as(show::Column::ArtistId, "artist_id")
            .column_as(artist::Column::Name, "artist_name")
            .column_as(artist::Column::ImageLink, "artist_image_link")
            .join(JoinType::InnerJoin, show::Relation::Venue.def())
            .join(JoinType::InnerJoin, show::Relation::Artist.def())
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
    }

    /// Every show joined with its venue and artist, earliest first.
    pub async fn list_all(&self) -> Result<Vec<ShowListing>> {
        Ok(Self::listings()
            .into_model::<ShowListing>()
            .all(&self.db)
            .await?)
    }

    pub async fn for_venues(&self, venue_ids: Vec<i32>) -> Result<Vec<ShowListing>> {
        if venue_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(Self::listings()
            .filter(show::Column::VenueId.is_in(venue_ids))
            .into_model::<ShowListing>()
            .all(&self.db)
            .await?)
    }

    pub async fn for_artists(&self, artist_ids: Vec<i32>) -> Result<Vec<ShowListing>> {
        if artist_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(Self::listings()
            .filter(show::Column::ArtistId.is_in(artist_ids))
            .into_model::<ShowListing>()
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, show: show::ActiveModel) -> Result<show::Model> {
        let txn = self.db.begin().await?;
        let created = show.insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(
            show_id = created.id,
            venue_id = created.venue_id,
            artist_id = created.artist_id,
            "Show created"
        );
        Ok(created)
    }
}
