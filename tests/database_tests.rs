//! Repository and schema tests against an in-memory database
//!
//! Covers:
//! - Foreign key behavior (venue cascade, artist restrict, dangling references)
//! - Column defaults
//! - Search escaping and case folding
//! - Aggregate and joined queries

use chrono::{NaiveDate, NaiveDateTime};
use fake::{faker::address::en::CityName, faker::company::en::CompanyName, Fake};
use pretty_assertions::assert_eq;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, Set, Statement};

use fyyur::db::entities::{artist, show, venue, GenreList};
use fyyur::error::AppError;
use fyyur::test_utils::*;

fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn test_seeking_talent_defaults_to_false() {
    let db = setup_test_db().await;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "INSERT INTO venues (name, city, state, phone, genres) \
         VALUES ('The Dueling Pianos Bar', 'New York', 'NY', '914-003-1132', '[]')",
    ))
    .await
    .unwrap();

    let venue = venue::Entity::find().one(&db).await.unwrap().unwrap();
    assert!(!venue.seeking_talent);
    assert_eq!(venue.genres, GenreList::default());
    assert_eq!(venue.address, None);
}

#[tokio::test]
async fn test_genres_round_trip_through_json_column() {
    let state = setup_test_app_state().await;

    let created = state
        .venues()
        .create(venue::ActiveModel {
            name: Set("The Musical Hop".to_string()),
            city: Set("San Francisco".to_string()),
            state: Set("CA".to_string()),
            address: Set(Some("1015 Folsom Street".to_string())),
            phone: Set("123-123-1234".to_string()),
            genres: Set(GenreList(vec![
                "Jazz".to_string(),
                "Reggae".to_string(),
                "Swing".to_string(),
            ])),
            image_link: Set(None),
            website_link: Set(Some("https://www.themusicalhop.com".to_string())),
            facebook_link: Set(None),
            seeking_talent: Set(true),
            seeking_description: Set(Some("We are on the lookout for a local artist".to_string())),
            ..Default::default()
        })
        .await
        .unwrap();

    let loaded = state.venues().get(created.id).await.unwrap();
    assert_eq!(loaded, created);
    assert!(loaded.genres.contains("Reggae"));
}

#[tokio::test]
async fn test_show_requires_existing_venue_and_artist() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    let result = state
        .shows()
        .create(show::ActiveModel {
            venue_id: Set(999),
            artist_id: Set(artist.id),
            start_time: Set(at(2035, 4, 1, 20)),
            ..Default::default()
        })
        .await;

    let err = result.unwrap_err();
    assert!(err.is_persistence_failure());
    assert_eq!(show::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_deleting_venue_removes_its_shows() {
    let state = setup_test_app_state().await;
    let hop = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let park = create_test_venue(&state.db, "Park Square Live Music", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    create_test_show(&state.db, hop.id, artist.id, at(2019, 5, 21, 21)).await;
    create_test_show(&state.db, hop.id, artist.id, at(2100, 1, 1, 20)).await;
    create_test_show(&state.db, park.id, artist.id, at(2100, 1, 2, 20)).await;

    let removed = state.venues().delete(hop.id).await.unwrap();
    assert_eq!(removed.name, "The Musical Hop");

    assert!(state.venues().find_by_id(hop.id).await.unwrap().is_none());
    let remaining = show::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].venue_id, park.id);
}

#[tokio::test]
async fn test_delete_missing_venue_is_not_found() {
    let state = setup_test_app_state().await;

    let err = state.venues().delete(42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_artist_with_shows_cannot_be_deleted() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Matt Quevedo").await;
    create_test_show(&state.db, venue.id, artist.id, at(2019, 6, 15, 23)).await;

    let result = artist::Entity::delete_by_id(artist.id).exec(&state.db).await;

    assert!(result.is_err());
    assert_eq!(show::Entity::find().count(&state.db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_overwrites_every_field_and_keeps_id() {
    let state = setup_test_app_state().await;
    let original = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let updated = state
        .venues()
        .update(
            original.id,
            venue::ActiveModel {
                name: Set("The Dueling Pianos Bar".to_string()),
                city: Set("New York".to_string()),
                state: Set("NY".to_string()),
                address: Set(Some("335 Delancey Street".to_string())),
                phone: Set("914-003-1132".to_string()),
                genres: Set(GenreList(vec!["Classical".to_string()])),
                image_link: Set(None),
                website_link: Set(None),
                facebook_link: Set(None),
                seeking_talent: Set(true),
                seeking_description: Set(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.city, "New York");
    assert_eq!(updated.state, "NY");
    assert!(updated.seeking_talent);
    assert_eq!(venue::Entity::find().count(&state.db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_missing_artist_is_not_found() {
    let state = setup_test_app_state().await;
    let template = create_test_artist(&state.db, "Template").await;

    let mut changes: artist::ActiveModel = template.into();
    changes.name = Set("Ghost".to_string());

    let err = state.artists().update(77, changes).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_venue(&state.db, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    create_test_venue(&state.db, "The Dueling Pianos Bar", "New York", "NY").await;

    let hop = state.venues().search_by_name("HOP").await.unwrap();
    assert_eq!(hop.len(), 1);
    assert_eq!(hop[0].name, "The Musical Hop");

    let music = state.venues().search_by_name("Music").await.unwrap();
    assert_eq!(music.len(), 2);

    let everything = state.venues().search_by_name("").await.unwrap();
    assert_eq!(everything.len(), 3);
}

#[tokio::test]
async fn test_search_folds_term_and_name_alike() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "ÉCLAIR Hall", "Montpelier", "VT").await;
    create_test_venue(&state.db, "Crème Brûlée Lounge", "Burlington", "VT").await;

    let exact = state.venues().search_by_name("ÉCLAIR").await.unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].name, "ÉCLAIR Hall");

    let mixed = state.venues().search_by_name("ÉCLAIR HALL").await.unwrap();
    assert_eq!(mixed.len(), 1);

    let accented = state.venues().search_by_name("brûlée").await.unwrap();
    assert_eq!(accented.len(), 1);
    assert_eq!(accented[0].name, "Crème Brûlée Lounge");
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let state = setup_test_app_state().await;
    create_test_artist(&state.db, "100% Soul").await;
    create_test_artist(&state.db, "The Wild Sax Band").await;
    create_test_artist(&state.db, "Yes!").await;

    let percent = state.artists().search_by_name("%").await.unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].name, "100% Soul");

    let underscore = state.artists().search_by_name("_").await.unwrap();
    assert!(underscore.is_empty());

    let bang = state.artists().search_by_name("s!").await.unwrap();
    assert_eq!(bang.len(), 1);
    assert_eq!(bang[0].name, "Yes!");
}

#[tokio::test]
async fn test_search_finds_generated_names() {
    let state = setup_test_app_state().await;
    let name: String = CompanyName().fake();
    let city: String = CityName().fake();
    let venue = create_test_venue(&state.db, &name, &city, "OR").await;

    let found = state.venues().search_by_name(&name.to_uppercase()).await.unwrap();
    assert!(found.iter().any(|v| v.id == venue.id));
}

#[tokio::test]
async fn test_upcoming_show_counts_per_venue() {
    let state = setup_test_app_state().await;
    let hop = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let park = create_test_venue(&state.db, "Park Square Live Music", "San Francisco", "CA").await;
    let quiet = create_test_venue(&state.db, "Quiet Room", "Austin", "TX").await;
    let artist = create_test_artist(&state.db, "The Wild Sax Band").await;

    let now = at(2030, 1, 1, 12);
    create_test_show(&state.db, hop.id, artist.id, at(2029, 12, 31, 20)).await;
    create_test_show(&state.db, hop.id, artist.id, at(2030, 1, 1, 12)).await;
    create_test_show(&state.db, hop.id, artist.id, at(2030, 2, 1, 20)).await;
    create_test_show(&state.db, park.id, artist.id, at(2031, 1, 1, 20)).await;

    let counts = state.venues().upcoming_show_counts(now).await.unwrap();

    assert_eq!(counts.get(&hop.id), Some(&2));
    assert_eq!(counts.get(&park.id), Some(&1));
    assert_eq!(counts.get(&quiet.id), None);
}

#[tokio::test]
async fn test_show_listings_join_names_in_start_order() {
    let state = setup_test_app_state().await;
    let hop = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let park = create_test_venue(&state.db, "Park Square Live Music", "San Francisco", "CA").await;
    let petals = create_test_artist(&state.db, "Guns N Petals").await;
    let sax = create_test_artist(&state.db, "The Wild Sax Band").await;

    create_test_show(&state.db, park.id, sax.id, at(2035, 4, 8, 20)).await;
    create_test_show(&state.db, hop.id, petals.id, at(2019, 5, 21, 21)).await;

    let all = state.shows().list_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].venue_name, "The Musical Hop");
    assert_eq!(all[0].artist_name, "Guns N Petals");
    assert_eq!(all[1].venue_name, "Park Square Live Music");
    assert_eq!(all[1].artist_name, "The Wild Sax Band");

    let for_sax = state.shows().for_artists(vec![sax.id]).await.unwrap();
    assert_eq!(for_sax.len(), 1);
    assert_eq!(for_sax[0].venue_id, park.id);

    assert!(state.shows().for_venues(Vec::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_options_are_sorted_by_name() {
    let state = setup_test_app_state().await;
    create_test_artist(&state.db, "The Wild Sax Band").await;
    create_test_artist(&state.db, "Guns N Petals").await;
    create_test_artist(&state.db, "Matt Quevedo").await;

    let names: Vec<String> = state
        .artists()
        .options()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.name)
        .collect();

    assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);
}

#[tokio::test]
async fn test_raw_insert_keeps_model_shape() {
    let db = setup_test_db().await;
    let artist = artist::ActiveModel {
        name: Set("Solo".to_string()),
        city: Set("Denver".to_string()),
        state: Set("CO".to_string()),
        phone: Set("303-555-0199".to_string()),
        genres: Set(GenreList::default()),
        seeking_venue: Set(false),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    assert_eq!(artist.image_link, None);
    assert_eq!(artist.seeking_description, None);
}
