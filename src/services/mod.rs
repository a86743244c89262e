pub mod directory;
pub mod schedule;

pub use directory::{
    ArtistDetail, SearchResults, VenueArea, VenueDetail, VenueSummary,
};
pub use schedule::{local_now, ShowDisplay, ShowSchedule};
