#![allow(dead_code)]

use std::sync::Arc;

use unwrapped_dashboard::domain::repositories::TrackRepository;
use unwrapped_dashboard::infrastructure::dataset::{InMemoryTrackRepository, csv_loader};
use unwrapped_dashboard::state::{AppState, DashboardSettings};

/// Small dataset in the column layout of the public top-songs export.
pub const FIXTURE_CSV: &str = "\
spotify_id,name,artists,daily_rank,country,snapshot_date,popularity,genre,danceability,energy,loudness,speechiness,acousticness,instrumentalness,liveness,valence,tempo,duration_ms
1,Blinding Lights,The Weeknd,1,BR,2020-01-01,90,Pop,0.51,0.73,-5.9,0.06,0.001,0.0,0.09,0.33,171.0,200040
1,Blinding Lights,The Weeknd,3,Japan,2020-03-15,70,Pop,0.51,0.73,-5.9,0.06,0.001,0.0,0.09,0.33,171.0,200040
2,Save Your Tears,The Weeknd,5,BR,2020-06-01,60,Pop,0.68,0.83,-5.5,0.03,0.02,0.0,0.54,0.64,118.0,215627
3,Dance Monkey,Tones and I,2,AU,2020-02-10,80,Indie,0.82,0.59,-6.4,0.09,0.69,0.0001,0.15,0.51,98.0,209438
4,Levitating,Dua Lipa,1,US,2021-04-01,85,Pop,0.70,0.83,-3.8,0.06,0.01,0.0,0.07,0.92,103.0,203064
5,Untitled Demo,Nobody,,,,,,,,,,,,,,,
";

pub fn fixture_tracks() -> Arc<dyn TrackRepository> {
    let snapshots = csv_loader::load_reader(FIXTURE_CSV.as_bytes()).unwrap();
    Arc::new(InMemoryTrackRepository::new(snapshots))
}

pub fn create_test_state() -> AppState {
    AppState::new(fixture_tracks(), DashboardSettings::default())
}

pub fn create_empty_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryTrackRepository::default()),
        DashboardSettings::default(),
    )
}
