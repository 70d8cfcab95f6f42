//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; implementations live in
//! `crate::infrastructure::dataset`. Mock implementations are generated via
//! `mockall` for unit tests.

pub mod track_repository;

pub use track_repository::{
    CountryPopularity, DailyPopularity, FeaturePoint, FeatureRanking, GenreCount, SnapshotFilter,
    TrackRepository,
};

#[cfg(test)]
pub use track_repository::MockTrackRepository;
