//! Interactive controls on the dashboard page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which charts a control change refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshScope {
    /// Map, line graph, dance/energy chart and scatter plot.
    All,
    /// Dance/energy chart only.
    DanceEnergy,
    /// Scatter plot only.
    Scatter,
}

/// An input control the binder can listen to.
///
/// Serialized names match the element ids the page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    SongArtistDropdown,
    StartDate,
    EndDate,
    TypeRadio,
    AudioFeatureDropdown,
    XAxisDropdown,
    YAxisDropdown,
}

impl ControlId {
    /// Every control, in binding order.
    pub const ALL: [ControlId; 7] = [
        ControlId::SongArtistDropdown,
        ControlId::StartDate,
        ControlId::EndDate,
        ControlId::TypeRadio,
        ControlId::AudioFeatureDropdown,
        ControlId::XAxisDropdown,
        ControlId::YAxisDropdown,
    ];

    /// Element id / event name of the control.
    pub fn as_str(self) -> &'static str {
        match self {
            ControlId::SongArtistDropdown => "song-artist-dropdown",
            ControlId::StartDate => "start-date",
            ControlId::EndDate => "end-date",
            ControlId::TypeRadio => "type-radio",
            ControlId::AudioFeatureDropdown => "audio-feature-dropdown",
            ControlId::XAxisDropdown => "x-axis-dropdown",
            ControlId::YAxisDropdown => "y-axis-dropdown",
        }
    }

    /// CSS selector the page uses to locate the control.
    pub fn selector(self) -> &'static str {
        match self {
            ControlId::SongArtistDropdown => "#song-artist-dropdown",
            ControlId::StartDate => r#"input[type="date"]:first-of-type"#,
            ControlId::EndDate => r#"input[type="date"]:last-of-type"#,
            ControlId::TypeRadio => r#"input[type="radio"][name="type"]"#,
            ControlId::AudioFeatureDropdown => "#audio-feature-dropdown",
            ControlId::XAxisDropdown => "#x-axis-dropdown",
            ControlId::YAxisDropdown => "#y-axis-dropdown",
        }
    }

    /// Charts refreshed when this control changes.
    pub fn refresh_scope(self) -> RefreshScope {
        match self {
            ControlId::SongArtistDropdown
            | ControlId::StartDate
            | ControlId::EndDate
            | ControlId::TypeRadio => RefreshScope::All,
            ControlId::AudioFeatureDropdown => RefreshScope::DanceEnergy,
            ControlId::XAxisDropdown | ControlId::YAxisDropdown => RefreshScope::Scatter,
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_scopes() {
        assert_eq!(ControlId::SongArtistDropdown.refresh_scope(), RefreshScope::All);
        assert_eq!(ControlId::StartDate.refresh_scope(), RefreshScope::All);
        assert_eq!(ControlId::EndDate.refresh_scope(), RefreshScope::All);
        assert_eq!(ControlId::TypeRadio.refresh_scope(), RefreshScope::All);
        assert_eq!(
            ControlId::AudioFeatureDropdown.refresh_scope(),
            RefreshScope::DanceEnergy
        );
        assert_eq!(ControlId::XAxisDropdown.refresh_scope(), RefreshScope::Scatter);
        assert_eq!(ControlId::YAxisDropdown.refresh_scope(), RefreshScope::Scatter);
    }

    #[test]
    fn test_serde_uses_element_ids() {
        for control in ControlId::ALL {
            let json = serde_json::to_string(&control).unwrap();
            assert_eq!(json, format!("\"{}\"", control.as_str()));
        }
    }
}
