//! DTOs for page control events.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::charts::MAX_CONTROL_VALUE_LEN;
use crate::application::services::{BinderOutcome, ChartFailure, ControlEvent};
use crate::domain::controls::{ControlDocument, ControlId, ControlSnapshot, FooterPosition, RefreshScope};
use crate::domain::entities::{ChartFigure, ChartKind};

/// An event posted by the dashboard page.
///
/// ```json
/// { "event": "change", "control": "audio-feature-dropdown",
///   "controls": { "audio-feature-dropdown": "tempo" } }
/// { "event": "scroll", "scroll_y": 1240.0 }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventRequest {
    Change {
        control: ControlId,
        #[serde(default)]
        controls: ControlSnapshot,
    },
    Scroll {
        scroll_y: f64,
    },
}

impl EventRequest {
    /// Splits the request into the binder event and the page snapshot.
    pub fn into_parts(self) -> (ControlEvent, ControlSnapshot) {
        match self {
            EventRequest::Change { control, controls } => (ControlEvent::Change(control), controls),
            EventRequest::Scroll { scroll_y } => {
                (ControlEvent::Scroll { scroll_y }, ControlSnapshot::new())
            }
        }
    }
}

impl Validate for EventRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match self {
            EventRequest::Change { controls, .. } => {
                for control in ControlId::ALL {
                    if controls
                        .value(control)
                        .is_some_and(|v| v.chars().count() > MAX_CONTROL_VALUE_LEN)
                    {
                        let mut error = ValidationError::new("length");
                        error.message = Some("Control value is too long".into());
                        errors.add(control.as_str(), error);
                    }
                }
            }
            EventRequest::Scroll { scroll_y } => check_scroll(*scroll_y, &mut errors),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_scroll(scroll_y: f64, errors: &mut ValidationErrors) {
    if !scroll_y.is_finite() {
        errors.add("scroll_y", ValidationError::new("finite"));
    }
}

/// A page scroll, posted to `/api/footer`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScrollRequest {
    pub scroll_y: f64,
}

impl Validate for ScrollRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_scroll(self.scroll_y, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Result of handling one event.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EventResponse {
    Refreshed {
        scope: RefreshScope,
        updated: Vec<ChartKind>,
        failed: Vec<ChartFailure>,
        figures: Vec<ChartFigure>,
    },
    Repositioned {
        element_id: &'static str,
        bottom: String,
    },
    Ignored {
        control: ControlId,
    },
}

impl EventResponse {
    pub fn new(outcome: BinderOutcome, figures: Vec<ChartFigure>) -> Self {
        match outcome {
            BinderOutcome::Refreshed { scope, report } => EventResponse::Refreshed {
                scope,
                updated: report.updated,
                failed: report.failed,
                figures,
            },
            BinderOutcome::Repositioned(position) => Self::from(position),
            BinderOutcome::Ignored(control) => EventResponse::Ignored { control },
        }
    }
}

impl From<FooterPosition> for EventResponse {
    fn from(position: FooterPosition) -> Self {
        EventResponse::Repositioned {
            element_id: position.element_id,
            bottom: position.css_bottom(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_change_request_parses_snapshot() {
        let request: EventRequest = serde_json::from_value(json!({
            "event": "change",
            "control": "x-axis-dropdown",
            "controls": { "x-axis-dropdown": "tempo", "y-axis-dropdown": null }
        }))
        .unwrap();

        let (event, document) = request.into_parts();
        assert_eq!(event, ControlEvent::Change(ControlId::XAxisDropdown));
        assert_eq!(document.value(ControlId::XAxisDropdown).as_deref(), Some("tempo"));
        assert!(document.contains(ControlId::YAxisDropdown));
        assert!(!document.contains(ControlId::StartDate));
    }

    #[test]
    fn test_scroll_request_has_empty_document() {
        let request: EventRequest =
            serde_json::from_value(json!({ "event": "scroll", "scroll_y": 300.5 })).unwrap();

        let (event, document) = request.into_parts();
        assert_eq!(event, ControlEvent::Scroll { scroll_y: 300.5 });
        assert!(document.is_empty());
    }

    #[test]
    fn test_unknown_control_is_rejected() {
        let result = serde_json::from_value::<EventRequest>(json!({
            "event": "change",
            "control": "volume-slider"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_oversized_value_fails_validation() {
        let request = EventRequest::Change {
            control: ControlId::SongArtistDropdown,
            controls: ControlSnapshot::new()
                .with(ControlId::SongArtistDropdown, "a".repeat(MAX_CONTROL_VALUE_LEN + 1)),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("song-artist-dropdown"));
    }

    #[test]
    fn test_length_limit_counts_characters() {
        let within = EventRequest::Change {
            control: ControlId::SongArtistDropdown,
            controls: ControlSnapshot::new()
                .with(ControlId::SongArtistDropdown, "あ".repeat(200)),
        };
        assert!(within.validate().is_ok());

        let over = EventRequest::Change {
            control: ControlId::SongArtistDropdown,
            controls: ControlSnapshot::new().with(
                ControlId::SongArtistDropdown,
                "あ".repeat(MAX_CONTROL_VALUE_LEN + 1),
            ),
        };
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_scroll_request_rejects_non_finite_offset() {
        assert!(ScrollRequest { scroll_y: 420.0 }.validate().is_ok());
        assert!(ScrollRequest { scroll_y: f64::NAN }.validate().is_err());
    }

    #[test]
    fn test_repositioned_response_shape() {
        let response = EventResponse::from(FooterPosition {
            element_id: "bottom-pic",
            bottom_px: 60,
        });

        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["outcome"], "repositioned");
        assert_eq!(value["bottom"], "60px");
    }
}
