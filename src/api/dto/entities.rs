//! DTOs for entity dropdown options.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

use crate::application::services::EntityOptions;
use crate::domain::entities::ViewType;

/// Query parameters for `GET /api/entities`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct EntitiesQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub view: Option<String>,
}

/// A single dropdown option.
#[derive(Debug, Serialize)]
pub struct EntityOption {
    pub label: String,
    pub value: String,
}

/// Options for the song/artist dropdown.
#[derive(Debug, Serialize)]
pub struct EntitiesResponse {
    pub view: ViewType,
    pub options: Vec<EntityOption>,
    pub default: Option<String>,
}

impl From<EntityOptions> for EntitiesResponse {
    fn from(entities: EntityOptions) -> Self {
        Self {
            view: entities.view,
            options: entities
                .options
                .into_iter()
                .map(|name| EntityOption {
                    label: name.clone(),
                    value: name,
                })
                .collect(),
            default: entities.default,
        }
    }
}
