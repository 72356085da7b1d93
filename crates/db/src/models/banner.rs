//! Banner image models and DTOs.
//!
//! Replacing the banner inserts a new row; the row with the highest id is the
//! current one and older rows stay in the table.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::statement::{Column, UpdateSet};

/// A row from the `banner` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerImage {
    pub id: DbId,
    pub image: String,
}

impl BannerImage {
    /// Shown while the table is empty. Id 0 never exists in storage.
    pub fn fallback() -> Self {
        Self {
            id: 0,
            image: super::PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Request payload for replacing the current banner.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceBanner {
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateBanner {
    pub image: Option<String>,
}

impl UpdateBanner {
    pub fn into_update_set(self) -> UpdateSet<BannerColumn> {
        UpdateSet::new().set(BannerColumn::Image, self.image)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerColumn {
    Image,
}

impl Column for BannerColumn {
    const TABLE: &'static str = "banner";

    fn name(self) -> &'static str {
        match self {
            BannerColumn::Image => "image",
        }
    }
}
