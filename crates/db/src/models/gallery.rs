//! Gallery artwork models and DTOs.

use folio_core::types::{DbId, SortOrder};
use serde::{Deserialize, Deserializer, Serialize};

use crate::statement::{Column, UpdateSet};

/// A row from the `gallery` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryArtwork {
    pub id: DbId,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Who the piece was made for. Uncredited pieces are written as `""`;
    /// `None` only appears for rows stored as `NULL` by other tools.
    #[serde(default)]
    pub client: Option<String>,
    pub order: SortOrder,
}

impl GalleryArtwork {
    pub fn placeholder(id: DbId, order: SortOrder) -> Self {
        Self {
            id,
            image: super::PLACEHOLDER_IMAGE.to_string(),
            kind: "New Artwork".to_string(),
            client: Some(String::new()),
            order,
        }
    }
}

/// Request payload for adding an artwork.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtwork {
    pub image: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub client: Option<String>,
    pub order: Option<SortOrder>,
}

impl CreateArtwork {
    pub fn into_entity(self, id: DbId, default_order: SortOrder) -> GalleryArtwork {
        GalleryArtwork {
            id,
            image: self.image,
            kind: self.kind,
            client: Some(self.client.unwrap_or_default()),
            order: self.order.unwrap_or(default_order),
        }
    }
}

/// Partial update; only present fields are written. An explicit
/// `"client": null` clears the credit to `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateArtwork {
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_blank")]
    pub client: Option<String>,
    pub order: Option<SortOrder>,
}

impl UpdateArtwork {
    /// Image, type and client of `artwork`, leaving the order untouched.
    pub fn content_of(artwork: &GalleryArtwork) -> Self {
        Self {
            image: Some(artwork.image.clone()),
            kind: Some(artwork.kind.clone()),
            client: Some(artwork.client.clone().unwrap_or_default()),
            order: None,
        }
    }

    pub fn order(order: SortOrder) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }

    pub fn into_update_set(self) -> UpdateSet<ArtworkColumn> {
        UpdateSet::new()
            .set(ArtworkColumn::Image, self.image)
            .set(ArtworkColumn::Type, self.kind)
            .set(ArtworkColumn::Client, self.client)
            .set(ArtworkColumn::Order, self.order)
    }
}

fn null_as_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

/// Updatable columns of `gallery`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkColumn {
    Image,
    Type,
    Client,
    Order,
}

impl Column for ArtworkColumn {
    const TABLE: &'static str = "gallery";

    fn name(self) -> &'static str {
        match self {
            ArtworkColumn::Image => "image",
            ArtworkColumn::Type => "type",
            ArtworkColumn::Client => "client",
            ArtworkColumn::Order => "order",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_client_deserializes_as_none() {
        let artwork: GalleryArtwork =
            serde_json::from_str(r#"{"id": 1, "image": "a.png", "type": "Sketch", "order": 2}"#)
                .unwrap();
        assert_eq!(artwork.client, None);
    }

    #[test]
    fn null_client_clears_and_absent_client_is_untouched() {
        let clear: UpdateArtwork = serde_json::from_str(r#"{"client": null}"#).unwrap();
        assert_eq!(clear.client.as_deref(), Some(""));

        let untouched: UpdateArtwork = serde_json::from_str(r#"{"image": "b.png"}"#).unwrap();
        assert_eq!(untouched.client, None);
    }

    #[test]
    fn uncredited_artwork_is_created_blank() {
        let input: CreateArtwork =
            serde_json::from_str(r#"{"image": "a.png", "type": "Icon"}"#).unwrap();
        assert_eq!(input.into_entity(1, 1).client.as_deref(), Some(""));
    }

    #[test]
    fn order_only_update() {
        let (sql, values) = UpdateArtwork::order(3).into_update_set().build(5).unwrap();
        assert_eq!(sql, "UPDATE gallery SET `order` = ? WHERE id = ?");
        assert_eq!(values, vec![serde_json::json!(3), serde_json::json!(5)]);
    }
}
