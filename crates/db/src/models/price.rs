//! Price offering models and DTOs.

use folio_core::types::{DbId, SortOrder};
use serde::{Deserialize, Serialize};

use crate::statement::{Column, UpdateSet};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `prices` table: one commission tier shown as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceOffering {
    pub id: DbId,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Display string, e.g. `"$40"`; never parsed.
    pub price: String,
    pub description: String,
    pub order: SortOrder,
}

impl PriceOffering {
    /// A new card as created from the editor before any text is entered.
    pub fn placeholder(id: DbId, order: SortOrder) -> Self {
        Self {
            id,
            image: super::PLACEHOLDER_IMAGE.to_string(),
            kind: "New Type".to_string(),
            price: "New Price".to_string(),
            description: "New Description".to_string(),
            order,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request payload for creating a price card. The id is generated server side.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrice {
    pub image: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: String,
    pub description: String,
    /// Appended after the current last card when omitted.
    pub order: Option<SortOrder>,
}

impl CreatePrice {
    pub fn into_entity(self, id: DbId, default_order: SortOrder) -> PriceOffering {
        PriceOffering {
            id,
            image: self.image,
            kind: self.kind,
            price: self.price,
            description: self.description,
            order: self.order.unwrap_or(default_order),
        }
    }
}

/// Partial update; only present fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePrice {
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub order: Option<SortOrder>,
}

impl UpdatePrice {
    /// Every content field of `price`, leaving the order untouched.
    pub fn content_of(price: &PriceOffering) -> Self {
        Self {
            image: Some(price.image.clone()),
            kind: Some(price.kind.clone()),
            price: Some(price.price.clone()),
            description: Some(price.description.clone()),
            order: None,
        }
    }

    pub fn order(order: SortOrder) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }

    pub fn into_update_set(self) -> UpdateSet<PriceColumn> {
        UpdateSet::new()
            .set(PriceColumn::Image, self.image)
            .set(PriceColumn::Type, self.kind)
            .set(PriceColumn::Price, self.price)
            .set(PriceColumn::Description, self.description)
            .set(PriceColumn::Order, self.order)
    }
}

/// Updatable columns of `prices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceColumn {
    Image,
    Type,
    Price,
    Description,
    Order,
}

impl Column for PriceColumn {
    const TABLE: &'static str = "prices";

    fn name(self) -> &'static str {
        match self {
            PriceColumn::Image => "image",
            PriceColumn::Type => "type",
            PriceColumn::Price => "price",
            PriceColumn::Description => "description",
            PriceColumn::Order => "order",
        }
    }
}
