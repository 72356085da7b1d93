//! Terms-of-service clause models and DTOs.

use folio_core::types::{DbId, SortOrder};
use serde::{Deserialize, Serialize};

use crate::statement::{Column, UpdateSet};

/// A row from the `tos` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TosClause {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub order: SortOrder,
}

impl TosClause {
    pub fn placeholder(id: DbId, order: SortOrder) -> Self {
        Self {
            id,
            title: "New Title".to_string(),
            content: "New Content".to_string(),
            order,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTosClause {
    pub title: String,
    pub content: String,
    pub order: Option<SortOrder>,
}

impl CreateTosClause {
    pub fn into_entity(self, id: DbId, default_order: SortOrder) -> TosClause {
        TosClause {
            id,
            title: self.title,
            content: self.content,
            order: self.order.unwrap_or(default_order),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTosClause {
    pub title: Option<String>,
    pub content: Option<String>,
    pub order: Option<SortOrder>,
}

impl UpdateTosClause {
    pub fn content_of(clause: &TosClause) -> Self {
        Self {
            title: Some(clause.title.clone()),
            content: Some(clause.content.clone()),
            order: None,
        }
    }

    pub fn order(order: SortOrder) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }

    pub fn into_update_set(self) -> UpdateSet<TosColumn> {
        UpdateSet::new()
            .set(TosColumn::Title, self.title)
            .set(TosColumn::Content, self.content)
            .set(TosColumn::Order, self.order)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TosColumn {
    Title,
    Content,
    Order,
}

impl Column for TosColumn {
    const TABLE: &'static str = "tos";

    fn name(self) -> &'static str {
        match self {
            TosColumn::Title => "title",
            TosColumn::Content => "content",
            TosColumn::Order => "order",
        }
    }
}
