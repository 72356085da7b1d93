//! Persistence seam for the section editors.

use async_trait::async_trait;
use folio_core::types::{DbId, SortOrder};
use folio_db::models::gallery::{GalleryArtwork, UpdateArtwork};
use folio_db::models::price::{PriceOffering, UpdatePrice};
use folio_db::models::tos::{TosClause, UpdateTosClause};
use folio_db::repositories::{GalleryRepo, PriceRepo, TosRepo};
use folio_db::{DbError, QueryClient};

/// An orderable row that an editor can create from scratch.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> DbId;
    fn order(&self) -> SortOrder;
    fn set_order(&mut self, order: SortOrder);
    /// The item appended by "add new" before any content is entered.
    fn placeholder(id: DbId, order: SortOrder) -> Self;
}

/// Remote operations one section needs.
#[async_trait]
pub trait SectionStore: Send + Sync {
    type Item: Record;

    async fn list(&self) -> Result<Vec<Self::Item>, DbError>;
    async fn insert(&self, item: &Self::Item) -> Result<(), DbError>;
    /// Persist every content field of `item`; the order is left untouched.
    async fn save_content(&self, item: &Self::Item) -> Result<(), DbError>;
    async fn save_order(&self, id: DbId, order: SortOrder) -> Result<(), DbError>;
    async fn delete(&self, id: DbId) -> Result<(), DbError>;
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

impl Record for PriceOffering {
    fn id(&self) -> DbId {
        self.id
    }

    fn order(&self) -> SortOrder {
        self.order
    }

    fn set_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    fn placeholder(id: DbId, order: SortOrder) -> Self {
        PriceOffering::placeholder(id, order)
    }
}

impl Record for GalleryArtwork {
    fn id(&self) -> DbId {
        self.id
    }

    fn order(&self) -> SortOrder {
        self.order
    }

    fn set_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    fn placeholder(id: DbId, order: SortOrder) -> Self {
        GalleryArtwork::placeholder(id, order)
    }
}

impl Record for TosClause {
    fn id(&self) -> DbId {
        self.id
    }

    fn order(&self) -> SortOrder {
        self.order
    }

    fn set_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    fn placeholder(id: DbId, order: SortOrder) -> Self {
        TosClause::placeholder(id, order)
    }
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// Price cards in the `prices` table.
#[derive(Debug, Clone)]
pub struct PriceStore {
    client: QueryClient,
}

impl PriceStore {
    pub fn new(client: QueryClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SectionStore for PriceStore {
    type Item = PriceOffering;

    async fn list(&self) -> Result<Vec<PriceOffering>, DbError> {
        PriceRepo::list(&self.client).await
    }

    async fn insert(&self, item: &PriceOffering) -> Result<(), DbError> {
        PriceRepo::insert(&self.client, item).await
    }

    async fn save_content(&self, item: &PriceOffering) -> Result<(), DbError> {
        PriceRepo::update(&self.client, item.id, UpdatePrice::content_of(item)).await
    }

    async fn save_order(&self, id: DbId, order: SortOrder) -> Result<(), DbError> {
        PriceRepo::update(&self.client, id, UpdatePrice::order(order)).await
    }

    async fn delete(&self, id: DbId) -> Result<(), DbError> {
        PriceRepo::delete(&self.client, id).await
    }
}

/// Artworks in the `gallery` table.
#[derive(Debug, Clone)]
pub struct GalleryStore {
    client: QueryClient,
}

impl GalleryStore {
    pub fn new(client: QueryClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SectionStore for GalleryStore {
    type Item = GalleryArtwork;

    async fn list(&self) -> Result<Vec<GalleryArtwork>, DbError> {
        GalleryRepo::list(&self.client).await
    }

    async fn insert(&self, item: &GalleryArtwork) -> Result<(), DbError> {
        GalleryRepo::insert(&self.client, item).await
    }

    async fn save_content(&self, item: &GalleryArtwork) -> Result<(), DbError> {
        GalleryRepo::update(&self.client, item.id, UpdateArtwork::content_of(item)).await
    }

    async fn save_order(&self, id: DbId, order: SortOrder) -> Result<(), DbError> {
        GalleryRepo::update(&self.client, id, UpdateArtwork::order(order)).await
    }

    async fn delete(&self, id: DbId) -> Result<(), DbError> {
        GalleryRepo::delete(&self.client, id).await
    }
}

/// Terms-of-service clauses in the `tos` table.
#[derive(Debug, Clone)]
pub struct TosStore {
    client: QueryClient,
}

impl TosStore {
    pub fn new(client: QueryClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SectionStore for TosStore {
    type Item = TosClause;

    async fn list(&self) -> Result<Vec<TosClause>, DbError> {
        TosRepo::list(&self.client).await
    }

    async fn insert(&self, item: &TosClause) -> Result<(), DbError> {
        TosRepo::insert(&self.client, item).await
    }

    async fn save_content(&self, item: &TosClause) -> Result<(), DbError> {
        TosRepo::update(&self.client, item.id, UpdateTosClause::content_of(item)).await
    }

    async fn save_order(&self, id: DbId, order: SortOrder) -> Result<(), DbError> {
        TosRepo::update(&self.client, id, UpdateTosClause::order(order)).await
    }

    async fn delete(&self, id: DbId) -> Result<(), DbError> {
        TosRepo::delete(&self.client, id).await
    }
}
