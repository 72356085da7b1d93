//! Single-image editor for the page banner.

use folio_core::edit_state::Tracked;
use folio_core::ids::next_id;
use folio_db::models::banner::BannerImage;
use folio_db::repositories::BannerRepo;
use folio_db::QueryClient;

use crate::EditorError;

/// Holds the current banner. Saving always inserts a new row, which becomes
/// current because it has the highest id; earlier rows are kept.
pub struct BannerEditor {
    client: QueryClient,
    current: Tracked<BannerImage>,
}

impl BannerEditor {
    /// Load the current banner, falling back to the placeholder image when
    /// none is stored.
    pub async fn mount(client: QueryClient) -> Result<Self, EditorError> {
        let banner = BannerRepo::current(&client)
            .await?
            .unwrap_or_else(BannerImage::fallback);
        Ok(Self {
            client,
            current: Tracked::committed(banner),
        })
    }

    pub fn current(&self) -> &Tracked<BannerImage> {
        &self.current
    }

    pub fn begin_edit(&mut self) {
        self.current.begin_edit();
    }

    pub fn set_image(&mut self, image: impl Into<String>) -> Result<(), EditorError> {
        let id = self.current.value().id;
        let draft = self.current.draft_mut().ok_or(EditorError::NotEditing(id))?;
        draft.image = image.into();
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.current.cancel();
    }

    /// Store the draft as a new banner row.
    pub async fn save(&mut self) -> Result<&BannerImage, EditorError> {
        let id = self.current.value().id;
        let draft = self.current.draft_mut().ok_or(EditorError::NotEditing(id))?;
        draft.id = next_id();

        let previous = self
            .current
            .stage()
            .ok_or(EditorError::NotEditing(id))?;

        let result = BannerRepo::insert(&self.client, self.current.value()).await;
        match result {
            Ok(()) => {
                self.current.confirm();
                tracing::info!(banner_id = self.current.value().id, "Banner replaced");
                Ok(self.current.value())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Banner replace failed, reverting");
                self.current.fail(previous, e.to_string());
                Err(e.into())
            }
        }
    }
}
