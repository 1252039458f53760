//! Menu Routes
//!
//! `/menus` collection and `/menus/{id}` document.

use async_trait::async_trait;
use dashboard_sync::{MenuId, MenuPayload, MenuRecord, MenuStore, MenuSummary, NewMenu, StoreResult};

use super::{check_status, read_json, transport, HttpBackend};

#[async_trait(?Send)]
impl MenuStore for HttpBackend {
    async fn list_menus(&self) -> StoreResult<Vec<MenuSummary>> {
        let response = self.client.get(self.url("/menus")).send().await.map_err(transport)?;
        read_json(response, "Failed to fetch menus").await
    }

    async fn get_menu(&self, id: &MenuId) -> StoreResult<MenuRecord> {
        let response = self.client.get(self.menu_url(id.as_str())).send().await.map_err(transport)?;
        read_json(response, "Failed to load menu").await
    }

    async fn replace_menu(&self, id: &MenuId, payload: &MenuPayload) -> StoreResult<MenuRecord> {
        let response = self
            .client
            .put(self.menu_url(id.as_str()))
            .json(payload)
            .send()
            .await
            .map_err(transport)?;
        read_json(response, "Failed to save menu").await
    }

    async fn create_menu(&self, menu: &NewMenu) -> StoreResult<MenuSummary> {
        let response = self
            .client
            .post(self.url("/menus"))
            .json(menu)
            .send()
            .await
            .map_err(transport)?;
        read_json(response, "Failed to create menu").await
    }

    async fn delete_menu(&self, id: &MenuId) -> StoreResult<()> {
        let response = self.client.delete(self.menu_url(id.as_str())).send().await.map_err(transport)?;
        check_status(response, "Failed to delete menu").await?;
        Ok(())
    }
}
