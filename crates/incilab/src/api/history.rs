//! Search history endpoints
//!
//! `searchType` is one of `ingredient`, `product`, or `brand`.

use serde::Serialize;

use incilab_common::{Envelope, Error};
use incilab_http_client::RequestDescriptor;

use crate::client::ApiClient;

impl ApiClient {
    /// Record a history entry.
    pub async fn add_history<B: Serialize + ?Sized>(&self, entry: &B) -> Result<Envelope, Error> {
        self.http().post("/search-history/add", entry).await
    }

    /// All history entries of a user.
    pub async fn history_list(&self, user_id: u64) -> Result<Envelope, Error> {
        self.http()
            .execute(RequestDescriptor::get("/search-history/list").query("userId", user_id))
            .await
    }

    /// History entries of a user filtered by type.
    pub async fn history_by_type(
        &self,
        user_id: u64,
        search_type: &str,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/search-history/byType")
                    .query("userId", user_id)
                    .query("searchType", search_type),
            )
            .await
    }

    /// Delete a single history entry.
    pub async fn delete_history(&self, id: u64) -> Result<Envelope, Error> {
        self.http()
            .delete(&format!("/search-history/delete/{id}"), &[])
            .await
    }

    /// Remove all history entries of a user.
    pub async fn clear_history(&self, user_id: u64) -> Result<Envelope, Error> {
        self.http()
            .execute(RequestDescriptor::delete("/search-history/clear").query("userId", user_id))
            .await
    }

    /// Remove history entries of a user filtered by type.
    pub async fn clear_history_by_type(
        &self,
        user_id: u64,
        search_type: &str,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::delete("/search-history/clearByType")
                    .query("userId", user_id)
                    .query("searchType", search_type),
            )
            .await
    }
}
