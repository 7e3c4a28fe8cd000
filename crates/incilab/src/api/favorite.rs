//! Favorite endpoints
//!
//! A favorite points at an ingredient, product, or brand through the
//! `favoriteType`/`favoriteId` pair.

use serde::Serialize;

use incilab_common::{Envelope, Error};
use incilab_http_client::RequestDescriptor;

use crate::client::ApiClient;

impl ApiClient {
    /// Add a favorite.
    pub async fn add_favorite<B: Serialize + ?Sized>(&self, favorite: &B) -> Result<Envelope, Error> {
        self.http().post("/favorite/add", favorite).await
    }

    /// Delete a favorite by its id.
    pub async fn delete_favorite(&self, id: u64) -> Result<Envelope, Error> {
        self.http()
            .delete(&format!("/favorite/delete/{id}"), &[])
            .await
    }

    /// Cancel a favorite by what it points at.
    pub async fn cancel_favorite(
        &self,
        user_id: u64,
        favorite_type: &str,
        favorite_id: u64,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::post("/favorite/cancel")
                    .query("userId", user_id)
                    .query("favoriteType", favorite_type)
                    .query("favoriteId", favorite_id),
            )
            .await
    }

    /// All favorites of a user.
    pub async fn favorite_list(&self, user_id: u64) -> Result<Envelope, Error> {
        self.http()
            .execute(RequestDescriptor::get("/favorite/list").query("userId", user_id))
            .await
    }

    /// Favorites of a user filtered by type.
    pub async fn favorites_by_type(
        &self,
        user_id: u64,
        favorite_type: &str,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/favorite/byType")
                    .query("userId", user_id)
                    .query("favoriteType", favorite_type),
            )
            .await
    }

    /// Whether a user has favorited something.
    pub async fn check_favorite(
        &self,
        user_id: u64,
        favorite_type: &str,
        favorite_id: u64,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/favorite/check")
                    .query("userId", user_id)
                    .query("favoriteType", favorite_type)
                    .query("favoriteId", favorite_id),
            )
            .await
    }

    /// Remove all favorites of a user.
    pub async fn clear_favorites(&self, user_id: u64) -> Result<Envelope, Error> {
        self.http()
            .execute(RequestDescriptor::post("/favorite/clear").query("userId", user_id))
            .await
    }
}
