//! Ingredient review endpoints

use serde::Serialize;

use incilab_common::{Envelope, Error};
use incilab_http_client::RequestDescriptor;

use crate::client::ApiClient;

impl ApiClient {
    /// Post a new ingredient review.
    pub async fn add_ingredient_review<B: Serialize + ?Sized>(
        &self,
        review: &B,
    ) -> Result<Envelope, Error> {
        self.http().post("/ingredient-review/add", review).await
    }

    /// Paged reviews of an ingredient.
    pub async fn ingredient_reviews(
        &self,
        ingredient_id: u64,
        page: u32,
        size: u32,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/ingredient-review/list")
                    .query("ingredientId", ingredient_id)
                    .query("page", page)
                    .query("size", size),
            )
            .await
    }

    /// All ingredient reviews written by a user.
    pub async fn ingredient_reviews_by_user(&self, user_id: u64) -> Result<Envelope, Error> {
        self.http()
            .execute(RequestDescriptor::get("/ingredient-review/listByUser").query("userId", user_id))
            .await
    }

    /// Review details.
    pub async fn ingredient_review_detail(&self, id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/ingredient-review/{id}"), &[])
            .await
    }

    /// Update an existing ingredient review.
    pub async fn update_ingredient_review<B: Serialize + ?Sized>(
        &self,
        review: &B,
    ) -> Result<Envelope, Error> {
        self.http().put("/ingredient-review/update", review).await
    }

    /// Delete an ingredient review.
    pub async fn delete_ingredient_review(&self, id: u64, user_id: u64) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::delete(format!("/ingredient-review/delete/{id}"))
                    .query("userId", user_id),
            )
            .await
    }

    /// Whether a user has already reviewed an ingredient.
    pub async fn check_ingredient_reviewed(
        &self,
        user_id: u64,
        ingredient_id: u64,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/ingredient-review/check")
                    .query("userId", user_id)
                    .query("ingredientId", ingredient_id),
            )
            .await
    }

    /// Average rating of an ingredient.
    pub async fn ingredient_average_rating(&self, ingredient_id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/ingredient-review/avgRating/{ingredient_id}"), &[])
            .await
    }

    /// Number of reviews an ingredient has.
    pub async fn ingredient_review_count(&self, ingredient_id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/ingredient-review/count/{ingredient_id}"), &[])
            .await
    }
}
