//! Product review endpoints

use serde::Serialize;

use incilab_common::{Envelope, Error};
use incilab_http_client::RequestDescriptor;

use crate::client::ApiClient;

impl ApiClient {
    /// Post a new product review.
    pub async fn add_product_review<B: Serialize + ?Sized>(
        &self,
        review: &B,
    ) -> Result<Envelope, Error> {
        self.http().post("/product-review/add", review).await
    }

    /// Paged reviews of a product.
    pub async fn product_reviews(
        &self,
        product_id: u64,
        page: u32,
        size: u32,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/product-review/list")
                    .query("productId", product_id)
                    .query("page", page)
                    .query("size", size),
            )
            .await
    }

    /// All product reviews written by a user.
    pub async fn product_reviews_by_user(&self, user_id: u64) -> Result<Envelope, Error> {
        self.http()
            .execute(RequestDescriptor::get("/product-review/listByUser").query("userId", user_id))
            .await
    }

    /// Review details.
    pub async fn product_review_detail(&self, id: u64) -> Result<Envelope, Error> {
        self.http().get(&format!("/product-review/{id}"), &[]).await
    }

    /// Delete a product review.
    pub async fn delete_product_review(&self, id: u64, user_id: u64) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::delete(format!("/product-review/delete/{id}"))
                    .query("userId", user_id),
            )
            .await
    }

    /// Whether a user has already reviewed a product.
    pub async fn check_product_reviewed(
        &self,
        user_id: u64,
        product_id: u64,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/product-review/check")
                    .query("userId", user_id)
                    .query("productId", product_id),
            )
            .await
    }

    /// Average rating of a product.
    pub async fn product_average_rating(&self, product_id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/product-review/avgRating/{product_id}"), &[])
            .await
    }

    /// Number of reviews a product has.
    pub async fn product_review_count(&self, product_id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/product-review/count/{product_id}"), &[])
            .await
    }
}
