//! Product endpoints

use incilab_common::{Envelope, Error};
use incilab_http_client::RequestDescriptor;

use crate::client::ApiClient;

impl ApiClient {
    /// Paged product list with optional name, brand, and category filters.
    pub async fn product_list(
        &self,
        page: u32,
        size: u32,
        name: Option<&str>,
        brand_id: Option<u64>,
        category: Option<&str>,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/product/list")
                    .query("page", page)
                    .query("size", size)
                    .query_opt("name", name)
                    .query_opt("brandId", brand_id)
                    .query_opt("category", category),
            )
            .await
    }

    /// Product details.
    pub async fn product_detail(&self, id: u64) -> Result<Envelope, Error> {
        self.http().get(&format!("/product/{id}"), &[]).await
    }

    /// Search products by keyword.
    pub async fn search_products(&self, keyword: &str) -> Result<Envelope, Error> {
        self.http()
            .execute(RequestDescriptor::get("/product/search").query("keyword", keyword))
            .await
    }

    /// Products of a brand.
    pub async fn products_by_brand(&self, brand_id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/product/byBrand/{brand_id}"), &[])
            .await
    }

    /// Products in a category.
    pub async fn products_by_category(&self, category: &str) -> Result<Envelope, Error> {
        self.http()
            .execute(RequestDescriptor::get("/product/byCategory").query("category", category))
            .await
    }

    /// Ingredient list of a product.
    pub async fn product_ingredients(&self, id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/product/{id}/ingredients"), &[])
            .await
    }

    /// Side-by-side comparison of several products.
    pub async fn compare_products(&self, product_ids: &[u64]) -> Result<Envelope, Error> {
        let mut request = RequestDescriptor::get("/product/compare");
        for id in product_ids {
            request = request.query("productIds", id);
        }
        self.http().execute(request).await
    }

    /// Most popular products.
    pub async fn hot_products(&self, limit: u32) -> Result<Envelope, Error> {
        self.http()
            .execute(RequestDescriptor::get("/product/list/hot").query("limit", limit))
            .await
    }
}
