//! Brand endpoints

use incilab_common::{Envelope, Error};
use incilab_http_client::RequestDescriptor;

use crate::client::ApiClient;

impl ApiClient {
    /// Paged brand list, optionally filtered by keyword.
    pub async fn brand_list(
        &self,
        page: u32,
        size: u32,
        keyword: Option<&str>,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/brand/list")
                    .query("page", page)
                    .query("size", size)
                    .query_opt("keyword", keyword),
            )
            .await
    }

    /// Brand details.
    pub async fn brand_detail(&self, id: u64) -> Result<Envelope, Error> {
        self.http().get(&format!("/brand/{id}"), &[]).await
    }

    /// Search brands by keyword.
    pub async fn search_brands(&self, keyword: &str) -> Result<Envelope, Error> {
        self.http()
            .execute(RequestDescriptor::get("/brand/search").query("keyword", keyword))
            .await
    }

    /// Products of a brand.
    pub async fn brand_products(&self, id: u64) -> Result<Envelope, Error> {
        self.http().get(&format!("/brand/{id}/products"), &[]).await
    }

    /// All brands, unpaged.
    pub async fn all_brands(&self) -> Result<Envelope, Error> {
        self.http().get("/brand/all", &[]).await
    }
}
