//! Knowledge article endpoints

use incilab_common::{Envelope, Error};
use incilab_http_client::RequestDescriptor;

use crate::client::ApiClient;

impl ApiClient {
    /// Knowledge article details.
    pub async fn knowledge_detail(&self, id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/ingredient-knowledge/{id}"), &[])
            .await
    }

    /// All published knowledge articles.
    pub async fn published_knowledge(&self) -> Result<Envelope, Error> {
        self.http().get("/ingredient-knowledge/published", &[]).await
    }

    /// Paged knowledge articles, optionally filtered by keyword.
    pub async fn knowledge_list(
        &self,
        page: u32,
        size: u32,
        keyword: Option<&str>,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/ingredient-knowledge/list")
                    .query("page", page)
                    .query("size", size)
                    .query_opt("keyword", keyword),
            )
            .await
    }

    /// Search knowledge articles by keyword.
    pub async fn search_knowledge(&self, keyword: &str) -> Result<Envelope, Error> {
        self.http()
            .execute(RequestDescriptor::get("/ingredient-knowledge/search").query("keyword", keyword))
            .await
    }

    /// Knowledge articles linked to an ingredient.
    pub async fn knowledge_by_ingredient(&self, ingredient_id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/ingredient/{ingredient_id}/knowledge"), &[])
            .await
    }
}
