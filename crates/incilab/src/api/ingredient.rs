//! Ingredient endpoints

use incilab_common::{Envelope, Error};
use incilab_http_client::RequestDescriptor;

use crate::client::ApiClient;

impl ApiClient {
    /// Paged ingredient list with optional name, risk-level, and skin-type
    /// filters.
    pub async fn ingredient_list(
        &self,
        page: u32,
        size: u32,
        name: Option<&str>,
        risk_level: Option<u8>,
        suitable_skin: Option<&str>,
    ) -> Result<Envelope, Error> {
        self.http()
            .execute(
                RequestDescriptor::get("/ingredient/list")
                    .query("page", page)
                    .query("size", size)
                    .query_opt("name", name)
                    .query_opt("riskLevel", risk_level)
                    .query_opt("suitableSkin", suitable_skin),
            )
            .await
    }

    /// Ingredient details.
    pub async fn ingredient_detail(&self, id: u64) -> Result<Envelope, Error> {
        self.http().get(&format!("/ingredient/{id}"), &[]).await
    }

    /// Search ingredients by keyword.
    pub async fn search_ingredients(&self, keyword: &str) -> Result<Envelope, Error> {
        self.http()
            .execute(RequestDescriptor::get("/ingredient/search").query("keyword", keyword))
            .await
    }

    /// Known conflicts of an ingredient.
    pub async fn ingredient_conflicts(&self, id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/ingredient/{id}/conflicts"), &[])
            .await
    }

    /// Products containing an ingredient.
    pub async fn ingredient_products(&self, id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/ingredient/{id}/products"), &[])
            .await
    }

    /// Ingredients at a given risk level.
    pub async fn ingredients_by_risk_level(&self, level: u8) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/ingredient/byRiskLevel/{level}"), &[])
            .await
    }

    /// Knowledge articles about an ingredient.
    pub async fn ingredient_knowledge(&self, id: u64) -> Result<Envelope, Error> {
        self.http()
            .get(&format!("/ingredient/{id}/knowledge"), &[])
            .await
    }
}
