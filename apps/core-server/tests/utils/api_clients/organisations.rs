use std::fmt::Display;

use serde::Serialize;
use serde_json::json;
use serde_with::skip_serializing_none;

use super::{HttpClient, Response};

pub struct OrganisationsApi {
    client: HttpClient,
}

#[derive(Debug, Default)]
pub struct CreateParams<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
}

#[skip_serializing_none]
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub organisation_type: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub state: Option<String>,
}

impl OrganisationsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: CreateParams<'_>) -> Response {
        let body = json!({
            "name": params.name.unwrap_or("Acme Payments"),
            "description": "Payment processing",
            "email": params.email.unwrap_or("contact@acme.example"),
            "industry": "Fintech",
            "organisationType": "Private",
            "country": "Switzerland",
            "address": "Bahnhofstrasse 1",
            "state": "Zurich",
        });

        self.client.post("/api/organisations/v1", body).await
    }

    pub async fn create_raw(&self, body: serde_json::Value) -> Response {
        self.client.post("/api/organisations/v1", body).await
    }

    pub async fn list(&self) -> Response {
        self.client.get("/api/organisations/v1").await
    }

    pub async fn update(&self, id: &impl Display, params: UpdateParams) -> Response {
        self.client
            .patch(
                &format!("/api/organisations/v1/{id}"),
                Some(serde_json::to_value(params).unwrap()),
            )
            .await
    }

    pub async fn delete(&self, id: &impl Display) -> Response {
        self.client
            .delete(&format!("/api/organisations/v1/{id}"))
            .await
    }

    pub async fn members(
        &self,
        id: &impl Display,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Response {
        let mut query = vec![];
        if let Some(page) = page {
            query.push(format!("page={page}"));
        }
        if let Some(page_size) = page_size {
            query.push(format!("pageSize={page_size}"));
        }

        let mut url = format!("/api/organisations/v1/{id}/members");
        if !query.is_empty() {
            url = format!("{url}?{}", query.join("&"));
        }

        self.client.get(&url).await
    }
}
