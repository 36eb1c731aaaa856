//! Firestore REST client implementing the inventory store port.

use gemdesk_domain::{InventoryItem, ItemData, ItemField, ItemId};
use reqwest::{RequestBuilder, Response};
use url::Url;

use super::wire::{Document, ErrorResponse, ListDocumentsResponse};
use crate::infrastructure::config::FirestoreConfig;
use crate::ports::outbound::{InventoryStorePort, StoreError, StoreOperation};

/// Documents requested per list page
const PAGE_SIZE: u32 = 300;

/// Bearer token the local emulator accepts as an admin caller
const EMULATOR_OWNER_TOKEN: &str = "owner";

pub struct FirestoreStore {
    http: reqwest::Client,
    config: FirestoreConfig,
}

impl FirestoreStore {
    pub fn new(config: FirestoreConfig) -> Result<Self, reqwest::Error> {
        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(config.request_timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    /// `{base}/projects/{project}/databases/{database}/documents/{collection}[/{id}]?key=..`
    fn resource_url(
        &self,
        operation: StoreOperation,
        collection: &str,
        id: Option<&ItemId>,
    ) -> Result<Url, StoreError> {
        let mut url = self.config.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| StoreError::unavailable(operation, "base URL cannot hold a path"))?;
            segments.pop_if_empty().extend([
                "projects",
                self.config.project_id.as_str(),
                "databases",
                self.config.database.as_str(),
                "documents",
                collection,
            ]);
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        if let Some(key) = &self.config.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }

    pub(crate) fn create_url(&self, collection: &str) -> Result<Url, StoreError> {
        self.resource_url(StoreOperation::Create, collection, None)
    }

    pub(crate) fn list_url(
        &self,
        collection: &str,
        page_token: Option<&str>,
    ) -> Result<Url, StoreError> {
        let mut url = self.resource_url(StoreOperation::List, collection, None)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("pageSize", &PAGE_SIZE.to_string());
            if let Some(token) = page_token {
                query.append_pair("pageToken", token);
            }
        }
        Ok(url)
    }

    /// Field mask naming all seven fields plus an existence precondition, so
    /// the patch overwrites the record and fails when it is gone.
    pub(crate) fn update_url(&self, collection: &str, id: &ItemId) -> Result<Url, StoreError> {
        let mut url = self.resource_url(StoreOperation::Update, collection, Some(id))?;
        {
            let mut query = url.query_pairs_mut();
            for field in ItemField::ALL {
                query.append_pair("updateMask.fieldPaths", field.wire_name());
            }
            query.append_pair("currentDocument.exists", "true");
        }
        Ok(url)
    }

    pub(crate) fn delete_url(&self, collection: &str, id: &ItemId) -> Result<Url, StoreError> {
        let mut url = self.resource_url(StoreOperation::Delete, collection, Some(id))?;
        url.query_pairs_mut()
            .append_pair("currentDocument.exists", "true");
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if self.config.emulator {
            request.bearer_auth(EMULATOR_OWNER_TOKEN)
        } else {
            request
        }
    }

    async fn send(
        &self,
        operation: StoreOperation,
        id: Option<&ItemId>,
        request: RequestBuilder,
    ) -> Result<Response, StoreError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::transport(operation, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_from_status(operation, id, status.as_u16(), &body))
    }
}

/// Map a non-success HTTP answer onto the store error taxonomy.
pub(crate) fn error_from_status(
    operation: StoreOperation,
    id: Option<&ItemId>,
    status: u16,
    body: &str,
) -> StoreError {
    if status == 404 {
        if let Some(id) = id {
            return StoreError::not_found(operation, id);
        }
    }

    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("HTTP {}", status)
            } else {
                body.to_string()
            }
        });
    StoreError::rejected(operation, status, message)
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl InventoryStorePort for FirestoreStore {
    async fn create_record(
        &self,
        collection: &str,
        data: &ItemData,
    ) -> Result<ItemId, StoreError> {
        const OP: StoreOperation = StoreOperation::Create;
        tracing::debug!(collection, "Creating document");

        let url = self.create_url(collection)?;
        let request = self.http.post(url).json(&Document::from_item_data(data));
        let document: Document = self
            .send(OP, None, request)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::malformed(OP, e))?;

        Ok(document.into_item(OP)?.id)
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<InventoryItem>, StoreError> {
        const OP: StoreOperation = StoreOperation::List;

        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            tracing::debug!(collection, page_token = ?page_token, "Listing documents");
            let url = self.list_url(collection, page_token.as_deref())?;
            let page: ListDocumentsResponse = self
                .send(OP, None, self.http.get(url))
                .await?
                .json()
                .await
                .map_err(|e| StoreError::malformed(OP, e))?;

            for document in page.documents {
                match document.into_item(OP) {
                    Ok(item) => items.push(item),
                    Err(e) => tracing::warn!(error = %e, "Skipping unaddressable document"),
                }
            }

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        Ok(items)
    }

    async fn update_record(
        &self,
        collection: &str,
        id: &ItemId,
        data: &ItemData,
    ) -> Result<(), StoreError> {
        const OP: StoreOperation = StoreOperation::Update;
        tracing::debug!(collection, item_id = %id, "Updating document");

        let url = self.update_url(collection, id)?;
        let request = self.http.patch(url).json(&Document::from_item_data(data));
        self.send(OP, Some(id), request).await?;
        Ok(())
    }

    async fn delete_record(&self, collection: &str, id: &ItemId) -> Result<(), StoreError> {
        const OP: StoreOperation = StoreOperation::Delete;
        tracing::debug!(collection, item_id = %id, "Deleting document");

        let url = self.delete_url(collection, id)?;
        self.send(OP, Some(id), self.http.delete(url)).await?;
        Ok(())
    }
}
