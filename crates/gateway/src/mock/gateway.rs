use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use estate_core::error::GatewayError;
use estate_core::types::{DocumentId, PropertyId};
use uuid::Uuid;

use crate::mock::latency::LatencyProfile;
use crate::mock::seed::sample_portfolio;
use crate::models::document::{Document, FileUpload};
use crate::models::property::{CreateProperty, Property, UpdateProperty};
use crate::Gateway;

/// Gateway operations, used to target failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOp {
    ListProperties,
    GetProperty,
    CreateProperty,
    UpdateProperty,
    DeleteProperty,
    UploadDocuments,
    GetDocuments,
    DeleteDocument,
}

struct MockState {
    properties: Vec<Property>,
    /// Uploaded file bytes, keyed by the minted `mock://` URL.
    blobs: HashMap<String, Vec<u8>>,
    /// One-shot failures queued per operation.
    fail_next: HashMap<GatewayOp, GatewayError>,
}

/// In-memory mock backend with simulated latency.
///
/// Owns the property list as an explicit repository object; callers receive
/// it by `Arc<dyn Gateway>` injection rather than through shared module
/// state. Every operation suspends for its configured latency before
/// touching the list, so in-flight calls overlap the way remote calls
/// would.
pub struct MockGateway {
    latency: LatencyProfile,
    state: Mutex<MockState>,
}

impl MockGateway {
    /// An empty backend.
    pub fn new(latency: LatencyProfile) -> Self {
        Self {
            latency,
            state: Mutex::new(MockState {
                properties: Vec::new(),
                blobs: HashMap::new(),
                fail_next: HashMap::new(),
            }),
        }
    }

    /// A backend pre-populated with the sample portfolio.
    pub fn seeded(latency: LatencyProfile) -> Self {
        let gateway = Self::new(latency);
        gateway.state().properties = sample_portfolio();
        gateway
    }

    /// Queue a one-shot failure for the next call of the given operation.
    pub fn fail_next(&self, op: GatewayOp, error: GatewayError) {
        self.state().fail_next.insert(op, error);
    }

    /// Resolve a minted `mock://` URL back to the uploaded bytes.
    ///
    /// Seeded documents reference external URLs and resolve to `None`.
    pub fn resolve(&self, file_url: &str) -> Option<Vec<u8>> {
        self.state().blobs.get(file_url).cloned()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state lock poisoned")
    }

    /// Suspend for the operation's latency, then surface any injected
    /// failure.
    async fn simulate(&self, op: GatewayOp, delay: std::time::Duration) -> Result<(), GatewayError> {
        tracing::debug!(?op, ?delay, "simulating backend call");
        tokio::time::sleep(delay).await;
        match self.state().fail_next.remove(&op) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn list_properties(&self) -> Result<Vec<Property>, GatewayError> {
        self.simulate(GatewayOp::ListProperties, self.latency.list_properties)
            .await?;
        Ok(self.state().properties.clone())
    }

    async fn get_property(&self, id: PropertyId) -> Result<Option<Property>, GatewayError> {
        self.simulate(GatewayOp::GetProperty, self.latency.get_property)
            .await?;
        Ok(self.state().properties.iter().find(|p| p.id == id).cloned())
    }

    async fn create_property(&self, input: &CreateProperty) -> Result<Property, GatewayError> {
        self.simulate(GatewayOp::CreateProperty, self.latency.create_property)
            .await?;
        let property = Property {
            // v7 ids are time-ordered, so creation order is recoverable
            // from the id alone.
            id: Uuid::now_v7(),
            title: input.title.clone(),
            address: input.address.clone(),
            price: input.price.clone(),
            bedrooms: input.bedrooms,
            bathrooms: input.bathrooms,
            square_feet: input.square_feet,
            image_url: input.image_url.clone(),
            documents: Vec::new(),
        };
        self.state().properties.push(property.clone());
        Ok(property)
    }

    async fn update_property(
        &self,
        id: PropertyId,
        patch: &UpdateProperty,
    ) -> Result<Option<Property>, GatewayError> {
        self.simulate(GatewayOp::UpdateProperty, self.latency.update_property)
            .await?;
        let mut state = self.state();
        let Some(property) = state.properties.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        patch.apply_to(property);
        Ok(Some(property.clone()))
    }

    async fn delete_property(&self, id: PropertyId) -> Result<bool, GatewayError> {
        self.simulate(GatewayOp::DeleteProperty, self.latency.delete_property)
            .await?;
        let mut state = self.state();
        let Some(index) = state.properties.iter().position(|p| p.id == id) else {
            return Ok(false);
        };
        state.properties.remove(index);
        Ok(true)
    }

    async fn upload_documents(
        &self,
        property_id: PropertyId,
        files: Vec<FileUpload>,
    ) -> Result<Vec<Document>, GatewayError> {
        self.simulate(GatewayOp::UploadDocuments, self.latency.upload_documents)
            .await?;

        let uploaded_at = Utc::now();
        let mut state = self.state();

        let documents: Vec<Document> = files
            .into_iter()
            .map(|file| {
                let id = Uuid::now_v7();
                let file_url = format!("mock://documents/{id}");
                state.blobs.insert(file_url.clone(), file.bytes);
                Document {
                    id,
                    file_name: file.file_name,
                    file_type: file.content_type,
                    file_url,
                    uploaded_at,
                    property_id,
                }
            })
            .collect();

        // An unknown property id still yields minted documents; they are
        // just not attached anywhere.
        if let Some(property) = state.properties.iter_mut().find(|p| p.id == property_id) {
            property.documents.extend(documents.iter().cloned());
        }

        Ok(documents)
    }

    async fn get_documents(&self, property_id: PropertyId) -> Result<Vec<Document>, GatewayError> {
        self.simulate(GatewayOp::GetDocuments, self.latency.get_documents)
            .await?;
        Ok(self
            .state()
            .properties
            .iter()
            .find(|p| p.id == property_id)
            .map(|p| p.documents.clone())
            .unwrap_or_default())
    }

    async fn delete_document(&self, document_id: DocumentId) -> Result<bool, GatewayError> {
        self.simulate(GatewayOp::DeleteDocument, self.latency.delete_document)
            .await?;
        let mut state = self.state();
        for index in 0..state.properties.len() {
            if let Some(doc_index) = state.properties[index]
                .documents
                .iter()
                .position(|d| d.id == document_id)
            {
                let removed = state.properties[index].documents.remove(doc_index);
                state.blobs.remove(&removed.file_url);
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> MockGateway {
        MockGateway::seeded(LatencyProfile::zero())
    }

    fn draft(title: &str) -> CreateProperty {
        CreateProperty {
            title: title.into(),
            address: "1 Test Ln".into(),
            price: "$100,000".into(),
            bedrooms: 1,
            bathrooms: 1,
            square_feet: 500,
            image_url: "https://example.com/p.jpg".into(),
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_id_and_empty_documents() {
        let gateway = gateway();
        let created = gateway.create_property(&draft("New Listing")).await.unwrap();

        assert!(created.documents.is_empty());
        let listed = gateway.list_properties().await.unwrap();
        assert_eq!(listed.len(), 6);
        assert_eq!(listed.last().map(|p| p.id), Some(created.id));
    }

    #[tokio::test]
    async fn update_merges_and_preserves_position() {
        let gateway = gateway();
        let before = gateway.list_properties().await.unwrap();
        let target = before[2].clone();

        let patch = UpdateProperty {
            price: Some("$499,000".into()),
            ..Default::default()
        };
        let updated = gateway.update_property(target.id, &patch).await.unwrap();
        assert_eq!(updated.unwrap().price, "$499,000");

        let after = gateway.list_properties().await.unwrap();
        assert_eq!(after[2].id, target.id);
        assert_eq!(after[2].title, target.title);
    }

    #[tokio::test]
    async fn get_property_finds_by_id() {
        let gateway = gateway();
        let listed = gateway.list_properties().await.unwrap();

        let found = gateway.get_property(listed[2].id).await.unwrap();
        assert_eq!(found.map(|p| p.title), Some(listed[2].title.clone()));

        let missing = gateway.get_property(Uuid::now_v7()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let gateway = gateway();
        let result = gateway
            .update_property(Uuid::now_v7(), &UpdateProperty::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn upload_attaches_in_order_and_mints_resolvable_urls() {
        let gateway = gateway();
        let target = gateway.list_properties().await.unwrap()[3].id;

        let docs = gateway
            .upload_documents(
                target,
                vec![
                    FileUpload::new("deed.pdf", "application/pdf", b"pdf-bytes".to_vec()),
                    FileUpload::new("photo.png", "image/png", b"png-bytes".to_vec()),
                ],
            )
            .await
            .unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].file_name, "deed.pdf");
        assert_eq!(docs[1].file_name, "photo.png");
        assert!(docs.iter().all(|d| d.property_id == target));
        assert_eq!(gateway.resolve(&docs[0].file_url), Some(b"pdf-bytes".to_vec()));

        let attached = gateway.get_documents(target).await.unwrap();
        assert_eq!(attached.len(), 2);
        assert_eq!(attached[0].id, docs[0].id);
    }

    #[tokio::test]
    async fn upload_to_unknown_property_returns_unattached_documents() {
        let gateway = gateway();
        let docs = gateway
            .upload_documents(
                Uuid::now_v7(),
                vec![FileUpload::new("orphan.pdf", "application/pdf", Vec::new())],
            )
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);

        let total: usize = gateway
            .list_properties()
            .await
            .unwrap()
            .iter()
            .map(|p| p.documents.len())
            .sum();
        assert_eq!(total, 8);
    }

    #[tokio::test]
    async fn delete_document_searches_every_property() {
        let gateway = gateway();
        let properties = gateway.list_properties().await.unwrap();
        // Second property, last document.
        let victim = properties[1].documents[2].clone();

        assert!(gateway.delete_document(victim.id).await.unwrap());

        let after = gateway.list_properties().await.unwrap();
        assert_eq!(after[1].documents.len(), 2);
        assert!(!after.iter().any(|p| p.has_document(victim.id)));

        // Gone means gone.
        assert!(!gateway.delete_document(victim.id).await.unwrap());
    }

    #[tokio::test]
    async fn injected_failure_fires_once() {
        let gateway = gateway();
        gateway.fail_next(
            GatewayOp::ListProperties,
            GatewayError::Unavailable("backend offline".into()),
        );

        assert!(gateway.list_properties().await.is_err());
        assert!(gateway.list_properties().await.is_ok());
    }
}
