//! Property entity model and DTOs.

use estate_core::types::PropertyId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::document::Document;

/// A real-estate listing with its attached document collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub address: String,
    /// Formatted display price, e.g. `"$750,000"`.
    pub price: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_feet: u32,
    pub image_url: String,
    /// Attached documents, in upload order.
    pub documents: Vec<Document>,
}

impl Property {
    /// Returns `true` if a document with the given id is attached.
    pub fn has_document(&self, document_id: estate_core::types::DocumentId) -> bool {
        self.documents.iter().any(|d| d.id == document_id)
    }
}

/// DTO for creating a new property. Id and documents are assigned by the
/// backend.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProperty {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "price is required"))]
    pub price: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[validate(range(min = 1, message = "square footage is required"))]
    pub square_feet: u32,
    #[validate(length(min = 1, message = "image URL is required"))]
    pub image_url: String,
}

/// DTO for updating an existing property. All fields are optional; omitted
/// fields are left untouched. The document collection is managed through
/// the document operations, never patched here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProperty {
    pub title: Option<String>,
    pub address: Option<String>,
    pub price: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub square_feet: Option<u32>,
    pub image_url: Option<String>,
}

impl UpdateProperty {
    /// Shallow-merge this patch into the given property: each provided
    /// field replaces the existing value.
    pub fn apply_to(&self, property: &mut Property) {
        if let Some(title) = &self.title {
            property.title = title.clone();
        }
        if let Some(address) = &self.address {
            property.address = address.clone();
        }
        if let Some(price) = &self.price {
            property.price = price.clone();
        }
        if let Some(bedrooms) = self.bedrooms {
            property.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            property.bathrooms = bathrooms;
        }
        if let Some(square_feet) = self.square_feet {
            property.square_feet = square_feet;
        }
        if let Some(image_url) = &self.image_url {
            property.image_url = image_url.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample() -> Property {
        Property {
            id: Uuid::from_u128(1),
            title: "Modern Downtown Condo".into(),
            address: "123 Main St, Seattle, WA 98101".into(),
            price: "$750,000".into(),
            bedrooms: 2,
            bathrooms: 2,
            square_feet: 1200,
            image_url: "https://example.com/condo.jpg".into(),
            documents: Vec::new(),
        }
    }

    #[test]
    fn patch_replaces_only_provided_fields() {
        let mut property = sample();
        let patch = UpdateProperty {
            price: Some("$765,000".into()),
            bathrooms: Some(3),
            ..Default::default()
        };

        patch.apply_to(&mut property);

        assert_eq!(property.price, "$765,000");
        assert_eq!(property.bathrooms, 3);
        // Untouched fields keep their values.
        assert_eq!(property.title, "Modern Downtown Condo");
        assert_eq!(property.bedrooms, 2);
        assert_eq!(property.square_feet, 1200);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut property = sample();
        UpdateProperty::default().apply_to(&mut property);
        assert_eq!(property.title, sample().title);
        assert_eq!(property.price, sample().price);
    }

    #[test]
    fn create_dto_requires_non_empty_fields() {
        let input = CreateProperty {
            title: String::new(),
            address: "1 Elm St".into(),
            price: "$1".into(),
            bedrooms: 1,
            bathrooms: 1,
            square_feet: 0,
            image_url: "https://example.com/a.jpg".into(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(errors.field_errors().contains_key("square_feet"));
    }
}
