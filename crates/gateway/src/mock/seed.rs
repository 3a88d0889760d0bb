//! Sample portfolio the mock backend starts with.

use chrono::{DateTime, Utc};
use estate_core::types::{DocumentId, PropertyId, Timestamp};
use uuid::Uuid;

use crate::models::document::Document;
use crate::models::property::Property;

const fn property_id(n: u128) -> PropertyId {
    Uuid::from_u128(n)
}

const fn document_id(n: u128) -> DocumentId {
    // Seed document ids live in their own range so they never collide with
    // seed property ids.
    Uuid::from_u128(0xd0c_0000 + n)
}

fn ts(rfc3339: &str) -> Timestamp {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("seed timestamps are valid RFC 3339")
        .with_timezone(&Utc)
}

fn document(
    n: u128,
    property: PropertyId,
    file_name: &str,
    file_type: &str,
    file_url: &str,
    uploaded_at: &str,
) -> Document {
    Document {
        id: document_id(n),
        file_name: file_name.into(),
        file_type: file_type.into(),
        file_url: file_url.into(),
        uploaded_at: ts(uploaded_at),
        property_id: property,
    }
}

/// Five sample properties with eight documents between them.
pub fn sample_portfolio() -> Vec<Property> {
    const DUMMY_PDF: &str =
        "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf";

    vec![
        Property {
            id: property_id(1),
            title: "Modern Downtown Condo".into(),
            address: "123 Main St, Seattle, WA 98101".into(),
            price: "$750,000".into(),
            bedrooms: 2,
            bathrooms: 2,
            square_feet: 1200,
            image_url: "https://images.unsplash.com/photo-1487958449943-2429e8be8625?w=400&h=300&fit=crop".into(),
            documents: vec![
                document(
                    1,
                    property_id(1),
                    "Property_Deed.pdf",
                    "application/pdf",
                    DUMMY_PDF,
                    "2024-01-15T10:30:00Z",
                ),
                document(
                    2,
                    property_id(1),
                    "Floor_Plan.png",
                    "image/png",
                    "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&h=600&fit=crop",
                    "2024-01-16T14:20:00Z",
                ),
            ],
        },
        Property {
            id: property_id(2),
            title: "Luxury Waterfront Villa".into(),
            address: "456 Ocean Ave, Miami, FL 33139".into(),
            price: "$1,250,000".into(),
            bedrooms: 4,
            bathrooms: 3,
            square_feet: 2800,
            image_url: "https://images.unsplash.com/photo-1518005020951-eccb494ad742?w=400&h=300&fit=crop".into(),
            documents: vec![
                document(
                    3,
                    property_id(2),
                    "Inspection_Report.pdf",
                    "application/pdf",
                    DUMMY_PDF,
                    "2024-01-20T09:15:00Z",
                ),
                document(
                    4,
                    property_id(2),
                    "Exterior_View.jpg",
                    "image/jpeg",
                    "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=800&h=600&fit=crop",
                    "2024-01-21T16:45:00Z",
                ),
                document(
                    5,
                    property_id(2),
                    "Contract_Agreement.pdf",
                    "application/pdf",
                    DUMMY_PDF,
                    "2024-01-22T11:30:00Z",
                ),
            ],
        },
        Property {
            id: property_id(3),
            title: "Suburban Family Home".into(),
            address: "789 Oak Street, Austin, TX 78701".into(),
            price: "$425,000".into(),
            bedrooms: 3,
            bathrooms: 2,
            square_feet: 1800,
            image_url: "https://images.unsplash.com/photo-1527576539890-dfa815648363?w=400&h=300&fit=crop".into(),
            documents: vec![document(
                6,
                property_id(3),
                "Property_Appraisal.pdf",
                "application/pdf",
                DUMMY_PDF,
                "2024-01-25T13:20:00Z",
            )],
        },
        Property {
            id: property_id(4),
            title: "Historic Brownstone".into(),
            address: "321 Heritage Lane, Boston, MA 02101".into(),
            price: "$895,000".into(),
            bedrooms: 3,
            bathrooms: 2,
            square_feet: 2200,
            image_url: "https://images.unsplash.com/photo-1549517045-bc93de075e53?w=400&h=300&fit=crop".into(),
            documents: vec![],
        },
        Property {
            id: property_id(5),
            title: "Mountain View Cabin".into(),
            address: "555 Pine Ridge Rd, Aspen, CO 81611".into(),
            price: "$650,000".into(),
            bedrooms: 2,
            bathrooms: 1,
            square_feet: 950,
            image_url: "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?w=400&h=300&fit=crop".into(),
            documents: vec![
                document(
                    7,
                    property_id(5),
                    "Land_Survey.pdf",
                    "application/pdf",
                    DUMMY_PDF,
                    "2024-02-01T08:45:00Z",
                ),
                document(
                    8,
                    property_id(5),
                    "Mountain_View.jpg",
                    "image/jpeg",
                    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=600&fit=crop",
                    "2024-02-02T12:15:00Z",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn portfolio_has_five_properties_and_eight_documents() {
        let portfolio = sample_portfolio();
        assert_eq!(portfolio.len(), 5);
        let total_docs: usize = portfolio.iter().map(|p| p.documents.len()).sum();
        assert_eq!(total_docs, 8);
    }

    #[test]
    fn every_document_points_at_its_owner() {
        for property in sample_portfolio() {
            for doc in &property.documents {
                assert_eq!(doc.property_id, property.id);
            }
        }
    }

    #[test]
    fn ids_are_unique_across_the_portfolio() {
        let portfolio = sample_portfolio();
        let property_ids: HashSet<_> = portfolio.iter().map(|p| p.id).collect();
        assert_eq!(property_ids.len(), portfolio.len());

        let doc_ids: HashSet<_> = portfolio
            .iter()
            .flat_map(|p| p.documents.iter().map(|d| d.id))
            .collect();
        assert_eq!(doc_ids.len(), 8);
    }
}
