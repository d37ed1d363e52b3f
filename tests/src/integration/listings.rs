//! # Listing Lifecycle
//!
//! Create, update and delete a job listing as an authorized lister, and the
//! authorization gate in front of creation.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use jc_02_review_ledger::prelude::*;
    use shared_bus::LedgerEvent;

    #[tokio::test]
    async fn test_create_job_listing() {
        let service = service_with_lister().await;

        let receipt = service
            .create_job_listing(
                lister(),
                listing(
                    "Company A",
                    "Software Engineer",
                    "We are looking for a skilled software engineer",
                ),
            )
            .await
            .unwrap();
        assert_eq!(receipt.output, 0);

        let retrieved = service.get_job_listing(0).await.unwrap();
        assert_eq!(retrieved.fields.company_name, "Company A");
        assert_eq!(retrieved.fields.job_title, "Software Engineer");
        assert_eq!(
            retrieved.fields.description,
            "We are looking for a skilled software engineer"
        );
        assert_eq!(retrieved.poster, lister());
    }

    #[tokio::test]
    async fn test_update_job_listing() {
        let service = service_with_lister().await;
        service
            .create_job_listing(
                lister(),
                listing("Company B", "Product Manager", "We are looking for a PM"),
            )
            .await
            .unwrap();

        // Any caller may update
        let receipt = service
            .update_job_listing(
                owner(),
                0,
                listing("Company C", "Data Scientist", "We are seeking a data scientist"),
            )
            .await
            .unwrap();
        assert!(matches!(
            receipt.event(),
            Some(LedgerEvent::JobListingUpdated { listing_id: 0, .. })
        ));

        let retrieved = service.get_job_listing(0).await.unwrap();
        assert_eq!(retrieved.fields.company_name, "Company C");
        assert_eq!(retrieved.fields.job_title, "Data Scientist");
        assert_eq!(
            retrieved.fields.description,
            "We are seeking a data scientist"
        );
        assert_eq!(retrieved.poster, lister());
    }

    #[tokio::test]
    async fn test_delete_job_listing() {
        let service = service_with_lister().await;
        service
            .create_job_listing(lister(), listing("Company D", "UX Designer", "Talented UX"))
            .await
            .unwrap();

        service.delete_job_listing(lister(), 0).await.unwrap();

        let err = service.get_job_listing(0).await.unwrap_err();
        assert!(err.to_string().contains("Index out of range"));
        assert_eq!(service.get_job_listings_count().await, 0);
    }

    #[tokio::test]
    async fn test_unauthorized_caller_cannot_list() {
        let service = service_with_lister().await;

        let err = service
            .create_job_listing(reviewer(), listing("Company A", "Engineer", "Builds"))
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewLedgerError::Unauthorized { .. }));

        // The owner is not a lister until it authorizes itself
        let err = service
            .create_job_listing(owner(), listing("Company A", "Engineer", "Builds"))
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewLedgerError::Unauthorized { .. }));

        service
            .add_authorized_lister(owner(), owner())
            .await
            .unwrap();
        service
            .create_job_listing(owner(), listing("Company A", "Engineer", "Builds"))
            .await
            .unwrap();
        assert_eq!(service.get_job_listings_count().await, 1);
    }

    #[tokio::test]
    async fn test_only_owner_authorizes_listers() {
        let service = service_with_lister().await;

        let err = service
            .add_authorized_lister(lister(), reviewer())
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewLedgerError::Unauthorized { .. }));
        assert!(!service.is_authorized_lister(reviewer()).await);

        // Re-authorizing is accepted and reports that nothing new was added
        let receipt = service
            .add_authorized_lister(owner(), lister())
            .await
            .unwrap();
        assert!(!receipt.output);
        assert_eq!(receipt.events.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_listing_fields_rejected() {
        let service = service_with_lister().await;

        let cases = [
            (listing("", "Engineer", "Builds"), InvalidInput::EmptyCompanyName),
            (listing("Acme", "", "Builds"), InvalidInput::EmptyJobTitle),
            (listing("Acme", "Engineer", ""), InvalidInput::EmptyDescription),
        ];
        for (fields, expected) in cases {
            let err = service
                .create_job_listing(lister(), fields)
                .await
                .unwrap_err();
            assert!(matches!(err, ReviewLedgerError::InvalidInput(ref e) if *e == expected));
        }
        assert_eq!(service.get_job_listings_count().await, 0);
    }
}
