//! # Composed Scenarios
//!
//! Listings and reviews together: per-listing and per-reviewer queries,
//! salary statistics, review updates with their events, and the cascade
//! when a listing is deleted.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use jc_02_review_ledger::prelude::*;
    use shared_bus::{LedgerEvent, ReviewRecord};

    #[tokio::test]
    async fn test_get_all_reviews_of_job_listing() {
        let service = populated_service().await;

        let reviews = service.get_all_reviews_of_job_listing(0).await;
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].company_name, "Company A");
        assert_eq!(reviews[0].job_title, "Job Title A");

        let reviews = service.get_all_reviews_of_job_listing(1).await;
        assert_eq!(
            reviews.iter().map(|r| r.salary).collect::<Vec<_>>(),
            vec![6000, 7000]
        );
        assert!(service.get_all_reviews_of_job_listing(9).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_reviews_by_reviewer() {
        let service = populated_service().await;

        let reviews = service.get_all_reviews_by_reviewer(reviewer()).await;
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].company_name, "Company A");
        assert_eq!(reviews[0].job_title, "Job Title A");
        assert_eq!(
            reviews.iter().map(|r| r.review_id).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );

        assert!(service
            .get_all_reviews_by_reviewer(lister())
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn test_company_salary_stats() {
        let service = populated_service().await;

        assert_eq!(
            service.get_company_salary_stats("Company A").await,
            SalaryStats {
                average: 5000,
                minimum: 5000,
                maximum: 5000,
            }
        );
        assert_eq!(
            service.get_company_salary_stats("Company B").await,
            SalaryStats {
                average: 6500,
                minimum: 6000,
                maximum: 7000,
            }
        );
        assert_eq!(
            service.get_company_salary_stats("company b").await,
            SalaryStats::default()
        );
    }

    #[tokio::test]
    async fn test_delete_review() {
        let service = populated_service().await;

        let receipt = service.delete_review(reviewer(), 0).await.unwrap();
        assert_eq!(receipt.events, vec![LedgerEvent::ReviewDeleted { review_id: 0 }]);

        assert!(service.get_all_reviews_of_job_listing(0).await.is_empty());
        assert_eq!(service.get_reviews_count().await, 2);
        // Later reviews shifted down one slot
        assert_eq!(service.get_review(0).await.unwrap().salary, 6000);
    }

    #[tokio::test]
    async fn test_update_review() {
        let service = populated_service().await;

        service
            .update_review(reviewer(), 0, content("Hash A", "Text A - updated", 4000, 3))
            .await
            .unwrap();

        let review = service.get_review(0).await.unwrap();
        assert_eq!(
            service.get_review_text(review.review_hash).await,
            "Text A - updated"
        );
        assert_eq!(review.salary, 4000);
        assert_eq!(review.rating, 3);
        assert_eq!(review.listing_id, Some(0));
    }

    #[tokio::test]
    async fn test_review_created_event() {
        let service = service_with_lister().await;
        service
            .create_job_listing(lister(), listing("Company A", "Job Title A", "Description A"))
            .await
            .unwrap();

        let receipt = service
            .create_review(reviewer(), 0, content("Hash A", "Text A", 5000, 5))
            .await
            .unwrap();

        assert_eq!(
            receipt.events,
            vec![LedgerEvent::ReviewSubmitted(ReviewRecord {
                review_id: 0,
                reviewer: reviewer(),
                company_name: "Company A".to_string(),
                job_title: "Job Title A".to_string(),
                review_hash: hash_of("Hash A"),
                review_text: "Text A".to_string(),
                salary: 5000,
                rating: 5,
            })]
        );
    }

    #[tokio::test]
    async fn test_review_updated_event() {
        let service = service_with_lister().await;
        service
            .create_job_listing(lister(), listing("Company A", "Job Title A", "Description A"))
            .await
            .unwrap();
        service
            .create_review(reviewer(), 0, content("Hash A", "Text A", 5000, 5))
            .await
            .unwrap();

        let receipt = service
            .update_review(reviewer(), 0, content("Hash A", "Text A - updated", 4000, 3))
            .await
            .unwrap();

        assert_eq!(receipt.events.len(), 1);
        match receipt.event() {
            Some(LedgerEvent::ReviewUpdated(record)) => {
                assert_eq!(record.review_id, 0);
                assert_eq!(record.company_name, "Company A");
                assert_eq!(record.job_title, "Job Title A");
                assert_eq!(record.review_hash, hash_of("Hash A"));
                assert_eq!(record.review_text, "Text A - updated");
                assert_eq!(record.salary, 4000);
                assert_eq!(record.rating, 3);
            }
            other => panic!("expected ReviewUpdated, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_review_on_missing_listing_rejected() {
        let service = populated_service().await;

        let err = service
            .create_review(reviewer(), 2, content("Hash D", "Text D", 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ReviewLedgerError::IndexOutOfRange {
                kind: StoreKind::Listing,
                index: 2,
                count: 2,
            }
        ));
        assert_eq!(service.get_reviews_count().await, 3);
    }

    #[tokio::test]
    async fn test_delete_job_listing_cascades_to_reviews() {
        let service = service_with_lister().await;
        service
            .create_job_listing(lister(), listing("Company A", "Job Title A", "Description A"))
            .await
            .unwrap();
        let listings_before = service.get_job_listings_count().await;

        service
            .create_review(reviewer(), 0, content("Hash A", "Text A", 5000, 5))
            .await
            .unwrap();
        service
            .create_review(reviewer(), 0, content("Hash B", "Text B", 6000, 4))
            .await
            .unwrap();
        let reviews_before = service.get_reviews_count().await;

        let receipt = service.delete_job_listing(lister(), 0).await.unwrap();
        assert_eq!(receipt.output, 2);

        assert_eq!(service.get_job_listings_count().await, listings_before - 1);
        assert_eq!(service.get_reviews_count().await, reviews_before - 2);
    }

    #[tokio::test]
    async fn test_cascade_relinks_reviews_of_later_listings() {
        let service = populated_service().await;

        let receipt = service.delete_job_listing(lister(), 0).await.unwrap();
        assert_eq!(
            receipt.events,
            vec![LedgerEvent::JobListingDeleted {
                listing_id: 0,
                removed_reviews: 1,
            }]
        );

        // Company B moved to listing 0 and took its reviews along
        let reviews = service.get_all_reviews_of_job_listing(0).await;
        assert_eq!(reviews.len(), 2);
        assert!(reviews.iter().all(|r| r.company_name == "Company B"));
        assert_eq!(
            service.get_company_salary_stats("Company B").await.average,
            6500
        );
        assert_eq!(
            service.get_company_salary_stats("Company A").await,
            SalaryStats::default()
        );
    }

    #[tokio::test]
    async fn test_bus_sees_commit_order() {
        let service = service_with_lister().await;
        let from = service.journal_len().await;

        service
            .create_job_listing(lister(), listing("Company A", "Job Title A", "Description A"))
            .await
            .unwrap();
        service
            .create_review(reviewer(), 0, content("Hash A", "Text A", 5000, 5))
            .await
            .unwrap();
        service.delete_job_listing(lister(), 0).await.unwrap();

        let names: Vec<_> = service
            .events_since(from)
            .await
            .into_iter()
            .map(|entry| entry.event.name())
            .collect();
        assert_eq!(
            names,
            vec!["JobListingCreated", "ReviewSubmitted", "JobListingDeleted"]
        );
    }
}
