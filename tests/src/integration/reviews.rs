//! # Free-Standing Reviews
//!
//! Reviews submitted without a listing, input validation, the text index
//! and review deletion.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use jc_02_review_ledger::prelude::*;
    use shared_bus::{EventFilter, EventTopic, LedgerEvent};
    use shared_types::entities::Hash;

    const HASH_HEX: &str = "0x1234567890123456789012345678901234567890123456789012345678901234";

    fn fixed_hash() -> Hash {
        Hash::from_hex(HASH_HEX).unwrap()
    }

    async fn submit(
        service: &TestService,
        company: &str,
        title: &str,
        content: ReviewContent,
    ) -> Result<Receipt<u64>, ReviewLedgerError> {
        service
            .submit_review(owner(), company.to_string(), title.to_string(), content)
            .await
    }

    #[tokio::test]
    async fn test_retrieve_review_text_by_short_hash() {
        let service = create_test_service(owner());
        let hash = Hash::from_hex("0x1234abcd").unwrap();

        for _ in 0..2 {
            submit(
                &service,
                "Company XYZ",
                "Job Title",
                ReviewContent::new(hash, "This is a review.", 1000, 5),
            )
            .await
            .unwrap();
        }

        assert_eq!(service.get_reviews_count().await, 2);
        assert_eq!(service.get_review_text(hash).await, "This is a review.");
    }

    #[tokio::test]
    async fn test_submit_review_with_valid_inputs() {
        let service = create_test_service(owner());
        let mut sub = service
            .bus()
            .subscribe(EventFilter::topics(vec![EventTopic::Reviews]));

        submit(
            &service,
            "Company A",
            "Job Title A",
            ReviewContent::new(fixed_hash(), "", 1000, 4),
        )
        .await
        .unwrap();

        assert_eq!(service.get_reviews_count().await, 1);
        let review = service.get_review(0).await.unwrap();
        assert_eq!(review.company_name, "Company A");
        assert_eq!(review.job_title, "Job Title A");
        assert_eq!(review.review_hash, fixed_hash());
        assert_eq!(review.rating, 4);
        assert_eq!(review.listing_id, None);

        match sub.try_recv().unwrap() {
            Some(LedgerEvent::ReviewSubmitted(record)) => {
                assert_eq!(record.reviewer, owner());
                assert_eq!(record.company_name, "Company A");
                assert_eq!(record.job_title, "Job Title A");
                assert_eq!(record.review_hash, fixed_hash());
            }
            other => panic!("expected ReviewSubmitted, got {other:?}"),
        }
        assert!(sub.try_recv().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_submit_review_rejects_invalid_inputs() {
        let service = create_test_service(owner());

        let cases = [
            ("", "Job Title B", fixed_hash(), 3, "Company name must not be empty"),
            ("Company C", "", fixed_hash(), 5, "Job title must not be empty"),
            ("Company D", "Job Title D", Hash::ZERO, 2, "Hash must not be empty"),
            ("Company F", "Job Title F", fixed_hash(), 6, "Invalid rating"),
        ];
        for (company, title, hash, rating, message) in cases {
            let err = submit(
                &service,
                company,
                title,
                ReviewContent::new(hash, "", 1000, rating),
            )
            .await
            .unwrap_err();
            assert!(
                err.to_string().contains(message),
                "{err} should mention {message:?}"
            );
        }

        assert_eq!(service.get_reviews_count().await, 0);
        assert_eq!(service.journal_len().await, 0);
    }

    #[tokio::test]
    async fn test_set_review_text_then_retrieve() {
        let service = create_test_service(owner());
        submit(
            &service,
            "Company G",
            "Job Title G",
            ReviewContent::new(fixed_hash(), "", 1000, 4),
        )
        .await
        .unwrap();

        let receipt = service
            .set_review_text(owner(), 0, "This is a sample review text".to_string())
            .await
            .unwrap();
        assert_eq!(receipt.output, fixed_hash());

        assert_eq!(
            service.get_review_text(fixed_hash()).await,
            "This is a sample review text"
        );
    }

    #[tokio::test]
    async fn test_set_review_text_on_missing_review() {
        let service = create_test_service(owner());
        let err = service
            .set_review_text(owner(), 0, "orphan".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewLedgerError::IndexOutOfRange { .. }));
    }

    #[tokio::test]
    async fn test_delete_review_by_reviewer() {
        let service = create_test_service(owner());
        submit(
            &service,
            "Company H",
            "Job Title H",
            ReviewContent::new(fixed_hash(), "Kept text", 1000, 4),
        )
        .await
        .unwrap();
        assert_eq!(service.get_reviews_count().await, 1);

        service.delete_review(owner(), 0).await.unwrap();

        assert_eq!(service.get_reviews_count().await, 0);
        assert!(matches!(
            service.get_review(0).await,
            Err(ReviewLedgerError::IndexOutOfRange { .. })
        ));
        // Text outlives the review it was written for
        assert_eq!(service.get_review_text(fixed_hash()).await, "Kept text");
    }

    #[tokio::test]
    async fn test_unknown_hash_reads_empty() {
        let service = create_test_service(owner());
        assert_eq!(service.get_review_text(hash_of("never written")).await, "");
    }
}
