//! Integration tests for NetBox client
//!
//! These tests require a running NetBox instance.
//! Set NETBOX_URL and NETBOX_TOKEN environment variables to run.
//! NETBOX_TEST_RIR_ID selects the RIR used for created aggregates (default 1).

use netbox_client::{NetBoxClient, WritableAggregate};

fn live_client() -> NetBoxClient {
    let url = std::env::var("NETBOX_URL")
        .unwrap_or_else(|_| "http://localhost:8001".to_string());
    let token = std::env::var("NETBOX_TOKEN")
        .expect("NETBOX_TOKEN environment variable must be set");

    NetBoxClient::new(url, token).expect("Failed to create client")
}

fn test_rir_id() -> u64 {
    std::env::var("NETBOX_TEST_RIR_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

#[tokio::test]
#[ignore] // Requires running NetBox instance
async fn test_validate_token() {
    let client = live_client();
    client.validate_token().await.expect("Token should be valid");
}

#[tokio::test]
#[ignore]
async fn test_aggregate_lifecycle() {
    let client = live_client();
    let rir_id = test_rir_id();

    // Create
    let request = WritableAggregate::new("198.18.0.0/15", rir_id, "provider integration test");
    let created = client.create_aggregate(&request).await
        .expect("Failed to create aggregate");
    println!("Created aggregate {} (ID: {})", created.prefix, created.id);

    // Update twice with the same payload
    let replacement = WritableAggregate::new("198.18.0.0/15", rir_id, "updated");
    for _ in 0..2 {
        let updated = client.update_aggregate(created.id, &replacement).await
            .expect("Failed to update aggregate");
        assert_eq!(updated.description, "updated");
    }

    // Read back
    let read = client.get_aggregate(created.id).await
        .expect("Failed to read aggregate");
    assert_eq!(read.rir.id, rir_id);

    // Clean up and confirm it is gone
    client.delete_aggregate(created.id).await
        .expect("Failed to delete aggregate");
    let err = client.get_aggregate(created.id).await.unwrap_err();
    assert!(err.is_not_found());
}
