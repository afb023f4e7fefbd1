//! Integration tests for building and exporting collections
//!
//! These tests drive the builder through the infrastructure adapters and
//! check the exported JSON document end to end.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use postbuild_application::{BuilderConfig, CollectionBuilder, DuplicateFolderPolicy};
use postbuild_domain::{
    CollectionDocument, CollectionInput, FolderInput, RequestInput, WarningKind,
};
use postbuild_infrastructure::{
    FixedClock, SequentialIdGenerator, system_builder, system_builder_from_json,
    system_builder_with_config,
};

const NOW: i64 = 1_400_000_000_000;

fn owner_count(doc: &CollectionDocument, request_id: &str) -> usize {
    doc.order.iter().filter(|id| *id == request_id).count()
        + doc
            .folders
            .iter()
            .flat_map(|f| f.order.iter())
            .filter(|id| *id == request_id)
            .count()
}

fn deterministic(input: CollectionInput) -> CollectionBuilder<SequentialIdGenerator, FixedClock> {
    CollectionBuilder::with_input(
        input,
        SequentialIdGenerator::default(),
        FixedClock::at_millis(NOW),
    )
}

#[test]
fn test_export_matches_import_format() {
    let mut builder = deterministic(CollectionInput::named("users-api"));
    builder.add_request(
        RequestInput::named("list users")
            .with_method("get")
            .with_url("http://localhost:8080/users"),
        None,
    );
    builder.add_request(
        RequestInput::named("create user")
            .with_method("POST")
            .with_headers("Content-Type: application/json"),
        Some("admin"),
    );

    let json = builder.serialize().expect("serialization should work");
    let exported: Value = serde_json::from_str(&json).expect("export should be valid JSON");

    let expected = json!({
        "id": "id-1",
        "name": "users-api",
        "description": "no description available",
        "order": ["id-2"],
        "folders": [{
            "id": "id-4",
            "name": "admin",
            "description": "not available",
            "order": ["id-3"],
            "collectionId": "id-1",
            "collectionName": "users-api"
        }],
        "timestamp": NOW,
        "synced": false,
        "requests": [
            {
                "id": "id-2",
                "name": "list users",
                "description": "not available",
                "descriptionFormat": "html",
                "method": "GET",
                "url": "http://localhost:8080/users",
                "headers": "",
                "pathVariables": {},
                "preRequestScript": "",
                "data": [],
                "dataMode": "",
                "version": "2",
                "tests": "",
                "responses": [],
                "synced": false,
                "collectionId": "id-1",
                "time": NOW
            },
            {
                "id": "id-3",
                "name": "create user",
                "description": "not available",
                "descriptionFormat": "html",
                "method": "POST",
                "url": "",
                "headers": "Content-Type: application/json",
                "pathVariables": {},
                "preRequestScript": "",
                "data": [],
                "dataMode": "",
                "version": "2",
                "tests": "",
                "responses": [],
                "synced": false,
                "collectionId": "id-1",
                "time": NOW
            }
        ]
    });

    assert_eq!(exported, expected);
}

#[test]
fn test_export_key_order_and_indentation() {
    let builder = deterministic(CollectionInput::default());
    let json = builder.serialize().unwrap();

    let expected = format!(
        "{{\n  \"id\": \"id-1\",\n  \"name\": \"postman-collection-generator\",\n  \
         \"description\": \"no description available\",\n  \"order\": [],\n  \
         \"folders\": [],\n  \"timestamp\": {NOW},\n  \"synced\": false,\n  \
         \"requests\": []\n}}"
    );
    assert_eq!(json, expected);
}

#[test]
fn test_round_trip_reflects_intermediate_states() {
    let mut builder = deterministic(CollectionInput::default());

    let before: CollectionDocument = serde_json::from_str(&builder.serialize().unwrap()).unwrap();
    assert!(before.requests.is_empty());

    builder.add_request(RequestInput::named("r1"), Some("f1"));
    let after: CollectionDocument = serde_json::from_str(&builder.serialize().unwrap()).unwrap();

    assert_eq!(&after, builder.document());
    assert_eq!(after.requests.len(), 1);
    assert_eq!(after.folders[0].order, vec![after.requests[0].id.clone()]);
}

#[test]
fn test_every_request_has_exactly_one_owner() {
    let mut builder = deterministic(CollectionInput::default());
    let folders = [None, Some("auth"), Some("users"), None, Some("auth"), Some("")];
    for (i, folder) in folders.iter().enumerate() {
        builder.add_request(RequestInput::named(format!("r{i}")), *folder);
    }

    let doc = builder.document();
    assert_eq!(doc.requests.len(), folders.len());
    assert_eq!(doc.folders.len(), 2);
    for request in &doc.requests {
        assert_eq!(owner_count(doc, &request.id), 1, "{}", request.name);
    }
    assert_eq!(doc.order.len(), 3);
}

#[test]
fn test_seeded_from_json() {
    let builder = system_builder_from_json(json!({
        "name": "seeded",
        "folders": [{"name": "folder-1", "description": "first"}, {"name": "folder-2"}],
        "requests": [
            {"name": "requests-1", "method": "delete", "pathVariables": {"id": "7"}},
            {"name": "requests-2", "method": "Delete", "extra": "ignored"}
        ]
    }));

    let doc = builder.document();
    assert_eq!(doc.name, "seeded");
    assert_eq!(doc.folders.len(), 2);
    assert_eq!(doc.folders[0].description, "first");
    assert_eq!(doc.requests.len(), 2);
    assert_eq!(doc.requests[0].method.as_str(), "DELETE");
    assert_eq!(doc.requests[0].path_variables, json!({"id": "7"}));
    assert_eq!(doc.requests[1].method.as_str(), "GET");
    assert_eq!(doc.order.len(), 2);
    assert!(builder.warnings().is_empty());
}

#[test]
fn test_mistyped_fields_default_one_by_one() {
    let builder = system_builder_from_json(json!({
        "name": "keep-me",
        "timestamp": "123",
        "folders": [{"name": "a"}, {"name": "my-folder", "order": "123"}],
        "requests": [
            {"name": "good-1"},
            {"name": "good-2"},
            {"name": "r3", "time": "2014"}
        ]
    }));

    let doc = builder.document();
    assert_eq!(doc.name, "keep-me");
    assert_eq!(doc.timestamp, 123);
    assert_eq!(doc.folders.len(), 2);
    assert_eq!(doc.folders[1].order, vec!["123".to_string()]);
    assert_eq!(doc.requests.len(), 3);
    assert_eq!(doc.requests[2].time, 2014);
    assert_eq!(doc.order.len(), 3);
    assert!(builder.warnings().is_empty());
}

#[test]
fn test_malformed_seeds_are_reported_not_fatal() {
    let builder = system_builder_from_json(json!({
        "name": "partial",
        "folders": "folder-1",
        "requests": {"name": "not-a-list"}
    }));

    assert_eq!(builder.document().name, "partial");
    assert!(builder.document().folders.is_empty());
    assert!(builder.document().requests.is_empty());

    let paths: Vec<&str> = builder.warnings().iter().map(|w| w.path.as_str()).collect();
    assert_eq!(paths, vec!["collection/folders", "collection/requests"]);
    assert!(
        builder
            .warnings()
            .iter()
            .all(|w| w.kind == WarningKind::SeedNotAList)
    );
}

#[test]
fn test_system_builder_assigns_unique_ids() {
    let mut builder = system_builder(CollectionInput::default());
    let collection_id = builder.document().id.clone();
    let a = builder.add_request(RequestInput::default(), None).id.clone();
    let b = builder.add_request(RequestInput::default(), Some("f")).id.clone();
    let folder_id = builder.document().folders[0].id.clone();

    let mut ids = vec![collection_id, a, b, folder_id];
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
    assert!(builder.document().timestamp > 0);
}

#[test]
fn test_system_builder_with_keep_policy() {
    let config = BuilderConfig {
        duplicate_folders: DuplicateFolderPolicy::Keep,
        pretty_print: false,
    };
    let mut builder = system_builder_with_config(
        CollectionInput::default().with_folders(vec![FolderInput::named("api")]),
        config,
    );
    builder.add_folder(FolderInput::named("api").with_order(vec!["orphan".into()]));

    assert_eq!(builder.document().folders.len(), 1);
    assert!(builder.document().folders[0].order.is_empty());
    assert_eq!(builder.warnings()[0].kind, WarningKind::FolderIgnored);
    assert!(!builder.serialize().unwrap().contains('\n'));
}
