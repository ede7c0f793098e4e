use super::*;
use std::io::Write;

#[test]
fn test_batching_small() {
    let batcher = Batcher::new(3);
    let items: Vec<String> = (1..=5).map(|i| format!("Sentence {i}.")).collect();

    let batches = batcher.split(&items);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 3);
    assert_eq!(batches[1].len(), 2);
}

#[test]
fn test_batching_zero_size_is_clamped() {
    let batcher = Batcher::new(0);
    let items = vec!["a".to_string(); 3];

    assert_eq!(batcher.batch_size(), 1);
    assert_eq!(batcher.split(&items).len(), 3);
}

#[test]
fn test_closure_is_an_extractor() {
    let extractor = |sentence: &str| -> Result<Vec<EntityTag>, String> {
        Ok(vec![EntityTag::new("B-per", sentence, 0.5)])
    };

    let tags = extractor.extract("Alice").unwrap();
    assert_eq!(tags, vec![EntityTag::new("B-per", "Alice", 0.5)]);
}

#[test]
fn test_tag_wire_names() {
    let json = r#"[
        {"entity_group": "B-org", "word": "Acme", "score": 0.97},
        {"type": "I-geo", "surface": "Paris", "confidence": 0.5},
        {"entity_group": "O", "word": "the"}
    ]"#;
    let tags: Vec<EntityTag> = serde_json::from_str(json).unwrap();

    assert_eq!(tags[0], EntityTag::new("B-org", "Acme", 0.97));
    assert_eq!(tags[1], EntityTag::new("I-geo", "Paris", 0.5));
    assert_eq!(tags[2].confidence, 0.0);

    let out = serde_json::to_value(&tags[0]).unwrap();
    assert_eq!(out["entity_group"], "B-org");
    assert_eq!(out["word"], "Acme");
}

#[test]
fn test_clean_wordpieces() {
    let tags = vec![
        EntityTag::new("O", "[CLS]", 1.0),
        EntityTag::new("B-per", "Jo", 0.9),
        EntityTag::new("I-per", "##hn", 0.8),
        EntityTag::new("O", "[SEP]", 1.0),
    ];

    let cleaned = client::clean_wordpieces(tags);
    let surfaces: Vec<_> = cleaned.iter().map(|t| t.surface.as_str()).collect();
    assert_eq!(surfaces, vec!["Jo", "hn"]);
}

#[test]
fn test_prefetched_lookup() {
    let prefetched = PrefetchedTags::from_pairs(vec![
        ("Alice met Bob.".to_string(), vec![EntityTag::new("B-per", "Alice", 0.9)]),
        ("It rained.".to_string(), vec![]),
    ]);

    assert_eq!(prefetched.len(), 2);
    assert_eq!(prefetched.extract("Alice met Bob.").unwrap().len(), 1);
    assert!(prefetched.extract("It rained.").unwrap().is_empty());
    assert!(matches!(
        prefetched.extract("Unknown."),
        Err(NerError::NotPrefetched(s)) if s == "Unknown."
    ));
}

#[test]
fn test_gazetteer_tags_known_tokens() {
    let gazetteer = GazetteerExtractor::from_toml_str(
        r#"
        per = ["Alice"]
        geo = ["Paris", "Berlin"]
        "#,
    )
    .unwrap();
    assert_eq!(gazetteer.len(), 3);

    let tags = gazetteer.extract("Alice flew to Paris, then home.").unwrap();
    let labels: Vec<_> = tags.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["B-per", "O", "O", "B-geo", "O", "O"]);
    assert_eq!(tags[3].surface, "Paris");
}

#[test]
fn test_gazetteer_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "org = [\"Acme\"]").unwrap();

    let gazetteer = GazetteerExtractor::from_path(file.path()).unwrap();
    let tags = gazetteer.extract("Acme").unwrap();
    assert_eq!(tags[0].label, "B-org");
}

#[test]
fn test_gazetteer_missing_file() {
    let result = GazetteerExtractor::from_path(std::path::Path::new("/nonexistent/gazetteer.toml"));
    assert!(matches!(result, Err(GazetteerError::Read { .. })));
}

#[test]
fn test_gazetteer_rejects_malformed_toml() {
    let result = GazetteerExtractor::from_toml_str("per = \"Alice\"");
    assert!(matches!(result, Err(GazetteerError::Parse(_))));
}

#[test]
fn test_client_empty_batch_makes_no_request() {
    let client = NerClient::new("http://127.0.0.1:1").unwrap();
    let result = client.predict_batch(&[]).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_client_unreachable_server() {
    let client = NerClient::new("http://127.0.0.1:1/").unwrap();
    assert_eq!(client.endpoint(), "http://127.0.0.1:1");

    let result = client.extract("Alice met Bob.");
    assert!(matches!(result, Err(NerError::RequestFailed(_))));
}

// Integration test - requires the NER model server running
#[test]
#[ignore]
fn test_client_round_trip() {
    let client = NerClient::new("http://localhost:18117").unwrap().batch_size(2);
    let sentences: Vec<String> = (0..5)
        .map(|i| format!("Barack Obama visited Paris in {}.", 2000 + i))
        .collect();

    let results = client.predict_batch(&sentences).unwrap();
    assert_eq!(results.len(), 5);

    let prefetched = client.prefetch(&sentences).unwrap();
    assert!(prefetched.extract(&sentences[0]).is_ok());
}
