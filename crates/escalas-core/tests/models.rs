use escalas_core::error::CoreError;
use escalas_core::models::category::ScaleCategory;
use escalas_core::models::result::{parse_result_id, SaveContext, ScoreResult, StoredResult};
use escalas_core::models::severity::Severity;
use uuid::Uuid;

fn glasgow_context() -> SaveContext {
    SaveContext {
        scale_id: "glasgow".to_string(),
        scale_name: "Glasgow Coma Scale".to_string(),
        category: ScaleCategory::Adult,
        description: "Level of consciousness".to_string(),
        parameters: "Eye opening: 4, Verbal response: 5, Motor response: 6".to_string(),
    }
}

#[test]
fn category_parses_english_and_portuguese_names() {
    assert_eq!("adult".parse::<ScaleCategory>().unwrap(), ScaleCategory::Adult);
    assert_eq!("Pediatria".parse::<ScaleCategory>().unwrap(), ScaleCategory::Pediatric);
    assert!(matches!(
        "geriatric".parse::<ScaleCategory>(),
        Err(CoreError::InvalidCategory(_))
    ));
}

#[test]
fn categories_list_adult_first() {
    assert_eq!(ScaleCategory::ALL, [ScaleCategory::Adult, ScaleCategory::Pediatric]);
    assert!(ScaleCategory::Adult < ScaleCategory::Pediatric);
}

#[test]
fn severity_is_ordered() {
    assert!(Severity::Low < Severity::Moderate);
    assert!(Severity::Moderate < Severity::High);
    assert!(Severity::High < Severity::Critical);
    assert_eq!("critical".parse::<Severity>().unwrap(), Severity::Critical);
}

#[test]
fn stored_result_copies_score_and_context() {
    let result = ScoreResult {
        total_score: 15,
        interpretation: "Mild".to_string(),
        severity: Severity::Low,
        overridden: false,
    };
    let id = Uuid::new_v4();
    let at: jiff::Timestamp = "2025-09-15T10:00:00Z".parse().unwrap();

    let stored = StoredResult::new(id, &result, glasgow_context(), at);

    assert_eq!(stored.id, id);
    assert_eq!(stored.scale_id, "glasgow");
    assert_eq!(stored.score, 15);
    assert_eq!(stored.total_points, 15);
    assert_eq!(stored.interpretation, "Mild");
    assert_eq!(stored.category, ScaleCategory::Adult);
    assert_eq!(stored.created_at, at);
}

#[test]
fn display_points_falls_back_to_score() {
    let result = ScoreResult {
        total_score: 0,
        interpretation: "Low risk".to_string(),
        severity: Severity::Low,
        overridden: false,
    };
    let mut stored =
        StoredResult::new(Uuid::new_v4(), &result, glasgow_context(), jiff::Timestamp::UNIX_EPOCH);
    assert_eq!(stored.display_points(), 0);

    stored.score = 3;
    assert_eq!(stored.display_points(), 3);
}

#[test]
fn stored_result_json_keeps_every_field() {
    let result = ScoreResult {
        total_score: 9,
        interpretation: "Moderate".to_string(),
        severity: Severity::Moderate,
        overridden: false,
    };
    let stored = StoredResult::new(
        Uuid::new_v4(),
        &result,
        glasgow_context(),
        "2025-09-15T10:00:00.123456789Z".parse().unwrap(),
    );

    let json = serde_json::to_string(&stored).unwrap();
    let back: StoredResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stored);
    assert!(json.contains("\"category\":\"adult\""));
}

#[test]
fn result_ids_are_trimmed_and_validated() {
    let id = Uuid::new_v4();
    assert_eq!(parse_result_id(&format!("  {id} ")).unwrap(), id);
    assert!(matches!(parse_result_id("nope"), Err(CoreError::InvalidResultId(_))));
}
