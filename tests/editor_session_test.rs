use async_trait::async_trait;
use ingredients_field::{
    ConfirmRequest, ControllerOptions, DialogGateway, DialogRequest, DialogResponse, DialogText,
    EditorError, Ingredient, IngredientListController, JsonFileStore, Locale, NormalizeMode,
    Result, StaticLocales,
};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Mutex;

/// Replays a fixed dialog script, the way the host UI would resolve modals.
#[derive(Clone)]
struct ScriptedDialogs {
    responses: Arc<Mutex<VecDeque<DialogResponse>>>,
    confirms: Arc<Mutex<VecDeque<bool>>>,
}

impl ScriptedDialogs {
    fn new(responses: Vec<DialogResponse>, confirms: Vec<bool>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            confirms: Arc::new(Mutex::new(confirms.into())),
        }
    }
}

#[async_trait]
impl DialogGateway for ScriptedDialogs {
    async fn open_dialog(&self, _request: DialogRequest) -> Result<DialogResponse> {
        self.responses
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| EditorError::DialogUnavailable {
                message: "dialog script exhausted".to_string(),
            })
    }

    async fn open_confirm(&self, _request: ConfirmRequest) -> Result<bool> {
        self.confirms
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| EditorError::DialogUnavailable {
                message: "confirm script exhausted".to_string(),
            })
    }
}

fn read_locale_value(path: &std::path::Path, locale: &str) -> Value {
    let raw = std::fs::read_to_string(path).unwrap();
    let entry: Value = serde_json::from_str(&raw).unwrap();
    entry[locale].clone()
}

#[tokio::test]
async fn test_end_to_end_editing_session_against_file_store() {
    // Setup: the entry file does not exist yet
    let temp_dir = TempDir::new().unwrap();
    let entry_path = temp_dir.path().join("entry.json");

    let dialogs = ScriptedDialogs::new(
        vec![
            DialogResponse::Ingredient(Ingredient::new(
                json!({"name": "Flour", "amount": "500 g"}),
            )),
            DialogResponse::Ingredient(Ingredient::new(json!({"name": "Salt", "amount": "1 tsp"}))),
            DialogResponse::Ingredient(Ingredient::new(
                json!({"name": "Sea Salt", "amount": "2 tsp"}),
            )),
            DialogResponse::Rows(vec![
                Ingredient::new(json!({"name": "Rye flour", "amount": "300 g"})),
                Ingredient::new(json!({"name": "Water", "amount": "200 ml"})),
                Ingredient::new(json!({"name": "Starter", "amount": "50 g"})),
            ]),
        ],
        vec![false, true],
    );

    let store = JsonFileStore::new(&entry_path, Locale::new("en-US"));
    let entry = store.clone();
    let mut controller = IngredientListController::new(
        store,
        dialogs,
        StaticLocales::new(Locale::new("en-US")),
        entry,
    )
    .await
    .unwrap();

    assert!(controller.is_empty());

    // Two records arrive through the add dialog
    assert_eq!(controller.open_add_dialog().await.unwrap(), 1);
    assert_eq!(controller.open_add_dialog().await.unwrap(), 2);
    assert_eq!(
        read_locale_value(&entry_path, "en-US"),
        json!([{"name": "Flour", "amount": "500 g"}, {"name": "Salt", "amount": "1 tsp"}])
    );

    // Edit the second record through its dialog
    controller.open_edit_dialog(1).await.unwrap();
    assert_eq!(
        read_locale_value(&entry_path, "en-US")[1],
        json!({"name": "Sea Salt", "amount": "2 tsp"})
    );

    // Bulk edit swaps the whole list
    controller.open_bulk_edit_dialog().await.unwrap();
    assert_eq!(controller.len(), 3);
    assert_eq!(
        read_locale_value(&entry_path, "en-US"),
        json!([
            {"name": "Rye flour", "amount": "300 g"},
            {"name": "Water", "amount": "200 ml"},
            {"name": "Starter", "amount": "50 g"}
        ])
    );

    // Remove the middle row
    controller.remove(1).await.unwrap();
    assert_eq!(controller.len(), 2);
    assert_eq!(
        read_locale_value(&entry_path, "en-US"),
        json!([
            {"name": "Rye flour", "amount": "300 g"},
            {"name": "Starter", "amount": "50 g"}
        ])
    );

    // First clear is declined, the second goes through
    controller.clear_all().await.unwrap();
    assert_eq!(controller.len(), 2);

    controller.clear_all().await.unwrap();
    assert!(controller.is_empty());
    assert_eq!(read_locale_value(&entry_path, "en-US"), json!([]));
}

#[tokio::test]
async fn test_cancelled_dialogs_never_touch_the_store() {
    let temp_dir = TempDir::new().unwrap();
    let entry_path = temp_dir.path().join("entry.json");

    let dialogs = ScriptedDialogs::new(
        vec![DialogResponse::Cancelled, DialogResponse::Cancelled],
        vec![],
    );

    let store = JsonFileStore::new(&entry_path, Locale::new("en-US"));
    let entry = store.clone();
    let mut controller = IngredientListController::new(
        store,
        dialogs,
        StaticLocales::new(Locale::new("en-US")),
        entry,
    )
    .await
    .unwrap();

    controller.open_add_dialog().await.unwrap();
    controller.open_bulk_edit_dialog().await.unwrap();

    assert!(controller.is_empty());
    // nothing was written, so the file was never created
    assert!(!entry_path.exists());
}

#[tokio::test]
async fn test_legacy_wrapper_value_reads_in_and_writes_back_plain() {
    let temp_dir = TempDir::new().unwrap();
    let entry_path = temp_dir.path().join("entry.json");
    std::fs::write(
        &entry_path,
        serde_json::to_string_pretty(&json!({
            "en-US": {"ingredients": [{"name": "Flour", "amount": "500 g"}]}
        }))
        .unwrap(),
    )
    .unwrap();

    let store = JsonFileStore::new(&entry_path, Locale::new("en-US"));
    let entry = store.clone();
    let mut controller = IngredientListController::new(
        store,
        ScriptedDialogs::new(vec![], vec![]),
        StaticLocales::new(Locale::new("en-US")),
        entry,
    )
    .await
    .unwrap();

    assert_eq!(controller.len(), 1);

    controller
        .add(Some(Ingredient::new(json!({"name": "Salt", "amount": "1 tsp"}))))
        .await
        .unwrap();

    // write-back is always the plain array shape
    assert_eq!(
        read_locale_value(&entry_path, "en-US"),
        json!([{"name": "Flour", "amount": "500 g"}, {"name": "Salt", "amount": "1 tsp"}])
    );
}

#[tokio::test]
async fn test_strict_mode_surfaces_malformed_store_value() {
    let temp_dir = TempDir::new().unwrap();
    let entry_path = temp_dir.path().join("entry.json");
    std::fs::write(
        &entry_path,
        serde_json::to_string_pretty(&json!({"en-US": "definitely not a list"})).unwrap(),
    )
    .unwrap();

    let store = JsonFileStore::new(&entry_path, Locale::new("en-US"));
    let entry = store.clone();
    let result = IngredientListController::with_options(
        store,
        ScriptedDialogs::new(vec![], vec![]),
        StaticLocales::new(Locale::new("en-US")),
        entry,
        ControllerOptions {
            normalize: NormalizeMode::Strict,
            text: DialogText::default(),
        },
    )
    .await;

    assert!(matches!(
        result.err().unwrap(),
        EditorError::MalformedFieldValue { .. }
    ));
}
