use anyhow::Result;
use datakit::entity::Entity;
use datakit::errors::DataError;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

#[derive(Serialize)]
struct Patient {
    id: Uuid,
    given_name: String,
    note: Option<String>,
}

impl Entity for Patient {
    const TABLE_NAME: &'static str = "patients";
}

#[derive(Serialize)]
#[serde(transparent)]
struct BareCount(i32);

impl Entity for BareCount {
    const TABLE_NAME: &'static str = "counts";
}

#[test]
fn to_map_keeps_all_fields_by_default() -> Result<()> {
    let patient = Patient {
        id: Uuid::new_v4(),
        given_name: "Amina".to_string(),
        note: None,
    };

    let map = patient.to_map(false)?;
    assert_eq!(map.len(), 3);
    assert_eq!(map["given_name"], json!("Amina"));
    assert!(map["note"].is_null());
    Ok(())
}

#[test]
fn to_map_drops_null_fields_when_asked() -> Result<()> {
    let patient = Patient {
        id: Uuid::new_v4(),
        given_name: "Amina".to_string(),
        note: None,
    };

    let map = patient.to_map(true)?;
    assert_eq!(map.len(), 2);
    assert!(!map.contains_key("note"));
    assert_eq!(map["given_name"], json!("Amina"));
    Ok(())
}

#[test]
fn non_object_entities_are_rejected() {
    let err = BareCount(3).to_map(false).unwrap_err();
    assert!(matches!(err, DataError::Internal(_)));
}

#[test]
fn table_name_is_a_compile_time_constant() {
    assert_eq!(Patient::TABLE_NAME, "patients");
}
