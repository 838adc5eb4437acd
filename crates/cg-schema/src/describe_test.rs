use super::*;
use crate::pathology::IcdOBehavior;

#[test]
fn test_every_mention_documents_evidence_fields() {
    let fields = TopographyMention::fields();
    assert_eq!(fields[0].name, "has_mention");
    assert_eq!(fields[1].name, "spans");
}

#[test]
fn test_enum_fields_list_values() {
    let behavior = BehaviorMention::fields()
        .into_iter()
        .find(|f| f.name == "behavior")
        .unwrap();
    assert_eq!(behavior.values, IcdOBehavior::labels());
    assert!(behavior.values.contains(&"/3"));
}

#[test]
fn test_rx_class_extends_medication() {
    let medication = MedicationMention::fields().len();
    let rx_class = RxClassCancerMention::fields();
    assert_eq!(rx_class.len(), medication + 1);
    assert_eq!(rx_class.last().unwrap().name, "drug_type");
}

#[test]
fn test_schema_document() {
    let doc = schema_document();
    assert_eq!(doc["root"], "GliomaCaseAnnotation");
    let records = doc["records"].as_object().unwrap();
    assert_eq!(records.len(), 10);

    let root_fields = records["GliomaCaseAnnotation"]["fields"].as_array().unwrap();
    assert_eq!(root_fields.len(), GliomaCaseAnnotation::fields().len());

    let surgery = &records["SurgeryMention"]["fields"];
    let extent = surgery
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "extent_of_resection")
        .unwrap();
    assert_eq!(extent["type"], "enum");
    assert!(extent["values"]
        .as_array()
        .unwrap()
        .iter()
        .any(|v| v == "GROSS_TOTAL"));

    // plain string fields carry no value list
    let site = surgery
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "anatomical_site")
        .unwrap();
    assert!(site.get("values").is_none());
}
