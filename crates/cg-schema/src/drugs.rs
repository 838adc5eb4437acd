//! Medications, with the FHIR MedicationRequest attributes chart review can recover

use crate::describe::{span_fields, Described, FieldDoc};
use crate::mention::SpanMention;
use crate::schema_enum::schema_enum;
use serde::{Deserialize, Serialize};

schema_enum! {
    /// MedicationRequest status and intent, as documented in the note.
    pub enum RxStatus {
        Active => "Medication order is active (currently prescribed and intended for ongoing use).",
        Intended => "Medication is planned/ordered/prescribed but therapy has not yet started.",
        Completed => "Medication course is finished (all doses given or intended duration completed).",
        Stopped => "Medication was stopped or permanently discontinued before completion.",
        Canceled => "Medication order was canceled/withdrawn before any doses were administered.",
        OnHold => "Medication is temporarily paused (on-hold, suspended, or interrupted).",
        None => "None of the above",
    }
    default = None;
}

schema_enum! {
    /// Care setting (MedicationRequest.category).
    pub enum RxCategory {
        Inpatient => "Medication ordered/administered during an inpatient/acute care setting",
        Outpatient => "Medication ordered/administered during an outpatient setting",
        Community => "Medication ordered/consumed by the patient in their home (including long term care, nursing homes, etc)",
        None => "None of the above",
    }
    default = None;
}

schema_enum! {
    /// Route of administration.
    pub enum RxRoute {
        Oral => "Oral (includes swallowed and sublingual routes)",
        FeedingTube => "Nasogastric/Feeding tube (NG/PEG)",
        Injection => "Injection (IV, SC, or IM)",
        Inhalation => "Inhalation (respiratory route)",
        Topical => "Topical (skin or mucosal surface)",
        None => "None of the above",
    }
    default = None;
}

schema_enum! {
    pub enum TreatmentPhase {
        Induction => "Induction therapy",
        Maintenance => "Maintenance therapy",
        Rescue => "Rescue therapy",
        None => "None of the above",
    }
    default = None;
}

schema_enum! {
    /// Dosing frequency.
    pub enum RxFrequency {
        Once => "Single dose",
        Daily => "Once daily",
        TwiceDaily => "Twice daily (BID)",
        ThreeTimesDaily => "Three times daily (TID)",
        FourTimesDaily => "Four times daily (QID)",
        Weekly => "Weekly",
        PerCycle => "Once per treatment cycle",
        AsNeeded => "As needed (PRN)",
        None => "None of the above",
    }
    default = None;
}

schema_enum! {
    /// UCUM unit of the prescribed quantity.
    pub enum RxQuantityUnit {
        Milligram => "mg",
        Gram => "g",
        Microgram => "ug",
        Kilogram => "kg",
        Milliliter => "mL",
        Liter => "L",
        Unit => "U",
        InternationalUnit => "[iU]",
        Tablet => "{tablet}",
        Capsule => "{capsule}",
        Puff => "{puff}",
        Patch => "{patch}",
        Suppository => "{suppository}",
        MilligramPerMilliliter => "mg/mL",
        MilligramPerKilogram => "mg/kg",
        UnitPerKilogram => "U/kg",
        MicrogramPerKilogramPerMinute => "ug/kg/min",
        Hour => "h",
        Minute => "min",
        Day => "d",
        None => "None of the above",
    }
    default = None;
}

schema_enum! {
    /// Therapy class of a cancer drug.
    pub enum RxClassCancer {
        Chemotherapy => "Cytotoxic chemotherapy",
        Checkpoint => "Checkpoint inhibitors, especially PD-1, PDL-1, CTLA-4",
        Cytokine => "Cytokine therapy, especially IL-2 and interferon alpha",
        CarT => "Chimeric antigen receptor (CAR-T)",
        Other => "Other drug indicated for treatment of cancer(s)",
        None => "None of the above",
    }
    default = None;
}

/// A medication documented in a note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicationMention {
    #[serde(flatten)]
    pub mention: SpanMention,

    #[serde(default)]
    pub status: RxStatus,

    #[serde(default)]
    pub category: RxCategory,

    #[serde(default)]
    pub route: RxRoute,

    #[serde(default)]
    pub phase: TreatmentPhase,

    #[serde(default)]
    pub expected_supply_days: Option<u32>,

    #[serde(default)]
    pub number_of_repeats_allowed: Option<u32>,

    #[serde(default)]
    pub frequency: RxFrequency,

    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub quantity_unit: RxQuantityUnit,

    #[serde(default)]
    pub quantity_value: Option<String>,
}

/// A cancer drug and its therapy class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RxClassCancerMention {
    #[serde(flatten)]
    pub medication: MedicationMention,

    #[serde(default)]
    pub drug_type: RxClassCancer,
}

impl Described for MedicationMention {
    const NAME: &'static str = "MedicationMention";
    const DESCRIPTION: &'static str =
        "Medication with the MedicationRequest status, setting, route and dispense details found in the note.";

    fn fields() -> Vec<FieldDoc> {
        let mut fields = span_fields();
        fields.extend([
            FieldDoc::new("status", "enum", "What is the status of this medication?")
                .with_values(RxStatus::labels()),
            FieldDoc::new(
                "category",
                "enum",
                "In which healthcare setting is this medication prescribed/administered?",
            )
            .with_values(RxCategory::labels()),
            FieldDoc::new(
                "route",
                "enum",
                "What is the route of administration for this medication?",
            )
            .with_values(RxRoute::labels()),
            FieldDoc::new(
                "phase",
                "enum",
                "What is the treatment phase for this medication?",
            )
            .with_values(TreatmentPhase::labels()),
            FieldDoc::new(
                "expected_supply_days",
                "integer",
                "Number of days the medication supply is supposed to last.",
            ),
            FieldDoc::new(
                "number_of_repeats_allowed",
                "integer",
                "Number of refills the patient can receive.",
            ),
            FieldDoc::new(
                "frequency",
                "enum",
                "What is the frequency of this medication?",
            )
            .with_values(RxFrequency::labels()),
            FieldDoc::new(
                "start_date",
                "date",
                "Start date of the prescribed or administered medication.",
            ),
            FieldDoc::new(
                "end_date",
                "date",
                "End date of the prescribed or administered medication.",
            ),
            FieldDoc::new("quantity_unit", "enum", "Medication prescribed unit.")
                .with_values(RxQuantityUnit::labels()),
            FieldDoc::new(
                "quantity_value",
                "string",
                "Numeric amount of medication prescribed or administered.",
            ),
        ]);
        fields
    }
}

impl Described for RxClassCancerMention {
    const NAME: &'static str = "RxClassCancerMention";
    const DESCRIPTION: &'static str =
        "Cancer drug: a MedicationMention plus the therapy class of the drug.";

    fn fields() -> Vec<FieldDoc> {
        let mut fields = MedicationMention::fields();
        fields.push(
            FieldDoc::new(
                "drug_type",
                "enum",
                "Extract the cancer drug class or therapy modality documented for this medication, if present.",
            )
            .with_values(RxClassCancer::labels()),
        );
        fields
    }
}
