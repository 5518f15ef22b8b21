//! The canonical entry schema.
//!
//! Every daily entry carries exactly the fields listed here, in this order.
//! The order is load-bearing: it is the column order of the exported CSV and
//! of the entries table.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Fixed option sets offered by select inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choices {
    /// `0` through `5`.
    Severity,
    /// `1` through `5`.
    Quality,
    /// `High`, `Medium`, `Low`, `N/A`.
    Level,
    /// `Hot`, `Warm`, `Mild`, `Cool`.
    Temperature,
    /// `Yes`, `No`.
    YesNo,
    /// `Clean`, `Medium`, `Greasy`.
    Hair,
}

impl Choices {
    /// The option values, in display order.
    #[must_use]
    pub const fn values(self) -> &'static [&'static str] {
        match self {
            Self::Severity => &["0", "1", "2", "3", "4", "5"],
            Self::Quality => &["1", "2", "3", "4", "5"],
            Self::Level => &["High", "Medium", "Low", "N/A"],
            Self::Temperature => &["Hot", "Warm", "Mild", "Cool"],
            Self::YesNo => &["Yes", "No"],
            Self::Hair => &["Clean", "Medium", "Greasy"],
        }
    }
}

/// How a field is presented for input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    TextArea,
    /// Numeric text (counts, hours, litres).
    Number,
    /// `YYYY-MM-DD`.
    Date,
    /// `HH:MM`, 24-hour.
    Time,
    /// One of a fixed option set.
    Select(Choices),
}

impl InputKind {
    /// Short lowercase name used in listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
            Self::Select(_) => "select",
        }
    }

    /// The option set, for select inputs.
    #[must_use]
    pub const fn choices(self) -> Option<Choices> {
        match self {
            Self::Select(choices) => Some(choices),
            _ => None,
        }
    }
}

/// Form sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    /// Date, weekday and time of the entry.
    General,
    /// Breakouts, severity and lesion counts.
    AcneStatus,
    /// Meals, beverages and intake levels.
    Diet,
    /// Morning and evening routines, makeup.
    Skincare,
    /// Sleep, stress, exercise and environment.
    Lifestyle,
    /// Cycle, medications and conditions.
    Medical,
    /// Mood and well-being scores.
    Wellbeing,
    /// Free-form daily notes.
    Notes,
}

impl Section {
    /// All sections in display order.
    pub const ALL: &'static [Section] = &[
        Self::General,
        Self::AcneStatus,
        Self::Diet,
        Self::Skincare,
        Self::Lifestyle,
        Self::Medical,
        Self::Wellbeing,
        Self::Notes,
    ];

    /// Section heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::General => "General Information",
            Self::AcneStatus => "Acne Status",
            Self::Diet => "Diet & Hydration",
            Self::Skincare => "Skincare Routine",
            Self::Lifestyle => "Lifestyle & Environmental Factors",
            Self::Medical => "Hormonal & Medical (If Applicable)",
            Self::Wellbeing => "Emotional & General Well-being",
            Self::Notes => "Open Notes",
        }
    }

    /// Short name accepted on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::AcneStatus => "acne",
            Self::Diet => "diet",
            Self::Skincare => "skincare",
            Self::Lifestyle => "lifestyle",
            Self::Medical => "medical",
            Self::Wellbeing => "wellbeing",
            Self::Notes => "notes",
        }
    }

    /// Fields belonging to this section, in schema order.
    pub fn fields(self) -> impl Iterator<Item = Field> {
        Field::ALL.iter().copied().filter(move |f| f.section() == self)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|section| {
                section.slug().eq_ignore_ascii_case(wanted)
                    || section.title().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| Error::UnknownSection {
                name: s.to_string(),
            })
    }
}

const TEXT: InputKind = InputKind::Text;
const TEXTAREA: InputKind = InputKind::TextArea;
const NUMBER: InputKind = InputKind::Number;
const DATE: InputKind = InputKind::Date;
const TIME: InputKind = InputKind::Time;
const SEVERITY: InputKind = InputKind::Select(Choices::Severity);
const QUALITY: InputKind = InputKind::Select(Choices::Quality);
const LEVEL: InputKind = InputKind::Select(Choices::Level);
const TEMPERATURE: InputKind = InputKind::Select(Choices::Temperature);
const YES_NO: InputKind = InputKind::Select(Choices::YesNo);
const HAIR: InputKind = InputKind::Select(Choices::Hair);

macro_rules! canonical_schema {
    ($(
        $variant:ident => $key:literal, $label:literal, $section:ident, $kind:expr,
            placeholder: $placeholder:expr, when: $when:expr;
    )+) => {
        /// A field of the canonical schema.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl Field {
            /// Every field, in canonical order.
            pub const ALL: &'static [Field] = &[$(Field::$variant,)+];

            /// Number of fields in the schema.
            pub const COUNT: usize = Self::ALL.len();

            /// The camelCase key used in CSV headers and for edits by name.
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $(Field::$variant => $key,)+
                }
            }

            /// Human-readable form label.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Field::$variant => $label,)+
                }
            }

            /// The form section the field is rendered in.
            #[must_use]
            pub const fn section(self) -> Section {
                match self {
                    $(Field::$variant => Section::$section,)+
                }
            }

            /// How the field is entered.
            #[must_use]
            pub const fn kind(self) -> InputKind {
                match self {
                    $(Field::$variant => $kind,)+
                }
            }

            /// Example input shown in an empty field.
            #[must_use]
            pub const fn placeholder(self) -> Option<&'static str> {
                match self {
                    $(Field::$variant => $placeholder,)+
                }
            }

            /// The yes/no field that must read `Yes` for this one to be shown.
            #[must_use]
            pub const fn visible_when(self) -> Option<Field> {
                match self {
                    $(Field::$variant => $when,)+
                }
            }
        }

        impl FromStr for Field {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($key => Ok(Field::$variant),)+
                    _ => Err(Error::unknown_field(s)),
                }
            }
        }
    };
}

canonical_schema! {
    Date => "date", "Date", General, DATE,
        placeholder: None, when: None;
    DayOfWeek => "dayOfWeek", "Day of Week", General, TEXT,
        placeholder: None, when: None;
    TimeOfEntry => "timeOfEntry", "Time of Entry", General, TIME,
        placeholder: None, when: None;

    NewBreakoutsToday => "newBreakoutsToday", "New Breakouts Today?", AcneStatus, YES_NO,
        placeholder: None, when: None;
    LocationNewBreakouts => "locationNewBreakouts",
        "Location of New Breakouts (comma-separated)", AcneStatus, TEXT,
        placeholder: Some("e.g., Forehead, Chin, Left Cheek"), when: None;
    TypeNewBreakouts => "typeNewBreakouts",
        "Type of New Breakouts (comma-separated)", AcneStatus, TEXT,
        placeholder: Some("e.g., Papules, Whiteheads, Cysts"), when: None;
    CurrentAcneSeverity => "currentAcneSeverity", "Current Acne Severity (0-5)", AcneStatus, SEVERITY,
        placeholder: None, when: None;
    InflammationLevel => "inflammationLevel", "Inflammation Level (0-5)", AcneStatus, SEVERITY,
        placeholder: None, when: None;
    PainLevel => "painLevel", "Pain Level (0-5)", AcneStatus, SEVERITY,
        placeholder: None, when: None;
    NumWhiteheads => "numWhiteheads", "Number of Whiteheads", AcneStatus, NUMBER,
        placeholder: None, when: None;
    NumBlackheads => "numBlackheads", "Number of Blackheads", AcneStatus, NUMBER,
        placeholder: None, when: None;
    NumPapules => "numPapules", "Number of Papules", AcneStatus, NUMBER,
        placeholder: None, when: None;
    NumPustules => "numPustules", "Number of Pustules", AcneStatus, NUMBER,
        placeholder: None, when: None;
    NumCystsNodules => "numCystsNodules", "Number of Cysts/Nodules", AcneStatus, NUMBER,
        placeholder: None, when: None;
    AcneScarring => "acneScarring", "Acne Scarring/Hyperpigmentation (0-5)", AcneStatus, SEVERITY,
        placeholder: None, when: None;

    Meal1Time => "meal1Time", "Meal 1 - Time", Diet, TIME,
        placeholder: None, when: None;
    Meal1Foods => "meal1Foods", "Meal 1 - Foods Consumed (Detailed)", Diet, TEXTAREA,
        placeholder: Some("e.g., 2 scrambled eggs, 1 whole wheat toast, coffee w/ milk"), when: None;
    Meal2Time => "meal2Time", "Meal 2 - Time", Diet, TIME,
        placeholder: None, when: None;
    Meal2Foods => "meal2Foods", "Meal 2 - Foods Consumed (Detailed)", Diet, TEXTAREA,
        placeholder: None, when: None;
    Meal3Time => "meal3Time", "Meal 3 - Time", Diet, TIME,
        placeholder: None, when: None;
    Meal3Foods => "meal3Foods", "Meal 3 - Foods Consumed (Detailed)", Diet, TEXTAREA,
        placeholder: None, when: None;
    Snacks => "snacks", "Snacks - Time(s) & Foods Consumed (Detailed)", Diet, TEXTAREA,
        placeholder: Some("e.g., 11:00 AM - Small banana; 05:00 PM - Handful of almonds"), when: None;
    Beverages => "beverages", "Beverages Consumed (Detailed)", Diet, TEXTAREA,
        placeholder: Some("e.g., Water (2L), Coffee (2 cups w/ milk)"), when: None;
    DairyIntake => "dairyIntake", "Dairy Intake (Yes/No/Amount)", Diet, TEXT,
        placeholder: Some("e.g., Yes/Milk (200ml) or No"), when: None;
    SugarIntake => "sugarIntake", "Sugar Intake", Diet, LEVEL,
        placeholder: None, when: None;
    ProcessedFoodIntake => "processedFoodIntake", "Processed Food Intake", Diet, LEVEL,
        placeholder: None, when: None;
    Hydration => "hydration", "Hydration (Litres of Water)", Diet, NUMBER,
        placeholder: None, when: None;
    SuspectedFoodTriggers => "suspectedFoodTriggers", "Specific Food Triggers Suspected Today?", Diet, TEXT,
        placeholder: Some("e.g., Pizza, Chocolate"), when: None;

    SkincareAmCleanser => "skincareAmCleanser", "Morning Cleanser Used", Skincare, TEXT,
        placeholder: None, when: None;
    SkincareAmTreatments => "skincareAmTreatments", "Morning Treatment Product(s) Used", Skincare, TEXT,
        placeholder: Some("e.g., Benzoyl Peroxide 2.5%"), when: None;
    SkincareAmMoisturizer => "skincareAmMoisturizer", "Morning Moisturizer Used", Skincare, TEXT,
        placeholder: None, when: None;
    SkincareAmSpf => "skincareAmSpf", "Morning SPF Used", Skincare, TEXT,
        placeholder: Some("e.g., SPF 30"), when: None;
    SkincarePmCleanser => "skincarePmCleanser", "Evening Cleanser Used", Skincare, TEXT,
        placeholder: None, when: None;
    SkincarePmTreatments => "skincarePmTreatments", "Evening Treatment Product(s) Used", Skincare, TEXT,
        placeholder: None, when: None;
    SkincarePmMoisturizer => "skincarePmMoisturizer", "Evening Moisturizer Used", Skincare, TEXT,
        placeholder: None, when: None;
    NewSkincareProduct => "newSkincareProduct", "Any New Skincare Products Introduced?", Skincare, YES_NO,
        placeholder: None, when: None;
    NewSkincareProductNameDate => "newSkincareProductNameDate", "If Yes, Name & Date Introduced", Skincare, TEXT,
        placeholder: Some("e.g., Vitamin C Serum (2025-07-01)"), when: Some(Field::NewSkincareProduct);
    MakeupWorn => "makeupWorn", "Makeup Worn Today?", Skincare, YES_NO,
        placeholder: None, when: None;
    MakeupHours => "makeupHours", "Approx. Hours Makeup Worn", Skincare, NUMBER,
        placeholder: None, when: Some(Field::MakeupWorn);
    MakeupBrandType => "makeupBrandType", "Makeup Brand/Type", Skincare, TEXT,
        placeholder: Some("e.g., Foundation - Brand X"), when: Some(Field::MakeupWorn);

    SleepQuality => "sleepQuality", "Sleep Quality (1-5)", Lifestyle, QUALITY,
        placeholder: None, when: None;
    HoursOfSleep => "hoursOfSleep", "Hours of Sleep", Lifestyle, NUMBER,
        placeholder: None, when: None;
    StressLevel => "stressLevel", "Stress Level (1-5)", Lifestyle, QUALITY,
        placeholder: None, when: None;
    SourceOfStress => "sourceOfStress", "Source of Stress (if applicable)", Lifestyle, TEXT,
        placeholder: Some("e.g., Work deadline, Personal"), when: None;
    ExerciseToday => "exerciseToday", "Exercise Today?", Lifestyle, YES_NO,
        placeholder: None, when: None;
    ExerciseTypeDuration => "exerciseTypeDuration", "Exercise Type & Duration", Lifestyle, TEXT,
        placeholder: Some("e.g., Running, 45 mins"), when: Some(Field::ExerciseToday);
    ShowerAfterExercise => "showerAfterExercise", "Shower/Cleanse After Exercise?", Lifestyle, YES_NO,
        placeholder: None, when: Some(Field::ExerciseToday);
    SweatingLevel => "sweatingLevel", "Sweating Level", Lifestyle, LEVEL,
        placeholder: None, when: None;
    EnvironmentalHumidity => "environmentalHumidity", "Environmental Humidity", Lifestyle, LEVEL,
        placeholder: None, when: None;
    EnvironmentalTemperature => "environmentalTemperature", "Environmental Temperature", Lifestyle, TEMPERATURE,
        placeholder: None, when: None;
    SunExposure => "sunExposure", "Sun Exposure Today?", Lifestyle, YES_NO,
        placeholder: None, when: None;
    SunDurationSpf => "sunDurationSpf", "If Yes, Duration & SPF used", Lifestyle, TEXT,
        placeholder: Some("e.g., 30 mins / SPF 30"), when: Some(Field::SunExposure);
    TouchingFaceFreq => "touchingFaceFreq", "Touching Face Frequency", Lifestyle, LEVEL,
        placeholder: None, when: None;
    HairCleanliness => "hairCleanliness", "Hair Cleanliness", Lifestyle, HAIR,
        placeholder: None, when: None;
    PillowcaseChanged => "pillowcaseChanged", "Pillowcase Changed?", Lifestyle, YES_NO,
        placeholder: None, when: None;
    TowelsChanged => "towelsChanged", "Towels Changed?", Lifestyle, YES_NO,
        placeholder: None, when: None;
    WearingHatsHeadbands => "wearingHatsHeadbands", "Wearing Hats/Headbands?", Lifestyle, YES_NO,
        placeholder: None, when: None;
    PhoneScreenCleaned => "phoneScreenCleaned", "Phone Screen Cleaned?", Lifestyle, YES_NO,
        placeholder: None, when: None;

    DayOfMenstrualCycle => "dayOfMenstrualCycle", "Day of Menstrual Cycle (e.g., Day 1, Day 14)", Medical, TEXT,
        placeholder: Some("e.g., 1, 14, N/A"), when: None;
    PmsSymptoms => "pmsSymptoms", "PMS Symptoms? (comma-separated)", Medical, TEXT,
        placeholder: Some("e.g., Bloating, Cravings, N/A"), when: None;
    NewMedications => "newMedications", "Any New Medications Started?", Medical, YES_NO,
        placeholder: None, when: None;
    NewMedicationsNameDosage => "newMedicationsNameDosage", "If Yes, Name & Dosage", Medical, TEXT,
        placeholder: Some("e.g., Antibiotic X, 200mg"), when: Some(Field::NewMedications);
    ExistingMedicalConditions => "existingMedicalConditions",
        "Any Existing Medical Conditions/Illnesses Today?", Medical, YES_NO,
        placeholder: None, when: None;
    ExistingMedicalConditionsSpecify => "existingMedicalConditionsSpecify", "If Yes, specify", Medical, TEXT,
        placeholder: Some("e.g., Cold, Fever"), when: Some(Field::ExistingMedicalConditions);
    SupplementsTaken => "supplementsTaken", "Supplements Taken Today (Detailed)", Medical, TEXTAREA,
        placeholder: Some("e.g., Vitamin D, Probiotic, Omega-3"), when: None;

    OverallMood => "overallMood", "Overall Mood (1-5)", Wellbeing, QUALITY,
        placeholder: None, when: None;
    FeelingOfWellbeing => "feelingOfWellbeing", "Feeling of Well-being (1-5)", Wellbeing, QUALITY,
        placeholder: None, when: None;

    DailyNotes => "dailyNotes", "Daily Notes/Observations", Notes, TEXTAREA,
        placeholder: Some("Add any additional observations or unusual events here."), when: None;
}

impl Field {
    /// Position of the field in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether the field is one of the three timestamp fields reseeded from
    /// the clock.
    #[must_use]
    pub const fn is_timestamp(self) -> bool {
        matches!(self, Self::Date | Self::DayOfWeek | Self::TimeOfEntry)
    }

    /// Iterate the canonical keys in order.
    pub fn keys() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|field| field.key())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Serializable description of one field, for schema listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    /// Canonical key.
    pub key: &'static str,
    /// Form label.
    pub label: &'static str,
    /// Section heading.
    pub section: &'static str,
    /// Input kind name.
    pub kind: &'static str,
    /// Select options, empty for free-form inputs.
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [&'static str],
    /// Example input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    /// Controlling yes/no field, for follow-up fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shown_when_yes: Option<Field>,
}

fn no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

impl From<Field> for FieldInfo {
    fn from(field: Field) -> Self {
        let kind = field.kind();
        Self {
            key: field.key(),
            label: field.label(),
            section: field.section().title(),
            kind: kind.name(),
            options: kind.choices().map(Choices::values).unwrap_or_default(),
            placeholder: field.placeholder(),
            shown_when_yes: field.visible_when(),
        }
    }
}

/// Pretty-printed JSON description of the schema, or of one section.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn fields_json(section: Option<Section>) -> Result<String> {
    let fields: Vec<FieldInfo> = match section {
        Some(section) => section.fields().map(FieldInfo::from).collect(),
        None => Field::ALL.iter().copied().map(FieldInfo::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&fields)?)
}
