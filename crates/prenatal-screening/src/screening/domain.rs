use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Literal answer value that marks a "yes" response.
pub const AFFIRMATIVE_MARKER: &str = "Ya";

/// Questionnaire sections, in the order the form pages through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "klinis")]
    ClinicalSigns,
    #[serde(rename = "kesehatanDiri")]
    PersonalHealthHistory,
    #[serde(rename = "kesehatanKeluarga")]
    FamilyHealthHistory,
    #[serde(rename = "konsumsiMakanan")]
    DietaryHabits,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::ClinicalSigns,
        Category::PersonalHealthHistory,
        Category::FamilyHealthHistory,
        Category::DietaryHabits,
    ];

    /// Wire key used by submitted answer sets.
    pub fn key(&self) -> &'static str {
        match self {
            Category::ClinicalSigns => "klinis",
            Category::PersonalHealthHistory => "kesehatanDiri",
            Category::FamilyHealthHistory => "kesehatanKeluarga",
            Category::DietaryHabits => "konsumsiMakanan",
        }
    }

    /// Section heading shown by the form.
    pub fn title(&self) -> &'static str {
        match self {
            Category::ClinicalSigns => "Pertanyaan Klinis Kondisi Pasien",
            Category::PersonalHealthHistory => "Riwayat Kesehatan Diri",
            Category::FamilyHealthHistory => "Riwayat Kesehatan Keluarga",
            Category::DietaryHabits => "Pola Konsumsi Makanan",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Weight a triggered criterion contributes to the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskWeight {
    High,
    Medium,
}

/// Three-valued screening outcome, ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Recommendation shown alongside the result.
    pub fn advice(&self) -> RiskAdvice {
        match self {
            RiskLevel::High => RiskAdvice {
                headline: "Risiko Tinggi Preeklampsia",
                recommendation: "Segera konsultasikan ke dokter.",
            },
            RiskLevel::Medium => RiskAdvice {
                headline: "Risiko Sedang Preeklampsia",
                recommendation: "Perhatikan pola makan dan gaya hidup.",
            },
            RiskLevel::Low => RiskAdvice {
                headline: "Risiko Rendah Preeklampsia",
                recommendation: "Jaga pola hidup sehat, lakukan latihan fisik rutin.",
            },
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAdvice {
    pub headline: &'static str,
    pub recommendation: &'static str,
}

/// A single questionnaire answer as submitted by the form.
///
/// Anything that is neither a string nor a readable blood-pressure pair lands in
/// `Unrecognized`, so deserialization never fails on a per-answer basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    BloodPressure(BloodPressureReading),
    Unrecognized(Value),
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }

    pub fn blood_pressure(systolic: f64, diastolic: f64) -> Self {
        Answer::BloodPressure(BloodPressureReading {
            systolic: Some(systolic),
            diastolic: Some(diastolic),
        })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_blood_pressure(&self) -> Option<&BloodPressureReading> {
        match self {
            Answer::BloodPressure(reading) => Some(reading),
            _ => None,
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Answer::Text(_) => "text",
            Answer::BloodPressure(_) => "blood_pressure",
            Answer::Unrecognized(_) => "unrecognized",
        }
    }

    fn from_value(value: Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or(Answer::Unrecognized(value))
    }
}

/// Blood pressure in mmHg. The form submits both fields as strings and leaves a box
/// out entirely when it was not filled in.
///
/// At least one reading is always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBloodPressure")]
pub struct BloodPressureReading {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systolic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diastolic: Option<f64>,
}

impl BloodPressureReading {
    pub fn new(systolic: Option<f64>, diastolic: Option<f64>) -> Option<Self> {
        if systolic.is_none() && diastolic.is_none() {
            return None;
        }
        Some(Self {
            systolic,
            diastolic,
        })
    }
}

#[derive(Deserialize)]
struct RawBloodPressure {
    #[serde(default, deserialize_with = "deserialize_optional_measurement")]
    systolic: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_measurement")]
    diastolic: Option<f64>,
}

impl TryFrom<RawBloodPressure> for BloodPressureReading {
    type Error = &'static str;

    fn try_from(raw: RawBloodPressure) -> Result<Self, Self::Error> {
        BloodPressureReading::new(raw.systolic, raw.diastolic)
            .ok_or("blood pressure reading has neither systolic nor diastolic value")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMeasurement {
    Number(f64),
    Text(String),
}

fn parse_measurement<E: de::Error>(raw: RawMeasurement) -> Result<Option<f64>, E> {
    let value = match raw {
        RawMeasurement::Number(value) => value,
        RawMeasurement::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map_err(|err| E::custom(format!("'{text}' is not a number ({err})")))?
        }
    };

    if value.is_finite() {
        Ok(Some(value))
    } else {
        Err(E::custom("measurement must be finite"))
    }
}

/// Accepts a finite number either as a JSON number or as a numeric string.
pub(crate) fn deserialize_measurement<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_measurement::<D::Error>(RawMeasurement::deserialize(deserializer)?)?
        .ok_or_else(|| <D::Error as de::Error>::custom("measurement is blank"))
}

/// Like [`deserialize_measurement`], but `null`, blank and unreadable strings read as absent.
fn deserialize_optional_measurement<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawMeasurement>::deserialize(deserializer)?
        .and_then(|raw| parse_measurement::<D::Error>(raw).ok().flatten()))
}

/// Answers keyed by category key, then by question key.
///
/// Keys are kept verbatim; categories the rule table does not know about are retained
/// and simply never consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, BTreeMap<String, Answer>>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        category: Category,
        question: impl Into<String>,
        answer: Answer,
    ) -> Option<Answer> {
        self.0
            .entry(category.key().to_string())
            .or_default()
            .insert(question.into(), answer)
    }

    /// Builder-style variant of [`AnswerSet::insert`].
    pub fn with(mut self, category: Category, question: impl Into<String>, answer: Answer) -> Self {
        self.insert(category, question, answer);
        self
    }

    pub fn answer(&self, category: Category, question: &str) -> Option<&Answer> {
        self.0
            .get(category.key())
            .and_then(|answers| answers.get(question))
    }

    pub fn category(&self, category: Category) -> Option<&BTreeMap<String, Answer>> {
        self.0.get(category.key())
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }

    /// Total number of answered questions across every category key.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    fn from_raw(raw: BTreeMap<String, Value>) -> Self {
        let mut categories = BTreeMap::new();
        for (category, value) in raw {
            let answers = match value {
                Value::Object(entries) => entries
                    .into_iter()
                    .map(|(question, answer)| (question, Answer::from_value(answer)))
                    .collect(),
                Value::Null => BTreeMap::new(),
                other => {
                    tracing::warn!(
                        category = %category,
                        value = %other,
                        "ignoring answer category that is not an object"
                    );
                    continue;
                }
            };
            categories.insert(category, answers);
        }
        Self(categories)
    }
}

impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_raw(raw))
    }
}

/// Contact details for a family member of the person being screened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// Payload produced by the questionnaire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpjs_number: Option<String>,
    #[serde(deserialize_with = "deserialize_measurement")]
    pub weight: f64,
    #[serde(deserialize_with = "deserialize_measurement")]
    pub height: f64,
    pub education: String,
    #[serde(default)]
    pub family_contact: FamilyContact,
    pub health_questions: AnswerSet,
}
