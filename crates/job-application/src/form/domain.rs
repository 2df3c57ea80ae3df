use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// The single persisted record behind the job application form.
///
/// Every scalar is kept as the text the form produced. Choice fields are
/// interpreted through [`MaritalStatus`], [`DrivingLicense`] and
/// [`EmploymentType`] but never rejected, so whatever a client submits is
/// stored as-is. The document must be a JSON object; scalars posted as
/// numbers or booleans are kept as their text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase", default)]
pub struct Application {
    #[serde(deserialize_with = "deserialize_text")]
    pub date_of_application: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub position: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub employment_type: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub full_name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub nationality: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub address: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub phone: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub dob: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub driving_license: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub years_of_work: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub marital_status: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub dependents: String,
    #[serde(deserialize_with = "deserialize_rows")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "deserialize_rows")]
    pub employment_history: Vec<EmploymentEntry>,
    #[serde(deserialize_with = "deserialize_rows")]
    pub skills_and_training: Vec<SkillEntry>,
}

impl Default for Application {
    fn default() -> Self {
        Self {
            date_of_application: String::new(),
            position: String::new(),
            employment_type: String::new(),
            full_name: String::new(),
            nationality: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            dob: String::new(),
            driving_license: DrivingLicense::No.label().to_string(),
            years_of_work: String::new(),
            marital_status: MaritalStatus::Single.label().to_string(),
            dependents: String::new(),
            education: vec![EducationEntry::default()],
            employment_history: vec![EmploymentEntry::default()],
            skills_and_training: vec![SkillEntry::default()],
        }
    }
}

impl Application {
    /// Parsed marital status, `None` when the stored text is not a known option.
    pub fn marital_status(&self) -> Option<MaritalStatus> {
        MaritalStatus::parse(&self.marital_status)
    }

    pub fn driving_license(&self) -> Option<DrivingLicense> {
        DrivingLicense::parse(&self.driving_license)
    }

    pub fn employment_type(&self) -> Option<EmploymentType> {
        EmploymentType::parse(&self.employment_type)
    }

    /// The dependents count is only shown while the applicant is married.
    /// A stale value survives a switch back to single.
    pub fn dependents_visible(&self) -> bool {
        self.marital_status() == Some(MaritalStatus::Married)
    }

    /// Reseed any empty sequence with a single blank entry.
    pub fn ensure_seeded(&mut self) {
        if self.education.is_empty() {
            self.education.push(EducationEntry::default());
        }
        if self.employment_history.is_empty() {
            self.employment_history.push(EmploymentEntry::default());
        }
        if self.skills_and_training.is_empty() {
            self.skills_and_training.push(SkillEntry::default());
        }
    }
}

/// One row of the education table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase", default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "deserialize_text")]
    pub degree: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub university: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub year_of_graduate: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub grade: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub city: String,
}

/// One row of the employment history table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase", default)]
pub struct EmploymentEntry {
    #[serde(deserialize_with = "deserialize_text")]
    pub company: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub position: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub year: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub reason_for_leaving: String,
}

/// One row of the skills and training table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase", default)]
pub struct SkillEntry {
    #[serde(deserialize_with = "deserialize_text")]
    pub skill: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub level: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub year: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub institute: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaritalStatus {
    Single,
    Married,
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 2] = [MaritalStatus::Single, MaritalStatus::Married];

    pub const fn label(self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrivingLicense {
    No,
    Yes,
}

impl DrivingLicense {
    pub const ALL: [DrivingLicense; 2] = [DrivingLicense::No, DrivingLicense::Yes];

    pub const fn label(self) -> &'static str {
        match self {
            DrivingLicense::No => "No",
            DrivingLicense::Yes => "Yes",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|license| license.label() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 3] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-Time",
            EmploymentType::PartTime => "Part-Time",
            EmploymentType::Contract => "Contract",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == raw)
    }
}

macro_rules! object_document {
    ($($name:ident),+) => {$(
        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                $name::serialize(self, serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let object = Map::<String, Value>::deserialize(deserializer)?;
                $name::deserialize(Value::Object(object)).map_err(serde::de::Error::custom)
            }
        }
    )+};
}

// Serde's derived struct visitor also accepts sequences; only objects are documents.
object_document!(Application, EducationEntry, EmploymentEntry, SkillEntry);

/// Inputs may post numbers or booleans instead of text; keep the text form.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string, number or boolean, found {other}"
        ))),
    }
}

/// A `null` table is read as an empty one.
fn deserialize_rows<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
