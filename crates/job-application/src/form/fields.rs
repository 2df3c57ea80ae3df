//! Name-based bindings between form inputs and the [`Application`] document.
//!
//! Inputs address the document the same way the JSON does: scalar fields by
//! their camelCase key, table cells by collection key, row index and subfield
//! key. Labels and input hints are exposed so a renderer can lay out the form
//! from this module alone.

use std::str::FromStr;

use super::domain::{
    Application, DrivingLicense, EducationEntry, EmploymentEntry, EmploymentType, MaritalStatus,
    SkillEntry,
};

/// Input widget hint for a field. Hints are advisory; nothing is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Multiline,
    Date,
    Number,
    Email,
    Choice(&'static [&'static str]),
}

const EMPLOYMENT_TYPES: [&str; 3] = [
    EmploymentType::FullTime.label(),
    EmploymentType::PartTime.label(),
    EmploymentType::Contract.label(),
];
const LICENSE_OPTIONS: [&str; 2] = [DrivingLicense::No.label(), DrivingLicense::Yes.label()];
const MARITAL_OPTIONS: [&str; 2] = [MaritalStatus::Single.label(), MaritalStatus::Married.label()];

/// Scalar fields of the application, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    DateOfApplication,
    Position,
    EmploymentType,
    FullName,
    Nationality,
    Address,
    Phone,
    Email,
    Dob,
    DrivingLicense,
    YearsOfWork,
    MaritalStatus,
    Dependents,
}

impl ScalarField {
    pub const ALL: [ScalarField; 13] = [
        ScalarField::DateOfApplication,
        ScalarField::Position,
        ScalarField::EmploymentType,
        ScalarField::FullName,
        ScalarField::Nationality,
        ScalarField::Address,
        ScalarField::Phone,
        ScalarField::Email,
        ScalarField::Dob,
        ScalarField::DrivingLicense,
        ScalarField::YearsOfWork,
        ScalarField::MaritalStatus,
        ScalarField::Dependents,
    ];

    /// JSON key of the field.
    pub const fn key(self) -> &'static str {
        match self {
            ScalarField::DateOfApplication => "dateOfApplication",
            ScalarField::Position => "position",
            ScalarField::EmploymentType => "employmentType",
            ScalarField::FullName => "fullName",
            ScalarField::Nationality => "nationality",
            ScalarField::Address => "address",
            ScalarField::Phone => "phone",
            ScalarField::Email => "email",
            ScalarField::Dob => "dob",
            ScalarField::DrivingLicense => "drivingLicense",
            ScalarField::YearsOfWork => "yearsOfWork",
            ScalarField::MaritalStatus => "maritalStatus",
            ScalarField::Dependents => "dependents",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScalarField::DateOfApplication => "Date of Application",
            ScalarField::Position => "Position",
            ScalarField::EmploymentType => "Employment Type",
            ScalarField::FullName => "Full Name",
            ScalarField::Nationality => "Nationality",
            ScalarField::Address => "Address",
            ScalarField::Phone => "Phone",
            ScalarField::Email => "Email",
            ScalarField::Dob => "Date of Birth",
            ScalarField::DrivingLicense => "Driving License",
            ScalarField::YearsOfWork => "Years of work",
            ScalarField::MaritalStatus => "Marital Status",
            ScalarField::Dependents => "Number of dependents",
        }
    }

    pub const fn input_kind(self) -> InputKind {
        match self {
            ScalarField::DateOfApplication | ScalarField::Dob => InputKind::Date,
            ScalarField::Address => InputKind::Multiline,
            ScalarField::Email => InputKind::Email,
            ScalarField::YearsOfWork | ScalarField::Dependents => InputKind::Number,
            ScalarField::EmploymentType => InputKind::Choice(&EMPLOYMENT_TYPES),
            ScalarField::DrivingLicense => InputKind::Choice(&LICENSE_OPTIONS),
            ScalarField::MaritalStatus => InputKind::Choice(&MARITAL_OPTIONS),
            ScalarField::Position
            | ScalarField::FullName
            | ScalarField::Nationality
            | ScalarField::Phone => InputKind::Text,
        }
    }

    pub fn get(self, application: &Application) -> &str {
        match self {
            ScalarField::DateOfApplication => application.date_of_application.as_str(),
            ScalarField::Position => application.position.as_str(),
            ScalarField::EmploymentType => application.employment_type.as_str(),
            ScalarField::FullName => application.full_name.as_str(),
            ScalarField::Nationality => application.nationality.as_str(),
            ScalarField::Address => application.address.as_str(),
            ScalarField::Phone => application.phone.as_str(),
            ScalarField::Email => application.email.as_str(),
            ScalarField::Dob => application.dob.as_str(),
            ScalarField::DrivingLicense => application.driving_license.as_str(),
            ScalarField::YearsOfWork => application.years_of_work.as_str(),
            ScalarField::MaritalStatus => application.marital_status.as_str(),
            ScalarField::Dependents => application.dependents.as_str(),
        }
    }

    pub fn get_mut(self, application: &mut Application) -> &mut String {
        match self {
            ScalarField::DateOfApplication => &mut application.date_of_application,
            ScalarField::Position => &mut application.position,
            ScalarField::EmploymentType => &mut application.employment_type,
            ScalarField::FullName => &mut application.full_name,
            ScalarField::Nationality => &mut application.nationality,
            ScalarField::Address => &mut application.address,
            ScalarField::Phone => &mut application.phone,
            ScalarField::Email => &mut application.email,
            ScalarField::Dob => &mut application.dob,
            ScalarField::DrivingLicense => &mut application.driving_license,
            ScalarField::YearsOfWork => &mut application.years_of_work,
            ScalarField::MaritalStatus => &mut application.marital_status,
            ScalarField::Dependents => &mut application.dependents,
        }
    }
}

impl FromStr for ScalarField {
    type Err = FormError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }
}

/// The repeating tables of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Education,
    EmploymentHistory,
    SkillsAndTraining,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Education,
        Collection::EmploymentHistory,
        Collection::SkillsAndTraining,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Collection::Education => "education",
            Collection::EmploymentHistory => "employmentHistory",
            Collection::SkillsAndTraining => "skillsAndTraining",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Collection::Education => "Education",
            Collection::EmploymentHistory => "Employment History",
            Collection::SkillsAndTraining => "Skills and Training",
        }
    }

    pub const fn subfields(self) -> &'static [&'static str] {
        match self {
            Collection::Education => EducationEntry::SUBFIELDS,
            Collection::EmploymentHistory => EmploymentEntry::SUBFIELDS,
            Collection::SkillsAndTraining => SkillEntry::SUBFIELDS,
        }
    }

    pub fn len(self, application: &Application) -> usize {
        match self {
            Collection::Education => application.education.len(),
            Collection::EmploymentHistory => application.employment_history.len(),
            Collection::SkillsAndTraining => application.skills_and_training.len(),
        }
    }
}

impl FromStr for Collection {
    type Err = FormError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.key() == key)
            .ok_or_else(|| FormError::UnknownCollection(key.to_string()))
    }
}

/// A row type that can be edited cell by cell.
pub trait FormEntry {
    const SUBFIELDS: &'static [&'static str];

    fn subfield(&self, key: &str) -> Option<&str>;

    fn subfield_mut(&mut self, key: &str) -> Option<&mut String>;
}

impl FormEntry for EducationEntry {
    const SUBFIELDS: &'static [&'static str] =
        &["degree", "university", "yearOfGraduate", "grade", "city"];

    fn subfield(&self, key: &str) -> Option<&str> {
        match key {
            "degree" => Some(self.degree.as_str()),
            "university" => Some(self.university.as_str()),
            "yearOfGraduate" => Some(self.year_of_graduate.as_str()),
            "grade" => Some(self.grade.as_str()),
            "city" => Some(self.city.as_str()),
            _ => None,
        }
    }

    fn subfield_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "degree" => Some(&mut self.degree),
            "university" => Some(&mut self.university),
            "yearOfGraduate" => Some(&mut self.year_of_graduate),
            "grade" => Some(&mut self.grade),
            "city" => Some(&mut self.city),
            _ => None,
        }
    }
}

impl FormEntry for EmploymentEntry {
    const SUBFIELDS: &'static [&'static str] = &["company", "position", "year", "reasonForLeaving"];

    fn subfield(&self, key: &str) -> Option<&str> {
        match key {
            "company" => Some(self.company.as_str()),
            "position" => Some(self.position.as_str()),
            "year" => Some(self.year.as_str()),
            "reasonForLeaving" => Some(self.reason_for_leaving.as_str()),
            _ => None,
        }
    }

    fn subfield_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "company" => Some(&mut self.company),
            "position" => Some(&mut self.position),
            "year" => Some(&mut self.year),
            "reasonForLeaving" => Some(&mut self.reason_for_leaving),
            _ => None,
        }
    }
}

impl FormEntry for SkillEntry {
    const SUBFIELDS: &'static [&'static str] = &["skill", "level", "year", "institute"];

    fn subfield(&self, key: &str) -> Option<&str> {
        match key {
            "skill" => Some(self.skill.as_str()),
            "level" => Some(self.level.as_str()),
            "year" => Some(self.year.as_str()),
            "institute" => Some(self.institute.as_str()),
            _ => None,
        }
    }

    fn subfield_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "skill" => Some(&mut self.skill),
            "level" => Some(&mut self.level),
            "year" => Some(&mut self.year),
            "institute" => Some(&mut self.institute),
            _ => None,
        }
    }
}

/// A row destined for one of the collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionEntry {
    Education(EducationEntry),
    Employment(EmploymentEntry),
    Skill(SkillEntry),
}

impl CollectionEntry {
    /// Blank row for the given collection, as added by the "Add ..." buttons.
    pub fn blank(collection: Collection) -> Self {
        match collection {
            Collection::Education => Self::Education(EducationEntry::default()),
            Collection::EmploymentHistory => Self::Employment(EmploymentEntry::default()),
            Collection::SkillsAndTraining => Self::Skill(SkillEntry::default()),
        }
    }

    pub const fn collection(&self) -> Collection {
        match self {
            Self::Education(_) => Collection::Education,
            Self::Employment(_) => Collection::EmploymentHistory,
            Self::Skill(_) => Collection::SkillsAndTraining,
        }
    }
}

impl From<EducationEntry> for CollectionEntry {
    fn from(value: EducationEntry) -> Self {
        Self::Education(value)
    }
}

impl From<EmploymentEntry> for CollectionEntry {
    fn from(value: EmploymentEntry) -> Self {
        Self::Employment(value)
    }
}

impl From<SkillEntry> for CollectionEntry {
    fn from(value: SkillEntry) -> Self {
        Self::Skill(value)
    }
}

/// Rejected form edit. The document is never touched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("unknown collection `{0}`")]
    UnknownCollection(String),
    #[error("collection `{collection}` has no subfield `{subfield}`")]
    UnknownSubfield {
        collection: &'static str,
        subfield: String,
    },
    #[error("row {index} is out of bounds for `{collection}` ({len} rows)")]
    IndexOutOfBounds {
        collection: &'static str,
        index: usize,
        len: usize,
    },
    #[error("cannot append a `{found}` row to `{expected}`")]
    EntryMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

fn set_cell<E: FormEntry>(
    rows: &mut [E],
    collection: Collection,
    index: usize,
    subfield: &str,
    value: String,
) -> Result<(), FormError> {
    if !E::SUBFIELDS.contains(&subfield) {
        return Err(FormError::UnknownSubfield {
            collection: collection.key(),
            subfield: subfield.to_string(),
        });
    }
    let len = rows.len();
    let row = rows.get_mut(index).ok_or(FormError::IndexOutOfBounds {
        collection: collection.key(),
        index,
        len,
    })?;
    if let Some(cell) = row.subfield_mut(subfield) {
        *cell = value;
    }
    Ok(())
}

fn get_cell<'a, E: FormEntry>(rows: &'a [E], index: usize, subfield: &str) -> Option<&'a str> {
    rows.get(index).and_then(|row| row.subfield(subfield))
}

impl Application {
    pub fn set_scalar(&mut self, field: ScalarField, value: String) {
        *field.get_mut(self) = value;
    }

    /// Replace one cell of one row.
    pub fn set_cell(
        &mut self,
        collection: Collection,
        index: usize,
        subfield: &str,
        value: String,
    ) -> Result<(), FormError> {
        match collection {
            Collection::Education => {
                set_cell(&mut self.education, collection, index, subfield, value)
            }
            Collection::EmploymentHistory => set_cell(
                &mut self.employment_history,
                collection,
                index,
                subfield,
                value,
            ),
            Collection::SkillsAndTraining => set_cell(
                &mut self.skills_and_training,
                collection,
                index,
                subfield,
                value,
            ),
        }
    }

    pub fn cell(&self, collection: Collection, index: usize, subfield: &str) -> Option<&str> {
        match collection {
            Collection::Education => get_cell(&self.education, index, subfield),
            Collection::EmploymentHistory => get_cell(&self.employment_history, index, subfield),
            Collection::SkillsAndTraining => get_cell(&self.skills_and_training, index, subfield),
        }
    }

    /// Append a row to `collection`, returning the new row count.
    pub fn push_entry(
        &mut self,
        collection: Collection,
        entry: CollectionEntry,
    ) -> Result<usize, FormError> {
        match (collection, entry) {
            (Collection::Education, CollectionEntry::Education(row)) => {
                self.education.push(row);
            }
            (Collection::EmploymentHistory, CollectionEntry::Employment(row)) => {
                self.employment_history.push(row);
            }
            (Collection::SkillsAndTraining, CollectionEntry::Skill(row)) => {
                self.skills_and_training.push(row);
            }
            (expected, other) => {
                return Err(FormError::EntryMismatch {
                    expected: expected.key(),
                    found: other.collection().key(),
                });
            }
        }
        Ok(collection.len(self))
    }
}
