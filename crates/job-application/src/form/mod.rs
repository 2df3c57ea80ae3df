//! The job application form: document model, field bindings, persistence,
//! the editing controller, and the HTTP routes that save and reload it.

pub mod controller;
pub mod domain;
pub mod fields;
pub mod router;
pub mod store;

#[cfg(test)]
mod tests;

pub use controller::{FormController, Notice};
pub use domain::{
    Application, DrivingLicense, EducationEntry, EmploymentEntry, EmploymentType, MaritalStatus,
    SkillEntry,
};
pub use fields::{Collection, CollectionEntry, FormEntry, FormError, InputKind, ScalarField};
pub use router::form_router;
pub use store::{DocumentStore, JsonFileStore, StoreError};
