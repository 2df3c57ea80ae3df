use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::form::domain::{Application, EducationEntry, EmploymentEntry, SkillEntry};
use crate::form::store::{DocumentStore, StoreError};
use crate::form::FormController;

/// Store keeping the document in memory, counting saves.
#[derive(Default)]
pub(super) struct MemoryStore {
    document: Mutex<Option<Application>>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub(super) fn with_document(document: Application) -> Self {
        Self {
            document: Mutex::new(Some(document)),
            saves: Mutex::new(0),
        }
    }

    pub(super) fn stored(&self) -> Option<Application> {
        self.document.lock().expect("store mutex poisoned").clone()
    }

    pub(super) fn saves(&self) -> usize {
        *self.saves.lock().expect("store mutex poisoned")
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> Result<Application, StoreError> {
        Ok(self
            .document
            .lock()
            .expect("store mutex poisoned")
            .clone()
            .unwrap_or_default())
    }

    async fn save(&self, document: &Application) -> Result<(), StoreError> {
        *self.document.lock().expect("store mutex poisoned") = Some(document.clone());
        *self.saves.lock().expect("store mutex poisoned") += 1;
        Ok(())
    }
}

pub(super) struct UnavailableStore;

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn load(&self) -> Result<Application, StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    async fn save(&self, _document: &Application) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }
}

pub(super) fn filled_application() -> Application {
    Application {
        date_of_application: "2025-10-01".to_string(),
        position: "Site Engineer".to_string(),
        employment_type: "Full-Time".to_string(),
        full_name: "Jane Doe".to_string(),
        nationality: "Kenyan".to_string(),
        address: "12 Harbour Road\nMombasa".to_string(),
        phone: "+254 700 000 000".to_string(),
        email: "jane.doe@example.com".to_string(),
        dob: "1990-04-17".to_string(),
        driving_license: "Yes".to_string(),
        years_of_work: "8".to_string(),
        marital_status: "Married".to_string(),
        dependents: "2".to_string(),
        education: vec![
            EducationEntry {
                degree: "BSc Civil Engineering".to_string(),
                university: "University of Nairobi".to_string(),
                year_of_graduate: "2012".to_string(),
                grade: "Upper Second".to_string(),
                city: "Nairobi".to_string(),
            },
            EducationEntry {
                degree: "MSc Structural Engineering".to_string(),
                university: "University of Leeds".to_string(),
                year_of_graduate: "2015".to_string(),
                grade: "Merit".to_string(),
                city: "Leeds".to_string(),
            },
        ],
        employment_history: vec![EmploymentEntry {
            company: "Coastal Builders".to_string(),
            position: "Junior Engineer".to_string(),
            year: "2016".to_string(),
            reason_for_leaving: "Relocation".to_string(),
        }],
        skills_and_training: vec![SkillEntry {
            skill: "AutoCAD".to_string(),
            level: "Advanced".to_string(),
            year: "2014".to_string(),
            institute: "Autodesk Training Centre".to_string(),
        }],
    }
}

pub(super) fn controller_with(store: MemoryStore) -> (FormController<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(store);
    (FormController::new(store.clone()), store)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
