use std::sync::Arc;

use tracing::{error, info};

use super::domain::Application;
use super::fields::{Collection, CollectionEntry, FormError, ScalarField};
use super::store::{DocumentStore, StoreError};

/// Message surfaced to the person filling in the form after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    SaveFailed,
}

impl Notice {
    pub const fn message(self) -> &'static str {
        match self {
            Notice::Saved => "Data saved successfully!",
            Notice::SaveFailed => "Error saving data. Please try again.",
        }
    }

    pub const fn is_error(self) -> bool {
        matches!(self, Notice::SaveFailed)
    }
}

/// Owns the in-memory application while it is being edited.
///
/// Edits are synchronous and only touch memory; the store is consulted on
/// [`initialize`](Self::initialize) and [`submit`](Self::submit).
pub struct FormController<S> {
    store: Arc<S>,
    document: Application,
}

impl<S> FormController<S>
where
    S: DocumentStore + 'static,
{
    /// Start from a blank application; call [`initialize`](Self::initialize)
    /// to pull the saved one.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            document: Application::default(),
        }
    }

    pub fn document(&self) -> &Application {
        &self.document
    }

    pub fn field(&self, name: &str) -> Result<&str, FormError> {
        let field: ScalarField = name.parse()?;
        Ok(field.get(&self.document))
    }

    pub fn dependents_visible(&self) -> bool {
        self.document.dependents_visible()
    }

    /// Replace the document with the stored one.
    ///
    /// On failure the current document is kept and the error returned.
    pub async fn initialize(&mut self) -> Result<(), StoreError> {
        let mut loaded = self.store.load().await?;
        loaded.ensure_seeded();
        self.document = loaded;
        Ok(())
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field: ScalarField = name.parse()?;
        self.document.set_scalar(field, value.into());
        Ok(())
    }

    pub fn set_array_field(
        &mut self,
        collection: &str,
        index: usize,
        subfield: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let collection: Collection = collection.parse()?;
        self.document
            .set_cell(collection, index, subfield, value.into())
    }

    /// Append `template` to the named collection, returning its new length.
    pub fn append_entry(
        &mut self,
        collection: &str,
        template: impl Into<CollectionEntry>,
    ) -> Result<usize, FormError> {
        let collection: Collection = collection.parse()?;
        self.document.push_entry(collection, template.into())
    }

    pub fn append_blank(&mut self, collection: &str) -> Result<usize, FormError> {
        let collection: Collection = collection.parse()?;
        self.document
            .push_entry(collection, CollectionEntry::blank(collection))
    }

    /// Persist the whole document.
    pub async fn submit(&self) -> Notice {
        match self.store.save(&self.document).await {
            Ok(()) => {
                info!("application submitted");
                Notice::Saved
            }
            Err(err) => {
                error!(error = %err, "error saving data");
                Notice::SaveFailed
            }
        }
    }
}
