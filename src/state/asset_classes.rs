//! Asset-class list state backed by the REST API.
//!
//! DESIGN
//! ======
//! Each operation has its own [`Endpoint`] so list, create, update and delete
//! expose independent loading flags. The collection only changes after the
//! backend confirms a call; failed calls leave it as it was.

#[cfg(test)]
#[path = "asset_classes_test.rs"]
mod asset_classes_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::error::ClientError;
use crate::net::api::AssetClassApi;
use crate::net::types::AssetClass;
use crate::state::auth::AuthController;
use crate::state::collection::{Collection, Identified};
use crate::state::endpoint::Endpoint;
use crate::state::toast::Toasts;

impl Identified for AssetClass {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetClassOp {
    Load,
    Create,
    Update,
    Delete,
}

#[derive(Clone)]
pub struct AssetClasses {
    items: RwSignal<Collection<AssetClass>>,
    api: Arc<dyn AssetClassApi>,
    load: Endpoint,
    create: Endpoint,
    update: Endpoint,
    delete: Endpoint,
}

impl AssetClasses {
    #[must_use]
    pub fn new(api: Arc<dyn AssetClassApi>, toasts: Toasts, auth: AuthController) -> Self {
        let endpoint = || Endpoint::new(toasts.clone(), auth.clone());
        Self {
            items: RwSignal::new(Collection::default()),
            api,
            load: endpoint(),
            create: endpoint(),
            update: endpoint(),
            delete: endpoint(),
        }
    }

    #[must_use]
    pub fn items(&self) -> RwSignal<Collection<AssetClass>> {
        self.items
    }

    #[must_use]
    pub fn loading(&self, op: AssetClassOp) -> RwSignal<bool> {
        match op {
            AssetClassOp::Load => self.load.loading(),
            AssetClassOp::Create => self.create.loading(),
            AssetClassOp::Update => self.update.loading(),
            AssetClassOp::Delete => self.delete.loading(),
        }
    }

    /// Replace the local list with the backend's.
    ///
    /// # Errors
    ///
    /// Propagates the [`Endpoint`] failure after it has been reported.
    pub async fn load(&self) -> Result<(), ClientError> {
        let list = self.load.call(self.api.list_asset_classes()).await?;
        log::debug!("loaded {} asset classes", list.classes.len());
        self.items.update(|items| items.replace_all(list.classes));
        Ok(())
    }

    /// Create `class` and append the record the backend returns.
    pub async fn create(&self, class: AssetClass) -> Result<AssetClass, ClientError> {
        let created = self.create.call(self.api.create_asset_class(&class)).await?;
        self.items.update(|items| items.append(created.clone()));
        Ok(created)
    }

    /// Update `class` and swap in the returned record if it is listed locally.
    pub async fn update(&self, class: AssetClass) -> Result<(), ClientError> {
        let updated = self.update.call(self.api.update_asset_class(&class)).await?;
        self.items.update(|items| {
            if !items.replace(updated) {
                log::debug!("updated asset class {} is not in the local list", class.id);
            }
        });
        Ok(())
    }

    /// Delete by id and drop it from the local list.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.delete.call(self.api.delete_asset_class(id)).await?;
        self.items.update(|items| {
            items.remove(id);
        });
        Ok(())
    }
}
