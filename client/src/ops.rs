//! Create/update/delete/read handles for one object type.
//!
//! A handle only selects the verb and path; the request itself goes through
//! the client's shared executor.

use reqwest::Method;
use tracing::debug;

use crate::client::{Client, Output, Params};
use crate::error::CmdbResult;
use crate::object::{Singleton, Table};

/// Operations on a keyed table, e.g. `client.table(&catalog::FIREWALL_ADDRESS)`.
#[derive(Debug, Clone)]
pub struct TableApi<'c> {
    client: &'c Client,
    table: &'static Table,
    vdom: Option<String>,
}

impl<'c> TableApi<'c> {
    pub(crate) fn new(client: &'c Client, table: &'static Table) -> Self {
        Self {
            client,
            table,
            vdom: None,
        }
    }

    /// Scope calls made through this handle to `vdom` instead of the client default.
    pub fn vdom(mut self, vdom: &str) -> Self {
        self.vdom = Some(vdom.to_string());
        self
    }

    /// POST a new member to the collection. The key, if any, travels in `params`.
    pub async fn create(&self, params: &Params) -> CmdbResult<Output> {
        self.client
            .create_update(
                Method::POST,
                &self.table.base_path(),
                params,
                self.vdom.as_deref(),
            )
            .await
    }

    /// PUT `params` onto the member identified by `mkey`.
    pub async fn update(&self, mkey: &str, params: &Params) -> CmdbResult<Output> {
        self.client
            .create_update(
                Method::PUT,
                &self.table.key_path(mkey)?,
                params,
                self.vdom.as_deref(),
            )
            .await
    }

    /// DELETE the member identified by `mkey`.
    ///
    /// Types without a remote unset endpoint return `Ok(())` without sending
    /// anything; the member is left untouched on the appliance.
    pub async fn delete(&self, mkey: &str) -> CmdbResult<()> {
        let path = self.table.key_path(mkey)?;
        if !self.table.supports_delete() {
            debug!(path = self.table.path(), mkey, "No unset API, skipping delete");
            return Ok(());
        }
        self.client.delete(&path, self.vdom.as_deref()).await
    }

    /// GET the member identified by `mkey`.
    pub async fn read(&self, mkey: &str) -> CmdbResult<Output> {
        self.client
            .read(&self.table.key_path(mkey)?, false, self.vdom.as_deref())
            .await
    }

    /// GET every member of the collection.
    pub async fn list(&self) -> CmdbResult<Vec<Output>> {
        self.client
            .read_all(&self.table.base_path(), self.vdom.as_deref())
            .await
    }
}

/// Operations on a singleton, e.g. `client.singleton(&catalog::SYSTEM_GLOBAL)`.
///
/// There is no create: the appliance always holds exactly one instance.
#[derive(Debug, Clone)]
pub struct SingletonApi<'c> {
    client: &'c Client,
    singleton: &'static Singleton,
    vdom: Option<String>,
}

impl<'c> SingletonApi<'c> {
    pub(crate) fn new(client: &'c Client, singleton: &'static Singleton) -> Self {
        Self {
            client,
            singleton,
            vdom: None,
        }
    }

    /// Scope calls made through this handle to `vdom` instead of the client default.
    pub fn vdom(mut self, vdom: &str) -> Self {
        self.vdom = Some(vdom.to_string());
        self
    }

    /// PUT `params` onto the singleton. No key segment is ever appended.
    pub async fn update(&self, params: &Params) -> CmdbResult<Output> {
        self.client
            .create_update(
                Method::PUT,
                &self.singleton.base_path(),
                params,
                self.vdom.as_deref(),
            )
            .await
    }

    /// Always a no-op: singletons cannot be unset.
    pub async fn delete(&self) -> CmdbResult<()> {
        debug!(
            path = self.singleton.path(),
            "No unset API for singleton, skipping delete"
        );
        Ok(())
    }

    /// GET the singleton; the bare `results` object is returned as is.
    pub async fn read(&self) -> CmdbResult<Output> {
        self.client
            .read(&self.singleton.base_path(), true, self.vdom.as_deref())
            .await
    }
}
