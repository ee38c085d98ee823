//! Client for an appliance's CMDB configuration REST API.
//!
//! Every configuration object type lives under `/api/v2/cmdb/<path>` and is
//! either a keyed table or a singleton. The [`catalog`] module describes all
//! of them; [`Client::table`] and [`Client::singleton`] turn a descriptor into
//! create/update/delete/read calls. Bodies are untyped JSON maps because the
//! object schemas belong to the appliance firmware, not to this crate.
//!
//! ```rust,no_run
//! use cmdb_client::{catalog, Client, ClientConfig, Params};
//!
//! # async fn run() -> Result<(), cmdb_client::CmdbError> {
//! let client = Client::new(&ClientConfig::new("https://192.168.1.99").with_token("secret"))?;
//!
//! let mut params = Params::new();
//! params.insert("name".into(), "web01".into());
//! params.insert("subnet".into(), "10.0.0.10 255.255.255.255".into());
//! client.table(&catalog::FIREWALL_ADDRESS).create(&params).await?;
//!
//! let global = client.singleton(&catalog::SYSTEM_GLOBAL).read().await?;
//! println!("{}", global["hostname"]);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod escape;
pub mod object;
pub mod ops;

pub use client::{Client, Output, Params};
pub use config::ClientConfig;
pub use error::{describe_error_code, CmdbError, CmdbResult};
pub use escape::{checked_mkey, escape_mkey};
pub use object::{ObjectType, Singleton, Table, API_ROOT};
pub use ops::{SingletonApi, TableApi};
