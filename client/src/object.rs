//! Object type descriptors.
//!
//! Every configuration object type the appliance exposes is described by one
//! of two descriptors. A [`Table`] is a keyed collection whose members are
//! addressed by an `mkey`; a [`Singleton`] has exactly one instance and is
//! never addressed by key.

use std::fmt;

use crate::error::CmdbResult;
use crate::escape::checked_mkey;

/// Root of the configuration API on the appliance.
pub const API_ROOT: &str = "/api/v2/cmdb";

/// A keyed configuration collection, e.g. `firewall/address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Table {
    path: &'static str,
    unset: bool,
}

impl Table {
    pub const fn new(path: &'static str) -> Self {
        Self { path, unset: true }
    }

    /// Mark the type as having no remote delete endpoint.
    pub const fn without_unset(self) -> Self {
        Self {
            path: self.path,
            unset: false,
        }
    }

    /// CMDB path relative to [`API_ROOT`], e.g. `vpn.ipsec/phase1-interface`.
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Whether `DELETE` is wired to an endpoint for this type.
    pub const fn supports_delete(&self) -> bool {
        self.unset
    }

    /// Collection URL path, without any key segment.
    pub fn base_path(&self) -> String {
        format!("{API_ROOT}/{}", self.path)
    }

    /// URL path of the member identified by `mkey`.
    ///
    /// Fails for keys that would not stay a single path segment.
    pub fn key_path(&self, mkey: &str) -> CmdbResult<String> {
        Ok(format!("{API_ROOT}/{}/{}", self.path, checked_mkey(mkey)?))
    }
}

/// A configuration object with exactly one instance, e.g. `system/global`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Singleton {
    path: &'static str,
}

impl Singleton {
    pub const fn new(path: &'static str) -> Self {
        Self { path }
    }

    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// URL path of the object. Singletons never carry a key segment.
    pub fn base_path(&self) -> String {
        format!("{API_ROOT}/{}", self.path)
    }
}

/// Either kind of descriptor, as returned by [`crate::catalog::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Table(&'static Table),
    Singleton(&'static Singleton),
}

impl ObjectType {
    pub fn path(&self) -> &'static str {
        match self {
            ObjectType::Table(t) => t.path(),
            ObjectType::Singleton(s) => s.path(),
        }
    }

    /// Dotted name, e.g. `system.replacemsg.mail` for `system.replacemsg/mail`.
    pub fn dotted_name(&self) -> String {
        dotted(self.path())
    }

    pub fn is_singleton(&self) -> bool {
        matches!(self, ObjectType::Singleton(_))
    }

    pub fn supports_delete(&self) -> bool {
        match self {
            ObjectType::Table(t) => t.supports_delete(),
            ObjectType::Singleton(_) => false,
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

pub(crate) fn dotted(path: &str) -> String {
    path.replace('/', ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    static ADDRESS: Table = Table::new("firewall/address");
    static MAIL: Table = Table::new("system.replacemsg/mail").without_unset();
    static GLOBAL: Singleton = Singleton::new("system/global");

    #[test]
    fn test_table_paths() {
        assert_eq!(ADDRESS.base_path(), "/api/v2/cmdb/firewall/address");
        assert_eq!(
            ADDRESS.key_path("k1").unwrap(),
            "/api/v2/cmdb/firewall/address/k1"
        );
        assert_eq!(
            ADDRESS.key_path("a/b").unwrap(),
            "/api/v2/cmdb/firewall/address/a%2Fb"
        );
        assert!(ADDRESS.key_path("..").is_err());
    }

    #[test]
    fn test_submodule_path() {
        assert_eq!(
            MAIL.key_path("email-block").unwrap(),
            "/api/v2/cmdb/system.replacemsg/mail/email-block"
        );
        assert!(!MAIL.supports_delete());
        assert!(ADDRESS.supports_delete());
    }

    #[test]
    fn test_singleton_path() {
        assert_eq!(GLOBAL.base_path(), "/api/v2/cmdb/system/global");
        let ty = ObjectType::Singleton(&GLOBAL);
        assert!(ty.is_singleton());
        assert!(!ty.supports_delete());
        assert_eq!(ty.to_string(), "system/global");
    }

    #[test]
    fn test_dotted_name() {
        assert_eq!(
            ObjectType::Table(&MAIL).dotted_name(),
            "system.replacemsg.mail"
        );
        assert_eq!(ObjectType::Table(&ADDRESS).dotted_name(), "firewall.address");
    }
}
