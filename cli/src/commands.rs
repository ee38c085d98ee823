use anyhow::{bail, Context, Result};
use clap::Subcommand;
use cmdb_client::{catalog, Client, ObjectType, Params};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List known object types, optionally filtered by substring.
    Objects { filter: Option<String> },

    /// Read one table member, or a singleton.
    Get {
        /// Object type, e.g. `firewall/address` or `firewall.address`.
        object: String,
        /// Member key. Omit for singletons.
        mkey: Option<String>,
    },

    /// Read every member of a table.
    List { object: String },

    /// Create a table member.
    Create {
        object: String,
        /// JSON object, or `@path` to read it from a file.
        #[arg(short, long)]
        data: Option<String>,
        /// Extra `key=value` field; the value is parsed as JSON when possible.
        #[arg(short, long = "set")]
        set: Vec<String>,
    },

    /// Update a table member, or a singleton.
    Update {
        object: String,
        mkey: Option<String>,
        #[arg(short, long)]
        data: Option<String>,
        #[arg(short, long = "set")]
        set: Vec<String>,
    },

    /// Delete a table member. Types without an unset endpoint are left alone.
    Delete { object: String, mkey: Option<String> },

    /// Print the firmware version reported by the appliance.
    Version,
}

/// Execute one subcommand against the appliance.
pub async fn run(client: &Client, command: Command) -> Result<()> {
    match command {
        Command::Objects { filter } => {
            print_objects(filter.as_deref());
        }
        Command::Get { object, mkey } => {
            let out = match (resolve(&object)?, mkey.as_deref()) {
                (ObjectType::Table(t), Some(k)) => client.table(t).read(k).await?,
                (ObjectType::Singleton(s), None) => client.singleton(s).read().await?,
                (ty, k) => bail!(key_mismatch(ty, k)),
            };
            print_json(&out)?;
        }
        Command::List { object } => match resolve(&object)? {
            ObjectType::Table(t) => print_json(&client.table(t).list().await?)?,
            ty @ ObjectType::Singleton(_) => {
                bail!("{ty} is a singleton; use `get {ty}` to read it")
            }
        },
        Command::Create { object, data, set } => {
            let params = build_params(data.as_deref(), &set)?;
            match resolve(&object)? {
                ObjectType::Table(t) => print_json(&client.table(t).create(&params).await?)?,
                ty @ ObjectType::Singleton(_) => {
                    bail!("{ty} is a singleton and cannot be created; use `update {ty}`")
                }
            }
        }
        Command::Update {
            object,
            mkey,
            data,
            set,
        } => {
            let params = build_params(data.as_deref(), &set)?;
            let out = match (resolve(&object)?, mkey.as_deref()) {
                (ObjectType::Table(t), Some(k)) => client.table(t).update(k, &params).await?,
                (ObjectType::Singleton(s), None) => client.singleton(s).update(&params).await?,
                (ty, k) => bail!(key_mismatch(ty, k)),
            };
            print_json(&out)?;
        }
        Command::Delete { object, mkey } => {
            let ty = resolve(&object)?;
            match (ty, mkey.as_deref()) {
                (ObjectType::Table(t), Some(k)) => client.table(t).delete(k).await?,
                (ObjectType::Singleton(s), None) => client.singleton(s).delete().await?,
                (ty, k) => bail!(key_mismatch(ty, k)),
            }
            if ty.supports_delete() {
                info!(object = %ty, "Deleted");
            } else {
                info!(object = %ty, "No unset API for this type, nothing was sent");
            }
        }
        Command::Version => {
            println!("{}", client.device_version().await?);
        }
    }
    Ok(())
}

fn resolve(name: &str) -> Result<ObjectType> {
    catalog::lookup(name).with_context(|| {
        format!("unknown object type {name:?}; run `cmdbctl objects` to list known types")
    })
}

fn key_mismatch(ty: ObjectType, mkey: Option<&str>) -> String {
    match mkey {
        Some(k) => format!("{ty} is a singleton and takes no mkey (got {k:?})"),
        None => format!("{ty} is a table; an mkey is required"),
    }
}

/// Print catalog entries whose path or dotted name contains `filter`.
pub fn print_objects(filter: Option<&str>) {
    for line in object_lines(filter) {
        println!("{line}");
    }
}

fn object_lines(filter: Option<&str>) -> Vec<String> {
    catalog::all()
        .filter(|ty| match filter {
            Some(f) => ty.path().contains(f) || ty.dotted_name().contains(f),
            None => true,
        })
        .map(|ty| {
            let kind = if ty.is_singleton() {
                "singleton"
            } else {
                "table"
            };
            let note = if ty.is_singleton() || ty.supports_delete() {
                ""
            } else {
                "  (no delete)"
            };
            format!("{kind:<9}  {}{note}", ty.path())
        })
        .collect()
}

/// Build request parameters from `--data` and `--set` arguments.
///
/// `--set` pairs are applied after `--data` and overwrite its fields.
pub fn build_params(data: Option<&str>, sets: &[String]) -> Result<Params> {
    let mut params = match data {
        None => Params::new(),
        Some(raw) => {
            let text = match raw.strip_prefix('@') {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read --data file {path}"))?,
                None => raw.to_string(),
            };
            match serde_json::from_str::<Value>(&text).context("--data is not valid JSON")? {
                Value::Object(map) => map,
                _ => bail!("--data must be a JSON object"),
            }
        }
    };

    for pair in sets {
        let (key, raw_value) = pair
            .split_once('=')
            .with_context(|| format!("--set expects key=value, got {pair:?}"))?;
        let key = key.trim();
        if key.is_empty() {
            bail!("--set has an empty key: {pair:?}");
        }
        let value = serde_json::from_str(raw_value)
            .unwrap_or_else(|_| Value::String(raw_value.to_string()));
        params.insert(key.to_string(), value);
    }

    Ok(params)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_params_from_data_and_sets() {
        let params = build_params(
            Some(r#"{"name": "web01", "comment": "old"}"#),
            &[
                "comment=new".to_string(),
                "visibility=\"enable\"".to_string(),
                "color=3".to_string(),
                "allow-routing=true".to_string(),
            ],
        )
        .unwrap();

        assert_eq!(params["name"], "web01");
        assert_eq!(params["comment"], "new");
        assert_eq!(params["visibility"], "enable");
        assert_eq!(params["color"], 3);
        assert_eq!(params["allow-routing"], true);
    }

    #[test]
    fn test_build_params_nested_set_value() {
        let params = build_params(None, &[r#"member=[{"name":"a"}]"#.to_string()]).unwrap();
        assert_eq!(params["member"], json!([{"name": "a"}]));
    }

    #[test]
    fn test_build_params_value_with_equals() {
        let params = build_params(None, &["comment=a=b".to_string()]).unwrap();
        assert_eq!(params["comment"], "a=b");
    }

    #[test]
    fn test_build_params_rejects_bad_input() {
        assert!(build_params(Some("[1, 2]"), &[]).is_err());
        assert!(build_params(Some("{oops"), &[]).is_err());
        assert!(build_params(None, &["novalue".to_string()]).is_err());
        assert!(build_params(None, &["=x".to_string()]).is_err());
    }

    #[test]
    fn test_build_params_from_file() {
        let path = std::env::temp_dir().join(format!("cmdbctl-data-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"subnet": "10.0.0.0 255.0.0.0"}"#).unwrap();

        let arg = format!("@{}", path.display());
        let params = build_params(Some(&arg), &[]).unwrap();
        assert_eq!(params["subnet"], "10.0.0.0 255.0.0.0");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_object_lines_filter() {
        let lines = object_lines(Some("replacemsg/mail"));
        assert_eq!(
            lines,
            vec!["table      system.replacemsg/mail  (no delete)".to_string()]
        );

        let lines = object_lines(Some("system.global"));
        assert_eq!(lines, vec!["singleton  system/global".to_string()]);
    }

    #[test]
    fn test_object_lines_unfiltered_covers_catalog() {
        assert_eq!(object_lines(None).len(), catalog::all().count());
    }

    #[test]
    fn test_resolve_unknown_type() {
        let err = resolve("firewall/bogus").unwrap_err();
        assert!(err.to_string().contains("cmdbctl objects"));
    }

    #[test]
    fn test_key_mismatch_messages() {
        let table = catalog::lookup("firewall/address").unwrap();
        assert!(key_mismatch(table, None).contains("mkey is required"));
        let single = catalog::lookup("system/global").unwrap();
        assert!(key_mismatch(single, Some("x")).contains("takes no mkey"));
    }
}
