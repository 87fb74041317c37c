use std::{collections::HashMap, env, fs, path::Path};

use crate::{errors::Error, Result};

/// Typed configuration, loaded once at startup and immutable afterwards.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    /// Chat id -> display name. Display names show up in cross-admin
    /// notifications ("Alice answered the question ...").
    pub admins: HashMap<i64, String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let bot_token = env_str("BOT_TOKEN").unwrap_or_default();
        if bot_token.trim().is_empty() {
            return Err(Error::Config(
                "BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let admins = parse_admins(env_str("ADMINS"))?;

        Ok(Self { bot_token, admins })
    }
}

/// Parse the `ADMINS` value: a JSON object of chat id -> display name, e.g.
/// `{"123456789": "Alice", "987654321": "Bob"}`.
fn parse_admins(raw: Option<String>) -> Result<HashMap<i64, String>> {
    let raw = raw
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| Error::Config("ADMINS environment variable is required".to_string()))?;

    let map: HashMap<String, String> = serde_json::from_str(&raw).map_err(|e| {
        Error::Config(format!(
            "ADMINS must be a JSON object of chat id to display name: {e}"
        ))
    })?;

    if map.is_empty() {
        return Err(Error::Config(
            "ADMINS must contain at least one administrator".to_string(),
        ));
    }

    let mut admins = HashMap::with_capacity(map.len());
    for (key, name) in map {
        let id = key.trim().parse::<i64>().map_err(|_| {
            Error::Config(format!("ADMINS key {key:?} is not a numeric chat id"))
        })?;
        admins.insert(id, name);
    }
    Ok(admins)
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_admins_json_object() {
        let admins =
            parse_admins(Some(r#"{"111": "Alice", "222": "Bob"}"#.to_string())).unwrap();
        assert_eq!(admins.len(), 2);
        assert_eq!(admins.get(&111).map(String::as_str), Some("Alice"));
        assert_eq!(admins.get(&222).map(String::as_str), Some("Bob"));
    }

    #[test]
    fn rejects_missing_or_empty_admins() {
        assert!(matches!(parse_admins(None), Err(Error::Config(_))));
        assert!(matches!(
            parse_admins(Some("   ".to_string())),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            parse_admins(Some("{}".to_string())),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_admin_ids() {
        let err = parse_admins(Some(r#"{"alice": "Alice"}"#.to_string())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_malformed_admins_json() {
        assert!(matches!(
            parse_admins(Some("[1, 2, 3]".to_string())),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            parse_admins(Some("not json".to_string())),
            Err(Error::Config(_))
        ));
    }
}
