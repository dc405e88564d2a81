/*
 * Copyright (C) 2015 The Gravitee team (http://gravitee.io)
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *         http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Figment provider exposing the prefix-stripped environment as config data.

use crate::key::encoded_array_key;
use crate::prefix::strip_property_prefix;
use figment::{
    Metadata, Profile, Provider,
    value::{Dict, Map as ProfileMap, Tag, Value as FigmentValue},
};
use std::collections::HashMap;
use std::env;
use tracing::info;

/// A [`figment::Provider`] over the prefix-carrying subset of an environment
/// snapshot. Only keys with a recognized `gravitee` prefix contribute; the
/// stripped key is split into nested path segments on `.` and `_` (bracket
/// indices normalized to dots first), and scalar values are type-inferred.
///
/// Merge it into a `Figment` like any other provider:
///
/// ```
/// use figment::Figment;
/// use gravitee_gateway_env::GraviteeEnvProvider;
/// use std::collections::HashMap;
///
/// let vars = HashMap::from([("GRAVITEE_http_port".to_owned(), "8082".to_owned())]);
/// let figment = Figment::new().merge(GraviteeEnvProvider::with_vars(vars));
/// ```
#[derive(Debug, Clone)]
pub struct GraviteeEnvProvider {
    vars: HashMap<String, String>,
}

impl GraviteeEnvProvider {
    /// Captures the current process environment.
    pub fn new() -> Self {
        Self { vars: env::vars().collect() }
    }

    /// Uses an injected snapshot instead of the process environment.
    pub fn with_vars(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    fn parse_value(value: &str) -> FigmentValue {
        if value == "true" {
            return FigmentValue::from(true);
        }
        if value == "false" {
            return FigmentValue::from(false);
        }
        if let Ok(n) = value.parse::<u64>() {
            return FigmentValue::from(n);
        }
        if let Ok(n) = value.parse::<i64>() {
            return FigmentValue::from(n);
        }
        if let Ok(n) = value.parse::<f64>() {
            return FigmentValue::from(n);
        }
        FigmentValue::from(value)
    }

    fn insert_at_path(dict: &mut Dict, segments: &[&str], value: FigmentValue) {
        let [first, rest @ ..] = segments else {
            return;
        };
        if rest.is_empty() {
            dict.insert((*first).to_owned(), value);
            return;
        }

        let key = (*first).to_owned();
        dict.entry(key.clone())
            .or_insert_with(|| FigmentValue::Dict(Tag::Default, Dict::new()));
        if let Some(FigmentValue::Dict(_, inner)) = dict.get_mut(&key) {
            Self::insert_at_path(inner, rest, value);
        }
    }

    /// Recursively convert dicts whose keys are all numeric strings into
    /// arrays, so `api.0.name` style paths extract as sequences.
    fn convert_numeric_dicts_to_arrays(value: FigmentValue) -> FigmentValue {
        match value {
            FigmentValue::Dict(tag, dict) => {
                let processed: Dict = dict
                    .into_iter()
                    .map(|(k, v)| (k, Self::convert_numeric_dicts_to_arrays(v)))
                    .collect();
                if Self::is_array_dict(&processed) {
                    Self::dict_to_array(processed)
                } else {
                    FigmentValue::Dict(tag, processed)
                }
            }
            FigmentValue::Array(tag, array) => {
                let processed = array
                    .into_iter()
                    .map(Self::convert_numeric_dicts_to_arrays)
                    .collect();
                FigmentValue::Array(tag, processed)
            }
            other => other,
        }
    }

    fn is_array_dict(dict: &Dict) -> bool {
        !dict.is_empty() && dict.keys().all(|k| k.parse::<usize>().is_ok())
    }

    fn dict_to_array(dict: Dict) -> FigmentValue {
        let mut indexed: Vec<(usize, FigmentValue)> = dict
            .into_iter()
            .filter_map(|(k, v)| k.parse::<usize>().ok().map(|i| (i, v)))
            .collect();
        indexed.sort_by_key(|(i, _)| *i);

        let max_index = indexed.last().map(|(i, _)| *i).unwrap_or(0);
        let mut array = vec![FigmentValue::Dict(Tag::Default, Dict::new()); max_index + 1];
        for (i, v) in indexed {
            array[i] = v;
        }
        FigmentValue::Array(Tag::Default, array)
    }
}

impl Provider for GraviteeEnvProvider {
    fn metadata(&self) -> Metadata {
        Metadata::named("gravitee environment variables")
    }

    fn data(&self) -> Result<ProfileMap<Profile, Dict>, figment::Error> {
        let mut root = Dict::new();
        for (key, value) in &self.vars {
            let stripped = strip_property_prefix(key);
            if stripped.len() == key.len() {
                continue;
            }

            info!("{key} value changed to: {value} from environment variable");

            let normalized = encoded_array_key(stripped);
            let segments: Vec<&str> = normalized
                .split(['.', '_'])
                .filter(|segment| !segment.is_empty())
                .collect();
            Self::insert_at_path(&mut root, &segments, Self::parse_value(value));
        }

        let root = match Self::convert_numeric_dicts_to_arrays(FigmentValue::Dict(Tag::Default, root))
        {
            FigmentValue::Dict(_, dict) => dict,
            _ => Dict::new(),
        };

        let mut data = ProfileMap::new();
        data.insert(Profile::default(), root);
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Figment;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct HttpConfig {
        port: u64,
        secured: bool,
    }

    #[derive(Debug, Deserialize)]
    struct ApiConfig {
        name: String,
    }

    #[derive(Debug, Deserialize)]
    struct GatewayConfig {
        http: HttpConfig,
        api: Vec<ApiConfig>,
    }

    fn vars(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn prefixed_vars_extract_into_nested_structs() {
        let provider = GraviteeEnvProvider::with_vars(vars(&[
            ("gravitee.http.port", "8082"),
            ("GRAVITEE_http_secured", "true"),
            ("gravitee.api[0].name", "customers"),
            ("gravitee_api[1].name", "orders"),
            ("PATH", "/usr/bin"),
        ]));

        let config: GatewayConfig = Figment::new()
            .merge(provider)
            .extract()
            .expect("extraction succeeds");

        assert_eq!(config.http.port, 8082);
        assert!(config.http.secured);
        assert_eq!(config.api.len(), 2);
        assert_eq!(config.api[0].name, "customers");
        assert_eq!(config.api[1].name, "orders");
    }

    #[test]
    fn unprefixed_vars_contribute_nothing() {
        let provider = GraviteeEnvProvider::with_vars(vars(&[
            ("PATH", "/usr/bin"),
            ("HOME", "/home/gateway"),
        ]));

        let data = provider.data().expect("data succeeds");
        let root = data.get(&Profile::default()).expect("default profile");
        assert!(root.is_empty());
    }

    #[test]
    fn scalar_values_are_type_inferred() {
        assert!(matches!(
            GraviteeEnvProvider::parse_value("true"),
            FigmentValue::Bool(_, true)
        ));
        assert!(matches!(
            GraviteeEnvProvider::parse_value("42"),
            FigmentValue::Num(_, _)
        ));
        assert!(matches!(
            GraviteeEnvProvider::parse_value("-7"),
            FigmentValue::Num(_, _)
        ));
        assert!(matches!(
            GraviteeEnvProvider::parse_value("1.5"),
            FigmentValue::Num(_, _)
        ));
        assert!(matches!(
            GraviteeEnvProvider::parse_value("plain"),
            FigmentValue::String(_, _)
        ));
    }

    #[test]
    fn numeric_dicts_become_arrays_only_when_all_keys_are_numeric() {
        let mut mixed = Dict::new();
        mixed.insert("0".to_owned(), FigmentValue::from("a"));
        mixed.insert("name".to_owned(), FigmentValue::from("b"));
        assert!(!GraviteeEnvProvider::is_array_dict(&mixed));

        let mut numeric = Dict::new();
        numeric.insert("0".to_owned(), FigmentValue::from("a"));
        numeric.insert("1".to_owned(), FigmentValue::from("b"));
        assert!(GraviteeEnvProvider::is_array_dict(&numeric));
    }
}
