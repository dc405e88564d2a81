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

//! Recognized key prefixes and the one-shot prefixless snapshot builder.

use std::collections::HashMap;

/// Recognized key prefixes, scanned in order. The first match is the one
/// stripped; a key is never stripped twice.
pub const PROPERTY_PREFIXES: [&str; 4] = ["gravitee.", "gravitee_", "GRAVITEE.", "GRAVITEE_"];

/// Removes the first matching recognized prefix from `key`, case-sensitively.
/// Keys without a recognized prefix are returned unchanged.
pub fn strip_property_prefix(key: &str) -> &str {
    for prefix in PROPERTY_PREFIXES {
        if let Some(stripped) = key.strip_prefix(prefix) {
            return stripped;
        }
    }
    key
}

/// Builds a fresh mapping in which every key has its recognized prefix
/// stripped. Values are carried over unchanged and the source snapshot is
/// consumed, never mutated in place.
///
/// Two differently-prefixed keys can strip to the same name (`gravitee.x` and
/// `GRAVITEE_x` both become `x`); when that happens the survivor follows map
/// iteration order and exactly one of the values remains.
pub fn prefixless_environment(vars: HashMap<String, String>) -> HashMap<String, String> {
    let mut prefixless = HashMap::with_capacity(vars.len());
    for (key, value) in vars {
        prefixless.insert(strip_property_prefix(&key).to_owned(), value);
    }
    prefixless
}
