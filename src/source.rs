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

//! Property sources: the lookup seam and the prefix-aware decorator.

use crate::key::encoded_array_key;
use std::collections::HashMap;

/// A named, read-only key-value store queried by a configuration resolver.
pub trait PropertySource: Send + Sync {
    fn name(&self) -> &str;
    fn contains_property(&self, name: &str) -> bool;
    fn get_property(&self, name: &str) -> Option<&str>;
}

/// An immutable map-backed property source.
#[derive(Debug, Clone)]
pub struct MapPropertySource {
    name: String,
    entries: HashMap<String, String>,
}

impl MapPropertySource {
    pub fn new(name: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self { name: name.into(), entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PropertySource for MapPropertySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn contains_property(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn get_property(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }
}

/// Decorator that rewrites lookup keys with [`encoded_array_key`] before
/// delegating. Prefix stripping does not happen here; it already happened
/// when the delegate's backing map was built.
///
/// Stateless per call: the only state is the delegate, fixed at construction,
/// so concurrent lookups need no locking.
#[derive(Debug, Clone)]
pub struct PrefixAwarePropertySource<S> {
    delegate: S,
}

impl<S: PropertySource> PrefixAwarePropertySource<S> {
    pub fn new(delegate: S) -> Self {
        Self { delegate }
    }
}

impl<S: PropertySource> PropertySource for PrefixAwarePropertySource<S> {
    fn name(&self) -> &str {
        self.delegate.name()
    }

    fn contains_property(&self, name: &str) -> bool {
        self.delegate.contains_property(&encoded_array_key(name))
    }

    fn get_property(&self, name: &str) -> Option<&str> {
        self.delegate.get_property(&encoded_array_key(name))
    }
}
