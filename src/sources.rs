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

//! Ordered list of named property sources with first-match resolution.

use crate::error::EnvError;
use crate::source::PropertySource;

/// A mutable, ordered list of named property sources. Lookups walk the list
/// in order and the first source containing the key wins.
#[derive(Default)]
pub struct PropertySources {
    sources: Vec<Box<dyn PropertySource>>,
}

impl PropertySources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source at the end of the chain (lowest precedence).
    pub fn push(&mut self, source: impl PropertySource + 'static) {
        self.sources.push(Box::new(source));
    }

    pub fn get(&self, name: &str) -> Option<&dyn PropertySource> {
        self.sources
            .iter()
            .find(|source| source.name() == name)
            .map(|source| source.as_ref())
    }

    /// Replaces the source registered under `name`, keeping its position in
    /// the chain so downstream precedence is unaffected.
    pub fn replace(
        &mut self,
        name: &str,
        source: impl PropertySource + 'static,
    ) -> Result<(), EnvError> {
        match self.sources.iter().position(|s| s.name() == name) {
            Some(index) => {
                self.sources[index] = Box::new(source);
                Ok(())
            }
            None => Err(EnvError::UnknownPropertySource { name: name.to_owned() }),
        }
    }

    pub fn contains_property(&self, name: &str) -> bool {
        self.sources.iter().any(|source| source.contains_property(name))
    }

    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.sources.iter().find_map(|source| source.get_property(name))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
