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

//! One-shot installation of the prefix-normalized environment view.

use crate::prefix::{prefixless_environment, strip_property_prefix};
use crate::source::{MapPropertySource, PrefixAwarePropertySource};
use crate::sources::PropertySources;
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};

/// Conventional name of the system environment source. The normalizing
/// wrapper is re-registered under this same name so downstream consumers
/// addressing it keep working transparently.
pub const SYSTEM_ENVIRONMENT_SOURCE_NAME: &str = "systemEnvironment";

/// Installs the prefix-normalized view over the current process environment.
///
/// Meant to be called once during startup, before configuration resolution
/// begins. See [`install_with_env`] for the semantics.
pub fn install(sources: &mut PropertySources) {
    install_with_env(sources, env::vars().collect());
}

/// Installs the prefix-normalized view over an injected environment snapshot.
///
/// Builds the prefix-stripped backing map once, wraps it in a
/// [`PrefixAwarePropertySource`] and replaces the source registered under
/// [`SYSTEM_ENVIRONMENT_SOURCE_NAME`]. When no source carries that name the
/// step is skipped and the chain is left untouched; the host keeps running
/// without key remapping.
pub fn install_with_env(sources: &mut PropertySources, vars: HashMap<String, String>) {
    let total = vars.len();
    let remapped = vars
        .keys()
        .filter(|key| strip_property_prefix(key).len() != key.len())
        .count();

    let backing = MapPropertySource::new(SYSTEM_ENVIRONMENT_SOURCE_NAME, prefixless_environment(vars));
    let wrapped = PrefixAwarePropertySource::new(backing);

    match sources.replace(SYSTEM_ENVIRONMENT_SOURCE_NAME, wrapped) {
        Ok(()) => info!(
            "replaced '{SYSTEM_ENVIRONMENT_SOURCE_NAME}' property source, {remapped} of {total} keys remapped"
        ),
        Err(error) => debug!("skipping environment key remapping: {error}"),
    }
}
