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

//! Environment variable remapping for the gateway configuration layer.
//!
//! Process environment variables may carry a `gravitee` prefix in any of its
//! recognized spellings (`gravitee.`, `gravitee_`, `GRAVITEE.`, `GRAVITEE_`).
//! This crate installs a read-only view over a snapshot of the environment in
//! which those prefixes are stripped, and in which lookup keys using array
//! bracket syntax (`api[0].name`) resolve against the dotted form the
//! environment actually stores (`api.0.name`), with an optional `:default`
//! suffix carried through untouched.
//!
//! The view is built once at startup by [`install`] (or [`install_with_env`]
//! for an injected snapshot) and replaces the source registered under
//! [`SYSTEM_ENVIRONMENT_SOURCE_NAME`] in the host's [`PropertySources`] list.
//! The prefix-stripped environment can also be handed to a figment-based
//! configuration loader through [`GraviteeEnvProvider`].

mod error;
mod install;
mod key;
mod prefix;
mod provider;
mod source;
mod sources;

pub use error::EnvError;
pub use install::{SYSTEM_ENVIRONMENT_SOURCE_NAME, install, install_with_env};
pub use key::encoded_array_key;
pub use prefix::{PROPERTY_PREFIXES, prefixless_environment, strip_property_prefix};
pub use provider::GraviteeEnvProvider;
pub use source::{MapPropertySource, PrefixAwarePropertySource, PropertySource};
pub use sources::PropertySources;
