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

//! Lookup-key normalization: array bracket syntax to dotted form.

use std::borrow::Cow;

/// Rewrites array bracket syntax in a lookup key into the dotted form stored
/// by the environment snapshot: every `[` becomes `.`, every `]` is dropped.
///
/// The key is split on its first `:` into base and default part; only the
/// base is rewritten and the default part is reattached verbatim, further
/// colons included. Keys whose base carries no `[` are returned borrowed and
/// unchanged, which also makes the rewrite idempotent.
///
/// ```
/// use gravitee_gateway_env::encoded_array_key;
///
/// assert_eq!(encoded_array_key("api[0].name"), "api.0.name");
/// assert_eq!(encoded_array_key("api[0].name:none"), "api.0.name:none");
/// assert_eq!(encoded_array_key("plain"), "plain");
/// ```
pub fn encoded_array_key(name: &str) -> Cow<'_, str> {
    let (base, default) = match name.split_once(':') {
        Some((base, default)) => (base, Some(default)),
        None => (name, None),
    };
    if !base.contains('[') {
        return Cow::Borrowed(name);
    }

    let mut encoded = String::with_capacity(name.len());
    for c in base.chars() {
        match c {
            '[' => encoded.push('.'),
            ']' => {}
            c => encoded.push(c),
        }
    }
    if let Some(default) = default {
        encoded.push(':');
        encoded.push_str(default);
    }
    Cow::Owned(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_become_dots() {
        assert_eq!(encoded_array_key("a[0].b"), "a.0.b");
        assert_eq!(encoded_array_key("a[0].b[12].c"), "a.0.b.12.c");
    }

    #[test]
    fn default_suffix_is_preserved() {
        assert_eq!(encoded_array_key("a[0]:def"), "a.0:def");
        assert_eq!(encoded_array_key("a:def"), "a:def");
    }

    #[test]
    fn everything_after_the_first_colon_stays_verbatim() {
        assert_eq!(encoded_array_key("a[0]:http://host:8080"), "a.0:http://host:8080");
        assert_eq!(encoded_array_key("a:b:c"), "a:b:c");
    }

    #[test]
    fn bracket_free_keys_are_borrowed_unchanged() {
        assert!(matches!(encoded_array_key("plain"), Cow::Borrowed("plain")));
        assert_eq!(encoded_array_key(""), "");
    }

    #[test]
    fn rewrite_is_idempotent() {
        let once = encoded_array_key("a[0].b[1]:x").into_owned();
        assert_eq!(encoded_array_key(&once), once);
    }

    #[test]
    fn unmatched_brackets_degrade_without_error() {
        // A lone `[` still turns into a dot, a lone `]` in a bracket-carrying
        // base vanishes, and a base without `[` is left alone entirely.
        assert_eq!(encoded_array_key("a[0"), "a.0");
        assert_eq!(encoded_array_key("a[]b]"), "a.b");
        assert_eq!(encoded_array_key("a]b"), "a]b");
    }
}
