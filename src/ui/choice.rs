// SPDX-License-Identifier: MPL-2.0
//! Pick-list option pairing a value with its translated label.

use std::fmt;

/// `pick_list` shows options through `Display`; enums here are labelled via
/// i18n keys, so each option carries its already translated label.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub value: T,
    pub label: String,
}

impl<T> Choice<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Builds one choice per value, and the choice matching `current`.
pub fn choices<T: Copy + PartialEq>(
    values: &[T],
    current: T,
    label: impl Fn(T) -> String,
) -> (Vec<Choice<T>>, Option<Choice<T>>) {
    let options: Vec<Choice<T>> = values.iter().map(|v| Choice::new(*v, label(*v))).collect();
    let selected = options.iter().find(|c| c.value == current).cloned();
    (options, selected)
}
