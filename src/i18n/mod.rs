// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Bundles for every `.ftl` file under `assets/i18n/` are embedded in the
//! binary. The active locale comes from `--lang`, then `[general] language`,
//! then the OS locale, and finally `en-US`. Switching at runtime only changes
//! which bundle [`fluent::I18n::tr`] reads from.

pub mod fluent;
