//! Core tag-normalization stage abstraction.
//!
//! A tag is produced by running a label through a fixed sequence of small,
//! single-purpose stages. Every stage follows the same contract:
//!
//! * `needs_apply` is a cheap pre-check. Returning `false` guarantees that
//!   `apply` would hand back its input unchanged, so the pipeline skips it.
//! * `apply` takes a `Cow<str>` and returns the borrowed input untouched when
//!   there is nothing to do. Allocation only happens on real changes.
//! * Applying a stage twice yields the same result as applying it once.
//!
//! The contract is enforced for every stage by `assert_stage_contract!`.

pub mod hyphenate;
pub mod lower_case;
pub mod normalization;
pub mod remove_diacritics;
pub mod replace_ligatures;

use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and contract failures.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called on text for which `needs_apply` is `false`.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}
