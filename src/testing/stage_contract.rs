use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must pass through unchanged and without allocating.
    ///
    /// Default: bare tags, which every stage must leave alone.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", "reflets-de-france", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal stage contract.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() changes text
/// 4. `handles_empty_string` → "" in, "" out, nothing to do
/// 5. `no_panic_on_mixed_scripts` → survives mixed real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let mut text = Cow::Borrowed(input);

        if stage.needs_apply(&text) {
            let old_ptr = text.as_ref() as *const str;
            text = stage.apply(text);
            assert_ne!(
                old_ptr,
                text.as_ref() as *const str,
                "stage `{}` predicted a change but returned its input on `{input}`",
                stage.name()
            );
        } else {
            assert_eq!(input as *const str, text.as_ref() as *const str);
        }

        // Second pass must never allocate again
        let old_ptr = text.as_ref() as *const str;
        text = stage.apply(text);
        assert_eq!(
            old_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on second pass of `{}` (input: `{input}`)",
            stage.name()
        );
    }

    for &pass_through in S::should_pass_through() {
        let text = stage.apply(Cow::Borrowed(pass_through));
        assert_eq!(text.as_ref(), pass_through);
        assert_eq!(
            pass_through as *const str,
            text.as_ref() as *const str,
            "zero-copy violated on pass-through sample of `{}` (input: `{pass_through}`)",
            stage.name()
        );
    }

    for &(input, expected) in S::should_transform() {
        let text = stage.apply(Cow::Borrowed(input));
        assert_eq!(text.as_ref(), expected, "stage `{}` on `{input}`", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    let transform_inputs = S::should_transform().iter().map(|(input, _)| input);
    for input in S::samples().iter().chain(transform_inputs) {
        let once = stage.apply(Cow::Borrowed(input)).into_owned();
        let twice = stage.apply(Cow::Borrowed(&once)).into_owned();
        assert_eq!(
            once,
            twice,
            "stage `{}` not idempotent on `{input}`",
            stage.name()
        );
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    for &sample in S::samples() {
        check_accuracy(&stage, sample);
    }
    for &(input, _) in S::should_transform() {
        check_accuracy(&stage, input);
    }
    for clean in ["", "hello", "world123", " !@#", "--a--"] {
        check_accuracy(&stage, clean);
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str) {
    let predicted = stage.needs_apply(input);
    // Owned input, so stages that always allocate are not penalised.
    let output = stage.apply(Cow::Owned(input.to_owned()));
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );
}

pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    assert!(!stage.needs_apply(""), "stage `{}` wants to touch \"\"", stage.name());
    assert_eq!(stage.apply(Cow::Borrowed("")), "");
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let _ = stage.apply(Cow::Borrowed(
        "Hello 世界 русский Türkçe العربية हिन्दी 한국어 ﬁ ½ Œuvre",
    ));
}
