//! Property tests for the size threshold policy

use flowbench_render::{floor_megabytes, GateDecision, GateMode, SizeGate, MEGABYTE};
use flowbench_test_utils::{RefusingPrompt, ScriptedPrompt};
use proptest::prelude::*;

proptest! {
    /// At or below the threshold the prompt is never consulted.
    #[test]
    fn below_threshold_never_prompts(size in 0..=MEGABYTE) {
        let gate = SizeGate::new();
        let decision = gate.evaluate(size, GateMode::AllowPartial, "t", &RefusingPrompt);
        prop_assert_eq!(decision, GateDecision::RenderAll);

        let decision = gate.evaluate(size, GateMode::FullOnly, "t", &RefusingPrompt);
        prop_assert_eq!(decision, GateDecision::RenderAll);
    }

    /// Above the threshold the prompt is consulted exactly once.
    #[test]
    fn above_threshold_prompts_once(size in (MEGABYTE + 1)..=(1024 * MEGABYTE)) {
        let gate = SizeGate::new();
        let prompt = ScriptedPrompt::answering(0);
        let decision = gate.evaluate(size, GateMode::AllowPartial, "t", &prompt);
        prop_assert_eq!(decision, GateDecision::RenderAll);
        prop_assert_eq!(prompt.call_count(), 1);
    }

    /// Any answer other than the two affirmative indices cancels.
    #[test]
    fn unexpected_answers_cancel(size in (MEGABYTE + 1)..=(1024 * MEGABYTE), answer in 2usize..64) {
        let gate = SizeGate::new();
        let prompt = ScriptedPrompt::answering(answer);
        let decision = gate.evaluate(size, GateMode::AllowPartial, "t", &prompt);
        prop_assert_eq!(decision, GateDecision::Cancelled);
    }

    /// Full-only mode never decides to render partially.
    #[test]
    fn full_only_never_renders_partial(
        size in (MEGABYTE + 1)..=(1024 * MEGABYTE),
        answer in proptest::option::of(0usize..8),
    ) {
        let gate = SizeGate::new();
        let prompt = match answer {
            Some(index) => ScriptedPrompt::answering(index),
            None => ScriptedPrompt::dismissed(),
        };
        let decision = gate.evaluate(size, GateMode::FullOnly, "t", &prompt);
        prop_assert_ne!(decision, GateDecision::RenderPartial);
    }

    /// The floored megabyte count brackets the true size.
    #[test]
    fn floored_count_brackets_the_size(size in 0..=u64::MAX / 2) {
        let floored = floor_megabytes(size);
        prop_assert!(floored * MEGABYTE <= size);
        prop_assert!(size < (floored + 1) * MEGABYTE);
    }
}
