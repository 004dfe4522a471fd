//! Continuity refine: anchoring, merge isolation, degraded returns,
//! failure atomicity.

mod test_utils;

use storycraft_continuity::{ContinuityOrchestrator, EditTracker, SessionState};
use storycraft_core::{SceneSeed, SceneUpdate, Script, ScriptMeta};
use storycraft_error::StorycraftErrorKind;
use test_utils::{MockDriver, revision};

fn pilot(scene_count: usize) -> Script {
    let seeds = (1..=scene_count)
        .map(|n| {
            SceneSeed::new(format!("INT. SET {n}"), "Night")
                .with_title(format!("Scene {n}"))
                .with_description(format!("Original action {n}."))
                .with_dialogue(format!("JANE\nOriginal line {n}."))
        })
        .collect();
    Script::new(
        ScriptMeta::default()
            .with_title("Pilot")
            .with_genre("Thriller")
            .with_tone("tense")
            .with_language("English")
            .with_script_type("movie")
            .with_author("Jordan Avery")
            .with_ai_model_used("mock-model-v1"),
        seeds,
    )
}

#[tokio::test]
async fn empty_tracker_is_rejected_without_calling_the_backend() {
    let mut orchestrator = ContinuityOrchestrator::new(MockDriver::returning(vec![]));
    let mut script = pilot(3);
    let before = script.clone();
    let mut tracker = EditTracker::new();

    let err = orchestrator
        .refine(&mut script, &mut tracker)
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), StorycraftErrorKind::Validation(_)));
    assert_eq!(orchestrator.driver().refine_calls(), 0);
    assert_eq!(script, before);
}

#[tokio::test]
async fn end_to_end_pilot_scenario() {
    // Scripted per the contract: user edits scene 2 of 3, backend returns
    // one revision for scene 3.
    let mut orchestrator =
        ContinuityOrchestrator::new(MockDriver::returning(vec![revision("act3")]));
    let mut script = pilot(3);
    let mut tracker = EditTracker::new();

    let edited_id = *script.scenes()[1].id();
    script.update_scene(
        edited_id,
        SceneUpdate::default().with_dialogue("JANE\nI'm done running."),
    );
    tracker.mark(1);

    let before = script.clone();
    let report = orchestrator
        .refine(&mut script, &mut tracker)
        .await
        .expect("refine succeeds");

    assert_eq!(report.anchor, 1);
    assert_eq!(report.requested, 1);
    assert_eq!(report.applied, 1);

    // Scene 1 untouched in every field; scene 2 keeps the user's edit verbatim.
    assert_eq!(script.scenes()[0], before.scenes()[0]);
    assert_eq!(script.scenes()[1], before.scenes()[1]);
    assert_eq!(script.scenes()[1].dialogue(), "JANE\nI'm done running.");

    // Scene 3: only description/dialogue replaced.
    let merged = &script.scenes()[2];
    let original = &before.scenes()[2];
    assert_eq!(merged.description(), "Regenerated description (act3)");
    assert_eq!(merged.dialogue(), "JANE\nRegenerated line (act3)");
    assert_eq!(merged.location(), original.location());
    assert_eq!(merged.time_of_day(), original.time_of_day());
    assert_eq!(merged.title(), original.title());
    assert_eq!(merged.scene_number(), original.scene_number());
    assert_eq!(merged.id(), original.id());
    assert_eq!(merged.created_at(), original.created_at());
    assert_eq!(merged.updated_at(), original.updated_at());

    assert!(tracker.is_empty());
}

#[tokio::test]
async fn anchor_is_the_minimum_dirty_index() {
    // Edits at 1 and 3: regeneration anchors at 1 and rewrites 2..=4,
    // including the edit at 3. Preserved behavior, not a bug.
    let mut orchestrator = ContinuityOrchestrator::new(MockDriver::returning(vec![
        revision("a"),
        revision("b"),
        revision("c"),
    ]));
    let mut script = pilot(5);
    let mut tracker = EditTracker::new();
    tracker.mark(3);
    tracker.mark(1);

    let report = orchestrator
        .refine(&mut script, &mut tracker)
        .await
        .unwrap();
    assert_eq!(report.anchor, 1);
    assert_eq!(report.requested, 3);
    assert_eq!(script.scenes()[3].description(), "Regenerated description (b)");
}

#[tokio::test]
async fn degraded_merge_applies_the_returned_prefix() {
    let mut orchestrator =
        ContinuityOrchestrator::new(MockDriver::returning(vec![revision("only")]));
    let mut script = pilot(4);
    let mut tracker = EditTracker::new();
    tracker.mark(0);

    let before = script.clone();
    let report = orchestrator
        .refine(&mut script, &mut tracker)
        .await
        .expect("degraded return is still a success");

    assert_eq!(report.requested, 3);
    assert_eq!(report.applied, 1);
    assert_eq!(script.scenes()[1].description(), "Regenerated description (only)");
    // Scenes past the returned prefix keep their prior content.
    assert_eq!(script.scenes()[2], before.scenes()[2]);
    assert_eq!(script.scenes()[3], before.scenes()[3]);
    assert!(tracker.is_empty());
}

#[tokio::test]
async fn surplus_revisions_are_ignored() {
    let mut orchestrator = ContinuityOrchestrator::new(MockDriver::returning(vec![
        revision("a"),
        revision("b"),
        revision("c"),
    ]));
    let mut script = pilot(3);
    let mut tracker = EditTracker::new();
    tracker.mark(1);

    let report = orchestrator
        .refine(&mut script, &mut tracker)
        .await
        .unwrap();
    assert_eq!(report.requested, 1);
    assert_eq!(report.applied, 1);
    assert_eq!(script.scenes()[2].description(), "Regenerated description (a)");
}

#[tokio::test]
async fn editing_the_last_scene_succeeds_trivially() {
    let mut orchestrator = ContinuityOrchestrator::new(MockDriver::returning(vec![]));
    let mut script = pilot(3);
    let mut tracker = EditTracker::new();
    tracker.mark(2);

    let before = script.clone();
    let report = orchestrator
        .refine(&mut script, &mut tracker)
        .await
        .unwrap();

    assert_eq!(report.requested, 0);
    assert_eq!(report.applied, 0);
    assert_eq!(orchestrator.driver().refine_calls(), 0);
    assert_eq!(script, before);
    assert!(tracker.is_empty());
}

#[tokio::test]
async fn backend_failure_merges_nothing_and_keeps_the_tracker() {
    let mut orchestrator = ContinuityOrchestrator::new(MockDriver::failing());
    let mut script = pilot(3);
    let mut tracker = EditTracker::new();
    tracker.mark(0);

    let before = script.clone();
    let err = orchestrator
        .refine(&mut script, &mut tracker)
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), StorycraftErrorKind::Generation(_)));
    assert_eq!(script, before);
    assert!(tracker.contains(0), "tracker survives for a retry");
    // No stuck busy state after a failure.
    assert_eq!(orchestrator.session_state(), SessionState::Idle);
}

#[tokio::test]
async fn session_returns_to_idle_after_success() {
    let mut orchestrator =
        ContinuityOrchestrator::new(MockDriver::returning(vec![revision("x")]));
    let mut script = pilot(2);
    let mut tracker = EditTracker::new();
    tracker.mark(0);

    orchestrator.refine(&mut script, &mut tracker).await.unwrap();
    assert_eq!(orchestrator.session_state(), SessionState::Idle);
}

#[tokio::test]
async fn regenerate_scene_at_touches_only_the_target() {
    let mut orchestrator =
        ContinuityOrchestrator::new(MockDriver::returning(vec![revision("target")]));
    let mut script = pilot(3);
    let before = script.clone();

    orchestrator
        .regenerate_scene_at(&mut script, 1, Some("Make it rain.".to_string()))
        .await
        .expect("regenerate succeeds");

    assert_eq!(script.scenes()[0], before.scenes()[0]);
    assert_eq!(script.scenes()[2], before.scenes()[2]);
    assert_eq!(script.scenes()[1].description(), "Regenerated description (target)");
    assert_eq!(script.scenes()[1].location(), before.scenes()[1].location());
}

#[tokio::test]
async fn regenerate_scene_at_rejects_bad_index() {
    let mut orchestrator = ContinuityOrchestrator::new(MockDriver::returning(vec![]));
    let mut script = pilot(2);

    let err = orchestrator
        .regenerate_scene_at(&mut script, 9, None)
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), StorycraftErrorKind::Validation(_)));
}
