//! Whole-engine round trip: generate, persist, edit, refine, export.

use async_trait::async_trait;
use storycraft::{
    ContinuityOrchestrator, DialogueRequest, EditTracker, ImprovedDialogue,
    MemoryScriptRepository, RefineRequest, RegenerateRequest, RewriteRequest, SceneDraft,
    SceneRequest, SceneRevision, SceneSeed, SceneUpdate, ScreenwriterDriver, ScriptMeta,
    ScriptRepository, ScriptRequest, StorycraftResult, export_script, generate_script,
};

struct CannedDriver;

#[async_trait]
impl ScreenwriterDriver for CannedDriver {
    async fn generate_scene(&self, _request: &SceneRequest) -> StorycraftResult<SceneDraft> {
        Ok(draft(1))
    }

    async fn generate_script(&self, request: &ScriptRequest) -> StorycraftResult<Vec<SceneDraft>> {
        Ok((1..=request.scene_count).map(draft).collect())
    }

    async fn regenerate_scene(
        &self,
        _request: &RegenerateRequest,
    ) -> StorycraftResult<SceneRevision> {
        Ok(rewrite("regenerated"))
    }

    async fn rewrite_scene(&self, _request: &RewriteRequest) -> StorycraftResult<SceneRevision> {
        Ok(rewrite("rewritten"))
    }

    async fn refine_script(&self, request: &RefineRequest) -> StorycraftResult<Vec<SceneRevision>> {
        Ok((0..request.expected_revisions())
            .map(|i| rewrite(&format!("refined {i}")))
            .collect())
    }

    async fn improve_dialogue(
        &self,
        _request: &DialogueRequest,
    ) -> StorycraftResult<ImprovedDialogue> {
        Ok(ImprovedDialogue {
            dialogue: "JANE\nBetter line.".to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }

    fn model_name(&self) -> &str {
        "canned-model-v1"
    }
}

fn draft(n: u32) -> SceneDraft {
    SceneDraft {
        scene_number: n,
        location: format!("INT. SET {n}"),
        time_of_day: "Night".to_string(),
        description: format!("Action beat {n}."),
        dialogue: format!("JANE\nLine {n}.\nMACK\nReply {n}."),
    }
}

fn rewrite(tag: &str) -> SceneRevision {
    SceneRevision {
        description: format!("New action ({tag})."),
        dialogue: format!("JANE\nNew line ({tag})."),
    }
}

fn meta() -> ScriptMeta {
    ScriptMeta::default()
        .with_title("Pilot")
        .with_genre("Thriller")
        .with_tone("tense")
        .with_language("English")
        .with_script_type("movie")
        .with_author("Jordan Avery")
        .with_ai_model_used("canned-model-v1")
}

fn request(scene_count: u32) -> ScriptRequest {
    ScriptRequest {
        title: "Pilot".into(),
        genre: "Thriller".into(),
        tone: "tense".into(),
        language: "English".into(),
        script_type: "movie".into(),
        characters: "JANE and MACK".into(),
        plot_idea: "A heist goes wrong.".into(),
        scene_count,
    }
}

#[tokio::test]
async fn delete_middle_scene_renumbers_to_one_and_two() {
    let repo = MemoryScriptRepository::new();
    let script = repo
        .create(
            meta(),
            vec![
                SceneSeed::new("INT. A", "Day"),
                SceneSeed::new("INT. B", "Day"),
                SceneSeed::new("INT. C", "Day"),
            ],
        )
        .await
        .unwrap();

    let middle = *script.scenes()[1].id();
    let after = repo
        .delete_scene(*script.id(), middle)
        .await
        .unwrap()
        .expect("script exists");

    let numbers: Vec<u32> = after.scenes().iter().map(|s| *s.scene_number()).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[tokio::test]
async fn generate_edit_refine_export() {
    let driver = CannedDriver;
    let repo = MemoryScriptRepository::new();

    // Generate a three-scene script through the action boundary.
    let outcome = generate_script(&driver, &request(3)).await;
    assert!(outcome.success);
    let drafts = outcome.data.unwrap();
    let seeds: Vec<SceneSeed> = drafts
        .into_iter()
        .map(|d| {
            SceneSeed::new(d.location, d.time_of_day)
                .with_description(d.description)
                .with_dialogue(d.dialogue)
                .with_ai_generated(true)
        })
        .collect();
    let mut script = repo.create(meta(), seeds).await.unwrap();
    assert_eq!(script.scenes().len(), 3);

    // Hand-edit scene 2 and refine everything after it.
    let mut tracker = EditTracker::new();
    let edited = *script.scenes()[1].id();
    script.update_scene(edited, SceneUpdate::default().with_dialogue("JANE\nWe walk away."));
    tracker.mark(1);

    let mut orchestrator = ContinuityOrchestrator::new(driver);
    let report = orchestrator
        .refine(&mut script, &mut tracker)
        .await
        .unwrap();
    assert_eq!(report.applied, 1);
    assert_eq!(script.scenes()[1].dialogue(), "JANE\nWe walk away.");
    assert_eq!(script.scenes()[2].description(), "New action (refined 0).");

    // Persist the merged result and export it.
    assert!(repo.save(&script).await.unwrap());
    let stored = repo.get(*script.id()).await.unwrap().unwrap();
    let pdf = export_script(&stored).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}
