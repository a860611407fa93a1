//! End-to-end pipeline tests against mock drivers.

mod common;

use common::{FailingDriver, MockDriver, image_response, png_bytes, text_response, ten_page_script};
use storybook_book::{
    BookModels, BookPipeline, MANIFEST_FILE, PLACEHOLDER_SIZE, SaveOutcome, page_filename,
};
use storybook_core::{BookManifest, GenerateResponse, Input, MediaSource, PAGE_COUNT};
use storybook_interface::{NullProgress, ProgressSink};

fn full_run_responses() -> Vec<GenerateResponse> {
    let mut responses = vec![text_response(ten_page_script())];
    for n in 1..=PAGE_COUNT {
        responses.push(image_response(png_bytes(40, 40, n as u8 * 10)));
    }
    responses
}

fn test_models() -> BookModels {
    BookModels::new(
        "test/text-model".to_string(),
        "test/image-model".to_string(),
    )
}

/// Progress sink that records stage strings.
#[derive(Default)]
struct RecordingProgress {
    stages: Vec<(f32, String)>,
}

impl ProgressSink for RecordingProgress {
    fn update(&mut self, fraction: f32, stage: &str) {
        self.stages.push((fraction, stage.to_string()));
    }
}

#[tokio::test]
async fn full_run_saves_a_complete_book() {
    let root = tempfile::tempdir().unwrap();
    let driver = MockDriver::new(full_run_responses());
    let pipeline = BookPipeline::new(driver.clone())
        .with_models(test_models())
        .with_output_root(root.path());

    let run = pipeline
        .generate("a brave mouse", &mut NullProgress)
        .await
        .unwrap();

    assert_eq!(run.storyboard().len(), PAGE_COUNT);
    assert!(run.script_degraded().is_none());
    for (index, entry) in run.storyboard().iter().enumerate() {
        assert_eq!(entry.page().number(), index + 1);
        assert_eq!(
            entry.page().text(),
            format!("Sentence number {}.", index + 1)
        );
        assert!(entry.degraded().is_none());
        assert_eq!(entry.image().width(), 40);
    }

    let folder = run.save().path().expect("save should succeed").to_path_buf();
    assert!(folder.starts_with(root.path()));
    for n in 1..=PAGE_COUNT {
        assert!(folder.join(page_filename(n)).is_file());
    }
    let raw = std::fs::read_to_string(folder.join(MANIFEST_FILE)).unwrap();
    let manifest: BookManifest = serde_json::from_str(&raw).unwrap();
    assert_eq!(manifest.prompt(), "a brave mouse");
    assert_eq!(manifest.pages().len(), PAGE_COUNT);

    assert!(run.status().contains("Successfully generated a 10-page children's book!"));
    assert!(run.status().contains("Prompt: a brave mouse"));
    assert!(run.status().contains(&format!("Saved to: {}", folder.display())));

    // One script call plus ten illustration calls.
    assert_eq!(driver.requests().len(), 1 + PAGE_COUNT);
}

#[tokio::test]
async fn later_illustration_calls_carry_page_ones_exact_bytes() {
    let root = tempfile::tempdir().unwrap();
    let driver = MockDriver::new(full_run_responses());
    let pipeline = BookPipeline::new(driver.clone())
        .with_models(test_models())
        .with_output_root(root.path());

    pipeline
        .generate("a brave mouse", &mut NullProgress)
        .await
        .unwrap();

    let requests = driver.requests();
    let page_one_bytes = png_bytes(40, 40, 10);

    // Request 0 is the script call; request 1 is page 1 with no reference.
    assert_eq!(requests[1].messages[0].content.len(), 1);

    // Requests for pages 2..=10 attach page 1's bytes unmodified.
    for request in &requests[2..] {
        let content = &request.messages[0].content;
        assert_eq!(content.len(), 3);
        let Input::Image { source, .. } = &content[1] else {
            panic!("expected a reference image part");
        };
        assert_eq!(source, &MediaSource::Binary(page_one_bytes.clone()));
    }
}

#[tokio::test]
async fn progress_reports_every_stage_in_order() {
    let root = tempfile::tempdir().unwrap();
    let driver = MockDriver::new(full_run_responses());
    let pipeline = BookPipeline::new(driver)
        .with_models(test_models())
        .with_output_root(root.path());

    let mut progress = RecordingProgress::default();
    pipeline
        .generate("a brave mouse", &mut progress)
        .await
        .unwrap();

    // Script, ten pages, save.
    assert_eq!(progress.stages.len(), 1 + PAGE_COUNT + 1);
    assert_eq!(progress.stages[0].1, "Generating story script...");
    assert_eq!(
        progress.stages[1].1,
        "Generating image for page 1/10 (establishing style)..."
    );
    assert_eq!(
        progress.stages[2].1,
        "Generating image for page 2/10 (matching style)..."
    );
    assert_eq!(progress.stages[11].1, "Saving book to folder...");

    let fractions: Vec<f32> = progress.stages.iter().map(|(f, _)| *f).collect();
    assert!(fractions.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(fractions[0], 0.0);
    assert_eq!(*fractions.last().unwrap(), 1.0);
}

#[tokio::test]
async fn empty_prompt_fails_before_any_network_call() {
    let driver = MockDriver::new(Vec::new());
    let root = tempfile::tempdir().unwrap();
    let pipeline = BookPipeline::new(driver.clone())
        .with_models(test_models())
        .with_output_root(root.path());

    let err = pipeline.generate("   ", &mut NullProgress).await.unwrap_err();
    assert!(err.to_string().contains("cannot be empty"));

    assert!(driver.requests().is_empty());
    // No folder was created.
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn empty_script_response_aborts_the_run() {
    let driver = MockDriver::new(vec![text_response("")]);
    let root = tempfile::tempdir().unwrap();
    let pipeline = BookPipeline::new(driver)
        .with_models(test_models())
        .with_output_root(root.path());

    let err = pipeline
        .generate("a brave mouse", &mut NullProgress)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no pages"));
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn failed_backend_degrades_to_error_pages_and_placeholders() {
    let root = tempfile::tempdir().unwrap();
    let pipeline = BookPipeline::new(FailingDriver)
        .with_models(test_models())
        .with_output_root(root.path());

    let run = pipeline
        .generate("a brave mouse", &mut NullProgress)
        .await
        .unwrap();

    assert!(run.script_degraded().is_some());
    assert_eq!(run.storyboard().len(), PAGE_COUNT);
    for entry in run.storyboard() {
        assert!(entry.page().text().starts_with("Error generating story: "));
        assert!(entry.degraded().is_some());
        assert_eq!(entry.image().width(), PLACEHOLDER_SIZE);
    }

    // A degraded book still saves.
    assert!(run.save().path().is_some());
}

#[tokio::test]
async fn save_failure_downgrades_to_a_warning_status() {
    let root = tempfile::tempdir().unwrap();
    let blocker = root.path().join("blocked");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let driver = MockDriver::new(full_run_responses());
    let pipeline = BookPipeline::new(driver)
        .with_models(test_models())
        .with_output_root(&blocker);

    let run = pipeline
        .generate("a brave mouse", &mut NullProgress)
        .await
        .unwrap();

    assert!(matches!(run.save(), SaveOutcome::Failed(_)));
    assert!(run.status().contains("Successfully generated a 10-page children's book!"));
    assert!(run.status().contains("Warning: could not save to folder:"));
    assert_eq!(run.storyboard().len(), PAGE_COUNT);
}
