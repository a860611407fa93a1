//! Story script generation and parsing.

use storybook_core::{GenerateRequest, Message, PAGE_COUNT, StoryPrompt};
use storybook_interface::StorybookDriver;
use tracing::{debug, warn};

/// System instruction for the script-generation call.
///
/// The response format it demands (`"Page X: "` lines) is what
/// [`parse_script`] expects.
pub const SCRIPT_SYSTEM_INSTRUCTION: &str = "You are a children's book author. Generate a 10-page children's story script.
Each page should have exactly 1-2 sentences that are engaging, age-appropriate, and tell a cohesive story.
Format your response as exactly 10 pages, numbered 1-10, with each page on its own line starting with \"Page X: \" followed by the text.";

/// The result of a script-generation call.
///
/// Always carries the page texts the pipeline will illustrate. When the
/// generation call failed, `degraded` holds the error message and every page
/// carries an error placeholder text, so callers always receive a full page
/// set and can still tell a real story from a degraded one without
/// inspecting the text.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct ScriptOutcome {
    /// Page texts in page order
    pages: Vec<String>,
    /// Error message when the generation call failed
    degraded: Option<String>,
}

impl ScriptOutcome {
    /// Whether this script came from the degraded error path.
    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }
}

/// Generate the ten-page story script for a prompt.
///
/// Sends one request to the text model. On transport or API failure the
/// outcome degrades to ten copies of an error page rather than propagating
/// the failure; the pipeline never aborts on script generation.
pub async fn generate_script<D: StorybookDriver>(
    driver: &D,
    model: &str,
    prompt: &StoryPrompt,
) -> ScriptOutcome {
    let request = GenerateRequest {
        messages: vec![
            Message::system(SCRIPT_SYSTEM_INSTRUCTION),
            Message::user(format!(
                "Write a 10-page children's story about: {}",
                prompt.as_str()
            )),
        ],
        temperature: Some(0.7),
        model: Some(model.to_string()),
        modalities: Vec::new(),
    };

    match driver.generate(&request).await {
        Ok(response) => {
            let raw = response.text().unwrap_or_default();
            let pages = parse_script(raw);
            debug!(pages = pages.len(), "Parsed story script");
            ScriptOutcome {
                pages,
                degraded: None,
            }
        }
        Err(e) => {
            warn!(error = %e, "Script generation failed, degrading to error pages");
            let message = e.to_string();
            ScriptOutcome {
                pages: vec![format!("Error generating story: {message}"); PAGE_COUNT],
                degraded: Some(message),
            }
        }
    }
}

/// Parse a model response into at most ten page texts.
///
/// Primary parse: every line starting with the literal `Page` contributes
/// the text after its first colon, in encounter order. The numeric index is
/// deliberately not validated against position; a misnumbered line still
/// lands at its encounter position.
///
/// If the primary parse yields fewer than ten pages it is discarded
/// entirely in favor of a sentence-splitting fallback over the raw text.
/// The fallback never runs when the primary parse already reached ten.
///
/// # Examples
///
/// ```
/// use storybook_book::parse_script;
///
/// let raw = "Page 1: A mouse.\nPage 2: A moon.";
/// // Fewer than ten Page lines, so the sentence fallback takes over.
/// let pages = parse_script(raw);
/// assert_eq!(pages, vec!["Page 1: A mouse.", "Page 2: A moon."]);
/// ```
pub fn parse_script(raw: &str) -> Vec<String> {
    let mut pages: Vec<String> = raw
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("Page"))
        .filter_map(|line| line.split_once(':').map(|(_, text)| text.trim().to_string()))
        .collect();

    if pages.len() < PAGE_COUNT {
        pages = sentence_fallback(raw);
    }

    pages.truncate(PAGE_COUNT);
    pages
}

/// Split the raw response on periods and take the first ten non-empty
/// fragments, re-appending the period each fragment lost in the split.
fn sentence_fallback(raw: &str) -> Vec<String> {
    raw.split('.')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .take(PAGE_COUNT)
        .map(|fragment| format!("{fragment}."))
        .collect()
}
