use crate::suite::context::{StoryFixture, SuiteContext};
use crate::suite::expectations::StepError;
use crate::suite::steps;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateStory,
    EditStoryTitle,
    ListStories,
    DeleteStory,
    CreateStoryWithoutRequiredFields,
    EditNonExistingStory,
    DeleteNonExistingStory,
    DeleteAlreadyDeletedStory,
}

impl Step {
    /// Execution order of the suite.
    pub const ALL: [Step; 8] = [
        Step::CreateStory,
        Step::EditStoryTitle,
        Step::ListStories,
        Step::DeleteStory,
        Step::CreateStoryWithoutRequiredFields,
        Step::EditNonExistingStory,
        Step::DeleteNonExistingStory,
        Step::DeleteAlreadyDeletedStory,
    ];

    pub fn sequence(&self) -> u8 {
        match self {
            Step::CreateStory => 1,
            Step::EditStoryTitle => 2,
            Step::ListStories => 3,
            Step::DeleteStory => 4,
            Step::CreateStoryWithoutRequiredFields => 5,
            Step::EditNonExistingStory => 6,
            Step::DeleteNonExistingStory => 7,
            Step::DeleteAlreadyDeletedStory => 8,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Step::CreateStory => "create story returns story id",
            Step::EditStoryTitle => "edit story title returns ok",
            Step::ListStories => "get all story spoilers returns list of stories",
            Step::DeleteStory => "delete story spoiler returns ok and confirmation message",
            Step::CreateStoryWithoutRequiredFields => {
                "create story without required fields returns bad request"
            }
            Step::EditNonExistingStory => "edit non-existing story spoiler returns not found",
            Step::DeleteNonExistingStory => {
                "delete non-existing story spoiler returns bad request"
            }
            Step::DeleteAlreadyDeletedStory => {
                "delete already deleted story spoiler returns bad request"
            }
        }
    }

    fn needs_story(&self) -> bool {
        matches!(
            self,
            Step::EditStoryTitle | Step::DeleteStory | Step::DeleteAlreadyDeletedStory
        )
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.sequence(), self.name())
    }
}

#[derive(Debug)]
pub enum StepOutcome {
    Passed,
    Failed(StepError),
}

#[derive(Debug)]
pub struct StepReport {
    pub step: Step,
    pub outcome: StepOutcome,
    pub elapsed: Duration,
}

impl StepReport {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, StepOutcome::Passed)
    }
}

#[derive(Debug, Default)]
pub struct SuiteReport {
    pub steps: Vec<StepReport>,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.steps.iter().all(StepReport::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|report| !report.passed())
    }

    pub fn outcome_of(&self, step: Step) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|report| report.step == step)
            .map(|report| &report.outcome)
    }
}

impl std::fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for report in &self.steps {
            match &report.outcome {
                StepOutcome::Passed => writeln!(
                    f,
                    "{} ... ok ({} ms)",
                    report.step,
                    report.elapsed.as_millis()
                )?,
                StepOutcome::Failed(e) => writeln!(
                    f,
                    "{} ... FAILED ({} ms): {}",
                    report.step,
                    report.elapsed.as_millis(),
                    e
                )?,
            }
        }
        let failed = self.failures().count();
        write!(
            f,
            "{} passed; {} failed",
            self.steps.len() - failed,
            failed
        )
    }
}

/// Runs every step in order. A failing step does not stop the run; steps
/// that need the created story fail without a request when there is none.
#[tracing::instrument(name = "Running story suite", skip_all)]
pub async fn run_suite(context: &SuiteContext) -> SuiteReport {
    let mut story: Option<StoryFixture> = None;
    let mut report = SuiteReport::default();

    for step in Step::ALL {
        let started = Instant::now();
        let result = run_step(context, step, story.as_ref()).await;
        let elapsed = started.elapsed();
        let result = result.map(|created| {
            if let Some(created) = created {
                story = Some(created);
            }
        });

        let outcome = match result {
            Ok(()) => {
                tracing::info!(sequence = step.sequence(), "{} passed", step.name());
                StepOutcome::Passed
            }
            Err(e) => {
                tracing::error!(
                    sequence = step.sequence(),
                    error.cause_chain = ?e,
                    error.message = %e,
                    "{} failed",
                    step.name()
                );
                StepOutcome::Failed(e)
            }
        };
        report.steps.push(StepReport {
            step,
            outcome,
            elapsed,
        });
    }

    report
}

/// Runs one step, returning the story it created, if any.
async fn run_step(
    context: &SuiteContext,
    step: Step,
    story: Option<&StoryFixture>,
) -> Result<Option<StoryFixture>, StepError> {
    let outcome = match (step, story) {
        (step, None) if step.needs_story() => Err(StepError::MissingStoryId),
        (Step::CreateStory, _) => return steps::create_story(context).await.map(Some),
        (Step::EditStoryTitle, Some(s)) => steps::edit_story_title(context, s).await,
        (Step::ListStories, _) => steps::list_stories(context).await.map(|_| ()),
        (Step::DeleteStory, Some(s)) => steps::delete_story(context, s).await,
        (Step::CreateStoryWithoutRequiredFields, _) => {
            steps::create_story_without_required_fields(context).await
        }
        (Step::EditNonExistingStory, _) => steps::edit_non_existing_story(context).await,
        (Step::DeleteNonExistingStory, _) => steps::delete_non_existing_story(context).await,
        (Step::DeleteAlreadyDeletedStory, Some(s)) => {
            steps::delete_already_deleted_story(context, s).await
        }
        (_, None) => Err(StepError::MissingStoryId),
    };
    outcome.map(|()| None)
}
