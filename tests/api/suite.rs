use crate::common::{MockStoryApi, TEST_ACCESS_TOKEN, TEST_STORY_ID};
use claims::assert_matches;
use story_spoilers::suite::{Step, StepError, StepOutcome, SuiteReport, run_suite};
use wiremock::ResponseTemplate;

/// Mounts every endpoint except story creation, which answers with `create`.
async fn api_with_create_response(create: ResponseTemplate) -> MockStoryApi {
    let api = MockStoryApi::start().await;
    api.mount_login(TEST_ACCESS_TOKEN).await;
    api.mount_create(create).await;
    api.mount_create_validation().await;
    api.mount_edit().await;
    api.mount_edit_unknown().await;
    api.mount_list(serde_json::json!([{ "title": "someone else's story" }]))
        .await;
    api.mount_delete_refusal().await;
    api
}

fn failure_of(report: &SuiteReport, step: Step) -> &StepError {
    match report.outcome_of(step) {
        Some(StepOutcome::Failed(e)) => e,
        other => panic!("Expected {} to fail, got {:?}", step, other),
    }
}

fn assert_passed(report: &SuiteReport, steps: &[Step]) {
    for step in steps {
        assert!(
            matches!(report.outcome_of(*step), Some(StepOutcome::Passed)),
            "{} did not pass:\n{}",
            step,
            report
        );
    }
}

#[tokio::test]
async fn suite_passes_against_a_conforming_api() {
    // Arrange
    let api = MockStoryApi::conforming().await;
    let context = api.context().await;

    // Act
    let report = run_suite(&context).await;
    context.teardown();

    // Assert
    assert!(report.all_passed(), "{}", report);
    let sequences: Vec<u8> = report.steps.iter().map(|r| r.step.sequence()).collect();
    assert_eq!(sequences, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[tokio::test]
async fn created_story_id_is_threaded_into_edit_and_delete() {
    // Arrange
    let api = MockStoryApi::conforming().await;
    let context = api.context().await;

    // Act
    run_suite(&context).await;

    // Assert
    let edited_paths: Vec<String> = api
        .requests_to("/api/Story/Edit/")
        .await
        .iter()
        .map(|r| r.url.path().to_owned())
        .collect();
    assert_eq!(
        edited_paths,
        vec![
            format!("/api/Story/Edit/{}", TEST_STORY_ID),
            "/api/Story/Edit/999".to_string(),
        ]
    );

    let deleted_paths: Vec<String> = api
        .requests_to("/api/Story/Delete/")
        .await
        .iter()
        .map(|r| r.url.path().to_owned())
        .collect();
    assert_eq!(
        deleted_paths,
        vec![
            format!("/api/Story/Delete/{}", TEST_STORY_ID),
            "/api/Story/Delete/non-existent-id-999".to_string(),
            format!("/api/Story/Delete/{}", TEST_STORY_ID),
        ]
    );
}

#[tokio::test]
async fn edit_step_sends_the_edited_title() {
    // Arrange
    let api = MockStoryApi::conforming().await;
    let context = api.context().await;

    // Act
    run_suite(&context).await;

    // Assert
    let edits = api
        .requests_to(&format!("/api/Story/Edit/{}", TEST_STORY_ID))
        .await;
    assert_eq!(edits.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&edits[0].body).unwrap();
    assert_eq!(body["Title"], "EditedMystery");
    assert_eq!(body["Description"], "Обновено описание със свежа интрига!");
    assert_eq!(body["Url"], "");
}

#[tokio::test]
async fn failed_create_cascades_to_the_steps_needing_the_story() {
    // Arrange
    let api = api_with_create_response(ResponseTemplate::new(500)).await;
    let context = api.context().await;

    // Act
    let report = run_suite(&context).await;

    // Assert
    assert_matches!(
        failure_of(&report, Step::CreateStory),
        StepError::UnexpectedStatus { actual, .. } if actual.as_u16() == 500
    );
    for step in [
        Step::EditStoryTitle,
        Step::DeleteStory,
        Step::DeleteAlreadyDeletedStory,
    ] {
        assert_matches!(failure_of(&report, step), StepError::MissingStoryId);
    }
    assert_passed(
        &report,
        &[
            Step::ListStories,
            Step::CreateStoryWithoutRequiredFields,
            Step::EditNonExistingStory,
            Step::DeleteNonExistingStory,
        ],
    );
    // Only the fabricated ids were sent
    assert_eq!(api.requests_to("/api/Story/Edit/").await.len(), 1);
    assert_eq!(api.requests_to("/api/Story/Delete/").await.len(), 1);
}

#[tokio::test]
async fn create_without_story_id_fails_the_create_step() {
    // Arrange
    let api = api_with_create_response(
        ResponseTemplate::new(201).set_body_json(serde_json::json!({ "msg": "Created" })),
    )
    .await;
    let context = api.context().await;

    // Act
    let report = run_suite(&context).await;

    // Assert
    assert_matches!(
        failure_of(&report, Step::CreateStory),
        StepError::MissingField("storyId")
    );
}

#[tokio::test]
async fn blank_story_id_fails_the_create_step() {
    // Arrange
    let api = api_with_create_response(
        ResponseTemplate::new(201).set_body_json(serde_json::json!({ "storyId": "" })),
    )
    .await;
    let context = api.context().await;

    // Act
    let report = run_suite(&context).await;

    // Assert
    assert_matches!(
        failure_of(&report, Step::CreateStory),
        StepError::MissingField("storyId")
    );
    assert_matches!(
        failure_of(&report, Step::EditStoryTitle),
        StepError::MissingStoryId
    );
}

#[tokio::test]
async fn dot_story_id_is_never_sent_as_a_route() {
    // Arrange
    let api = api_with_create_response(
        ResponseTemplate::new(201).set_body_json(serde_json::json!({ "storyId": ".." })),
    )
    .await;
    let context = api.context().await;

    // Act
    let report = run_suite(&context).await;

    // Assert
    assert_matches!(
        failure_of(&report, Step::CreateStory),
        StepError::MissingField("storyId")
    );
    assert_matches!(
        failure_of(&report, Step::DeleteStory),
        StepError::MissingStoryId
    );
    let deleted_paths: Vec<String> = api
        .requests_to("/api/Story/Delete")
        .await
        .iter()
        .map(|r| r.url.path().to_owned())
        .collect();
    assert_eq!(
        deleted_paths,
        vec!["/api/Story/Delete/non-existent-id-999".to_string()]
    );
}

#[tokio::test]
async fn empty_story_list_fails_only_the_list_step() {
    // Arrange
    let api = MockStoryApi::start().await;
    api.mount_login(TEST_ACCESS_TOKEN).await;
    api.mount_create(
        ResponseTemplate::new(201).set_body_json(serde_json::json!({ "storyId": TEST_STORY_ID })),
    )
    .await;
    api.mount_create_validation().await;
    api.mount_edit().await;
    api.mount_edit_unknown().await;
    api.mount_list(serde_json::json!([])).await;
    api.mount_delete(
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({ "msg": "Deleted successfully!" })),
    )
    .await;
    api.mount_delete_refusal().await;
    let context = api.context().await;

    // Act
    let report = run_suite(&context).await;

    // Assert
    assert_matches!(
        failure_of(&report, Step::ListStories),
        StepError::EmptyStoryList
    );
    assert_eq!(report.failures().count(), 1, "{}", report);
}

#[tokio::test]
async fn unexpected_delete_message_fails_the_delete_step() {
    // Arrange
    let api = MockStoryApi::start().await;
    api.mount_login(TEST_ACCESS_TOKEN).await;
    api.mount_create(
        ResponseTemplate::new(201).set_body_json(serde_json::json!({ "storyId": TEST_STORY_ID })),
    )
    .await;
    api.mount_delete(
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "msg": "Deleted" })),
    )
    .await;
    api.mount_delete_refusal().await;
    let context = api.context().await;

    // Act
    let report = run_suite(&context).await;

    // Assert
    assert_matches!(
        failure_of(&report, Step::DeleteStory),
        StepError::MessageMismatch { actual, .. } if actual == "Deleted"
    );
    // The story is gone all the same, so deleting it again is refused
    assert_passed(&report, &[Step::DeleteAlreadyDeletedStory]);
}

#[tokio::test]
async fn report_lists_every_step_with_its_outcome() {
    // Arrange
    let api = api_with_create_response(ResponseTemplate::new(500)).await;
    let context = api.context().await;

    // Act
    let report = run_suite(&context).await;
    let rendered = report.to_string();

    // Assert
    assert!(rendered.contains("[1] create story returns story id ... FAILED"));
    assert!(rendered.contains("[7] delete non-existing story spoiler returns bad request ... ok"));
    assert!(rendered.ends_with("4 passed; 4 failed"), "{}", rendered);
}
