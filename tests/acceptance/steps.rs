use crate::GhIssuesWorld;
use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONFIG_FILENAME: &str = ".ghissuescli";
const ISSUES_PATH: &str = "/repos/owner/repo/issues";

fn workdir(world: &mut GhIssuesWorld) -> PathBuf {
    world
        .workdir
        .get_or_insert_with(|| tempfile::tempdir().expect("Failed to create temp workdir"))
        .path()
        .to_path_buf()
}

fn server(world: &GhIssuesWorld) -> &MockServer {
    world
        .server
        .as_ref()
        .expect("Scenario must start with a GitHub API mock server")
}

fn write_config(world: &mut GhIssuesWorld) {
    let api_base_url = server(world).uri();
    let mut config = serde_json::json!({
        "token": "test-token",
        "owner": "owner",
        "repo": "repo",
        "api_base_url": api_base_url,
    });
    if let Some(editor) = &world.editor {
        config["editor"] = serde_json::Value::String(editor.clone());
    }
    let config_path = workdir(world).join(CONFIG_FILENAME);
    std::fs::write(&config_path, config.to_string())
        .unwrap_or_else(|e| panic!("Failed to write config file {:?}: {}", config_path, e));
}

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

async fn run_binary(world: &mut GhIssuesWorld, args: &str, input: Option<String>) {
    let dir = workdir(world);
    let mut child = tokio::process::Command::new(env!("CARGO_BIN_EXE_ghissues"))
        .args(args.split_whitespace())
        .current_dir(&dir)
        .env_remove("EDITOR")
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute ghissues");

    let mut stdin = child.stdin.take().expect("stdin is piped");
    if let Some(input) = input {
        stdin
            .write_all(input.as_bytes())
            .await
            .expect("Failed to write stdin");
    }
    drop(stdin);

    let output = child
        .wait_with_output()
        .await
        .expect("Failed to wait for ghissues");
    world.captured_output = String::from_utf8(output.stdout).expect("Invalid UTF-8");
    world.captured_error = String::from_utf8(output.stderr).expect("Invalid UTF-8");
    world.command_status = Some(output.status);
}

#[given("a GitHub API mock server")]
async fn given_mock_server(world: &mut GhIssuesWorld) {
    world.server = Some(MockServer::start().await);
    write_config(world);
}

#[given("no config file")]
async fn given_no_config_file(world: &mut GhIssuesWorld) {
    let config_path = workdir(world).join(CONFIG_FILENAME);
    let _ = std::fs::remove_file(config_path);
}

#[given(regex = r#"^the editor writes "(.*)"$"#)]
async fn given_editor_writes(world: &mut GhIssuesWorld, content: String) {
    let script = workdir(world).join("fake-editor.sh");
    std::fs::write(
        &script,
        format!("#!/bin/sh\nprintf '{}' > \"$1\"\n", content),
    )
    .expect("Failed to write fake editor");
    world.editor = Some(format!("sh {}", script.display()));
    write_config(world);
}

#[given(regex = r#"^the server lists issues '(.*)'$"#)]
async fn given_server_lists_issues(world: &mut GhIssuesWorld, body: String) {
    Mock::given(method("GET"))
        .and(path(ISSUES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server(world))
        .await;
}

#[given(regex = r#"^the server answers (GET|PATCH) on issue (\d+) with '(.*)'$"#)]
async fn given_server_answers_issue(
    world: &mut GhIssuesWorld,
    verb: String,
    number: u64,
    body: String,
) {
    Mock::given(method(verb.as_str()))
        .and(path(format!("{ISSUES_PATH}/{number}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server(world))
        .await;
}

#[given(regex = r#"^the server answers (GET|PATCH|POST) on issue (\d+) with status (\d+) '(.*)'$"#)]
async fn given_server_answers_issue_status(
    world: &mut GhIssuesWorld,
    verb: String,
    number: u64,
    status: u16,
    body: String,
) {
    Mock::given(method(verb.as_str()))
        .and(path(format!("{ISSUES_PATH}/{number}")))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server(world))
        .await;
}

#[given(regex = r#"^the server answers POST on issues with '(.*)'$"#)]
async fn given_server_answers_create(world: &mut GhIssuesWorld, body: String) {
    Mock::given(method("POST"))
        .and(path(ISSUES_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_string(body))
        .mount(server(world))
        .await;
}

#[given(regex = r#"^the server answers the issue list with status (\d+) '(.*)'$"#)]
async fn given_server_list_status(world: &mut GhIssuesWorld, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(ISSUES_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server(world))
        .await;
}

#[when(regex = r"^I run `ghissues(.*)`$")]
async fn when_run_ghissues(world: &mut GhIssuesWorld, args: String) {
    run_binary(world, &args, None).await;
}

#[when(regex = r#"^I run `ghissues(.*)` with input "(.*)"$"#)]
async fn when_run_ghissues_with_input(world: &mut GhIssuesWorld, args: String, input: String) {
    run_binary(world, &args, Some(unescape(&input))).await;
}

#[then("the command should succeed")]
async fn then_command_succeeds(world: &mut GhIssuesWorld) {
    assert!(
        world.command_status.is_some_and(|s| s.success()),
        "Command failed with status: {:?}\nstderr:\n{}",
        world.command_status,
        world.captured_error
    );
}

#[then(regex = r#"^the command should fail with "(.*)"$"#)]
async fn then_command_fails_with(world: &mut GhIssuesWorld, expected: String) {
    assert!(
        world.command_status.is_some_and(|s| !s.success()),
        "Command unexpectedly succeeded: {:?}",
        world.command_status
    );
    assert!(
        world.captured_error.contains(&expected),
        "Expected error containing '{}', but got:\n---\n{}\n---",
        expected,
        world.captured_error
    );
}

#[then("the output should be:")]
async fn then_output_should_be(world: &mut GhIssuesWorld, step: &Step) {
    let expected = step.docstring.as_deref().unwrap_or_default();
    assert_eq!(
        world.captured_output.trim(),
        expected.trim(),
        "Unexpected output:\n---\n{}\n---",
        world.captured_output
    );
}

#[then(regex = r#"^the output should contain "(.*)"$"#)]
async fn then_output_should_contain(world: &mut GhIssuesWorld, expected: String) {
    assert!(
        world.captured_output.contains(&expected),
        "Expected output containing '{}', but got:\n---\n{}\n---",
        expected,
        world.captured_output
    );
}

#[then(regex = r"^the server should have received (\d+) requests?$")]
async fn then_server_received(world: &mut GhIssuesWorld, count: usize) {
    let received = server(world)
        .received_requests()
        .await
        .expect("Request recording is enabled");
    assert_eq!(received.len(), count, "Received: {:?}", received);
}

#[then(regex = r#"^the last request should be a (GET|POST|PATCH) with body '(.*)'$"#)]
async fn then_last_request_body(world: &mut GhIssuesWorld, verb: String, body: String) {
    let received = server(world)
        .received_requests()
        .await
        .expect("Request recording is enabled");
    let last = received.last().expect("No request received");
    assert_eq!(last.method.as_str(), verb);
    let actual: serde_json::Value = serde_json::from_slice(&last.body).expect("JSON body");
    let expected: serde_json::Value = serde_json::from_str(&body).expect("JSON expectation");
    assert_eq!(actual, expected);
}

#[then(regex = r#"^the config file should contain owner "(.*)" and repo "(.*)"$"#)]
async fn then_config_contains(world: &mut GhIssuesWorld, owner: String, repo: String) {
    let config_path = workdir(world).join(CONFIG_FILENAME);
    let content = std::fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read config file {:?}: {}", config_path, e));
    let config: serde_json::Value = serde_json::from_str(&content).expect("Config is JSON");
    assert_eq!(config["owner"], owner.as_str());
    assert_eq!(config["repo"], repo.as_str());
    assert_eq!(config["api_base_url"], "https://api.github.com");
}
