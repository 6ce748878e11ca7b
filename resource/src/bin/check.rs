//! check - emit new deployment versions
//!
//! Reads `{"source": ..., "version": ...}` on stdin and writes the list of
//! versions on stdout.

use std::env;

use deployment_resource::cli::{fatal, handle_version_flag, read_request, write_response};
use deployment_resource::commands::check::CheckCommand;
use deployment_resource::http::client::GitHubClient;
use deployment_resource::logs::init_logging;
use deployment_resource::models::request::CheckRequest;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    if handle_version_flag(&args) {
        return;
    }

    let request: CheckRequest =
        read_request().unwrap_or_else(|e| fatal("reading request from stdin", e));

    if let Err(e) = init_logging(request.source.log_options()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let github = GitHubClient::new(&request.source)
        .unwrap_or_else(|e| fatal("constructing github client", e));

    let versions = CheckCommand::new(&github)
        .run(&request)
        .await
        .unwrap_or_else(|e| fatal("running command", e));

    if let Err(e) = write_response(&versions) {
        fatal("writing response to stdout", e);
    }
}
