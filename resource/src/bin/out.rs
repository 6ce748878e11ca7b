//! out - create a deployment or a deployment status
//!
//! File parameters are resolved against the sources directory given as the
//! first argument.

use std::env;

use deployment_resource::cli::{
    directory_arg, fatal, handle_version_flag, read_request, usage, write_response,
};
use deployment_resource::commands::out::OutCommand;
use deployment_resource::http::client::GitHubClient;
use deployment_resource::logs::init_logging;
use deployment_resource::models::request::OutRequest;
use deployment_resource::params::provenance::BuildMetadata;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    if handle_version_flag(&args) {
        return;
    }

    let Some(source_dir) = directory_arg(&args) else {
        usage(args.first().map_or("out", String::as_str), "sources");
    };

    let request: OutRequest =
        read_request().unwrap_or_else(|e| fatal("reading request from stdin", e));

    if let Err(e) = init_logging(request.source.log_options()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let github = GitHubClient::new(&request.source)
        .unwrap_or_else(|e| fatal("constructing github client", e));

    let response = OutCommand::new(&github, BuildMetadata::from_env())
        .run(&source_dir, &request)
        .await
        .unwrap_or_else(|e| fatal("running command", e));

    if let Err(e) = write_response(&response) {
        fatal("writing response to stdout", e);
    }
}
