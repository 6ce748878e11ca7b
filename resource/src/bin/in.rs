//! in - fetch a deployment into the destination directory

use std::env;

use deployment_resource::cli::{
    directory_arg, fatal, handle_version_flag, read_request, usage, write_response,
};
use deployment_resource::commands::in_command::InCommand;
use deployment_resource::http::client::GitHubClient;
use deployment_resource::logs::init_logging;
use deployment_resource::models::request::InRequest;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    if handle_version_flag(&args) {
        return;
    }

    let Some(dest_dir) = directory_arg(&args) else {
        usage(args.first().map_or("in", String::as_str), "destination");
    };

    let request: InRequest =
        read_request().unwrap_or_else(|e| fatal("reading request from stdin", e));

    if let Err(e) = init_logging(request.source.log_options()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let github = GitHubClient::new(&request.source)
        .unwrap_or_else(|e| fatal("constructing github client", e));

    let response = InCommand::new(&github)
        .run(&dest_dir, &request)
        .await
        .unwrap_or_else(|e| fatal("running command", e));

    if let Err(e) = write_response(&response) {
        fatal("writing response to stdout", e);
    }
}
