use std::process::ExitCode;

use utoipa::OpenApi;
use volley_score_back::services::documentation::ApiDoc;

fn main() -> ExitCode {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to render OpenAPI document: {err}");
            ExitCode::FAILURE
        }
    }
}
