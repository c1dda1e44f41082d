use pg_check_conn::cli::{INTERNAL_ERROR, start};
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = match start::start().await {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            // not a connection outcome, keep it off stdout
            eprintln!("Error: {err:#}");
            INTERNAL_ERROR
        }
    };

    process::exit(code);
}
