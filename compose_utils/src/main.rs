use std::env;
use clap::Parser;
use compose_utils::args::Args;
use compose_utils::cli::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init_timed();

    run(Args::parse()).await
}
