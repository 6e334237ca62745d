//! Similarity finder terminal front end.
mod platform;

fn main() -> anyhow::Result<()> {
    platform::run_app()
}
