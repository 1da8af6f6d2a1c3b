use geng::prelude::*;

mod banner;
pub mod canvas;
pub mod config;
pub mod confetti;
mod controls;
mod ctx;
pub mod easings;
pub mod entries;
mod game_state;
mod loading;
pub mod palette;
pub mod render;
pub mod session;
pub mod spin;
pub mod wheel;

use easings::*;

use ctx::Ctx;

async fn run(geng: Geng, args: CliArgs) {
    let ctx = match future::select(
        Ctx::load(&geng).boxed_local(),
        loading::run(&geng).boxed_local(),
    )
    .await
    {
        future::Either::Left((Ok(ctx), _)) => ctx,
        future::Either::Left((Err(e), _)) => {
            log::error!("failed to load assets: {e:#}");
            return;
        }
        future::Either::Right(_) => return,
    };
    let ctx = &ctx;
    let mut state = game_state::GameState::new(ctx);
    state.add_initial_entries(&args.entry, args.names.as_deref());
    state.run().await;
}

#[derive(clap::Parser)]
struct CliArgs {
    /// Entry to put on the wheel, can be repeated
    #[clap(long)]
    entry: Vec<String>,
    /// Newline separated list of entries
    #[clap(long)]
    names: Option<String>,
    #[clap(flatten)]
    geng: geng::CliArgs,
}

pub fn main() {
    logger::init();
    geng::setup_panic_handler();

    let args: CliArgs = cli::parse();
    let mut options = geng::ContextOptions::default();
    options.window.title = format!(
        "{name} v{version}",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    );
    options.with_cli(&args.geng);

    Geng::run_with(&options, move |geng| run(geng, args));
}
