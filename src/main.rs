extern crate anyhow;
extern crate cgmath;
extern crate env_logger;
extern crate gl;
extern crate glutin;
#[macro_use]
extern crate log;

#[macro_use]
mod gl_api;
mod config;
mod render;
mod triangle;
mod window;

use anyhow::Context;
use std::process;

use config::Config;
use gl_api::info::ContextInfo;
use render::Scene;
use window::Window;

const DEFAULT_LOG_FILTER: &str = "info";

/// `RUST_LOG` when set, otherwise `info` so the driver details still show.
fn log_filter(rust_log: Option<String>) -> String {
    match rust_log {
        Some(filter) if !filter.trim().is_empty() => filter,
        _ => DEFAULT_LOG_FILTER.to_owned(),
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .parse_filters(&log_filter(std::env::var("RUST_LOG").ok()))
        .init();
    debug!("logging initialized");
}

fn main() {
    init_logger();

    if let Err(err) = run(&Config::default()) {
        error!("{:#}", err);
        process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let mut window = Window::open(&config.window)?;
    let gl = window.load_gl()?;

    let info = ContextInfo::query(&gl).context("could not query the GL context")?;
    info.log();
    info.require(config.window.gl_version)?;

    // Declared after `window` so it is dropped first, while the context is
    // still alive.
    let scene = Scene::load(&gl, &config.shaders).context("could not build the scene")?;

    render::run(&mut window, &scene)?;
    Ok(())
}
