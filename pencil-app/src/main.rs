use pencil::{run_sandbox, GameLoopConfig, SandboxConfig, WindowSettings};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("Drag with the left button to draw, or to grab a circle or box");
    log::info!("C: circle, B: box, Backspace/Delete: clear, Escape: quit");

    let settings = WindowSettings::default().title("Pencil Physics");
    let config = GameLoopConfig::default();
    let sandbox = SandboxConfig::default();

    run_sandbox(settings, config, sandbox)
}
