// Preview binary: resolves one light set from a data folder and prints it as JSON.

use std::time::Duration;

use ambient_lights::light_runtime::session::SceneSession;
use ambient_lights::preview::PreviewArgs;

fn print_light_set(session: &SceneSession, args: &PreviewArgs) -> anyhow::Result<()> {
    let Some(light_set) = session.light_set(&args.tick()) else {
        log::warn!(
            "no lighting data for scene {} in {}, nothing to resolve",
            session.scene(),
            session.data_dir().display()
        );
        return Ok(());
    };
    for (name, light) in light_set.iter() {
        log::debug!(
            "{name}: color {:?}, intensity {}, range {}",
            light.color,
            light.intensity,
            light.range
        );
    }
    println!("{}", serde_json::to_string_pretty(&light_set)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = PreviewArgs::from_env_args()?;
    log::info!(
        "scene: {}, period: {} @ {}, weather: {} <- {} @ {}",
        args.scene,
        args.period,
        args.period_progress,
        args.weather,
        args.previous_weather,
        args.weather_progress
    );

    let mut session = SceneSession::load(&args.data_dir, &args.scene)?;
    print_light_set(&session, &args)?;

    if !args.watch {
        return Ok(());
    }
    if !session.watch() {
        anyhow::bail!("failed to watch {}", session.data_dir().display());
    }

    loop {
        std::thread::sleep(Duration::from_millis(250));
        if session.poll_reload() {
            print_light_set(&session, &args)?;
        }
    }
}
