//! CLI application for converting colors and controlling bridge lights.
//!
//! Run with: cargo run --example hue_cli -- --help

use clap::{Parser, Subcommand};
use hue_lights_rs::{
    Alert, Bridge, BridgeConfig, Brightness, ColorConverter, GammaMode, HttpTransport, LightState,
    PowerMode, RgbColor,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "hue-cli")]
#[command(about = "Convert colors to CIE xy and control bridge lights", long_about = None)]
struct Cli {
    /// Bridge address (not required for xy)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Whitelisted bridge username (not required for xy)
    #[arg(short, long, global = true)]
    username: Option<String>,

    /// Gamma curve: srgb or legacy
    #[arg(short, long, global = true, default_value = "srgb")]
    gamma: GammaMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the xy chromaticity of a hex (#RRGGBB) or r,g,b color
    Xy {
        /// Color as #RRGGBB, RRGGBB or r,g,b
        color: String,
    },

    /// List all lights
    Lights,

    /// Turn a light on
    On { id: String },

    /// Turn a light off
    Off { id: String },

    /// Set a light's color
    Color {
        id: String,
        /// Color as #RRGGBB, RRGGBB or r,g,b
        color: String,
    },

    /// Set a light's brightness (1-254)
    Brightness {
        id: String,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=254))]
        level: u8,
    },

    /// Blink a light once to identify it
    Blink { id: String },

    /// Set the color of every light in a group
    GroupColor {
        id: String,
        /// Color as #RRGGBB, RRGGBB or r,g,b
        color: String,
    },
}

fn color_state(color: &str, converter: &ColorConverter) -> CliResult<LightState> {
    let mut state = LightState::new();
    if color.contains(',') {
        let rgb: RgbColor = color.parse()?;
        state.color(&rgb, converter);
    } else {
        state.hex(color, converter)?;
    }
    Ok(state)
}

fn connect(cli: &Cli) -> CliResult<Bridge<HttpTransport>> {
    let (Some(host), Some(username)) = (cli.host.as_deref(), cli.username.as_deref()) else {
        return Err("--host and --username are required for this command".into());
    };
    let config = BridgeConfig::new(host, username).with_gamma(cli.gamma);
    Ok(Bridge::new(config))
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();
    let converter = ColorConverter::new(cli.gamma);

    match &cli.command {
        Commands::Xy { color } => {
            let state = color_state(color, &converter)?;
            if let Some(point) = state.get_xy() {
                println!("x = {:.4}, y = {:.4}", point.x(), point.y());
            }
        }
        Commands::Lights => {
            let bridge = connect(&cli)?;
            let mut lights: Vec<_> = bridge.get_lights().await?.into_values().collect();
            lights.sort_by(|a, b| a.id().cmp(b.id()));
            for light in lights {
                let state = light.state();
                let xy = state
                    .xy()
                    .map(|p| format!("({:.4}, {:.4})", p.x(), p.y()))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:>3}  {:<24} {:<4} xy={}",
                    light.id(),
                    light.name(),
                    if state.emitting() { "on" } else { "off" },
                    xy
                );
            }
        }
        Commands::On { id } => {
            let bridge = connect(&cli)?;
            bridge
                .set_light_state(id, &LightState::from(&PowerMode::On))
                .await?;
            println!("Light {id} turned on");
        }
        Commands::Off { id } => {
            let bridge = connect(&cli)?;
            bridge
                .set_light_state(id, &LightState::from(&PowerMode::Off))
                .await?;
            println!("Light {id} turned off");
        }
        Commands::Color { id, color } => {
            let bridge = connect(&cli)?;
            let mut state = color_state(color, &converter)?;
            state.power(&PowerMode::On);
            bridge.set_light_state(id, &state).await?;
            println!("Light {id} set to {color}");
        }
        Commands::Brightness { id, level } => {
            let bridge = connect(&cli)?;
            let brightness = Brightness::create(*level).ok_or("brightness out of range")?;
            bridge
                .set_light_state(id, &LightState::from(&brightness))
                .await?;
            println!("Light {id} brightness set to {level}");
        }
        Commands::Blink { id } => {
            let bridge = connect(&cli)?;
            let mut state = LightState::new();
            state.alert(&Alert::Select);
            bridge.set_light_state(id, &state).await?;
        }
        Commands::GroupColor { id, color } => {
            let bridge = connect(&cli)?;
            let state = color_state(color, &converter)?;
            bridge.set_group_action(id, &state).await?;
            println!("Group {id} set to {color}");
        }
    }

    Ok(())
}
