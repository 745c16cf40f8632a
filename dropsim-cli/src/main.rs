use clap::{Parser, Subcommand};

mod app;

#[derive(Parser)]
#[command(name = "dropsim")]
#[command(about = "dropsim - a minimal real-time 2D particle simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the particle rain scene in a window
    Run {
        /// Window width in pixels
        #[arg(long, default_value_t = 1000.0)]
        width: f32,

        /// Window height in pixels
        #[arg(long, default_value_t = 600.0)]
        height: f32,

        /// Target frame rate
        #[arg(long, default_value_t = 60.0)]
        fps: f32,

        /// Number of particles to launch
        #[arg(long, default_value_t = 1000)]
        count: usize,

        /// Integrate with a fixed timestep in seconds instead of the
        /// measured frame rate
        #[arg(long)]
        fixed_dt: Option<f32>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            width,
            height,
            fps,
            count,
            fixed_dt,
        } => {
            if let Err(e) = app::launch(width, height, fps, count, fixed_dt) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
