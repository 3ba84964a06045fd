use clap::Parser;
use pressroom::cli::{handle_serve, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            data_dir,
            uploads_dir,
            public_dir,
        } => handle_serve(port, data_dir, uploads_dir, public_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
