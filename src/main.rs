use std::io;
use std::path::Path;

use connect4::config::AppConfig;
use connect4::ui::App;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_or_default(Path::new("connect4.toml"))?;

    let app = App::new(&config);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    app.run(&mut input, &mut output)?;
    Ok(())
}
