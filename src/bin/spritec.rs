use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use spritec::emit::{self, EmitFormat, rust::RustEmitOptions};

#[derive(Parser, Debug)]
#[command(name = "spritec", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile an image into a sprite file.
    Encode(EncodeArgs),
    /// Print pixel and run statistics for an image or a sprite JSON file.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct EncodeArgs {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path. Defaults to `<name>_sprite.rs` (or `<name>_sprite.json`) next to the input.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Sprite name. Defaults to the input file stem.
    #[arg(long)]
    name: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Rust)]
    format: FormatChoice,

    /// Module path exporting `Sprite` and `PixelRange` in the generated code.
    #[arg(long, default_value = "crate::graphics::sprites")]
    sprite_path: String,

    /// Full path of the `Size` type in the generated code.
    #[arg(long, default_value = "crate::shared::Size")]
    size_path: String,

    /// Encode rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input image, or a `.json` sprite written by `spritec encode --format json`.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Rust,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Encode(args) => cmd_encode(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    let format = match args.format {
        FormatChoice::Rust => EmitFormat::Rust,
        FormatChoice::Json => EmitFormat::Json,
    };

    let name = match &args.name {
        Some(n) => n.clone(),
        None => {
            let stem = args
                .in_path
                .file_stem()
                .and_then(|s| s.to_str())
                .with_context(|| format!("derive sprite name from '{}'", args.in_path.display()))?;
            emit::rust::sanitize_name(stem)
        }
    };

    let grid = spritec::load_image(&args.in_path)?;
    let opts = spritec::EncodeOptions {
        parallel: args.parallel,
        threads: args.threads,
    };
    let sprite = spritec::encode_with(&grid, &opts)?;

    let out = args
        .out
        .unwrap_or_else(|| default_out_path(&args.in_path, &name, format));
    let emit_opts = RustEmitOptions {
        name,
        source_name: args
            .in_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned()),
        sprite_path: args.sprite_path,
        size_path: args.size_path,
    };
    emit::write_sprite(&out, &sprite, format, &emit_opts)?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn default_out_path(in_path: &Path, name: &str, format: EmitFormat) -> PathBuf {
    let dir = in_path.parent().unwrap_or_else(|| Path::new("."));
    dir.join(format.file_name(name))
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let is_json = args
        .in_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let sprite = if is_json {
        let text = std::fs::read_to_string(&args.in_path)
            .with_context(|| format!("read sprite '{}'", args.in_path.display()))?;
        emit::json::from_json_str(&text)?
    } else {
        spritec::encode(&spritec::load_image(&args.in_path)?)
    };

    let stats = sprite.stats();
    println!("size:             {}x{}", sprite.width, sprite.height);
    println!("pixels:           {}", stats.pixels);
    println!("transparent:      {}", stats.transparent);
    println!("translucent:      {}", stats.translucent);
    println!("solid:            {}", stats.solid);
    println!("translucent_runs: {}", stats.translucent_runs);
    println!("solid_runs:       {}", stats.solid_runs);
    Ok(())
}
