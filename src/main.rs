use clap::Parser;
use hkt_convert::compiler::source::LineSource;
use hkt_convert::compiler::Sources;
use hkt_convert::song::{SongHeader, SongJson, SongWriter};
use hkt_convert::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hkt-convert")]
#[command(version = "0.1.0")]
#[command(about = "Convert lyrics, pitch and time files to karaoke song notation", long_about = None)]
struct Args {
    /// Lyrics file
    #[arg(short, long)]
    lyrics: Option<PathBuf>,

    /// Pitches file
    #[arg(short, long)]
    pitches: Option<PathBuf>,

    /// Times file
    #[arg(short, long)]
    times: Option<PathBuf>,

    /// Output file (writes to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write JSON instead of song notation
    #[arg(long)]
    json: bool,

    /// Output compact JSON (default is pretty-printed)
    #[arg(long, requires = "json")]
    compact: bool,

    /// Leave out the metadata header
    #[arg(long)]
    no_header: bool,

    #[command(flatten)]
    header: HeaderArgs,
}

/// Metadata header overrides
#[derive(clap::Args, Debug)]
struct HeaderArgs {
    #[arg(long, default_value = "")]
    title: String,

    #[arg(long, default_value = "")]
    artist: String,

    #[arg(long, default_value = "")]
    edition: String,

    #[arg(long, default_value = "Anime")]
    genre: String,

    #[arg(long, default_value = "Japanese")]
    language: String,

    /// Audio file name
    #[arg(long, default_value = ".mp3")]
    mp3: String,

    #[arg(long, default_value = "cover.jpg")]
    cover: String,

    #[arg(long, default_value = "background.jpg")]
    background: String,

    #[arg(long, default_value_t = 150)]
    bpm: u32,

    /// Milliseconds before the first beat
    #[arg(long, default_value_t = 1000)]
    gap: u32,
}

impl From<HeaderArgs> for SongHeader {
    fn from(args: HeaderArgs) -> Self {
        Self {
            title: args.title,
            artist: args.artist,
            edition: args.edition,
            genre: args.genre,
            language: args.language,
            mp3: args.mp3,
            cover: args.cover,
            background: args.background,
            bpm: args.bpm,
            gap: args.gap,
            ..SongHeader::default()
        }
    }
}

fn init_tracing() {
    // RUST_LOG=hkt_convert=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>, Error> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::CreateOutput {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    init_tracing();

    // Open everything before converting anything
    let sources = Sources::new(
        LineSource::open_optional("lyrics", args.lyrics.as_deref())?,
        LineSource::open_optional("pitches", args.pitches.as_deref())?,
        LineSource::open_optional("times", args.times.as_deref())?,
    );
    let output = create_output(args.output.as_deref())?;

    let header = (!args.no_header).then(|| SongHeader::from(args.header));

    let mut compiler = hkt_convert::Compiler::new();
    let track = compiler.compile(sources)?;

    for diagnostic in &track.diagnostics {
        eprintln!("{}", diagnostic);
    }

    let mut writer = SongWriter::new(output);
    if args.json {
        let json = SongJson::new(header.as_ref(), &track).render(args.compact)?;
        let mut out = writer.finish()?;
        writeln!(out, "{}", json)?;
        out.flush()?;
    } else {
        if let Some(header) = &header {
            writer.write_header(header)?;
        }
        writer.write_track(&track)?;
        writer.finish()?;
    }

    Ok(())
}
