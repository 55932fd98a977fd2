use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;

use hypersyn::config::{default_config_path, Settings};
use hypersyn::display::{format_report, ReportOptions};
use hypersyn::playback::{generate_playback_data, render_to_wav};
use hypersyn::storage::{ChordSetStore, SaveOutcome};
use hypersyn::{
    apply_voicing, convert_chords, parse_chord_name, semitone_to_hex, valid_voicings,
    HypersynError, Voicing,
};

#[derive(Parser)]
#[command(name = "hypersyn")]
#[command(about = "Chord names to intervals, voicings and pad previews", long_about = None)]
struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Chord-set file, overrides the settings
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show intervals, hex values and chord groups for a progression
    Convert {
        /// Chord names, e.g. Cmaj7 Dm7 G7 (commas also separate)
        #[arg(required = true)]
        chords: Vec<String>,

        /// Voicing id (closed, drop2, first-inversion, ...)
        #[arg(short = 'V', long)]
        voicing: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Draw a keyboard under each chord
        #[arg(short, long)]
        keyboard: bool,
    },

    /// List the voicings that apply to a chord and what each produces
    Voicings {
        chord: String,
    },

    /// Plan a progression as pads; prints JSON or renders a WAV file
    Play {
        #[arg(required = true)]
        chords: Vec<String>,

        #[arg(short = 'V', long)]
        voicing: Option<String>,

        /// Render to this WAV file instead of printing the plan
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seconds per chord
        #[arg(short, long)]
        duration: Option<f64>,

        /// Peak volume, 0.0 to 1.0
        #[arg(long)]
        volume: Option<f64>,
    },

    /// Manage saved chord sets
    Sets {
        #[command(subcommand)]
        action: SetsAction,
    },
}

#[derive(Subcommand)]
enum SetsAction {
    /// List saved sets
    List,
    /// Save a set (replaces the chords of a set with the same name)
    Save {
        name: String,
        #[arg(required = true)]
        chords: Vec<String>,
    },
    /// Convert a saved set by index
    Load {
        index: usize,
        #[arg(short = 'V', long)]
        voicing: Option<String>,
    },
    /// Delete a saved set by index
    Delete { index: usize },
    /// Write all sets as JSON to a file, or stdout
    Export { file: Option<PathBuf> },
    /// Add sets from an exported JSON file
    Import { file: PathBuf },
}

fn resolve_voicing(flag: Option<&str>, settings: &Settings) -> Result<Voicing, HypersynError> {
    match flag {
        Some(id) => id.parse(),
        None => Ok(settings.default_voicing),
    }
}

fn run(cli: Cli) -> Result<(), HypersynError> {
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let mut settings = Settings::load(&config_path)?;
    if let Some(store) = cli.store {
        settings.store_path = store;
    }

    match cli.command {
        Commands::Convert {
            chords,
            voicing,
            json,
            keyboard,
        } => {
            let voicing = resolve_voicing(voicing.as_deref(), &settings)?;
            let result = convert_chords(&chords.join(" "), voicing);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", format_report(&result, ReportOptions { keyboard }));
            }
        }

        Commands::Voicings { chord } => match parse_chord_name(&chord) {
            Some(parsed) => {
                println!("{} ({})", parsed.chord_name, parsed.quality);
                for option in valid_voicings(&parsed.intervals) {
                    let voicing = Voicing::from_id(option.value);
                    let voiced = apply_voicing(&parsed.intervals, voicing);
                    let hex: Vec<String> = voiced.iter().map(|&i| semitone_to_hex(i)).collect();
                    println!("  {:<18} {:?}  {}", option.label, voiced, hex.join(" "));
                }
            }
            None => {
                eprintln!("Not a chord: {}", chord);
                process::exit(1);
            }
        },

        Commands::Play {
            chords,
            voicing,
            output,
            duration,
            volume,
        } => {
            let voicing = resolve_voicing(voicing.as_deref(), &settings)?;
            let mut options = settings.playback;
            if let Some(duration) = duration {
                options.chord_duration = duration;
            }
            if let Some(volume) = volume {
                options.volume = volume.clamp(0.0, 1.0);
            }
            options.validate()?;

            let data = generate_playback_data(&chords.join(" "), voicing, &options);
            if data.is_empty() {
                eprintln!("No valid chords found.");
                process::exit(1);
            }
            match output {
                Some(path) => {
                    render_to_wav(&data, &path)?;
                    eprintln!("Wrote {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&data)?),
            }
        }

        Commands::Sets { action } => {
            let path = settings.store_path.clone();
            let mut store = ChordSetStore::load(&path)?;
            match action {
                SetsAction::List => {
                    if store.is_empty() {
                        println!("No saved chord sets.");
                    }
                    for (i, set) in store.sets().iter().enumerate() {
                        println!("{:>3}  {}: {}", i, set.name, set.chords);
                    }
                }
                SetsAction::Save { name, chords } => {
                    let outcome = store.save_set(&name, &chords.join(" "))?;
                    store.save(&path)?;
                    match outcome {
                        SaveOutcome::Created => println!("Chord set saved as '{}'.", name.trim()),
                        SaveOutcome::Updated => println!("Chord set '{}' updated.", name.trim()),
                    }
                }
                SetsAction::Load { index, voicing } => {
                    let set = store.get(index)?;
                    let voicing = resolve_voicing(voicing.as_deref(), &settings)?;
                    println!("{}", set.name);
                    print!(
                        "{}",
                        format_report(&convert_chords(&set.chords, voicing), ReportOptions::default())
                    );
                }
                SetsAction::Delete { index } => {
                    let removed = store.delete(index)?;
                    store.save(&path)?;
                    println!("Chord set '{}' deleted.", removed.name);
                }
                SetsAction::Export { file } => {
                    let json = store.export_json()?;
                    match file {
                        Some(file) => {
                            fs::write(&file, json)?;
                            eprintln!("Chord sets exported to {}", file.display());
                        }
                        None => println!("{}", json),
                    }
                }
                SetsAction::Import { file } => {
                    let json = fs::read_to_string(&file)?;
                    let added = store.import_json(&json)?;
                    store.save(&path)?;
                    if added > 0 {
                        println!("Imported {} new chord set(s).", added);
                    } else {
                        println!("No new chord sets to import.");
                    }
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
