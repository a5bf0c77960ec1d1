//! Muyassar - Voice-enabled Tafsir Al-Muyassar companion
//!
//! Interactive terminal sessions by default; one-shot subcommands for
//! scripted use.

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

use muyassar::audio::{
    AudioBuffer, AudioSink, PlaybackSession, SAMPLE_RATE, decode_audio_payload, samples_to_wav,
};
use muyassar::tafsir::{Language, build_query, surah_by_number, system_instruction};
use muyassar::{Config, GeminiClient, TafsirBackend, TafsirSession, visualizer};

/// Muyassar - voice-enabled Tafsir Al-Muyassar companion
#[derive(Parser)]
#[command(name = "muyassar", version, about)]
struct Cli {
    /// Interface language: "ar" or "en"
    #[arg(short, long, env = "MUYASSAR_LANGUAGE")]
    language: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interpret a chapter (optionally a single verse)
    Interpret {
        /// Chapter number (1-114)
        surah: u16,

        /// Verse number within the chapter
        #[arg(short = 'n', long)]
        verse: Option<u32>,

        /// Speak the interpretation after printing it
        #[arg(long)]
        listen: bool,

        /// Write the synthesized speech to a WAV file instead of playing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Ask a free-form question
    Ask {
        /// The question text
        question: String,

        /// Speak the answer after printing it
        #[arg(long)]
        listen: bool,

        /// Write the synthesized speech to a WAV file instead of playing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Test speaker output
    TestSpeaker,
    /// Test TTS output
    TestTts {
        /// Text to speak
        #[arg(default_value = "بسم الله الرحمن الرحيم")]
        text: String,
    },
    /// Interactive first-run setup
    Setup,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn,muyassar=warn",
        1 => "info,muyassar=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if matches!(cli.command, Some(Command::Setup)) {
        return run_setup();
    }

    let mut config = Config::load()?;
    if let Some(code) = cli.language.as_deref() {
        config.language = Language::from_code(code);
    }

    match cli.command {
        Some(Command::Interpret {
            surah,
            verse,
            listen,
            output,
        }) => {
            let surah = surah_by_number(surah)
                .ok_or_else(|| anyhow::anyhow!("chapter number must be between 1 and 114"))?;
            let query = build_query(surah, verse, config.language);
            one_shot(config, &query, listen, output).await
        }
        Some(Command::Ask {
            question,
            listen,
            output,
        }) => one_shot(config, &question, listen, output).await,
        Some(Command::TestSpeaker) => test_speaker(),
        Some(Command::TestTts { text }) => test_tts(config, &text).await,
        Some(Command::Setup) => unreachable!("handled above"),
        None => repl(config).await,
    }
}

/// One-shot interpretation: print text, then optionally speak or export it
async fn one_shot(
    config: Config,
    query: &str,
    listen: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let language = config.language;
    let client = GeminiClient::new(&config);

    let text = client
        .generate_text(query, system_instruction(language))
        .await?;

    println!("{}", language.interpretation_heading());
    println!("{}", "-".repeat(40));
    println!("{text}\n");

    if output.is_none() && !listen {
        return Ok(());
    }

    let payload = client.synthesize(&text).await?;
    let bytes = decode_audio_payload(&payload)?;
    let buffer = AudioBuffer::from_pcm16(&bytes);
    tracing::info!(
        samples = buffer.len(),
        duration_secs = buffer.duration_secs(),
        "synthesized speech"
    );

    if let Some(path) = output {
        write_wav(&path, &buffer)?;
        println!("Audio saved to {}", path.display());
        return Ok(());
    }

    let mut playback = PlaybackSession::open()?;
    let handle = playback.start(&buffer)?;
    drive_playback(handle, playback.analyser().cloned()).await;
    Ok(())
}

/// Interactive session loop
async fn repl(config: Config) -> anyhow::Result<()> {
    let backend: Arc<dyn TafsirBackend> = Arc::new(GeminiClient::new(&config));
    let sink = Box::new(PlaybackSession::open()?);
    let mut session = TafsirSession::new(backend, sink, config.language);

    banner(session.language());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        match line.as_str() {
            ":q" | ":quit" => break,
            ":help" => print_help(),
            ":lang" => {
                let language = session.toggle_language();
                banner(language);
            }
            ":stop" => session.stop(),
            ":listen" => listen_and_visualize(&mut session, &mut lines).await,
            other => {
                let mut tokens = other.splitn(2, char::is_whitespace);
                let command = tokens.next().unwrap_or_default();
                let rest = tokens.next().unwrap_or("").trim();

                match command {
                    ":save" => save_audio(&session, rest),
                    ":surah" => interpret_selection(&mut session, rest).await,
                    _ if other.starts_with(':') => {
                        println!("Unknown command. Type :help for the command list.");
                    }
                    // Free question mode
                    _ => interpret(&mut session, other).await,
                }
            }
        }
    }

    session.stop();
    Ok(())
}

/// Print the session banner for a language
fn banner(language: Language) {
    println!();
    println!("{}", language.title());
    println!("{}", language.intro());
    println!();
    print_help();
}

fn print_help() {
    println!("Commands:");
    println!("  :surah N [VERSE]  interpret chapter N, optionally one verse");
    println!("  :listen           speak the current interpretation");
    println!("  :stop             stop playback");
    println!("  :save FILE        write the spoken audio to a WAV file");
    println!("  :lang             toggle Arabic/English");
    println!("  :q or :quit       exit");
    println!("Anything else is asked as a free question.");
    println!();
}

/// Parse `:surah N [VERSE]` arguments and run the interpretation
async fn interpret_selection(session: &mut TafsirSession, args: &str) {
    let mut parts = args.split_whitespace();

    let Some(number) = parts.next().and_then(|p| p.parse::<u16>().ok()) else {
        println!("Usage: :surah N [VERSE]");
        return;
    };
    let Some(surah) = surah_by_number(number) else {
        println!("Chapter number must be between 1 and 114.");
        return;
    };
    let verse = parts.next().and_then(|p| p.parse::<u32>().ok());

    let query = build_query(surah, verse, session.language());
    interpret(session, &query).await;
}

/// Run one interpretation request and print the outcome
async fn interpret(session: &mut TafsirSession, query: &str) {
    let outcome = session.interpret(query).await.map(|text| text.is_some());
    match outcome {
        Ok(true) => {
            let language = session.language();
            println!();
            println!("{}", language.interpretation_heading());
            println!("{}", "-".repeat(40));
            if let Some(text) = session.interpretation() {
                println!("{text}");
            }
            println!();
            println!("Type :listen to hear it.");
        }
        Ok(false) => {}
        Err(_) => {
            if let Some(message) = session.error_message() {
                println!("{message}");
            }
        }
    }
}

/// Start playback and render visualizer frames until it ends or is stopped
async fn listen_and_visualize(session: &mut TafsirSession, lines: &mut Lines<BufReader<Stdin>>) {
    match session.listen().await {
        Ok(true) => {}
        Ok(false) => {
            println!("Nothing to play yet - interpret something first.");
            return;
        }
        Err(_) => {
            if let Some(message) = session.error_message() {
                println!("{message}");
            }
            return;
        }
    }

    let Some(mut handle) = session.playback_handle() else {
        return;
    };
    let analyser = session.analyser().cloned();
    let mut frames = tokio::time::interval(Duration::from_millis(50));

    println!("Playing... (press Enter or type :stop to stop)");

    loop {
        tokio::select! {
            ended = handle.wait_ended() => {
                if ended {
                    tracing::debug!("playback reached natural end");
                }
                break;
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(_)) => {
                        session.stop();
                        break;
                    }
                    Ok(None) | Err(_) => break,
                }
            }
            _ = frames.tick() => {
                let frame = visualizer::render_frame(analyser.as_deref());
                print!("\r[{frame}]");
                let _ = std::io::stdout().flush();
            }
        }
    }

    println!();
    // Reap the final state transition
    let _ = session.status();
}

/// Write the cached audio buffer to a WAV file
fn save_audio(session: &TafsirSession, path: &str) {
    if path.is_empty() {
        println!("Usage: :save FILE");
        return;
    }
    let Some(buffer) = session.cached_audio() else {
        println!("No audio yet - use :listen first.");
        return;
    };

    match write_wav(Path::new(path), buffer) {
        Ok(()) => println!("Audio saved to {path}"),
        Err(e) => println!("Failed to save audio: {e}"),
    }
}

fn write_wav(path: &Path, buffer: &AudioBuffer) -> muyassar::Result<()> {
    let wav = samples_to_wav(buffer.samples(), SAMPLE_RATE)?;
    std::fs::write(path, wav)?;
    Ok(())
}

/// Test speaker output with a sine wave
fn test_speaker() -> anyhow::Result<()> {
    println!("Testing speaker output...");
    println!("You should hear a 440Hz tone for 2 seconds\n");

    let mut playback = PlaybackSession::open()?;

    // Generate 2 seconds of 440Hz sine wave at the playback sample rate
    let frequency = 440.0_f32;
    let duration_secs = 2.0_f32;
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let num_samples = (SAMPLE_RATE as f32 * duration_secs) as usize;

    #[allow(clippy::cast_precision_loss)]
    let samples: Vec<f32> = (0..num_samples)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            (2.0 * std::f32::consts::PI * frequency * t).sin() * 0.3 // 30% volume
        })
        .collect();

    println!("Playing {} samples at {} Hz...", samples.len(), SAMPLE_RATE);

    let buffer = AudioBuffer::from_samples(samples);
    let handle = playback.start(&buffer)?;
    wait_blocking(handle, buffer.duration_secs());

    println!("\n---");
    println!("If you heard the tone, your speakers are working!");

    Ok(())
}

/// Test TTS output end to end
async fn test_tts(config: Config, text: &str) -> anyhow::Result<()> {
    println!("Testing TTS with text: \"{text}\"\n");

    let client = GeminiClient::new(&config);

    println!("Synthesizing speech...");
    let payload = client.synthesize(text).await?;
    let bytes = decode_audio_payload(&payload)?;
    println!("Got {} bytes of audio data", bytes.len());

    let buffer = AudioBuffer::from_pcm16(&bytes);
    println!("Playing audio...");

    let mut playback = PlaybackSession::open()?;
    let handle = playback.start(&buffer)?;
    drive_playback(handle, playback.analyser().cloned()).await;

    println!("\n---");
    println!("If you heard the speech, TTS is working!");

    Ok(())
}

/// Render visualizer frames until the handle reports its natural end
async fn drive_playback(
    mut handle: muyassar::audio::PlaybackHandle,
    analyser: Option<Arc<muyassar::Analyser>>,
) {
    let mut frames = tokio::time::interval(Duration::from_millis(50));

    loop {
        tokio::select! {
            _ = handle.wait_ended() => break,
            _ = frames.tick() => {
                let frame = visualizer::render_frame(analyser.as_deref());
                print!("\r[{frame}]");
                let _ = std::io::stdout().flush();
            }
        }
    }
    println!();
}

/// Block until a playback handle finishes (for sync contexts)
fn wait_blocking(handle: muyassar::audio::PlaybackHandle, duration_secs: f32) {
    let deadline =
        std::time::Instant::now() + Duration::from_secs_f32(duration_secs) + Duration::from_millis(500);
    while !handle.is_finished() && std::time::Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(50));
    }
}

/// Interactive first-run setup wizard
fn run_setup() -> anyhow::Result<()> {
    use dialoguer::{Input, Select};
    use muyassar::config::{
        DEFAULT_TEXT_MODEL, DEFAULT_TTS_MODEL, DEFAULT_TTS_VOICE, file as config_file,
    };

    println!("Muyassar Setup\n");

    let existing = config_file::load_config_file();
    let config_path = config_file::config_file_path()
        .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;

    if config_path.exists() {
        println!("Existing config found at {}\n", config_path.display());
    }

    // 1. API key
    let existing_key = existing.gemini.api_key.as_deref();
    let masked = existing_key.map(|k| {
        if k.len() > 8 {
            format!("{}...{}", &k[..4], &k[k.len() - 4..])
        } else {
            "****".to_string()
        }
    });

    let prompt = masked.map_or_else(
        || "Gemini API key (GEMINI_API_KEY)".to_string(),
        |m| format!("Gemini API key (current: {m}, leave blank to keep)"),
    );

    let api_key_input: String = Input::new()
        .with_prompt(&prompt)
        .allow_empty(true)
        .interact_text()?;

    let api_key = if api_key_input.is_empty() {
        existing_key.map(str::to_string)
    } else {
        Some(api_key_input)
    };

    // 2. Models and voice
    let text_model: String = Input::new()
        .with_prompt("Text model")
        .default(
            existing
                .gemini
                .text_model
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
        )
        .interact_text()?;

    let tts_model: String = Input::new()
        .with_prompt("TTS model")
        .default(
            existing
                .voice
                .tts_model
                .unwrap_or_else(|| DEFAULT_TTS_MODEL.to_string()),
        )
        .interact_text()?;

    let tts_voice: String = Input::new()
        .with_prompt("TTS voice")
        .default(
            existing
                .voice
                .tts_voice
                .unwrap_or_else(|| DEFAULT_TTS_VOICE.to_string()),
        )
        .interact_text()?;

    // 3. Default language
    let languages = ["العربية (ar)", "English (en)"];
    let default_language = usize::from(existing.language.as_deref() == Some("en"));
    let language_idx = Select::new()
        .with_prompt("Default language")
        .items(&languages)
        .default(default_language)
        .interact()?;
    let language = if language_idx == 1 { "en" } else { "ar" };

    // 4. Write config
    let mut out = String::new();
    out.push_str(&format!("language = \"{language}\"\n\n"));
    out.push_str("[gemini]\n");
    if let Some(ref key) = api_key {
        out.push_str(&format!("api_key = \"{key}\"\n"));
    }
    out.push_str(&format!("text_model = \"{text_model}\"\n\n"));
    out.push_str("[voice]\n");
    out.push_str(&format!("tts_model = \"{tts_model}\"\n"));
    out.push_str(&format!("tts_voice = \"{tts_voice}\"\n"));

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&config_path, out)?;

    println!("\nConfig written to {}", config_path.display());
    println!("Run `muyassar` to start an interactive session.");

    Ok(())
}
