//! CLI tool to turn a source text into a narration script.
//!
//! Usage:
//!   scriptforge --input story.txt [--config options.json] [--mode remodel]
//!               [--blocks 3] [--language en] [--cta reflective] [--subtitles]
//!               [--image-prompts] [--master-prompt] [--seed 42]
//!               [--output-dir out/] [--validate] [--stats]
//!
//! Writes `<stem>.json` (the full processed script), `<stem>.txt` (readable
//! script) and, with subtitles enabled, `<stem>.srt`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scriptforge::script::export;
use scriptforge::subtitles::srt;
use scriptforge::{
    CtaStyle, Language, Niche, ProcessedScript, ProcessingType, ScriptConfiguration,
    ScriptProcessor,
};

#[derive(Parser, Debug)]
#[command(
    name = "scriptforge",
    about = "Split or remodel a source text into a narration script with subtitles",
    version
)]
struct Args {
    /// Source text file
    #[arg(short, long)]
    input: PathBuf,

    /// JSON configuration file (camelCase fields); flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pipeline: simple or remodel
    #[arg(short, long)]
    mode: Option<ProcessingType>,

    /// Number of blocks to produce
    #[arg(short, long, allow_negative_numbers = true)]
    blocks: Option<i64>,

    /// Script language (pt, en, es, de, fr); unknown codes fall back to pt
    #[arg(short, long)]
    language: Option<String>,

    /// Call-to-action style: emotional, appeal, reflective or none
    #[arg(long)]
    cta: Option<CtaStyle>,

    /// Niche as "domain/sub-domain/micro-sub-domain"
    #[arg(long)]
    niche: Option<String>,

    /// Substitute simple-mode words from this source language
    #[arg(long)]
    translate_from: Option<String>,

    /// Attach an image prompt to every content block
    #[arg(long, default_value = "false")]
    image_prompts: bool,

    /// Attach a master visual-mood prompt
    #[arg(long, default_value = "false")]
    master_prompt: bool,

    /// Generate a SubRip subtitle track
    #[arg(long, default_value = "false")]
    subtitles: bool,

    /// Seed for reproducible phrase selection
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Validate the subtitle track by parsing it back
    #[arg(long, default_value = "false")]
    validate: bool,

    /// Print statistics about the script
    #[arg(long, default_value = "false")]
    stats: bool,
}

impl Args {
    /// Loads the configuration file, if any, and applies flag overrides.
    fn configuration(&self) -> Result<ScriptConfiguration> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                ScriptConfiguration::from_json(&json).context("Failed to parse config JSON")?
            }
            None => ScriptConfiguration::default(),
        };

        if let Some(mode) = self.mode {
            config.processing_type = mode;
        }
        if let Some(blocks) = self.blocks {
            config.block_count = blocks;
        }
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(cta) = self.cta {
            config.cta_style = cta;
        }
        if let Some(niche) = &self.niche {
            config.auto_identified_niche = Some(parse_niche(niche));
        }
        if let Some(source) = &self.translate_from {
            config = config.with_translation(source.clone());
        }
        config.generate_image_prompts |= self.image_prompts;
        config.generate_master_prompt |= self.master_prompt;
        config.convert_to_subtitles |= self.subtitles;
        Ok(config)
    }
}

/// Splits "domain/sub/micro"; missing parts stay blank.
fn parse_niche(value: &str) -> Niche {
    let mut parts = value.splitn(3, '/').map(str::trim);
    Niche::new(
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    )
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(env_filter)
        .init();
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

fn validate(script: &ProcessedScript) -> Result<()> {
    let Some(track) = export::subtitle_file(script) else {
        anyhow::bail!("Validation failed: no subtitle track (use --subtitles)");
    };
    let parsed = srt::parse(track).context("Validation failed: track does not parse")?;
    srt::validate_contiguous(&parsed).context("Validation failed: track has gaps")?;
    if parsed != script.cues {
        anyhow::bail!(
            "Validation failed: cue mismatch (expected {} cues, parsed {})",
            script.cues.len(),
            parsed.len()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    // 1. Validate input exists
    let input_path = &args.input;
    if !input_path.exists() {
        anyhow::bail!("Input file does not exist: {}", input_path.display());
    }

    // 2. Read source text
    let text = std::fs::read_to_string(input_path).context("Failed to read input file")?;

    // 3. Build configuration
    let config = args.configuration()?;
    if Language::parse_strict(&config.language).is_err() {
        warn!(
            language = %config.language,
            fallback = %Language::DEFAULT,
            "unsupported language, using fallback"
        );
    }

    // 4. Process
    let mut processor = match args.seed {
        Some(seed) => ScriptProcessor::seeded(seed),
        None => ScriptProcessor::new(),
    };
    let script = processor.process(&text, &config);
    info!(blocks = script.blocks.len(), cues = script.cues.len(), "script processed");

    // 5. Determine output paths
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => input_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    if !output_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&output_dir).context("Failed to create output directory")?;
    }
    let stem = export::script_stem(&script);
    let json_path = output_dir.join(format!("{stem}.json"));
    let txt_path = output_dir.join(export::txt_file_name(&script));
    let srt_path = output_dir.join(export::srt_file_name(&script));

    // 6. Write outputs
    let value = script.to_json_value().context("Failed to serialize script")?;
    let json = serde_json::to_string_pretty(&value).context("Failed to format script JSON")?;
    write_file(&json_path, &json)?;
    write_file(&txt_path, &export::plain_text(&script))?;
    if let Some(track) = export::subtitle_file(&script) {
        write_file(&srt_path, track)?;
    }

    // 7. Optional validation
    if args.validate {
        validate(&script)?;
        println!("✓ Validation passed!");
    }

    // 8. Optional stats
    if args.stats {
        let stats = &script.statistics;
        println!();
        println!("Script statistics:");
        println!("  Pipeline:   {}", config.processing_type);
        println!("  Language:   {}", script.language);
        println!();
        println!("  Characters (with spaces):    {:>8}", stats.characters_with_spaces);
        println!("  Characters (without spaces): {:>8}", stats.characters_without_spaces);
        println!("  Words:                       {:>8}", stats.word_count);
        println!("  Lines:                       {:>8}", stats.line_count);
        println!();
        println!("  Blocks:     {}", script.blocks.len());
        if let Some(last) = script.cues.last() {
            println!("  Cues:       {}", script.cues.len());
            println!("  Runtime:    {}", srt::format_timestamp(last.end_ms));
        }
    }

    println!();
    println!(
        "Successfully processed {} → {}",
        input_path.display(),
        json_path.display()
    );

    Ok(())
}
