use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use ringglyph::{
    Cipher, CipherStream, Clock, CpuFactory, FrameCtx, FrameQueue, FrameRGBA, GlyphError,
    ManualClock, Player, RecordingSurface, Rgba8, StreamOptions, StreamOptionsUpdate,
    StrokeStyle, compose_row,
};

/// Pixels between glyphs in a rendered row.
const ROW_GAP: u32 = 8;

#[derive(Parser, Debug)]
#[command(name = "ringglyph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a phrase statically as one PNG row.
    Frame(FrameArgs),
    /// Simulate typing a phrase and write every frame as a numbered PNG.
    Animate(AnimateArgs),
    /// Print the draw commands of one transition frame as JSON.
    Trace(TraceArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Phrase to render; words are separated by single spaces.
    #[arg(long)]
    text: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Options JSON (partial stream options).
    #[arg(long)]
    options: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Phrase to type.
    #[arg(long)]
    text: String,

    /// Directory receiving `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Time between simulated keystrokes, in milliseconds.
    #[arg(long, default_value_t = 150)]
    keystroke_ms: u64,

    /// Options JSON (partial stream options).
    #[arg(long)]
    options: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Word shown before the transition.
    #[arg(long, default_value = "")]
    from: String,

    /// Word the transition goes to.
    #[arg(long)]
    to: String,

    /// Fraction of the transition elapsed, in `[0, 1]`.
    #[arg(long, default_value_t = 0.5)]
    at: f64,

    /// Options JSON (partial stream options).
    #[arg(long)]
    options: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut options = load_options(args.options.as_deref())?;
    options.individual_options.animations_enabled = false;

    let mut player = Player::new(CpuFactory::new(stroke_style()), options);
    player.set_text(&args.text);
    let row = render_row(player.stream_mut())?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, &row)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    let options = load_options(args.options.as_deref())?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let frame_dt = Duration::from_secs_f64(1.0 / f64::from(args.fps));
    let keystroke = Duration::from_millis(args.keystroke_ms);
    let mut player = Player::new(CpuFactory::new(stroke_style()), options);
    let mut frames = FrameWriter::new(&args.out_dir);

    let prefix_ends: Vec<usize> = args
        .text
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .collect();
    for end in prefix_ends {
        player.set_text(&args.text[..end]);
        frames.write(player.stream_mut())?;

        let mut waited = Duration::ZERO;
        while waited + frame_dt <= keystroke {
            player.advance(frame_dt);
            frames.write(player.stream_mut())?;
            waited += frame_dt;
        }
    }
    player.run_until_idle(frame_dt, |stream| {
        frames.write(stream).map_err(GlyphError::from)
    })?;

    eprintln!(
        "wrote {} frames to {}",
        frames.written,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.at) {
        anyhow::bail!("--at must be within [0, 1], got {}", args.at);
    }
    let options = load_options(args.options.as_deref())?;
    let glyph_options = options.individual_options;
    let side = f64::from(options.canvas_size);

    let mut queue = FrameQueue::new();
    let clock = ManualClock::new();
    let mut cipher = Cipher::new(Some(RecordingSurface::square(side)), glyph_options);

    // Settle on the starting word first.
    cipher.update(&args.from, &mut FrameCtx::new(&mut queue, &clock));
    clock.advance(glyph_options.duration());
    for handle in queue.take_due() {
        cipher.on_frame(handle, &mut FrameCtx::new(&mut queue, &clock));
    }

    cipher.update(&args.to, &mut FrameCtx::new(&mut queue, &clock));
    let started = clock.now();
    clock.set(started + glyph_options.duration().mul_f64(args.at));
    for handle in queue.take_due() {
        cipher.on_frame(handle, &mut FrameCtx::new(&mut queue, &clock));
    }

    let surface = cipher
        .surface()
        .context("trace surface missing after transition")?;
    println!("{}", surface.to_json()?);
    Ok(())
}

fn load_options(path: Option<&Path>) -> anyhow::Result<StreamOptions> {
    let mut options = StreamOptions::default();
    if let Some(path) = path {
        let update = StreamOptionsUpdate::from_path(path)
            .with_context(|| format!("load options '{}'", path.display()))?;
        options.merge(&update);
    }
    options.validate()?;
    Ok(options)
}

fn stroke_style() -> StrokeStyle {
    StrokeStyle {
        background: Some(Rgba8::WHITE),
        ..StrokeStyle::default()
    }
}

fn render_row(stream: &mut CipherStream<CpuFactory>) -> anyhow::Result<FrameRGBA> {
    let side = stream.options().canvas_size;
    let background = stream
        .factory()
        .style()
        .background
        .unwrap_or(Rgba8::TRANSPARENT);

    let mut frames = Vec::new();
    for surface in stream.surfaces_mut() {
        let frame = match surface {
            Some(surface) => surface.render()?,
            None => FrameRGBA::solid(side, side, background),
        };
        frames.push(frame);
    }
    Ok(compose_row(&frames, ROW_GAP, background)?)
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

struct FrameWriter<'a> {
    dir: &'a Path,
    written: usize,
}

impl<'a> FrameWriter<'a> {
    fn new(dir: &'a Path) -> Self {
        Self { dir, written: 0 }
    }

    fn write(&mut self, stream: &mut CipherStream<CpuFactory>) -> anyhow::Result<()> {
        let row = render_row(stream)?;
        let path = self.dir.join(format!("frame_{:05}.png", self.written));
        write_png(&path, &row)?;
        self.written += 1;
        Ok(())
    }
}
