use std::io::stdout;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
};
use crossterm::execute;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::{DefaultTerminal, Frame};

use kodama::config;
use kodama::render::render_overlay;
use kodama::{
    Bounds, BoundSelection, Direction, DisplayPayload, Overlay, Selection, Tooltip,
    TooltipOptions,
};

/// Gap between pointer and tooltip when nothing else sets one, in cells.
const DEMO_DISTANCE: f64 = 1.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Hover the bars to see tooltips. Press q or Esc to quit.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Theme name (built-in: kodama, white_tiger)
    #[arg(long)]
    theme: Option<String>,

    /// Preferred side for the tooltip (top, bottom-left, north-east, ...)
    #[arg(long)]
    gravity: Option<Direction>,

    /// Which point of the anchor the tooltip hangs from
    #[arg(long)]
    by: Option<Direction>,

    /// Gap between the anchor and the tooltip, in cells
    #[arg(long)]
    distance: Option<f64>,

    /// Delay before the tooltip appears, in milliseconds
    #[arg(long)]
    hold: Option<u64>,

    /// Anchor tooltips to the hovered bar instead of the pointer
    #[arg(long)]
    target: bool,

    /// Config file (default: ~/.config/kodama/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn tooltip_options(&self) -> TooltipOptions {
        TooltipOptions {
            theme: self.theme.clone(),
            gravity: self.gravity,
            by: self.by,
            distance: self.distance,
            hold_duration: self.hold,
            ..Default::default()
        }
    }
}

#[derive(Debug)]
struct Bar {
    label: &'static str,
    population: u64,
    country: &'static str,
}

const CITIES: [(&str, u64, &str); 8] = [
    ("Tokyo", 37_194_000, "Japan"),
    ("Delhi", 32_941_000, "India"),
    ("Shanghai", 29_210_000, "China"),
    ("Dhaka", 23_210_000, "Bangladesh"),
    ("Sao Paulo", 22_620_000, "Brazil"),
    ("Cairo", 22_183_000, "Egypt"),
    ("Osaka", 19_059_000, "Japan"),
    ("Lagos", 15_388_000, "Nigeria"),
];

fn format_bar(bar: &Bar, key: usize) -> Option<DisplayPayload> {
    Some(
        DisplayPayload::new()
            .title(bar.label)
            .item("rank", key + 1)
            .item("population", bar.population)
            .item("country", bar.country),
    )
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logger();

    let config = config::load_config(args.config.as_deref());
    let mut options = config.tooltip.clone();
    options.merge(&args.tooltip_options());

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, &args, &config, &options);

    // Restore terminal (automatic cleanup)
    execute!(stdout(), DisableMouseCapture)?;
    ratatui::restore();

    result
}

/// Logs go to a timestamped file in the temp dir so they don't corrupt the TUI.
#[cfg(debug_assertions)]
fn init_logger() {
    let file_name = format!("kodama-{}.log", chrono::Local::now().format("%Y%m%d-%H%M%S"));
    let path = std::env::temp_dir().join(file_name);

    if let Ok(file) = std::fs::File::create(&path) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
}

fn run(
    mut terminal: DefaultTerminal,
    args: &Args,
    config: &config::Config,
    options: &TooltipOptions,
) -> Result<()> {
    let size = terminal.size()?;
    let mut chart = chart_area(size.width, size.height);

    let mut overlay = Overlay::create(Bounds::new(0.0, 0.0, size.width.into(), size.height.into()));
    config.register_themes(overlay.themes_mut());

    let bars: Vec<Rc<Bar>> = CITIES
        .iter()
        .map(|&(label, population, country)| {
            Rc::new(Bar {
                label,
                population,
                country,
            })
        })
        .collect();

    let tooltip = Tooltip::with_format(format_bar)
        .distance(DEMO_DISTANCE)
        .options(options, &overlay);
    let mut bound = tooltip
        .bind(build_selection(chart, &bars))
        .anchor_to_elements(args.target);

    loop {
        let now = Instant::now();
        overlay.tick(now);

        terminal.draw(|frame| render(frame, chart, &bound, &bars, &overlay, now))?;

        if !event::poll(FRAME_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                bound.handle_mouse(&mut overlay, mouse, Instant::now());
            }
            Event::Resize(width, height) => {
                overlay.set_root(Bounds::new(0.0, 0.0, width.into(), height.into()));
                chart = chart_area(width, height);
                bound.set_selection(build_selection(chart, &bars));
            }
            _ => {}
        }
    }

    Ok(())
}

/// Everything below the header line and above the label line.
fn chart_area(width: u16, height: u16) -> Rect {
    Rect {
        x: 1,
        y: 2,
        width: width.saturating_sub(2),
        height: height.saturating_sub(4),
    }
}

fn bar_rects(area: Rect, bars: &[Rc<Bar>]) -> Vec<Rect> {
    let count = bars.len().max(1) as u16;
    let slot = (area.width / count).max(1);
    let bar_width = slot.saturating_sub(1).max(1);
    let max = bars.iter().map(|b| b.population).max().unwrap_or(1).max(1);

    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let height = ((bar.population as f64 / max as f64) * f64::from(area.height)).round() as u16;
            let height = height.clamp(1, area.height.max(1));
            Rect {
                x: area.x + slot * i as u16,
                y: area.bottom().saturating_sub(height),
                width: bar_width,
                height,
            }
        })
        .collect()
}

fn build_selection(area: Rect, bars: &[Rc<Bar>]) -> Selection<Bar> {
    bar_rects(area, bars)
        .into_iter()
        .zip(bars)
        .map(|(rect, bar)| (Bounds::from(rect), Rc::clone(bar)))
        .collect()
}

fn render(
    frame: &mut Frame,
    chart: Rect,
    bound: &BoundSelection<Bar>,
    bars: &[Rc<Bar>],
    overlay: &Overlay,
    now: Instant,
) {
    let header = Line::from(" Largest urban areas (hover a bar, q to quit)").bold();
    frame.render_widget(header, Rect { height: 1, ..frame.area() });

    let hovered = bound.hovered().map(|element| element.key);
    for (i, (rect, bar)) in bar_rects(chart, bars).into_iter().zip(bars).enumerate() {
        let color = if hovered == Some(i) {
            Color::Rgb(220, 200, 120)
        } else {
            Color::Rgb(120, 110, 70)
        };
        frame.render_widget(Block::default().style(Style::default().bg(color)), rect);

        let label_area = Rect {
            x: rect.x,
            y: chart.bottom(),
            width: rect.width,
            height: 1,
        };
        if label_area.bottom() <= frame.area().bottom() {
            frame.render_widget(Line::from(bar.label), label_area);
        }
    }

    render_overlay(frame, overlay, now);
}
