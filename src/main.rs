//! `caretnav`: replay navigation keys against a markup fragment.
//!
//! ```text
//! caretnav --markup '<p>ab<video></video></p>' --caret 0/0:2 --keys right,right
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use dom::DomRange;
use layout::FlowLayoutOptions;
use navigation::keyboard::handle_key;
use navigation::{EditorHost, HeadlessEditor, NavigationConfig, NavigationKey};
use serde::Deserialize;
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser, Debug)]
#[command(name = "caretnav", version, about)]
struct Args {
    /// File holding the editable markup.
    #[arg(conflicts_with = "markup", required_unless_present = "markup")]
    file: Option<PathBuf>,

    /// Inline editable markup.
    #[arg(long)]
    markup: Option<String>,

    /// Comma-separated keys: left, right, up, down, home, end.
    #[arg(long, value_delimiter = ',', default_value = "")]
    keys: Vec<String>,

    /// Initial caret as `child/child/...:offset` below the editable root.
    #[arg(long, default_value = ":0")]
    caret: String,

    /// TOML file with `[navigation]` and `[layout]` tables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Layout width in px; overrides the config file.
    #[arg(long)]
    width: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoConfig {
    navigation: NavigationConfig,
    layout: LayoutSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct LayoutSection {
    width: f32,
    replaced_width: f32,
    replaced_height: f32,
}

impl Default for LayoutSection {
    fn default() -> Self {
        let options = FlowLayoutOptions::default();
        Self {
            width: options.width,
            replaced_width: options.replaced_width,
            replaced_height: options.replaced_height,
        }
    }
}

impl LayoutSection {
    fn to_options(&self) -> FlowLayoutOptions {
        FlowLayoutOptions {
            width: self.width,
            replaced_width: self.replaced_width,
            replaced_height: self.replaced_height,
            ..FlowLayoutOptions::default()
        }
    }
}

/// Parse `0/1:2` into a child path and an offset. An empty path is the
/// editable root itself.
fn parse_caret(raw: &str) -> Result<(Vec<usize>, usize)> {
    let (path, offset) = raw
        .rsplit_once(':')
        .with_context(|| format!("caret `{raw}` is missing `:offset`"))?;
    let offset = offset
        .trim()
        .parse()
        .with_context(|| format!("bad caret offset in `{raw}`"))?;
    let path = path
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .parse()
                .with_context(|| format!("bad child index `{segment}` in `{raw}`"))
        })
        .collect::<Result<Vec<usize>>>()?;
    Ok((path, offset))
}

fn load_config(path: Option<&PathBuf>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let markup = match (&args.markup, &args.file) {
        (Some(markup), _) => markup.clone(),
        (None, Some(file)) => std::fs::read_to_string(file)
            .with_context(|| format!("reading markup {}", file.display()))?,
        (None, None) => bail!("no markup given"),
    };

    let config = load_config(args.config.as_ref())?;
    let mut layout_options = config.layout.to_options();
    if let Some(width) = args.width {
        layout_options.width = width;
    }
    let mut editor = HeadlessEditor::with_options(&markup, layout_options, config.navigation)
        .context("parsing markup")?;

    let (path, offset) = parse_caret(&args.caret)?;
    let container = editor
        .node_at(&path)
        .with_context(|| format!("no node at caret path {path:?}"))?;
    editor.set_selection(DomRange::collapsed_at(container, offset));
    println!("start  {}", editor.describe_selection());

    for name in args.keys.iter().filter(|k| !k.trim().is_empty()) {
        let key: NavigationKey = name.trim().parse()?;
        let handled = handle_key(&mut editor, key);
        let outcome = if handled { "handled" } else { "default" };
        println!("{:<6} {outcome:<8} {}", format!("{key:?}"), editor.describe_selection());
    }
    println!("{}", editor.markup());
    Ok(())
}
