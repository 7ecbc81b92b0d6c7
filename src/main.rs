use anyhow::{Context, Result};
use clap::Parser;
use plotstyle::render::Canvas;
use plotstyle::{data, parser, presets, Overrides, StyleContext};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(name = "plotstyle")]
#[command(about = "Render styled charts from CSV data using named presets", long_about = None)]
struct Args {
    /// Preset name (see --list)
    #[arg(default_value = presets::DEFAULT_PRESET)]
    preset: String,

    /// List available presets and exit
    #[arg(long)]
    list: bool,

    /// Option override, e.g. --set 'font.size: 14' (repeatable)
    #[arg(long = "set", value_name = "KEY: VALUE")]
    set: Vec<String>,

    /// Option overrides as a JSON object, e.g. '{"figure.dpi": 200}'
    #[arg(long, value_name = "JSON")]
    overrides_json: Option<String>,

    /// Figure size in inches, applied after the preset
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    figsize: Option<Vec<f64>>,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// X column name (defaults to the first CSV column)
    #[arg(long)]
    x_col: Option<String>,

    /// Y column name (defaults to the second CSV column)
    #[arg(long)]
    y_col: Option<String>,

    /// Draw points instead of a connected line
    #[arg(long)]
    points: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        for name in presets::names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut overrides = Overrides::new();
    if let Some(ref json) = args.overrides_json {
        let value = serde_json::from_str(json).context("Failed to parse --overrides-json")?;
        overrides.extend(Overrides::from_json(&value)?);
    }
    for expr in &args.set {
        overrides.extend(parser::parse_assignments(expr)?);
    }

    let mut ctx = StyleContext::new();
    ctx.apply_style(&args.preset, &overrides)?;
    if let Some(ref figsize) = args.figsize {
        ctx.set_figsize(figsize[0], figsize[1]);
    }

    // Read CSV from stdin
    let series = data::read_series(io::stdin(), args.x_col.as_deref(), args.y_col.as_deref())
        .context("Failed to read CSV from stdin")?;

    let mut canvas = Canvas::new(ctx.options(), args.title.clone(), &series.x, &series.y)?;
    canvas.label_axes(&series.x_label, &series.y_label);
    if args.points {
        canvas.add_point_layer(&series.x, &series.y)?;
    } else {
        canvas.add_line_layer(&series.x, &series.y)?;
    }

    let png_bytes = canvas.render().context("Failed to render chart")?;

    // Write PNG to stdout
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(&png_bytes)
        .context("Failed to write PNG to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}
