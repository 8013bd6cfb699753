use std::path::Path;

use console::Style;
use shotlens_core::color::{ClassificationResult, ColorBound, ColorMode, PickedColor};
use shotlens_core::viewport::Roi;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

fn print_bounds(s: &Styles, lower: &ColorBound, upper: &ColorBound) {
    println!(
        "    {:<12}{}",
        s.label.apply_to("Lower"),
        s.value.apply_to(format!("lower: {lower}"))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Upper"),
        s.value.apply_to(format!("upper: {upper}"))
    );
}

pub fn print_pick_summary(picked: &PickedColor, at: (i64, i64), tolerance: u8) {
    let s = Styles::new();
    print_title(&s, "Color Pick");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Pixel"),
        s.value.apply_to(format!("({}, {})", at.0, at.1))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("RGB"),
        s.value
            .apply_to(format!("[{}, {}, {}]", picked.rgb[0], picked.rgb[1], picked.rgb[2]))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mode"),
        s.method.apply_to(picked.mode)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Value"),
        s.value.apply_to(&picked.display)
    );
    println!();

    println!("  {}", s.header.apply_to("Copy"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Value"),
        picked.value_literal()
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Key/value"),
        picked.key_value_literal()
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Method"),
        picked.mode.code()
    );
    println!();

    let (lower, upper) = picked.range(tolerance);
    println!(
        "  {} {}",
        s.header.apply_to("Range"),
        s.label.apply_to(format!("(tolerance {tolerance})"))
    );
    print_bounds(&s, &lower, &upper);
    println!();
}

pub fn print_range_summary(
    mode: ColorMode,
    color: &ColorBound,
    tolerance: u8,
    lower: &ColorBound,
    upper: &ColorBound,
) {
    let s = Styles::new();
    print_title(&s, "Color Range");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Mode"),
        s.method.apply_to(format!("{mode} (method {})", mode.code()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Color"),
        s.value.apply_to(color)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Tolerance"),
        s.value.apply_to(tolerance)
    );
    println!();

    println!("  {}", s.header.apply_to("Bounds"));
    print_bounds(&s, lower, upper);
    println!();
}

pub fn print_classify_summary(
    file: &Path,
    mode: ColorMode,
    lower: &ColorBound,
    upper: &ColorBound,
    result: &ClassificationResult,
    overlay: Option<&Path>,
    composite: Option<&Path>,
) {
    let s = Styles::new();
    print_title(&s, "Classification");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(file.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mode"),
        s.method.apply_to(mode)
    );
    println!();

    println!("  {}", s.header.apply_to("Bounds"));
    print_bounds(&s, lower, upper);
    println!();

    println!("  {}", s.header.apply_to("Result"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Matched"),
        s.value.apply_to(format!(
            "{} / {} px",
            result.matched_count, result.total_pixels
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Share"),
        s.value
            .apply_to(format!("{:.2}%", result.match_fraction() * 100.0))
    );
    println!();

    for (label, path) in [("Overlay", overlay), ("Composite", composite)] {
        match path {
            Some(path) => println!(
                "  {:<14}{}",
                s.label.apply_to(label),
                s.path.apply_to(path.display())
            ),
            None => println!(
                "  {:<14}{}",
                s.label.apply_to(label),
                s.disabled.apply_to("not written")
            ),
        }
    }
    println!();
}

pub fn print_crop_summary(source: &Path, roi: Roi, output: &Path) {
    let s = Styles::new();
    print_title(&s, "Template");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Source"),
        s.path.apply_to(source.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}", roi.width, roi.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Saved"),
        s.path.apply_to(output.display())
    );
    println!();

    println!("  {}", s.header.apply_to("Copy"));
    println!("    {:<12}roi: {roi}", s.label.apply_to("ROI"));
    println!();
}
