use std::path::Path;

use console::Style;
use cropcircle_core::geometry::{slider_to_zoom, ZoomBounds};
use cropcircle_core::intake::{ImageFile, SourceImage};
use cropcircle_core::session::EditSession;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    warn: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            warn: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_image_info(
    path: &Path,
    file: &ImageFile,
    image: &SourceImage,
    bounds: &ZoomBounds,
    viewport_size: u32,
) {
    let s = Styles::new();

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(path.display())
    );
    println!("  {:<14}{}", s.label.apply_to("Type"), s.value.apply_to(&file.mime));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{:.1} KB", file.size() as f64 / 1024.0))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{}x{}", image.width(), image.height()))
    );
    println!();

    println!(
        "  {}",
        s.header.apply_to(format!("Zoom ({viewport_size}px viewport)"))
    );
    for slider in [0u8, 25, 50, 75, 100] {
        println!(
            "    {:<12}{}",
            s.label.apply_to(format!("slider {slider}")),
            s.value.apply_to(format!("{:.4}", slider_to_zoom(slider, bounds)))
        );
    }
    println!();
}

pub fn print_session_summary(input: &Path, session: &EditSession) {
    let s = Styles::new();
    let spec = session.spec();
    let rect = session.source_rect();
    let source = session.source();

    println!();
    println!("  {}", s.title.apply_to("Avatar Crop"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(11)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{}x{}", source.width(), source.height()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.value.apply_to(format!(
            "{0}x{0} JPEG q{1}",
            spec.output_size, spec.jpeg_quality
        ))
    );
    println!();

    println!("  {}", s.header.apply_to("View"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Slider"),
        s.value.apply_to(session.slider())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!(
            "{:.4} (min {:.4}, fit {:.4})",
            session.zoom(),
            session.bounds().min_zoom,
            session.bounds().fit_zoom
        ))
    );
    let offset = session.offset();
    println!(
        "    {:<12}{}",
        s.label.apply_to("Offset"),
        s.value.apply_to(format!("{:.1}, {:.1}", offset.x, offset.y))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Region"),
        s.value.apply_to(format!(
            "{:.1},{:.1} {:.1}px",
            rect.x(),
            rect.y(),
            rect.size
        ))
    );
    if !rect.is_within(source.width(), source.height()) {
        println!(
            "    {:<12}{}",
            "",
            s.warn.apply_to("region extends past the image; padded with fill")
        );
    }
    println!();
}
