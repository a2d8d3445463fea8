use qrcode::render::svg;
use qrcode::QrCode;

// Smallest rendered edge, in pixels.
pub const QR_MIN_SIZE: u32 = 200;

// Render payload text as an SVG QR code.
pub fn render_svg(payload: &str) -> Result<String, qrcode::types::QrError> {
    let svg = QrCode::new(payload.as_bytes())?
        .render::<svg::Color>()
        .min_dimensions(QR_MIN_SIZE, QR_MIN_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();
    Ok(svg)
}
