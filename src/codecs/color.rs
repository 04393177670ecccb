//! Color parsing, format detection and conversion.
//!
//! Every color goes through [`Rgba`] (sRGB channels 0–255, alpha 0–1). Detection only
//! recognises hex and the functional notations; CSS keywords parse as colors but have
//! no [`ColorFormat`].

use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::color_names;
use crate::core::errors::UnknownNameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    Hwb,
    Lch,
    Cmyk,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 6] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Hsl,
        ColorFormat::Hwb,
        ColorFormat::Lch,
        ColorFormat::Cmyk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hwb => "hwb",
            ColorFormat::Lch => "lch",
            ColorFormat::Cmyk => "cmyk",
        }
    }

    fn parser(&self) -> fn(&str) -> Option<Rgba> {
        match self {
            ColorFormat::Hex => parse_hex,
            ColorFormat::Rgb => parse_rgb,
            ColorFormat::Hsl => parse_hsl,
            ColorFormat::Hwb => parse_hwb,
            ColorFormat::Lch => parse_lch,
            ColorFormat::Cmyk => parse_cmyk,
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" | "rgba" => Ok(ColorFormat::Rgb),
            "hsl" | "hsla" => Ok(ColorFormat::Hsl),
            "hwb" => Ok(ColorFormat::Hwb),
            "lch" => Ok(ColorFormat::Lch),
            "cmyk" | "device-cmyk" => Ok(ColorFormat::Cmyk),
            _ => Err(UnknownNameError::with_candidates(
                "color format",
                s,
                &ColorFormat::ALL.map(|c| c.as_str()),
            )),
        }
    }
}

/// sRGB color with unrounded channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 255.0),
            g: g.clamp(0.0, 255.0),
            b: b.clamp(0.0, 255.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    fn from_rgb24(rgb: u32) -> Self {
        Self::new(
            ((rgb >> 16) & 0xff) as f64,
            ((rgb >> 8) & 0xff) as f64,
            (rgb & 0xff) as f64,
            1.0,
        )
    }

    /// Rounded channels packed as `0xRRGGBB`.
    pub fn to_rgb24(&self) -> u32 {
        ((self.r.round() as u32) << 16) | ((self.g.round() as u32) << 8) | self.b.round() as u32
    }

    fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

// ============================================================================
// Detection and parsing
// ============================================================================

/// Format of a hex or functional-notation color. Keywords such as `red` are `None`.
pub fn get_color_format(text: &str) -> Option<ColorFormat> {
    let text = text.trim();
    let found = ColorFormat::ALL
        .into_iter()
        .find(|format| format.parser()(text).is_some());
    log::debug!("color detection: {:?}", found);
    found
}

/// Parse any supported notation, CSS keywords included.
pub fn parse_color(text: &str) -> Option<Rgba> {
    let text = text.trim();
    if let Some(format) = get_color_format(text) {
        return format.parser()(text);
    }
    if text.eq_ignore_ascii_case("transparent") {
        return Some(Rgba::new(0.0, 0.0, 0.0, 0.0));
    }
    color_names::lookup(text).map(Rgba::from_rgb24)
}

fn parse_hex(text: &str) -> Option<Rgba> {
    let digits = text.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    let alpha = if expanded.len() == 8 {
        channel(6)? as f64 / 255.0
    } else {
        1.0
    };
    Some(Rgba::new(
        channel(0)? as f64,
        channel(2)? as f64,
        channel(4)? as f64,
        alpha,
    ))
}

/// Arguments of `name(...)`, in comma or space syntax, with the optional alpha split off.
///
/// In comma syntax the alpha is the one argument past `arity`.
fn function_args(
    text: &str,
    names: &[&str],
    arity: usize,
) -> Option<(Vec<String>, Option<String>)> {
    let lower = text.to_ascii_lowercase();
    let open = lower.find('(')?;
    if !names.contains(&lower[..open].trim_end()) {
        return None;
    }
    let inner = lower[open + 1..].strip_suffix(')')?.trim();

    if inner.contains(',') {
        let mut parts: Vec<String> = inner.split(',').map(|p| p.trim().to_string()).collect();
        let alpha = if parts.len() == arity + 1 { parts.pop() } else { None };
        return Some((parts, alpha));
    }

    let (main, alpha) = match inner.split_once('/') {
        Some((main, alpha)) => (main, Some(alpha.trim().to_string())),
        None => (inner, None),
    };
    Some((main.split_whitespace().map(str::to_string).collect(), alpha))
}

fn parse_number(value: &str) -> Option<f64> {
    let n: f64 = value.parse().ok()?;
    n.is_finite().then_some(n)
}

fn parse_percent(value: &str) -> Option<f64> {
    parse_number(value.strip_suffix('%')?)
}

/// Percentage, or a bare number read as a percentage.
fn parse_percent_loose(value: &str) -> Option<f64> {
    parse_percent(value).or_else(|| parse_number(value))
}

fn parse_alpha(value: Option<&String>) -> Option<f64> {
    match value {
        None => Some(1.0),
        Some(v) => parse_percent(v)
            .map(|p| p / 100.0)
            .or_else(|| parse_number(v)),
    }
}

/// Hue in degrees, normalised to [0, 360).
fn parse_hue(value: &str) -> Option<f64> {
    let degrees = if let Some(v) = value.strip_suffix("deg") {
        parse_number(v)?
    } else if let Some(v) = value.strip_suffix("grad") {
        parse_number(v)? * 0.9
    } else if let Some(v) = value.strip_suffix("rad") {
        parse_number(v)? * 180.0 / PI
    } else if let Some(v) = value.strip_suffix("turn") {
        parse_number(v)? * 360.0
    } else {
        parse_number(value)?
    };
    Some(degrees.rem_euclid(360.0))
}

fn parse_rgb(text: &str) -> Option<Rgba> {
    let (args, alpha) = function_args(text, &["rgb", "rgba"], 3)?;
    let [r, g, b] = args.as_slice() else {
        return None;
    };
    fn channel(v: &str) -> Option<f64> {
        parse_percent(v).map(|p| p * 2.55).or_else(|| parse_number(v))
    }
    Some(Rgba::new(
        channel(r)?,
        channel(g)?,
        channel(b)?,
        parse_alpha(alpha.as_ref())?,
    ))
}

fn parse_hsl(text: &str) -> Option<Rgba> {
    let (args, alpha) = function_args(text, &["hsl", "hsla"], 3)?;
    let [h, s, l] = args.as_slice() else {
        return None;
    };
    let (r, g, b) = hsl_to_rgb(
        parse_hue(h)?,
        parse_percent_loose(s)?.clamp(0.0, 100.0) / 100.0,
        parse_percent_loose(l)?.clamp(0.0, 100.0) / 100.0,
    );
    Some(Rgba::new(r, g, b, parse_alpha(alpha.as_ref())?))
}

fn parse_hwb(text: &str) -> Option<Rgba> {
    let (args, alpha) = function_args(text, &["hwb"], 3)?;
    let [h, w, bl] = args.as_slice() else {
        return None;
    };
    let (r, g, b) = hwb_to_rgb(
        parse_hue(h)?,
        parse_percent_loose(w)?.clamp(0.0, 100.0) / 100.0,
        parse_percent_loose(bl)?.clamp(0.0, 100.0) / 100.0,
    );
    Some(Rgba::new(r, g, b, parse_alpha(alpha.as_ref())?))
}

fn parse_lch(text: &str) -> Option<Rgba> {
    let (args, alpha) = function_args(text, &["lch"], 3)?;
    let [l, c, h] = args.as_slice() else {
        return None;
    };
    let (r, g, b) = lch_to_rgb(
        parse_percent_loose(l)?.clamp(0.0, 100.0),
        parse_number(c)?.max(0.0),
        parse_hue(h)?,
    );
    Some(Rgba::new(r, g, b, parse_alpha(alpha.as_ref())?))
}

fn parse_cmyk(text: &str) -> Option<Rgba> {
    let (args, alpha) = function_args(text, &["device-cmyk"], 4)?;
    let [c, m, y, k] = args.as_slice() else {
        return None;
    };
    fn unit(v: &str) -> Option<f64> {
        parse_percent(v)
            .map(|p| p / 100.0)
            .or_else(|| parse_number(v))
            .map(|n| n.clamp(0.0, 1.0))
    }
    let k = unit(k)?;
    Some(Rgba::new(
        255.0 * (1.0 - unit(c)?) * (1.0 - k),
        255.0 * (1.0 - unit(m)?) * (1.0 - k),
        255.0 * (1.0 - unit(y)?) * (1.0 - k),
        parse_alpha(alpha.as_ref())?,
    ))
}

// ============================================================================
// Color space math
// ============================================================================

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;
    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    ((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
}

fn hwb_to_rgb(h: f64, w: f64, b: f64) -> (f64, f64, f64) {
    if w + b >= 1.0 {
        let gray = w / (w + b) * 255.0;
        return (gray, gray, gray);
    }
    let (r, g, bl) = hsl_to_rgb(h, 1.0, 0.5);
    let scale = |v: f64| v * (1.0 - w - b) + w * 255.0;
    (scale(r), scale(g), scale(bl))
}

/// Hue (degrees) shared by HSL and HWB.
fn hue_of(r: f64, g: f64, b: f64) -> f64 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h * 60.0
}

fn rgb_to_hsl(c: &Rgba) -> (f64, f64, f64) {
    let (r, g, b) = (c.r / 255.0, c.g / 255.0, c.b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    (hue_of(r, g, b), s * 100.0, l * 100.0)
}

fn rgb_to_hwb(c: &Rgba) -> (f64, f64, f64) {
    let (r, g, b) = (c.r / 255.0, c.g / 255.0, c.b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    (hue_of(r, g, b), min * 100.0, (1.0 - max) * 100.0)
}

fn rgb_to_cmyk(c: &Rgba) -> (f64, f64, f64, f64) {
    let (r, g, b) = (c.r / 255.0, c.g / 255.0, c.b / 255.0);
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return (0.0, 0.0, 0.0, 100.0);
    }
    let part = |v: f64| (1.0 - v - k) / (1.0 - k) * 100.0;
    (part(r), part(g), part(b), k * 100.0)
}

// D50 reference white, XYZ scaled to 0–100
const D50: (f64, f64, f64) = (96.422, 100.0, 82.521);
const LAB_E: f64 = 216.0 / 24389.0;
const LAB_K: f64 = 24389.0 / 27.0;

fn linearize(channel: f64) -> f64 {
    let c = channel / 255.0;
    if c < 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn unlinearize(c: f64) -> f64 {
    let v = if c > 0.0031308 {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * c
    };
    v * 255.0
}

/// sRGB to CIE LCh, Bradford-adapted to D50.
fn rgb_to_lch(c: &Rgba) -> (f64, f64, f64) {
    let (r, g, b) = (linearize(c.r), linearize(c.g), linearize(c.b));
    let x = (r * 0.4124564 + g * 0.3575761 + b * 0.1804375) * 100.0;
    let y = (r * 0.2126729 + g * 0.7151522 + b * 0.0721750) * 100.0;
    let z = (r * 0.0193339 + g * 0.1191920 + b * 0.9503041) * 100.0;

    let x50 = (x * 1.0478112 + y * 0.0228866 + z * -0.0501270).clamp(0.0, D50.0);
    let y50 = (x * 0.0295424 + y * 0.9904844 + z * -0.0170491).clamp(0.0, D50.1);
    let z50 = (x * -0.0092345 + y * 0.0150436 + z * 0.7521316).clamp(0.0, D50.2);

    let f = |t: f64| {
        if t > LAB_E {
            t.cbrt()
        } else {
            (LAB_K * t + 16.0) / 116.0
        }
    };
    let (fx, fy, fz) = (f(x50 / D50.0), f(y50 / D50.1), f(z50 / D50.2));

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let bb = 200.0 * (fy - fz);
    let chroma = (a * a + bb * bb).sqrt();
    let hue = bb.atan2(a).to_degrees().rem_euclid(360.0);
    (l, chroma, hue)
}

fn lch_to_rgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let a = c * h.to_radians().cos();
    let b = c * h.to_radians().sin();

    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;
    let xr = if fx.powi(3) > LAB_E {
        fx.powi(3)
    } else {
        (116.0 * fx - 16.0) / LAB_K
    };
    let yr = if l > LAB_K * LAB_E {
        fy.powi(3)
    } else {
        l / LAB_K
    };
    let zr = if fz.powi(3) > LAB_E {
        fz.powi(3)
    } else {
        (116.0 * fz - 16.0) / LAB_K
    };
    let (x50, y50, z50) = (xr * D50.0, yr * D50.1, zr * D50.2);

    let x = x50 * 0.9555766 + y50 * -0.0230393 + z50 * 0.0631636;
    let y = x50 * -0.0282895 + y50 * 1.0099416 + z50 * 0.0210077;
    let z = x50 * 0.0122982 + y50 * -0.0204830 + z50 * 1.3299098;

    (
        unlinearize(0.032404542 * x - 0.015371385 * y - 0.004985314 * z),
        unlinearize(-0.00969266 * x + 0.018760108 * y + 0.00041556 * z),
        unlinearize(0.000556434 * x - 0.002040259 * y + 0.010572252 * z),
    )
}

// ============================================================================
// Output
// ============================================================================

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    let rounded = (value * factor).round() / factor;
    // Avoid printing "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

fn alpha_suffix(c: &Rgba) -> String {
    if c.is_opaque() {
        String::new()
    } else {
        format!(" / {}", round_to(c.a, 3))
    }
}

/// Render in `target`'s canonical CSS form.
pub fn format_color(color: &Rgba, target: ColorFormat) -> String {
    match target {
        ColorFormat::Hex => {
            let mut hex = format!(
                "#{:02x}{:02x}{:02x}",
                color.r.round() as u8,
                color.g.round() as u8,
                color.b.round() as u8
            );
            if !color.is_opaque() {
                hex.push_str(&format!("{:02x}", (color.a * 255.0).round() as u8));
            }
            hex
        }
        ColorFormat::Rgb => {
            let (r, g, b) = (color.r.round(), color.g.round(), color.b.round());
            if color.is_opaque() {
                format!("rgb({r}, {g}, {b})")
            } else {
                format!("rgba({r}, {g}, {b}, {})", round_to(color.a, 3))
            }
        }
        ColorFormat::Hsl => {
            let (h, s, l) = rgb_to_hsl(color);
            let (h, s, l) = (round_to(h, 0), round_to(s, 0), round_to(l, 0));
            if color.is_opaque() {
                format!("hsl({h}, {s}%, {l}%)")
            } else {
                format!("hsla({h}, {s}%, {l}%, {})", round_to(color.a, 3))
            }
        }
        ColorFormat::Hwb => {
            let (h, w, b) = rgb_to_hwb(color);
            format!(
                "hwb({} {}% {}%{})",
                round_to(h, 0),
                round_to(w, 0),
                round_to(b, 0),
                alpha_suffix(color)
            )
        }
        ColorFormat::Lch => {
            let (l, c, h) = rgb_to_lch(color);
            format!(
                "lch({}% {} {}{})",
                round_to(l, 2),
                round_to(c, 2),
                round_to(h, 2),
                alpha_suffix(color)
            )
        }
        ColorFormat::Cmyk => {
            let (c, m, y, k) = rgb_to_cmyk(color);
            format!(
                "device-cmyk({}% {}% {}% {}%{})",
                round_to(c, 2),
                round_to(m, 2),
                round_to(y, 2),
                round_to(k, 2),
                alpha_suffix(color)
            )
        }
    }
}

/// Parse `text` and render it in `target`.
pub fn convert_color(text: &str, target: ColorFormat) -> Option<String> {
    parse_color(text).map(|color| format_color(&color, target))
}

/// Every rendering of `color`, in [`ColorFormat::ALL`] order.
pub fn convert_all(color: &Rgba) -> Vec<(ColorFormat, String)> {
    ColorFormat::ALL
        .into_iter()
        .map(|format| (format, format_color(color, format)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Rgba {
        Rgba::new(255.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_named_colors_have_no_format() {
        assert_eq!(get_color_format("red"), None);
        assert_eq!(get_color_format("#ff0000"), Some(ColorFormat::Hex));
        assert_eq!(parse_color("red"), Some(red()));
        assert_eq!(parse_color("transparent").map(|c| c.a), Some(0.0));
    }

    #[test]
    fn test_detect_functional_notations() {
        assert_eq!(get_color_format("rgb(255, 0, 0)"), Some(ColorFormat::Rgb));
        assert_eq!(get_color_format("rgba(255 0 0 / 50%)"), Some(ColorFormat::Rgb));
        assert_eq!(get_color_format("hsl(0, 100%, 50%)"), Some(ColorFormat::Hsl));
        assert_eq!(get_color_format("hwb(0 0% 0%)"), Some(ColorFormat::Hwb));
        assert_eq!(
            get_color_format("lch(54.29% 106.84 40.85)"),
            Some(ColorFormat::Lch)
        );
        assert_eq!(
            get_color_format("device-cmyk(0% 100% 100% 0%)"),
            Some(ColorFormat::Cmyk)
        );
        assert_eq!(get_color_format("rgb(1, 2)"), None);
        assert_eq!(get_color_format("#ff00"), Some(ColorFormat::Hex));
        assert_eq!(get_color_format("#ff000"), None);
        assert_eq!(get_color_format("not a color"), None);
    }

    #[test]
    fn test_cmyk_comma_syntax() {
        let red = Some(Rgba::new(255.0, 0.0, 0.0, 1.0));
        assert_eq!(
            get_color_format("device-cmyk(0%, 100%, 100%, 0%)"),
            Some(ColorFormat::Cmyk)
        );
        assert_eq!(parse_color("device-cmyk(0%, 100%, 100%, 0%)"), red);
        assert_eq!(parse_color("device-cmyk(0, 1, 1, 0)"), red);
        assert_eq!(
            parse_color("device-cmyk(0, 1, 1, 0, 0.5)").map(|c| c.a),
            Some(0.5)
        );
        assert_eq!(get_color_format("rgb(255, 0, 0, 0.5, 1)"), None);
    }

    #[test]
    fn test_format_red() {
        let color = red();
        assert_eq!(format_color(&color, ColorFormat::Hex), "#ff0000");
        assert_eq!(format_color(&color, ColorFormat::Rgb), "rgb(255, 0, 0)");
        assert_eq!(format_color(&color, ColorFormat::Hsl), "hsl(0, 100%, 50%)");
        assert_eq!(format_color(&color, ColorFormat::Hwb), "hwb(0 0% 0%)");
        assert_eq!(
            format_color(&color, ColorFormat::Cmyk),
            "device-cmyk(0% 100% 100% 0%)"
        );
    }

    #[test]
    fn test_lch_round_trip() {
        let lch = format_color(&red(), ColorFormat::Lch);
        assert!(lch.starts_with("lch(54."), "{lch}");
        assert_eq!(convert_color(&lch, ColorFormat::Hex).as_deref(), Some("#ff0000"));

        let white = format_color(&Rgba::new(255.0, 255.0, 255.0, 1.0), ColorFormat::Lch);
        assert_eq!(convert_color(&white, ColorFormat::Hex).as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_alpha_output() {
        let color = parse_color("#ff000080").unwrap();
        assert_eq!(format_color(&color, ColorFormat::Hex), "#ff000080");
        assert_eq!(
            format_color(&color, ColorFormat::Rgb),
            "rgba(255, 0, 0, 0.502)"
        );
        assert_eq!(
            format_color(&color, ColorFormat::Hwb),
            "hwb(0 0% 0% / 0.502)"
        );
    }

    #[test]
    fn test_conversions_between_formats() {
        assert_eq!(
            convert_color("hsl(210, 100%, 50%)", ColorFormat::Hex).as_deref(),
            Some("#0080ff")
        );
        assert_eq!(
            convert_color("#3296fa", ColorFormat::Hsl).as_deref(),
            Some("hsl(210, 95%, 59%)")
        );
        assert_eq!(
            convert_color("hwb(120 20% 20%)", ColorFormat::Rgb).as_deref(),
            Some("rgb(51, 204, 51)")
        );
        assert_eq!(
            convert_color("device-cmyk(0% 0% 33.33% 40%)", ColorFormat::Hex).as_deref(),
            Some("#999966")
        );
        assert_eq!(
            convert_color("#999966", ColorFormat::Cmyk).as_deref(),
            Some("device-cmyk(0% 0% 33.33% 40%)")
        );
        assert_eq!(convert_color("bogus", ColorFormat::Hex), None);
    }

    #[test]
    fn test_hue_units() {
        let turn = convert_color("hsl(0.5turn 100% 50%)", ColorFormat::Hex);
        assert_eq!(turn.as_deref(), Some("#00ffff"));
        let negative = convert_color("hsl(-120deg, 100%, 50%)", ColorFormat::Hex);
        assert_eq!(negative.as_deref(), Some("#0000ff"));
    }

    #[test]
    fn test_color_format_from_str() {
        assert_eq!("RGBA".parse::<ColorFormat>().unwrap(), ColorFormat::Rgb);
        let err = "hsv".parse::<ColorFormat>().unwrap_err();
        assert_eq!(err.suggestion.as_deref(), Some("hsl"));
    }
}
