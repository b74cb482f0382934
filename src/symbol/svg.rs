//! SVG path ingestion.
//!
//! Parses uploaded SVG content, extracts the first `<path>` element and
//! samples points along its curve at uniform arc-length spacing. The
//! sampled sequence feeds [`normalize`](super::normalize); no coordinate
//! flipping is applied (SVG's y-down axis is preserved, matching the
//! orientation the shape was drawn in).

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg};
use svg::node::element::tag;
use svg::parser::Event;

use crate::core::ShapePoint;
use crate::error::{Error, Result};

/// Arc-length accuracy for curve evaluation, in path units.
const ARCLEN_ACCURACY: f64 = 1e-4;

/// Parse SVG content and sample `num_samples` points along its first path.
///
/// Fails with [`Error::SvgParse`] when the document has no `<path>` with a
/// `d` attribute or the path data is malformed, and with
/// [`Error::DegenerateShape`] when the path has zero drawable length.
pub fn parse_svg_to_points(svg_content: &str, num_samples: usize) -> Result<Vec<ShapePoint>> {
    if num_samples < 2 {
        return Err(Error::InvalidParameter(format!(
            "need at least 2 samples, got {}",
            num_samples
        )));
    }

    let path_data = extract_first_path(svg_content)?;
    let path = BezPath::from_svg(&path_data).map_err(|e| Error::SvgParse(e.to_string()))?;

    sample_path(&path, num_samples)
}

/// Extract the `d` attribute of the first `<path>` element.
fn extract_first_path(svg_content: &str) -> Result<String> {
    let parser = svg::read(svg_content).map_err(|e| Error::SvgParse(e.to_string()))?;

    for event in parser {
        match event {
            Event::Tag(tag::Path, _, attributes) => {
                if let Some(d) = attributes.get("d") {
                    return Ok(d.to_string());
                }
            }
            Event::Error(e) => return Err(Error::SvgParse(e.to_string())),
            _ => {}
        }
    }

    Err(Error::SvgParse(
        "no <path> element with a 'd' attribute found".to_string(),
    ))
}

/// Sample points at uniform arc-length spacing along a Bézier path.
fn sample_path(path: &BezPath, num_samples: usize) -> Result<Vec<ShapePoint>> {
    let segments: Vec<PathSeg> = path.segments().collect();
    if segments.is_empty() {
        return Err(Error::SvgParse("path has no drawable segments".to_string()));
    }

    let lengths: Vec<f64> = segments.iter().map(|s| s.arclen(ARCLEN_ACCURACY)).collect();
    let total: f64 = lengths.iter().sum();
    if total <= 0.0 {
        return Err(Error::DegenerateShape(
            "SVG path has zero length".to_string(),
        ));
    }

    let mut points = Vec::with_capacity(num_samples);
    let mut seg_idx = 0;
    let mut covered = 0.0;

    for i in 0..num_samples {
        let target = total * i as f64 / (num_samples - 1) as f64;

        // Advance to the segment containing the target arc length
        while seg_idx + 1 < segments.len() && covered + lengths[seg_idx] < target {
            covered += lengths[seg_idx];
            seg_idx += 1;
        }

        let seg = &segments[seg_idx];
        let local = (target - covered).clamp(0.0, lengths[seg_idx]);
        let t = if lengths[seg_idx] > 0.0 {
            seg.inv_arclen(local, ARCLEN_ACCURACY)
        } else {
            0.0
        };
        let p = seg.eval(t);
        points.push(ShapePoint::new(p.x, p.y));
    }

    Ok(points)
}
