//! GPX track export.
//!
//! Renders a matched route as a GPX 1.1 document with a single track and
//! segment, suitable for import into watches and running apps.

use std::fmt::Write;

use crate::core::GeoPoint;

/// Build a GPX 1.1 document from route coordinates.
pub fn write_gpx(coordinates: &[GeoPoint], name: &str, description: Option<&str>) -> String {
    let mut gpx = String::new();

    writeln!(&mut gpx, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
    writeln!(
        &mut gpx,
        r#"<gpx version="1.1" creator="rekha-route" xmlns="http://www.topografix.com/GPX/1/1">"#
    )
    .unwrap();
    writeln!(&mut gpx, "  <trk>").unwrap();
    writeln!(&mut gpx, "    <name>{}</name>", escape(name)).unwrap();
    if let Some(desc) = description {
        writeln!(&mut gpx, "    <desc>{}</desc>", escape(desc)).unwrap();
    }
    writeln!(&mut gpx, "    <trkseg>").unwrap();
    for point in coordinates {
        writeln!(
            &mut gpx,
            r#"      <trkpt lat="{:.7}" lon="{:.7}"/>"#,
            point.lat, point.lon
        )
        .unwrap();
    }
    writeln!(&mut gpx, "    </trkseg>").unwrap();
    writeln!(&mut gpx, "  </trk>").unwrap();
    writeln!(&mut gpx, "</gpx>").unwrap();

    gpx
}

/// Build a GPX document for a matched route, naming the track after the
/// symbol and the achieved distance.
pub fn gpx_for_route(coordinates: &[GeoPoint], symbol_id: &str, distance_m: f64) -> String {
    let distance_km = distance_m / 1000.0;
    let name = format!("{} - {:.2}km", symbol_id, distance_km);
    let description = format!(
        "Route matching '{}' shape, approximately {:.2}km",
        symbol_id, distance_km
    );
    write_gpx(coordinates, &name, Some(&description))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
