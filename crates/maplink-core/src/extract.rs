//! Route extraction from GPX documents.
//!
//! Waypoints come from `gpx:rtept`. Garmin devices nest the detailed road
//! geometry between waypoints as `gpxx:rpt` elements inside each `rtept`'s
//! extensions; those become filler points owned by that waypoint.

use crate::error::{LinkError, Result};
use crate::models::{Coordinate, Point, Route};
use roxmltree::{Document, Node, ParsingOptions};
use std::fs;
use std::io;
use std::path::Path;

pub const GPX_NS: &str = "http://www.topografix.com/GPX/1/1";
pub const GPXX_NS: &str = "http://www.garmin.com/xmlschemas/GpxExtensions/v3";

/// Read and extract the route from a GPX file on disk.
pub fn read_route<P: AsRef<Path>>(path: P) -> Result<Route> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LinkError::FileNotFound(path.to_path_buf()),
        _ => LinkError::Io(err),
    })?;
    parse_route(&xml)
}

/// Extract the ordered route from GPX text.
pub fn parse_route(xml: &str) -> Result<Route> {
    // Some exporters emit a `<!DOCTYPE gpx>` line.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;
    let mut points = Vec::new();

    for rtept in doc.descendants().filter(|n| is_element(n, GPX_NS, "rtept")) {
        let Some(coord) = coordinate(&rtept) else {
            continue;
        };
        let owner = points.len();
        points.push(Point::waypoint(coord.clone(), owner));

        for rpt in rtept.descendants().filter(|n| is_element(n, GPXX_NS, "rpt")) {
            let Some(filler) = coordinate(&rpt) else {
                continue;
            };
            // Devices repeat the waypoint as the first path point.
            if filler == coord {
                continue;
            }
            let index = points.len();
            points.push(Point::filler(filler, index, owner));
        }
    }

    tracing::debug!(
        "Extracted {} points ({} waypoints)",
        points.len(),
        points.iter().filter(|p| p.mandatory).count()
    );
    Ok(Route::new(points))
}

fn is_element(node: &Node, namespace: &str, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(namespace)
}

fn coordinate(node: &Node) -> Option<Coordinate> {
    match (node.attribute("lat"), node.attribute("lon")) {
        (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
        _ => {
            tracing::warn!(
                "Skipping <{}> without lat/lon at byte {}",
                node.tag_name().name(),
                node.range().start
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gpx(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test"
     xmlns="http://www.topografix.com/GPX/1/1"
     xmlns:gpxx="http://www.garmin.com/xmlschemas/GpxExtensions/v3">
  <rte>{body}</rte>
</gpx>"#
        )
    }

    #[test]
    fn test_extracts_waypoints_and_owned_path_points() {
        let xml = gpx(r#"
            <rtept lat="10.0" lon="10.0">
              <extensions><gpxx:RoutePointExtension>
                <gpxx:rpt lat="10.0" lon="10.0"/>
                <gpxx:rpt lat="10.5" lon="10.5"/>
                <gpxx:rpt lat="11.0" lon="11.0"/>
              </gpxx:RoutePointExtension></extensions>
            </rtept>
            <rtept lat="20.0" lon="20.0"/>"#);

        let route = parse_route(&xml).unwrap();
        let tokens: Vec<&str> = route.points.iter().map(|p| p.coord.as_str()).collect();

        assert_eq!(tokens, ["10.0,10.0", "10.5,10.5", "11.0,11.0", "20.0,20.0"]);
        assert_eq!(route.mandatory_count(), 2);
        assert!(route.fillers().all(|p| p.owner == Some(0)));
        assert_eq!(route.points[3].index, 3);
    }

    #[test]
    fn duplicate_suppression_is_textual() {
        let xml = gpx(r#"
            <rtept lat="10.0" lon="10.0">
              <extensions><gpxx:RoutePointExtension>
                <gpxx:rpt lat="10.00" lon="10.0"/>
              </gpxx:RoutePointExtension></extensions>
            </rtept>"#);

        let route = parse_route(&xml).unwrap();
        assert_eq!(route.filler_count(), 1);
        assert_eq!(route.points[1].coord.as_str(), "10.00,10.0");
    }

    #[test]
    fn test_ignores_elements_outside_namespaces() {
        let xml = r#"<gpx xmlns="http://example.com/other">
            <rte><rtept lat="1" lon="1"/></rte></gpx>"#;
        let route = parse_route(xml).unwrap();
        assert!(route.points.is_empty());
    }

    #[test]
    fn test_skips_points_without_coordinates() {
        let xml = gpx(r#"<rtept lat="1.0"/><rtept lat="2.0" lon="2.0"/>"#);
        let route = parse_route(&xml).unwrap();
        assert_eq!(route.mandatory_count(), 1);
        assert_eq!(route.points[0].coord.as_str(), "2.0,2.0");
    }

    #[test]
    fn test_concatenates_multiple_routes() {
        let xml = r#"<gpx xmlns="http://www.topografix.com/GPX/1/1">
            <rte><rtept lat="1" lon="1"/></rte>
            <rte><rtept lat="2" lon="2"/></rte></gpx>"#;
        let route = parse_route(xml).unwrap();
        let tokens: Vec<&str> = route.waypoints().map(|p| p.coord.as_str()).collect();
        assert_eq!(tokens, ["1,1", "2,2"]);
    }

    #[test]
    fn test_accepts_doctype_declaration() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE gpx>
<gpx version="1.1" xmlns="http://www.topografix.com/GPX/1/1">
  <rte><rtept lat="1.0" lon="2.0"/></rte>
</gpx>"#;
        let route = parse_route(xml).unwrap();
        assert_eq!(route.mandatory_count(), 1);
        assert_eq!(route.points[0].coord.as_str(), "1.0,2.0");
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let err = parse_route("<gpx><rte>").unwrap_err();
        assert!(matches!(err, LinkError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let err = read_route("/definitely/not/here.gpx").unwrap_err();
        assert!(matches!(err, LinkError::FileNotFound(_)));
    }
}
