use std::io::Write;

use flate2::{write::GzEncoder, Compression as GzLevel};
use polyfold::polycube::reader::{read_polycube, Compression};
use polyfold::{PlanePolycube, Position3, SurfaceGraph};

#[test]
fn reads_triples_until_exhausted() {
    let input = "0 0 0\n1 0 0\n1 1 0\n";
    let report = read_polycube(input.as_bytes()).unwrap();

    assert_eq!(report.triples, 3);
    assert_eq!(report.bad_token, None);
    assert_eq!(report.compression, Compression::None);
    assert_eq!(report.polycube.len(), 3);
    assert_eq!(
        report.polycube.get(Position3::new(1, 1, 0)).map(|c| c.index),
        Some(2)
    );
}

#[test]
fn any_whitespace_separates() {
    let report = read_polycube("  -1\t2\n\n3 4 5\r\n6".as_bytes()).unwrap();

    assert_eq!(report.triples, 2);
    assert!(report.polycube.contains(Position3::new(-1, 2, 3)));
    assert!(report.polycube.contains(Position3::new(4, 5, 6)));
}

#[test]
fn bad_token_truncates() {
    let report = read_polycube("0 0 0\n1 x 0\n2 0 0\n".as_bytes()).unwrap();

    assert_eq!(report.triples, 1);
    assert_eq!(report.bad_token.as_deref(), Some("x"));
    assert_eq!(report.polycube.len(), 1);
    assert!(!report.polycube.contains(Position3::new(1, 0, 0)));
}

#[test]
fn incomplete_triple_is_dropped() {
    let report = read_polycube("0 0 0 1 0".as_bytes()).unwrap();

    assert_eq!(report.triples, 1);
    assert_eq!(report.bad_token, None);
    assert_eq!(report.polycube.len(), 1);
}

#[test]
fn duplicates_overwrite_in_place() {
    let report = read_polycube("0 0 0\n1 0 0\n0 0 0\n2 0 0".as_bytes()).unwrap();

    assert_eq!(report.triples, 4);
    assert_eq!(report.polycube.len(), 3);
    assert!(report.polycube.connected());

    let indices: Vec<_> = report.polycube.cubes().map(|c| c.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn gzip_input_is_detected() {
    let mut encoder = GzEncoder::new(Vec::new(), GzLevel::default());
    encoder.write_all(b"0 0 0\n0 1 0\n0 2 0\n").unwrap();
    let bytes = encoder.finish().unwrap();

    let report = read_polycube(bytes.as_slice()).unwrap();

    assert_eq!(report.compression, Compression::Gzip);
    assert_eq!(report.triples, 3);
    assert!(report.polycube.orthotree());
}

#[test]
fn empty_input() {
    let report = read_polycube("".as_bytes()).unwrap();

    assert_eq!(report.triples, 0);
    assert!(report.polycube.is_empty());
}

#[test]
fn extreme_coordinates_stay_usable() {
    let input = "2147483647 0 0\n2147483646 0 0\n-2147483648 5 5\n";
    let report = read_polycube(input.as_bytes()).unwrap();

    assert_eq!(report.triples, 3);
    let cube = report.polycube;
    assert!(cube.contains(Position3::new(i32::MAX as i64, 0, 0)));
    assert!(!cube.contains(Position3::new(i32::MIN as i64 - 1, 5, 5)));
    assert!(!cube.connected());
    assert!(!cube.orthotree());
    assert_eq!(cube.degree(Position3::new(i32::MAX as i64, 0, 0)), 1);
    assert_eq!(SurfaceGraph::build(&cube).len(), 16);
}

#[test]
fn extreme_pair_unfolds() {
    let report = read_polycube("2147483647 -2147483648 0 2147483647 -2147483647 0".as_bytes()).unwrap();
    let plane = PlanePolycube::project(&report.polycube).unwrap();

    assert_eq!(plane.circumference().len(), 6);
    assert_eq!(plane.unfold().map(|u| u.len()), Some(10));
}

#[test]
fn out_of_range_token_truncates() {
    let report = read_polycube("0 0 0\n2147483648 0 0\n".as_bytes()).unwrap();

    assert_eq!(report.triples, 1);
    assert_eq!(report.bad_token.as_deref(), Some("2147483648"));
}

#[test]
fn invalid_utf8_is_an_error() {
    let err = read_polycube(&[b'0', b' ', 0xFF, 0xFE, b'\n'][..]).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
