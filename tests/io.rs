// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use frontmesh::geometry::Point3;
use frontmesh::io::{to_vtu_string, write_obj, write_obj_to, write_vtu};
use frontmesh::{AdvancingFrontParams, MeshError, Region, Triangulation, triangulate};

fn unit_square() -> Triangulation {
    let region = Region::polygon(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ]);
    triangulate(&region, &AdvancingFrontParams::default()).unwrap()
}

#[test]
fn vtu_document_layout() {
    let mesh = unit_square();
    let doc = to_vtu_string(&mesh);

    assert!(doc.starts_with("<?xml version=\"1.0\"?>\n"));
    assert!(doc.contains("<VTKFile type=\"UnstructuredGrid\""));
    assert!(doc.contains("<Piece NumberOfPoints=\"4\" NumberOfCells=\"2\">"));
    assert!(doc.contains("0.0000000 0.0000000 0.0000000 1.0000000 0.0000000 0.0000000"));
    assert!(doc.contains("Name=\"offsets\" format=\"ascii\">3 6</DataArray>"));
    assert!(doc.contains("Name=\"types\" format=\"ascii\">5 5</DataArray>"));
    assert!(doc.trim_end().ends_with("</VTKFile>"));

    let connectivity = doc
        .lines()
        .find(|l| l.contains("Name=\"connectivity\""))
        .unwrap();
    let body = connectivity
        .split('>')
        .nth(1)
        .and_then(|s| s.split('<').next())
        .unwrap();
    let ids: Vec<usize> = body.split_whitespace().map(|s| s.parse().unwrap()).collect();
    assert_eq!(ids.len(), 6);
    assert!(ids.iter().all(|&i| i < 4));
}

#[test]
fn vtu_file_matches_string() {
    let mesh = unit_square();
    let path = std::env::temp_dir().join(format!("frontmesh-{}.vtu", std::process::id()));
    write_vtu(&mesh, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, to_vtu_string(&mesh));
}

#[test]
fn obj_is_one_based() {
    let mesh = unit_square();
    let mut buf = Vec::new();
    write_obj_to(&mesh, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(text.lines().next(), Some("v 0.0 0.0 0.0"));
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
    let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
    assert_eq!(faces.len(), 2);
    for f in faces {
        for idx in f.split_whitespace().skip(1) {
            let i: usize = idx.parse().unwrap();
            assert!((1..=4).contains(&i));
        }
    }
}

#[test]
fn write_errors_are_reported() {
    let mesh = unit_square();
    let path = std::env::temp_dir()
        .join("frontmesh-missing-dir")
        .join("nested")
        .join("out.obj");
    assert!(matches!(write_obj(&mesh, &path), Err(MeshError::Io(_))));
}
