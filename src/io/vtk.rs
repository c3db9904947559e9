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

//! VTK XML unstructured grid (`.vtu`) output.

use std::{
    fmt::Write as _,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{error::MeshResult, operations::triangulation::Triangulation};

/// VTK cell type of a linear triangle.
pub const VTK_TRIANGLE: u8 = 5;

/// Serializes the mesh as an ASCII VTK unstructured grid document.
pub fn to_vtu_string(mesh: &Triangulation) -> String {
    let mut points = String::new();
    for p in &mesh.points {
        let _ = write!(points, "{:.7} {:.7} {:.7} ", p.x(), p.y(), p.z());
    }

    let mut connectivity = String::new();
    for t in &mesh.triangles {
        let _ = write!(connectivity, "{} {} {} ", t[0], t[1], t[2]);
    }

    let mut offsets = String::new();
    let mut types = String::new();
    for i in 1..=mesh.triangles.len() {
        let _ = write!(offsets, " {}", i * 3);
        let _ = write!(types, " {VTK_TRIANGLE}");
    }

    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\"?>\n");
    doc.push_str(
        "<VTKFile type=\"UnstructuredGrid\" version=\"0.1\" byte_order=\"LittleEndian\">\n",
    );
    doc.push_str("  <UnstructuredGrid>\n");
    let _ = writeln!(
        doc,
        "    <Piece NumberOfPoints=\"{}\" NumberOfCells=\"{}\">",
        mesh.points.len(),
        mesh.triangles.len()
    );
    doc.push_str("      <Points>\n");
    let _ = writeln!(
        doc,
        "        <DataArray type=\"Float32\" NumberOfComponents=\"3\" format=\"ascii\">{}</DataArray>",
        points.trim_end()
    );
    doc.push_str("      </Points>\n");
    doc.push_str("      <Cells>\n");
    for (name, data) in [
        ("connectivity", connectivity.trim_end()),
        ("offsets", offsets.trim_start()),
        ("types", types.trim_start()),
    ] {
        let _ = writeln!(
            doc,
            "        <DataArray type=\"Int32\" Name=\"{name}\" format=\"ascii\">{data}</DataArray>"
        );
    }
    doc.push_str("      </Cells>\n");
    doc.push_str("    </Piece>\n");
    doc.push_str("  </UnstructuredGrid>\n");
    doc.push_str("</VTKFile>\n");
    doc
}

pub fn write_vtu<P: AsRef<Path>>(mesh: &Triangulation, path: P) -> MeshResult<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    out.write_all(to_vtu_string(mesh).as_bytes())?;
    out.flush()?;
    Ok(())
}
