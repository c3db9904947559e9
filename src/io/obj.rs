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

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{error::MeshResult, operations::triangulation::Triangulation};

/// Writes the mesh as a Wavefront OBJ file.
pub fn write_obj<P: AsRef<Path>>(mesh: &Triangulation, path: P) -> MeshResult<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_obj_to(mesh, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn write_obj_to<W: Write>(mesh: &Triangulation, out: &mut W) -> MeshResult<()> {
    for p in &mesh.points {
        writeln!(out, "v {:?} {:?} {:?}", p.x(), p.y(), p.z())?;
    }
    // OBJ is 1-based
    for t in &mesh.triangles {
        writeln!(out, "f {} {} {}", t[0] + 1, t[1] + 1, t[2] + 1)?;
    }
    Ok(())
}
