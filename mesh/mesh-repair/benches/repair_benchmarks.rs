//! Benchmarks for mesh analysis and repair.
//!
//! Run with: cargo bench -p mesh-repair
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-repair -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-repair -- --baseline main

#![allow(missing_docs, clippy::cast_possible_truncation)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hashbrown::HashMap;
use mesh_repair::{analyze, repair};
use mesh_types::{IndexedMesh, TriangleSoup, Vertex, unit_cube};

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// Create an icosphere soup with the given subdivision level (20 * 4^n triangles).
fn create_sphere(subdivisions: u32) -> TriangleSoup {
    let phi = f64::midpoint(1.0, 5.0_f64.sqrt());
    let (a, b) = (1.0, 1.0 / phi);

    let ico_verts = [
        [0.0, b, -a],
        [b, a, 0.0],
        [-b, a, 0.0],
        [0.0, b, a],
        [0.0, -b, a],
        [-a, 0.0, b],
        [0.0, -b, -a],
        [a, 0.0, -b],
        [a, 0.0, b],
        [-a, 0.0, -b],
        [b, -a, 0.0],
        [-b, -a, 0.0],
    ];

    let mut mesh = IndexedMesh::new();
    for [x, y, z] in ico_verts {
        let len = (x * x + y * y + z * z).sqrt();
        mesh.vertices.push(Vertex::from_coords(x / len, y / len, z / len));
    }
    mesh.faces = vec![
        [0, 1, 2],
        [3, 2, 1],
        [3, 4, 5],
        [3, 8, 4],
        [0, 6, 7],
        [0, 9, 6],
        [4, 10, 11],
        [6, 11, 10],
        [2, 5, 9],
        [11, 9, 5],
        [1, 7, 8],
        [10, 8, 7],
        [3, 5, 2],
        [3, 1, 8],
        [0, 2, 9],
        [0, 7, 1],
        [6, 9, 11],
        [6, 10, 7],
        [4, 11, 5],
        [4, 8, 10],
    ];

    for _ in 0..subdivisions {
        mesh = subdivide_sphere(&mesh);
    }

    TriangleSoup::from_indexed(&mesh)
}

fn subdivide_sphere(mesh: &IndexedMesh) -> IndexedMesh {
    let mut new_mesh = IndexedMesh::new();
    new_mesh.vertices = mesh.vertices.clone();

    let mut edge_midpoints: HashMap<(u32, u32), u32> = HashMap::new();

    for &[v0, v1, v2] in &mesh.faces {
        let m01 = get_midpoint(v0, v1, &mut new_mesh.vertices, &mut edge_midpoints);
        let m12 = get_midpoint(v1, v2, &mut new_mesh.vertices, &mut edge_midpoints);
        let m20 = get_midpoint(v2, v0, &mut new_mesh.vertices, &mut edge_midpoints);

        new_mesh.faces.push([v0, m01, m20]);
        new_mesh.faces.push([v1, m12, m01]);
        new_mesh.faces.push([v2, m20, m12]);
        new_mesh.faces.push([m01, m12, m20]);
    }

    new_mesh
}

fn get_midpoint(
    v1: u32,
    v2: u32,
    vertices: &mut Vec<Vertex>,
    edge_midpoints: &mut HashMap<(u32, u32), u32>,
) -> u32 {
    let key = if v1 < v2 { (v1, v2) } else { (v2, v1) };

    if let Some(&idx) = edge_midpoints.get(&key) {
        return idx;
    }

    let mid = normalized_midpoint(&vertices[v1 as usize], &vertices[v2 as usize]);
    let idx = vertices.len() as u32;
    vertices.push(mid);
    edge_midpoints.insert(key, idx);
    idx
}

fn normalized_midpoint(a: &Vertex, b: &Vertex) -> Vertex {
    let m = a.position.coords.lerp(&b.position.coords, 0.5).normalize();
    Vertex::from_coords(m.x, m.y, m.z)
}

/// Sphere with every fourth triangle collapsed onto its first corner.
fn create_dirty_sphere(subdivisions: u32) -> TriangleSoup {
    let mut soup = create_sphere(subdivisions);
    for tri in soup
        .positions
        .chunks_exact_mut(TriangleSoup::FLOATS_PER_TRIANGLE)
        .step_by(4)
    {
        let (first, rest) = tri.split_at_mut(3);
        rest[..3].copy_from_slice(first);
    }
    soup
}

// =============================================================================
// Analysis Benchmarks
// =============================================================================

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("Analysis");

    let test_cases = [
        ("cube_12tri", TriangleSoup::from_indexed(&unit_cube())),
        ("sphere_320tri", create_sphere(2)),
        ("sphere_5120tri", create_sphere(4)),
        ("sphere_81920tri", create_sphere(6)),
    ];

    for (name, soup) in &test_cases {
        group.throughput(Throughput::Elements(soup.triangle_count() as u64));

        group.bench_with_input(BenchmarkId::new("analyze", name), soup, |b, soup| {
            b.iter(|| analyze(black_box(soup)));
        });
    }

    group.finish();
}

// =============================================================================
// Repair Benchmarks
// =============================================================================

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("Repair");

    let test_cases = [
        ("clean_sphere_5120tri", create_sphere(4)),
        ("dirty_sphere_5120tri", create_dirty_sphere(4)),
        ("dirty_sphere_81920tri", create_dirty_sphere(6)),
    ];

    for (name, soup) in &test_cases {
        group.throughput(Throughput::Elements(soup.triangle_count() as u64));

        group.bench_with_input(BenchmarkId::new("repair", name), soup, |b, soup| {
            b.iter(|| repair(black_box(soup)));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_analysis, bench_repair);

criterion_main!(benches);
