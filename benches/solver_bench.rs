//! Benchmarks for the frame solver

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frame_solver::prelude::*;

fn create_cantilever() -> Structure {
    let steel = Material::steel();
    let section = Section::rectangular(0.3, 0.5);

    let mut s = Structure::new();
    s.add_node(Node::new("N1", 0.0, 0.0).with_constraints(NodeConstraint::fixed()))
        .unwrap();
    s.add_node(Node::new("N2", 10.0, 0.0)).unwrap();
    s.add_member(Member::from_section("M1", "N1", "N2", &steel, &section))
        .unwrap();
    s.add_load(NodeLoad::fy("N2", -10000.0));
    s
}

fn create_multi_story_frame(stories: usize, bays: usize) -> Structure {
    let steel = Material::steel();
    let column = Section::rectangular(0.4, 0.4);
    let beam = Section::rectangular(0.3, 0.6);

    let story_height = 3.5;
    let bay_width = 6.0;

    let mut s = Structure::new();

    for story in 0..=stories {
        for bay in 0..=bays {
            let mut node = Node::new(
                &format!("N{}_{}", story, bay),
                bay as f64 * bay_width,
                story as f64 * story_height,
            );
            if story == 0 {
                node = node.with_constraints(NodeConstraint::fixed());
            }
            s.add_node(node).unwrap();
        }
    }

    for story in 0..stories {
        for bay in 0..=bays {
            let name = format!("Col{}_{}", story, bay);
            let i_node = format!("N{}_{}", story, bay);
            let j_node = format!("N{}_{}", story + 1, bay);
            s.add_member(Member::from_section(&name, &i_node, &j_node, &steel, &column))
                .unwrap();
        }
    }

    for story in 1..=stories {
        for bay in 0..bays {
            let name = format!("Beam{}_{}", story, bay);
            let i_node = format!("N{}_{}", story, bay);
            let j_node = format!("N{}_{}", story, bay + 1);
            s.add_member(Member::from_section(&name, &i_node, &j_node, &steel, &beam))
                .unwrap();
        }
    }

    for story in 1..=stories {
        for bay in 0..=bays {
            s.add_load(NodeLoad::new(&format!("N{}_{}", story, bay), 5000.0, -50000.0, 0.0));
        }
    }

    s
}

/// Statically determinate Warren truss with `panels` bottom-chord panels
fn create_warren_truss(panels: usize) -> Structure {
    let panel = 2.0;
    let height = 1.5;

    let mut s = Structure::new();
    for k in 0..=panels {
        let constraint = match k {
            0 => NodeConstraint::pinned(),
            k if k == panels => NodeConstraint::roller_y(),
            _ => NodeConstraint::free(),
        };
        s.add_node(Node::new(&format!("B{}", k), k as f64 * panel, 0.0).with_constraints(constraint))
            .unwrap();
    }
    for k in 0..panels {
        s.add_node(Node::new(&format!("T{}", k), (k as f64 + 0.5) * panel, height))
            .unwrap();
    }

    let mut add = |id: String, a: String, b: String| {
        s.add_member(Member::new(&id, &a, &b, 200e9, 1e-6, 1e-3)).unwrap();
    };
    for k in 0..panels {
        add(format!("BC{}", k), format!("B{}", k), format!("B{}", k + 1));
        add(format!("DL{}", k), format!("B{}", k), format!("T{}", k));
        add(format!("DR{}", k), format!("T{}", k), format!("B{}", k + 1));
    }
    for k in 0..panels.saturating_sub(1) {
        add(format!("TC{}", k), format!("T{}", k), format!("T{}", k + 1));
    }

    for k in 0..panels {
        s.add_load(NodeLoad::fy(&format!("T{}", k), -10000.0));
    }
    s
}

fn benchmark_cantilever(c: &mut Criterion) {
    let structure = create_cantilever();
    c.bench_function("cantilever_frame", |b| {
        b.iter(|| black_box(analyze(black_box(&structure), AnalysisType::Frame).unwrap()))
    });
}

fn benchmark_small_frame(c: &mut Criterion) {
    let structure = create_multi_story_frame(3, 2);
    c.bench_function("frame_3story_2bay", |b| {
        b.iter(|| black_box(analyze(black_box(&structure), AnalysisType::Frame).unwrap()))
    });
}

fn benchmark_medium_frame(c: &mut Criterion) {
    let structure = create_multi_story_frame(10, 5);
    c.bench_function("frame_10story_5bay", |b| {
        b.iter(|| black_box(analyze(black_box(&structure), AnalysisType::Frame).unwrap()))
    });
}

fn benchmark_warren_truss(c: &mut Criterion) {
    let structure = create_warren_truss(12);
    c.bench_function("warren_truss_12_panels", |b| {
        b.iter(|| black_box(analyze(black_box(&structure), AnalysisType::Truss).unwrap()))
    });
}

fn benchmark_json_round_trip(c: &mut Criterion) {
    let mut request = serde_json::to_value(create_multi_story_frame(3, 2)).unwrap();
    request["analysis_type"] = serde_json::Value::from("frame");
    let input = request.to_string();
    c.bench_function("analyze_json_3story_2bay", |b| {
        b.iter(|| black_box(analyze_json(black_box(&input)).unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_cantilever,
    benchmark_small_frame,
    benchmark_medium_frame,
    benchmark_warren_truss,
    benchmark_json_round_trip,
);

criterion_main!(benches);
