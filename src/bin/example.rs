//! Frame Solver Example - Motorcycle chassis side view and a roof truss

use frame_solver::prelude::*;

fn chassis() -> anyhow::Result<Structure> {
    // Simplified side view of a trellis frame (metres)
    //
    //   HEAD ------- SEAT
    //     \        /  |
    //      \      /   |
    //      DOWN--+---SWING
    //
    let steel = Material::chromoly();
    let main_tube = Section::round_tube(0.0286, 0.0016);
    let brace_tube = Section::round_tube(0.0222, 0.0012);

    let mut s = Structure::new();
    s.add_node(Node::new("HEAD", 0.0, 0.60).with_constraints(NodeConstraint::pinned()))?;
    s.add_node(Node::new("SEAT", 0.70, 0.62))?;
    s.add_node(Node::new("DOWN", 0.15, 0.10))?;
    s.add_node(Node::new("SWING", 0.72, 0.15).with_constraints(NodeConstraint::roller_y()))?;

    s.add_member(Member::from_section("TOP", "HEAD", "SEAT", &steel, &main_tube))?;
    s.add_member(Member::from_section("FRONT", "HEAD", "DOWN", &steel, &main_tube))?;
    s.add_member(Member::from_section("LOWER", "DOWN", "SWING", &steel, &main_tube))?;
    s.add_member(Member::from_section("REAR", "SEAT", "SWING", &steel, &brace_tube))?;
    s.add_member(Member::from_section("DIAG", "DOWN", "SEAT", &steel, &brace_tube))?;

    // Rider on the seat, engine hung from the lower rail
    s.add_load(NodeLoad::fy("SEAT", -900.0));
    s.add_load(NodeLoad::fy("DOWN", -600.0));
    s.add_load(NodeLoad::new("DOWN", 150.0, 0.0, 20.0));

    Ok(s)
}

fn roof_truss() -> anyhow::Result<Structure> {
    let section = Section::square_tube(0.05, 0.003);
    let steel = Material::steel();

    let mut s = Structure::new();
    s.add_node(Node::new("A", 0.0, 0.0).with_constraints(NodeConstraint::pinned()))?;
    s.add_node(Node::new("B", 6.0, 0.0).with_constraints(NodeConstraint::roller_y()))?;
    s.add_node(Node::new("C", 3.0, 2.0))?;
    s.add_member(Member::from_section("AB", "A", "B", &steel, &section))?;
    s.add_member(Member::from_section("AC", "A", "C", &steel, &section))?;
    s.add_member(Member::from_section("BC", "B", "C", &steel, &section))?;
    s.add_load(NodeLoad::fy("C", -10_000.0));

    Ok(s)
}

fn print_results(title: &str, results: &AnalysisResults) {
    println!("=== {} ===\n", title);

    println!("Node Displacements:");
    for d in &results.displacements {
        println!(
            "  {:6} ux = {:+.4e}  uy = {:+.4e}  rz = {:+.4e}",
            d.id, d.ux, d.uy, d.rotation
        );
    }

    println!("\nMember Forces:");
    for f in &results.internal_forces {
        println!(
            "  {:6} N = {:+10.2}  V = {:+10.2} / {:+10.2}  M = {:+10.2} / {:+10.2}",
            f.id, f.axial, f.shear_start, f.shear_end, f.moment_start, f.moment_end
        );
    }

    println!("\nReactions:");
    for r in &results.reactions {
        println!(
            "  {:6} Fx = {:+10.2}  Fy = {:+10.2}  M = {:+10.2}",
            r.id, r.fx, r.fy, r.moment
        );
    }

    let summary = results.summary();
    println!(
        "\nMax displacement {:.4e} at {}, max axial {:+.2} in {}\n",
        summary.max_displacement, summary.max_disp_node, summary.max_axial, summary.max_axial_member
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let frame = chassis()?;
    print_results("Chassis (frame)", &analyze(&frame, AnalysisType::Frame)?);

    let truss = roof_truss()?;
    print_results("Roof truss (truss)", &analyze(&truss, AnalysisType::Truss)?);

    Ok(())
}
