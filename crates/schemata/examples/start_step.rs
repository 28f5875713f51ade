//! Example: Rendering a two-step flowchart
//!
//! This example builds a START terminal and a process step from descriptors,
//! connects their outlines and writes the result as SVG.

use schemata::{
    DiagramRenderer,
    descriptor::{ConnectorDescriptor, Diagram, ShapeDescriptor, ShapeKind},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building START/Step diagram...\n");

    // Coordinates are in diagram units with Y pointing up
    let start = ShapeDescriptor::new(ShapeKind::Terminal, 0.0, 0.0, 2.0, 0.8, "START", "#FF6B6B");
    let step = ShapeDescriptor::new(ShapeKind::Process, 0.0, -2.0, 2.0, 0.8, "Step", "#4ECDC4");

    // Clip the arrow to both outlines instead of hard-coding its endpoints
    let arrow = ConnectorDescriptor::between(&start, &step).with_label("next");

    let diagram = Diagram::new("start_step", "Example")
        .with_shapes([start, step])
        .with_connectors([arrow]);

    println!("Created diagram:");
    println!("  Shapes: {}", diagram.shapes().len());
    println!("  Connectors: {}", diagram.connectors().len());
    println!();

    let renderer = DiagramRenderer::default();
    let svg = renderer.render_svg(&diagram)?;
    println!("SVG length: {} bytes", svg.len());

    let output_path = "start_step.svg";
    renderer.render_diagram(&diagram, output_path)?;
    println!("SVG written to: {}", output_path);

    Ok(())
}
