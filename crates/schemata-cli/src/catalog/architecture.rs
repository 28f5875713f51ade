//! Tourmate architecture diagrams: layered architecture, module interaction,
//! data flow and the console interface mockups.

use schemata::descriptor::{
    AnnotationStyle, ConnectorDescriptor, Diagram, LegendEntry, ShapeDescriptor, ShapeKind,
    TextAlign, TextAnnotation,
};

pub fn diagrams() -> Vec<Diagram> {
    vec![
        layered_architecture(),
        module_interaction(),
        data_flow(),
        console_mockup(),
    ]
}

const LAYER_BORDER: &str = "#424242";
const LAYER_LEFT: f32 = 1.0;
const LAYER_WIDTH: f32 = 12.0;
const LAYER_HEIGHT: f32 = 1.5;
const COMPONENT_GAP: f32 = 0.2;
const COMPONENT_HEIGHT: f32 = 0.6;

struct Layer {
    name: &'static str,
    y: f32,
    fill: &'static str,
    components: &'static [&'static str],
}

static LAYERS: [Layer; 4] = [
    Layer {
        name: "Presentation Layer\n(Console Interface)",
        y: 8.0,
        fill: "#E3F2FD",
        components: &["Menu System", "Input/Output Handlers", "User Interface"],
    },
    Layer {
        name: "Business Logic Layer\n(Core Modules)",
        y: 6.0,
        fill: "#F3E5F5",
        components: &[
            "Auth Manager",
            "Vehicle Manager",
            "Sales Manager",
            "Company Manager",
        ],
    },
    Layer {
        name: "Data Access Layer\n(File Operations)",
        y: 4.0,
        fill: "#E8F5E8",
        components: &[
            "File I/O Manager",
            "Data Parser",
            "Backup Manager",
            "Error Handler",
        ],
    },
    Layer {
        name: "Storage Layer\n(CSV Files)",
        y: 2.0,
        fill: "#FFF3E0",
        components: &["vehicles.csv", "sales.csv", "users.csv", "company.csv"],
    },
];

fn layered_architecture() -> Diagram {
    let center_x = LAYER_LEFT + LAYER_WIDTH / 2.0;
    let mut shapes = Vec::new();
    let mut annotations = Vec::new();

    for layer in &LAYERS {
        shapes.push(
            ShapeDescriptor::new(
                ShapeKind::Process,
                center_x,
                layer.y + LAYER_HEIGHT / 2.0,
                LAYER_WIDTH,
                LAYER_HEIGHT,
                "",
                layer.fill,
            )
            .with_border(LAYER_BORDER, 2.0),
        );
        // The layer name sits in the band above the component row
        annotations.push(TextAnnotation::new(
            center_x,
            layer.y + 1.15,
            layer.name,
            AnnotationStyle::Heading,
        ));

        let count = layer.components.len() as f32;
        let width = LAYER_WIDTH / count - COMPONENT_GAP;
        for (i, &component) in layer.components.iter().enumerate() {
            let left = LAYER_LEFT + COMPONENT_GAP / 2.0 + i as f32 * (width + COMPONENT_GAP);
            shapes.push(
                ShapeDescriptor::new(
                    ShapeKind::Process,
                    left + width / 2.0,
                    layer.y + 0.5,
                    width,
                    COMPONENT_HEIGHT,
                    component,
                    "white",
                )
                .with_border(LAYER_BORDER, 1.0),
            );
        }
    }

    let connectors = LAYERS.windows(2).flat_map(|pair| {
        let (upper, lower) = (&pair[0], &pair[1]);
        (0..3).map(move |j| {
            let x = LAYER_LEFT + 2.0 + j as f32 * 4.0;
            ConnectorDescriptor::new((x, upper.y), (x, lower.y + LAYER_HEIGHT))
                .with_color(LAYER_BORDER)
                .with_width(2.0)
        })
    });

    Diagram::new(
        "layered_architecture",
        "Tourmate Vehicle Management System\nLayered Architecture",
    )
    .with_shapes(shapes)
    .with_connectors(connectors)
    .with_annotations(annotations)
}

static MODULES: [(&str, f32, f32, &str); 9] = [
    ("Main", 8.0, 10.0, "#FF6B6B"),
    ("MenuManager", 8.0, 8.0, "#4ECDC4"),
    ("AuthManager", 3.0, 6.0, "#45B7D1"),
    ("VehicleManager", 6.0, 6.0, "#96CEB4"),
    ("SalesManager", 10.0, 6.0, "#FECA57"),
    ("CompanyManager", 13.0, 6.0, "#FF9FF3"),
    ("FileManager", 8.0, 4.0, "#54A0FF"),
    ("InputValidator", 4.0, 2.0, "#5F27CD"),
    ("ErrorHandler", 12.0, 2.0, "#FF3838"),
];

const MODULE_LINKS: [(&str, &str); 14] = [
    ("Main", "MenuManager"),
    ("MenuManager", "AuthManager"),
    ("MenuManager", "VehicleManager"),
    ("MenuManager", "SalesManager"),
    ("MenuManager", "CompanyManager"),
    ("VehicleManager", "FileManager"),
    ("SalesManager", "FileManager"),
    ("AuthManager", "FileManager"),
    ("CompanyManager", "FileManager"),
    ("VehicleManager", "InputValidator"),
    ("SalesManager", "InputValidator"),
    ("AuthManager", "InputValidator"),
    ("FileManager", "ErrorHandler"),
    ("InputValidator", "ErrorHandler"),
];

/// Connects two shapes by label, or `None` if either label is unknown.
fn connect(shapes: &[ShapeDescriptor], from: &str, to: &str) -> Option<ConnectorDescriptor> {
    let find = |label: &str| shapes.iter().find(|shape| shape.label() == label);
    Some(ConnectorDescriptor::between(find(from)?, find(to)?))
}

fn module_interaction() -> Diagram {
    let shapes: Vec<_> = MODULES
        .iter()
        .map(|&(name, x, y, color)| {
            ShapeDescriptor::new(ShapeKind::Circle, x, y, 1.6, 1.6, name, color)
                .with_font_size(10)
                .with_bold(true)
                .with_label_color("white")
        })
        .collect();

    let connectors: Vec<_> = MODULE_LINKS
        .iter()
        .filter_map(|&(from, to)| connect(&shapes, from, to))
        .map(|connector| connector.with_color("gray").with_width(2.0))
        .collect();

    let legend = MODULES
        .iter()
        .map(|&(name, _, _, color)| LegendEntry::new(name, color));

    Diagram::new(
        "module_interaction",
        "Tourmate System Module Interaction Diagram",
    )
    .with_shapes(shapes)
    .with_connectors(connectors)
    .with_legend(legend)
}

const DATA_FLOWS: [(&str, &str, &str); 12] = [
    ("System User", "User Input", "Menu Selection"),
    ("User Input", "Validate Input", "Raw Input"),
    ("Validate Input", "Process Request", "Valid Data"),
    ("Process Request", "Update Data", "Business Logic"),
    ("Update Data", "Vehicle Files", "Vehicle Data"),
    ("Update Data", "Sales Files", "Sales Data"),
    ("Update Data", "User Files", "User Data"),
    ("Update Data", "Generate Output", "Updated Data"),
    ("Generate Output", "Display Result", "Formatted Output"),
    ("Display Result", "System User", "System Response"),
    ("Vehicle Files", "Backup Files", "Backup Data"),
    ("Administrator", "Process Request", "Admin Commands"),
];

/// `(kind, label, x, y, width, height, fill)`
type Node = (ShapeKind, &'static str, f32, f32, f32, f32, &'static str);

fn data_flow() -> Diagram {
    let processes: [Node; 6] = [
        ("User Input", 2.0, 8.0, "#FF6B6B"),
        ("Validate Input", 5.0, 8.0, "#4ECDC4"),
        ("Process Request", 8.0, 8.0, "#45B7D1"),
        ("Update Data", 11.0, 8.0, "#96CEB4"),
        ("Generate Output", 8.0, 5.0, "#FECA57"),
        ("Display Result", 5.0, 5.0, "#FF9FF3"),
    ]
    .map(|(name, x, y, fill)| (ShapeKind::Circle, name, x, y, 1.6, 1.6, fill));

    let stores: [Node; 4] = [
        ("Vehicle Files", 11.0, 5.0, "#E8F5E8"),
        ("Sales Files", 11.0, 3.5, "#E8F5E8"),
        ("User Files", 11.0, 2.0, "#E8F5E8"),
        ("Backup Files", 8.0, 2.0, "#FFF3E0"),
    ]
    .map(|(name, x, y, fill)| (ShapeKind::Process, name, x, y, 2.0, 0.8, fill));

    let entities: [Node; 2] = [("System User", 2.0, 5.0), ("Administrator", 2.0, 3.0)]
        .map(|(name, x, y)| (ShapeKind::Box, name, x, y, 1.5, 1.0, "#FFE4B5"));

    let shapes: Vec<_> = processes
        .into_iter()
        .chain(stores)
        .chain(entities)
        .map(|(kind, name, x, y, width, height, fill)| {
            ShapeDescriptor::new(kind, x, y, width, height, name, fill).with_bold(true)
        })
        .collect();

    let connectors: Vec<_> = DATA_FLOWS
        .iter()
        .filter_map(|&(from, to, label)| {
            connect(&shapes, from, to).map(|connector| connector.with_label(label))
        })
        .map(|connector| {
            connector
                .with_color("blue")
                .with_width(1.5)
                .with_label_font_size(7)
                .with_label_offset(0.0, 0.2)
        })
        .collect();

    Diagram::new("data_flow_diagram", "Tourmate System Data Flow Diagram")
        .with_shapes(shapes)
        .with_connectors(connectors)
}

const CONSOLE_BACKGROUND: &str = "#2E3440";
const CONSOLE_TEXT: &str = "#D8DEE9";
const CONSOLE_HIGHLIGHT: &str = "#88C0D0";
const PANEL_WIDTH: f32 = 7.0;
const PANEL_HEIGHT: f32 = 4.5;

const MAIN_MENU: &str = "\
======================================
    TOUR MATE MANAGEMENT SYSTEM
======================================
1. Vehicle Management
2. Sales Management\x20\x20
3. Company Information
4. User Management
5. System Backup
6. Exit System
======================================
Enter your choice (1-6): _";

const VEHICLE_MENU: &str = "\
======================================
      VEHICLE MANAGEMENT
======================================
1. View All Vehicles
2. Add New Vehicle
3. Update Vehicle Details
4. Delete Vehicle
5. Search Vehicles
6. Back to Main Menu
======================================
Enter your choice (1-6): _";

const VEHICLE_LIST: &str = "\
======================================
         VEHICLE LIST
======================================
ID | License   | Model        | Status
---|-----------|--------------|----------
1  | ABC-123   | Toyota Camry | Available
2  | XYZ-456   | Honda Civic  | In-Service
3  | DEF-789   | Ford Focus   | Maintenance
4  | GHI-012   | Hyundai Elan | Available
======================================
Total Vehicles: 4
Press any key to continue...";

const ADD_VEHICLE: &str = "\
======================================
        ADD NEW VEHICLE
======================================
License Plate: ABC-999
Vehicle Model: Toyota Corolla
Vehicle Year: 2023
Vehicle Type: Sedan
Seating Capacity: 5
Current Status: Available
Registration Date: 2024-10-11

======================================
Confirm addition? (Y/N): _";

fn console_mockup() -> Diagram {
    let panels = [
        (4.0, 8.0, "Main Menu Interface", MAIN_MENU, 10),
        (12.0, 8.0, "Vehicle Management Menu", VEHICLE_MENU, 10),
        (4.0, 2.0, "Vehicle List Display", VEHICLE_LIST, 9),
        (12.0, 2.0, "Add Vehicle Form", ADD_VEHICLE, 9),
    ];

    let shapes = panels.iter().map(|&(x, y, _, _, _)| {
        ShapeDescriptor::new(
            ShapeKind::Box,
            x,
            y,
            PANEL_WIDTH,
            PANEL_HEIGHT,
            "",
            CONSOLE_BACKGROUND,
        )
        .with_border(CONSOLE_BACKGROUND, 0.0)
    });

    let annotations = panels.iter().flat_map(|&(x, y, heading, text, size)| {
        let heading = TextAnnotation::new(
            x,
            y + PANEL_HEIGHT / 2.0 + 0.3,
            heading,
            AnnotationStyle::Heading,
        )
        .with_color(CONSOLE_HIGHLIGHT);
        let body = TextAnnotation::new(
            x - PANEL_WIDTH * 0.45,
            y + PANEL_HEIGHT / 2.0 - 0.25,
            text,
            AnnotationStyle::Console,
        )
        .with_color(CONSOLE_TEXT)
        .with_align(TextAlign::TopLeft)
        .with_font_size(size);
        [heading, body]
    });

    Diagram::new("console_interface_mockup", "Console Interface Design Mockups")
        .with_shapes(shapes)
        .with_annotations(annotations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_architecture_diagrams_are_valid() {
        for diagram in diagrams() {
            assert!(
                diagram.validate().is_ok(),
                "{} failed validation",
                diagram.name()
            );
        }
    }

    #[test]
    fn test_layered_architecture_contents() {
        let diagram = layered_architecture();
        // 4 layers and 15 components
        assert_eq!(diagram.shapes().len(), 19);
        // 3 arrows between each adjacent pair of layers
        assert_eq!(diagram.connectors().len(), 9);
        assert_eq!(diagram.annotations().len(), 4);

        let first = &diagram.connectors()[0];
        assert_eq!(first.start().x(), 3.0);
        assert_eq!(first.start().y(), 8.0);
        assert_eq!(first.end().y(), 7.5);
    }

    #[test]
    fn test_module_interaction_resolves_every_link() {
        let diagram = module_interaction();
        assert_eq!(diagram.shapes().len(), MODULES.len());
        assert_eq!(diagram.connectors().len(), 14);
        assert_eq!(diagram.legend().len(), 9);
        assert_eq!(diagram.legend()[0].label(), "Main");
    }

    #[test]
    fn test_data_flow_labels() {
        let diagram = data_flow();
        assert_eq!(diagram.shapes().len(), 12);
        assert_eq!(diagram.connectors().len(), 12);

        let labels: Vec<_> = diagram
            .connectors()
            .iter()
            .filter_map(|c| c.label())
            .collect();
        assert_eq!(labels.first(), Some(&"Menu Selection"));
        assert_eq!(labels.last(), Some(&"Admin Commands"));
        assert!(diagram.connectors().iter().all(|c| c.color() == Some("blue")));
    }

    #[test]
    fn test_connect_unknown_label() {
        let shapes = [ShapeDescriptor::new(
            ShapeKind::Circle,
            0.0,
            0.0,
            1.0,
            1.0,
            "A",
            "red",
        )];
        assert!(connect(&shapes, "A", "Missing").is_none());
    }

    #[test]
    fn test_console_text_is_kept_verbatim() {
        let diagram = console_mockup();
        assert_eq!(diagram.shapes().len(), 4);
        assert_eq!(diagram.annotations().len(), 8);

        let main_menu = &diagram.annotations()[1];
        assert!(main_menu.text().contains("2. Sales Management  \n"));
        assert!(main_menu.text().starts_with("===="));
        assert_eq!(main_menu.align(), TextAlign::TopLeft);
        assert_eq!(main_menu.font_size(), 10);
        assert_eq!(diagram.annotations()[7].font_size(), 9);
    }
}
