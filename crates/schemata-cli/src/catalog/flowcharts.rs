//! Tourmate flowcharts: main system, authentication, vehicle management and
//! file operations.

use schemata::descriptor::{
    ConnectorDescriptor, Diagram, ShapeDescriptor,
    ShapeKind::{self, Decision, InputOutput, Predefined, Process, Terminal},
};

const TEXT_COLOR: &str = "#2C3E50";
const ARROW_COLOR: &str = "#2C3E50";
const LABEL_FONT_SIZE: u16 = 9;
const ARROW_LABEL_FONT_SIZE: u16 = 8;
const ARROW_WIDTH: f32 = 2.0;

/// `(kind, x, y, width, height, label)`
type Symbol = (ShapeKind, f32, f32, f32, f32, &'static str);
/// `(start, end, label)`
type Flow = ((f32, f32), (f32, f32), Option<&'static str>);

fn fill_color(kind: ShapeKind) -> &'static str {
    match kind {
        Terminal => "#FF6B6B",
        Process => "#4ECDC4",
        Decision => "#FFE66D",
        InputOutput => "#95E1D3",
        Predefined => "#FFB3BA",
        ShapeKind::Box | ShapeKind::Circle => "white",
    }
}

fn flowchart(name: &str, title: &str, symbols: &[Symbol], flows: &[Flow]) -> Diagram {
    let shapes = symbols.iter().map(|&(kind, x, y, width, height, label)| {
        ShapeDescriptor::new(kind, x, y, width, height, label, fill_color(kind))
            .with_font_size(LABEL_FONT_SIZE)
            .with_bold(true)
            .with_label_color(TEXT_COLOR)
    });

    let connectors = flows.iter().map(|&(start, end, label)| {
        let connector = ConnectorDescriptor::new(start, end)
            .with_color(ARROW_COLOR)
            .with_width(ARROW_WIDTH)
            .with_label_font_size(ARROW_LABEL_FONT_SIZE);
        match label {
            Some(label) => connector.with_label(label),
            None => connector,
        }
    });

    Diagram::new(name, title)
        .with_shapes(shapes)
        .with_connectors(connectors)
}

pub fn diagrams() -> Vec<Diagram> {
    vec![
        main_system(),
        authentication(),
        vehicle_management(),
        file_operations(),
    ]
}

fn main_system() -> Diagram {
    let symbols: &[Symbol] = &[
        (Terminal, 8.0, 11.0, 2.0, 0.8, "START"),
        (Process, 8.0, 10.0, 2.5, 0.8, "Initialize System"),
        (Process, 8.0, 9.0, 2.5, 0.8, "Load Configuration"),
        (InputOutput, 8.0, 8.0, 2.5, 0.8, "Display Welcome Screen"),
        (Decision, 8.0, 7.0, 3.0, 1.0, "Authentication\nRequired?"),
        (Predefined, 12.0, 7.0, 2.5, 0.8, "Authentication\nModule"),
        (InputOutput, 8.0, 5.5, 2.5, 0.8, "Display Main Menu"),
        (InputOutput, 8.0, 4.5, 2.5, 0.8, "Get User Choice"),
        (Decision, 8.0, 3.5, 2.5, 1.0, "Valid Choice?"),
        (InputOutput, 4.0, 3.5, 2.0, 0.8, "Display Error"),
        (Decision, 8.0, 2.0, 3.0, 1.2, "Choice Analysis"),
        (Predefined, 3.0, 0.5, 2.0, 0.8, "Vehicle Module"),
        (Predefined, 6.0, 0.5, 2.0, 0.8, "Sales Module"),
        (Predefined, 10.0, 0.5, 2.0, 0.8, "Company Module"),
        (Predefined, 13.0, 0.5, 2.0, 0.8, "Exit Module"),
        (Terminal, 8.0, -1.0, 2.0, 0.8, "END"),
    ];

    let flows: &[Flow] = &[
        ((8.0, 10.6), (8.0, 10.4), None),
        ((8.0, 9.6), (8.0, 9.4), None),
        ((8.0, 8.6), (8.0, 8.4), None),
        ((8.0, 7.6), (8.0, 7.4), None),
        ((9.5, 7.0), (12.0, 7.0), Some("YES")),
        ((8.0, 6.5), (8.0, 6.0), Some("NO")),
        ((12.0, 6.6), (8.0, 6.0), None),
        ((8.0, 5.1), (8.0, 4.9), None),
        ((8.0, 4.1), (8.0, 4.0), None),
        ((6.75, 3.5), (4.0, 3.5), Some("NO")),
        ((4.0, 3.1), (4.0, 2.5), None),
        ((4.0, 2.5), (6.5, 2.5), None),
        ((8.0, 3.0), (8.0, 2.6), Some("YES")),
        ((6.5, 2.0), (3.0, 1.3), Some("Vehicle")),
        ((7.0, 2.0), (6.0, 1.3), Some("Sales")),
        ((9.0, 2.0), (10.0, 1.3), Some("Company")),
        ((9.5, 2.0), (13.0, 1.3), Some("Exit")),
        ((8.0, 0.5), (8.0, -0.6), None),
    ];

    flowchart(
        "main_system_flowchart",
        "Tourmate System - Main System Flowchart",
        symbols,
        flows,
    )
}

fn authentication() -> Diagram {
    let symbols: &[Symbol] = &[
        (Terminal, 8.0, 11.0, 2.5, 0.8, "START\nAuthentication"),
        (Process, 8.0, 10.0, 2.5, 0.8, "Initialize\nLogin Attempts = 0"),
        (InputOutput, 8.0, 9.0, 2.5, 0.8, "Display Login Screen"),
        (InputOutput, 8.0, 8.0, 2.5, 0.8, "Get Username\nand Password"),
        (Decision, 8.0, 7.0, 2.5, 1.0, "Username\nEmpty?"),
        (InputOutput, 12.0, 7.0, 2.0, 0.8, "Display Username\nRequired"),
        (Decision, 8.0, 5.5, 2.5, 1.0, "Password\nEmpty?"),
        (InputOutput, 12.0, 5.5, 2.0, 0.8, "Display Password\nRequired"),
        (Process, 8.0, 4.0, 2.5, 0.8, "Validate User\nCredentials"),
        (Decision, 8.0, 2.8, 2.5, 1.0, "Valid\nCredentials?"),
        (Process, 12.0, 2.8, 2.0, 0.8, "Increment\nLogin Attempts"),
        (Process, 4.0, 2.8, 2.0, 0.8, "Set User\nSession"),
        (Decision, 12.0, 1.5, 2.0, 1.0, "Attempts\n> 3?"),
        (InputOutput, 15.0, 1.5, 1.8, 0.8, "Lock Account"),
        (InputOutput, 12.0, 0.2, 2.0, 0.8, "Display Error\nMessage"),
        (InputOutput, 4.0, 1.5, 2.0, 0.8, "Display Welcome\nMessage"),
        (Decision, 12.0, -1.0, 2.0, 1.0, "Try Again?"),
        (Terminal, 4.0, 0.2, 2.0, 0.8, "RETURN\nSUCCESS"),
        (Terminal, 15.0, 0.2, 1.8, 0.8, "RETURN\nLOCKED"),
        (Terminal, 12.0, -2.5, 2.0, 0.8, "RETURN\nFAILED"),
    ];

    let flows: &[Flow] = &[
        ((8.0, 10.6), (8.0, 10.4), None),
        ((8.0, 9.6), (8.0, 9.4), None),
        ((8.0, 8.6), (8.0, 8.4), None),
        ((8.0, 7.6), (8.0, 7.4), None),
        ((9.25, 7.0), (12.0, 7.0), Some("YES")),
        ((8.0, 6.5), (8.0, 6.0), Some("NO")),
        ((12.0, 6.6), (12.0, 6.0), None),
        ((12.0, 6.0), (8.5, 6.0), None),
        ((9.25, 5.5), (12.0, 5.5), Some("YES")),
        ((8.0, 5.0), (8.0, 4.4), Some("NO")),
        ((12.0, 5.1), (12.0, 4.8), None),
        ((12.0, 4.8), (8.5, 4.8), None),
        ((8.0, 3.6), (8.0, 3.3), None),
        ((9.25, 2.8), (12.0, 2.8), Some("NO")),
        ((6.75, 2.8), (4.0, 2.8), Some("YES")),
        ((12.0, 2.4), (12.0, 2.0), None),
        ((12.0, 2.0), (15.0, 2.0), Some("YES")),
        ((12.0, 1.0), (12.0, 0.6), Some("NO")),
        ((4.0, 2.4), (4.0, 1.9), None),
        ((15.0, 1.1), (15.0, 0.6), None),
        ((4.0, 1.1), (4.0, 0.6), None),
        ((12.0, -0.2), (12.0, -0.5), None),
        ((11.0, -1.0), (8.5, 8.5), Some("YES")),
        ((12.0, -1.5), (12.0, -2.1), Some("NO")),
    ];

    flowchart(
        "authentication_flowchart",
        "Tourmate System - Authentication Module Flowchart",
        symbols,
        flows,
    )
}

fn vehicle_management() -> Diagram {
    let symbols: &[Symbol] = &[
        (Terminal, 8.0, 11.0, 2.5, 0.8, "START\nVehicle Management"),
        (InputOutput, 8.0, 10.0, 2.5, 0.8, "Display Vehicle Menu"),
        (InputOutput, 8.0, 9.0, 2.5, 0.8, "Get User Choice"),
        (Decision, 8.0, 7.5, 3.0, 1.5, "Choice\nAnalysis"),
        (Predefined, 2.0, 6.0, 2.0, 0.8, "Display All\nVehicles"),
        (Predefined, 4.5, 6.0, 2.0, 0.8, "Add Vehicle\nFunction"),
        (Predefined, 7.0, 6.0, 2.0, 0.8, "Update Vehicle\nFunction"),
        (Predefined, 9.5, 6.0, 2.0, 0.8, "Delete Vehicle\nFunction"),
        (Predefined, 12.0, 6.0, 2.0, 0.8, "Search Vehicle\nFunction"),
        (Terminal, 14.5, 6.0, 1.5, 0.8, "RETURN\nTO MAIN"),
        (InputOutput, 8.0, 4.5, 2.5, 0.8, "Display Invalid\nChoice Error"),
        (Decision, 8.0, 3.0, 2.5, 1.0, "Continue?"),
        (Terminal, 8.0, 1.5, 2.0, 0.8, "RETURN\nTO MAIN"),
    ];

    let flows: &[Flow] = &[
        ((8.0, 10.6), (8.0, 10.4), None),
        ((8.0, 9.6), (8.0, 9.4), None),
        ((8.0, 8.6), (8.0, 8.25), None),
        ((6.5, 7.5), (2.0, 6.8), Some("1: View All")),
        ((7.0, 7.5), (4.5, 6.8), Some("2: Add New")),
        ((7.5, 7.5), (7.0, 6.8), Some("3: Update")),
        ((8.5, 7.5), (9.5, 6.8), Some("4: Delete")),
        ((9.0, 7.5), (12.0, 6.8), Some("5: Search")),
        ((9.5, 7.5), (14.5, 6.8), Some("6: Back")),
        ((8.0, 6.75), (8.0, 4.9), Some("Invalid")),
        ((8.0, 4.1), (8.0, 3.5), None),
        ((9.25, 3.0), (9.5, 8.5), Some("YES")),
        ((8.0, 2.5), (8.0, 1.9), Some("NO")),
        // Return paths from the vehicle functions
        ((2.0, 5.6), (2.0, 4.0), None),
        ((2.0, 4.0), (6.5, 4.0), None),
        ((4.5, 5.6), (4.5, 4.2), None),
        ((7.0, 5.6), (7.0, 4.4), None),
        ((9.5, 5.6), (9.5, 4.6), None),
        ((12.0, 5.6), (12.0, 4.8), None),
    ];

    flowchart(
        "vehicle_management_flowchart",
        "Tourmate System - Vehicle Management Module Flowchart",
        symbols,
        flows,
    )
}

fn file_operations() -> Diagram {
    let symbols: &[Symbol] = &[
        (Terminal, 7.0, 9.0, 2.5, 0.8, "START\nFile Operations"),
        (Decision, 7.0, 7.5, 3.0, 1.5, "Operation\nType?"),
        (Process, 3.0, 6.0, 2.0, 0.8, "Check File\nExists"),
        (Process, 7.0, 6.0, 2.0, 0.8, "Open File"),
        (Process, 11.0, 6.0, 2.0, 0.8, "Create Backup\nCopy"),
        (Decision, 3.0, 4.5, 2.0, 1.0, "File\nExists?"),
        (InputOutput, 1.0, 4.5, 1.5, 0.8, "Display File\nNot Found"),
        (Process, 3.0, 3.0, 2.0, 0.8, "Create Empty\nRecords"),
        (Decision, 7.0, 4.5, 2.0, 1.0, "File\nOpen?"),
        (InputOutput, 10.0, 4.5, 2.0, 0.8, "Display File\nError"),
        (Process, 7.0, 3.0, 2.0, 0.8, "Read/Write\nData"),
        (Process, 10.0, 3.0, 1.5, 0.8, "Log Error"),
        (Decision, 7.0, 1.5, 2.5, 1.0, "Operation\nSuccess?"),
        (InputOutput, 10.5, 1.5, 2.0, 0.8, "Display Operation\nError"),
        (Process, 7.0, 0.0, 2.0, 0.8, "Close File"),
        (Terminal, 7.0, -1.5, 2.0, 0.8, "RETURN\nSUCCESS"),
    ];

    let flows: &[Flow] = &[
        ((7.0, 8.6), (7.0, 8.25), None),
        ((5.5, 7.5), (3.0, 6.8), Some("LOAD")),
        ((7.0, 6.75), (7.0, 6.8), Some("SAVE")),
        ((8.5, 7.5), (11.0, 6.8), Some("BACKUP")),
        ((3.0, 5.6), (3.0, 5.0), None),
        ((2.0, 4.5), (1.0, 4.5), Some("NO")),
        ((3.0, 4.0), (3.0, 3.4), Some("YES")),
        ((3.0, 2.6), (5.5, 2.6), None),
        ((7.0, 5.6), (7.0, 5.0), None),
        ((8.0, 4.5), (10.0, 4.5), Some("NO")),
        ((7.0, 4.0), (7.0, 3.4), Some("YES")),
        ((10.0, 4.1), (10.0, 3.4), None),
        ((7.0, 2.6), (7.0, 2.0), None),
        ((8.25, 1.5), (10.5, 1.5), Some("NO")),
        ((7.0, 1.0), (7.0, 0.4), Some("YES")),
        ((7.0, -0.4), (7.0, -1.1), None),
    ];

    flowchart(
        "file_operations_flowchart",
        "Tourmate System - File Operations Module Flowchart",
        symbols,
        flows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flowcharts_are_valid() {
        for diagram in diagrams() {
            assert!(
                diagram.validate().is_ok(),
                "{} failed validation",
                diagram.name()
            );
        }
    }

    #[test]
    fn test_main_system_contents() {
        let diagram = main_system();
        assert_eq!(diagram.shapes().len(), 16);
        assert_eq!(diagram.connectors().len(), 18);

        let labelled: Vec<_> = diagram
            .connectors()
            .iter()
            .filter_map(|c| c.label())
            .collect();
        assert_eq!(
            labelled,
            ["YES", "NO", "NO", "YES", "Vehicle", "Sales", "Company", "Exit"]
        );
    }

    #[test]
    fn test_symbol_presets() {
        let diagram = authentication();
        let decision = diagram
            .shapes()
            .iter()
            .find(|s| s.kind() == Decision)
            .unwrap();

        assert_eq!(decision.fill_color(), "#FFE66D");
        assert!(decision.label_style().bold());
        assert_eq!(decision.label_style().font_size(), 9);
        assert_eq!(decision.label_style().color(), Some(TEXT_COLOR));
        assert_eq!(diagram.connectors()[0].color(), Some(ARROW_COLOR));
    }
}
