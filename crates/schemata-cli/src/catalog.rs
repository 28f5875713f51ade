//! The built-in Tourmate diagram catalog.
//!
//! Every diagram is a plain [`Diagram`] value; its name doubles as the output
//! file stem.

mod architecture;
mod flowcharts;

use schemata::descriptor::Diagram;

use crate::Category;

/// Builds the diagrams of `category`, architecture diagrams first.
pub fn diagrams(category: Category) -> Vec<Diagram> {
    match category {
        Category::All => {
            let mut all = architecture::diagrams();
            all.extend(flowcharts::diagrams());
            all
        }
        Category::Architecture => architecture::diagrams(),
        Category::Flowcharts => flowcharts::diagrams(),
    }
}

/// Names of the diagrams of `category`, in render order.
pub fn names(category: Category) -> Vec<String> {
    diagrams(category)
        .into_iter()
        .map(|diagram| diagram.name().to_string())
        .collect()
}
